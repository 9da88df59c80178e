// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Blocking yes/no prompt. A missing window counts as "no".
    pub async fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    pub async fn alert(message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    /// `window.location.origin`, e.g. `http://localhost:8000`.
    pub fn page_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use rfd::AsyncMessageDialog;
    use rfd::MessageButtons;
    use rfd::MessageDialogResult;
    use rfd::MessageLevel;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn confirm(message: &str) -> bool {
        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        matches!(answer, MessageDialogResult::Yes)
    }

    pub async fn alert(message: &str) {
        AsyncMessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    }

    /// There is no page outside the browser; callers fall back to `ApiConfig::from_env`.
    pub fn page_origin() -> Option<String> {
        None
    }
}
