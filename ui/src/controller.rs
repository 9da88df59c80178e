//! The fetch/submit operations behind the roster screen.
//!
//! Each operation talks to an [`ActivityApi`] and turns the result into what
//! the view needs: a catalog, a transient message, or a blocking alert. None
//! of them touch signals, so the screen decides how outcomes land on the page
//! and tests can drive them with an in-memory API.

use crate::compat;
use crate::message::TransientMessage;
use api::ActivityApi;
use api::ActivityCatalog;
use api::ApiError;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_NETWORK_ERROR: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK_ERROR: &str = "Failed to remove participant.";
pub const UNREGISTER_NETWORK_ERROR: &str = "Error removing participant.";

/// Blocking yes/no and notice dialogs.
pub trait Prompter {
    async fn confirm(&self, message: &str) -> bool;
    async fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert` in the browser, message dialogs elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemPrompter;

impl Prompter for SystemPrompter {
    async fn confirm(&self, message: &str) -> bool {
        compat::confirm(message).await
    }

    async fn alert(&self, message: &str) {
        compat::alert(message).await
    }
}

/// Fetches the whole catalog. The caller replaces everything it rendered
/// with the result.
pub async fn load_activities(api: &impl ActivityApi) -> Result<ActivityCatalog, ApiError> {
    match api.activities().await {
        Ok(catalog) => {
            info!("loaded {} activities", catalog.len());
            Ok(catalog)
        }
        Err(e) => {
            error!("Error fetching activities: {}", e);
            Err(e)
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum SignupOutcome {
    /// The server enrolled the student: reset the form and reload.
    Accepted(TransientMessage),
    /// Nothing changed on the server: keep the form as typed.
    Refused(TransientMessage),
}

impl SignupOutcome {
    pub fn message(&self) -> &TransientMessage {
        match self {
            SignupOutcome::Accepted(message) | SignupOutcome::Refused(message) => message,
        }
    }
}

pub async fn request_signup(
    api: &impl ActivityApi,
    activity: &str,
    email: &str,
) -> SignupOutcome {
    match api.signup(activity, email).await {
        Ok(reply) => {
            let text = reply
                .message
                .unwrap_or_else(|| format!("Signed up {email} for {activity}"));
            info!("{}", text);
            SignupOutcome::Accepted(TransientMessage::success(text))
        }
        Err(e) if e.is_unanswered() => {
            error!("Error signing up: {}", e);
            SignupOutcome::Refused(TransientMessage::error(SIGNUP_NETWORK_ERROR))
        }
        Err(e) => {
            warn!("signup for {} refused: {}", activity, e);
            let text = e.detail().unwrap_or(SIGNUP_FALLBACK_ERROR);
            SignupOutcome::Refused(TransientMessage::error(text))
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum UnregisterOutcome {
    /// The user answered "no"; no request was sent.
    Declined,
    /// The server removed the participant: reload.
    Removed,
    /// The request failed and the user was alerted with this text.
    Failed(String),
}

/// Asks for confirmation, then removes `email` from `activity`.
///
/// Failures are reported through [`Prompter::alert`] rather than the
/// transient message area.
pub async fn request_unregister(
    api: &impl ActivityApi,
    prompter: &impl Prompter,
    activity: &str,
    email: &str,
) -> UnregisterOutcome {
    if !prompter
        .confirm(&format!("Remove {email} from {activity}?"))
        .await
    {
        return UnregisterOutcome::Declined;
    }

    let text = match api.unregister(activity, email).await {
        Ok(_) => {
            info!("removed {} from {}", email, activity);
            return UnregisterOutcome::Removed;
        }
        Err(e) if e.is_unanswered() => {
            error!("Error removing participant: {}", e);
            UNREGISTER_NETWORK_ERROR.to_string()
        }
        Err(e) => {
            warn!("unregister from {} refused: {}", activity, e);
            e.detail().unwrap_or(UNREGISTER_FALLBACK_ERROR).to_string()
        }
    };

    prompter.alert(&text).await;
    UnregisterOutcome::Failed(text)
}
