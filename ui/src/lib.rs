// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
pub mod components;
pub mod controller;
pub mod hooks;
pub mod message;
pub mod roster;
mod screens;

use api::ApiConfig;
use api::ApiError;
use app_state::AppState;
use components::pico::Container;
use screens::roster::RosterScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let board_css = r#"
    .app-main-container header h1 { margin-bottom: 0.25rem; }

    #activities-container header {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .activity-card {
        margin-bottom: 1rem;
        padding: 1rem;
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
    }

    .participants-list { list-style: none; padding-left: 0; margin-bottom: 0.25rem; }
    .participant-item { display: flex; align-items: center; justify-content: space-between; }
    .participant-item .delete-participant { width: auto; margin: 0; padding: 0 0.5rem; background: none; border: none; }
    .participants-more, .participants-empty { color: var(--pico-muted-color); font-style: italic; }

    #message { margin-top: 1rem; padding: 0.75rem; border-radius: var(--pico-border-radius); }
    #message.success { background-color: #e8f5e9; color: #1b5e20; }
    #message.error { background-color: #ffebee; color: #b71c1c; }
    #message.hidden { display: none; }

    .empty-state { padding: 2rem; text-align: center; color: var(--pico-muted-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Mergington High School Activities" }
        style {
            "{board_css}"
        }
        AppBody {}
    }
}

/// Same-origin in the browser, `ROSTER_API_BASE_URL` elsewhere.
fn resolve_api_config() -> Result<ApiConfig, ApiError> {
    match compat::page_origin() {
        Some(origin) => ApiConfig::new(&origin),
        None => ApiConfig::from_env(),
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        resolve_api_config().map(AppState::new).map_err(|e| {
            dioxus_logger::tracing::error!("cannot locate the activities api: {}", e);
            e.to_string()
        })
    });

    match app_state {
        Ok(app_state) => rsx! {
            LoadedApp {
                app_state,
            }
        },
        Err(e) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
    }
}

/// This component holds the main app logic and only runs once the API location is known.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    h1 { "Mergington High School" }
                    h2 { "Extracurricular Activities" }
                }
                div {
                    class: "content",
                    RosterScreen {}
                }
            }
        }
    }
}
