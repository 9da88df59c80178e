//=============================================================================
// File: src/screens/roster.rs
//=============================================================================
use crate::app_state::AppState;
use crate::components::activities_panel::ActivitiesPanel;
use crate::components::message_area::MessageArea;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::signup_form::SignupForm;
use crate::controller;
use crate::controller::SystemPrompter;
use crate::hooks::use_flash_message::use_flash_message_provider;
use crate::roster::LoadState;
use crate::roster::RosterAction;
use crate::roster::SignupDraft;
use dioxus::prelude::*;
use futures::StreamExt;

/// The whole board: the activity list on one side, the signup form and its
/// message area on the other.
#[component]
pub fn RosterScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut flash = use_flash_message_provider();
    let mut draft = use_signal(SignupDraft::default);

    // Restarting cancels a load still in flight, so the newest fetch is the one rendered.
    let state = app_state.clone();
    let mut catalog = use_resource(move || {
        let state = state.clone();
        async move { controller::load_activities(&state.api).await }
    });

    // Single handler for every roster action. Each action runs as its own
    // task, so a slow request never holds up the next click.
    use_coroutine(move |mut rx: UnboundedReceiver<RosterAction>| {
        let state = app_state.clone();
        async move {
            while let Some(action) = rx.next().await {
                let state = state.clone();
                match action {
                    RosterAction::Refresh => catalog.restart(),
                    RosterAction::Signup {
                        activity: activity_name,
                        email: address,
                    } => {
                        spawn(async move {
                            let outcome =
                                controller::request_signup(&state.api, &activity_name, &address)
                                    .await;
                            flash.show(outcome.message().clone());
                            draft.write().settle(&outcome);
                            if outcome.is_accepted() {
                                catalog.restart();
                            }
                        });
                    }
                    RosterAction::Unregister {
                        activity: activity_name,
                        email: address,
                    } => {
                        spawn(async move {
                            let outcome = controller::request_unregister(
                                &state.api,
                                &SystemPrompter,
                                &activity_name,
                                &address,
                            )
                            .await;
                            if outcome.is_removed() {
                                catalog.restart();
                            }
                        });
                    }
                }
            }
        }
    });

    let resource = catalog.read();
    let activity_names = LoadState::from_resource((*resource).as_ref()).activity_names();

    rsx! {
        Grid {
            Card {
                ActivitiesPanel { catalog }
            }
            Card {
                section {
                    id: "signup-container",
                    h3 { "Sign Up for an Activity" }
                    SignupForm {
                        activity_names,
                        draft,
                    }
                    MessageArea {}
                }
            }
        }
    }
}
