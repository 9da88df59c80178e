// File: src/components/activities_panel.rs
use crate::components::activity_card::ActivityCard;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::roster::LoadState;
use crate::roster::RosterAction;
use crate::roster::LOAD_FAILURE_NOTICE;
use api::ActivityCatalog;
use api::ApiError;
use dioxus::prelude::*;

/// The "Available Activities" region: the refresh control and the list of
/// cards, driven by the catalog resource.
///
/// A refresh keeps showing the previous result while the new fetch runs; the
/// control reports the fetch through `aria-busy`.
#[component]
pub fn ActivitiesPanel(catalog: Resource<Result<ActivityCatalog, ApiError>>) -> Element {
    let actions = use_coroutine_handle::<RosterAction>();
    // Reading the state subscribes, so a restart re-renders the control.
    let fetching = matches!(*catalog.state().read(), UseResourceState::Pending);
    let resource = catalog.read();
    let load_state = LoadState::from_resource((*resource).as_ref());

    rsx! {
        section {
            id: "activities-container",
            header {
                h3 { "Available Activities" }
                Button {
                    secondary: true,
                    outline: true,
                    busy: fetching,
                    on_click: move |_| actions.send(RosterAction::Refresh),
                    "Refresh"
                }
            }
            div {
                id: "activities-list",
                match load_state {
                    LoadState::Loading => rsx! {
                        p { "Loading activities..." }
                        progress {}
                    },
                    LoadState::LoadFailed => rsx! {
                        p { "{LOAD_FAILURE_NOTICE}" }
                    },
                    LoadState::Loaded(loaded) if loaded.is_empty() => rsx! {
                        EmptyState {
                            title: "No activities yet".to_string(),
                            description: Some("Check back later for new activities.".to_string()),
                        }
                    },
                    LoadState::Loaded(loaded) => rsx! {
                        for (name, details) in loaded.iter() {
                            ActivityCard {
                                key: "{name}",
                                name: name.to_string(),
                                activity: details.clone(),
                            }
                        }
                    },
                }
            }
        }
    }
}
