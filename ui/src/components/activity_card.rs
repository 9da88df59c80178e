// File: src/components/activity_card.rs
use crate::roster::ParticipantPreview;
use crate::roster::RosterAction;
use crate::roster::NO_PARTICIPANTS_NOTICE;
use api::Activity;
use dioxus::prelude::*;

/// One participant with its removal control.
///
/// The control only dispatches a [`RosterAction::Unregister`] keyed by the
/// row's activity and email; confirmation and the request happen in the
/// roster screen's action handler.
#[component]
fn ParticipantRow(activity: String, email: String) -> Element {
    let actions = use_coroutine_handle::<RosterAction>();
    let remove = RosterAction::Unregister {
        activity: activity.clone(),
        email: email.clone(),
    };

    rsx! {
        li {
            class: "participant-item",
            "data-activity": "{activity}",
            "data-email": "{email}",
            span {
                class: "participant-email",
                "{email}"
            }
            button {
                class: "delete-participant",
                r#type: "button",
                title: "Remove participant",
                "aria-label": "Remove participant",
                onclick: move |_| actions.send(remove.clone()),
                span {
                    class: "delete-icon",
                    "🗑️"
                }
            }
        }
    }
}

/// Renders one activity: description, schedule, remaining capacity and a
/// preview of the roster.
#[component]
pub fn ActivityCard(name: String, activity: Activity) -> Element {
    let preview = ParticipantPreview::new(&activity.participants);
    let spots_left = activity.spots_left();

    rsx! {
        div {
            class: "activity-card",
            h4 { "{name}" }
            p { "{activity.description}" }
            p {
                strong { "Schedule:" }
                " {activity.schedule}"
            }
            p {
                strong { "Availability:" }
                " {spots_left} spots left"
            }
            if preview.is_empty() {
                p {
                    class: "participants-empty",
                    "{NO_PARTICIPANTS_NOTICE}"
                }
            } else {
                div {
                    class: "participants",
                    strong { "Participants" }
                    ul {
                        class: "participants-list",
                        for (index, email) in preview.shown().iter().enumerate() {
                            ParticipantRow {
                                key: "{index}",
                                activity: name.clone(),
                                email: email.clone(),
                            }
                        }
                    }
                    if let Some(more) = preview.hidden_count() {
                        div {
                            class: "participants-more",
                            "and {more} more"
                        }
                    }
                }
            }
        }
    }
}
