// File: src/components/signup_form.rs
use crate::roster::RosterAction;
use crate::roster::SignupDraft;
use dioxus::prelude::*;

/// The signup form. Its field values live in a draft owned by the roster
/// screen so a successful signup can reset them.
#[component]
pub fn SignupForm(activity_names: Vec<String>, draft: Signal<SignupDraft>) -> Element {
    let actions = use_coroutine_handle::<RosterAction>();
    let mut draft = draft;
    let SignupDraft { email, activity } = draft();

    rsx! {
        form {
            id: "signup-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let SignupDraft { email, activity } = draft();
                actions.send(RosterAction::Signup { activity, email });
            },
            div {
                class: "form-group",
                label {
                    r#for: "email",
                    "Student Email:"
                }
                input {
                    r#type: "email",
                    id: "email",
                    name: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: "{email}",
                    oninput: move |evt| draft.write().email = evt.value(),
                }
            }
            div {
                class: "form-group",
                label {
                    r#for: "activity",
                    "Select Activity:"
                }
                select {
                    id: "activity",
                    name: "activity",
                    required: true,
                    value: "{activity}",
                    onchange: move |evt| draft.write().activity = evt.value(),
                    option {
                        value: "",
                        "-- Select an activity --"
                    }
                    for name in activity_names {
                        option {
                            key: "{name}",
                            value: "{name}",
                            "{name}"
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                "Sign Up"
            }
        }
    }
}
