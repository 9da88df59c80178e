use crate::hooks::use_flash_message::use_flash_message;
use dioxus::prelude::*;

/// The transient message slot. Always present in the page; hidden by class
/// when nothing is showing.
#[component]
pub fn MessageArea() -> Element {
    let flash = use_flash_message();
    let signal = flash.board();
    let board = signal.read();
    let text = board.current().map(|message| message.text.as_str()).unwrap_or("");

    rsx! {
        div {
            id: "message",
            class: "{board.class()}",
            role: "status",
            "{text}"
        }
    }
}
