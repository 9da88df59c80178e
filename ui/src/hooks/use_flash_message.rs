use crate::message::MessageBoard;
use crate::message::TransientMessage;
use crate::message::MESSAGE_DURATION;
use dioxus::core::Task;
use dioxus::prelude::*;

/// Owned state of the message area: the board and its one pending auto-hide.
#[derive(Clone, Copy)]
pub struct FlashMessage {
    board: Signal<MessageBoard>,
    pending_hide: Signal<Option<Task>>,
}

impl FlashMessage {
    /// Shows `message` right away and schedules it to hide after [`MESSAGE_DURATION`].
    ///
    /// The auto-hide of the previous message is cancelled first, so there is
    /// never more than one timer alive.
    pub fn show(&mut self, message: TransientMessage) {
        if let Some(task) = self.pending_hide.take() {
            task.cancel();
        }

        let ticket = self.board.write().post(message);
        let mut board = self.board;
        let task = spawn(async move {
            crate::compat::sleep(MESSAGE_DURATION).await;
            board.write().expire(ticket);
        });
        self.pending_hide.set(Some(task));
    }

    /// Read handle for rendering. Reading it subscribes the caller.
    pub fn board(&self) -> Signal<MessageBoard> {
        self.board
    }
}

/// Creates the message state and provides it to every descendant.
pub fn use_flash_message_provider() -> FlashMessage {
    let board = use_signal(MessageBoard::default);
    let pending_hide = use_signal(|| None);
    use_context_provider(|| FlashMessage {
        board,
        pending_hide,
    })
}

pub fn use_flash_message() -> FlashMessage {
    use_context::<FlashMessage>()
}
