//! Confirm dialog state.
//!
//! Data model for confirmation dialogs (discarding an edited draft,
//! quitting with unsaved changes). The rendering widget lives in
//! pdeck-tui. Dismissing a dialog just closes it; confirming dispatches
//! the stored message.

use crate::message::Message;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Dispatched on `y`/Enter.
    pub on_confirm: Message,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(title: impl Into<String>, message: impl Into<String>, on_confirm: Message) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm,
        }
    }

    /// Dialog shown when cancelling an edit session with uncommitted changes.
    pub fn discard_draft() -> Self {
        Self::new(
            "Discard changes?",
            "The draft has unsaved changes. Discard them and return to view?",
            Message::CancelEdit,
        )
    }

    /// Dialog shown when quitting while an edited draft exists.
    pub fn quit_with_draft() -> Self {
        Self::new(
            "Quit Profile Deck?",
            "The draft has unsaved changes. Quit and lose them?",
            Message::Quit,
        )
    }
}
