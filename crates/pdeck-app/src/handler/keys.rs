//! Key event handlers for the page modes

use pdeck_core::FieldPath;

use crate::form::FormEntry;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Mode};

/// Convert key events to messages based on current page mode
pub fn handle_key(state: &AppState, key: &InputKey) -> Option<Message> {
    if state.dialog.is_some() {
        return handle_key_dialog(key);
    }
    match state.mode {
        Mode::View => handle_key_view(state, key),
        Mode::Edit => {
            if state.form.editing {
                handle_key_field_editing(key)
            } else {
                handle_key_edit(state, key)
            }
        }
    }
}

/// Handle key events while a confirmation dialog is up
fn handle_key_dialog(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::DialogConfirm),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::DialogDismiss),
        // Force quit even with a dialog up
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in View mode
///
/// No edit controls exist here; only scrolling, mode entry, and
/// navigation are reachable.
fn handle_key_view(state: &AppState, key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),

        // Edit and KYC are not offered to officers
        InputKey::Char('e') if state.session.can_edit() => Some(Message::EnterEdit),
        InputKey::Char('K') if state.session.can_edit() => Some(Message::OpenKyc),

        _ => None,
    }
}

/// Handle key events in Edit mode with no field buffer active
fn handle_key_edit(state: &AppState, key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::RequestCancelEdit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('s') => Some(Message::Submit),

        // Focus navigation over the form surface
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrev),

        // Activate the focused entry (edit / cycle / add row)
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateEntry),

        // Delete the focused group row
        InputKey::Char('d') | InputKey::Delete => match state.focused_entry() {
            Some(FormEntry::Field(FieldPath::Row { group, index, .. })) => {
                Some(Message::RemoveRow { group, index })
            }
            _ => None,
        },

        _ => None,
    }
}

/// Handle key events while a field edit buffer is active
fn handle_key_field_editing(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::CommitField),
        InputKey::Esc => Some(Message::AbortFieldEdit),
        InputKey::Backspace => Some(Message::FieldBackspace),
        InputKey::CharCtrl('u') => Some(Message::FieldClear),
        InputKey::Char(c) => Some(Message::FieldInput { ch: *c }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
