//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `keys`: key-to-message translation per page mode
//! - `form`: form surface handlers
//! - `lifecycle`: record lifecycle handlers

use crate::message::Message;
use crate::state::AppState;

use super::{form, keys, lifecycle, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::RequestQuit => lifecycle::handle_request_quit(state),

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, &key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Record Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::ProfileFetched(profile) => lifecycle::handle_profile_fetched(state, *profile),
        Message::ProfileFetchFailed { error } => lifecycle::handle_fetch_failed(state, error),
        Message::EnterEdit => lifecycle::handle_enter_edit(state),
        Message::RequestCancelEdit => lifecycle::handle_request_cancel_edit(state),
        Message::CancelEdit => lifecycle::handle_cancel_edit(state),
        Message::Submit => lifecycle::handle_submit(state),
        Message::SaveCompleted(profile) => lifecycle::handle_save_completed(state, *profile),
        Message::SaveFailed { error } => lifecycle::handle_save_failed(state, error),
        Message::OpenKyc => lifecycle::handle_open_kyc(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.form.scroll = state.form.scroll.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.form.scroll = state.form.scroll.saturating_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrev => form::handle_focus_prev(state),
        Message::ActivateEntry => form::handle_activate(state),
        Message::FieldInput { ch } => form::handle_field_input(state, ch),
        Message::FieldBackspace => form::handle_field_backspace(state),
        Message::FieldClear => form::handle_field_clear(state),
        Message::CommitField => form::handle_commit_field(state),
        Message::AbortFieldEdit => form::handle_abort_field_edit(state),
        Message::AddRow(group) => form::handle_add_row(state, group),
        Message::RemoveRow { group, index } => form::handle_remove_row(state, group, index),
        Message::CycleSelect { path } => form::handle_cycle_select(state, path),

        // ─────────────────────────────────────────────────────────
        // Confirmation Dialog
        // ─────────────────────────────────────────────────────────
        Message::DialogConfirm => {
            if let Some(dialog) = state.dialog.take() {
                UpdateResult::message(dialog.on_confirm)
            } else {
                UpdateResult::none()
            }
        }
        Message::DialogDismiss => {
            state.dialog = None;
            UpdateResult::none()
        }
    }
}
