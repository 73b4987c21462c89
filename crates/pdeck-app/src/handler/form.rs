//! Form surface handlers: focus movement, field buffers, select cycling,
//! and the repeatable-group row operations.
//!
//! Every handler here mutates the draft only. Form messages arriving in
//! View mode are rejected: the controls that produce them are not rendered
//! there, so such a message is a caller bug worth a warning, not a panic.

use pdeck_core::{FieldPath, GroupKind, Profile};
use tracing::warn;

use crate::form::{spec_for, ControlKind, FieldError, FormEntry};
use crate::state::{AppState, Mode};

use super::UpdateResult;

/// The draft, if the page is in Edit mode. Logs and yields `None` otherwise.
fn editable_draft(state: &mut AppState) -> Option<&mut Profile> {
    if state.mode != Mode::Edit {
        warn!("form transition rejected outside Edit mode");
        return None;
    }
    state.draft.as_mut()
}

fn clear_error(state: &mut AppState, path: FieldPath) {
    state.form.errors.retain(|e| e.path != path);
}

fn set_error(state: &mut AppState, path: FieldPath, message: impl Into<String>) {
    clear_error(state, path);
    state.form.errors.push(FieldError {
        path,
        message: message.into(),
    });
}

/// Handle focus next message
pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if state.mode == Mode::Edit {
        let count = state.form_entries().len();
        state.form.select_next(count);
    }
    UpdateResult::none()
}

/// Handle focus previous message
pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    if state.mode == Mode::Edit {
        let count = state.form_entries().len();
        state.form.select_previous(count);
    }
    UpdateResult::none()
}

/// Handle activate message: start a buffer edit on a text-family field,
/// cycle a select, or add a row.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    if state.mode != Mode::Edit {
        warn!("form transition rejected outside Edit mode");
        return UpdateResult::none();
    }
    let Some(entry) = state.focused_entry() else {
        return UpdateResult::none();
    };

    match entry {
        FormEntry::Field(path) => match spec_for(path).control {
            ControlKind::Select(_) => handle_cycle_select(state, path),
            ControlKind::Text | ControlKind::Date | ControlKind::File => {
                let current = state
                    .visible_profile()
                    .field(path)
                    .unwrap_or_default();
                state.form.start_editing(&current);
                UpdateResult::none()
            }
        },
        FormEntry::AddRow(group) => handle_add_row(state, group),
    }
}

/// Handle field input message
pub fn handle_field_input(state: &mut AppState, ch: char) -> UpdateResult {
    if state.mode == Mode::Edit && state.form.editing {
        state.form.edit_buffer.push(ch);
    }
    UpdateResult::none()
}

/// Handle field backspace message
pub fn handle_field_backspace(state: &mut AppState) -> UpdateResult {
    if state.mode == Mode::Edit && state.form.editing {
        state.form.edit_buffer.pop();
    }
    UpdateResult::none()
}

/// Handle field clear message
pub fn handle_field_clear(state: &mut AppState) -> UpdateResult {
    if state.mode == Mode::Edit && state.form.editing {
        state.form.edit_buffer.clear();
    }
    UpdateResult::none()
}

/// Handle commit field message: write the buffer to the focused field of
/// the draft.
pub fn handle_commit_field(state: &mut AppState) -> UpdateResult {
    if !state.form.editing {
        return UpdateResult::none();
    }
    let Some(FormEntry::Field(path)) = state.focused_entry() else {
        state.form.stop_editing();
        return UpdateResult::none();
    };
    let value = state.form.edit_buffer.clone();

    let Some(draft) = editable_draft(state) else {
        return UpdateResult::none();
    };

    if draft.set_field(path, &value) {
        clear_error(state, path);
        state.form.stop_editing();
    } else {
        // The only refusing field is the numeric age; keep the buffer open
        // so the value can be corrected in place.
        set_error(
            state,
            path,
            format!("{} must be a whole number", spec_for(path).label),
        );
    }
    UpdateResult::none()
}

/// Handle abort field edit message
pub fn handle_abort_field_edit(state: &mut AppState) -> UpdateResult {
    state.form.stop_editing();
    UpdateResult::none()
}

/// Handle cycle select message: move an enumerated field to its next option.
pub fn handle_cycle_select(state: &mut AppState, path: FieldPath) -> UpdateResult {
    let ControlKind::Select(codes) = spec_for(path).control else {
        return UpdateResult::none();
    };

    let current = match state.draft.as_ref().and_then(|d| d.field(path)) {
        Some(value) => value,
        None => return UpdateResult::none(),
    };

    let next = codes.cycle(&current).to_string();
    let Some(draft) = editable_draft(state) else {
        return UpdateResult::none();
    };
    if draft.set_field(path, &next) {
        clear_error(state, path);
    }
    UpdateResult::none()
}

/// Handle add row message: append a blank row, capped per group.
pub fn handle_add_row(state: &mut AppState, group: GroupKind) -> UpdateResult {
    let Some(draft) = editable_draft(state) else {
        return UpdateResult::none();
    };
    if !draft.add_row(group) {
        // At the cap: the action renders disabled, so this is a no-op.
        return UpdateResult::none();
    }
    let new_index = draft.group_len(group) - 1;

    // Land focus on the first field of the new row.
    let first_field = group.row_fields()[0];
    let entries = state.form_entries();
    if let Some(pos) = entries.iter().position(|e| {
        matches!(e, FormEntry::Field(FieldPath::Row { group: g, index, field })
            if *g == group && *index == new_index && *field == first_field)
    }) {
        state.form.focus = pos;
    }
    UpdateResult::none()
}

/// Handle remove row message: drop one row, shifting the rest down.
pub fn handle_remove_row(state: &mut AppState, group: GroupKind, index: usize) -> UpdateResult {
    let Some(draft) = editable_draft(state) else {
        return UpdateResult::none();
    };
    if !draft.remove_row(group, index) {
        return UpdateResult::none();
    }

    // Row indices in this group shifted; stale errors would point at the
    // wrong rows. They come back on the next submit if still real.
    state
        .form
        .errors
        .retain(|e| !matches!(e.path, FieldPath::Row { group: g, .. } if g == group));

    state.clamp_focus();
    UpdateResult::none()
}
