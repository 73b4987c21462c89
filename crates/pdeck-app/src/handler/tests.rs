//! State machine tests for the profile screen.

use pdeck_core::{BasicField, FieldPath, GroupKind, Profile, RowField, SessionContext};

use crate::config::Settings;
use crate::form::FormEntry;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, LoadState, Mode, SaveState};

use super::{update, UpdateAction};

fn state() -> AppState {
    AppState::with_settings(SessionContext::new("u-7", false), Settings::default())
}

fn officer_state() -> AppState {
    AppState::with_settings(SessionContext::new("u-9", true), Settings::default())
}

fn loaded_profile() -> Profile {
    serde_json::from_str(
        r#"{
            "email": "j@x.com",
            "firstname": "Jane",
            "lastname": "Doe",
            "contacts": [
                {"country":"NL","city":"Delft","street":"Markt 1","postalcode":"2611GV","type":"0"},
                {"country":"NL","city":"Leiden","street":"Breestraat 5","postalcode":"2311CS","type":"1"}
            ],
            "emails": [
                {"emailaddress":"j@x.com","type":"1","preferred":"true"}
            ]
        }"#,
    )
    .unwrap()
}

/// Run a message plus any follow-up messages, collecting actions.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut queue = vec![message];
    while let Some(msg) = queue.pop() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            actions.push(action);
        }
        if let Some(follow_up) = result.message {
            queue.push(follow_up);
        }
    }
    actions
}

fn loaded_state() -> AppState {
    let mut state = state();
    drive(&mut state, Message::ProfileFetched(Box::new(loaded_profile())));
    state
}

fn editing_state() -> AppState {
    let mut state = loaded_state();
    drive(&mut state, Message::EnterEdit);
    state
}

fn focus_on(state: &mut AppState, path: FieldPath) {
    let pos = state
        .form_entries()
        .iter()
        .position(|e| matches!(e, FormEntry::Field(p) if *p == path))
        .expect("path present in form surface");
    state.form.focus = pos;
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        drive(state, Message::FieldInput { ch });
    }
}

// ─────────────────────────────────────────────────────────────────
// Record Lifecycle
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_fetch_success_commits_record() {
    let mut state = state();
    assert_eq!(state.load, LoadState::Loading);

    drive(&mut state, Message::ProfileFetched(Box::new(loaded_profile())));

    assert_eq!(state.load, LoadState::Loaded);
    assert_eq!(state.record.firstname, "Jane");
    assert_eq!(state.record.group_len(GroupKind::Contacts), 2);
}

#[test]
fn test_late_fetch_ignored_once_editing() {
    let mut state = state();
    drive(&mut state, Message::EnterEdit);
    assert_eq!(state.mode, Mode::Edit);

    drive(&mut state, Message::ProfileFetched(Box::new(loaded_profile())));

    // Neither the record nor the draft picked up the late response.
    assert_eq!(state.record, Profile::default());
    assert_eq!(state.draft, Some(Profile::default()));
    assert_eq!(state.load, LoadState::Loading);
}

#[test]
fn test_fetch_failure_surfaces_state() {
    let mut state = state();
    drive(
        &mut state,
        Message::ProfileFetchFailed {
            error: "status 503".into(),
        },
    );
    assert_eq!(state.load, LoadState::Failed("status 503".into()));
    // The page stays usable with empty fields.
    assert_eq!(state.record, Profile::default());
}

#[test]
fn test_enter_edit_clones_record() {
    let mut state = loaded_state();
    drive(&mut state, Message::EnterEdit);

    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.draft.as_ref(), Some(&state.record));
}

#[test]
fn test_officer_cannot_enter_edit() {
    let mut state = officer_state();
    drive(&mut state, Message::EnterEdit);
    assert_eq!(state.mode, Mode::View);
    assert!(state.draft.is_none());
}

#[test]
fn test_edit_can_begin_before_fetch_resolves() {
    let mut state = state();
    drive(&mut state, Message::EnterEdit);
    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.load, LoadState::Loading);
}

// ─────────────────────────────────────────────────────────────────
// Array Editor Protocol
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_add_five_rows_then_sixth_is_noop() {
    let mut state = state();
    drive(&mut state, Message::EnterEdit);

    for _ in 0..5 {
        drive(&mut state, Message::AddRow(GroupKind::Contacts));
    }
    assert_eq!(state.draft.as_ref().unwrap().group_len(GroupKind::Contacts), 5);

    drive(&mut state, Message::AddRow(GroupKind::Contacts));
    assert_eq!(state.draft.as_ref().unwrap().group_len(GroupKind::Contacts), 5);
}

#[test]
fn test_add_row_rejected_in_view_mode() {
    let mut state = loaded_state();
    drive(&mut state, Message::AddRow(GroupKind::Emails));
    assert_eq!(state.record.group_len(GroupKind::Emails), 1);
    assert!(state.draft.is_none());
}

#[test]
fn test_remove_row_rejected_in_view_mode() {
    let mut state = loaded_state();
    drive(
        &mut state,
        Message::RemoveRow {
            group: GroupKind::Contacts,
            index: 0,
        },
    );
    assert_eq!(state.record.group_len(GroupKind::Contacts), 2);
}

#[test]
fn test_remove_row_shifts_following_rows() {
    let mut state = editing_state();
    drive(
        &mut state,
        Message::RemoveRow {
            group: GroupKind::Contacts,
            index: 0,
        },
    );

    let draft = state.draft.as_ref().unwrap();
    assert_eq!(draft.group_len(GroupKind::Contacts), 1);
    assert_eq!(draft.contacts.get(0).unwrap().city, "Leiden");
}

#[test]
fn test_activate_add_row_focuses_new_row() {
    let mut state = editing_state();
    let add_pos = state
        .form_entries()
        .iter()
        .position(|e| matches!(e, FormEntry::AddRow(GroupKind::Phones)))
        .unwrap();
    state.form.focus = add_pos;

    drive(&mut state, Message::ActivateEntry);

    assert_eq!(state.draft.as_ref().unwrap().group_len(GroupKind::Phones), 1);
    assert_eq!(
        state.focused_entry(),
        Some(FormEntry::Field(FieldPath::Row {
            group: GroupKind::Phones,
            index: 0,
            field: RowField::PhoneNumber,
        }))
    );
}

// ─────────────────────────────────────────────────────────────────
// Field Editing
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_buffer_edit_commits_to_one_field() {
    let mut state = editing_state();
    let path = FieldPath::Row {
        group: GroupKind::Contacts,
        index: 0,
        field: RowField::City,
    };
    focus_on(&mut state, path);

    drive(&mut state, Message::ActivateEntry);
    assert!(state.form.editing);
    // Buffer is seeded with the current value.
    assert_eq!(state.form.edit_buffer, "Delft");

    drive(&mut state, Message::FieldClear);
    type_text(&mut state, "Rotterdam");
    drive(&mut state, Message::CommitField);

    assert!(!state.form.editing);
    let draft = state.draft.as_ref().unwrap();
    assert_eq!(draft.contacts.get(0).unwrap().city, "Rotterdam");
    // Other rows and the committed record are untouched.
    assert_eq!(draft.contacts.get(1).unwrap().city, "Leiden");
    assert_eq!(state.record.contacts.get(0).unwrap().city, "Delft");
}

#[test]
fn test_abort_field_edit_keeps_value() {
    let mut state = editing_state();
    let path = FieldPath::Basic(BasicField::Firstname);
    focus_on(&mut state, path);

    drive(&mut state, Message::ActivateEntry);
    drive(&mut state, Message::FieldClear);
    type_text(&mut state, "Janet");
    drive(&mut state, Message::AbortFieldEdit);

    assert!(!state.form.editing);
    assert_eq!(state.draft.as_ref().unwrap().firstname, "Jane");
}

#[test]
fn test_non_numeric_age_keeps_buffer_open_with_error() {
    let mut state = editing_state();
    let path = FieldPath::Basic(BasicField::Age);
    focus_on(&mut state, path);

    drive(&mut state, Message::ActivateEntry);
    type_text(&mut state, "old");
    drive(&mut state, Message::CommitField);

    assert!(state.form.editing);
    assert_eq!(state.form.errors.len(), 1);
    assert_eq!(state.form.errors[0].path, path);
}

#[test]
fn test_select_cycles_through_options_and_blank() {
    let mut state = editing_state();
    let path = FieldPath::Row {
        group: GroupKind::Contacts,
        index: 0,
        field: RowField::AddressType,
    };
    focus_on(&mut state, path);

    // Loaded as Mailing ("0"); Enter cycles to Work, then blank, then back.
    drive(&mut state, Message::ActivateEntry);
    assert_eq!(state.draft.as_ref().unwrap().field(path).unwrap(), "1");
    drive(&mut state, Message::ActivateEntry);
    assert_eq!(state.draft.as_ref().unwrap().field(path).unwrap(), "");
    drive(&mut state, Message::ActivateEntry);
    assert_eq!(state.draft.as_ref().unwrap().field(path).unwrap(), "0");
}

#[test]
fn test_preferred_toggles_without_blank() {
    let mut state = editing_state();
    let path = FieldPath::Row {
        group: GroupKind::Emails,
        index: 0,
        field: RowField::EmailPreferred,
    };
    focus_on(&mut state, path);

    drive(&mut state, Message::ActivateEntry);
    assert_eq!(state.draft.as_ref().unwrap().field(path).unwrap(), "false");
    drive(&mut state, Message::ActivateEntry);
    assert_eq!(state.draft.as_ref().unwrap().field(path).unwrap(), "true");
}

// ─────────────────────────────────────────────────────────────────
// Submit / Save
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_submit_blocks_on_missing_required_fields() {
    let mut state = editing_state();
    drive(&mut state, Message::AddRow(GroupKind::Identifications));

    let actions = drive(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.save, SaveState::Idle);
    let keys: Vec<String> = state.form.errors.iter().map(|e| e.path.key()).collect();
    assert!(keys.contains(&"identifications.0.idtype".to_string()));
    assert!(keys.contains(&"identifications.0.idfile".to_string()));
}

#[test]
fn test_submit_valid_draft_dispatches_save() {
    let mut state = editing_state();
    let actions = drive(&mut state, Message::Submit);

    assert_eq!(state.save, SaveState::InFlight);
    match &actions[..] {
        [UpdateAction::SaveProfile(profile)] => {
            assert_eq!(**profile, *state.draft.as_ref().unwrap());
        }
        other => panic!("expected SaveProfile action, got {other:?}"),
    }

    // A second submit while in flight does nothing.
    let actions = drive(&mut state, Message::Submit);
    assert!(actions.is_empty());
}

#[test]
fn test_save_completed_commits_authoritative_record() {
    let mut state = editing_state();
    drive(&mut state, Message::Submit);

    let mut server_version = loaded_profile();
    server_version.lastname = "Doe-Smith".into();
    drive(&mut state, Message::SaveCompleted(Box::new(server_version.clone())));

    assert_eq!(state.mode, Mode::View);
    assert!(state.draft.is_none());
    assert_eq!(state.record, server_version);
    assert_eq!(state.save, SaveState::Idle);
}

#[test]
fn test_save_failed_keeps_draft_editable() {
    let mut state = editing_state();
    state
        .draft
        .as_mut()
        .unwrap()
        .set_field(FieldPath::Basic(BasicField::Lastname), "Changed");
    drive(&mut state, Message::Submit);

    drive(
        &mut state,
        Message::SaveFailed {
            error: "status 500".into(),
        },
    );

    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.save, SaveState::Failed("status 500".into()));
    assert_eq!(state.draft.as_ref().unwrap().lastname, "Changed");
}

// ─────────────────────────────────────────────────────────────────
// Cancel / Quit
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_cancel_pristine_draft_returns_to_view() {
    let mut state = editing_state();
    drive(&mut state, Message::RequestCancelEdit);

    assert!(state.dialog.is_none());
    assert_eq!(state.mode, Mode::View);
    assert!(state.draft.is_none());
}

#[test]
fn test_cancel_dirty_draft_asks_then_discards() {
    let mut state = editing_state();
    state
        .draft
        .as_mut()
        .unwrap()
        .set_field(FieldPath::Basic(BasicField::Lastname), "Changed");

    drive(&mut state, Message::RequestCancelEdit);
    assert!(state.dialog.is_some());
    assert_eq!(state.mode, Mode::Edit);

    drive(&mut state, Message::DialogConfirm);
    assert!(state.dialog.is_none());
    assert_eq!(state.mode, Mode::View);
    // The committed record is untouched by the discarded edits.
    assert_eq!(state.record.lastname, "Doe");
}

#[test]
fn test_cancel_dialog_dismiss_keeps_editing() {
    let mut state = editing_state();
    state
        .draft
        .as_mut()
        .unwrap()
        .set_field(FieldPath::Basic(BasicField::Lastname), "Changed");

    drive(&mut state, Message::RequestCancelEdit);
    drive(&mut state, Message::DialogDismiss);

    assert!(state.dialog.is_none());
    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.draft.as_ref().unwrap().lastname, "Changed");
}

#[test]
fn test_quit_with_dirty_draft_confirms_first() {
    let mut state = editing_state();
    state
        .draft
        .as_mut()
        .unwrap()
        .set_field(FieldPath::Basic(BasicField::Lastname), "Changed");

    drive(&mut state, Message::RequestQuit);
    assert!(!state.should_quit());
    assert!(state.dialog.is_some());

    drive(&mut state, Message::DialogConfirm);
    assert!(state.should_quit());
}

#[test]
fn test_quit_without_draft_is_immediate() {
    let mut state = loaded_state();
    drive(&mut state, Message::RequestQuit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_open_kyc_builds_route_from_session() {
    let mut state = loaded_state();
    let actions = drive(&mut state, Message::OpenKyc);
    assert_eq!(
        actions,
        vec![UpdateAction::OpenKycRoute {
            url: "http://localhost:3000/pages/users/u-7/kyc".into()
        }]
    );
}

#[test]
fn test_open_kyc_not_offered_to_officers() {
    let mut state = officer_state();
    let actions = drive(&mut state, Message::OpenKyc);
    assert!(actions.is_empty());
}

// ─────────────────────────────────────────────────────────────────
// Key Routing
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_view_mode_keys() {
    let mut state = loaded_state();
    drive(&mut state, Message::Key(InputKey::Char('e')));
    assert_eq!(state.mode, Mode::Edit);
}

#[test]
fn test_officer_edit_key_ignored() {
    let mut state = officer_state();
    drive(&mut state, Message::Key(InputKey::Char('e')));
    assert_eq!(state.mode, Mode::View);
}

#[test]
fn test_edit_mode_tab_moves_focus() {
    let mut state = editing_state();
    assert_eq!(state.form.focus, 0);
    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.form.focus, 1);
    drive(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.form.focus, 0);
}

#[test]
fn test_delete_key_removes_focused_row() {
    let mut state = editing_state();
    focus_on(
        &mut state,
        FieldPath::Row {
            group: GroupKind::Contacts,
            index: 1,
            field: RowField::Street,
        },
    );

    drive(&mut state, Message::Key(InputKey::Char('d')));

    let draft = state.draft.as_ref().unwrap();
    assert_eq!(draft.group_len(GroupKind::Contacts), 1);
    assert_eq!(draft.contacts.get(0).unwrap().city, "Delft");
}

#[test]
fn test_typing_goes_to_buffer_not_navigation() {
    let mut state = editing_state();
    focus_on(&mut state, FieldPath::Basic(BasicField::Middlename));
    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(state.form.editing);

    // 'j' types into the buffer instead of moving focus.
    let focus_before = state.form.focus;
    drive(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.form.focus, focus_before);
    assert_eq!(state.form.edit_buffer, "j");

    drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.draft.as_ref().unwrap().middlename, "j");
}

#[test]
fn test_ctrl_s_submits_from_edit_mode() {
    let mut state = editing_state();
    drive(&mut state, Message::Key(InputKey::CharCtrl('s')));
    assert_eq!(state.save, SaveState::InFlight);
}

#[test]
fn test_dialog_keys() {
    let mut state = editing_state();
    state
        .draft
        .as_mut()
        .unwrap()
        .set_field(FieldPath::Basic(BasicField::Lastname), "Changed");
    drive(&mut state, Message::Key(InputKey::Esc));
    assert!(state.dialog.is_some());

    drive(&mut state, Message::Key(InputKey::Char('n')));
    assert!(state.dialog.is_none());
    assert_eq!(state.mode, Mode::Edit);

    drive(&mut state, Message::Key(InputKey::Esc));
    drive(&mut state, Message::Key(InputKey::Char('y')));
    assert_eq!(state.mode, Mode::View);
}
