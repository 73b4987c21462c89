//! Record lifecycle handlers: the mount-time read, edit/cancel/save
//! transitions, KYC navigation, and quit confirmation.

use pdeck_core::Profile;
use tracing::{debug, info, warn};

use crate::confirm_dialog::ConfirmDialogState;
use crate::form;
use crate::message::Message;
use crate::state::{AppState, LoadState, Mode, SaveState};

use super::{UpdateAction, UpdateResult};

/// The one-time profile read completed.
///
/// The record is replaced wholesale -- unless the user already entered
/// Edit mode, in which case the late completion is ignored so it never
/// clobbers in-progress edits.
pub fn handle_profile_fetched(state: &mut AppState, profile: Profile) -> UpdateResult {
    if state.mode == Mode::Edit {
        debug!("profile read landed after edit began; ignoring");
        return UpdateResult::none();
    }
    info!("profile loaded for {}", profile.display_name());
    state.record = profile;
    state.load = LoadState::Loaded;
    UpdateResult::none()
}

/// The one-time profile read failed. No retry; the page stays usable with
/// empty fields and a visible failure state.
pub fn handle_fetch_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("profile read failed: {error}");
    if state.load != LoadState::Loaded {
        state.load = LoadState::Failed(error);
    }
    UpdateResult::none()
}

/// Switch View -> Edit by cloning the record into a draft.
pub fn handle_enter_edit(state: &mut AppState) -> UpdateResult {
    if !state.session.can_edit() {
        warn!("edit rejected: officer session is read-only");
        return UpdateResult::none();
    }
    if state.mode == Mode::Edit {
        return UpdateResult::none();
    }
    state.enter_edit();
    UpdateResult::none()
}

/// Leave Edit mode. A dirty draft interposes a confirmation dialog; a
/// pristine one discards immediately.
pub fn handle_request_cancel_edit(state: &mut AppState) -> UpdateResult {
    if state.mode != Mode::Edit {
        return UpdateResult::none();
    }
    if state.is_dirty() && state.settings.behavior.confirm_discard {
        state.dialog = Some(ConfirmDialogState::discard_draft());
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::CancelEdit)
    }
}

/// Discard the draft and return to View without submitting.
pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if state.mode != Mode::Edit {
        return UpdateResult::none();
    }
    state.discard_draft();
    UpdateResult::none()
}

/// Validate the draft; a clean one goes to the profile service.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.mode != Mode::Edit {
        warn!("submit rejected outside Edit mode");
        return UpdateResult::none();
    }
    if state.save == SaveState::InFlight {
        return UpdateResult::none();
    }
    let Some(draft) = state.draft.as_ref() else {
        return UpdateResult::none();
    };

    let errors = form::validate(draft);
    if !errors.is_empty() {
        info!("submit blocked by {} validation error(s)", errors.len());
        state.form.errors = errors;
        return UpdateResult::none();
    }

    state.form.errors.clear();
    state.save = SaveState::InFlight;
    UpdateResult::action(UpdateAction::SaveProfile(Box::new(draft.clone())))
}

/// The save call returned the server's authoritative record: commit it and
/// return to View.
pub fn handle_save_completed(state: &mut AppState, profile: Profile) -> UpdateResult {
    info!("profile saved");
    state.commit_saved(profile);
    UpdateResult::none()
}

/// The save call failed: stay in Edit with the draft intact and surface
/// the error.
pub fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("profile save failed: {error}");
    if state.mode == Mode::Edit {
        state.save = SaveState::Failed(error);
    }
    UpdateResult::none()
}

/// Open the user's KYC page in the browser. Pure navigation, no state.
pub fn handle_open_kyc(state: &mut AppState) -> UpdateResult {
    if state.session.officer {
        return UpdateResult::none();
    }
    let url = format!(
        "{}/pages/users/{}/kyc",
        state.settings.web.base_url.trim_end_matches('/'),
        state.session.user_id
    );
    UpdateResult::action(UpdateAction::OpenKycRoute { url })
}

/// Quit, confirming first when an edited draft would be lost.
pub fn handle_request_quit(state: &mut AppState) -> UpdateResult {
    if state.is_dirty() && state.settings.behavior.confirm_quit {
        state.dialog = Some(ConfirmDialogState::quit_with_draft());
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::Quit)
    }
}
