//! Application state (Model in TEA pattern)

use pdeck_core::{Profile, SessionContext};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::form::{self, FieldError, FormEntry};

/// Page mode: the record is either shown or being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fields render as static text; no controls exist.
    #[default]
    View,

    /// Fields render as controls bound to the draft.
    Edit,
}

/// Outcome of the mount-time profile read.
///
/// Replaces the web client's implicit "record is still null" with an
/// explicit tri-state the header can display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The read is still in flight.
    #[default]
    Loading,

    /// The record on screen is server truth.
    Loaded,

    /// The single read attempt failed; fields render empty.
    Failed(String),
}

/// State of the save call while in Edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,

    /// A save is in flight; submit is not re-offered.
    InFlight,

    /// The last save failed; the draft stays editable.
    Failed(String),
}

/// Focus, buffer, and error state of the form surface.
#[derive(Debug, Clone, Default)]
pub struct FormViewState {
    /// Index into the flattened form entry list.
    pub focus: usize,

    /// Whether a text-family field edit buffer is active.
    pub editing: bool,

    /// The in-progress value of the field being edited.
    pub edit_buffer: String,

    /// Validation errors from the last submit attempt, path-keyed.
    pub errors: Vec<FieldError>,

    /// First visible line of the page (managed by the renderer).
    pub scroll: u16,
}

impl FormViewState {
    /// Move focus to the next entry, wrapping at the end.
    pub fn select_next(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.focus = (self.focus + 1) % entry_count;
        }
    }

    /// Move focus to the previous entry, wrapping at the start.
    pub fn select_previous(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.focus = self.focus.checked_sub(1).unwrap_or(entry_count - 1);
        }
    }

    /// Begin buffer editing seeded with the field's current value.
    pub fn start_editing(&mut self, initial: &str) {
        self.editing = true;
        self.edit_buffer = initial.to_string();
    }

    /// End buffer editing, dropping the buffer.
    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Reset everything except scroll (kept so the page doesn't jump).
    pub fn reset(&mut self) {
        self.focus = 0;
        self.editing = false;
        self.edit_buffer.clear();
        self.errors.clear();
    }
}

/// The complete model of the profile screen.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Identity of the signed-in back-office user, injected at construction.
    pub session: SessionContext,

    /// Loaded configuration (API endpoints, behavior toggles).
    pub settings: Settings,

    pub mode: Mode,
    pub load: LoadState,
    pub save: SaveState,

    /// Last committed server truth. Blank until the read lands.
    pub record: Profile,

    /// Working copy while in Edit mode; all form mutation targets this.
    pub draft: Option<Profile>,

    pub form: FormViewState,

    /// Pending confirmation dialog, if any.
    pub dialog: Option<ConfirmDialogState>,

    quitting: bool,
}

impl AppState {
    pub fn new(session: SessionContext) -> Self {
        Self::with_settings(session, Settings::default())
    }

    pub fn with_settings(session: SessionContext, settings: Settings) -> Self {
        Self {
            session,
            settings,
            mode: Mode::View,
            load: LoadState::Loading,
            save: SaveState::Idle,
            record: Profile::default(),
            draft: None,
            form: FormViewState::default(),
            dialog: None,
            quitting: false,
        }
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Mark the application for exit.
    pub fn quit(&mut self) {
        self.quitting = true;
    }

    /// The profile the page renders: the draft while editing, the
    /// committed record otherwise.
    pub fn visible_profile(&self) -> &Profile {
        self.draft.as_ref().unwrap_or(&self.record)
    }

    /// Whether the draft differs from the committed record.
    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| *d != self.record)
    }

    /// Enter Edit mode by cloning the committed record into a draft.
    pub fn enter_edit(&mut self) {
        self.draft = Some(self.record.clone());
        self.mode = Mode::Edit;
        self.save = SaveState::Idle;
        self.form.reset();
    }

    /// Drop the draft and return to View mode.
    pub fn discard_draft(&mut self) {
        self.draft = None;
        self.mode = Mode::View;
        self.save = SaveState::Idle;
        self.form.reset();
    }

    /// Commit the server's authoritative record after a successful save.
    pub fn commit_saved(&mut self, profile: Profile) {
        self.record = profile;
        self.load = LoadState::Loaded;
        self.discard_draft();
    }

    /// The flattened focusable form surface for the visible profile.
    pub fn form_entries(&self) -> Vec<FormEntry> {
        form::form_entries(self.visible_profile())
    }

    /// The entry under focus, if the focus index still resolves.
    pub fn focused_entry(&self) -> Option<FormEntry> {
        self.form_entries().get(self.form.focus).copied()
    }

    /// Clamp focus into the current entry list. Called after row
    /// add/remove changes the surface.
    pub fn clamp_focus(&mut self) {
        let count = self.form_entries().len();
        if count == 0 {
            self.form.focus = 0;
        } else if self.form.focus >= count {
            self.form.focus = count - 1;
        }
    }
}
