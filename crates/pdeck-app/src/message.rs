//! Message types for the application (TEA pattern)

use pdeck_core::{FieldPath, GroupKind, Profile};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog for an unsaved draft)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Record Lifecycle
    // ─────────────────────────────────────────────────────────
    /// The mount-time profile read completed
    ProfileFetched(Box<Profile>),
    /// The mount-time profile read failed
    ProfileFetchFailed { error: String },

    /// Switch the page from View into Edit mode
    EnterEdit,
    /// Leave Edit mode, asking for confirmation when the draft has changes
    RequestCancelEdit,
    /// Discard the draft and return to View mode
    CancelEdit,
    /// Validate the draft and, if clean, persist it
    Submit,
    /// The save call returned the server's authoritative record
    SaveCompleted(Box<Profile>),
    /// The save call failed; the draft stays editable
    SaveFailed { error: String },

    /// Open the KYC page for this user in the browser
    OpenKyc,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the page up one line
    ScrollUp,
    /// Scroll the page down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────
    // Form Messages (legal in Edit mode only)
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form entry
    FocusNext,
    /// Move focus to the previous form entry
    FocusPrev,
    /// Activate the focused entry (start a field edit, cycle a select,
    /// or add a row)
    ActivateEntry,
    /// Append a character to the field edit buffer
    FieldInput { ch: char },
    /// Delete the last character of the field edit buffer
    FieldBackspace,
    /// Clear the field edit buffer
    FieldClear,
    /// Commit the edit buffer to the focused field of the draft
    CommitField,
    /// Drop the edit buffer without committing
    AbortFieldEdit,
    /// Append a blank row to a repeatable group
    AddRow(GroupKind),
    /// Remove one row from a repeatable group
    RemoveRow { group: GroupKind, index: usize },
    /// Cycle an enumerated field to its next option
    CycleSelect { path: FieldPath },

    // ─────────────────────────────────────────────────────────
    // Confirmation Dialog
    // ─────────────────────────────────────────────────────────
    /// Accept the pending dialog, dispatching its confirm message
    DialogConfirm,
    /// Dismiss the pending dialog, dispatching its cancel message
    DialogDismiss,
}
