//! pdeck-app - Application state and orchestration for Profile Deck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! profile screen: the [`AppState`] model, the [`Message`] vocabulary, and
//! the `update()` function that is the only place profile state changes.
//! Rendering lives in pdeck-tui; network calls live in pdeck-api and are
//! requested through [`UpdateAction`]s.

pub mod config;
pub mod confirm_dialog;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use confirm_dialog::ConfirmDialogState;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, LoadState, Mode, SaveState};
