//! pdeck-tui - Terminal UI for Profile Deck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! setup, event polling, the main event loop, and widget rendering for
//! the profile screen built on pdeck-app's state machine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
