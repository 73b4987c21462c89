//! Configuration file parsing for Profile Deck
//!
//! Supports:
//! - `~/.config/profile-deck/config.toml` - settings file
//! - `PDECK_API_URL` - environment override for the API base URL
//! - CLI flags (applied by the binary on top of the loaded settings)

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from, save_settings_to};
pub use types::*;
