//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the page modes
//! - `form`: Form surface handlers (focus, buffers, selects, rows)
//! - `lifecycle`: Record lifecycle handlers (fetch, edit, save, quit)

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod lifecycle;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use pdeck_core::Profile;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Issue the one-time profile read
    FetchProfile,

    /// Persist an edited draft to the profile service
    SaveProfile(Box<Profile>),

    /// Open the KYC route in the system browser (fire-and-forget)
    OpenKycRoute { url: String },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
