//! # pdeck-core - Core Domain Types
//!
//! Foundation crate for Profile Deck. Provides the profile record model,
//! enumerated-field codecs, the bounded repeatable-group container, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Records (`profile`)
//! - [`Profile`] - The root profile record (identity fields + repeatable groups)
//! - [`Address`], [`EmailRecord`], [`PhoneRecord`], [`IdentificationRecord`],
//!   [`OccupationRecord`] - Row shapes of the repeatable groups
//!
//! ### Field Addressing (`fields`)
//! - [`FieldPath`] - Addresses a single field of a [`Profile`] (basic or row-level)
//! - [`GroupKind`] - Names one of the five repeatable groups
//!
//! ### Groups (`group`)
//! - [`BoundedGroup`] - Repeatable-record container with an add-time row cap
//!
//! ### Codecs (`codes`)
//! - [`CodeSet`] - Bidirectional code ⇄ label mapping with verbatim passthrough
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pdeck_core::prelude::*;
//! ```

pub mod codes;
pub mod error;
pub mod fields;
pub mod group;
pub mod logging;
pub mod profile;
pub mod session;

/// Prelude for common imports used throughout all Profile Deck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use codes::{CodeSet, ADDRESS_KIND, CONTACT_KIND, ID_KIND, OCCUPATION_KIND, PREFERRED};
pub use error::{Error, Result, ResultExt};
pub use fields::{BasicField, FieldPath, GroupKind, RowField};
pub use group::{BoundedGroup, GroupRow, GROUP_ROW_CAP};
pub use profile::{
    Address, EmailRecord, IdentificationRecord, OccupationRecord, PhoneRecord, Profile,
};
pub use session::SessionContext;
