//! pdeck-api - Profile service HTTP client for Profile Deck
//!
//! The backend collaborator of the profile screen: one read
//! (`GET {base}/u/profile`) and one write (`PUT {base}/u/profile`), both
//! cookie-authenticated JSON calls against the back-office API. Single
//! attempt per call, no retry; callers surface failures in the UI.

pub mod client;

pub use client::ProfileClient;
