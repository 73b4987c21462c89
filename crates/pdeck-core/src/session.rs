//! The authenticated back-office session.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in back-office user, injected into the page
/// controller at construction. Officers get a read-only screen: the Edit
/// and KYC affordances are not offered to them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    /// Back-office user id, used for the KYC route and breadcrumb links.
    #[serde(default)]
    pub user_id: String,

    /// Whether the signed-in user is a compliance officer.
    #[serde(default)]
    pub officer: bool,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>, officer: bool) -> Self {
        Self {
            user_id: user_id.into(),
            officer,
        }
    }

    /// Whether this session may enter edit mode.
    pub fn can_edit(&self) -> bool {
        !self.officer
    }
}
