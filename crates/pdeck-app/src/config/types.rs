//! Configuration types for Profile Deck

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub web: WebSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Profile service endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiSettings {
    /// Base URL of the back-office API. The deployment-time value the web
    /// client bakes in at build time lives here instead.
    #[serde(default = "default_api_base")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Session cookie sent with every request (credentials-included)
    #[serde(default)]
    pub session_cookie: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
            timeout_ms: default_timeout_ms(),
            session_cookie: None,
        }
    }
}

/// Back-office web application settings (for browser navigation)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WebSettings {
    /// Base URL of the back-office web app, used to build the KYC route
    #[serde(default = "default_web_base")]
    pub base_url: String,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            base_url: default_web_base(),
        }
    }
}

/// Signed-in user identity settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionSettings {
    /// Back-office user id of the record being administered
    #[serde(default)]
    pub user_id: String,

    /// Whether the signed-in user is a compliance officer (read-only screen)
    #[serde(default)]
    pub officer: bool,
}

/// Behavior toggles
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BehaviorSettings {
    /// Ask before discarding an edited draft
    #[serde(default = "default_true")]
    pub confirm_discard: bool,

    /// Ask before quitting with an edited draft
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_discard: true,
            confirm_quit: true,
        }
    }
}

fn default_api_base() -> String {
    "http://localhost:8080/".to_string()
}

fn default_web_base() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}
