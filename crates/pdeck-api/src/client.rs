//! HTTP client for the profile service.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use pdeck_core::{Error, Profile, Result};

/// Path of the profile resource under the API base.
const PROFILE_PATH: &str = "u/profile";

/// Client for the back-office profile service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base: Url,
}

impl ProfileClient {
    /// Create a client against `base_url`.
    ///
    /// `session_cookie` is the back-office session cookie sent with every
    /// request (the credentials-included behavior of the web client).
    pub fn new(base_url: &str, timeout_ms: u64, session_cookie: Option<&str>) -> Result<Self> {
        let base = normalize_base(base_url)?;

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value = reqwest::header::HeaderValue::from_str(cookie)
                .map_err(|_| Error::config_invalid("session cookie contains invalid characters"))?;
            headers.insert(reqwest::header::COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    /// Read the current profile record.
    ///
    /// One attempt; transport and status failures map to recoverable errors
    /// for the UI to surface.
    pub async fn fetch_profile(&self) -> Result<Profile> {
        let url = self.profile_url()?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::api(format!("profile read failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("profile read returned status {status}");
            return Err(Error::api_status(status.as_u16()));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| Error::api(format!("profile response did not parse: {e}")))
    }

    /// Persist an edited profile, returning the server's authoritative
    /// version of the record.
    pub async fn save_profile(&self, profile: &Profile) -> Result<Profile> {
        let url = self.profile_url()?;
        debug!("PUT {url}");

        let response = self
            .http
            .put(url)
            .json(profile)
            .send()
            .await
            .map_err(|e| Error::api(format!("profile save failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("profile save returned status {status}");
            return Err(Error::api_status(status.as_u16()));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| Error::api(format!("save response did not parse: {e}")))
    }

    fn profile_url(&self) -> Result<Url> {
        self.base
            .join(PROFILE_PATH)
            .map_err(|_| Error::api_url(self.base.as_str()))
    }
}

/// Parse the configured base URL, guaranteeing a trailing slash so that
/// joining the resource path never swallows the last path segment.
fn normalize_base(base_url: &str) -> Result<Url> {
    let with_slash = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&with_slash).map_err(|_| Error::api_url(base_url))
}
