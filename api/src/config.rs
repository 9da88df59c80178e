//! Where the activities API lives.

use crate::ApiError;
use reqwest::Url;
use std::env;

/// Location of the activities API.
///
/// In the browser the API is served from the same origin as the page, so the
/// UI builds this from `window.location.origin`. Native builds (tests, tools)
/// read it from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Fallback used when `ROSTER_API_BASE_URL` is not set.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(format!("{base_url} cannot be a base url")));
        }
        Ok(Self { base_url })
    }

    /// Creates an ApiConfig from environment variables.
    ///
    /// # Environment Variables
    /// - `ROSTER_API_BASE_URL`: scheme, host and optional path prefix of the API.
    ///   defaults to [`Self::DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ApiError> {
        match env::var("ROSTER_API_BASE_URL") {
            Ok(val) if !val.trim().is_empty() => Self::new(val.trim()),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
