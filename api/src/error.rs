//! Errors surfaced by calls against the activities API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connectivity loss, CORS, bad URL).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server rejected request with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid api url: {0}")]
    Url(String),
}

impl ApiError {
    /// The server-supplied `detail`, if the server rejected the request with one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `true` when the request failed before any status line was received.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Url(_))
    }

    /// `true` when there is no usable answer at all: the request failed in
    /// transit, or a success body could not be read.
    pub fn is_unanswered(&self) -> bool {
        self.is_network() || matches!(self, ApiError::Decode(_))
    }
}
