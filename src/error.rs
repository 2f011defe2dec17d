//! Sync Errors
//!
//! Every failure degrades to "stale but consistent" DOM state; nothing here
//! is fatal to the page.

use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The request was rejected by the browser or the server was unreachable
    #[error("network request failed: {0}")]
    Network(String),

    /// Non-2xx status or non-JSON content type
    #[error("unexpected response: status {status}, content type {content_type:?}")]
    InvalidResponse {
        status: u16,
        content_type: Option<String>,
    },

    #[error("response body could not be decoded: {0}")]
    Decode(String),

    /// The backend answered `success: false`
    #[error("request rejected by server{}", .0.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected(Option<String>),

    /// A required browser object or element is missing
    #[error("browser environment unavailable: {0}")]
    Dom(&'static str),
}

impl From<gloo_net::Error> for SyncError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => SyncError::Decode(e.to_string()),
            other => SyncError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}
