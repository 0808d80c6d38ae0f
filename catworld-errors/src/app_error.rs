use serde::{Deserialize, Serialize};
use std::str::FromStr;

const REMOTE_FAILED_PREFIX: &str = "Remote operation failed: ";

/// The only failure the Cat API client reports: a non-success status,
/// a transport error or an undecodable body all collapse into this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Remote operation failed: {0}")]
    RemoteFailed(String),
}

impl AppError {
    pub fn remote(reason: impl Into<String>) -> Self {
        Self::RemoteFailed(reason.into())
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::RemoteFailed(reason) => reason,
        }
    }
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Server function errors arrive as text, sometimes wrapped by the transport.
        let reason = match s.find(REMOTE_FAILED_PREFIX) {
            Some(idx) => &s[idx + REMOTE_FAILED_PREFIX.len()..],
            None => s,
        };
        Ok(AppError::RemoteFailed(reason.to_string()))
    }
}
