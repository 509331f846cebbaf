//! The one failure kind surfaced when a release list cannot be fetched.

use reqwest::StatusCode;
use std::fmt;

/// Stage at which a fetch failed.
///
/// Only used to make log diagnostics more useful; callers treat every
/// [`FetchFailure`] the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Connection, TLS, timeout or body read error
    Transport,
    /// The server answered with a non-success status
    Status(u16),
    /// The body is not a valid release collection
    Malformed,
}

/// A failed fetch of a release collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    url: String,
    stage: FailureStage,
    detail: String,
}

impl FetchFailure {
    pub fn transport(url: &str, detail: impl fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            stage: FailureStage::Transport,
            detail: detail.to_string(),
        }
    }

    pub fn status(url: &str, status: StatusCode) -> Self {
        Self {
            url: url.to_string(),
            stage: FailureStage::Status(status.as_u16()),
            detail: status.to_string(),
        }
    }

    pub fn malformed(url: &str, detail: impl fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            stage: FailureStage::Malformed,
            detail: detail.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn stage(&self) -> FailureStage {
        self.stage
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            FailureStage::Transport => {
                write!(f, "Failed to reach {}: {}", self.url, self.detail)
            }
            FailureStage::Status(_) => {
                write!(f, "Request to {} failed with HTTP {}", self.url, self.detail)
            }
            FailureStage::Malformed => {
                write!(f, "Invalid release data from {}: {}", self.url, self.detail)
            }
        }
    }
}

impl std::error::Error for FetchFailure {}
