//! Sharing through the platform share sheet, with a manual-copy fallback.
//!
//! ## Usage
//!
//! Install a [`ShareTarget`] when the platform exposes a share capability.
//! Without one, [`ShareService::share`] reports [`ShareOutcome::Unsupported`]
//! with a message telling the user to copy the link manually.

use thiserror::Error;
use tracing::{error, info};

/// Message shown when no share capability is available.
pub const SHARE_UNSUPPORTED_MESSAGE: &str =
    "Share feature is not supported on this browser. You can copy the link manually!";

/// Payload handed to the platform share sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    /// Title of the shared item.
    pub title: String,
    /// Descriptive text.
    pub text: String,
    /// URL being shared.
    pub url: String,
}

impl ShareData {
    /// Creates a share payload.
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Errors a platform share capability can report.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("share was cancelled by the user")]
    Aborted,
    /// The platform refused or failed the request.
    #[error("share failed: {0}")]
    Platform(String),
}

/// A platform share capability.
pub trait ShareTarget: Send + Sync {
    /// Presents `data` to the platform share sheet.
    fn share(&self, data: &ShareData) -> Result<(), ShareError>;
}

/// Result of a share request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform accepted the payload.
    Shared,
    /// The platform reported an error; it has been logged.
    Failed(ShareError),
    /// No share capability exists; carries the fallback message.
    Unsupported(&'static str),
}

/// Share service with optional platform capability.
#[derive(Default)]
pub struct ShareService {
    target: Option<Box<dyn ShareTarget>>,
}

impl ShareService {
    /// Creates a service without share capability.
    pub fn unsupported() -> Self {
        Self { target: None }
    }

    /// Creates a service backed by `target`.
    pub fn with_target(target: impl ShareTarget + 'static) -> Self {
        Self {
            target: Some(Box::new(target)),
        }
    }

    /// Shares `data`, logging failures instead of surfacing them.
    pub fn share(&self, data: &ShareData) -> ShareOutcome {
        let Some(target) = &self.target else {
            return ShareOutcome::Unsupported(SHARE_UNSUPPORTED_MESSAGE);
        };
        match target.share(data) {
            Ok(()) => {
                info!("Report shared successfully!");
                ShareOutcome::Shared
            }
            Err(err) => {
                error!("Error sharing: {err}");
                ShareOutcome::Failed(err)
            }
        }
    }
}
