//! Application errors.

use thiserror::Error;
use tour_platform::StorageError;

/// Errors surfaced by the app shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing to or reading from session storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// No page is served from the path.
    #[error("no page is served from `{0}`")]
    UnknownPath(String),
}
