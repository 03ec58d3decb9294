//! Platform services for the tour planner.
//!
//! ## Usage
//!
//! Create the services once at app startup and hand them to the pages that
//! need them: session storage for carrying data between pages, the share
//! service for the visitor report, and viewport state for responsive sizing.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod session_storage;
pub mod share;
pub mod viewport;

pub use session_storage::{SessionStorage, StorageError};
pub use share::{ShareData, ShareError, ShareOutcome, ShareService, ShareTarget};
pub use viewport::{ContainerMinHeight, Viewport, ViewportState};
