//! Shared application state for the activities API.
//!
//! [`AppState`] owns the [`ActivityDirectory`] behind a read-write lock.
//! Each handler holds the lock for exactly one directory operation, so a
//! signup's duplicate check and append cannot interleave with another
//! request.

use std::path::PathBuf;
use std::sync::Arc;

use mergington_core::ActivityDirectory;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity directory.
    pub directory: Arc<RwLock<ActivityDirectory>>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create state around the given directory, serving static files from
    /// `static_dir`.
    pub fn new(directory: ActivityDirectory, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            static_dir: static_dir.into(),
        }
    }

    /// Create state with the seed catalog and the default `static` directory.
    pub fn seeded() -> Self {
        Self::new(ActivityDirectory::seeded(), "static")
    }
}
