//! Error types for the dashboard layer.

use thiserror::Error;

/// Dashboard orchestration errors. The analytics never fail; the only
/// failure that can reach a caller is the store read itself.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("store error: {0}")]
    Store(#[from] moodlog_core::JournalError),
}

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
