//! Dashboard layer over `moodlog_core`: owns the store handle, resolves
//! the asynchronous read, and assembles plain view data for whatever
//! renders it.

pub mod error;
pub mod service;
pub mod types;

mod test_utils;

pub use error::{DashboardError, DashboardResult};
pub use service::DashboardService;
pub use types::DashboardSummary;
