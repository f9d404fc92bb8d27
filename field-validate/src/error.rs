//! Error types for the async driver.

use thiserror::Error;

/// Errors reported by [`FieldHandle`](crate::driver::FieldHandle) and
/// [`Driver`](crate::driver::Driver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver loop has ended (unmounted or all handles dropped).
    #[error("field driver has stopped")]
    Closed,

    /// The driver task panicked or was aborted.
    #[error("field driver task failed: {0}")]
    Join(String),
}
