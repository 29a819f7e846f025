//! Error types for the volroot library.
//!
//! All fallible operations return `Result<T, VolRootError>` rather than
//! panicking, providing meaningful diagnostics for invalid inputs and
//! mathematical domain violations.
//!
//! A solve that runs to completion without finding a root is *not* an error:
//! it is the [`Failed`](crate::implied::SolverResult::Failed) arm of
//! [`SolverResult`](crate::implied::SolverResult), which carries the failure
//! reason, the last trial volatility, and the iteration count.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, VolRootError>;

/// Errors that can occur during option pricing and implied volatility
/// extraction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VolRootError {
    /// Input data is invalid (e.g., negative spot, zero expiry, non-finite
    /// rate, bad solver configuration).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A formula was evaluated outside its mathematical domain (e.g., zero
    /// volatility fed to the pricer, where d1/d2 divide by zero).
    #[error("domain error: {message}")]
    Domain { message: String },
}
