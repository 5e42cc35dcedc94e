//! Error types for longweekend-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. The `ensure!` macro is a
//! shorthand for returning precondition failures.

use thiserror::Error;

/// The top-level error type used throughout longweekend-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, invalid day of month, ...).
    #[error("date error: {0}")]
    Date(String),

    /// The holiday feed as a whole could not be read.
    #[error("holiday feed error: {0}")]
    Feed(String),

    /// A configuration document could not be read or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout longweekend-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lw_core::ensure;
/// fn positive(x: i32) -> lw_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
