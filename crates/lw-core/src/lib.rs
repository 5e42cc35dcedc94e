//! # lw-core
//!
//! Core error definitions and text parsers for longweekend-rs.
//!
//! This crate provides the foundational pieces shared across all other
//! crates in the workspace: the error hierarchy with its `ensure!` macro, and
//! the small parsers used to read dates out of holiday feeds and command-line
//! arguments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
