//! # bizcal-core
//!
//! Core types and error definitions for bizcal.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error enum, the `Result` alias, and the validation macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
