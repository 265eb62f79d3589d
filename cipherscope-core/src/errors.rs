//! errors.rs - Custom error types for the cipherscope-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cipherscope-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CipherscopeError {
    #[error("Invalid Caesar shift '{0}': expected a whole number of alphabet positions")]
    InvalidShift(String),

    #[error("Classifier rule {0}: {1}")]
    InvalidClassifierRule(usize, String),

    #[error("Classifier configuration contains no rules")]
    EmptyClassifierTable,

    #[error("Failed to serialize analysis report: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
