// cipherscope-core/src/engine.rs
//! Defines the core CipherEngine trait and related data structures.
//!
//! The `CipherEngine` trait provides a pluggable interface for different
//! classical ciphers (e.g., Caesar, Vigenère). This module defines the
//! contract that all such engines must adhere to, ensuring a consistent
//! and interchangeable core API for `cipherscope`.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use anyhow::Result;

use crate::errors::CipherscopeError;

/// The key material driving a cipher engine.
///
/// Each variant corresponds to one engine family: a numeric shift selects
/// the Caesar cipher, a keyword selects the Vigenère cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Rotation in alphabet positions. May be negative or exceed 26.
    Shift(i32),
    /// Vigenère keyword. Normalized to uppercase letters before use.
    Keyword(String),
}

impl CipherKey {
    /// Parses a Caesar shift from user input.
    ///
    /// Accepts any decimal integer with optional sign and surrounding
    /// whitespace. Anything else is rejected rather than silently treated
    /// as a zero shift.
    pub fn shift_from_str(raw: &str) -> Result<Self, CipherscopeError> {
        raw.trim()
            .parse::<i32>()
            .map(CipherKey::Shift)
            .map_err(|_| CipherscopeError::InvalidShift(raw.to_string()))
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Shift(n) => write!(f, "shift {}", n),
            CipherKey::Keyword(word) => write!(f, "keyword '{}'", word),
        }
    }
}

/// Direction of a cipher transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    Encrypt,
    Decrypt,
}

/// A trait that defines the core functionality of a cipher engine.
///
/// This trait decouples the high-level application logic from the specific
/// cipher implementation, allowing for different engines to be used
/// interchangeably.
pub trait CipherEngine: Send + Sync {
    /// Applies the cipher transform in the given direction.
    ///
    /// Implementations must preserve every character without an alphabet
    /// index verbatim, preserve the case of every rewritten letter, and
    /// guarantee that encrypting and then decrypting with the same key
    /// returns the original content.
    ///
    /// # Arguments
    /// * `content` - The input string to transform.
    /// * `mode` - Whether to encrypt or decrypt.
    fn transform(&self, content: &str, mode: TransformMode) -> Result<String>;

    /// Returns the stable engine name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the key this engine was constructed with.
    fn key(&self) -> &CipherKey;
}
