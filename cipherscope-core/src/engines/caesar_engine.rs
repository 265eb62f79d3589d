// cipherscope-core/src/engines/caesar_engine.rs
//! A `CipherEngine` implementation of the Caesar cipher, rotating every
//! letter by a fixed number of alphabet positions.
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use cipherscope_engine::transform::caesar;

use crate::engine::{CipherEngine, CipherKey, TransformMode};

/// A cipher engine that rotates letters by a fixed shift.
#[derive(Debug)]
pub struct CaesarEngine {
    key: CipherKey,
    shift: i32,
}

impl CaesarEngine {
    /// Initializes the engine with the provided shift.
    ///
    /// The shift is taken modulo 26 during the transform, so any `i32` is a
    /// valid key, including negative and oversized values.
    pub fn new(shift: i32) -> Self {
        log::debug!("Initializing CaesarEngine with shift: {}", shift);
        Self {
            key: CipherKey::Shift(shift),
            shift,
        }
    }
}

impl CipherEngine for CaesarEngine {
    fn transform(&self, content: &str, mode: TransformMode) -> Result<String> {
        let shift = match mode {
            TransformMode::Encrypt => self.shift,
            TransformMode::Decrypt => -self.shift,
        };
        Ok(caesar(content, shift))
    }

    fn name(&self) -> &'static str {
        "caesar"
    }

    fn key(&self) -> &CipherKey {
        &self.key
    }
}
