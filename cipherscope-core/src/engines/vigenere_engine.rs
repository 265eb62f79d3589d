// cipherscope-core/src/engines/vigenere_engine.rs
//! A `CipherEngine` implementation of the Vigenère cipher, rotating each
//! letter by the alphabet index of the next keyword letter.
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use cipherscope_engine::alphabet::normalize;
use cipherscope_engine::transform::vigenere;

use crate::engine::{CipherEngine, CipherKey, TransformMode};

/// A cipher engine driven by a cycling keyword.
#[derive(Debug)]
pub struct VigenereEngine {
    key: CipherKey,
}

impl VigenereEngine {
    /// Initializes the engine with the provided keyword.
    ///
    /// The keyword is used case-insensitively and non-letters in it are
    /// ignored. A keyword with no letters at all leaves the engine as an
    /// identity transform; that is legal but almost never intended, so it
    /// is logged.
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if normalize(&keyword).is_empty() {
            log::warn!(
                "Vigenère keyword '{}' contains no letters; transforms will return input unchanged.",
                keyword
            );
        } else {
            log::debug!("Initializing VigenereEngine with keyword: {}", keyword);
        }
        Self {
            key: CipherKey::Keyword(keyword),
        }
    }

    fn keyword(&self) -> &str {
        match &self.key {
            CipherKey::Keyword(word) => word,
            // Constructor only ever stores a Keyword.
            CipherKey::Shift(_) => "",
        }
    }
}

impl CipherEngine for VigenereEngine {
    fn transform(&self, content: &str, mode: TransformMode) -> Result<String> {
        let decrypt = mode == TransformMode::Decrypt;
        Ok(vigenere(content, self.keyword(), decrypt))
    }

    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn key(&self) -> &CipherKey {
        &self.key
    }
}
