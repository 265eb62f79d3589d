// cipherscope-core/src/headless.rs
// File: cipherscope-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using core engines in headless mode (non-UI).
//! Provides helper functions for one-shot transforms and analyses of strings.
//!
//! The cipher is selected by the key variant: a numeric shift runs the
//! Caesar engine, a keyword runs the Vigenère engine.

use anyhow::Result;

use crate::analysis::{analyze_content, AnalysisReport};
use crate::config::AnalysisConfig;
use crate::engine::{CipherEngine, CipherKey, TransformMode};
use crate::engines::caesar_engine::CaesarEngine;
use crate::engines::vigenere_engine::VigenereEngine;

/// Transforms an input string in a single call.
/// This function is the primary entry point for non-interactive (headless) use.
///
/// # Arguments
///
/// * `key` - The cipher key; its variant selects the engine.
/// * `mode` - Whether to encrypt or decrypt.
/// * `content` - The string to be transformed.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_transform_string(
    key: &CipherKey,
    mode: TransformMode,
    content: &str,
    source_id: &str,
) -> Result<String> {
    // Dynamically instantiate the selected engine behind the CipherEngine trait.
    let engine: Box<dyn CipherEngine> = match key {
        CipherKey::Shift(shift) => Box::new(CaesarEngine::new(*shift)),
        CipherKey::Keyword(word) => Box::new(VigenereEngine::new(word.clone())),
    };

    log::debug!(
        "Headless transform of {} with {} engine ({})",
        source_id,
        engine.name(),
        engine.key()
    );

    engine.transform(content, mode)
}

/// Computes the full statistical report for an input string in a single call.
///
/// # Arguments
///
/// * `config` - The classifier configuration (defaults or a user override).
/// * `content` - The string to analyze.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_analyze_string(
    config: &AnalysisConfig,
    content: &str,
    source_id: &str,
) -> Result<AnalysisReport> {
    Ok(analyze_content(content, source_id, config))
}
