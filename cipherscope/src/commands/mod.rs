// cipherscope/src/commands/mod.rs
//! Command implementations for the cipherscope CLI.

pub mod analyze;
pub mod transform;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the command input from a file or stdin.
///
/// Returns the content together with a stable source identifier for logs
/// and reports: the file path, or `"stdin"`.
pub(crate) fn read_input(input_file: Option<&Path>) -> Result<(String, String)> {
    match input_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok((content, path.display().to_string()))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok((content, "stdin".to_string()))
        }
    }
}
