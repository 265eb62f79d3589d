// cipherscope/src/commands/transform.rs
//! Transform command implementation for encrypting and decrypting input.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use cipherscope_core::{headless_transform_string, CipherKey, TransformMode};

use super::read_input;
use crate::cli::{CipherChoice, TransformCommand};

/// The main operation runner for the `encrypt` and `decrypt` commands.
pub fn run_transform(args: &TransformCommand, mode: TransformMode) -> Result<()> {
    info!("Starting transform operation.");

    let (input, source_id) = read_input(args.input_file.as_deref())?;

    // The single key flag is interpreted by the selected cipher.
    let key = match args.cipher {
        CipherChoice::Caesar => CipherKey::shift_from_str(&args.key)?,
        CipherChoice::Vigenere => CipherKey::Keyword(args.key.clone()),
    };

    let transformed =
        headless_transform_string(&key, mode, &input, &source_id).context("Transform failed")?;

    debug!(
        "Content transformed. Input length: {}, output length: {}",
        input.len(),
        transformed.len()
    );

    write_output(args.output.as_deref(), &transformed)?;

    info!("Transform operation completed.");
    Ok(())
}

fn write_output(path: Option<&Path>, transformed: &str) -> Result<()> {
    if let Some(path) = path {
        info!("Writing transformed content to file: {}", path.display());
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", transformed)?;
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", transformed)?;
    }
    Ok(())
}
