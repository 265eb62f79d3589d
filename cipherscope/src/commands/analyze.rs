// cipherscope/src/commands/analyze.rs
//! Analyze command implementation: statistics summary, frequency chart,
//! and JSON export.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io;

use cipherscope_core::{headless_analyze_string, AnalysisConfig};

use super::read_input;
use crate::cli::AnalyzeCommand;
use crate::ui::{chart, report};

/// The main operation runner for the `analyze` command.
pub fn run_analyze(args: &AnalyzeCommand) -> Result<()> {
    info!("Starting analyze operation.");

    let (input, source_id) = read_input(args.input_file.as_deref())?;

    let config = match &args.config {
        Some(path) => AnalysisConfig::load_from_file(path)?,
        None => AnalysisConfig::load_default_rules()?,
    };

    let analysis = headless_analyze_string(&config, &input, &source_id).context("Analysis failed")?;
    debug!(
        "Analysis of {} produced family '{}'.",
        source_id, analysis.family
    );

    // With --json-stdout the stream must stay pure JSON.
    if args.json_stdout {
        println!("{}", analysis.to_json()?);
        return Ok(());
    }

    if let Some(path) = &args.json_file {
        fs::write(path, analysis.to_json()?)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        info!("Wrote JSON report to {}", path.display());
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let use_color = stdout.is_terminal();

    report::print_summary(&analysis, &mut writer, use_color)?;
    if !args.no_chart && args.json_file.is_none() {
        chart::print_frequency_chart(&analysis.frequencies, &mut writer, use_color)?;
    }

    info!("Analyze operation completed.");
    Ok(())
}
