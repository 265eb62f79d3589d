// cipherscope/src/ui/report.rs
//! Renders the analysis summary as a table.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::Write;

use cipherscope_core::AnalysisReport;

/// Prints the statistics summary table for one analysis.
///
/// Entropy is shown to 3 decimal places and index of coincidence to 4,
/// the precision these statistics are usually quoted at.
pub fn print_summary(
    report: &AnalysisReport,
    writer: &mut impl Write,
    use_color: bool,
) -> Result<()> {
    if use_color {
        writeln!(writer, "{}", "=== Letter Statistics ===".bold())?;
    } else {
        writeln!(writer, "=== Letter Statistics ===")?;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statistic", "Value"]);
    table.add_row(vec![
        Cell::new("Source"),
        Cell::new(&report.source_id),
    ]);
    table.add_row(vec![
        Cell::new("Letters"),
        Cell::new(report.letters.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Entropy (bits)"),
        Cell::new(format!("{:.3}", report.entropy_bits)),
    ]);
    table.add_row(vec![
        Cell::new("Index of coincidence"),
        Cell::new(format!("{:.4}", report.index_of_coincidence)),
    ]);
    let family_cell = if use_color {
        Cell::new(&report.family).fg(Color::Cyan)
    } else {
        Cell::new(&report.family)
    };
    table.add_row(vec![Cell::new("Family"), family_cell]);

    writeln!(writer, "{table}")?;
    Ok(())
}
