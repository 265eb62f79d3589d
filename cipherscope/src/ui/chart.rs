// cipherscope/src/ui/chart.rs
//! Renders the 26-letter frequency distribution as a terminal bar chart.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

/// Bar width in characters for the most frequent letter.
const BAR_WIDTH: f64 = 40.0;

/// Prints one row per letter A-Z with its relative frequency and a bar.
///
/// Bars are scaled against the most frequent letter so the chart stays
/// readable for any input length; a letterless input renders all rows
/// with empty bars.
pub fn print_frequency_chart(
    frequencies: &[f64],
    writer: &mut impl Write,
    use_color: bool,
) -> Result<()> {
    let max = frequencies.iter().cloned().fold(0.0f64, f64::max);

    writeln!(writer)?;
    writeln!(writer, "Letter   Freq  Bar")?;
    writeln!(writer, "{}", "─".repeat(14 + BAR_WIDTH as usize))?;

    for (index, &frequency) in frequencies.iter().enumerate() {
        let letter = (b'A' + index as u8) as char;
        let bar_len = if max > 0.0 {
            ((frequency / max) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let bar: String = "█".repeat(bar_len);
        let percentage = frequency * 100.0;
        if use_color {
            writeln!(writer, "{}    {:>6.2}%  {}", letter, percentage, bar.cyan())?;
        } else {
            writeln!(writer, "{}    {:>6.2}%  {}", letter, percentage, bar)?;
        }
    }

    Ok(())
}
