// cipherscope/src/cli.rs
//! This file defines the command-line interface (CLI) for the cipherscope
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cipherscope",
    author = "Cipherscope Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classical-cipher transforms and letter-statistics analysis",
    long_about = "Cipherscope is a command-line utility for working with classical substitution ciphers. It encrypts and decrypts text with the Caesar and Vigenère ciphers, and analyzes arbitrary text for letter-frequency distribution, Shannon entropy, and index of coincidence, using those statistics to produce a coarse heuristic guess at the cipher family.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'cipherscope' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cipherscope` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypts an input file or stdin with the selected cipher.
    #[command(about = "Encrypts an input file or stdin with the selected cipher.")]
    Encrypt(TransformCommand),

    /// Decrypts an input file or stdin with the selected cipher.
    #[command(about = "Decrypts an input file or stdin with the selected cipher.")]
    Decrypt(TransformCommand),

    /// Analyzes an input's letter statistics and guesses the cipher family.
    #[command(about = "Analyzes an input's letter statistics and guesses the cipher family.")]
    Analyze(AnalyzeCommand),
}

/// Arguments shared by the `encrypt` and `decrypt` commands.
#[derive(Parser, Debug)]
pub struct TransformCommand {
    /// Select which cipher to apply.
    #[arg(long = "cipher", value_name = "CIPHER", default_value = "caesar", help = "Select a cipher ('caesar' or 'vigenere').")]
    pub cipher: CipherChoice,

    /// The cipher key: an integer shift for Caesar, a keyword for Vigenère.
    #[arg(
        long,
        short = 'k',
        value_name = "KEY",
        allow_negative_numbers = true,
        help = "The cipher key: an integer shift for Caesar, a keyword for Vigenère."
    )]
    pub key: String,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write transformed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom classifier configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom classifier configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Suppress the letter-frequency bar chart.
    #[arg(long = "no-chart", help = "Suppress the letter-frequency bar chart.")]
    pub no_chart: bool,

    /// Export the analysis report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the analysis report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the analysis report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the analysis report to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Enum for selecting the cipher.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum CipherChoice {
    /// Fixed-shift rotation of every letter.
    Caesar,
    /// Keyword-driven rotation with a cycling key.
    Vigenere,
}
