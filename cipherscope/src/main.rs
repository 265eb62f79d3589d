// cipherscope/src/main.rs
//! Cipherscope entry point.
//!
//! Parses the command line, initializes logging, and dispatches to the
//! selected subcommand.

use anyhow::Result;
use clap::Parser;

use cipherscope::cli::{Cli, Commands};
use cipherscope::commands::{analyze, transform};
use cipherscope::logger;
use cipherscope_core::TransformMode;

fn main() -> Result<()> {
    let args = Cli::parse();

    // --quiet wins over --debug; --disable-debug caps an inherited RUST_LOG.
    let level_override = if args.quiet {
        Some(log::LevelFilter::Off)
    } else if args.debug {
        Some(log::LevelFilter::Debug)
    } else if args.disable_debug {
        Some(log::LevelFilter::Warn)
    } else {
        None
    };
    logger::init_logger(level_override);

    match &args.command {
        Commands::Encrypt(cmd) => transform::run_transform(cmd, TransformMode::Encrypt)?,
        Commands::Decrypt(cmd) => transform::run_transform(cmd, TransformMode::Decrypt)?,
        Commands::Analyze(cmd) => analyze::run_analyze(cmd)?,
    }

    Ok(())
}
