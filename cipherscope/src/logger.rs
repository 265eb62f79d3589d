// cipherscope/src/logger.rs
//! Logger initialization for the cipherscope CLI.
//!
//! Wraps `env_logger` so the binary and the test suite initialize logging
//! the same way. `RUST_LOG` is respected unless an explicit level override
//! is given by a CLI flag.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// With `None`, the level comes from `RUST_LOG`, defaulting to `warn`.
/// An explicit override wins over the environment. Repeated calls are
/// harmless, so tests may call this freely.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    // A second init attempt returns an error; ignore it.
    let _ = builder.try_init();
}
