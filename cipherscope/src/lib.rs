// cipherscope/src/lib.rs
//! # Cipherscope CLI Application
//!
//! This crate provides the terminal interface for the `cipherscope-core`
//! library: classical cipher transforms plus letter-statistics analysis.
//! The binary in `main.rs` parses arguments and dispatches into
//! [`commands`]; all terminal rendering lives in [`ui`].

pub mod commands;
pub mod cli;
pub mod ui;
pub mod logger;
