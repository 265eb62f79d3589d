// cipherscope/src/ui/mod.rs
//! Terminal rendering helpers for the cipherscope CLI.

pub mod chart;
pub mod report;
