// cipherscope-core/src/engines/mod.rs
//! This module contains different cipher engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `CipherEngine` trait. This modular design allows for easy addition of
//! new cipher families, such as affine or columnar-transposition engines.
//!
//! To add a new engine, create a new file (e.g., `caesar_engine.rs`),
//! define its logic, and declare it here using `pub mod <engine_name>;`.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod caesar_engine;
pub mod vigenere_engine;
