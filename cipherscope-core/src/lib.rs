// cipherscope-core/src/lib.rs
//! # Cipherscope Core Library
//!
//! `cipherscope-core` provides the platform-independent orchestration logic
//! for classical-cipher transforms and letter-statistics analysis. It parses
//! and validates cipher keys at the boundary, implements a pluggable
//! `CipherEngine` trait for applying transforms, and produces serializable
//! statistical reports with a configurable cipher-family classifier.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation and measurement of input text, without concerns for I/O or
//! application-specific state management. The letter-level mathematics lives
//! in the `cipherscope-engine` crate; this crate adds keys, configuration,
//! reporting, and errors around it.
//!
//! ## Modules
//!
//! * `config`: Defines `AnalysisConfig` and the YAML classifier rule table.
//! * `engine`: Defines the `CipherEngine` trait, `CipherKey`, and `TransformMode`.
//! * `engines`: Contains concrete implementations of the `CipherEngine` trait.
//! * `analysis`: Defines the `AnalysisReport` record and the statistics pipeline.
//! * `headless`: Convenience wrappers for using core engines in a non-interactive mode.
//! * `errors`: The structured error type for the library.
//!
//! ## Public API
//!
//! The public API provides a cohesive set of types and functions for
//! configuring and running cipher engines. Key components are organized by
//! functionality:
//!
//! **Configuration**
//!
//! * [`AnalysisConfig`]: The classifier rule table, with loading and validation.
//! * [`AnalysisConfig::load_from_file`]: Loads a rule table from a YAML file.
//! * [`AnalysisConfig::load_default_rules`]: Loads the built-in rule table.
//!
//! **Cipher Engines**
//!
//! * [`CipherEngine`]: A trait for pluggable cipher implementations.
//! * [`CaesarEngine`], [`VigenereEngine`]: The concrete implementations.
//! * [`CipherKey`]: Key material; its variant selects the engine family.
//!
//! **Analysis Reporting**
//!
//! * [`AnalysisReport`]: Letter count, entropy, index of coincidence, family
//!   verdict, and the 26-letter frequency vector for one input.
//!
//! **Headless Mode**
//!
//! * [`headless_transform_string`]: A convenience function for a one-shot transform.
//! * [`headless_analyze_string`]: A convenience function for a one-shot analysis.
//!
//! ## Usage Example
//!
//! ```rust
//! use cipherscope_core::{
//!     headless_analyze_string, headless_transform_string, AnalysisConfig, CipherKey,
//!     TransformMode,
//! };
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Encrypt a message with a Caesar shift of 3.
//!     let key = CipherKey::Shift(3);
//!     let encrypted = headless_transform_string(
//!         &key,
//!         TransformMode::Encrypt,
//!         "Attack At Dawn",
//!         "demo.txt",
//!     )?;
//!     assert_eq!(encrypted, "Dwwdfn Dw Gdzq");
//!
//!     // 2. Analyze the ciphertext with the built-in classifier table.
//!     let config = AnalysisConfig::load_default_rules()?;
//!     let report = headless_analyze_string(&config, &encrypted, "demo.txt")?;
//!     println!("{} letters, family: {}", report.letters, report.family);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines the
//! structured `CipherscopeError` type for errors callers may want to handle
//! programmatically, such as an invalid Caesar shift.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `CipherEngine` trait allows different
//!   cipher families to be swapped out seamlessly.
//! * **Stateless:** The core library does not maintain application state.
//! * **Testable:** Logic is easily unit-testable in isolation.
//! * **Extensible:** The design supports adding new ciphers or classifier
//!   rules with minimal changes to the core application logic.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod analysis;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;

// Correctly re-exporting modules and types from their canonical locations.
// This ensures the public API is clean and well-defined.

/// Re-exports the public configuration types for the classifier rule table.
pub use config::{AnalysisConfig, ClassifierConfig, ClassifierRule, FamilyName, ThresholdConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CipherscopeError;

/// Re-exports types related to the core cipher engine trait.
pub use engine::{CipherEngine, CipherKey, TransformMode};

/// Re-exports the concrete `CaesarEngine` and `VigenereEngine` implementations
/// from their respective locations.
pub use engines::caesar_engine::CaesarEngine;
pub use engines::vigenere_engine::VigenereEngine;

/// Re-exports the analysis report type and the pipeline that produces it.
pub use analysis::{analyze_content, AnalysisReport};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_analyze_string, headless_transform_string};
