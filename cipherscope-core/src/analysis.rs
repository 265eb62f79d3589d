// cipherscope-core/src/analysis.rs
//! Provides the serializable analysis report and the statistics pipeline
//! that produces it within the `cipherscope-core` library.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use cipherscope_engine::classify::classify;
use cipherscope_engine::coincidence::index_of_coincidence;
use cipherscope_engine::entropy::shannon_entropy;
use cipherscope_engine::frequency::{frequency_vector, letter_counts, total_letters};

use crate::config::AnalysisConfig;
use crate::errors::CipherscopeError;

/// A full statistical record for one analyzed input.
///
/// Recomputed fresh on every analysis and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identifier of the analyzed source (file path or pseudo id).
    pub source_id: String,
    /// When the analysis ran. Serializes as an RFC 3339 string.
    pub timestamp: DateTime<Utc>,
    /// Number of Latin letters that entered the statistics.
    pub letters: usize,
    /// Shannon entropy of the letter distribution, in bits per letter.
    pub entropy_bits: f64,
    /// Index of coincidence of the letter distribution.
    pub index_of_coincidence: f64,
    /// Heuristic cipher-family verdict label.
    pub family: String,
    /// Relative frequency per letter, A through Z.
    pub frequencies: Vec<f64>,
}

impl AnalysisReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CipherscopeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CipherscopeError::SerializationError(e.to_string()))
    }
}

/// Computes the full statistical report for `content`.
///
/// All statistics are taken over the Latin letters of the input only,
/// case-insensitively; everything else is ignored. The verdict comes from
/// the classifier table in `config`.
pub fn analyze_content(content: &str, source_id: &str, config: &AnalysisConfig) -> AnalysisReport {
    let counts = letter_counts(content);
    let letters = total_letters(&counts);
    let entropy_bits = shannon_entropy(content);
    let ioc = index_of_coincidence(content);
    let family = classify(entropy_bits, ioc, &config.classifier_rules());

    debug!(
        "Analyzed {}: {} letters, entropy {:.3} bits, ioc {:.4}, family {}",
        source_id, letters, entropy_bits, ioc, family
    );

    AnalysisReport {
        source_id: source_id.to_string(),
        timestamp: Utc::now(),
        letters,
        entropy_bits,
        index_of_coincidence: ioc,
        family: family.label().to_string(),
        frequencies: frequency_vector(content).to_vec(),
    }
}
