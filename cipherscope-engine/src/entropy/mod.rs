// cipherscope-engine/src/entropy/mod.rs
use libm::log2;

use crate::frequency::{letter_counts, total_letters};
use crate::EntropyBits;

/// Calculates the Shannon entropy of the letter distribution of `text`.
///
/// Only characters with an alphabet index contribute, counted
/// case-insensitively. Returns the entropy in bits per letter; a text
/// with no letters scores 0.0.
pub fn shannon_entropy(text: &str) -> EntropyBits {
    let counts = letter_counts(text);
    let total = total_letters(&counts);
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;

    for &count in counts.iter() {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * log2(p);
        }
    }

    entropy
}
