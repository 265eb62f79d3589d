// cipherscope-engine/src/frequency/mod.rs
//! Letter-frequency tallies over the 26-letter Latin alphabet.
//!
//! All counting is case-insensitive and ignores characters without an
//! alphabet index, so `"Aa, b!"` tallies two As and one B.

use crate::alphabet::{letter_index, ALPHABET_LEN};
use crate::FrequencyVector;

/// Absolute letter counts indexed by alphabet position (A = 0, Z = 25).
pub type LetterCounts = [usize; ALPHABET_LEN];

/// Tallies the letters of `text` into absolute counts.
pub fn letter_counts(text: &str) -> LetterCounts {
    let mut counts = [0usize; ALPHABET_LEN];
    for c in text.chars() {
        if let Some(idx) = letter_index(c) {
            counts[idx as usize] += 1;
        }
    }
    counts
}

/// Total number of counted letters in a tally.
pub fn total_letters(counts: &LetterCounts) -> usize {
    counts.iter().sum()
}

/// Computes the relative frequency of each letter of `text`.
///
/// Each slot holds `count / total_letters`, so the vector sums to 1 when
/// the input contains at least one letter. An input with no letters yields
/// the all-zero vector rather than dividing by zero.
pub fn frequency_vector(text: &str) -> FrequencyVector {
    let counts = letter_counts(text);
    let total = total_letters(&counts);

    let mut frequencies = [0.0f64; ALPHABET_LEN];
    if total == 0 {
        return frequencies;
    }
    for (slot, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *slot = count as f64 / total as f64;
    }
    frequencies
}
