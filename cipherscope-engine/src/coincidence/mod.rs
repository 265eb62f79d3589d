// cipherscope-engine/src/coincidence/mod.rs
//! Index of coincidence over the letter tally.

use crate::frequency::{letter_counts, total_letters};

/// Calculates the index of coincidence of the letters of `text`.
///
/// The statistic is the probability that two letters drawn without
/// replacement are equal: `sum(c * (c - 1)) / (n * (n - 1))` over the
/// per-letter counts `c` and the letter total `n`. Fewer than two letters
/// yield 0.0 since no pair can be drawn. English plaintext and
/// monoalphabetic ciphertext sit near 0.065, flattened polyalphabetic
/// ciphertext near the uniform 1/26.
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n = total_letters(&counts);
    if n < 2 {
        return 0.0;
    }

    let mut pairs = 0usize;
    for &count in counts.iter() {
        if count > 1 {
            pairs += count * (count - 1);
        }
    }

    pairs as f64 / (n * (n - 1)) as f64
}
