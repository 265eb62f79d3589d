// cipherscope-engine/src/alphabet/mod.rs
//! The canonical 26-letter alphabet and its two primitives: index lookup
//! and case-preserving rotation, plus the normalizer used by every
//! statistics function.

use alloc::string::String;

/// The cipher alphabet: the 26 uppercase Latin letters in canonical order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Returns the alphabet index (0 to 25) of an ASCII letter, ignoring case.
///
/// Everything outside A-Z and a-z has no index.
pub fn letter_index(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Rotates a single character by `shift` alphabet positions, preserving its
/// case. Characters without an alphabet index pass through unchanged.
///
/// Any `shift` is accepted: the effective rotation is the Euclidean
/// remainder modulo 26, so negative and out-of-range shifts always land
/// back inside the alphabet.
pub fn shift_letter(c: char, shift: i32) -> char {
    let Some(idx) = letter_index(c) else {
        return c;
    };
    let rotated = (idx as i32 + shift).rem_euclid(ALPHABET_LEN as i32) as u8;
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    (base + rotated) as char
}

/// Uppercases `text` and strips every character outside A-Z.
///
/// Total over all string inputs (the empty string maps to itself) and
/// idempotent. The result is the canonical form consumed by the statistics
/// functions; the cipher transforms never normalize their input.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}
