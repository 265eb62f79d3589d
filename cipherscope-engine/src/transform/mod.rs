// cipherscope-engine/src/transform/mod.rs
//! The Caesar and Vigenère text transforms.
//!
//! Both rewrite only characters with an alphabet index, preserve the case
//! of every rewritten character, and pass everything else through verbatim,
//! so punctuation, digits, whitespace and non-Latin text survive a
//! roundtrip untouched.

use alloc::string::String;

use crate::alphabet::{letter_index, normalize, shift_letter};

/// Applies a Caesar rotation of `shift` positions to every letter of `text`.
///
/// `shift` may be zero, negative, or larger than the alphabet; the
/// effective rotation is `shift` modulo 26. Decryption is the same walk
/// with the negated shift.
pub fn caesar(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Applies the Vigenère cipher to `text` under `key`.
///
/// The key is normalized first: uppercased with non-letters dropped. A key
/// that normalizes to nothing turns the call into a no-op and the input is
/// returned unchanged. Key letters cycle over the alphabetic characters of
/// the input only; a character without an alphabet index passes through
/// without consuming a key position. Each letter is rotated by its key
/// letter's alphabet index, negated when `decrypt` is set. Output case
/// follows the input character, never the key.
pub fn vigenere(text: &str, key: &str, decrypt: bool) -> String {
    let key = normalize(key);
    if key.is_empty() {
        return String::from(text);
    }

    let key = key.as_bytes();
    let mut cursor = 0usize;

    text.chars()
        .map(|c| {
            if letter_index(c).is_none() {
                return c;
            }
            let shift = (key[cursor % key.len()] - b'A') as i32;
            cursor += 1;
            shift_letter(c, if decrypt { -shift } else { shift })
        })
        .collect()
}
