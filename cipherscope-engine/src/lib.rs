// cipherscope-engine/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod classify;
pub mod coincidence;
pub mod entropy;
pub mod frequency;
pub mod transform;

/// Common type definitions
pub type EntropyBits = f64;

/// Relative letter frequencies indexed by alphabet position (A = 0, Z = 25).
pub type FrequencyVector = [f64; alphabet::ALPHABET_LEN];
