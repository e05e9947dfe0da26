//! Deterministic polynomial hashing for n-grams.
//!
//! The hash is `h = (h * PRIME + char) mod MOD` iterated over the characters
//! of the space-joined n-gram. `MOD` is a large prime near 1e9; with u64
//! arithmetic the intermediate product never overflows
//! (`(MOD - 1) * PRIME + char_max < u64::MAX`), so no wraparound or
//! precision loss can occur. Hash collisions between distinct texts remain
//! possible and every consumer re-verifies n-gram text equality before
//! trusting a hash match.

/// Multiplier of the polynomial hash.
pub const HASH_PRIME: u64 = 31;

/// Modulus of the polynomial hash, a prime near 1e9.
pub const HASH_MOD: u64 = 1_000_000_007;

/// Hash a string with the polynomial rolling scheme.
pub fn compute_hash(text: &str) -> u64 {
    let mut h = 0u64;
    for ch in text.chars() {
        h = (h * HASH_PRIME + ch as u64) % HASH_MOD;
    }
    h
}

/// Hash an n-gram as if its words were joined by single spaces, without
/// allocating the joined string.
pub fn compute_ngram_hash<S: AsRef<str>>(words: &[S]) -> u64 {
    let mut h = 0u64;
    let mut first = true;
    for word in words {
        if !first {
            h = (h * HASH_PRIME + ' ' as u64) % HASH_MOD;
        }
        first = false;
        for ch in word.as_ref().chars() {
            h = (h * HASH_PRIME + ch as u64) % HASH_MOD;
        }
    }
    h
}
