//! # Docsim fingerprinting
//!
//! Converts canonical word streams into compact, comparable fingerprints.
//!
//! ## Contract
//!
//! - This layer consumes raw document text, normalizes it through the
//!   `canonical` crate, and never reads anything else: the API is a pure
//!   function of `(text, config)` with no I/O and no process-global state.
//! - For the same text and the same [`FingerprintConfig`], the selected
//!   fingerprints are identical on every machine. Only the `generated_at`
//!   timestamp differs between runs.
//!
//! ## Core pipeline
//!
//! 1. **N-gram hashing**: the normalized word sequence is sliced into
//!    overlapping `n`-word windows and each window is hashed with a
//!    deterministic polynomial hash ([`compute_ngram_hash`]).
//! 2. **Winnowing**: a window of `w` consecutive hashes slides over the
//!    sequence; the minimum of each window is selected with rightmost
//!    tie-breaking ([`winnow`]). Any shared word run of length
//!    `w + n - 1` between two documents is guaranteed to produce at least
//!    one shared fingerprint.
//!
//! Fingerprints keep their n-gram text so consumers can re-verify equality
//! on hash collisions, and their word/char offsets so matches can be
//! reconstructed as source spans.
//!
//! ## Example
//!
//! ```
//! use fingerprint::{generate_fingerprints, FingerprintConfig};
//!
//! let cfg = FingerprintConfig::default();
//! let set = generate_fingerprints(
//!     "The quick brown fox jumps over the lazy dog",
//!     "doc-1",
//!     &cfg,
//! ).unwrap();
//! assert!(!set.fingerprints.is_empty());
//! assert_eq!(set.ngram_size, 5);
//! ```

pub mod config;
mod error;
pub mod hash;
mod ngram;
mod set;
mod winnow;

pub use crate::config::{FingerprintConfig, DEFAULT_NGRAM_SIZE, DEFAULT_WINDOW_SIZE};
pub use crate::error::FingerprintError;
pub use crate::hash::{compute_hash, compute_ngram_hash, HASH_MOD, HASH_PRIME};
pub use crate::ngram::{generate_ngram_hashes, generate_ngrams, HashedNGram, NGram};
pub use crate::set::{fingerprint_corpus, generate_fingerprints, Fingerprint, FingerprintSet};
pub use crate::winnow::winnow;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn winnowing_guarantee_holds_for_shared_runs() {
        let cfg = FingerprintConfig::default();
        // Shared run of w + k - 1 = 8 words embedded in different contexts.
        let shared = "alpha beta gamma delta epsilon zeta eta theta";
        let doc_a = format!("completely unrelated opening words here {shared} and then some trailing text");
        let doc_b = format!("{shared} followed by an entirely different continuation of thought");

        let set_a = generate_fingerprints(&doc_a, "a", &cfg).unwrap();
        let set_b = generate_fingerprints(&doc_b, "b", &cfg).unwrap();

        let hashes_a: HashSet<u64> = set_a.hash_set();
        let hashes_b: HashSet<u64> = set_b.hash_set();
        assert!(
            hashes_a.intersection(&hashes_b).next().is_some(),
            "documents sharing a {}-word run must share a fingerprint",
            cfg.guarantee_threshold()
        );
    }

    #[test]
    fn disjoint_documents_share_nothing() {
        let cfg = FingerprintConfig::default();
        let set_a =
            generate_fingerprints("one two three four five six seven eight", "a", &cfg).unwrap();
        let set_b = generate_fingerprints(
            "nine ten eleven twelve thirteen fourteen fifteen sixteen",
            "b",
            &cfg,
        )
        .unwrap();
        let hashes_a = set_a.hash_set();
        let hashes_b = set_b.hash_set();
        assert!(hashes_a.intersection(&hashes_b).next().is_none());
    }

    #[test]
    fn smaller_ngram_size_finds_shorter_overlaps() {
        let quick = FingerprintConfig::new().with_ngram_size(4);
        let set = generate_fingerprints("just four words here", "doc", &quick).unwrap();
        assert_eq!(set.fingerprints.len(), 1);
        assert_eq!(set.ngram_size, 4);
    }
}
