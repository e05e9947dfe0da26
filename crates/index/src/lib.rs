//! # Docsim fingerprint index
//!
//! Sub-quadratic candidate discovery across many documents, plus the match
//! reconstruction that turns raw hash collisions into verified contiguous
//! spans.
//!
//! ## Contract
//!
//! - [`FingerprintIndex`] is built once from a snapshot of
//!   [`fingerprint::FingerprintSet`]s and is read-only afterwards. There is
//!   no incremental update; rebuild when the corpus changes.
//! - Every candidate pair has been re-verified for n-gram **text** equality.
//!   A hash collision between different texts can never surface as a match.
//! - Queries against an index that contains the query document under its
//!   own id skip that document entirely.
//!
//! ## Usage
//!
//! ```
//! use fingerprint::{generate_fingerprints, FingerprintConfig};
//! use index::{reconstruct_spans, FingerprintIndex};
//!
//! let cfg = FingerprintConfig::default();
//! let text = "the quick brown fox jumps over the lazy dog every single morning";
//! let query = generate_fingerprints(text, "query", &cfg).unwrap();
//! let source = generate_fingerprints(text, "other", &cfg).unwrap();
//!
//! let index = FingerprintIndex::build([&source]);
//! let candidates = index.candidates_for(&query);
//! assert!(candidates.contains_key("other"));
//! ```

mod inverted;
mod merge;

pub use crate::inverted::{find_matching_fingerprints, CandidatePair, FingerprintIndex};
pub use crate::merge::{merge_candidates, reconstruct_spans, MatchSpan};

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint::{generate_fingerprints, FingerprintConfig};

    #[test]
    fn end_to_end_span_reconstruction() {
        let cfg = FingerprintConfig::default();
        // Already canonical: lowercase, single spaces.
        let text = "the quick brown fox jumps over the lazy dog every single morning without fail";
        let query = generate_fingerprints(text, "query", &cfg).unwrap();
        let source = generate_fingerprints(text, "src", &cfg).unwrap();

        let idx = FingerprintIndex::build([&source]);
        let candidates = idx.candidates_for(&query);
        let pairs = candidates.get("src").expect("candidates for src");

        let words: Vec<&str> = text.split(' ').collect();
        let spans = reconstruct_spans(pairs, cfg.ngram_size, 5, &words, &words);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].query_start, 0);
        assert_eq!(spans[0].query_end, 14);
        assert_eq!(spans[0].word_count(), 14);
    }
}
