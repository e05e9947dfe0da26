//! Inverted fingerprint index and candidate-pair discovery.
//!
//! The index is built once from a snapshot of fingerprint sets and is
//! read-only during queries; rebuilding after corpus changes is the
//! caller's responsibility. Every hash hit is re-verified against the
//! underlying n-gram text before it becomes a candidate pair, so hash
//! collisions can never surface as matches.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use fingerprint::{Fingerprint, FingerprintSet};

/// A verified pair of same-text fingerprints across two documents.
///
/// Offsets are word indices into the respective normalized word sequences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidatePair {
    /// Word offset of the n-gram in the query document.
    pub query_offset: usize,
    /// Word offset of the n-gram in the source document.
    pub source_offset: usize,
    /// The shared (verified) n-gram hash.
    pub hash: u64,
}

#[derive(Debug, Clone)]
struct Posting {
    document_id: String,
    fingerprint: Fingerprint,
}

/// Inverted multimap `hash -> [(document_id, fingerprint)]`.
#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    postings: HashMap<u64, Vec<Posting>>,
    document_count: usize,
}

impl FingerprintIndex {
    /// Build an index from a snapshot of fingerprint sets.
    pub fn build<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a FingerprintSet>,
    {
        let mut postings: HashMap<u64, Vec<Posting>> = HashMap::new();
        let mut document_count = 0usize;
        for set in sets {
            document_count += 1;
            for fp in &set.fingerprints {
                postings.entry(fp.hash).or_default().push(Posting {
                    document_id: set.document_id.clone(),
                    fingerprint: fp.clone(),
                });
            }
        }
        Self {
            postings,
            document_count,
        }
    }

    /// Number of documents the index was built from.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct hashes in the index.
    pub fn hash_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Find all verified candidate pairs between the query set and every
    /// indexed document, grouped by source document id.
    ///
    /// Postings under the query's own document id are skipped, so a corpus
    /// that contains the query document never matches against itself.
    pub fn candidates_for(&self, query: &FingerprintSet) -> HashMap<String, Vec<CandidatePair>> {
        let mut out: HashMap<String, Vec<CandidatePair>> = HashMap::new();
        for fp in &query.fingerprints {
            let Some(postings) = self.postings.get(&fp.hash) else {
                continue;
            };
            for posting in postings {
                if posting.document_id == query.document_id {
                    continue;
                }
                // Equal hashes are only a hint; the texts must agree.
                if posting.fingerprint.ngram_text != fp.ngram_text {
                    continue;
                }
                out.entry(posting.document_id.clone())
                    .or_default()
                    .push(CandidatePair {
                        query_offset: fp.word_offset,
                        source_offset: posting.fingerprint.word_offset,
                        hash: fp.hash,
                    });
            }
        }
        out
    }
}

/// Find verified candidate pairs between exactly two fingerprint sets.
pub fn find_matching_fingerprints(a: &FingerprintSet, b: &FingerprintSet) -> Vec<CandidatePair> {
    let mut by_hash: HashMap<u64, Vec<&Fingerprint>> = HashMap::new();
    for fp in &b.fingerprints {
        by_hash.entry(fp.hash).or_default().push(fp);
    }

    let mut out = Vec::new();
    for fp in &a.fingerprints {
        let Some(candidates) = by_hash.get(&fp.hash) else {
            continue;
        };
        for other in candidates {
            if other.ngram_text != fp.ngram_text {
                continue;
            }
            out.push(CandidatePair {
                query_offset: fp.word_offset,
                source_offset: other.word_offset,
                hash: fp.hash,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint::{generate_fingerprints, FingerprintConfig};

    const SHARED: &str = "the quick brown fox jumps over the lazy dog every single morning";

    fn set(id: &str, text: &str) -> FingerprintSet {
        generate_fingerprints(text, id, &FingerprintConfig::default()).unwrap()
    }

    #[test]
    fn identical_documents_pair_up() {
        let a = set("a", SHARED);
        let b = set("b", SHARED);
        let pairs = find_matching_fingerprints(&a, &b);
        assert!(!pairs.is_empty());
        for pair in &pairs {
            assert_eq!(pair.query_offset, pair.source_offset);
        }
    }

    #[test]
    fn disjoint_documents_produce_no_pairs() {
        let a = set("a", SHARED);
        let b = set("b", "entirely different words about winter snow and silent frozen lakes");
        assert!(find_matching_fingerprints(&a, &b).is_empty());
    }

    #[test]
    fn collision_without_text_equality_is_rejected() {
        let a = set("a", SHARED);
        let mut b = set("b", "entirely different words about winter snow and silent frozen lakes");
        // Forge a collision: reuse a hash from `a` on a different n-gram text.
        if let (Some(fa), Some(fb)) = (a.fingerprints.first(), b.fingerprints.first_mut()) {
            fb.hash = fa.hash;
        }
        let pairs = find_matching_fingerprints(&a, &b);
        assert!(pairs.is_empty(), "hash collision must never produce a pair");
    }

    #[test]
    fn index_skips_query_document_id() {
        let a = set("a", SHARED);
        let other = set("b", SHARED);
        let idx = FingerprintIndex::build([&a, &other]);
        let hits = idx.candidates_for(&a);
        assert!(!hits.contains_key("a"), "self-matches must be skipped");
        assert!(hits.contains_key("b"));
    }

    #[test]
    fn index_counts() {
        let a = set("a", SHARED);
        let b = set("b", "entirely different words about winter snow and silent frozen lakes");
        let idx = FingerprintIndex::build([&a, &b]);
        assert_eq!(idx.document_count(), 2);
        assert!(!idx.is_empty());
        assert!(idx.hash_count() > 0);
    }

    #[test]
    fn empty_index_returns_no_candidates() {
        let idx = FingerprintIndex::default();
        let a = set("a", SHARED);
        assert!(idx.candidates_for(&a).is_empty());
        assert!(idx.is_empty());
    }
}
