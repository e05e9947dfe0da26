//! Fingerprint artifacts and set generation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use canonical::split_words;

use crate::config::FingerprintConfig;
use crate::error::FingerprintError;
use crate::ngram::generate_ngram_hashes;
use crate::winnow::winnow;

/// A selected n-gram hash retained after winnowing.
///
/// Fingerprints are the unit stored and compared across documents. They are
/// never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    /// Polynomial hash of the space-joined n-gram.
    pub hash: u64,
    /// Byte offset of the n-gram's first word in the original text.
    pub char_position: usize,
    /// The n-gram text itself, kept for mandatory collision re-verification.
    pub ngram_text: String,
    /// Index of the n-gram's first word in the normalized word sequence.
    pub word_offset: usize,
}

/// All fingerprints selected for one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintSet {
    /// Caller-supplied document identifier.
    pub document_id: String,
    /// Selected fingerprints in document order.
    pub fingerprints: Vec<Fingerprint>,
    /// The n-gram size the set was generated with.
    pub ngram_size: usize,
    /// Total normalized word count of the document.
    pub word_count: usize,
    /// Generation timestamp. Not part of the comparable identity of the set.
    pub generated_at: DateTime<Utc>,
}

impl FingerprintSet {
    /// The set of distinct fingerprint hashes, for containment-style
    /// comparison in the quick-check path.
    pub fn hash_set(&self) -> HashSet<u64> {
        self.fingerprints.iter().map(|f| f.hash).collect()
    }
}

/// Run the full fingerprinting pipeline for one document:
/// normalize → n-gram hash → winnow.
///
/// Deterministic for a given `(text, config)` apart from `generated_at`.
/// Documents shorter than the n-gram size yield an empty fingerprint list;
/// that is a documented edge case, not an error.
pub fn generate_fingerprints(
    text: &str,
    document_id: &str,
    cfg: &FingerprintConfig,
) -> Result<FingerprintSet, FingerprintError> {
    cfg.validate()?;

    let hashed = generate_ngram_hashes(text, cfg.ngram_size);
    let hashes: Vec<u64> = hashed.iter().map(|h| h.hash).collect();
    let selected = winnow(&hashes, cfg.window_size);

    let fingerprints = selected
        .into_iter()
        .map(|i| {
            let h = &hashed[i];
            Fingerprint {
                hash: h.hash,
                char_position: h.ngram.char_position,
                ngram_text: h.ngram.text(),
                word_offset: h.ngram.word_index,
            }
        })
        .collect();

    Ok(FingerprintSet {
        document_id: document_id.to_string(),
        fingerprints,
        ngram_size: cfg.ngram_size,
        word_count: split_words(text).len(),
        generated_at: Utc::now(),
    })
}

/// Fingerprint a corpus of `(id, text)` pairs in parallel.
///
/// Each document is an independent computation, so this fans out across
/// available cores. Output order matches input order.
pub fn fingerprint_corpus<I, T>(
    documents: &[(I, T)],
    cfg: &FingerprintConfig,
) -> Result<Vec<FingerprintSet>, FingerprintError>
where
    I: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    cfg.validate()?;
    documents
        .par_iter()
        .map(|(id, text)| generate_fingerprints(text.as_ref(), id.as_ref(), cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The quick brown fox jumps over the lazy dog every single morning";

    #[test]
    fn generation_is_idempotent_apart_from_timestamp() {
        let cfg = FingerprintConfig::default();
        let a = generate_fingerprints(SAMPLE, "doc-a", &cfg).unwrap();
        let b = generate_fingerprints(SAMPLE, "doc-a", &cfg).unwrap();
        assert_eq!(a.fingerprints, b.fingerprints);
        assert_eq!(a.word_count, b.word_count);
        assert_eq!(a.ngram_size, b.ngram_size);
    }

    #[test]
    fn word_count_is_recorded() {
        let cfg = FingerprintConfig::default();
        let set = generate_fingerprints(SAMPLE, "doc", &cfg).unwrap();
        assert_eq!(set.word_count, 12);
    }

    #[test]
    fn short_document_yields_empty_set() {
        let cfg = FingerprintConfig::default();
        let set = generate_fingerprints("too short", "doc", &cfg).unwrap();
        assert!(set.fingerprints.is_empty());
        assert_eq!(set.word_count, 2);
    }

    #[test]
    fn empty_document_yields_empty_set() {
        let cfg = FingerprintConfig::default();
        let set = generate_fingerprints("", "doc", &cfg).unwrap();
        assert!(set.fingerprints.is_empty());
        assert_eq!(set.word_count, 0);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = FingerprintConfig::new().with_ngram_size(0);
        assert!(generate_fingerprints(SAMPLE, "doc", &cfg).is_err());
    }

    #[test]
    fn fingerprints_carry_verifiable_text() {
        let cfg = FingerprintConfig::default();
        let set = generate_fingerprints(SAMPLE, "doc", &cfg).unwrap();
        assert!(!set.fingerprints.is_empty());
        for fp in &set.fingerprints {
            assert_eq!(fp.ngram_text.split(' ').count(), cfg.ngram_size);
            assert_eq!(fp.hash, crate::hash::compute_hash(&fp.ngram_text));
        }
    }

    #[test]
    fn corpus_output_matches_per_document_generation() {
        let cfg = FingerprintConfig::default();
        let docs = vec![
            ("a".to_string(), SAMPLE.to_string()),
            ("b".to_string(), "a completely different sentence about winter weather".to_string()),
        ];
        let sets = fingerprint_corpus(&docs, &cfg).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].document_id, "a");
        assert_eq!(sets[1].document_id, "b");
        let single = generate_fingerprints(SAMPLE, "a", &cfg).unwrap();
        assert_eq!(sets[0].fingerprints, single.fingerprints);
    }

    #[test]
    fn hash_set_deduplicates() {
        let cfg = FingerprintConfig::default();
        // Repeated text produces repeated hashes at different offsets.
        let text = format!("{SAMPLE} {SAMPLE}");
        let set = generate_fingerprints(&text, "doc", &cfg).unwrap();
        assert!(set.hash_set().len() <= set.fingerprints.len());
    }
}
