//! N-gram window generation over canonical word streams.

use serde::{Deserialize, Serialize};

use canonical::{split_words, word_positions};

use crate::hash::compute_ngram_hash;

/// A contiguous window of `n` normalized words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NGram {
    /// The normalized words in document order.
    pub words: Vec<String>,
    /// Byte offset of the window's first word in the **original** text.
    pub char_position: usize,
    /// Index of the window's first word in the normalized word sequence.
    pub word_index: usize,
}

impl NGram {
    /// The space-joined text of this n-gram, the exact input to the hash.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// An [`NGram`] together with its polynomial hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashedNGram {
    pub ngram: NGram,
    pub hash: u64,
}

/// Slice normalized text into overlapping n-word windows.
///
/// Documents with fewer than `n` words produce an empty vector; partial
/// n-grams are never emitted. Callers must treat a short document as a
/// low-confidence input, not as an error.
pub fn generate_ngrams(text: &str, n: usize) -> Vec<NGram> {
    let words = split_words(text);
    if n == 0 || words.len() < n {
        return Vec::new();
    }
    let positions = word_positions(text);

    let mut out = Vec::with_capacity(words.len() - n + 1);
    let mut last_position = 0usize;
    for i in 0..=(words.len() - n) {
        // The two scans agree on word counts for well-formed text; the guard
        // keeps a pathological skew from panicking.
        let char_position = match positions.get(i) {
            Some(p) => p.char_start,
            None => last_position,
        };
        last_position = char_position;
        out.push(NGram {
            words: words[i..i + n].to_vec(),
            char_position,
            word_index: i,
        });
    }
    out
}

/// Generate n-grams and hash each one.
pub fn generate_ngram_hashes(text: &str, n: usize) -> Vec<HashedNGram> {
    generate_ngrams(text, n)
        .into_iter()
        .map(|ngram| {
            let hash = compute_ngram_hash(&ngram.words);
            HashedNGram { ngram, hash }
        })
        .collect()
}
