//! Match-span reconstruction from raw candidate pairs.
//!
//! Winnowing keeps only a sparse subset of n-grams, so a copied passage
//! shows up as a scatter of candidate pairs rather than one span. This
//! module coalesces adjacent or overlapping pairs into contiguous spans and
//! then widens each span word-by-word against both documents, which anchors
//! span boundaries at the real edges of the copied run instead of at
//! whichever n-grams winnowing happened to select.

use serde::{Deserialize, Serialize};

use crate::inverted::CandidatePair;

/// A contiguous region of agreement between two documents, in word indices
/// (end-exclusive) of their normalized word sequences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSpan {
    pub query_start: usize,
    pub query_end: usize,
    pub source_start: usize,
    pub source_end: usize,
}

impl MatchSpan {
    /// Number of query words covered by this span.
    pub fn word_count(&self) -> usize {
        self.query_end - self.query_start
    }

    fn from_pair(pair: &CandidatePair, ngram_size: usize) -> Self {
        Self {
            query_start: pair.query_offset,
            query_end: pair.query_offset + ngram_size,
            source_start: pair.source_offset,
            source_end: pair.source_offset + ngram_size,
        }
    }

    /// Whether `other` overlaps or is adjacent to `self` on both the query
    /// and the source side.
    fn touches(&self, other: &MatchSpan) -> bool {
        other.query_start <= self.query_end
            && other.query_end >= self.query_start
            && other.source_start <= self.source_end
            && other.source_end >= self.source_start
    }

    fn absorb(&mut self, other: &MatchSpan) {
        self.query_start = self.query_start.min(other.query_start);
        self.query_end = self.query_end.max(other.query_end);
        self.source_start = self.source_start.min(other.source_start);
        self.source_end = self.source_end.max(other.source_end);
    }
}

/// Coalesce candidate pairs into contiguous spans and drop spans shorter
/// than `min_match_length` words.
pub fn merge_candidates(
    pairs: &[CandidatePair],
    ngram_size: usize,
    min_match_length: usize,
) -> Vec<MatchSpan> {
    let mut spans = merge_touching(coalesce(pairs, ngram_size));
    spans.retain(|s| s.word_count() >= min_match_length);
    spans
}

/// Full reconstruction: coalesce, widen against both word sequences, merge
/// any spans the widening brought into contact, then apply the minimum
/// length filter.
pub fn reconstruct_spans<Q, S>(
    pairs: &[CandidatePair],
    ngram_size: usize,
    min_match_length: usize,
    query_words: &[Q],
    source_words: &[S],
) -> Vec<MatchSpan>
where
    Q: AsRef<str>,
    S: AsRef<str>,
{
    let mut spans = coalesce(pairs, ngram_size);
    for span in &mut spans {
        extend_span(span, query_words, source_words);
    }
    let mut spans = merge_touching(spans);
    spans.retain(|s| s.word_count() >= min_match_length);
    spans
}

fn coalesce(pairs: &[CandidatePair], ngram_size: usize) -> Vec<MatchSpan> {
    if pairs.is_empty() || ngram_size == 0 {
        return Vec::new();
    }
    let mut sorted: Vec<&CandidatePair> = pairs.iter().collect();
    sorted.sort_by_key(|p| (p.query_offset, p.source_offset));

    let mut spans: Vec<MatchSpan> = Vec::new();
    for pair in sorted {
        let span = MatchSpan::from_pair(pair, ngram_size);
        match spans.last_mut() {
            Some(last) if last.touches(&span) => last.absorb(&span),
            _ => spans.push(span),
        }
    }
    spans
}

/// Merge spans until no two remaining spans touch.
///
/// A span can touch an earlier span that is not its sort neighbor when
/// pairs against a second source region interleave with a contiguous run,
/// so each span is merged against every open span to a fixpoint rather
/// than only against the last one emitted.
fn merge_touching(spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    let mut out: Vec<MatchSpan> = Vec::new();
    for span in spans {
        let mut merged = span;
        loop {
            let mut changed = false;
            let mut i = 0;
            while i < out.len() {
                if out[i].touches(&merged) {
                    merged.absorb(&out.swap_remove(i));
                    changed = true;
                } else {
                    i += 1;
                }
            }
            if !changed {
                break;
            }
        }
        out.push(merged);
    }
    out.sort_by_key(|s| (s.query_start, s.source_start));
    out
}

/// Widen a span while the words on both sides keep agreeing.
fn extend_span<Q, S>(span: &mut MatchSpan, query_words: &[Q], source_words: &[S])
where
    Q: AsRef<str>,
    S: AsRef<str>,
{
    // Clamp first: offsets beyond the word sequences would be a caller bug,
    // but must not panic.
    span.query_end = span.query_end.min(query_words.len());
    span.source_end = span.source_end.min(source_words.len());

    while span.query_start > 0
        && span.source_start > 0
        && query_words[span.query_start - 1].as_ref()
            == source_words[span.source_start - 1].as_ref()
    {
        span.query_start -= 1;
        span.source_start -= 1;
    }
    while span.query_end < query_words.len()
        && span.source_end < source_words.len()
        && query_words[span.query_end].as_ref() == source_words[span.source_end].as_ref()
    {
        span.query_end += 1;
        span.source_end += 1;
    }
}
