//! Result aggregation: statistics, scores, classification, confidence.

use crate::config::ClassificationScale;
use crate::types::{
    Classification, Confidence, ExclusionReason, PlagiarismStats, SelfPlagiarismMatch,
};

/// Bucket a similarity score into the classification scale.
///
/// Half-open ranges make the mapping exhaustive over [0, 100] and monotonic
/// for any validated scale.
pub fn classify(score: f64, scale: &ClassificationScale) -> Classification {
    if score >= scale.severe {
        Classification::Severe
    } else if score >= scale.significant {
        Classification::Significant
    } else if score >= scale.moderate {
        Classification::Moderate
    } else if score >= scale.minor {
        Classification::Minor
    } else {
        Classification::Original
    }
}

/// Coarse reliability signal: how much material the check had to work with.
pub fn confidence_for(total_words: usize, fingerprint_count: usize) -> Confidence {
    if total_words > 500 && fingerprint_count > 50 {
        Confidence::High
    } else if total_words < 100 {
        Confidence::Low
    } else {
        Confidence::Medium
    }
}

/// Compute the word accounting over annotated matches.
pub fn tally_matches(
    matches: &[SelfPlagiarismMatch],
    total_words: usize,
    fingerprint_count: usize,
) -> PlagiarismStats {
    let mut stats = PlagiarismStats {
        total_words,
        fingerprint_count,
        ..PlagiarismStats::default()
    };

    let mut sources: Vec<&str> = Vec::new();
    for m in matches {
        let words = m.matched.word_count;
        if m.matched.excluded {
            stats.excluded_words += words;
            match m.matched.exclusion_reason {
                Some(ExclusionReason::Quoted) => stats.quoted_words += words,
                Some(ExclusionReason::Cited) => stats.cited_words += words,
                _ => {}
            }
        } else {
            stats.matched_words += words;
            if !sources.iter().any(|s| *s == m.source.id) {
                sources.push(&m.source.id);
            }
        }
    }
    stats.unique_sources = sources.len();
    stats
}

/// `matched / total * 100`, with the zero-word edge case pinned to 0.
pub fn similarity_score(matched_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    matched_words as f64 / total_words as f64 * 100.0
}
