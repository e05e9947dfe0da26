//! Public result types of the engine.
//!
//! Everything here is an immutable output artifact: created once per check,
//! serialized for rendering or persistence by outer layers, never updated
//! in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a match was excluded from the similarity score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReason {
    /// Fully contained in a quoted span.
    Quoted,
    /// A citation sits close enough to attribute the span.
    Cited,
    /// Contains common academic boilerplate.
    CommonPhrase,
    /// Contains a caller-supplied always-legitimate phrase.
    UserExcluded,
}

/// A verified, merged span of agreement between the checked document and
/// one source document.
///
/// Offsets are byte offsets into the original (non-normalized) text of the
/// checked document. `similarity` is the word-count-weighted ratio of this
/// span against the checked document, not an edit-distance metric: the
/// engine detects copied spans, not paraphrase distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    /// The matching text as written in the checked document.
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Length of the span in normalized words.
    pub word_count: usize,
    /// `word_count / checked-document word count`, in [0, 1].
    pub similarity: f64,
    /// Whether an exclusion rule fired for this match. Excluded matches
    /// stay visible in the report but do not contribute to the score.
    pub excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_reason: Option<ExclusionReason>,
}

/// Identity of the source document a match was found in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Short snippet of the source content for display.
    pub snippet: String,
}

/// A [`Match`] annotated with the source document it was found in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelfPlagiarismMatch {
    #[serde(flatten)]
    pub matched: Match,
    pub source: SourceRef,
}

/// A candidate source document supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Similarity classification buckets, ordered by severity.
///
/// Bucket boundaries come from
/// [`crate::config::ClassificationScale`]; the ordering here is fixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Original,
    Minor,
    Moderate,
    Significant,
    Severe,
}

/// Coarse reliability signal for a report.
///
/// This reflects how much material the check had to work with; it is not a
/// statistical confidence interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Word and fingerprint accounting for one check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlagiarismStats {
    /// Normalized word count of the checked document.
    pub total_words: usize,
    /// Sum of non-excluded match word counts.
    pub matched_words: usize,
    /// Sum of word counts of matches excluded as quoted.
    pub quoted_words: usize,
    /// Sum of word counts of matches excluded as cited.
    pub cited_words: usize,
    /// Sum of word counts over all excluded matches.
    pub excluded_words: usize,
    /// Distinct source documents contributing at least one non-excluded match.
    pub unique_sources: usize,
    /// Fingerprints generated for the checked document.
    pub fingerprint_count: usize,
    /// Wall-clock processing time in milliseconds.
    pub processing_ms: u64,
}

/// The single output artifact of a full check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlagiarismResult {
    /// `matched_words / total_words * 100`, or 0 for an empty document.
    pub similarity_score: f64,
    /// `100 - similarity_score`.
    pub originality_score: f64,
    pub classification: Classification,
    pub confidence: Confidence,
    pub matches: Vec<SelfPlagiarismMatch>,
    pub uncited_quotes: Vec<detect::UncitedQuote>,
    pub suspicious_patterns: Vec<detect::SuspiciousPattern>,
    pub stats: PlagiarismStats,
}

/// One corpus document flagged by the quick check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickFlag {
    pub document_id: String,
    /// Number of fingerprint hashes shared with the query.
    pub shared_hashes: usize,
}

/// Output of the quick-check containment mode.
///
/// Trades match-span precision for hash-set-intersection speed; intended
/// for interactive and incremental use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickCheckReport {
    /// Flagged documents, most shared hashes first.
    pub flagged: Vec<QuickFlag>,
    /// Distinct fingerprint hashes of the query document.
    pub query_hashes: usize,
    pub processing_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_reason_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ExclusionReason::CommonPhrase).unwrap(),
            "\"common-phrase\""
        );
        assert_eq!(
            serde_json::to_string(&ExclusionReason::UserExcluded).unwrap(),
            "\"user-excluded\""
        );
    }

    #[test]
    fn classification_is_ordered() {
        assert!(Classification::Original < Classification::Minor);
        assert!(Classification::Significant < Classification::Severe);
    }

    #[test]
    fn match_serde_skips_absent_reason() {
        let m = Match {
            text: "shared span".into(),
            start_offset: 0,
            end_offset: 11,
            word_count: 2,
            similarity: 0.1,
            excluded: false,
            exclusion_reason: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("exclusion_reason"));
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn self_plagiarism_match_flattens_the_span() {
        let spm = SelfPlagiarismMatch {
            matched: Match {
                text: "shared".into(),
                start_offset: 0,
                end_offset: 6,
                word_count: 1,
                similarity: 0.5,
                excluded: true,
                exclusion_reason: Some(ExclusionReason::Quoted),
            },
            source: SourceRef {
                id: "doc-7".into(),
                title: "Earlier essay".into(),
                created_at: Utc::now(),
                snippet: "shared ...".into(),
            },
        };
        let json = serde_json::to_value(&spm).unwrap();
        assert_eq!(json["text"], "shared");
        assert_eq!(json["exclusion_reason"], "quoted");
        assert_eq!(json["source"]["id"], "doc-7");
    }
}
