//! The check orchestrator.
//!
//! [`PlagiarismChecker`] wires the member crates into the two public entry
//! points: [`check`](PlagiarismChecker::check), the full pipeline from raw
//! text to a classified [`PlagiarismResult`], and
//! [`quick_check`](PlagiarismChecker::quick_check), a hash-set containment
//! scan that trades span precision for speed.

use std::time::Instant;

use tracing::debug;

use canonical::{word_positions, NormalizedWord};
use detect::{detect_suspicious_patterns, find_uncited_quotes};
use fingerprint::{fingerprint_corpus, generate_fingerprints};
use index::{reconstruct_spans, CandidatePair, FingerprintIndex, MatchSpan};

use crate::config::{PlagiarismConfig, QUICK_CHECK_SHARED_HASH_THRESHOLD};
use crate::error::EngineError;
use crate::exclusion::apply_exclusions;
use crate::report::{classify, confidence_for, similarity_score, tally_matches};
use crate::types::{
    Match, PlagiarismResult, QuickCheckReport, QuickFlag, SelfPlagiarismMatch, SourceDocument,
    SourceRef,
};

const SNIPPET_CHARS: usize = 80;

/// A configured, reusable plagiarism checker.
///
/// Construction validates the configuration once; after that every method
/// is a pure function of its inputs. The checker holds no document state,
/// so one instance can serve many checks.
#[derive(Debug, Clone)]
pub struct PlagiarismChecker {
    config: PlagiarismConfig,
}

impl PlagiarismChecker {
    /// Create a checker, rejecting malformed configuration up front.
    pub fn new(config: PlagiarismConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a checker with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: PlagiarismConfig::default(),
        }
    }

    pub fn config(&self) -> &PlagiarismConfig {
        &self.config
    }

    /// Run the full check of `text` against a corpus of the author's own
    /// earlier documents.
    ///
    /// `document_id` identifies the checked document; a corpus entry with
    /// the same id is skipped so a stored copy of the document never
    /// matches against itself.
    pub fn check(
        &self,
        document_id: &str,
        text: &str,
        corpus: &[SourceDocument],
    ) -> Result<PlagiarismResult, EngineError> {
        let started = Instant::now();

        let words = word_positions(text);
        let total_words = words.len();
        let fp_cfg = self.config.fingerprint_config();
        let query = generate_fingerprints(text, document_id, &fp_cfg)?;

        let mut matches: Vec<Match> = Vec::new();
        let mut match_sources: Vec<SourceRef> = Vec::new();

        if self.config.checks.self_plagiarism
            && !corpus.is_empty()
            && !query.fingerprints.is_empty()
        {
            let docs: Vec<(&str, &str)> = corpus
                .iter()
                .map(|d| (d.id.as_str(), d.content.as_str()))
                .collect();
            let sets = fingerprint_corpus(&docs, &fp_cfg)?;
            let idx = FingerprintIndex::build(&sets);

            // Sorted by source id so the report order is deterministic.
            let mut candidates: Vec<(String, Vec<CandidatePair>)> =
                idx.candidates_for(&query).into_iter().collect();
            candidates.sort_by(|a, b| a.0.cmp(&b.0));

            for (source_id, pairs) in candidates {
                let Some(source) = corpus.iter().find(|d| d.id == source_id) else {
                    continue;
                };
                let source_words = word_positions(&source.content);
                let spans = reconstruct_spans(
                    &pairs,
                    self.config.ngram_size,
                    self.config.min_match_length,
                    &words,
                    &source_words,
                );
                for span in spans {
                    if let Some(m) = span_to_match(&span, &words, text, total_words) {
                        matches.push(m);
                        match_sources.push(SourceRef {
                            id: source.id.clone(),
                            title: source.title.clone(),
                            created_at: source.created_at,
                            snippet: snippet(&source.content),
                        });
                    }
                }
            }
        }

        apply_exclusions(&mut matches, text, &self.config);

        let annotated: Vec<SelfPlagiarismMatch> = matches
            .into_iter()
            .zip(match_sources)
            .map(|(matched, source)| SelfPlagiarismMatch { matched, source })
            .collect();

        let uncited_quotes = if self.config.checks.uncited_quotes {
            find_uncited_quotes(text)
        } else {
            Vec::new()
        };
        let suspicious_patterns = if self.config.checks.suspicious_patterns {
            detect_suspicious_patterns(text)
        } else {
            Vec::new()
        };

        let mut stats = tally_matches(&annotated, total_words, query.fingerprints.len());
        stats.processing_ms = started.elapsed().as_millis() as u64;

        // Overlapping matches from several sources can over-count words.
        let score = similarity_score(stats.matched_words, total_words).min(100.0);
        let result = PlagiarismResult {
            similarity_score: score,
            originality_score: 100.0 - score,
            classification: classify(score, &self.config.classification),
            confidence: confidence_for(total_words, stats.fingerprint_count),
            matches: annotated,
            uncited_quotes,
            suspicious_patterns,
            stats,
        };

        debug!(
            document_id,
            similarity = result.similarity_score,
            matches = result.matches.len(),
            elapsed_ms = result.stats.processing_ms,
            "plagiarism check complete"
        );
        Ok(result)
    }

    /// Fast containment scan: which corpus documents share enough
    /// fingerprint hashes with `text` to deserve a full check.
    ///
    /// Uses smaller n-grams than the full check so short overlaps still
    /// intersect, and compares hash sets directly without reconstructing
    /// spans.
    pub fn quick_check(
        &self,
        document_id: &str,
        text: &str,
        corpus: &[SourceDocument],
    ) -> Result<QuickCheckReport, EngineError> {
        let started = Instant::now();

        let cfg = self.config.quick_fingerprint_config();
        let query = generate_fingerprints(text, document_id, &cfg)?;
        let query_hashes = query.hash_set();

        let docs: Vec<(&str, &str)> = corpus
            .iter()
            .filter(|d| d.id != document_id)
            .map(|d| (d.id.as_str(), d.content.as_str()))
            .collect();
        let sets = fingerprint_corpus(&docs, &cfg)?;

        let mut flagged: Vec<QuickFlag> = sets
            .iter()
            .filter_map(|set| {
                let shared = set
                    .hash_set()
                    .intersection(&query_hashes)
                    .count();
                (shared > QUICK_CHECK_SHARED_HASH_THRESHOLD).then(|| QuickFlag {
                    document_id: set.document_id.clone(),
                    shared_hashes: shared,
                })
            })
            .collect();
        flagged.sort_by(|a, b| {
            b.shared_hashes
                .cmp(&a.shared_hashes)
                .then_with(|| a.document_id.cmp(&b.document_id))
        });

        let report = QuickCheckReport {
            flagged,
            query_hashes: query_hashes.len(),
            processing_ms: started.elapsed().as_millis() as u64,
        };
        debug!(
            document_id,
            flagged = report.flagged.len(),
            elapsed_ms = report.processing_ms,
            "quick check complete"
        );
        Ok(report)
    }
}

impl Default for PlagiarismChecker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Translate a word-index span into a [`Match`] carrying byte offsets into
/// the original text.
fn span_to_match(
    span: &MatchSpan,
    words: &[NormalizedWord],
    text: &str,
    total_words: usize,
) -> Option<Match> {
    if span.word_count() == 0 {
        return None;
    }
    let first = words.get(span.query_start)?;
    let last = words.get(span.query_end - 1)?;
    let word_count = span.word_count();
    Some(Match {
        text: text.get(first.char_start..last.char_end)?.to_string(),
        start_offset: first.char_start,
        end_offset: last.char_end,
        word_count,
        similarity: if total_words == 0 {
            0.0
        } else {
            word_count as f64 / total_words as f64
        },
        excluded: false,
        exclusion_reason: None,
    })
}

fn snippet(content: &str) -> String {
    content.chars().take(SNIPPET_CHARS).collect()
}
