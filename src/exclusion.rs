//! Exclusion policy: which matches are legitimate reuse.
//!
//! Rules are evaluated in a fixed order (quoted, cited, common phrase,
//! user phrase) and the first rule that fires wins. Matches are annotated,
//! never removed: an excluded match stays visible in the report but does
//! not count toward the similarity score.

use detect::{
    detect_citations, detect_quotes, span_has_nearby_citation, Citation, QuoteSpan,
    CITATION_PROXIMITY_CHARS,
};

use crate::config::PlagiarismConfig;
use crate::types::{ExclusionReason, Match};

/// Academic boilerplate that appears verbatim in unrelated honest work.
const COMMON_PHRASES: &[&str] = &[
    "in conclusion",
    "on the other hand",
    "as a result",
    "in other words",
    "it is important to note",
    "according to the results",
    "the results show that",
    "further research is needed",
    "in this paper we",
    "as mentioned above",
    "as shown in figure",
    "the rest of this paper",
];

/// Evaluate the exclusion rules for one match against the checked text.
///
/// Returns the reason of the first rule that fires, or `None` when the
/// match counts toward the score. Prefer [`apply_exclusions`] when
/// annotating many matches; it scans the text for quotes and citations
/// once instead of per match.
pub fn should_exclude_match(
    matched: &Match,
    text: &str,
    config: &PlagiarismConfig,
) -> Option<ExclusionReason> {
    let quotes = detect_quotes(text);
    let citations = detect_citations(text);
    exclusion_reason(matched, &quotes, &citations, config)
}

/// Annotate every match with its exclusion outcome.
pub fn apply_exclusions(matches: &mut [Match], text: &str, config: &PlagiarismConfig) {
    if matches.is_empty() {
        return;
    }
    let quotes = detect_quotes(text);
    let citations = detect_citations(text);
    for m in matches.iter_mut() {
        match exclusion_reason(m, &quotes, &citations, config) {
            Some(reason) => {
                m.excluded = true;
                m.exclusion_reason = Some(reason);
            }
            None => {
                m.excluded = false;
                m.exclusion_reason = None;
            }
        }
    }
}

fn exclusion_reason(
    matched: &Match,
    quotes: &[QuoteSpan],
    citations: &[Citation],
    config: &PlagiarismConfig,
) -> Option<ExclusionReason> {
    if config.exclusions.quotes
        && quotes
            .iter()
            .any(|q| q.start <= matched.start_offset && matched.end_offset <= q.end)
    {
        return Some(ExclusionReason::Quoted);
    }

    if config.exclusions.citations
        && span_has_nearby_citation(
            matched.start_offset,
            matched.end_offset,
            citations,
            CITATION_PROXIMITY_CHARS,
        )
    {
        return Some(ExclusionReason::Cited);
    }

    if config.exclusions.common_phrases {
        let lower = matched.text.to_lowercase();
        if COMMON_PHRASES.iter().any(|p| lower.contains(p)) {
            return Some(ExclusionReason::CommonPhrase);
        }
    }

    if !config.exclusions.custom_phrases.is_empty() {
        let lower = matched.text.to_lowercase();
        if config
            .exclusions
            .custom_phrases
            .iter()
            .any(|p| !p.is_empty() && lower.contains(&p.to_lowercase()))
        {
            return Some(ExclusionReason::UserExcluded);
        }
    }

    None
}
