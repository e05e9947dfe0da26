//! Citation detection and quote/citation association.
//!
//! Three independent regex passes over the raw text, one per citation
//! format, merged and sorted by start offset. Association with quotes is by
//! character proximity only; no bibliographic parsing happens here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::quotes::{detect_quotes, QuoteSpan, QuoteStyle};

/// Maximum distance in bytes between a quote and its citation.
pub const CITATION_PROXIMITY_CHARS: usize = 100;

/// Fixed remediation suggestion attached to every uncited quote.
pub const UNCITED_QUOTE_SUGGESTION: &str =
    "Add a citation near this quotation, or rephrase it in your own words.";

/// The recognized citation format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CitationFormat {
    /// Author-year parenthetical: `(Smith, 2024)`, `(Smith et al., 2024)`,
    /// `(Smith & Jones, 2024)`.
    AuthorYear,
    /// Numeric bracket list: `[1]`, `[1,2,3]`, `[1-5]`.
    NumericBracket,
    /// Bare number immediately after terminal punctuation, in the style of
    /// a superscript reference mark.
    Superscript,
}

/// A citation marker found in the raw text, with byte offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub format: CitationFormat,
}

/// A substantive quotation with no citation nearby.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UncitedQuote {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub style: QuoteStyle,
    pub suggestion: String,
}

static AUTHOR_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\(\s*[A-Z][\w'-]*(?:\s+et\s+al\.?|\s*(?:&|and)\s+[A-Z][\w'-]*)?\s*,\s*\d{4}[a-z]?\s*\)",
    )
    .expect("static regex")
});
static NUMERIC_BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+(?:\s*[,\-]\s*\d+)*\]").expect("static regex"));
// Capture group 1 is the reference number itself; the punctuation is context.
static SUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](\d{1,3})(?:\s|$)").expect("static regex"));

/// Find every citation marker, across all three formats, sorted by start
/// offset.
pub fn detect_citations(text: &str) -> Vec<Citation> {
    let mut citations = Vec::new();

    for m in AUTHOR_YEAR.find_iter(text) {
        citations.push(Citation {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
            format: CitationFormat::AuthorYear,
        });
    }
    for m in NUMERIC_BRACKET.find_iter(text) {
        citations.push(Citation {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
            format: CitationFormat::NumericBracket,
        });
    }
    for caps in SUPERSCRIPT.captures_iter(text) {
        let number = caps.get(1).expect("group 1 in static pattern");
        citations.push(Citation {
            text: number.as_str().to_string(),
            start: number.start(),
            end: number.end(),
            format: CitationFormat::Superscript,
        });
    }

    citations.sort_by_key(|c| (c.start, c.end));
    citations
}

/// Whether any citation sits close enough to the span `[start, end)` to be
/// read as attributing it.
///
/// A citation qualifies when it starts within `max_distance` bytes after
/// the span ends, ends within `max_distance` bytes before the span starts,
/// or overlaps the span itself (distance zero).
pub fn span_has_nearby_citation(
    start: usize,
    end: usize,
    citations: &[Citation],
    max_distance: usize,
) -> bool {
    citations.iter().any(|c| {
        let after = c.start >= end && c.start - end <= max_distance;
        let before = c.end <= start && start - c.end <= max_distance;
        let overlaps = c.start < end && c.end > start;
        after || before || overlaps
    })
}

/// Whether `quote` has a citation within `max_distance` bytes.
pub fn has_nearby_citation(quote: &QuoteSpan, citations: &[Citation], max_distance: usize) -> bool {
    span_has_nearby_citation(quote.start, quote.end, citations, max_distance)
}

/// Find every substantive quotation that lacks a nearby citation.
pub fn find_uncited_quotes(text: &str) -> Vec<UncitedQuote> {
    let citations = detect_citations(text);
    detect_quotes(text)
        .into_iter()
        .filter(|q| q.is_substantive())
        .filter(|q| !has_nearby_citation(q, &citations, CITATION_PROXIMITY_CHARS))
        .map(|q| UncitedQuote {
            text: q.text,
            start: q.start,
            end: q.end,
            style: q.style,
            suggestion: UNCITED_QUOTE_SUGGESTION.to_string(),
        })
        .collect()
}
