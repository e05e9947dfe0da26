//! # Docsim detection passes
//!
//! Regex-based scans over raw (non-normalized) document text:
//!
//! - **Quotes** ([`detect_quotes`]): four quotation styles, each found with
//!   an independent non-overlapping pass, merged and sorted by offset.
//! - **Citations** ([`detect_citations`]): author-year parentheticals,
//!   numeric bracket lists, and superscript-style reference numbers after
//!   terminal punctuation. [`has_nearby_citation`] associates citations
//!   with quoted spans by character proximity.
//! - **Suspicious patterns** ([`detect_suspicious_patterns`]): homoglyph
//!   substitution, invisible characters, and paragraph style variance.
//!
//! All passes are pure functions over `&str`: no configuration, no state,
//! no failure modes. Offsets in every returned span are byte offsets into
//! the scanned text.

mod citations;
mod quotes;
mod suspicious;

pub use crate::citations::{
    detect_citations, find_uncited_quotes, has_nearby_citation, span_has_nearby_citation,
    Citation, CitationFormat, UncitedQuote, CITATION_PROXIMITY_CHARS, UNCITED_QUOTE_SUGGESTION,
};
pub use crate::quotes::{detect_quotes, QuoteSpan, QuoteStyle, MIN_SUBSTANTIVE_QUOTE_CHARS};
pub use crate::suspicious::{
    detect_character_substitution, detect_invisible_characters, detect_style_inconsistency,
    detect_suspicious_patterns, SuspiciousPattern, SuspiciousPatternKind,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_citation_and_pattern_passes_compose() {
        let text = r#"He said "the results were statistically significant" (Smith, 2024). Done."#;
        let quotes = detect_quotes(text);
        let citations = detect_citations(text);
        assert_eq!(quotes.len(), 1);
        assert_eq!(citations.len(), 1);
        assert!(has_nearby_citation(&quotes[0], &citations, CITATION_PROXIMITY_CHARS));
        assert!(find_uncited_quotes(text).is_empty());
        assert!(detect_suspicious_patterns(text).is_empty());
    }

    #[test]
    fn serde_roundtrip_of_findings() {
        let text = "hidden\u{200B}character";
        let findings = detect_suspicious_patterns(text);
        let json = serde_json::to_string(&findings).unwrap();
        let back: Vec<SuspiciousPattern> = serde_json::from_str(&json).unwrap();
        assert_eq!(findings, back);
    }
}
