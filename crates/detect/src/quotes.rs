//! Quotation detection.
//!
//! Four independent non-overlapping regex passes, one per quotation style,
//! merged and sorted by start offset. Each pass is deliberately simple:
//! first non-overlapping match wins, exactly as a sequential scan over the
//! raw text would behave.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Quotes shorter than this (content only) are not substantive enough to
/// need a citation.
pub const MIN_SUBSTANTIVE_QUOTE_CHARS: usize = 20;

/// The quotation style a span was matched with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// Straight double quotes: `"..."`.
    StraightDouble,
    /// Straight single quotes: `'...'`.
    StraightSingle,
    /// Curly (typographic) double quotes.
    Curly,
    /// Guillemets or CJK corner brackets.
    Guillemet,
}

/// A quoted span in the raw text.
///
/// `start`/`end` are byte offsets of the full span including the quote
/// marks; `text` is the inner content without them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub style: QuoteStyle,
}

impl QuoteSpan {
    /// Whether this quote is long enough to warrant a citation check.
    pub fn is_substantive(&self) -> bool {
        self.text.chars().count() >= MIN_SUBSTANTIVE_QUOTE_CHARS
    }
}

static STRAIGHT_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("static regex"));
static STRAIGHT_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^']+)'").expect("static regex"));
static CURLY_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{201C}([^\u{201D}]+)\u{201D}").expect("static regex"));
static GUILLEMET: Lazy<Regex> = Lazy::new(|| {
    Regex::new("\u{00AB}([^\u{00BB}]+)\u{00BB}|\u{300C}([^\u{300D}]+)\u{300D}")
        .expect("static regex")
});

/// Find every quoted span in the text, across all four styles, sorted by
/// start offset.
pub fn detect_quotes(text: &str) -> Vec<QuoteSpan> {
    let mut spans = Vec::new();
    collect(&STRAIGHT_DOUBLE, QuoteStyle::StraightDouble, text, &mut spans);
    collect(&STRAIGHT_SINGLE, QuoteStyle::StraightSingle, text, &mut spans);
    collect(&CURLY_DOUBLE, QuoteStyle::Curly, text, &mut spans);
    collect(&GUILLEMET, QuoteStyle::Guillemet, text, &mut spans);
    spans.sort_by_key(|q| (q.start, q.end));
    spans
}

fn collect(pattern: &Regex, style: QuoteStyle, text: &str, out: &mut Vec<QuoteSpan>) {
    for caps in pattern.captures_iter(text) {
        let full = caps.get(0).expect("group 0 always present");
        let inner = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str())
            .unwrap_or("");
        out.push(QuoteSpan {
            text: inner.to_string(),
            start: full.start(),
            end: full.end(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_double_quotes() {
        let quotes = detect_quotes(r#"He said "the results were significant" yesterday."#);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "the results were significant");
        assert_eq!(quotes[0].style, QuoteStyle::StraightDouble);
        assert!(quotes[0].is_substantive());
    }

    #[test]
    fn all_styles_are_detected_and_sorted() {
        let text = "\u{201C}curly first\u{201D} then \"straight second\" and \u{00AB}guillemets third\u{00BB}";
        let quotes = detect_quotes(text);
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].style, QuoteStyle::Curly);
        assert_eq!(quotes[1].style, QuoteStyle::StraightDouble);
        assert_eq!(quotes[2].style, QuoteStyle::Guillemet);
        assert!(quotes.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn cjk_corner_brackets() {
        let quotes = detect_quotes("彼は\u{300C}引用された文章\u{300D}と言った");
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "引用された文章");
        assert_eq!(quotes[0].style, QuoteStyle::Guillemet);
    }

    #[test]
    fn short_quotes_are_not_substantive() {
        let quotes = detect_quotes(r#"A "short" word."#);
        assert_eq!(quotes.len(), 1);
        assert!(!quotes[0].is_substantive());
    }

    #[test]
    fn offsets_cover_the_quote_marks() {
        let text = r#"before "inner text here" after"#;
        let quotes = detect_quotes(text);
        assert_eq!(&text[quotes[0].start..quotes[0].end], "\"inner text here\"");
    }

    #[test]
    fn no_quotes_means_empty() {
        assert!(detect_quotes("plain text with no quotations at all").is_empty());
        assert!(detect_quotes("").is_empty());
    }

    #[test]
    fn passes_are_non_overlapping_within_a_style() {
        let quotes = detect_quotes(r#""one" and "two" and "three""#);
        let doubles: Vec<_> = quotes
            .iter()
            .filter(|q| q.style == QuoteStyle::StraightDouble)
            .collect();
        assert_eq!(doubles.len(), 3);
    }
}
