//! Evasion heuristics over raw, non-normalized text.
//!
//! Three independent, stateless checks: homoglyph substitution, invisible
//! characters, and paragraph-level style variance. Each check reports at
//! most one finding; severity is a coarse 1-5 scale keyed to occurrence
//! counts, not a probability.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kind of evasion pattern a finding describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuspiciousPatternKind {
    /// Latin look-alike characters from other scripts, zero-width joiners,
    /// or a byte-order mark in running text.
    CharacterSubstitution,
    /// Zero-width and other invisible Unicode characters.
    InvisibleCharacters,
    /// Unusually high variance in mean sentence length across paragraphs,
    /// a weak signal for stitched-together text.
    StyleInconsistency,
}

/// A single suspicious finding with every position it was observed at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuspiciousPattern {
    pub kind: SuspiciousPatternKind,
    pub description: String,
    /// Severity on a 1-5 scale.
    pub severity: u8,
    /// Byte ranges of the occurrences (paragraph spans for style findings).
    pub positions: Vec<(usize, usize)>,
}

/// Cyrillic look-alikes of common Latin letters, plus the zero-width joiner
/// and the byte-order mark.
const HOMOGLYPHS: &[(char, &str)] = &[
    ('\u{0430}', "Cyrillic small a"),
    ('\u{0435}', "Cyrillic small e"),
    ('\u{043E}', "Cyrillic small o"),
    ('\u{0440}', "Cyrillic small r (looks like p)"),
    ('\u{0441}', "Cyrillic small s (looks like c)"),
    ('\u{0445}', "Cyrillic small h (looks like x)"),
    ('\u{0443}', "Cyrillic small u (looks like y)"),
    ('\u{200D}', "zero-width joiner"),
    ('\u{FEFF}', "byte-order mark"),
];

static INVISIBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[\u{200B}-\u{200F}\u{202A}-\u{202E}\u{2060}-\u{2064}\u{FEFF}]")
        .expect("static regex")
});

/// Minimum paragraph length in characters for the style check.
const STYLE_MIN_PARAGRAPH_CHARS: usize = 100;

/// Run all three checks and collect their findings.
pub fn detect_suspicious_patterns(text: &str) -> Vec<SuspiciousPattern> {
    [
        detect_character_substitution(text),
        detect_invisible_characters(text),
        detect_style_inconsistency(text),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Scan for the fixed homoglyph set.
pub fn detect_character_substitution(text: &str) -> Option<SuspiciousPattern> {
    let mut positions = Vec::new();
    for (idx, ch) in text.char_indices() {
        if HOMOGLYPHS.iter().any(|&(h, _)| h == ch) {
            positions.push((idx, idx + ch.len_utf8()));
        }
    }
    if positions.is_empty() {
        return None;
    }

    let severity = match positions.len() {
        n if n > 5 => 4,
        n if n > 2 => 3,
        _ => 2,
    };
    Some(SuspiciousPattern {
        kind: SuspiciousPatternKind::CharacterSubstitution,
        description: format!(
            "{} character(s) that visually imitate Latin letters or hide joins",
            positions.len()
        ),
        severity,
        positions,
    })
}

/// Scan for zero-width and other invisible characters.
pub fn detect_invisible_characters(text: &str) -> Option<SuspiciousPattern> {
    let positions: Vec<(usize, usize)> = INVISIBLE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    if positions.is_empty() {
        return None;
    }

    let severity = match positions.len() {
        n if n > 10 => 5,
        n if n > 5 => 4,
        _ => 3,
    };
    Some(SuspiciousPattern {
        kind: SuspiciousPatternKind::InvisibleCharacters,
        description: format!("{} invisible character(s) embedded in the text", positions.len()),
        severity,
        positions,
    })
}

/// Compare mean sentence length across paragraphs.
///
/// Reports only when the coefficient of variation of the per-paragraph
/// means exceeds 0.5. Fewer than two qualifying paragraphs produce no
/// finding.
pub fn detect_style_inconsistency(text: &str) -> Option<SuspiciousPattern> {
    let paragraphs = split_paragraphs(text);
    let mut means = Vec::new();
    let mut spans = Vec::new();
    for (start, end) in paragraphs {
        let body = &text[start..end];
        if body.chars().count() < STYLE_MIN_PARAGRAPH_CHARS {
            continue;
        }
        if let Some(mean) = mean_sentence_words(body) {
            means.push(mean);
            spans.push((start, end));
        }
    }
    if means.len() < 2 {
        return None;
    }

    let mean_of_means = means.iter().sum::<f64>() / means.len() as f64;
    if mean_of_means <= 0.0 {
        return None;
    }
    let variance = means
        .iter()
        .map(|m| (m - mean_of_means).powi(2))
        .sum::<f64>()
        / means.len() as f64;
    let cv = variance.sqrt() / mean_of_means;
    if cv <= 0.5 {
        return None;
    }

    let severity = if cv > 0.8 { 3 } else { 2 };
    Some(SuspiciousPattern {
        kind: SuspiciousPatternKind::StyleInconsistency,
        description: format!(
            "sentence length varies sharply between paragraphs (coefficient of variation {cv:.2})"
        ),
        severity,
        positions: spans,
    })
}

/// Blank-line-delimited paragraph spans, as byte ranges.
fn split_paragraphs(text: &str) -> Vec<(usize, usize)> {
    static PARAGRAPH_BREAK: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\n\s*\n").expect("static regex"));

    let mut spans = Vec::new();
    let mut start = 0usize;
    for brk in PARAGRAPH_BREAK.find_iter(text) {
        if brk.start() > start {
            spans.push((start, brk.start()));
        }
        start = brk.end();
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }
    spans
}

/// Mean sentence length in words, or `None` when the paragraph has no
/// sentences.
fn mean_sentence_words(paragraph: &str) -> Option<f64> {
    let mut lengths = Vec::new();
    for sentence in paragraph.split(['.', '!', '?']) {
        let words = sentence.split_whitespace().count();
        if words > 0 {
            lengths.push(words as f64);
        }
    }
    if lengths.is_empty() {
        return None;
    }
    Some(lengths.iter().sum::<f64>() / lengths.len() as f64)
}
