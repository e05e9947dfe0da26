use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A normalized word with its byte offsets in the **original** text.
///
/// Offsets always refer to the un-normalized source so that downstream
/// consumers (highlighting, match spans) can point back at the exact bytes
/// the author wrote, even though the `text` field carries the normalized
/// form used for comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedWord {
    /// Normalized token text (lowercased, apostrophes stripped).
    pub text: String,
    /// Byte offset (inclusive) in the original text.
    pub char_start: usize,
    /// Byte offset (exclusive) in the original text.
    pub char_end: usize,
}

impl AsRef<str> for NormalizedWord {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Word-boundary pattern applied to the raw text. Apostrophes are kept in
/// the match so contractions stay a single token; they are stripped from
/// the token text afterwards for comparison consistency.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w']+").expect("static regex"));

/// Scan the original (non-normalized) text and return every word with its
/// source byte offsets.
///
/// This deliberately re-scans the raw input instead of the normalized form:
/// normalization collapses characters, which would make offsets useless for
/// pointing back into the source document. Tokens that are nothing but
/// apostrophes are dropped.
pub fn word_positions(text: &str) -> Vec<NormalizedWord> {
    let mut words = Vec::new();
    for m in WORD_PATTERN.find_iter(text) {
        let stripped: String = m
            .as_str()
            .chars()
            .filter(|&ch| ch != '\'')
            .flat_map(char::to_lowercase)
            .collect();
        if stripped.is_empty() {
            continue;
        }
        words.push(NormalizedWord {
            text: stripped,
            char_start: m.start(),
            char_end: m.end(),
        });
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_refer_to_original_text() {
        let text = "  Hello,   WORLD! ";
        let words = word_positions(text);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "hello");
        assert_eq!(&text[words[0].char_start..words[0].char_end], "Hello");
        assert_eq!(words[1].text, "world");
        assert_eq!(&text[words[1].char_start..words[1].char_end], "WORLD");
    }

    #[test]
    fn apostrophes_stripped_from_token_text() {
        let words = word_positions("She said it wasn't mine.");
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["she", "said", "it", "wasnt", "mine"]);
        // The source span still covers the apostrophe.
        let wasnt = &words[3];
        assert_eq!(wasnt.text, "wasnt");
    }

    #[test]
    fn bare_apostrophe_runs_are_dropped() {
        let words = word_positions("a '' b");
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_no_words() {
        assert!(word_positions("").is_empty());
        assert!(word_positions("  \t\n ").is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let word = NormalizedWord {
            text: "hello".into(),
            char_start: 2,
            char_end: 7,
        };
        let json = serde_json::to_string(&word).unwrap();
        let back: NormalizedWord = serde_json::from_str(&json).unwrap();
        assert_eq!(word, back);
    }
}
