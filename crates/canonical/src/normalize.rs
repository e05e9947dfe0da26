/// Canonicalize text for comparison.
///
/// Lowercases, replaces every character that is not a word character or an
/// apostrophe with a single space, strips apostrophes that are not flanked
/// by word characters, and collapses whitespace runs. The result is a
/// trimmed, single-spaced string.
///
/// This function never fails; empty input produces an empty string.
pub fn normalize(text: &str) -> String {
    // First pass: lowercase and map non-word characters to spaces.
    // Lowercasing can expand a single character into multiple (e.g. ß -> ss).
    let mut mapped = String::with_capacity(text.len());
    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            if is_word_char(lower) || lower == '\'' {
                mapped.push(lower);
            } else {
                mapped.push(' ');
            }
        }
    }

    // Second pass: keep an apostrophe only when it sits between two word
    // characters, so contractions survive but quote marks do not.
    let chars: Vec<char> = mapped.chars().collect();
    let mut cleaned = String::with_capacity(mapped.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\'' {
            let prev_is_word = i > 0 && is_word_char(chars[i - 1]);
            let next_is_word = chars.get(i + 1).is_some_and(|&c| is_word_char(c));
            if prev_is_word && next_is_word {
                cleaned.push(ch);
            } else {
                cleaned.push(' ');
            }
        } else {
            cleaned.push(ch);
        }
    }

    // Final pass: collapse whitespace runs and trim.
    let mut out = String::with_capacity(cleaned.len());
    for token in cleaned.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Normalize and split into words, dropping empty tokens.
pub fn split_words(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
