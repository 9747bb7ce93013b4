/*!
 * Text normalization helpers for Hebrew article text.
 *
 * Splits raw title/body text into clean sentences and provides the small
 * string utilities the analyzer and synthesizers share. Hebrew is
 * multibyte in UTF-8, so every length check and truncation here is
 * char-indexed, never byte-indexed.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundary pattern
static SENTENCE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Punctuation stripped from individual words (includes Hebrew geresh/gershayim)
static WORD_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.,!?:;"“”״׳']"#).unwrap());

/// Punctuation stripped from phrases and whole sentences
static SENTENCE_PUNCT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,!?:;]").unwrap());

/// Join title and body the way the analyzer sees them
pub fn full_text(title: &str, body: &str) -> String {
    format!("{}. {}", title, body)
}

/// Split title+body into clean sentences.
///
/// Splits on runs of `.`, `!`, `?`, trims each piece and discards pieces
/// of five characters or fewer. Returns an empty vector when nothing
/// survives the filter; callers fall back rather than fail.
pub fn split_sentences(title: &str, body: &str) -> Vec<String> {
    let text = full_text(title, body);
    SENTENCE_SPLIT_REGEX
        .split(&text)
        .map(|s| s.trim())
        .filter(|s| char_len(s) > 5)
        .map(|s| s.to_string())
        .collect()
}

/// Strip word-level punctuation (quotes, geresh, sentence marks)
pub fn strip_word_punct(word: &str) -> String {
    WORD_PUNCT_REGEX.replace_all(word, "").into_owned()
}

/// Strip sentence-level punctuation only
pub fn strip_sentence_punct(text: &str) -> String {
    SENTENCE_PUNCT_REGEX.replace_all(text, "").into_owned()
}

/// Character count (not byte length)
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `n` characters of `s`, safe on any char boundary
pub fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Characters `start..end` of `s`; empty when `start` is past the end
pub fn substring_chars(s: &str, start: usize, end: usize) -> &str {
    let begin = match s.char_indices().nth(start) {
        Some((idx, _)) => idx,
        None => return "",
    };
    let finish = match s.char_indices().nth(end) {
        Some((idx, _)) => idx,
        None => s.len(),
    };
    &s[begin..finish]
}

/// Does the text contain an ASCII digit?
pub fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}
