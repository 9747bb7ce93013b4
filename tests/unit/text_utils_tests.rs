/*!
 * Tests for text normalization helpers
 */

use tirgul::text_utils::{
    char_len, full_text, has_digit, split_sentences, strip_sentence_punct, strip_word_punct,
    substring_chars, truncate_chars,
};

#[test]
fn test_splitSentences_withTitleAndBody_shouldPrependTitle() {
    let sentences = split_sentences("כותרת מעניינת", "גוף הכתבה כאן. משפט נוסף כאן!");
    assert_eq!(
        sentences,
        vec!["כותרת מעניינת", "גוף הכתבה כאן", "משפט נוסף כאן"]
    );
}

#[test]
fn test_splitSentences_withRunsOfTerminators_shouldNotEmitEmptyPieces() {
    let sentences = split_sentences("שאלה גדולה?!", "תשובה ברורה מאוד...");
    assert_eq!(sentences, vec!["שאלה גדולה", "תשובה ברורה מאוד"]);
}

#[test]
fn test_splitSentences_withOnlyShortFragments_shouldReturnEmpty() {
    let sentences = split_sentences("אב", "גד. הו");
    assert!(sentences.is_empty());
}

#[test]
fn test_fullText_shouldJoinWithPeriod() {
    assert_eq!(full_text("כותרת", "גוף"), "כותרת. גוף");
}

#[test]
fn test_charLen_withHebrew_shouldCountCharsNotBytes() {
    assert_eq!(char_len("שלום"), 4);
    assert!("שלום".len() > 4);
}

#[test]
fn test_truncateChars_shouldRespectCharBoundaries() {
    assert_eq!(truncate_chars("הכלב רץ מהר", 4), "הכלב");
    assert_eq!(truncate_chars("אב", 5), "אב");
    assert_eq!(truncate_chars("", 3), "");
}

#[test]
fn test_substringChars_shouldSliceByCharPosition() {
    assert_eq!(substring_chars("אבגדה", 1, 3), "בג");
    assert_eq!(substring_chars("אבגדה", 3, 99), "דה");
    assert_eq!(substring_chars("אב", 5, 9), "");
}

#[test]
fn test_stripWordPunct_shouldRemoveQuotesGereshAndMarks() {
    assert_eq!(strip_word_punct("\"מילה\"!"), "מילה");
    assert_eq!(strip_word_punct("צה״ל"), "צהל");
    assert_eq!(strip_word_punct("נקי"), "נקי");
}

#[test]
fn test_stripSentencePunct_shouldKeepQuotes() {
    assert_eq!(strip_sentence_punct("מילה, ועוד; מילה."), "מילה ועוד מילה");
}

#[test]
fn test_hasDigit_shouldDetectAsciiDigitsOnly() {
    assert!(has_digit("יש 12 מטבעות"));
    assert!(!has_digit("אין מספרים"));
}
