/*!
 * Hebrew stop-word list.
 *
 * Function words excluded from subject scoring and keyword extraction.
 * Tuned for the short news register young readers see; this is a closed
 * list, not a morphological analyzer.
 */

/// Common function words that never qualify as content words
pub const STOP_WORDS: &[&str] = &[
    "את", "של", "על", "עם", "אל", "מן", "הוא", "היא", "הם", "הן", "אני", "אתה",
    "זה", "זאת", "אלה", "כל", "כמו", "גם", "רק", "עוד", "יותר", "פחות", "מאוד", "כבר",
    "היה", "היתה", "היו", "יהיה", "להיות", "שהיה", "שהיא", "שהם", "אשר", "כאשר",
    "לא", "כן", "אבל", "או", "אם", "כי", "למה", "מה", "מי", "איך", "איפה", "מתי",
    "ואת", "ועל", "ושל", "והוא", "והיא", "לו", "לה", "להם", "שלו", "שלה", "שלהם",
];

/// Is the word a function word?
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
