/*!
 * Look-alike word tables for the reading exercise.
 *
 * The altered-word strategy swaps a content word for a visually or
 * phonetically confusing neighbor. Known words get a curated confusion
 * list; anything else falls back to the generic pools.
 */

/// Curated confusion lists keyed by the original word
pub const CONFUSION_PAIRS: &[(&str, &[&str])] = &[
    ("שער", &["שיער", "שעה", "שיר"]),
    ("כדור", &["כדורגל", "כדורסל", "כידור"]),
    ("משחק", &["משהק", "מישחק", "משחה"]),
    ("שיר", &["שער", "שיער", "שור"]),
    ("בית", &["בת", "בייט", "בות"]),
    ("ילד", &["יילד", "ילדה", "יֶלֶד"]),
    ("גדול", &["גודל", "גדולה", "גדל"]),
    ("קטן", &["קטנה", "קטין", "קאטן"]),
    ("יפה", &["יפי", "יפהפה", "יופי"]),
    ("חדש", &["חדשה", "חידש", "חדיש"]),
];

/// Generic substitutes when a word has no curated confusion list
pub const GENERIC_CONFUSIONS: &[&str] = &[
    "מטוס", "רכבת", "אופניים", "כלב", "חתול", "שמש", "ירח", "כוכב",
];

/// Generic distractor nouns for filler options
pub const DISTRACTOR_POOL: &[&str] = &[
    "שולחן", "כיסא", "מחברת", "עפרון", "תיק", "ספר", "דלת", "חלון", "שעון", "טלפון",
    "מראה", "כובע",
];

/// Curated confusion list for a word, if it has one
pub fn confusions_for(word: &str) -> Option<&'static [&'static str]> {
    CONFUSION_PAIRS
        .iter()
        .find(|(original, _)| *original == word)
        .map(|(_, confusions)| *confusions)
}
