/*!
 * Lexical tables for the vocabulary exercise.
 *
 * Synonym, antonym and multi-sense entries pitched at early readers.
 * Each entry carries its own wrong options so a single table row fully
 * determines one multiple-choice item.
 */

/// A word with a synonym and three wrong meanings
pub struct SynonymEntry {
    pub word: &'static str,
    pub synonym: &'static str,
    pub wrong: [&'static str; 3],
}

/// A word with an antonym and three wrong options
pub struct AntonymEntry {
    pub word: &'static str,
    pub antonym: &'static str,
    pub wrong: [&'static str; 3],
}

/// A multi-sense word with an example sentence fixing one sense
pub struct SenseEntry {
    pub word: &'static str,
    pub sentence: &'static str,
    pub correct_meaning: &'static str,
    pub wrong_meanings: [&'static str; 3],
}

/// Synonym pairs
pub const SYNONYMS: &[SynonymEntry] = &[
    SynonymEntry { word: "גדול", synonym: "ענק", wrong: ["קטן", "צר", "נמוך"] },
    SynonymEntry { word: "שמח", synonym: "עליז", wrong: ["עצוב", "כועס", "עייף"] },
    SynonymEntry { word: "יפה", synonym: "נאה", wrong: ["מכוער", "משעמם", "רגיל"] },
    SynonymEntry { word: "מהר", synonym: "במהירות", wrong: ["לאט", "בעצלות", "אחר כך"] },
    SynonymEntry { word: "רץ", synonym: "דהר", wrong: ["עמד", "ישב", "שכב"] },
    SynonymEntry { word: "אמר", synonym: "סיפר", wrong: ["שתק", "שמע", "ראה"] },
    SynonymEntry { word: "הלך", synonym: "צעד", wrong: ["עצר", "נשאר", "חזר"] },
    SynonymEntry { word: "טוב", synonym: "מצוין", wrong: ["רע", "גרוע", "נורא"] },
    SynonymEntry { word: "חזק", synonym: "עצום", wrong: ["חלש", "רך", "שביר"] },
    SynonymEntry { word: "חדש", synonym: "טרי", wrong: ["ישן", "עתיק", "שבור"] },
];

/// Antonym pairs
pub const ANTONYMS: &[AntonymEntry] = &[
    AntonymEntry { word: "גדול", antonym: "קטן", wrong: ["ענק", "רחב", "גבוה"] },
    AntonymEntry { word: "שמח", antonym: "עצוב", wrong: ["עליז", "צוהל", "מאושר"] },
    AntonymEntry { word: "חם", antonym: "קר", wrong: ["רותח", "חמים", "לוהט"] },
    AntonymEntry { word: "מהר", antonym: "לאט", wrong: ["במהירות", "בריצה", "מיד"] },
    AntonymEntry { word: "עלה", antonym: "ירד", wrong: ["קפץ", "טיפס", "זינק"] },
    AntonymEntry { word: "פתח", antonym: "סגר", wrong: ["נעל", "הרים", "משך"] },
    AntonymEntry { word: "התחיל", antonym: "סיים", wrong: ["המשיך", "פתח", "יצא"] },
    AntonymEntry { word: "בא", antonym: "הלך", wrong: ["הגיע", "נכנס", "חזר"] },
    AntonymEntry { word: "אהב", antonym: "שנא", wrong: ["חיבב", "העדיף", "רצה"] },
    AntonymEntry { word: "זכר", antonym: "שכח", wrong: ["ידע", "הבין", "למד"] },
];

/// Multi-sense words with a sentence fixing the intended sense
pub const MULTI_SENSE: &[SenseEntry] = &[
    SenseEntry {
        word: "שער",
        sentence: "השחקן כבש שער",
        correct_meaning: "גול בכדורגל",
        wrong_meanings: ["שיער בראש", "דלת כניסה", "מספר מתמטי"],
    },
    SenseEntry {
        word: "כוכב",
        sentence: "הוא כוכב גדול",
        correct_meaning: "מפורסם ומוכשר",
        wrong_meanings: ["גוף בחלל", "צורה גיאומטרית", "תכשיט"],
    },
    SenseEntry {
        word: "לב",
        sentence: "היא שמה לב לפרטים",
        correct_meaning: "תשומת לב, התרכזות",
        wrong_meanings: ["איבר בגוף", "מרכז העיר", "צורה של לב"],
    },
    SenseEntry {
        word: "יד",
        sentence: "הוא נתן יד",
        correct_meaning: "עזר, סייע",
        wrong_meanings: ["איבר בגוף", "ידית של דלת", "כלי לכתיבה"],
    },
    SenseEntry {
        word: "ראש",
        sentence: "הוא עמד בראש",
        correct_meaning: "מוביל, ראשון",
        wrong_meanings: ["איבר בגוף", "חלק עליון", "מחשבה"],
    },
];
