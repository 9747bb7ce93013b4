/*!
 * Category keyword lists for subject classification and content analysis.
 *
 * Membership against these lists drives subject-type classification
 * (checked in animal, person, place, event priority order), main-action
 * detection and the emotion vote. Keyword matching here is substring
 * containment, so inflected forms like "אהבו" hit the stem "אהב".
 */

/// Words indicating the article is about an animal
pub const ANIMAL_WORDS: &[&str] = &[
    "כלב", "חתול", "גור", "חיה", "ציפור", "דג", "סוס", "פנדה", "אריה", "דוב", "צב",
    "דינוזאור", "פיל", "קוף", "דולפין",
];

/// Words indicating the article is about a person
pub const PERSON_WORDS: &[&str] = &[
    "ילד", "ילדה", "אדם", "איש", "אישה", "זמר", "זמרת", "שחקן", "מדען", "אסטרונאוט",
    "מורה", "תלמיד",
];

/// Words indicating the article is about a place
pub const PLACE_WORDS: &[&str] = &["עיר", "מדינה", "גן חיות", "בית ספר", "חוף", "יער", "הר"];

/// Words indicating the article is about an event
pub const EVENT_WORDS: &[&str] = &["תחרות", "משחק", "הופעה", "חגיגה", "טקס", "אירוע"];

/// Action verbs used to find the main-action sentence
pub const ACTION_VERBS: &[&str] = &[
    "עשה", "הלך", "מצא", "גילה", "ניצח", "הצליח", "למד", "בנה", "יצר", "שיחק", "רץ",
    "קפץ", "שר", "הופיע", "זכה", "הגיע", "נולד", "גדל",
];

/// Words counted toward a positive emotional tone
pub const POSITIVE_WORDS: &[&str] = &[
    "שמח", "מצוין", "נהדר", "יפה", "אהב", "הצליח", "ניצח", "זכה", "מרגש", "מדהים",
    "חמוד", "מתוק", "כיף",
];

/// Words counted toward a negative emotional tone
pub const NEGATIVE_WORDS: &[&str] = &["עצוב", "קשה", "נפל", "פחד", "בעיה", "סכנה"];

/// Causal and sequential connectors marking detail-bearing sentences
pub const CONNECTOR_WORDS: &[&str] = &["כי", "אחרי", "לפני"];
