/*!
 * Agreement-error records for the fix-sentence exercise.
 *
 * Each record pairs a malformed phrase with its corrected form and the
 * rule name quoted in the explanation. These are the agreement mistakes
 * second graders actually make: verb-to-gender, plural and adjective
 * agreement.
 */

/// One grammar mistake with its correction and rule name
pub struct GrammarFix {
    pub wrong: &'static str,
    pub correct: &'static str,
    pub rule: &'static str,
}

/// Common agreement errors for young Hebrew writers
pub const GRAMMAR_MISTAKES: &[GrammarFix] = &[
    GrammarFix { wrong: "הוא הלכה", correct: "הוא הלך", rule: "התאמת פועל לגוף" },
    GrammarFix { wrong: "היא רץ", correct: "היא רצה", rule: "התאמת פועל לגוף" },
    GrammarFix { wrong: "הילדים שמח", correct: "הילדים שמחים", rule: "התאמה לרבים" },
    GrammarFix { wrong: "הכלב גדולה", correct: "הכלב גדול", rule: "התאמת תואר" },
];
