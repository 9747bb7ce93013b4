/*!
 * Comprehension exercise: why, sequence and conclusion questions.
 *
 * One of three sub-types is drawn per call:
 * - `why` (draw < 0.33) - inference question templated by subject type,
 *   answered from the first detail sentence.
 * - `sequence` (draw < 0.66) - what happened first; needs at least two
 *   sentences, otherwise falls through to `conclusion`.
 * - `conclusion` - what can we learn, templated by emotional tone.
 */

use log::debug;

use crate::analysis::{ArticleAnalysis, Emotion, SubjectType};
use crate::exercise::{AnswerKey, Exercise, ExerciseKind, ExerciseOption, TopicId};
use crate::rng::RandomSource;
use crate::text_utils::{substring_chars, truncate_chars};

/// Irrelevant reasons used as wrong answers for the why question
const GENERIC_WRONG_REASONS: &[&str] = &[
    "כי הוא/היא רצה לישון",
    "כי היה משעמם בבית",
    "כי אמרו לו/לה לעשות את זה",
    "כי לא היה מה לאכול",
    "כי רצה לראות טלוויזיה",
];

/// Build the comprehension item for one article
pub fn synthesize(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let draw = rng.next_f64();
    if draw < 0.33 {
        why_question(base_id, analysis, story_text, rng)
    } else if draw < 0.66 {
        sequence_question(base_id, analysis, story_text, rng).unwrap_or_else(|| {
            debug!("comprehension: too few sentences for sequence, using conclusion");
            conclusion_question(base_id, analysis, story_text, rng)
        })
    } else {
        conclusion_question(base_id, analysis, story_text, rng)
    }
}

/// Why did the subject do what the article describes?
fn why_question(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let main_action = if analysis.main_action.is_empty() {
        analysis.sentences.first().cloned().unwrap_or_default()
    } else {
        analysis.main_action.clone()
    };

    let prompt = match analysis.subject_type {
        SubjectType::Person => {
            format!("למה {} עשה/עשתה את מה שמתואר בכתבה?", analysis.subject)
        }
        SubjectType::Animal => format!("למה {} התנהג/ה כך לפי הכתבה?", analysis.subject),
        SubjectType::Thing => format!("למה מדברים על {} בכתבה?", analysis.subject),
        SubjectType::Event => "למה האירוע הזה חשוב לפי הכתבה?".to_string(),
        SubjectType::Place => format!("למה {} מיוחד לפי הכתבה?", analysis.subject),
    };

    let correct = match analysis.details.first() {
        Some(detail) => format!("כי {}...", truncate_chars(detail, 40)),
        None => format!("כי זה קשור ל{}", analysis.subject),
    };

    // Drop generic reasons whose core phrase already appears in the
    // correct answer, so two options never say the same thing
    let wrong: Vec<&str> = GENERIC_WRONG_REASONS
        .iter()
        .copied()
        .filter(|reason| !correct.contains(substring_chars(reason, 3, 10)))
        .take(3)
        .collect();

    let mut options = vec![ExerciseOption::new("correct", correct, true)];
    for (i, text) in wrong.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), *text, false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-comprehension", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Comprehension,
        game_type: "story-detective".to_string(),
        kind: ExerciseKind::Mcq,
        prompt,
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 3,
        tags: vec![
            "comprehension".to_string(),
            "inference".to_string(),
            "why".to_string(),
        ],
        xp_value: 1,
        explanation: format!("התשובה נמצאת בכתבה! {}", main_action),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}

/// What happened first? Needs at least two sentences.
fn sequence_question(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Option<Exercise> {
    let events: Vec<&String> = analysis.sentences.iter().take(3).collect();
    if events.len() < 2 {
        return None;
    }

    let first_event = format!("{}...", truncate_chars(events[0], 35));
    let second_event = format!("{}...", truncate_chars(events[1], 35));

    let mut options = vec![
        ExerciseOption::new("correct", first_event, true),
        ExerciseOption::new("wrong-1", second_event, false),
        ExerciseOption::new("wrong-2", "שום דבר לא קרה קודם", false),
        ExerciseOption::new("wrong-3", "הסיפור מתחיל מהסוף", false),
    ];
    rng.shuffle(&mut options);

    Some(Exercise {
        id: format!("{}-comprehension", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Comprehension,
        game_type: "story-detective".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: "מה קרה קודם בכתבה? מה הדבר הראשון שמסופר?".to_string(),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 2,
        tags: vec![
            "comprehension".to_string(),
            "sequence".to_string(),
            "order".to_string(),
        ],
        xp_value: 1,
        explanation: format!(
            "הדבר הראשון שקרה: \"{}\". חשוב לשים לב לסדר!",
            events[0]
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    })
}

/// What can we conclude from the article? Templated by emotional tone.
fn conclusion_question(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let (correct, wrong): (String, [String; 3]) = match analysis.emotion {
        Emotion::Positive => (
            format!("{} עשה/עשתה משהו מיוחד וטוב", analysis.subject),
            [
                format!("{} נכשל/ה במשימה", analysis.subject),
                "הסיפור מסתיים בצורה עצובה".to_string(),
                "אף אחד לא שם לב למה שקרה".to_string(),
            ],
        ),
        Emotion::Negative => (
            "היו קשיים או אתגרים בסיפור".to_string(),
            [
                "הכל היה קל ופשוט".to_string(),
                "כולם היו שמחים מההתחלה".to_string(),
                "לא היו בעיות בכלל".to_string(),
            ],
        ),
        Emotion::Neutral => (
            format!("הכתבה מספרת על {} ומה קרה", analysis.subject),
            [
                "הכתבה היא בדיחה ארוכה".to_string(),
                "זה סיפור דמיוני לגמרי".to_string(),
                "הכתבה לא מספרת כלום".to_string(),
            ],
        ),
    };

    let mut options = vec![ExerciseOption::new("correct", correct.clone(), true)];
    for (i, text) in wrong.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), text.clone(), false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-comprehension", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Comprehension,
        game_type: "story-detective".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: "מה אפשר להבין מהכתבה? מה המסקנה?".to_string(),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 3,
        tags: vec![
            "comprehension".to_string(),
            "conclusion".to_string(),
            "inference".to_string(),
        ],
        xp_value: 1,
        explanation: format!("מהכתבה אפשר להבין ש{}. כל הכבוד על ההבנה!", correct),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}
