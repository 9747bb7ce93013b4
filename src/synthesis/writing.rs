/*!
 * Writing exercise: grammar fixing, sentence completion, word ordering.
 *
 * One of three sub-types is drawn per call:
 * - `fix_sentence` (draw < 0.4) - pick the grammatically correct form of
 *   an agreement-error record; needs at least one sentence, otherwise
 *   falls through to `complete_sentence`.
 * - `complete_sentence` (draw < 0.7) - fill-in-the-blank from one of
 *   three fixed templates; always available.
 * - `arrange_words` - drag-order over up to six tokens of a real
 *   sentence; needs at least four tokens, otherwise falls through to
 *   `complete_sentence`.
 */

use log::debug;

use crate::analysis::{ArticleAnalysis, Emotion};
use crate::exercise::{AnswerKey, Exercise, ExerciseKind, ExerciseOption, TopicId};
use crate::lexicon::grammar::GRAMMAR_MISTAKES;
use crate::rng::RandomSource;
use crate::text_utils::{char_len, strip_sentence_punct, truncate_chars};

/// Build the writing item for one article
pub fn synthesize(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let draw = rng.next_f64();
    if draw < 0.4 {
        fix_sentence(base_id, analysis, story_text, rng).unwrap_or_else(|| {
            debug!("writing: no sentence material, using completion fallback");
            complete_sentence(base_id, analysis, story_text, rng)
        })
    } else if draw < 0.7 {
        complete_sentence(base_id, analysis, story_text, rng)
    } else {
        arrange_words(base_id, analysis, story_text, rng).unwrap_or_else(|| {
            debug!("writing: fewer than four tokens, using completion fallback");
            complete_sentence(base_id, analysis, story_text, rng)
        })
    }
}

/// Which form is grammatically correct? Needs article sentences to exist.
fn fix_sentence(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Option<Exercise> {
    analysis
        .sentences
        .iter()
        .find(|s| {
            let n = char_len(s);
            n > 15 && n < 50
        })
        .or_else(|| analysis.sentences.first())?;

    let mistake = rng.choose(GRAMMAR_MISTAKES)?;
    let reversed: String = mistake
        .wrong
        .split_whitespace()
        .rev()
        .collect::<Vec<_>>()
        .join(" ");

    let mut options = vec![
        ExerciseOption::new("correct", mistake.correct, true),
        ExerciseOption::new("wrong", mistake.wrong, false),
        ExerciseOption::new("wrong-2", reversed, false),
        ExerciseOption::new("wrong-3", "שניהם נכונים", false),
    ];
    rng.shuffle(&mut options);

    Some(Exercise {
        id: format!("{}-writing", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Writing,
        game_type: "fix-sentence".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: "איזה משפט כתוב נכון מבחינה דקדוקית?".to_string(),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 3,
        tags: vec![
            "writing".to_string(),
            "grammar".to_string(),
            "fix-sentence".to_string(),
        ],
        xp_value: 1,
        explanation: format!(
            "\"{}\" נכון כי {}. \"{}\" הוא שגוי!",
            mistake.correct, mistake.rule, mistake.wrong
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    })
}

/// One fill-in-the-blank template about the article
struct CompletionTemplate {
    prompt: String,
    correct: String,
    wrong: [&'static str; 3],
}

/// Complete the sentence with what the article actually said
fn complete_sentence(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let subject = &analysis.subject;
    let positive = analysis.emotion == Emotion::Positive;

    let action_snippet = {
        let snippet = truncate_chars(&analysis.main_action, 30);
        if snippet.is_empty() {
            "עשה משהו מיוחד".to_string()
        } else {
            snippet.to_string()
        }
    };

    let templates = [
        CompletionTemplate {
            prompt: format!("השלם: \"בכתבה סיפרו על {} ש_____\"", subject),
            correct: action_snippet,
            wrong: ["אכל גלידה בחורף", "טס לירח", "הפך לבלון"],
        },
        CompletionTemplate {
            prompt: "השלם: \"הדבר המעניין בכתבה הוא ש_____\"".to_string(),
            correct: format!(
                "{} {}",
                subject,
                if positive { "הצליח/ה" } else { "התמודד/ה עם אתגר" }
            ),
            wrong: ["שום דבר לא קרה", "הכל היה רגיל", "אף אחד לא היה שם"],
        },
        CompletionTemplate {
            prompt: "מה היית כותב/ת בכותרת לכתבה הזו?".to_string(),
            correct: format!(
                "{} - {}",
                subject,
                if positive { "סיפור הצלחה" } else { "סיפור מרגש" }
            ),
            wrong: ["מתכון לעוגה", "תחזית מזג האוויר", "פרסומת לממתקים"],
        },
    ];
    let template = &templates[rng.index(templates.len())];

    let mut options = vec![ExerciseOption::new("correct", template.correct.clone(), true)];
    for (i, text) in template.wrong.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), *text, false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-writing", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Writing,
        game_type: "sentence-builder".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: template.prompt.clone(),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 2,
        tags: vec!["writing".to_string(), "sentence-completion".to_string()],
        xp_value: 1,
        explanation: format!(
            "התשובה הנכונה מתבססת על מה שקראת בכתבה על {}!",
            subject
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}

/// Arrange the words of a real sentence back into order.
/// Needs at least four usable tokens.
fn arrange_words(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Option<Exercise> {
    let sentence = analysis
        .sentences
        .iter()
        .find(|s| {
            let n = char_len(s);
            n > 20 && n < 60
        })
        .map(|s| s.as_str())
        .unwrap_or(analysis.main_action.as_str());

    let stripped = strip_sentence_punct(sentence);
    let stripped = stripped.trim();
    let source = if stripped.is_empty() {
        analysis.subject.as_str()
    } else {
        stripped
    };

    let words: Vec<String> = source
        .split_whitespace()
        .filter(|w| char_len(w) > 1)
        .take(6)
        .map(|w| w.to_string())
        .collect();
    if words.len() < 4 {
        return None;
    }

    let ordered_ids: Vec<String> = (0..words.len()).map(|i| format!("word-{}", i)).collect();
    let mut options: Vec<ExerciseOption> = words
        .iter()
        .enumerate()
        .map(|(i, w)| ExerciseOption::new(&format!("word-{}", i), w.clone(), false))
        .collect();
    rng.shuffle(&mut options);

    Some(Exercise {
        id: format!("{}-writing", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Writing,
        game_type: "sentence-builder".to_string(),
        kind: ExerciseKind::DragOrder,
        prompt: format!(
            "סדר את המילים למשפט הגיוני ונכון:\n(רמז: המשפט קשור ל{})",
            analysis.subject
        ),
        options,
        correct_answer: AnswerKey::Ordered(ordered_ids),
        difficulty: 3,
        tags: vec!["writing".to_string(), "sentence-order".to_string()],
        xp_value: 1,
        explanation: format!("המשפט הנכון: \"{}\". מבנה משפט חשוב!", words.join(" ")),
        story_text: story_text.to_string(),
        sequence_items: Some(words),
    })
}
