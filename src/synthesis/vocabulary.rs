/*!
 * Vocabulary exercise: synonyms, antonyms and sense-in-context.
 *
 * One of three sub-types is drawn per call:
 * - `synonym` (draw < 0.35) - similar meaning, preferring a table word
 *   that actually appears in the article text.
 * - `antonym` (draw < 0.65) - opposite meaning, same table preference.
 * - `context_meaning` - which sense of a multi-sense word applies in its
 *   example sentence.
 *
 * All three always succeed: a table entry is drawn at random when no
 * table word occurs in the article.
 */

use crate::analysis::ArticleAnalysis;
use crate::exercise::{AnswerKey, Exercise, ExerciseKind, ExerciseOption, TopicId};
use crate::lexicon::vocabulary::{ANTONYMS, MULTI_SENSE, SYNONYMS};
use crate::rng::RandomSource;

/// Build the vocabulary item for one article
pub fn synthesize(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let draw = rng.next_f64();
    if draw < 0.35 {
        synonym_question(base_id, analysis, story_text, rng)
    } else if draw < 0.65 {
        antonym_question(base_id, analysis, story_text, rng)
    } else {
        context_meaning_question(base_id, analysis, story_text, rng)
    }
}

/// Which word has a similar meaning?
fn synonym_question(
    base_id: &str,
    _analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let entry = SYNONYMS
        .iter()
        .find(|e| story_text.contains(e.word))
        .or_else(|| rng.choose(SYNONYMS))
        .expect("synonym table is non-empty");

    let mut options = vec![ExerciseOption::new("correct", entry.synonym, true)];
    for (i, text) in entry.wrong.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), *text, false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-vocabulary", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Vocabulary,
        game_type: "gold-word".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: format!("איזו מילה דומה במשמעות ל\"{}\"? (מילה נרדפת)", entry.word),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 2,
        tags: vec!["vocabulary".to_string(), "synonyms".to_string()],
        xp_value: 1,
        explanation: format!(
            "\"{}\" ו\"{}\" הן מילים נרדפות - יש להן משמעות דומה!",
            entry.synonym, entry.word
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}

/// What is the opposite?
fn antonym_question(
    base_id: &str,
    _analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let entry = ANTONYMS
        .iter()
        .find(|e| story_text.contains(e.word))
        .or_else(|| rng.choose(ANTONYMS))
        .expect("antonym table is non-empty");

    let mut options = vec![ExerciseOption::new("correct", entry.antonym, true)];
    for (i, text) in entry.wrong.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), *text, false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-vocabulary", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Vocabulary,
        game_type: "opposites-arena".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: format!("מה ההפך של \"{}\"? (מילה הפוכה)", entry.word),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 2,
        tags: vec!["vocabulary".to_string(), "antonyms".to_string()],
        xp_value: 1,
        explanation: format!(
            "\"{}\" הוא ההפך של \"{}\". מילים הפוכות = אנטונימים!",
            entry.antonym, entry.word
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}

/// Which sense of the word applies in this sentence?
fn context_meaning_question(
    base_id: &str,
    _analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let entry = rng
        .choose(MULTI_SENSE)
        .expect("multi-sense table is non-empty");

    let mut options = vec![ExerciseOption::new("correct", entry.correct_meaning, true)];
    for (i, text) in entry.wrong_meanings.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("wrong-{}", i), *text, false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-vocabulary", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Vocabulary,
        game_type: "gold-word".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: format!(
            "במשפט \"{}\" - מה הכוונה של המילה \"{}\"?",
            entry.sentence, entry.word
        ),
        options,
        correct_answer: AnswerKey::Single("correct".to_string()),
        difficulty: 3,
        tags: vec![
            "vocabulary".to_string(),
            "context-meaning".to_string(),
            "multiple-meanings".to_string(),
        ],
        xp_value: 1,
        explanation: format!(
            "במשפט הזה, \"{}\" פירושו \"{}\". יש מילים עם כמה משמעויות!",
            entry.word, entry.correct_meaning
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}
