/*!
 * Reading exercise: spot the word that was altered in a real sentence.
 *
 * Strategy order:
 * 1. `altered_word` - corrupt one content word of a mid-length sentence
 *    with a confusing look-alike and ask for the original.
 * 2. `real_sentence` - when no sentence or content word qualifies, ask
 *    which sentence actually appears in the article, against fabricated
 *    absurd ones.
 */

use log::debug;

use crate::analysis::ArticleAnalysis;
use crate::exercise::{AnswerKey, Exercise, ExerciseKind, ExerciseOption, TopicId};
use crate::lexicon::{confusions_for, is_stop_word, DISTRACTOR_POOL, GENERIC_CONFUSIONS};
use crate::rng::RandomSource;
use crate::text_utils::{char_len, truncate_chars};

/// Build the reading item for one article
pub fn synthesize(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    altered_word(base_id, analysis, story_text, rng).unwrap_or_else(|| {
        debug!("reading: no alterable sentence, using real-sentence fallback");
        real_sentence(base_id, analysis, story_text, rng)
    })
}

/// Primary strategy: alter one content word and ask for the original.
///
/// Needs a sentence of 15-60 characters (or the lead sentence) holding at
/// least four words and one content word outside the subject.
fn altered_word(
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
            n > 15 && n < 60
        })
        .or_else(|| analysis.sentences.first())?;

    let words: Vec<&str> = sentence
        .split_whitespace()
        .filter(|w| char_len(w) > 2)
        .collect();

    let target_idx = words.iter().position(|w| {
        char_len(w) >= 3 && !is_stop_word(w) && !w.contains(analysis.subject.as_str())
    })?;
    if words.len() < 4 {
        return None;
    }

    let original_word = words[target_idx];
    let wrong_word = confusing_word(original_word, rng);

    let corrupted: String = words
        .iter()
        .enumerate()
        .map(|(i, w)| if i == target_idx { wrong_word.as_str() } else { w })
        .collect::<Vec<_>>()
        .join(" ");
    let highlighted = corrupted.replacen(&wrong_word, &format!("**{}**", wrong_word), 1);

    let mut options = vec![
        ExerciseOption::new("original", original_word, true),
        ExerciseOption::new("wrong", wrong_word.clone(), false),
        ExerciseOption::new("fake1", random_distractor(original_word, rng), false),
        ExerciseOption::new("fake2", random_distractor(original_word, rng), false),
    ];
    rng.shuffle(&mut options);

    Some(Exercise {
        id: format!("{}-reading", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Reading,
        game_type: "mistake-hunter".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: format!(
            "במשפט הזה יש טעות! איזו מילה צריכה להיות במקום המילה המסומנת?\n\n\"{}\"",
            highlighted
        ),
        options,
        correct_answer: AnswerKey::Single("original".to_string()),
        difficulty: 2,
        tags: vec!["reading".to_string(), "mistake-finding".to_string()],
        xp_value: 1,
        explanation: format!(
            "המילה הנכונה היא \"{}\" ולא \"{}\". המשפט המקורי: \"{}\"",
            original_word, wrong_word, sentence
        ),
        story_text: story_text.to_string(),
        sequence_items: None,
    })
}

/// Fallback: which sentence really appears in the article?
fn real_sentence(
    base_id: &str,
    analysis: &ArticleAnalysis,
    story_text: &str,
    rng: &mut dyn RandomSource,
) -> Exercise {
    let real = analysis
        .sentences
        .first()
        .map(|s| truncate_chars(s, 50).to_string())
        .unwrap_or_else(|| analysis.subject.clone());
    let real_display = if real.ends_with('.') {
        real.clone()
    } else {
        format!("{}...", real)
    };

    let fakes = [
        format!("{} טס לירח והחזיר גבינה", analysis.subject),
        format!("{} הפך לעץ גדול", analysis.subject),
        format!("{} נעלם ומצאו אותו בארון", analysis.subject),
    ];

    let mut options = vec![ExerciseOption::new("real", real_display, true)];
    for (i, fake) in fakes.iter().enumerate() {
        options.push(ExerciseOption::new(&format!("fake-{}", i), fake.clone(), false));
    }
    rng.shuffle(&mut options);

    Exercise {
        id: format!("{}-reading", base_id),
        lesson_id: base_id.to_string(),
        topic_id: TopicId::Reading,
        game_type: "mistake-hunter".to_string(),
        kind: ExerciseKind::Mcq,
        prompt: "איזה משפט באמת מופיע בכתבה?".to_string(),
        options,
        correct_answer: AnswerKey::Single("real".to_string()),
        difficulty: 2,
        tags: vec!["reading".to_string(), "sentence-recognition".to_string()],
        xp_value: 1,
        explanation: format!("המשפט מהכתבה הוא: \"{}\". השאר היו המצאה!", real),
        story_text: story_text.to_string(),
        sequence_items: None,
    }
}

/// A look-alike for the original word, from the curated table when it has
/// an entry, otherwise from the generic confusion pool
fn confusing_word(original: &str, rng: &mut dyn RandomSource) -> String {
    match confusions_for(original) {
        Some(confusions) => rng
            .choose(confusions)
            .map(|w| w.to_string())
            .unwrap_or_default(),
        None => rng
            .choose(GENERIC_CONFUSIONS)
            .map(|w| w.to_string())
            .unwrap_or_default(),
    }
}

/// A filler noun different from the original word
fn random_distractor(original: &str, rng: &mut dyn RandomSource) -> String {
    let pool: Vec<&str> = DISTRACTOR_POOL
        .iter()
        .copied()
        .filter(|d| *d != original)
        .collect();
    rng.choose(&pool).map(|w| w.to_string()).unwrap_or_default()
}
