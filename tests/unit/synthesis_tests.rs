/*!
 * Tests for the four exercise synthesizers, forcing each sub-strategy
 * through a scripted random source.
 */

use crate::common::{rich_article, short_article, ScriptedSource};
use tirgul::analysis::{analyze_article, ArticleAnalysis};
use tirgul::exercise::{AnswerKey, ExerciseKind, TopicId};
use tirgul::synthesis::{comprehension, reading, vocabulary, writing};
use tirgul::validation::is_well_formed;
use tirgul::Article;

fn analyze(article: &Article) -> ArticleAnalysis {
    analyze_article(&article.title, &article.body, article.interest.as_deref())
}

// ---- reading ----

#[test]
fn test_reading_withRichArticle_shouldAskForTheOriginalWord() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[]);

    let item = reading::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert_eq!(item.topic_id, TopicId::Reading);
    assert_eq!(item.correct_answer, AnswerKey::Single("original".to_string()));
    assert!(item.prompt.contains("**"));
    assert!(is_well_formed(&item));
}

#[test]
fn test_reading_withShortArticle_shouldUseRealSentenceFallback() {
    let article = short_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[]);

    let item = reading::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert_eq!(item.prompt, "איזה משפט באמת מופיע בכתבה?");
    assert_eq!(item.correct_answer, AnswerKey::Single("real".to_string()));
    assert!(is_well_formed(&item));
}

// ---- comprehension ----

#[test]
fn test_comprehension_withLowDraw_shouldAskWhy() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.1]);

    let item = comprehension::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.starts_with("למה"));
    assert!(item.tags.contains(&"why".to_string()));
    assert!(is_well_formed(&item));
}

#[test]
fn test_comprehension_withMidDraw_shouldAskSequence() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.5]);

    let item = comprehension::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("מה קרה קודם"));
    assert!(is_well_formed(&item));
}

#[test]
fn test_comprehension_withHighDraw_shouldAskConclusion() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.9]);

    let item = comprehension::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("המסקנה"));
    assert!(is_well_formed(&item));
}

#[test]
fn test_comprehension_withMidDrawAndOneSentence_shouldFallBackToConclusion() {
    let article = short_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.5]);

    let item = comprehension::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("המסקנה"));
    assert!(is_well_formed(&item));
}

// ---- writing ----

#[test]
fn test_writing_withLowDraw_shouldAskGrammarFix() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.1]);

    let item = writing::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("דקדוקית"));
    assert_eq!(item.game_type, "fix-sentence");
    assert!(is_well_formed(&item));
}

#[test]
fn test_writing_withMidDraw_shouldAskCompletion() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.5]);

    let item = writing::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert_eq!(item.kind, ExerciseKind::Mcq);
    assert_eq!(item.game_type, "sentence-builder");
    assert!(is_well_formed(&item));
}

#[test]
fn test_writing_withHighDraw_shouldEmitDragOrder() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.9]);

    let item = writing::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert_eq!(item.kind, ExerciseKind::DragOrder);
    assert!((4..=6).contains(&item.options.len()));
    match &item.correct_answer {
        AnswerKey::Ordered(ids) => assert_eq!(ids.len(), item.options.len()),
        AnswerKey::Single(_) => panic!("expected ordered answer key"),
    }
    assert!(is_well_formed(&item));
}

#[test]
fn test_writing_withHighDrawAndShortArticle_shouldFallBackToCompletion() {
    let article = short_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.9]);

    let item = writing::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert_eq!(item.kind, ExerciseKind::Mcq);
    assert!(is_well_formed(&item));
}

// ---- vocabulary ----

#[test]
fn test_vocabulary_withLowDraw_shouldAskSynonym() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.1]);

    let item = vocabulary::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("נרדפת"));
    assert!(is_well_formed(&item));
}

#[test]
fn test_vocabulary_withMidDraw_shouldAskAntonym() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.5]);

    let item = vocabulary::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("ההפך"));
    assert_eq!(item.game_type, "opposites-arena");
    assert!(is_well_formed(&item));
}

#[test]
fn test_vocabulary_withHighDraw_shouldAskContextMeaning() {
    let article = rich_article();
    let analysis = analyze(&article);
    let mut rng = ScriptedSource::new(&[0.9]);

    let item = vocabulary::synthesize("news-t", &analysis, &article.body, &mut rng);

    assert!(item.prompt.contains("הכוונה"));
    assert!(is_well_formed(&item));
}
