/*!
 * Orchestrator: one article in, four exercises out.
 *
 * Runs the analyzer once and hands the resulting `ArticleAnalysis` to
 * the four synthesizers in fixed topic order. All randomness flows
 * through the caller's `RandomSource`, so a seeded source makes the
 * whole batch reproducible while a system source gives fresh exercises
 * on every pass over the same article.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyze_article;
use crate::errors::GenerationError;
use crate::exercise::Exercise;
use crate::rng::{RandomSource, SeededSource};
use crate::synthesis::{comprehension, reading, vocabulary, writing};

/// One news article to practice on
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable identifier, used to derive item ids
    #[serde(default = "default_article_id")]
    pub id: String,

    /// Headline
    pub title: String,

    /// Body text
    pub body: String,

    /// Optional interest label anchoring the subject (e.g. a favorite
    /// athlete's name the reader picked)
    #[serde(default, alias = "interestName")]
    pub interest: Option<String>,
}

fn default_article_id() -> String {
    "article".to_string()
}

/// Generate the four practice exercises for one article.
///
/// Topics always come back as [reading, comprehension, writing,
/// vocabulary]. Exercise content varies with the random source; the
/// article itself is read-only and no state survives the call. Fails
/// only when the article has no text at all.
pub fn generate_exercises(
    article: &Article,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Exercise>, GenerationError> {
    if article.title.trim().is_empty() && article.body.trim().is_empty() {
        return Err(GenerationError::EmptyArticle);
    }

    let analysis = analyze_article(
        &article.title,
        &article.body,
        article.interest.as_deref(),
    );
    debug!(
        "Analyzed article '{}': subject '{}' ({:?}), {} sentences, tone {:?}",
        article.id,
        analysis.subject,
        analysis.subject_type,
        analysis.sentences.len(),
        analysis.emotion
    );

    let base_id = format!("news-{}", article.id);
    let story_text = article.body.as_str();

    Ok(vec![
        reading::synthesize(&base_id, &analysis, story_text, rng),
        comprehension::synthesize(&base_id, &analysis, story_text, rng),
        writing::synthesize(&base_id, &analysis, story_text, rng),
        vocabulary::synthesize(&base_id, &analysis, story_text, rng),
    ])
}

/// Generate with a fixed seed; identical input and seed give identical output
pub fn generate_with_seed(article: &Article, seed: u64) -> Result<Vec<Exercise>, GenerationError> {
    let mut rng = SeededSource::new(seed);
    generate_exercises(article, &mut rng)
}
