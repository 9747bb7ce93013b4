/*!
 * Common test utilities: sample articles and a scripted random source.
 */

use std::collections::VecDeque;

use tirgul::rng::RandomSource;
use tirgul::Article;

/// Random source with scripted draws for forcing synthesizer branches.
///
/// `next_f64` pops queued values (0.0 once exhausted) and `index` always
/// returns 0, so table picks and shuffles are fully deterministic.
pub struct ScriptedSource {
    draws: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(draws: &[f64]) -> Self {
        ScriptedSource {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.0)
    }

    fn index(&mut self, _len: usize) -> usize {
        0
    }
}

/// The dog-contest article from the design discussions
pub fn contest_article() -> Article {
    Article {
        id: "contest".to_string(),
        title: "הכלב הגדול ניצח בתחרות".to_string(),
        body: "הכלב התאמן קשה. הוא שמח מאוד. כולם אהבו אותו.".to_string(),
        interest: None,
    }
}

/// A longer article with sentence material for every primary strategy
pub fn rich_article() -> Article {
    Article {
        id: "rich".to_string(),
        title: "הילדה מצאה אוצר בחצר".to_string(),
        body: "הילדה חפרה בגינה אחרי הלימודים ומצאה קופסה ישנה. \
               בתוך הקופסה היו 12 מטבעות עתיקים. \
               היא שמחה מאוד והצליחה להפתיע את כולם."
            .to_string(),
        interest: None,
    }
}

/// One short sentence: no digits, no action verbs, 20 characters or
/// fewer. Forces every synthesizer onto its fallback path.
pub fn short_article() -> Article {
    Article {
        id: "short".to_string(),
        title: "יום רגיל בגן".to_string(),
        body: "".to_string(),
        interest: None,
    }
}
