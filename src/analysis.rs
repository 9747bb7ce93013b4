/*!
 * Article analysis: subject extraction and content classification.
 *
 * Turns raw title/body text into an `ArticleAnalysis` the four
 * synthesizers consume. The analysis is heuristic by design: frequency
 * and position stand in for real NLP, and every step degrades to a
 * best-effort value instead of failing. An externally supplied interest
 * name can anchor the subject regardless of what frequency analysis
 * would pick.
 */

use log::debug;
use serde::Serialize;

use crate::lexicon::categories::{
    ACTION_VERBS, ANIMAL_WORDS, CONNECTOR_WORDS, EVENT_WORDS, NEGATIVE_WORDS, PERSON_WORDS,
    PLACE_WORDS, POSITIVE_WORDS,
};
use crate::lexicon::is_stop_word;
use crate::text_utils::{
    char_len, full_text, has_digit, split_sentences, strip_sentence_punct, strip_word_punct,
};

/// Semantic category of the article's subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Person,
    Animal,
    Thing,
    Event,
    Place,
}

/// Emotional tone of the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
}

/// Subject candidate with its heuristic score
#[derive(Debug, Clone)]
pub struct SubjectGuess {
    /// Best-guess topic phrase
    pub text: String,
    /// Heuristic confidence score
    pub confidence: u32,
}

/// Everything the synthesizers need to know about one article
#[derive(Debug, Clone)]
pub struct ArticleAnalysis {
    /// Primary topic noun or phrase; empty only for empty input
    pub subject: String,

    /// Semantic category of the subject
    pub subject_type: SubjectType,

    /// Sentence describing what happened
    pub main_action: String,

    /// Up to three supporting detail sentences
    pub details: Vec<String>,

    /// All clean sentences of title+body
    pub sentences: Vec<String>,

    /// Majority-vote emotional tone
    pub emotion: Emotion,

    /// Up to eight most frequent content words
    pub keywords: Vec<String>,
}

/// Analyze one article, optionally anchored to an interest name.
///
/// Never fails: short or degenerate input produces empty or near-empty
/// fields and the synthesizers switch to their fallback strategies.
pub fn analyze_article(title: &str, body: &str, interest: Option<&str>) -> ArticleAnalysis {
    let text = full_text(title, body);
    let sentences = split_sentences(title, body);

    let mut subject = find_main_subject(&sentences);

    // An interest name from the reader's own selection outranks frequency
    // analysis, so the questions stay about what the reader cares about.
    if let Some(name) = interest {
        if char_len(name) >= 2 {
            let confidence = if text.contains(name) { 10 } else { 5 };
            subject = SubjectGuess {
                text: name.to_string(),
                confidence,
            };
        }
    }
    debug!(
        "Resolved subject '{}' (confidence {})",
        subject.text, subject.confidence
    );

    let subject_type = classify_subject(&subject.text, &text);
    let main_action = find_main_action(&sentences, &subject.text);
    let details = extract_details(&sentences);
    let emotion = analyze_emotion(&text);

    let mut keywords = extract_keywords(&text);
    if let Some(name) = interest {
        if !keywords.iter().any(|k| k == name) {
            keywords.truncate(7);
            keywords.insert(0, name.to_string());
        }
    }

    ArticleAnalysis {
        subject: subject.text,
        subject_type,
        main_action,
        details,
        sentences,
        emotion,
        keywords,
    }
}

/// Insertion-ordered score table so equal scores break first-seen
struct ScoreTable {
    entries: Vec<(String, u32)>,
}

impl ScoreTable {
    fn new() -> Self {
        ScoreTable { entries: Vec::new() }
    }

    fn bump(&mut self, key: String, amount: u32) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 += amount,
            None => self.entries.push((key, amount)),
        }
    }
}

/// Find the most likely subject by frequency plus opening-sentence position.
///
/// Two-word phrases score double so a repeated full name beats its parts,
/// and the first four words of the opening sentence get a flat boost
/// because the lead usually names the subject.
pub fn find_main_subject(sentences: &[String]) -> SubjectGuess {
    let mut candidates = ScoreTable::new();

    for sentence in sentences {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        // Two-word phrases are more specific subjects
        for pair in words.windows(2) {
            let phrase = strip_sentence_punct(&format!("{} {}", pair[0], pair[1]));
            if char_len(&phrase) > 5 && !is_stop_word(&phrase) {
                candidates.bump(phrase, 2);
            }
        }

        // Single content words; >= 3 chars keeps short names in play
        for word in &words {
            let clean = strip_word_punct(word);
            if char_len(&clean) >= 3 && !is_stop_word(&clean) {
                candidates.bump(clean, 1);
            }
        }
    }

    if let Some(first) = sentences.first() {
        for word in first.split_whitespace().take(4) {
            let clean = strip_word_punct(word);
            if char_len(&clean) > 2 {
                candidates.bump(clean, 3);
            }
        }
    }

    let mut best_text = "";
    let mut best_score = 0;
    for (candidate, score) in &candidates.entries {
        if *score > best_score && char_len(candidate) > 2 {
            best_score = *score;
            best_text = candidate;
        }
    }

    let text = if best_text.is_empty() {
        sentences
            .first()
            .map(|s| {
                s.split_whitespace()
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    } else {
        best_text.to_string()
    };

    SubjectGuess {
        text,
        confidence: best_score,
    }
}

/// Classify the subject by keyword membership, first matching list wins.
///
/// Animal and person indicators also consider the subject phrase itself;
/// place and event indicators look at the text only.
pub fn classify_subject(subject: &str, text: &str) -> SubjectType {
    let text = text.to_lowercase();
    let subject = subject.to_lowercase();

    if ANIMAL_WORDS
        .iter()
        .any(|w| text.contains(w) || subject.contains(w))
    {
        return SubjectType::Animal;
    }
    if PERSON_WORDS
        .iter()
        .any(|w| text.contains(w) || subject.contains(w))
    {
        return SubjectType::Person;
    }
    if PLACE_WORDS.iter().any(|w| text.contains(w)) {
        return SubjectType::Place;
    }
    if EVENT_WORDS.iter().any(|w| text.contains(w)) {
        return SubjectType::Event;
    }

    SubjectType::Thing
}

/// First sentence naming the subject together with an action verb,
/// then any sentence with an action verb, then the first sentence.
pub fn find_main_action(sentences: &[String], subject: &str) -> String {
    let subject_tokens: Vec<&str> = subject.split_whitespace().collect();

    for sentence in sentences {
        let has_subject = subject_tokens.iter().any(|t| sentence.contains(t));
        let has_action = ACTION_VERBS.iter().any(|v| sentence.contains(v));
        if has_subject && has_action {
            return sentence.clone();
        }
    }

    for sentence in sentences {
        if ACTION_VERBS.iter().any(|v| sentence.contains(v)) {
            return sentence.clone();
        }
    }

    sentences.first().cloned().unwrap_or_default()
}

/// Up to three supporting detail sentences, skipping the lead.
///
/// Prefers sentences with digits, real length or a causal/sequential
/// connector; backfills with remaining sentences in order.
pub fn extract_details(sentences: &[String]) -> Vec<String> {
    let mut details: Vec<String> = Vec::new();

    for sentence in sentences.iter().skip(1) {
        if details.len() >= 3 {
            break;
        }
        let informative = has_digit(sentence)
            || char_len(sentence) > 20
            || CONNECTOR_WORDS.iter().any(|c| sentence.contains(c));
        if informative {
            details.push(sentence.clone());
        }
    }

    for sentence in sentences.iter().skip(1) {
        if details.len() >= 3 {
            break;
        }
        if !details.contains(sentence) {
            details.push(sentence.clone());
        }
    }

    details
}

/// Majority vote between positive and negative word hits; ties are neutral.
/// Each list word counts once on substring presence, not per occurrence.
pub fn analyze_emotion(text: &str) -> Emotion {
    let positive = POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    debug!("Emotion vote: {} positive, {} negative", positive, negative);

    if positive > negative {
        Emotion::Positive
    } else if negative > positive {
        Emotion::Negative
    } else {
        Emotion::Neutral
    }
}

/// Top eight content words by frequency, ties kept in first-seen order
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut freq = ScoreTable::new();

    for word in text.split_whitespace() {
        let clean = strip_word_punct(word);
        if char_len(&clean) >= 3 && !is_stop_word(&clean) {
            freq.bump(clean, 1);
        }
    }

    let mut entries = freq.entries;
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(8).map(|(word, _)| word).collect()
}
