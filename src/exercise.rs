/*!
 * Data model for generated exercises.
 *
 * One `Exercise` is a single graded practice item: a prompt, its answer
 * options, the answer key and a templated explanation. Serialization
 * uses the camelCase field names the practice-session UI consumes, so
 * serialized items are drop-in compatible with the existing session
 * store.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Skill topic an exercise belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicId {
    Reading,
    Comprehension,
    Writing,
    Vocabulary,
}

impl TopicId {
    /// Lowercase identifier used in item ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Comprehension => "comprehension",
            Self::Writing => "writing",
            Self::Vocabulary => "vocabulary",
        }
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TopicId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reading" => Ok(Self::Reading),
            "comprehension" => Ok(Self::Comprehension),
            "writing" => Ok(Self::Writing),
            "vocabulary" => Ok(Self::Vocabulary),
            _ => Err(anyhow!("Invalid topic id: {}", s)),
        }
    }
}

/// Mechanical form of the exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Multiple choice, exactly one correct option
    #[serde(rename = "mcq")]
    Mcq,
    /// Drag options into the canonical order
    #[serde(rename = "drag-order")]
    DragOrder,
}

/// Answer key: one option id for MCQ, an ordered id sequence for drag-order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    Ordered(Vec<String>),
}

/// One selectable option within an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseOption {
    /// Stable option identifier
    pub id: String,

    /// Display text
    pub text: String,

    /// Whether this option is the correct one (MCQ only)
    pub is_correct: bool,
}

impl ExerciseOption {
    /// Create an option
    pub fn new(id: &str, text: impl Into<String>, is_correct: bool) -> Self {
        ExerciseOption {
            id: id.to_string(),
            text: text.into(),
            is_correct,
        }
    }
}

/// One graded practice item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Item identifier, `{lesson_id}-{topic}`
    pub id: String,

    /// Identifier of the lesson (article) this item belongs to
    pub lesson_id: String,

    /// Skill topic
    pub topic_id: TopicId,

    /// Presentation flavor consumed by the UI (e.g. `mistake-hunter`)
    pub game_type: String,

    /// Mechanical form
    #[serde(rename = "type")]
    pub kind: ExerciseKind,

    /// Question text shown to the learner
    pub prompt: String,

    /// Answer options, already shuffled
    pub options: Vec<ExerciseOption>,

    /// Answer key
    pub correct_answer: AnswerKey,

    /// Difficulty from 1 (easy) to 3 (hard)
    pub difficulty: u8,

    /// Free-form tags for progress bookkeeping
    pub tags: Vec<String>,

    /// Experience points awarded for a correct answer
    pub xp_value: u32,

    /// Post-answer explanation referencing the material used
    pub explanation: String,

    /// Verbatim article text, carried through for display and read-aloud
    pub story_text: String,

    /// Canonical word order for drag-order items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_items: Option<Vec<String>>,
}

impl Exercise {
    /// The option marked correct, if any (MCQ items)
    pub fn correct_option(&self) -> Option<&ExerciseOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}
