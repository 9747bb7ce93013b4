/*!
 * Well-formedness checks for generated exercises.
 *
 * The generator is contractually required to always emit usable items;
 * these checks let tests (and callers that persist items) assert the
 * contract instead of trusting it:
 * - MCQ: exactly four options, exactly one marked correct, answer key
 *   matching that option's id
 * - drag-order: answer key is a duplicate-free permutation of option ids
 * - prompt and explanation are non-empty
 *
 * Duplicate option text is reported as a warning only: distractors drawn
 * from generic pools may legitimately collide with the correct answer.
 */

use crate::exercise::{AnswerKey, Exercise, ExerciseKind};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Item usable but questionable
    Warning,
    /// Item breaks the generator contract
    Error,
}

/// A single validation finding
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Which check found the issue
    pub check: String,
    /// Severity of the issue
    pub severity: IssueSeverity,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    fn warning(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            severity: IssueSeverity::Warning,
            message,
        }
    }

    fn error(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            severity: IssueSeverity::Error,
            message,
        }
    }
}

/// Validate one exercise against the generator contract
pub fn validate_exercise(exercise: &Exercise) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if exercise.prompt.trim().is_empty() {
        issues.push(ValidationIssue::error(
            "prompt",
            "prompt is empty".to_string(),
        ));
    }
    if exercise.explanation.trim().is_empty() {
        issues.push(ValidationIssue::error(
            "explanation",
            "explanation is empty".to_string(),
        ));
    }

    match exercise.kind {
        ExerciseKind::Mcq => validate_mcq(exercise, &mut issues),
        ExerciseKind::DragOrder => validate_drag_order(exercise, &mut issues),
    }

    let mut seen: Vec<&str> = Vec::new();
    for option in &exercise.options {
        if seen.contains(&option.text.as_str()) {
            issues.push(ValidationIssue::warning(
                "options",
                format!("duplicate option text \"{}\"", option.text),
            ));
        }
        seen.push(&option.text);
    }

    issues
}

/// Does the exercise satisfy every error-level check?
pub fn is_well_formed(exercise: &Exercise) -> bool {
    validate_exercise(exercise)
        .iter()
        .all(|i| i.severity != IssueSeverity::Error)
}

fn validate_mcq(exercise: &Exercise, issues: &mut Vec<ValidationIssue>) {
    if exercise.options.len() != 4 {
        issues.push(ValidationIssue::error(
            "options",
            format!("mcq has {} options, expected 4", exercise.options.len()),
        ));
    }

    let correct: Vec<_> = exercise.options.iter().filter(|o| o.is_correct).collect();
    if correct.len() != 1 {
        issues.push(ValidationIssue::error(
            "options",
            format!("mcq has {} correct options, expected 1", correct.len()),
        ));
    }

    match &exercise.correct_answer {
        AnswerKey::Single(id) => {
            if correct.len() == 1 && correct[0].id != *id {
                issues.push(ValidationIssue::error(
                    "answer",
                    format!(
                        "answer key \"{}\" does not match the correct option \"{}\"",
                        id, correct[0].id
                    ),
                ));
            }
        }
        AnswerKey::Ordered(_) => {
            issues.push(ValidationIssue::error(
                "answer",
                "mcq carries an ordered answer key".to_string(),
            ));
        }
    }
}

fn validate_drag_order(exercise: &Exercise, issues: &mut Vec<ValidationIssue>) {
    match &exercise.correct_answer {
        AnswerKey::Ordered(ids) => {
            if ids.len() != exercise.options.len() {
                issues.push(ValidationIssue::error(
                    "answer",
                    format!(
                        "answer key has {} ids for {} options",
                        ids.len(),
                        exercise.options.len()
                    ),
                ));
            }
            for id in ids {
                if ids.iter().filter(|other| *other == id).count() > 1 {
                    issues.push(ValidationIssue::error(
                        "answer",
                        format!("answer key repeats id \"{}\"", id),
                    ));
                    break;
                }
            }
            for id in ids {
                if !exercise.options.iter().any(|o| &o.id == id) {
                    issues.push(ValidationIssue::error(
                        "answer",
                        format!("answer key id \"{}\" has no matching option", id),
                    ));
                }
            }
        }
        AnswerKey::Single(_) => {
            issues.push(ValidationIssue::error(
                "answer",
                "drag-order carries a single answer key".to_string(),
            ));
        }
    }
}
