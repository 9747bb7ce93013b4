/*!
 * Tests for item well-formedness checks against generated output
 */

use crate::common::{contest_article, rich_article};
use tirgul::validation::{is_well_formed, validate_exercise, IssueSeverity};
use tirgul::{generate_with_seed, AnswerKey, ExerciseKind};

#[test]
fn test_generatedItems_shouldAllBeWellFormed() {
    for seed in 0..32 {
        let items = generate_with_seed(&rich_article(), seed).unwrap();
        for item in &items {
            assert!(
                is_well_formed(item),
                "seed {} produced malformed item {:?}: {:?}",
                seed,
                item.id,
                validate_exercise(item)
            );
        }
    }
}

#[test]
fn test_generatedMcqItems_shouldMatchAnswerKeyToCorrectOption() {
    let items = generate_with_seed(&contest_article(), 8).unwrap();
    for item in items.iter().filter(|i| i.kind == ExerciseKind::Mcq) {
        let correct = item.correct_option().expect("one correct option");
        match &item.correct_answer {
            AnswerKey::Single(id) => assert_eq!(id, &correct.id),
            AnswerKey::Ordered(_) => panic!("mcq with ordered key"),
        }
    }
}

#[test]
fn test_validateExercise_onGeneratedItems_shouldReportNoErrors() {
    let items = generate_with_seed(&contest_article(), 21).unwrap();
    for item in &items {
        let errors: Vec<_> = validate_exercise(item)
            .into_iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .collect();
        assert!(errors.is_empty(), "{:?}", errors);
    }
}
