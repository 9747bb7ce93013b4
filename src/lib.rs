/*!
 * # tirgul - Hebrew literacy exercise generator
 *
 * A Rust library that turns one Hebrew news article into four graded
 * practice exercises for young readers: reading, comprehension, writing
 * and vocabulary.
 *
 * ## Features
 *
 * - Heuristic article analysis: subject extraction and classification,
 *   main-action detection, detail selection, emotional tone, keywords
 * - Four exercise synthesizers with explicit fallback chains, so any
 *   non-empty article always yields four usable items
 * - Interest anchoring: an externally supplied topic label overrides
 *   frequency analysis so exercises stay about what the reader cares about
 * - Injectable randomness: seed the source and generation is byte-for-byte
 *   reproducible
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text_utils`: sentence splitting and char-safe string helpers
 * - `lexicon`: static Hebrew fact tables (stop words, categories,
 *   confusion pairs, synonyms/antonyms, grammar records)
 * - `analysis`: subject extraction and content classification
 * - `synthesis`: the four exercise synthesizers:
 *   - `synthesis::reading`: spot the altered word
 *   - `synthesis::comprehension`: why / sequence / conclusion
 *   - `synthesis::writing`: fix grammar / complete / arrange words
 *   - `synthesis::vocabulary`: synonym / antonym / sense-in-context
 * - `generator`: the orchestrator producing the four-item batch
 * - `validation`: well-formedness checks over generated items
 * - `rng`: injectable random source
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod analysis;
pub mod errors;
pub mod exercise;
pub mod generator;
pub mod lexicon;
pub mod rng;
pub mod synthesis;
pub mod text_utils;
pub mod validation;

// Re-export main types for easier usage
pub use analysis::{analyze_article, ArticleAnalysis, Emotion, SubjectType};
pub use errors::{AppError, GenerationError};
pub use exercise::{AnswerKey, Exercise, ExerciseKind, ExerciseOption, TopicId};
pub use generator::{generate_exercises, generate_with_seed, Article};
pub use rng::{RandomSource, SeededSource, SystemSource};
pub use validation::{is_well_formed, validate_exercise};
