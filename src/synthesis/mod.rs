/*!
 * Exercise synthesizers, one per skill topic.
 *
 * Each synthesizer is a pure function from `(base_id, analysis,
 * story_text, rng)` to one well-formed `Exercise`. Sub-strategies are
 * individual functions that return `None` when their material
 * precondition is not met; the synthesizer tries them in a documented
 * priority order, so an article always yields an item even when its
 * text gives the primary strategy nothing to work with.
 *
 * - `reading`: find the altered word (fallback: spot the real sentence)
 * - `comprehension`: why / sequence / conclusion questions
 * - `writing`: fix grammar / complete sentence / arrange words
 * - `vocabulary`: synonym / antonym / sense-in-context
 */

pub mod comprehension;
pub mod reading;
pub mod vocabulary;
pub mod writing;
