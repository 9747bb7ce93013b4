/*!
 * Static Hebrew linguistic fact tables.
 *
 * All the fixed word lists and lookup tables the analyzer and
 * synthesizers consume, isolated from the synthesis logic so each
 * table's coverage can be tested on its own:
 *
 * - `stop_words`: function words excluded from frequency analysis
 * - `categories`: subject-type keyword lists, action verbs, emotion words
 * - `confusion`: look-alike word pairs and generic distractor pools
 * - `vocabulary`: synonym, antonym and multi-sense entries
 * - `grammar`: agreement-error records for the fix-sentence exercise
 */

pub mod categories;
pub mod confusion;
pub mod grammar;
pub mod stop_words;
pub mod vocabulary;

// Re-export main lookups
pub use confusion::{confusions_for, DISTRACTOR_POOL, GENERIC_CONFUSIONS};
pub use stop_words::is_stop_word;
