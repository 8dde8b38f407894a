//! Keywords
//!
//! - [`set::KeywordSet`]: the primary keyword plus every candidate, in relevance order
//! - [`index::KeywordIndex`]: category → page → keywords lookup table
//! - [`matching::MatchOutcome`]: decoded answer of the keyword-match endpoint

pub mod index;
pub mod matching;
pub mod set;

pub use index::KeywordIndex;
pub use matching::{MatchOutcome, NOT_FOUND_MESSAGE};
pub use set::{KeywordSet, normalize_keywords};
