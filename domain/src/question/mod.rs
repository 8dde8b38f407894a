//! Search questions
//!
//! Filtering of raw "People Also Ask" candidates down to genuine questions,
//! and the ordered, de-duplicated, capped aggregate built across keywords.

pub mod aggregate;
pub mod filter;

pub use aggregate::{MAX_QUESTIONS, MIN_QUESTION_CHARS, QuestionSet};
pub use filter::{INTERROGATIVE_WORDS, filter_questions, is_question};
