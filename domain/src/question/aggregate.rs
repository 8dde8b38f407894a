//! Question aggregate built across keywords

use crate::core::string::trimmed_len;
use std::collections::HashSet;

/// Upper bound on aggregated questions
pub const MAX_QUESTIONS: usize = 50;

/// Entries shorter than this (after trimming) are dropped
pub const MIN_QUESTION_CHARS: usize = 11;

/// Insertion-ordered, exact-string de-duplicated question set
#[derive(Debug, Clone, Default)]
pub struct QuestionSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question; returns false if the exact string was already present
    pub fn insert(&mut self, question: impl Into<String>) -> bool {
        let question = question.into();
        if self.seen.contains(&question) {
            return false;
        }
        self.seen.insert(question.clone());
        self.ordered.push(question);
        true
    }

    pub fn extend<I, S>(&mut self, questions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for q in questions {
            self.insert(q);
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Drop short entries and cap the result, keeping first-seen order
    pub fn finish(self, min_chars: usize, max: usize) -> Vec<String> {
        self.ordered
            .into_iter()
            .filter(|q| trimmed_len(q) >= min_chars)
            .take(max)
            .collect()
    }
}
