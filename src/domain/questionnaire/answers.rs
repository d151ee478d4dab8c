//! The completed answer set handed to the analysis pipeline.

use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;

use super::questions::QUESTION_COUNT;

/// Ordered mapping from question index (0-based) to a non-empty answer.
///
/// Built by the questionnaire collector one answer at a time; immutable once
/// handed to the pipeline (callers pass a shared reference). Indices are a
/// subset of `0..QUESTION_COUNT` and values are trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<usize, String>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for a question, replacing any previous one.
    ///
    /// The text is trimmed before storage. Rejects out-of-range indices and
    /// answers that are empty after trimming.
    pub fn record(&mut self, index: usize, text: impl AsRef<str>) -> Result<(), DomainError> {
        if index >= QUESTION_COUNT {
            return Err(DomainError::out_of_range(
                "question_index",
                0,
                (QUESTION_COUNT - 1) as i64,
                index as i64,
            ));
        }
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::empty_field("answer"));
        }
        self.answers.insert(index, trimmed.to_string());
        Ok(())
    }

    /// Returns the answer for a question, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no questions have been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Returns true if every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    /// Iterates answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers.iter().map(|(i, a)| (*i, a.as_str()))
    }
}
