//! Core types for parsed model responses.

use serde::{Deserialize, Serialize};

/// A question/answer pair extracted from a model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Summary and flashcards recovered from a model reply.
///
/// The summary is the bullet lines joined with `\n`; it is empty when the
/// reply has no `Summary:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
}

impl ParsedResponse {
    /// True when neither a summary nor any flashcard was found.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.flashcards.is_empty()
    }
}
