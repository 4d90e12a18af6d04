//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from notes-core
pub use notes_core::types::{Flashcard, ParsedResponse};

use crate::services::extract::DocumentKind;

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseRequest {
    pub response: String,
}

/// Result of one summarize-and-flashcards run.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub id: Uuid,
    /// Uploaded file name, when the notes came from a document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub model: String,
    pub raw_response: String,
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    pub generated_at: DateTime<Utc>,
}

impl SummarizeResponse {
    pub fn new(
        source: Option<String>,
        model: &str,
        raw_response: String,
        parsed: ParsedResponse,
    ) -> Self {
        let ParsedResponse {
            summary,
            flashcards,
        } = parsed;

        Self {
            id: Uuid::new_v4(),
            source,
            model: model.to_string(),
            raw_response,
            summary,
            flashcards,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub kind: DocumentKind,
    pub char_count: usize,
    pub text: String,
}
