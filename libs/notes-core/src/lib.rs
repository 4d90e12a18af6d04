//! Core library for the notes summarizer.
//!
//! Provides:
//! - Response parser turning a model reply into a summary and flashcards
//! - Prompt builder for the summarize-and-flashcards request
//! - Shared types (Flashcard, ParsedResponse)

pub mod parser;
pub mod prompt;
pub mod types;

pub use parser::{classify, parse, Line};
pub use prompt::{build_prompt, PromptOptions};
pub use types::{Flashcard, ParsedResponse};
