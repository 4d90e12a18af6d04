//! Document extraction and language-model services.

pub mod extract;
pub mod llm;
