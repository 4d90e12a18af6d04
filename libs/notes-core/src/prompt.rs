//! Prompt builder for the summarize-and-flashcards request.
//!
//! The prompt pins the reply to the `Summary:` / `Flashcards:` layout that
//! [`crate::parser::parse`] understands.

/// Tunables for the generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    pub min_flashcards: u32,
    pub max_flashcards: u32,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            min_flashcards: 3,
            max_flashcards: 5,
        }
    }
}

impl PromptOptions {
    fn flashcard_range(&self) -> String {
        let (low, high) = if self.min_flashcards <= self.max_flashcards {
            (self.min_flashcards, self.max_flashcards)
        } else {
            (self.max_flashcards, self.min_flashcards)
        };

        if low == high {
            low.to_string()
        } else {
            format!("{}-{}", low, high)
        }
    }
}

/// Build the prompt for the given notes.
pub fn build_prompt(notes: &str, options: &PromptOptions) -> String {
    format!(
        r#"You are a helpful academic assistant. Given the following academic notes, do two things:
1. Summarize the main points in bullet format.
2. Create {range} flashcards with clear 'Question:' and 'Answer:' labels.
Strictly follow this format:
Summary:
- Bullet 1
- Bullet 2
Flashcards:
- Question: What is...? Answer: It is...
- Question: Why does...? Answer: Because...
Here are the notes:
"""
{notes}
"""
"#,
        range = options.flashcard_range(),
        notes = notes,
    )
}
