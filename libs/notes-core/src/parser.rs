//! Parser for summarize-and-flashcards model replies.
//!
//! # Format
//! ```text
//! Summary:
//! - Point A
//! - Point B
//! Flashcards:
//! - Question: What is X? Answer: X is Y.
//! - Question: Why Z?
//!   Answer: Because W.
//!   Wrapped answer text is kept.
//! ```
//!
//! Model output is unreliable free text, so parsing never fails: missing
//! sections yield an empty summary or no flashcards.

use crate::types::{Flashcard, ParsedResponse};

const SUMMARY_MARKER: &str = "summary:";
const FLASHCARDS_MARKER: &str = "flashcards:";
const QUESTION_MARKER: &str = "question:";
const ANSWER_MARKER: &str = "answer:";

/// Parse a model reply into a summary and flashcards.
pub fn parse(content: &str) -> ParsedResponse {
    let mut parser = Parser::new();

    for line in content.split(is_line_break) {
        parser.process_line(line);
    }

    parser.finalize()
}

/// Classification of a line inside the flashcards section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `Question:` marker, optionally bulleted. Holds the trimmed remainder.
    Question(&'a str),
    /// `Answer:` marker, optionally bulleted. Holds the trimmed remainder.
    Answer(&'a str),
    /// Anything else. Holds the trimmed line.
    Plain(&'a str),
}

/// Classify a single line by its leading marker.
///
/// A marker may be preceded by one `-` bullet and whitespace; matching is
/// case-insensitive.
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    let body = trimmed.strip_prefix('-').unwrap_or(trimmed).trim_start();

    if let Some(rest) = strip_marker(body, QUESTION_MARKER) {
        Line::Question(rest.trim())
    } else if let Some(rest) = strip_marker(body, ANSWER_MARKER) {
        Line::Answer(rest.trim())
    } else {
        Line::Plain(trimmed)
    }
}

/// Strip a case-insensitive ASCII marker from the start of `text`.
fn strip_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let head = text.get(..marker.len())?;
    if head.eq_ignore_ascii_case(marker) {
        Some(&text[marker.len()..])
    } else {
        None
    }
}

/// Line boundaries, including the Unicode separators some models emit.
///
/// `\r\n` leaves an empty piece behind, which the blank-line skip drops.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `What is X? Answer: X is Y.` into the question and its inline answer.
///
/// Only an `answer:` that starts a new sentence counts; one inside the
/// question's own wording is left alone.
fn split_inline_answer(text: &str) -> (&str, Option<&str>) {
    // ASCII lowercasing keeps byte offsets intact.
    let lower = text.to_ascii_lowercase();

    for (pos, _) in lower.match_indices(ANSWER_MARKER) {
        let before = &text[..pos];
        let after_sentence = before.ends_with(char::is_whitespace)
            && before.trim_end().ends_with(['?', '.', '!']);

        if after_sentence {
            return (
                before.trim(),
                Some(text[pos + ANSWER_MARKER.len()..].trim()),
            );
        }
    }

    (text, None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Summary,
    Flashcards,
}

struct Parser {
    state: State,
    summary: Vec<String>,
    flashcards: Vec<Flashcard>,
    question: String,
    answer: String,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::Start,
            summary: Vec::new(),
            flashcards: Vec::new(),
            question: String::new(),
            answer: String::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match self.state {
            State::Start => {
                if let Some(rest) = strip_marker(line, SUMMARY_MARKER) {
                    self.state = State::Summary;
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        self.summary.push(rest.to_string());
                    }
                }
            }
            State::Summary => {
                if strip_marker(line, FLASHCARDS_MARKER).is_some() {
                    self.state = State::Flashcards;
                } else {
                    self.summary.push(line.to_string());
                }
            }
            State::Flashcards => self.process_flashcard_line(line),
        }
    }

    fn process_flashcard_line(&mut self, line: &str) {
        match classify(line) {
            Line::Question(text) => self.handle_question(text),
            Line::Answer(text) if !self.question.is_empty() => self.append_answer(text),
            _ if !self.answer.is_empty() => self.append_answer(line),
            _ => {}
        }
    }

    fn handle_question(&mut self, text: &str) {
        // A pending question without an answer is overwritten, not flushed.
        self.flush_card();

        let (question, inline_answer) = split_inline_answer(text);
        self.question = question.to_string();

        if let Some(answer) = inline_answer {
            if !self.question.is_empty() {
                self.append_answer(answer);
            }
        }
    }

    fn append_answer(&mut self, text: &str) {
        if !self.answer.is_empty() {
            self.answer.push('\n');
        }
        self.answer.push_str(text);
    }

    fn flush_card(&mut self) {
        if self.question.is_empty() || self.answer.is_empty() {
            return;
        }

        self.flashcards.push(Flashcard {
            question: std::mem::take(&mut self.question),
            answer: std::mem::take(&mut self.answer),
        });
    }

    fn finalize(mut self) -> ParsedResponse {
        self.flush_card();

        ParsedResponse {
            summary: self.summary.join("\n"),
            flashcards: self.flashcards,
        }
    }
}
