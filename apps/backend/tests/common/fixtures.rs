//! Test fixtures and factory functions for creating test data.

use std::io::{Cursor, Write};

use axum_test::multipart::{MultipartForm, Part};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A well-formed model reply with two inline flashcards.
pub fn sample_reply() -> &'static str {
    "Summary:\n\
     - Cells are the basic unit of life\n\
     - Mitochondria produce ATP\n\
     Flashcards:\n\
     - Question: What produces ATP? Answer: Mitochondria.\n\
     - Question: What is the basic unit of life? Answer: The cell."
}

/// Build a minimal DOCX archive whose body holds the given paragraphs.
pub fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Multipart form with a single `file` field.
pub fn upload_form(file_name: &str, bytes: Vec<u8>, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name(file_name).mime_type(mime),
    )
}
