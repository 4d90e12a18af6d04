//! Plain-text extraction from uploaded PDF and DOCX documents.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use thiserror::Error;
use zip::ZipArchive;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type for {0}: please use a .pdf or .docx file")]
    UnsupportedFileType(String),

    #[error("no text could be extracted from the document")]
    NoText,

    #[error("invalid PDF: {0}")]
    Pdf(String),

    #[error("invalid DOCX: {0}")]
    Docx(String),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detect the format from a file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else if ext.eq_ignore_ascii_case("docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Text pulled out of an uploaded document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub kind: DocumentKind,
    pub file_name: String,
    pub text: String,
}

/// Extract text from a document, choosing the format by file name.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    let kind = DocumentKind::from_file_name(file_name)
        .ok_or_else(|| ExtractError::UnsupportedFileType(file_name.to_string()))?;

    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
    };

    tracing::debug!(
        "Extracted {} chars from {} ({})",
        text.len(),
        file_name,
        kind.as_str()
    );

    Ok(ExtractedDocument {
        kind,
        file_name: file_name.to_string(),
        text,
    })
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => return Ok(text),
        Ok(_) => tracing::warn!("pdf-extract returned no text, falling back to lopdf"),
        Err(e) => tracing::warn!("pdf-extract failed: {}. Falling back to lopdf", e),
    }

    let text = extract_pdf_pages(bytes)?;
    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

/// Page-by-page extraction, skipping pages without text.
fn extract_pdf_pages(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let mut pages = Vec::new();
    for page_num in doc.get_pages().into_keys() {
        match doc.extract_text(&[page_num]) {
            Ok(text) if !text.trim().is_empty() => pages.push(text),
            Ok(_) => {}
            Err(e) => tracing::debug!("Skipping PDF page {}: {}", page_num, e),
        }
    }

    Ok(pages.join("\n"))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("word/document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Collect the non-blank `<w:p>` paragraphs of a WordprocessingML body.
///
/// Paragraphs can nest (text boxes carry their own `<w:p>` inside a run), so
/// each open paragraph gets its own buffer. Inner paragraphs are emitted when
/// they close, ahead of their enclosing paragraph.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                let Some(current) = open.last_mut() else {
                    continue;
                };
                match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" | b"w:cr" => current.push('\n'),
                    _ => {}
                }
            }
            Ok(Event::Text(e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("XML parse error: {}", e)))?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        if !paragraph.trim().is_empty() {
                            paragraphs.push(paragraph);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(format!("XML parse error: {}", e))),
            _ => {}
        }
    }

    Ok(paragraphs)
}
