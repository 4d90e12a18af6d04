//! Notes endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use notes_core::build_prompt;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::extract::{extract_text, ExtractError, ExtractedDocument};
use crate::AppState;

/// POST /api/notes/upload
/// Extracts text from an uploaded PDF/DOCX and summarizes it
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SummarizeResponse>> {
    let document = read_document(multipart).await?;
    if document.text.trim().is_empty() {
        return Err(ExtractError::NoText.into());
    }

    let response = summarize_text(&state, &document.text, Some(document.file_name)).await?;
    Ok(Json(response))
}

/// POST /api/notes/summarize
pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    if payload.notes.trim().is_empty() {
        return Err(ApiError::BadRequest("notes must not be empty".to_string()));
    }

    let response = summarize_text(&state, &payload.notes, None).await?;
    Ok(Json(response))
}

/// POST /api/notes/parse
/// Parses an existing model reply without calling the model
pub async fn parse(Json(payload): Json<ParseRequest>) -> Json<ParsedResponse> {
    Json(notes_core::parse(&payload.response))
}

/// POST /api/notes/extract
pub async fn extract(multipart: Multipart) -> Result<Json<ExtractResponse>> {
    let document = read_document(multipart).await?;

    Ok(Json(ExtractResponse {
        char_count: document.text.chars().count(),
        file_name: document.file_name,
        kind: document.kind,
        text: document.text,
    }))
}

/// Read the `file` field of a multipart upload and extract its text.
async fn read_document(mut multipart: Multipart) -> Result<ExtractedDocument> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("file field has no file name".to_string()))?;
        let bytes = field.bytes().await?;

        tracing::info!("Received upload {} ({} bytes)", file_name, bytes.len());

        let document = tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
            .await
            .map_err(|e| ApiError::Internal(format!("extraction task failed: {}", e)))??;
        return Ok(document);
    }

    Err(ApiError::BadRequest("missing 'file' field".to_string()))
}

async fn summarize_text(
    state: &AppState,
    notes: &str,
    source: Option<String>,
) -> Result<SummarizeResponse> {
    let prompt = build_prompt(notes, &state.config.prompt);
    let raw_response = state.llm.generate(&prompt).await?;

    let parsed = notes_core::parse(&raw_response);
    if parsed.is_empty() {
        tracing::warn!("Model reply had neither a summary nor flashcards");
    } else if parsed.flashcards.is_empty() {
        tracing::warn!("No flashcards found in model reply");
    }

    let response = SummarizeResponse::new(source, state.llm.name(), raw_response, parsed);
    tracing::info!(
        "Generated {} flashcards for {}",
        response.flashcards.len(),
        response.source.as_deref().unwrap_or("pasted notes")
    );

    Ok(response)
}
