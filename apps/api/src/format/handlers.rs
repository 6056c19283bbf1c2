//! Axum route handlers for the Format API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::format::convert::{convert, TextFormat};
use crate::format::reformat::reformat_all;
use crate::models::ResumeDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub target: TextFormat,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReformatAllRequest {
    pub document: ResumeDocument,
    pub target: TextFormat,
}

#[derive(Debug, Serialize)]
pub struct ReformatAllResponse {
    pub document: ResumeDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/format/convert
///
/// Converts one text field to the requested representation. Total over all
/// inputs; an unknown target is rejected at deserialization.
pub async fn handle_convert(
    State(_state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    let text = convert(&request.text, request.target);
    Ok(Json(ConvertResponse { text }))
}

/// POST /api/v1/format/reformat-all
///
/// Converts every experience description in one pass and returns the new
/// document value. Destructive to manual bullet edits — the UI confirms
/// before calling, and keeps the submitted document as the undo state.
pub async fn handle_reformat_all(
    State(_state): State<AppState>,
    Json(request): Json<ReformatAllRequest>,
) -> Result<Json<ReformatAllResponse>, AppError> {
    request
        .document
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let document = reformat_all(&request.document, request.target);
    Ok(Json(ReformatAllResponse { document }))
}
