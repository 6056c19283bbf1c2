//! Axum route handlers for the Rewrite API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::rewrite::{rewrite_text, RewriteContext, RewriteGoal};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub goal: RewriteGoal,
    pub context: RewriteContext,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub text: String,
    pub rewritten: bool,
    pub notice: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/rewrite
///
/// Rewrites one text field via the AI collaborator. An upstream failure is
/// not an HTTP error: the original text comes back with `rewritten: false`
/// and a notice for the UI to surface.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let outcome = rewrite_text(
        state.rewriter.as_ref(),
        &request.text,
        request.goal,
        request.context,
    )
    .await;

    Ok(Json(RewriteResponse {
        text: outcome.text,
        rewritten: outcome.rewritten,
        notice: outcome.notice,
    }))
}
