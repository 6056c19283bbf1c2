//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::pagination::{page_boundaries, PageGeometry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginateRequest {
    /// Total rendered flow height in millimeters.
    pub content_height_mm: f64,
    /// Optional override of the default A4 page height.
    pub page_height_mm: Option<f64>,
    /// Optional override of the default inter-page gap.
    pub gap_mm: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginateResponse {
    pub boundaries_mm: Vec<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/paginate
///
/// Returns the simulated page-boundary offsets for a preview flow of the
/// given height.
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(request): Json<PaginateRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    if !request.content_height_mm.is_finite() || request.content_height_mm < 0.0 {
        return Err(AppError::Validation(
            "contentHeightMm must be a non-negative number".to_string(),
        ));
    }

    let geometry = PageGeometry {
        page_height_mm: request.page_height_mm.unwrap_or(state.geometry.page_height_mm),
        gap_mm: request.gap_mm.unwrap_or(state.geometry.gap_mm),
    };
    if geometry.page_height_mm <= 0.0 || geometry.gap_mm < 0.0 {
        return Err(AppError::Validation(
            "pageHeightMm must be positive and gapMm non-negative".to_string(),
        ));
    }

    let boundaries_mm = page_boundaries(request.content_height_mm, &geometry);
    Ok(Json(PaginateResponse { boundaries_mm }))
}
