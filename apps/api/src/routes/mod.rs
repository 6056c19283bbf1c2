pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::format::handlers as format_handlers;
use crate::layout::handlers as layout_handlers;
use crate::rewrite::handlers as rewrite_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Format API
        .route(
            "/api/v1/format/convert",
            post(format_handlers::handle_convert),
        )
        .route(
            "/api/v1/format/reformat-all",
            post(format_handlers::handle_reformat_all),
        )
        // Layout API
        .route(
            "/api/v1/layout/paginate",
            post(layout_handlers::handle_paginate),
        )
        // Rewrite API
        .route("/api/v1/rewrite", post(rewrite_handlers::handle_rewrite))
        .with_state(state)
}
