pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers as content;
use crate::documents::handlers as documents;
use crate::export::handlers as export;
use crate::improve::handlers as improve;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume
        .route("/api/v1/resume/preview", post(content::handle_preview))
        .route(
            "/api/v1/resume",
            get(documents::handle_get_resume).put(documents::handle_save_resume),
        )
        .route("/api/v1/resume/improve", post(improve::handle_improve))
        .route(
            "/api/v1/resume/improve-field",
            post(improve::handle_improve_field),
        )
        // Cover letter
        .route(
            "/api/v1/cover-letter",
            get(documents::handle_get_cover_letter).put(documents::handle_save_cover_letter),
        )
        .route(
            "/api/v1/cover-letter/generate",
            post(improve::handle_generate_cover_letter),
        )
        // Export
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
