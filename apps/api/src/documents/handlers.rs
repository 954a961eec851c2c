//! Save / fetch handlers for resumes and cover letters.
//!
//! The client sends the full rendered markdown on every save; it is stored verbatim.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::errors::{AppError, AppJson};
use crate::models::document::{DocumentKind, StoredDocument};
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveDocumentRequest {
    pub content: String,
}

async fn save(
    state: &AppState,
    user: &User,
    kind: DocumentKind,
    request: SaveDocumentRequest,
) -> Result<StoredDocument, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    state
        .documents
        .upsert(user.id, kind, &request.content)
        .await
}

/// PUT /api/v1/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<SaveDocumentRequest>,
) -> Result<Json<StoredDocument>, AppError> {
    Ok(Json(
        save(&state, &user, DocumentKind::Resume, request).await?,
    ))
}

/// GET /api/v1/resume
///
/// `null` when the user has never saved a resume.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Option<StoredDocument>>, AppError> {
    Ok(Json(
        state.documents.get(user.id, DocumentKind::Resume).await?,
    ))
}

/// PUT /api/v1/cover-letter
pub async fn handle_save_cover_letter(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<SaveDocumentRequest>,
) -> Result<Json<StoredDocument>, AppError> {
    Ok(Json(
        save(&state, &user, DocumentKind::CoverLetter, request).await?,
    ))
}

/// GET /api/v1/cover-letter
pub async fn handle_get_cover_letter(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Option<StoredDocument>>, AppError> {
    Ok(Json(
        state
            .documents
            .get(user.id, DocumentKind::CoverLetter)
            .await?,
    ))
}
