use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::content::editor::ResumeEditor;
use crate::content::models::{ResumeDocument, TextField};
use crate::errors::{AppError, AppJson};
use crate::improve::{improve_field, CoverLetterRequest, ImproveRequest, TargetContext};
use crate::markdown::compile_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveFieldRequest {
    pub document: ResumeDocument,
    pub target: TextField,
    #[serde(default)]
    pub target_context: TargetContext,
}

#[derive(Debug, Serialize)]
pub struct ImproveFieldResponse {
    pub document: ResumeDocument,
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub content: String,
}

/// POST /api/v1/resume/improve
///
/// Empty input is rejected before the remote model is called.
pub async fn handle_improve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if request.current_text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Please enter {} first",
            request.field_kind.as_str()
        )));
    }

    let improved_text = state.improver.improve(&request, &user).await?;
    Ok(Json(ImproveResponse { improved_text }))
}

/// POST /api/v1/resume/improve-field
///
/// Improves one field of a submitted document in place and returns the updated
/// document together with its recompiled markdown.
pub async fn handle_improve_field(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<ImproveFieldRequest>,
) -> Result<Json<ImproveFieldResponse>, AppError> {
    let mut editor = ResumeEditor::from(request.document);
    improve_field(
        &mut editor,
        request.target,
        request.target_context,
        state.improver.as_ref(),
        &user,
    )
    .await?;

    let document = editor.into_document();
    let markdown = compile_resume(&document, user.display_name());
    Ok(Json(ImproveFieldResponse { document, markdown }))
}

/// POST /api/v1/cover-letter/generate
///
/// Returns the drafted letter without saving it; the client saves through
/// `PUT /api/v1/cover-letter` once the user accepts it.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    request.validate()?;

    let content = state.improver.write_cover_letter(&request, &user).await?;
    Ok(Json(CoverLetterResponse { content }))
}
