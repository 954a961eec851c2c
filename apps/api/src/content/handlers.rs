use axum::Json;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::content::models::ResumeDocument;
use crate::content::validation::validate_resume;
use crate::errors::{AppError, AppJson};
use crate::markdown::compiler::{compile_resume, rendered_sections};

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub markdown: String,
    pub sections: Vec<&'static str>,
}

/// POST /api/v1/resume/preview
///
/// Validates the submitted document and compiles it for the live preview. Invalid
/// documents are rejected with every offending field listed.
pub async fn handle_preview(
    CurrentUser(user): CurrentUser,
    AppJson(document): AppJson<ResumeDocument>,
) -> Result<Json<PreviewResponse>, AppError> {
    validate_resume(&document)
        .into_result()
        .map_err(AppError::InvalidFields)?;

    Ok(Json(PreviewResponse {
        markdown: compile_resume(&document, user.display_name()),
        sections: rendered_sections(&document),
    }))
}
