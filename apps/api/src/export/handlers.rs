use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::{AppError, AppJson};
use crate::export::markdown_to_html;
use crate::models::document::DocumentKind;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub kind: DocumentKind,
    /// Markdown currently on screen. When absent the saved document is exported.
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/v1/export
///
/// Responds with the PDF as an attachment named `resume.pdf` or `cover-letter.pdf`.
pub async fn handle_export(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(request): AppJson<ExportRequest>,
) -> Result<Response, AppError> {
    let markdown = match request.content {
        Some(content) => content,
        None => state
            .documents
            .get(user.id, request.kind)
            .await?
            .map(|doc| doc.content)
            .unwrap_or_default(),
    };

    if markdown.trim().is_empty() {
        return Err(AppError::RenderTargetMissing(format!(
            "No {} content to export",
            request.kind.as_str().replace('_', " ")
        )));
    }

    let html = markdown_to_html(&markdown);
    let pdf = state.renderer.render(&html, &state.export_options).await?;

    let filename = request.kind.export_filename();
    info!("Exported {filename} for user {} ({} bytes)", user.id, pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
