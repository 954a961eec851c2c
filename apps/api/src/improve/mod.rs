//! AI-assisted writing: improving a single resume field and drafting cover letters.
//!
//! The remote model sits behind `TextImprover` so handlers and the editing cycle can be
//! exercised without network access. `AppState` carries an `Arc<dyn TextImprover>`.

pub mod handlers;
pub mod improver;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::editor::{ImproveOutcome, ResumeEditor};
use crate::content::models::{FieldKind, TextField};
use crate::content::validation::FieldError;
use crate::errors::AppError;
use crate::models::user::User;

pub use improver::GeminiImprover;

/// Extra context that sharpens an improvement prompt. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetContext {
    /// Organization of the entry being described.
    #[serde(default)]
    pub organization: Option<String>,
    /// Title of the entry being described.
    #[serde(default)]
    pub title: Option<String>,
    /// Role the user is applying for.
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImproveRequest {
    pub current_text: String,
    pub field_kind: FieldKind,
    #[serde(default)]
    pub target_context: TargetContext,
}

/// Inputs for cover letter generation. All three are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}

impl CoverLetterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let errors: Vec<FieldError> = [
            ("job_title", &self.job_title, "Job title is required"),
            ("company_name", &self.company_name, "Company name is required"),
            (
                "job_description",
                &self.job_description,
                "Job description is required",
            ),
        ]
        .into_iter()
        .filter(|(_, value, _)| value.trim().is_empty())
        .map(|(field, _, message)| FieldError::new(field, message))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }
}

/// Text-improvement collaborator. Failures are returned as `AppError::Remote` and never
/// retried.
#[async_trait]
pub trait TextImprover: Send + Sync {
    async fn improve(&self, request: &ImproveRequest, user: &User) -> Result<String, AppError>;

    async fn write_cover_letter(
        &self,
        request: &CoverLetterRequest,
        user: &User,
    ) -> Result<String, AppError>;
}

/// Runs one improvement cycle against an editing session: mark the field in flight,
/// await the remote call, apply the result to the field, clear the marker.
///
/// For entry descriptions the entry's title and organization are filled into the
/// context when the caller did not supply them.
pub async fn improve_field(
    editor: &mut ResumeEditor,
    field: TextField,
    mut context: TargetContext,
    improver: &dyn TextImprover,
    user: &User,
) -> Result<ImproveOutcome, AppError> {
    if let TextField::EntryDescription { section, index } = field {
        let entry = editor.entry(section, index)?;
        context
            .organization
            .get_or_insert_with(|| entry.organization.clone());
        context.title.get_or_insert_with(|| entry.title.clone());
    }

    let ticket = editor.begin_improve(field)?;
    let request = ImproveRequest {
        current_text: ticket.current_text.clone(),
        field_kind: field.kind(),
        target_context: context,
    };

    match improver.improve(&request, user).await {
        Ok(improved) => Ok(editor.complete_improve(&ticket, improved)),
        Err(e) => {
            editor.fail_improve(&ticket);
            Err(e)
        }
    }
}
