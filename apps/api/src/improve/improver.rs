//! Gemini-backed `TextImprover`.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::improve::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM, IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM,
};
use crate::improve::{CoverLetterRequest, ImproveRequest, TextImprover};
use crate::llm_client::prompts::{
    fill_template, NO_FABRICATION_INSTRUCTION, VERBATIM_OUTPUT_INSTRUCTION,
};
use crate::llm_client::{strip_markdown_fences, GeminiClient, LlmError};
use crate::models::user::User;

const NOT_SPECIFIED: &str = "Not specified";

pub struct GeminiImprover(pub GeminiClient);

#[async_trait]
impl TextImprover for GeminiImprover {
    async fn improve(&self, request: &ImproveRequest, user: &User) -> Result<String, AppError> {
        let prompt = build_improve_prompt(request, user);
        let improved = self
            .0
            .generate(&prompt, &system_prompt(IMPROVE_SYSTEM))
            .await
            .map_err(|e| remote_error("improve", e))?;

        info!(
            "Improved {} for user {} ({} -> {} chars)",
            request.field_kind.as_str(),
            user.id,
            request.current_text.len(),
            improved.len()
        );
        Ok(improved)
    }

    async fn write_cover_letter(
        &self,
        request: &CoverLetterRequest,
        user: &User,
    ) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(request, user);
        let letter = self
            .0
            .generate(&prompt, &system_prompt(COVER_LETTER_SYSTEM))
            .await
            .map_err(|e| remote_error("cover letter", e))?;

        info!(
            "Generated cover letter for user {} ({} at {})",
            user.id, request.job_title, request.company_name
        );
        Ok(strip_markdown_fences(&letter).to_string())
    }
}

fn system_prompt(base: &str) -> String {
    format!("{base}\n\n{VERBATIM_OUTPUT_INSTRUCTION}\n\n{NO_FABRICATION_INSTRUCTION}")
}

fn remote_error(operation: &str, err: LlmError) -> AppError {
    warn!("{operation} request to Gemini failed: {err}");
    AppError::Remote(format!("{operation} failed: {err}"))
}

fn profile_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Fills the improvement template in a single pass; braces inside user text stay literal.
pub fn build_improve_prompt(request: &ImproveRequest, user: &User) -> String {
    let industry_clause = profile_value(user.industry.as_deref())
        .map(|industry| format!(" for a {industry} professional"))
        .unwrap_or_default();

    let ctx = &request.target_context;
    let mut context_lines = String::new();
    for (label, value) in [
        ("Role", ctx.title.as_deref()),
        ("Organization", ctx.organization.as_deref()),
        ("Target role", ctx.target_role.as_deref()),
    ] {
        if let Some(value) = profile_value(value) {
            context_lines.push_str(&format!("{label}: {value}\n"));
        }
    }

    fill_template(
        IMPROVE_PROMPT_TEMPLATE,
        &[
            ("field_kind", request.field_kind.as_str()),
            ("industry_clause", industry_clause.as_str()),
            ("context_lines", context_lines.as_str()),
            ("current_text", request.current_text.trim()),
        ],
    )
}

pub fn build_cover_letter_prompt(request: &CoverLetterRequest, user: &User) -> String {
    let experience = user
        .experience_years
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let skills = if user.skills.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        user.skills.join(", ")
    };

    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.trim()),
            ("company_name", request.company_name.trim()),
            (
                "industry",
                profile_value(user.industry.as_deref()).unwrap_or(NOT_SPECIFIED),
            ),
            ("experience_years", experience.as_str()),
            ("skills", skills.as_str()),
            (
                "bio",
                profile_value(user.bio.as_deref()).unwrap_or(NOT_SPECIFIED),
            ),
            ("job_description", request.job_description.trim()),
        ],
    )
}
