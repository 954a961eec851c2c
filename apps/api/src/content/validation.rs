//! Field-level shape checks applied before a document reaches the compiler.
//!
//! Every rule runs; the report carries one `FieldError` per offending field so a
//! client can flag each input inline.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::content::models::{ContactField, ContactInfo, Entry, ResumeDocument, Section};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

static PHONE_EXTENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(ext\.?|x|#)\s*\d{1,6}$").expect("static phone extension regex")
});

const PHONE_PUNCTUATION: &[char] = &['+', '-', '(', ')', '.', ' '];
const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path, e.g. `contact_info.email` or `experience[1].end_date`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    #[allow(dead_code)]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }
}

/// Validates the whole document.
pub fn validate_resume(doc: &ResumeDocument) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_contact(&doc.contact, &mut report);

    for section in [Section::Experience, Section::Education, Section::Projects] {
        for (index, entry) in doc.entries(section).iter().enumerate() {
            let path = format!("{}[{}]", section.key(), index);
            validate_entry(&path, entry, &mut report);
        }
    }

    report
}

fn validate_contact(contact: &ContactInfo, report: &mut ValidationReport) {
    for (field, value) in contact.present() {
        let path = format!("contact_info.{}", field.key());
        match field {
            ContactField::Email if !is_valid_email(value) => {
                report.push(path, "Invalid email address");
            }
            ContactField::Mobile if !is_valid_phone(value) => {
                report.push(path, "Invalid phone number");
            }
            ContactField::Linkedin | ContactField::Twitter if !is_valid_url(value) => {
                report.push(path, "Invalid URL");
            }
            _ => {}
        }
    }
}

fn validate_entry(path: &str, entry: &Entry, report: &mut ValidationReport) {
    if entry.title.trim().is_empty() {
        report.push(format!("{path}.title"), "Title is required");
    }
    if entry.organization.trim().is_empty() {
        report.push(format!("{path}.organization"), "Organization is required");
    }
    if entry.description.trim().is_empty() {
        report.push(format!("{path}.description"), "Description is required");
    }

    if entry.start_date.is_none() {
        report.push(format!("{path}.start_date"), "Start date is required");
    }

    match entry.effective_end() {
        None if !entry.current => report.push(
            format!("{path}.end_date"),
            "End date is required unless this is your current position",
        ),
        Some(end) if entry.start_date.is_some_and(|start| end < start) => report.push(
            format!("{path}.end_date"),
            "End date cannot be before start date",
        ),
        _ => {}
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

/// Digits with common punctuation, optionally followed by an extension
/// (`ext. 23`, `x12`, `#4`).
pub fn is_valid_phone(value: &str) -> bool {
    let number = PHONE_EXTENSION_RE.replace(value.trim(), "");
    let allowed = number
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c));
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && digits >= MIN_PHONE_DIGITS
}
