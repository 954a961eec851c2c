use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::content::ContentError;

// ────────────────────────────────────────────────────────────────────────────
// YearMonth
// ────────────────────────────────────────────────────────────────────────────

/// A calendar month. Wire format is `"YYYY-MM"`; display format is `"Jan 2021"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    #[allow(dead_code)]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// Human-readable form used in rendered date ranges.
    pub fn display(&self) -> String {
        self.0.format("%b %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(YearMonth)
            .map_err(|_| ContentError::InvalidYearMonth(s.to_string()))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact info
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    Mobile,
    Linkedin,
    #[serde(rename = "x")]
    Twitter,
}

impl ContactField {
    /// Rendering order inside the contact block.
    pub const ORDERED: [ContactField; 4] = [
        ContactField::Email,
        ContactField::Mobile,
        ContactField::Linkedin,
        ContactField::Twitter,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ContactField::Email => "📧",
            ContactField::Mobile => "📞",
            ContactField::Linkedin => "💼",
            ContactField::Twitter => "💬",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Mobile => "mobile",
            ContactField::Linkedin => "linkedin",
            ContactField::Twitter => "x",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, rename = "x", skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl ContactInfo {
    /// Returns the trimmed value of a field, or `None` when it is absent or blank.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let value = match field {
            ContactField::Email => &self.email,
            ContactField::Mobile => &self.mobile,
            ContactField::Linkedin => &self.linkedin,
            ContactField::Twitter => &self.twitter,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: ContactField, value: Option<String>) {
        let slot = match field {
            ContactField::Email => &mut self.email,
            ContactField::Mobile => &mut self.mobile,
            ContactField::Linkedin => &mut self.linkedin,
            ContactField::Twitter => &mut self.twitter,
        };
        *slot = value;
    }

    /// Present fields in rendering order.
    pub fn present(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ORDERED
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries and sections
// ────────────────────────────────────────────────────────────────────────────

/// Blank strings and `null` read as `None`; any other value must be `YYYY-MM`.
fn deserialize_optional_year_month<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<YearMonth>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// One item of Experience, Education or Projects.
///
/// Every field may be missing while the user is still filling the entry in; validation
/// reports what is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, deserialize_with = "deserialize_optional_year_month")]
    pub start_date: Option<YearMonth>,
    #[serde(default, deserialize_with = "deserialize_optional_year_month")]
    pub end_date: Option<YearMonth>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

impl Entry {
    /// End date as seen by rendering and validation. Always `None` for current entries,
    /// whatever is stored in `end_date`.
    pub fn effective_end(&self) -> Option<YearMonth> {
        if self.current {
            None
        } else {
            self.end_date
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Projects,
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Experience => "Work Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
        }
    }
}

/// Kind of free text sent for improvement. Selects the prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Summary,
    Skills,
    Description,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Summary => "summary",
            FieldKind::Skills => "skills",
            FieldKind::Description => "description",
        }
    }
}

/// Address of an editable free-text field inside a [`ResumeDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum TextField {
    Summary,
    Skills,
    EntryDescription { section: Section, index: usize },
}

impl TextField {
    pub fn kind(&self) -> FieldKind {
        match self {
            TextField::Summary => FieldKind::Summary,
            TextField::Skills => FieldKind::Skills,
            TextField::EntryDescription { .. } => FieldKind::Description,
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::Summary => f.write_str("summary"),
            TextField::Skills => f.write_str("skills"),
            TextField::EntryDescription { section, index } => {
                write!(f, "{}[{}].description", section.key(), index)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ResumeDocument
// ────────────────────────────────────────────────────────────────────────────

/// Structured resume content prior to rendering. `Default` is the all-empty document
/// a user starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default, rename = "contact_info")]
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: Vec<Entry>,
    #[serde(default)]
    pub education: Vec<Entry>,
    #[serde(default)]
    pub projects: Vec<Entry>,
}

impl ResumeDocument {
    pub fn entries(&self, section: Section) -> &[Entry] {
        match section {
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Projects => &self.projects,
        }
    }

    pub fn entries_mut(&mut self, section: Section) -> &mut Vec<Entry> {
        match section {
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Projects => &mut self.projects,
        }
    }
}
