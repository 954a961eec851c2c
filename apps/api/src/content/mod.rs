// Content Model: structured resume data, the editing surface over it, and field validation.
// No I/O happens in this module.

pub mod editor;
pub mod handlers;
pub mod models;
pub mod validation;

use thiserror::Error;

use crate::content::models::{Section, TextField};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("'{0}' is not a valid year-month (expected YYYY-MM)")]
    InvalidYearMonth(String),

    #[error("{section:?} has {len} entries; index {index} is out of range")]
    EntryOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("Please enter {0} first")]
    EmptyField(TextField),

    #[error("An improvement for {0} is already in progress")]
    ImproveInFlight(TextField),
}
