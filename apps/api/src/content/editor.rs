#![allow(dead_code)]
//! Editing surface over a [`ResumeDocument`].
//!
//! Owns the document for one editing session and tracks which text fields have an
//! improvement request outstanding. An improvement is a ticketed cycle:
//! `begin_improve` marks the field, the caller awaits the remote result, then
//! `complete_improve` applies it only if the ticket is still the live one for that field.
//! Abandoned or superseded tickets are discarded, so the last request issued wins.

use std::collections::HashMap;
use std::sync::Arc;

use crate::content::models::{ContactField, ContactInfo, Entry, ResumeDocument, Section, TextField};
use crate::content::validation::{validate_resume, ValidationReport};
use crate::content::ContentError;

/// Handle for an outstanding improvement request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveTicket {
    pub field: TextField,
    /// Field text at the moment the request was issued.
    pub current_text: String,
    id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImproveOutcome {
    Applied,
    /// The ticket was abandoned or superseded before the result arrived.
    Discarded,
}

#[derive(Debug, Default)]
pub struct ResumeEditor {
    document: ResumeDocument,
    in_flight: HashMap<TextField, u64>,
    next_ticket: u64,
}

impl ResumeEditor {
    pub fn new(document: ResumeDocument) -> Self {
        Self {
            document,
            ..Default::default()
        }
    }

    /// Immutable copy of the current state, safe to hand to the compiler.
    pub fn snapshot(&self) -> Arc<ResumeDocument> {
        Arc::new(self.document.clone())
    }

    pub fn validate(&self) -> ValidationReport {
        validate_resume(&self.document)
    }

    pub fn into_document(self) -> ResumeDocument {
        self.document
    }

    // ── scalar fields ──────────────────────────────────────────────────────

    pub fn contact(&self) -> &ContactInfo {
        &self.document.contact
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.document.contact = contact;
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: Option<String>) {
        self.document.contact.set(field, value);
    }

    pub fn summary(&self) -> &str {
        &self.document.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.document.summary = summary.into();
    }

    pub fn skills(&self) -> &str {
        &self.document.skills
    }

    pub fn set_skills(&mut self, skills: impl Into<String>) {
        self.document.skills = skills.into();
    }

    pub fn text(&self, field: TextField) -> Result<&str, ContentError> {
        match field {
            TextField::Summary => Ok(&self.document.summary),
            TextField::Skills => Ok(&self.document.skills),
            TextField::EntryDescription { section, index } => {
                Ok(&self.entry(section, index)?.description)
            }
        }
    }

    pub fn set_text(&mut self, field: TextField, text: String) -> Result<(), ContentError> {
        match field {
            TextField::Summary => self.document.summary = text,
            TextField::Skills => self.document.skills = text,
            TextField::EntryDescription { section, index } => {
                self.entry_mut(section, index)?.description = text;
            }
        }
        Ok(())
    }

    // ── entries ────────────────────────────────────────────────────────────

    pub fn entries(&self, section: Section) -> &[Entry] {
        self.document.entries(section)
    }

    pub fn entry(&self, section: Section, index: usize) -> Result<&Entry, ContentError> {
        let entries = self.document.entries(section);
        entries.get(index).ok_or(ContentError::EntryOutOfRange {
            section,
            index,
            len: entries.len(),
        })
    }

    fn entry_mut(&mut self, section: Section, index: usize) -> Result<&mut Entry, ContentError> {
        let entries = self.document.entries_mut(section);
        let len = entries.len();
        entries
            .get_mut(index)
            .ok_or(ContentError::EntryOutOfRange {
                section,
                index,
                len,
            })
    }

    pub fn set_entry(
        &mut self,
        section: Section,
        index: usize,
        entry: Entry,
    ) -> Result<(), ContentError> {
        *self.entry_mut(section, index)? = entry;
        Ok(())
    }

    /// Appends an entry and returns its index.
    pub fn append_entry(&mut self, section: Section, entry: Entry) -> usize {
        let entries = self.document.entries_mut(section);
        entries.push(entry);
        entries.len() - 1
    }

    pub fn remove_entry(&mut self, section: Section, index: usize) -> Result<Entry, ContentError> {
        self.entry(section, index)?;
        self.abandon_section(section);
        Ok(self.document.entries_mut(section).remove(index))
    }

    /// Moves the entry at `from` so that it ends up at position `to`.
    pub fn move_entry(
        &mut self,
        section: Section,
        from: usize,
        to: usize,
    ) -> Result<(), ContentError> {
        self.entry(section, from)?;
        self.entry(section, to)?;
        if from == to {
            return Ok(());
        }
        self.abandon_section(section);
        let entries = self.document.entries_mut(section);
        let entry = entries.remove(from);
        entries.insert(to, entry);
        Ok(())
    }

    // ── improvement cycle ──────────────────────────────────────────────────

    pub fn is_improving(&self, field: TextField) -> bool {
        self.in_flight.contains_key(&field)
    }

    /// Marks `field` as in flight and returns the ticket to complete it with.
    pub fn begin_improve(&mut self, field: TextField) -> Result<ImproveTicket, ContentError> {
        let current_text = self.text(field)?;
        if current_text.trim().is_empty() {
            return Err(ContentError::EmptyField(field));
        }
        if self.is_improving(field) {
            return Err(ContentError::ImproveInFlight(field));
        }
        let current_text = current_text.to_string();

        self.next_ticket += 1;
        self.in_flight.insert(field, self.next_ticket);

        Ok(ImproveTicket {
            field,
            current_text,
            id: self.next_ticket,
        })
    }

    /// Applies `improved` to the ticket's field if the ticket is still live, and clears
    /// the in-flight marker either way.
    pub fn complete_improve(&mut self, ticket: &ImproveTicket, improved: String) -> ImproveOutcome {
        if !self.release(ticket) {
            return ImproveOutcome::Discarded;
        }
        match self.set_text(ticket.field, improved) {
            Ok(()) => ImproveOutcome::Applied,
            Err(_) => ImproveOutcome::Discarded,
        }
    }

    /// Clears the marker after a failed request. The field text is left unchanged.
    pub fn fail_improve(&mut self, ticket: &ImproveTicket) {
        self.release(ticket);
    }

    /// Drops any outstanding request for `field`; its result will be discarded.
    pub fn abandon_improve(&mut self, field: TextField) {
        self.in_flight.remove(&field);
    }

    fn release(&mut self, ticket: &ImproveTicket) -> bool {
        match self.in_flight.get(&ticket.field) {
            Some(&id) if id == ticket.id => {
                self.in_flight.remove(&ticket.field);
                true
            }
            _ => false,
        }
    }

    // Entry indices shift on remove/move, so outstanding description requests in that
    // section no longer point at the entry they were issued for.
    fn abandon_section(&mut self, section: Section) {
        self.in_flight.retain(|field, _| {
            !matches!(field, TextField::EntryDescription { section: s, .. } if *s == section)
        });
    }
}

impl From<ResumeDocument> for ResumeEditor {
    fn from(document: ResumeDocument) -> Self {
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> Entry {
        Entry {
            title: title.to_string(),
            organization: "Acme".to_string(),
            start_date: Some("2020-01".parse().unwrap()),
            end_date: Some("2021-01".parse().unwrap()),
            current: false,
            description: format!("{title} description"),
        }
    }

    #[test]
    fn test_default_editor_is_empty() {
        let editor = ResumeEditor::default();
        assert_eq!(*editor.snapshot(), ResumeDocument::default());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut editor = ResumeEditor::default();
        editor.set_skills("Rust");
        let snapshot = editor.snapshot();
        editor.set_skills("Go");
        assert_eq!(snapshot.skills, "Rust");
        assert_eq!(editor.skills(), "Go");
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut editor = ResumeEditor::default();
        editor.append_entry(Section::Experience, entry("b"));
        editor.append_entry(Section::Experience, entry("a"));
        let titles: Vec<_> = editor
            .entries(Section::Experience)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_move_and_remove_entries() {
        let mut editor = ResumeEditor::default();
        for t in ["one", "two", "three"] {
            editor.append_entry(Section::Projects, entry(t));
        }
        editor.move_entry(Section::Projects, 2, 0).unwrap();
        let removed = editor.remove_entry(Section::Projects, 1).unwrap();
        assert_eq!(removed.title, "one");
        let titles: Vec<_> = editor
            .entries(Section::Projects)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["three", "two"]);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut editor = ResumeEditor::default();
        let err = editor.remove_entry(Section::Education, 0).unwrap_err();
        assert_eq!(
            err,
            ContentError::EntryOutOfRange {
                section: Section::Education,
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn test_begin_improve_rejects_empty_field() {
        let mut editor = ResumeEditor::default();
        let err = editor.begin_improve(TextField::Summary).unwrap_err();
        assert_eq!(err.to_string(), "Please enter summary first");
    }

    #[test]
    fn test_improve_cycle_applies_and_clears_marker() {
        let mut editor = ResumeEditor::default();
        editor.set_summary("did stuff");
        let ticket = editor.begin_improve(TextField::Summary).unwrap();
        assert!(editor.is_improving(TextField::Summary));
        assert_eq!(ticket.current_text, "did stuff");

        let outcome = editor.complete_improve(&ticket, "Delivered stuff".to_string());
        assert_eq!(outcome, ImproveOutcome::Applied);
        assert_eq!(editor.summary(), "Delivered stuff");
        assert!(!editor.is_improving(TextField::Summary));
    }

    #[test]
    fn test_duplicate_request_for_same_field_rejected() {
        let mut editor = ResumeEditor::default();
        editor.set_skills("Rust");
        let _ticket = editor.begin_improve(TextField::Skills).unwrap();
        assert_eq!(
            editor.begin_improve(TextField::Skills).unwrap_err(),
            ContentError::ImproveInFlight(TextField::Skills)
        );
    }

    #[test]
    fn test_abandoned_result_is_discarded() {
        let mut editor = ResumeEditor::default();
        editor.set_skills("Rust");
        let stale = editor.begin_improve(TextField::Skills).unwrap();
        editor.abandon_improve(TextField::Skills);
        let fresh = editor.begin_improve(TextField::Skills).unwrap();

        assert_eq!(
            editor.complete_improve(&stale, "stale".to_string()),
            ImproveOutcome::Discarded
        );
        assert!(editor.is_improving(TextField::Skills));
        assert_eq!(
            editor.complete_improve(&fresh, "fresh".to_string()),
            ImproveOutcome::Applied
        );
        assert_eq!(editor.skills(), "fresh");
    }

    #[test]
    fn test_failed_improve_leaves_text_untouched() {
        let mut editor = ResumeEditor::default();
        editor.set_summary("original");
        let ticket = editor.begin_improve(TextField::Summary).unwrap();
        editor.fail_improve(&ticket);
        assert_eq!(editor.summary(), "original");
        assert!(!editor.is_improving(TextField::Summary));
    }

    #[test]
    fn test_removing_entry_abandons_description_requests() {
        let mut editor = ResumeEditor::default();
        editor.append_entry(Section::Experience, entry("first"));
        editor.append_entry(Section::Experience, entry("second"));
        let field = TextField::EntryDescription {
            section: Section::Experience,
            index: 1,
        };
        let ticket = editor.begin_improve(field).unwrap();
        editor.remove_entry(Section::Experience, 0).unwrap();

        assert_eq!(
            editor.complete_improve(&ticket, "late".to_string()),
            ImproveOutcome::Discarded
        );
        assert_eq!(
            editor.entry(Section::Experience, 0).unwrap().description,
            "second description"
        );
    }
}
