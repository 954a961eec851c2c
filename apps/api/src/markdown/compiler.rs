//! Resume → markdown compiler.
//!
//! Pure and deterministic: no I/O, no clock, no ambient user state. The display name for
//! the contact heading is an explicit argument.
//!
//! Section order and omission live in `SECTION_TABLE`: a list of (predicate, renderer)
//! rules. Rules whose predicate is false are filtered out; the rest are rendered in table
//! order and joined with a blank line.

use crate::content::models::{ResumeDocument, Section};
use crate::markdown::entries::entries_to_markdown;

const CONTACT_SEPARATOR: &str = " | ";
const SECTION_SEPARATOR: &str = "\n\n";

struct SectionRule {
    name: &'static str,
    include: fn(&ResumeDocument) -> bool,
    render: fn(&ResumeDocument, &str) -> String,
}

const SECTION_TABLE: &[SectionRule] = &[
    SectionRule {
        name: "contact",
        include: has_contact,
        render: render_contact,
    },
    SectionRule {
        name: "summary",
        include: has_summary,
        render: render_summary,
    },
    SectionRule {
        name: "skills",
        include: has_skills,
        render: render_skills,
    },
    SectionRule {
        name: "experience",
        include: has_experience,
        render: render_experience,
    },
    SectionRule {
        name: "education",
        include: has_education,
        render: render_education,
    },
    SectionRule {
        name: "projects",
        include: has_projects,
        render: render_projects,
    },
];

/// Renders `doc` into a single markdown document.
pub fn compile_resume(doc: &ResumeDocument, display_name: &str) -> String {
    SECTION_TABLE
        .iter()
        .filter(|rule| (rule.include)(doc))
        .map(|rule| (rule.render)(doc, display_name))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Names of the sections `compile_resume` would emit, in order.
pub fn rendered_sections(doc: &ResumeDocument) -> Vec<&'static str> {
    SECTION_TABLE
        .iter()
        .filter(|rule| (rule.include)(doc))
        .map(|rule| rule.name)
        .collect()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn has_contact(doc: &ResumeDocument) -> bool {
    !doc.contact.is_empty()
}

fn has_summary(doc: &ResumeDocument) -> bool {
    !is_blank(&doc.summary)
}

fn has_skills(doc: &ResumeDocument) -> bool {
    !is_blank(&doc.skills)
}

fn has_experience(doc: &ResumeDocument) -> bool {
    !doc.experience.is_empty()
}

fn has_education(doc: &ResumeDocument) -> bool {
    !doc.education.is_empty()
}

fn has_projects(doc: &ResumeDocument) -> bool {
    !doc.projects.is_empty()
}

fn render_contact(doc: &ResumeDocument, display_name: &str) -> String {
    let parts: Vec<String> = doc
        .contact
        .present()
        .map(|(field, value)| format!("{} {}", field.icon(), value))
        .collect();
    format!(
        "## <div align=\"center\">{}</div>\n\n<div align=\"center\">\n\n{}\n\n</div>",
        display_name.trim(),
        parts.join(CONTACT_SEPARATOR)
    )
}

fn render_summary(doc: &ResumeDocument, _: &str) -> String {
    format!("## Professional Summary\n\n{}", doc.summary)
}

fn render_skills(doc: &ResumeDocument, _: &str) -> String {
    format!("## Skills\n\n{}", doc.skills)
}

fn render_experience(doc: &ResumeDocument, _: &str) -> String {
    entries_to_markdown(&doc.experience, Section::Experience)
}

fn render_education(doc: &ResumeDocument, _: &str) -> String {
    entries_to_markdown(&doc.education, Section::Education)
}

fn render_projects(doc: &ResumeDocument, _: &str) -> String {
    entries_to_markdown(&doc.projects, Section::Projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{ContactInfo, Entry};

    fn entry(title: &str, current: bool) -> Entry {
        Entry {
            title: title.to_string(),
            organization: "Globex".to_string(),
            start_date: Some("2018-02".parse().unwrap()),
            end_date: Some("2020-08".parse().unwrap()),
            current,
            description: "Ran the thing".to_string(),
        }
    }

    fn full_document() -> ResumeDocument {
        ResumeDocument {
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                mobile: Some("+1 555 010 9999".to_string()),
                linkedin: Some("https://linkedin.com/in/jane".to_string()),
                twitter: Some("https://x.com/jane".to_string()),
            },
            summary: "Backend engineer.".to_string(),
            skills: "Rust, Postgres".to_string(),
            experience: vec![entry("Engineer", true)],
            education: vec![entry("BSc", false)],
            projects: vec![entry("Side project", false)],
        }
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let doc = full_document();
        assert_eq!(compile_resume(&doc, "Jane"), compile_resume(&doc, "Jane"));
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(compile_resume(&ResumeDocument::default(), "Jane"), "");
        assert!(rendered_sections(&ResumeDocument::default()).is_empty());
    }

    #[test]
    fn test_fixed_section_order() {
        let md = compile_resume(&full_document(), "Jane");
        let positions: Vec<usize> = [
            "<div align=\"center\">Jane</div>",
            "## Professional Summary",
            "## Skills",
            "## Work Experience",
            "## Education",
            "## Projects",
        ]
        .iter()
        .map(|h| md.find(h).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_only_skills_present() {
        let doc = ResumeDocument {
            skills: "Go, SQL".to_string(),
            ..Default::default()
        };
        let md = compile_resume(&doc, "Jane");
        assert_eq!(md, "## Skills\n\nGo, SQL");
        assert_eq!(md.matches("## ").count(), 1);
    }

    #[test]
    fn test_whitespace_summary_is_omitted() {
        let doc = ResumeDocument {
            summary: "  \n".to_string(),
            skills: "Go".to_string(),
            ..Default::default()
        };
        assert_eq!(rendered_sections(&doc), vec!["skills"]);
    }

    #[test]
    fn test_contact_join_email_and_social_handle() {
        let doc = ResumeDocument {
            contact: ContactInfo {
                email: Some("a@b.com".to_string()),
                twitter: Some("https://x.com/ab".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let md = compile_resume(&doc, "A B");
        assert_eq!(md.matches(CONTACT_SEPARATOR).count(), 1);
        assert!(md.contains("📧 a@b.com | 💬 https://x.com/ab"));
        assert!(!md.contains("📞"));
    }

    #[test]
    fn test_contact_block_layout() {
        let doc = ResumeDocument {
            contact: ContactInfo {
                mobile: Some("+1 555 010 9999".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            compile_resume(&doc, " Jane Doe "),
            "## <div align=\"center\">Jane Doe</div>\n\n<div align=\"center\">\n\n📞 +1 555 010 9999\n\n</div>"
        );
    }

    #[test]
    fn test_current_entry_renders_present() {
        let md = compile_resume(&full_document(), "Jane");
        assert!(md.contains("### Engineer @ Globex\nFeb 2018 – Present"));
        assert!(md.contains("### BSc @ Globex\nFeb 2018 – Aug 2020"));
    }

    #[test]
    fn test_end_to_end_contact_and_skills() {
        let doc = ResumeDocument {
            contact: ContactInfo {
                email: Some("a@b.com".to_string()),
                ..Default::default()
            },
            skills: "Go, SQL".to_string(),
            ..Default::default()
        };
        let md = compile_resume(&doc, "Ada");

        assert_eq!(rendered_sections(&doc), vec!["contact", "skills"]);
        assert!(md.contains("📧 a@b.com"));
        assert!(!md.contains(CONTACT_SEPARATOR));
        assert!(md.contains("## Skills\n\nGo, SQL"));
        for absent in [
            "Professional Summary",
            "Work Experience",
            "## Education",
            "## Projects",
        ] {
            assert!(!md.contains(absent), "unexpected heading {absent}");
        }
    }

    #[test]
    fn test_compiler_does_not_mutate_input() {
        let doc = full_document();
        let before = doc.clone();
        let _ = compile_resume(&doc, "Jane");
        assert_eq!(doc, before);
    }
}
