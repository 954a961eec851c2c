use crate::content::models::{Entry, Section};

/// End token for entries marked as current.
pub const PRESENT: &str = "Present";

const RANGE_SEPARATOR: &str = " – ";

/// `"Jan 2020 – Present"`, `"Jan 2020 – Jun 2022"`, or whichever end is known when the
/// other is missing. Empty when the entry has no dates at all.
pub fn format_date_range(entry: &Entry) -> String {
    let start = entry.start_date.map(|d| d.display());
    let end = if entry.current {
        Some(PRESENT.to_string())
    } else {
        entry.effective_end().map(|d| d.display())
    };
    match (start, end) {
        (Some(start), Some(end)) => format!("{start}{RANGE_SEPARATOR}{end}"),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => String::new(),
    }
}

fn entry_to_markdown(entry: &Entry) -> String {
    let mut md = format!(
        "### {} @ {}",
        entry.title.trim(),
        entry.organization.trim()
    );
    let range = format_date_range(entry);
    if !range.is_empty() {
        md.push('\n');
        md.push_str(&range);
    }
    if !entry.description.trim().is_empty() {
        md.push_str("\n\n");
        md.push_str(&entry.description);
    }
    md
}

/// Renders a whole entry section: heading, then each entry separated by a blank line.
/// Callers skip empty lists; this function always emits the heading.
pub fn entries_to_markdown(entries: &[Entry], section: Section) -> String {
    let body = entries
        .iter()
        .map(entry_to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("## {}\n\n{}", section.heading(), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(end: Option<&str>, current: bool) -> Entry {
        Entry {
            title: "Staff Engineer".to_string(),
            organization: "Initech".to_string(),
            start_date: Some("2019-04".parse().unwrap()),
            end_date: end.map(|e| e.parse().unwrap()),
            current,
            description: "- Shipped TPS reports v2".to_string(),
        }
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(
            format_date_range(&entry(Some("2021-11"), false)),
            "Apr 2019 – Nov 2021"
        );
    }

    #[test]
    fn test_current_overrides_stored_end_date() {
        let range = format_date_range(&entry(Some("2021-11"), true));
        assert_eq!(range, "Apr 2019 – Present");
        assert!(!range.contains("2021"));
    }

    #[test]
    fn test_missing_end_renders_start_only() {
        assert_eq!(format_date_range(&entry(None, false)), "Apr 2019");
    }

    #[test]
    fn test_missing_start_renders_known_end() {
        let mut current = entry(None, true);
        current.start_date = None;
        assert_eq!(format_date_range(&current), "Present");

        let mut past = entry(Some("2021-11"), false);
        past.start_date = None;
        assert_eq!(format_date_range(&past), "Nov 2021");
    }

    #[test]
    fn test_undated_entry_omits_range_line() {
        let mut undated = entry(None, false);
        undated.start_date = None;
        let md = entries_to_markdown(&[undated], Section::Projects);
        assert_eq!(
            md,
            "## Projects\n\n### Staff Engineer @ Initech\n\n- Shipped TPS reports v2"
        );
    }

    #[test]
    fn test_entry_layout() {
        let md = entries_to_markdown(&[entry(None, true)], Section::Experience);
        assert_eq!(
            md,
            "## Work Experience\n\n### Staff Engineer @ Initech\nApr 2019 – Present\n\n- Shipped TPS reports v2"
        );
    }

    #[test]
    fn test_entries_keep_given_order() {
        let mut later = entry(None, true);
        later.title = "Principal Engineer".to_string();
        let md = entries_to_markdown(&[later, entry(Some("2020-01"), false)], Section::Education);
        let principal = md.find("Principal Engineer").unwrap();
        let staff = md.find("Staff Engineer").unwrap();
        assert!(principal < staff);
    }
}
