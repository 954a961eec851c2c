//! PDF export: markdown is converted to HTML here and handed to an external renderer.

pub mod handlers;
pub mod renderer;

use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::errors::AppError;

pub use renderer::HttpPdfRenderer;

/// Element id of the container the renderer prints.
pub const EXPORT_CONTAINER_ID: &str = "resume-pdf";

const MM_PER_INCH: f64 = 25.4;

/// The only raw HTML kept in exported documents: the centered contact block. Every other
/// tag is escaped so the renderer never loads a resource named by user content.
const ALLOWED_HTML: &[&str] = &["<div align=\"center\">", "</div>"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A4,
}

impl PaperSize {
    /// (width, height) in inches, portrait.
    pub fn inches(&self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (210.0 / MM_PER_INCH, 297.0 / MM_PER_INCH),
        }
    }
}

/// Page setup and time limit for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub paper: PaperSize,
    pub landscape: bool,
    pub margin_mm: f64,
    pub timeout: Duration,
}

impl ExportOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            paper: PaperSize::A4,
            landscape: false,
            margin_mm: 15.0,
            timeout,
        }
    }

    /// Page (width, height) in inches after applying orientation.
    pub fn page_inches(&self) -> (f64, f64) {
        let (w, h) = self.paper.inches();
        if self.landscape {
            (h, w)
        } else {
            (w, h)
        }
    }

    pub fn margin_inches(&self) -> f64 {
        self.margin_mm / MM_PER_INCH
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new(Duration::from_secs(15))
    }
}

/// PDF-rendering collaborator. Takes a complete HTML page and returns PDF bytes.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, html: &str, options: &ExportOptions) -> Result<Vec<u8>, AppError>;
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

fn restrict_html(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) if !ALLOWED_HTML.contains(&raw.trim()) => {
            Some(Event::Text(raw))
        }
        // Alt text is kept as plain text.
        Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => None,
        other => Some(other),
    }
}

/// Converts document markdown into a standalone HTML page. Raw HTML other than the
/// centered contact block is escaped and images are reduced to their alt text.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut body = String::new();
    let events = Parser::new_ext(markdown, parser_options()).filter_map(restrict_html);
    html::push_html(&mut body, events);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n\
         <div id=\"{EXPORT_CONTAINER_ID}\" style=\"background: white; color: black; padding: 20px;\">\n\
         {body}</div>\n</body>\n</html>\n"
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_a4_portrait_15mm() {
        let opts = ExportOptions::default();
        assert_eq!(opts.paper, PaperSize::A4);
        assert!(!opts.landscape);
        assert_eq!(opts.timeout, Duration::from_secs(15));

        let (w, h) = opts.page_inches();
        assert!((w - 8.27).abs() < 0.01);
        assert!((h - 11.69).abs() < 0.01);
        assert!((opts.margin_inches() - 0.59).abs() < 0.01);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let opts = ExportOptions {
            landscape: true,
            ..ExportOptions::default()
        };
        let (w, h) = opts.page_inches();
        assert!(w > h);
    }

    #[test]
    fn test_markdown_to_html_wraps_container() {
        let html = markdown_to_html("## Skills\n\nGo, SQL");
        assert!(html.contains("<div id=\"resume-pdf\""));
        assert!(html.contains("background: white; color: black"));
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(html.contains("<p>Go, SQL</p>"));
    }

    #[test]
    fn test_other_raw_html_is_escaped() {
        let html = markdown_to_html(
            "<iframe src=\"http://169.254.169.254/latest\"></iframe>\n\nHi <img src=\"http://10.0.0.1/x\"> there",
        );
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;iframe"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_markdown_images_render_as_alt_text() {
        let html = markdown_to_html("![company logo](http://internal.local/logo.png)");
        assert!(!html.contains("<img"));
        assert!(!html.contains("internal.local"));
        assert!(html.contains("company logo"));
    }

    #[test]
    fn test_contact_heading_html_survives() {
        let html = markdown_to_html("## <div align=\"center\">Ada Lovelace</div>");
        assert!(html.contains("<h2><div align=\"center\">Ada Lovelace</div></h2>"));
    }

    #[test]
    fn test_inline_html_passes_through() {
        let html = markdown_to_html("<div align=\"center\">\n\nada@example.com\n\n</div>");
        assert!(html.contains("<div align=\"center\">"));
        assert!(html.contains("<p>ada@example.com</p>"));
    }
}
