/*!
 * Projection of a summary into a displayable document.
 *
 * The projection is pure: the same summary and date always produce the
 * same document. Both the terminal view and the PDF export consume the
 * `Document` produced here.
 */

use chrono::NaiveDate;

use crate::summary::SummaryResult;

/// Category line shown under the title
const META_CATEGORY: &str = "Detailed AI summary";

/// Footer line closing the document
const FOOTER_LINE: &str = "Generated automatically by tubedoc";

/// One section as it appears in the document
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    /// 1-based position in the summary
    pub number: usize,

    /// Section heading
    pub headline: String,

    /// Body paragraphs, one per preserved line break
    pub paragraphs: Vec<String>,
}

/// A structured, labeled document ready for display or export
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Title block
    pub title: String,

    /// Generation-date/category line
    pub meta_line: String,

    /// Closing footer line
    pub footer: String,

    /// Sections in original order
    pub sections: Vec<RenderedSection>,
}

/// Project a summary into a document.
///
/// Sections keep their original order and are numbered from 1. A summary
/// with no sections projects to a title-only document. The generation date
/// is an input so the projection stays deterministic.
pub fn project(result: &SummaryResult, generated_on: NaiveDate) -> Document {
    let sections = result
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| RenderedSection {
            number: index + 1,
            headline: section.headline.clone(),
            paragraphs: split_paragraphs(&section.content),
        })
        .collect();

    Document {
        title: result.title.clone(),
        meta_line: format!("{} - {}", META_CATEGORY, generated_on.format("%Y-%m-%d")),
        footer: FOOTER_LINE.to_string(),
        sections,
    }
}

/// Split section content on embedded line breaks, preserving each break as
/// a paragraph boundary. Blank lines do not produce empty paragraphs.
fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .map(|paragraph| paragraph.trim_end().to_string())
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}

/// Render a document as plain text for the terminal.
pub fn render_text(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&document.title);
    out.push('\n');
    out.push_str(&"=".repeat(document.title.chars().count().max(4)));
    out.push('\n');
    out.push_str(&document.meta_line);
    out.push('\n');

    for section in &document.sections {
        out.push('\n');
        out.push_str(&format!("{}. {}\n", section.number, section.headline));
        for paragraph in &section.paragraphs {
            out.push('\n');
            out.push_str(paragraph);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&document.footer);
    out.push('\n');

    out
}
