/*!
 * Pure pagination of a document against a page geometry.
 *
 * Produces positioned text lines per page. The PDF engine only draws what
 * is computed here, which keeps the wrapping and page-break rules testable
 * without any rendering library.
 */

use crate::document::Document;
use crate::export::PdfOptions;

/// One typographic point in millimeters
pub const PT_TO_MM: f32 = 0.352_778;

/// Average Helvetica glyph advance as a fraction of the font size.
/// Good enough for wrapping; exact metrics are the engine's business.
const AVG_CHAR_WIDTH: f32 = 0.48;

/// Vertical gap before a section heading, in millimeters
const SECTION_GAP_MM: f32 = 6.0;

/// Vertical gap between paragraphs, in millimeters
const PARAGRAPH_GAP_MM: f32 = 2.0;

/// Vertical gap before the footer, in millimeters
const FOOTER_GAP_MM: f32 = 8.0;

/// Role of a text line, used by the engine to pick a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Meta,
    Heading,
    Body,
    Footer,
}

/// One positioned line of text. `x` and `y` are millimeters from the
/// top-left page corner to the line's baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: TextStyle,
}

/// All lines of one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<Line>,
}

fn line_height(size: f32, spacing: f32) -> f32 {
    size * spacing * PT_TO_MM
}

/// Characters that fit on one line at the given font size
fn max_chars_per_line(options: &PdfOptions, size: f32) -> usize {
    let printable = options.page.width_mm() - options.margins.left - options.margins.right;
    let per_char = size * AVG_CHAR_WIDTH * PT_TO_MM;
    ((printable / per_char) as usize).max(1)
}

/// Greedy word wrap. Words longer than a line are hard-split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if chunk.len() == max_chars {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }

        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

/// Flow cursor over a growing list of pages
struct Cursor<'a> {
    options: &'a PdfOptions,
    pages: Vec<PageLayout>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(options: &'a PdfOptions) -> Self {
        Self {
            options,
            pages: vec![PageLayout::default()],
            y: options.margins.top,
        }
    }

    fn printable_bottom(&self) -> f32 {
        self.options.page.height_mm() - self.options.margins.bottom
    }

    fn remaining(&self) -> f32 {
        self.printable_bottom() - self.y
    }

    /// Height of a fully empty page's printable area
    fn page_capacity(&self) -> f32 {
        self.printable_bottom() - self.options.margins.top
    }

    fn break_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.y = self.options.margins.top;
    }

    fn push_line(&mut self, text: String, size: f32, style: TextStyle) {
        let height = line_height(size, self.options.line_spacing);
        if self.y + height > self.printable_bottom() {
            self.break_page();
        }
        self.y += height;
        let line = Line {
            text,
            x: self.options.margins.left,
            y: self.y,
            size,
            style,
        };
        self.pages
            .last_mut()
            .expect("cursor always holds at least one page")
            .lines
            .push(line);
    }

    /// Advance without emitting text; a gap never forces a page break
    fn gap(&mut self, mm: f32) {
        self.y = (self.y + mm).min(self.printable_bottom());
    }
}

/// Paginate a document.
///
/// Wraps every text run against the printable width and breaks pages
/// against the printable height. A section heading is only placed when the
/// whole heading block plus the lead of its body (`keep_with_next` lines,
/// or the entire body when shorter) still fits; otherwise the section
/// starts on a fresh page. Sections taller than a full page are the one
/// case where a heading may still end up separated.
pub fn paginate(document: &Document, options: &PdfOptions) -> Vec<PageLayout> {
    let mut cursor = Cursor::new(options);
    let spacing = options.line_spacing;

    for line in wrap_text(&document.title, max_chars_per_line(options, options.title_size)) {
        cursor.push_line(line, options.title_size, TextStyle::Title);
    }
    for line in wrap_text(&document.meta_line, max_chars_per_line(options, options.meta_size)) {
        cursor.push_line(line, options.meta_size, TextStyle::Meta);
    }

    for section in &document.sections {
        cursor.gap(SECTION_GAP_MM);

        let heading_text = format!("{}. {}", section.number, section.headline);
        let heading_lines = wrap_text(
            &heading_text,
            max_chars_per_line(options, options.heading_size),
        );

        let body_chars = max_chars_per_line(options, options.body_size);
        let body_line_count: usize = section
            .paragraphs
            .iter()
            .map(|paragraph| wrap_text(paragraph, body_chars).len())
            .sum();
        let lead_lines = body_line_count.min(options.keep_with_next);

        // The paragraph gap before the body counts toward the space the
        // heading block needs, otherwise a heading could still be stranded.
        let lead_height = if lead_lines > 0 {
            PARAGRAPH_GAP_MM + lead_lines as f32 * line_height(options.body_size, spacing)
        } else {
            0.0
        };
        let needed =
            heading_lines.len() as f32 * line_height(options.heading_size, spacing) + lead_height;
        if needed > cursor.remaining() && needed <= cursor.page_capacity() {
            cursor.break_page();
        }

        for line in heading_lines {
            cursor.push_line(line, options.heading_size, TextStyle::Heading);
        }

        for paragraph in &section.paragraphs {
            cursor.gap(PARAGRAPH_GAP_MM);
            for line in wrap_text(paragraph, body_chars) {
                cursor.push_line(line, options.body_size, TextStyle::Body);
            }
        }
    }

    cursor.gap(FOOTER_GAP_MM);
    for line in wrap_text(&document.footer, max_chars_per_line(options, options.meta_size)) {
        cursor.push_line(line, options.meta_size, TextStyle::Footer);
    }

    cursor.pages
}
