/*!
 * Tests for pagination and line wrapping
 */

use tubedoc::document::project;
use tubedoc::export::layout::{paginate, wrap_text, TextStyle};
use tubedoc::export::PdfOptions;
use tubedoc::summary::{Section, SummaryResult};

use crate::common;

#[test]
fn test_wrapText_withShortText_shouldYieldOneLine() {
    let lines = wrap_text("hello world", 40);
    assert_eq!(lines, vec!["hello world".to_string()]);
}

#[test]
fn test_wrapText_withLongText_shouldRespectLimit() {
    let text = "one two three four five six seven eight nine ten";
    let lines = wrap_text(text, 12);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() <= 12, "line too long: {:?}", line);
    }

    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text);
}

/// Words longer than a line are hard-split rather than dropped
#[test]
fn test_wrapText_withOverlongWord_shouldHardSplit() {
    let lines = wrap_text("abcdefghijklmnop", 5);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines.concat(), "abcdefghijklmnop");
}

#[test]
fn test_wrapText_withEmptyText_shouldYieldNoLines() {
    assert!(wrap_text("", 10).is_empty());
    assert!(wrap_text("   ", 10).is_empty());
}

/// A title-only document fits on a single page
#[test]
fn test_paginate_withTitleOnlyDocument_shouldYieldOnePage() {
    let result = SummaryResult {
        title: "T".to_string(),
        sections: vec![],
    };
    let document = project(&result, common::test_date());

    let pages = paginate(&document, &PdfOptions::default());

    assert_eq!(pages.len(), 1);
    assert!(pages[0]
        .lines
        .iter()
        .any(|line| line.style == TextStyle::Title));
}

/// Enough content forces multiple pages
#[test]
fn test_paginate_withManySections_shouldSpanMultiplePages() {
    let result = common::sample_result_with_sections(80);
    let document = project(&result, common::test_date());

    let pages = paginate(&document, &PdfOptions::default());

    assert!(pages.len() > 1, "expected more than one page");
    for page in &pages {
        assert!(!page.lines.is_empty());
    }
}

/// Every line stays inside the printable area
#[test]
fn test_paginate_allLines_shouldStayWithinMargins() {
    let options = PdfOptions::default();
    let result = common::sample_result_with_sections(40);
    let document = project(&result, common::test_date());

    let pages = paginate(&document, &options);

    let bottom = options.page.height_mm() - options.margins.bottom;
    for page in &pages {
        for line in &page.lines {
            assert!(line.x >= options.margins.left);
            assert!(line.y > options.margins.top);
            assert!(line.y <= bottom + 0.01, "line below margin: y={}", line.y);
        }
    }
}

/// A heading with body following it is never stranded at a page bottom
#[test]
fn test_paginate_withKeepWithNext_shouldNotStrandHeadings() {
    let options = PdfOptions::default();

    // Sections of varying body length shift headings toward page breaks.
    let sections = (0..60)
        .map(|index| Section {
            headline: format!("Heading {}", index + 1),
            content: "body line\n".repeat(1 + index % 5).trim_end().to_string(),
        })
        .collect();
    let result = SummaryResult {
        title: "Stress".to_string(),
        sections,
    };
    let document = project(&result, common::test_date());

    let pages = paginate(&document, &options);

    for page in &pages {
        if let Some(last) = page.lines.last() {
            assert_ne!(
                last.style,
                TextStyle::Heading,
                "heading stranded at page bottom: {:?}",
                last.text
            );
        }
    }
}

/// Section order survives pagination
#[test]
fn test_paginate_sectionOrder_shouldBePreserved() {
    let result = common::sample_result_with_sections(20);
    let document = project(&result, common::test_date());

    let pages = paginate(&document, &PdfOptions::default());

    let headings: Vec<String> = pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .filter(|line| line.style == TextStyle::Heading)
        .map(|line| line.text.clone())
        .collect();

    for (index, heading) in headings.iter().enumerate() {
        assert!(
            heading.starts_with(&format!("{}.", index + 1)),
            "heading out of order: {:?}",
            heading
        );
    }
}

/// Wider margins shrink the printable width and produce more lines
#[test]
fn test_paginate_withWiderMargins_shouldWrapTighter() {
    let result = common::sample_result_with_sections(10);
    let document = project(&result, common::test_date());

    let narrow = paginate(&document, &PdfOptions::default());

    let mut wide_options = PdfOptions::default();
    wide_options.margins.left = 50.0;
    wide_options.margins.right = 50.0;
    let wide = paginate(&document, &wide_options);

    let count = |pages: &[tubedoc::export::layout::PageLayout]| -> usize {
        pages.iter().map(|page| page.lines.len()).sum()
    };
    assert!(count(&wide) >= count(&narrow));
}
