/*!
 * Tests for filename derivation and print normalization
 */

use tubedoc::document::{Document, RenderedSection};
use tubedoc::export::{derive_filename, prepare_for_print};
use tubedoc::summary::SummaryResult;

use crate::common;

#[test]
fn test_deriveFilename_withResult_shouldUseTitle() {
    let result = common::sample_result();
    assert_eq!(derive_filename(Some(&result)), "Intro to X.pdf");
}

#[test]
fn test_deriveFilename_withoutResult_shouldUseDefault() {
    assert_eq!(derive_filename(None), "summary.pdf");
}

/// Unsafe title characters never reach the filename
#[test]
fn test_deriveFilename_withUnsafeTitle_shouldSanitize() {
    let result = SummaryResult {
        title: "a/b\\c: *what?*".to_string(),
        sections: vec![],
    };

    let filename = derive_filename(Some(&result));

    assert!(filename.ends_with(".pdf"));
    for forbidden in ['/', '\\', ':', '*', '?'] {
        assert!(
            !filename.contains(forbidden),
            "filename contains {:?}: {}",
            forbidden,
            filename
        );
    }
}

/// A title that sanitizes away falls back to the default stem
#[test]
fn test_deriveFilename_withEmptyTitle_shouldFallBack() {
    let result = SummaryResult {
        title: "???".to_string(),
        sections: vec![],
    };

    assert_eq!(derive_filename(Some(&result)), "summary.pdf");
}

fn messy_document() -> Document {
    Document {
        title: "  Title  ".to_string(),
        meta_line: "meta ".to_string(),
        footer: " footer".to_string(),
        sections: vec![RenderedSection {
            number: 1,
            headline: " Heading ".to_string(),
            paragraphs: vec![
                "first  ".to_string(),
                "   ".to_string(),
                "second".to_string(),
            ],
        }],
    }
}

#[test]
fn test_prepareForPrint_shouldTrimAndDropBlankParagraphs() {
    let normalized = prepare_for_print(messy_document());

    assert_eq!(normalized.title, "Title");
    assert_eq!(normalized.meta_line, "meta");
    assert_eq!(normalized.footer, "footer");
    assert_eq!(normalized.sections[0].headline, "Heading");
    assert_eq!(
        normalized.sections[0].paragraphs,
        vec!["first".to_string(), "second".to_string()]
    );
}

/// Normalization works on an owned snapshot; the input stays usable
#[test]
fn test_prepareForPrint_shouldNotAffectSource() {
    let source = messy_document();
    let _ = prepare_for_print(source.clone());

    assert_eq!(source.title, "  Title  ");
    assert_eq!(source.sections[0].paragraphs.len(), 3);
}
