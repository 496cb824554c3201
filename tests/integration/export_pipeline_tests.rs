/*!
 * Tests for the export pipeline lifecycle: staging, cleanup, independence
 * from the live document
 */

use std::fs;
use std::path::Path;

use tubedoc::document::project;
use tubedoc::export::{ExportPipeline, PdfOptions};

use crate::common;
use crate::common::mock_engine::RecordingEngine;

/// Names of everything currently inside a directory
fn dir_entries(dir: &Path) -> Vec<String> {
    let mut entries: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_export_onSuccess_shouldWriteFileAndCleanStaging() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());
    let pipeline = ExportPipeline::new(RecordingEngine::working(), PdfOptions::default());

    let written = pipeline
        .export(&document, "out.pdf", temp.path())
        .expect("export succeeds");

    assert!(written.is_file());
    // Only the exported file remains; the staging directory is gone
    assert_eq!(dir_entries(temp.path()), vec!["out.pdf".to_string()]);
}

/// The engine renders into the staging directory, never the destination
#[test]
fn test_export_engineTarget_shouldBeInsideStaging() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());
    let engine = RecordingEngine::working();
    let pipeline = ExportPipeline::new(engine.clone(), PdfOptions::default());

    pipeline
        .export(&document, "out.pdf", temp.path())
        .expect("export succeeds");

    let targets = engine.targets();
    assert_eq!(targets.len(), 1);
    assert_ne!(targets[0], temp.path().join("out.pdf"));
    assert!(targets[0].starts_with(temp.path()));
}

/// Two exports in a row produce two files and no staging residue
#[test]
fn test_export_twiceInSuccession_shouldLeaveNoResidue() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());
    let engine = RecordingEngine::working();
    let pipeline = ExportPipeline::new(engine.clone(), PdfOptions::default());

    pipeline
        .export(&document, "first.pdf", temp.path())
        .expect("first export");
    pipeline
        .export(&document, "second.pdf", temp.path())
        .expect("second export");

    assert_eq!(engine.call_count(), 2);
    assert_eq!(
        dir_entries(temp.path()),
        vec!["first.pdf".to_string(), "second.pdf".to_string()]
    );
}

/// Engine failure is returned, leaves no residue and no partial output
#[test]
fn test_export_onEngineFailure_shouldCleanUpAndWriteNothing() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());
    let pipeline = ExportPipeline::new(RecordingEngine::failing(), PdfOptions::default());

    let outcome = pipeline.export(&document, "out.pdf", temp.path());

    assert!(outcome.is_err());
    assert!(dir_entries(temp.path()).is_empty());
}

/// A failed export does not block the next attempt
#[test]
fn test_export_afterFailure_shouldSucceedNextTime() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());

    let failing = ExportPipeline::new(RecordingEngine::failing(), PdfOptions::default());
    assert!(failing.export(&document, "out.pdf", temp.path()).is_err());

    let working = ExportPipeline::new(RecordingEngine::working(), PdfOptions::default());
    let written = working
        .export(&document, "out.pdf", temp.path())
        .expect("second attempt succeeds");

    assert!(written.is_file());
}

/// Export never mutates the live document
#[test]
fn test_export_shouldLeaveLiveDocumentUntouched() {
    let temp = common::create_temp_dir().expect("temp dir");
    let document = project(&common::sample_result(), common::test_date());
    let before = document.clone();
    let pipeline = ExportPipeline::new(RecordingEngine::working(), PdfOptions::default());

    pipeline
        .export(&document, "out.pdf", temp.path())
        .expect("export succeeds");

    assert_eq!(document, before);
}

/// A missing output directory is created on demand
#[test]
fn test_export_withMissingOutputDir_shouldCreateIt() {
    let temp = common::create_temp_dir().expect("temp dir");
    let nested = temp.path().join("exports").join("today");
    let document = project(&common::sample_result(), common::test_date());
    let pipeline = ExportPipeline::new(RecordingEngine::working(), PdfOptions::default());

    let written = pipeline
        .export(&document, "out.pdf", &nested)
        .expect("export succeeds");

    assert!(written.is_file());
    assert_eq!(written, nested.join("out.pdf"));
}
