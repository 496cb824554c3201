/*!
 * PDF export pipeline.
 *
 * Exporting snapshots the document, normalizes it for print, renders it
 * into a staging directory through the `PdfEngine` trait, and only then
 * copies the finished file to its destination. The staging directory is
 * removed on every exit path, so repeated exports leave no residue behind
 * regardless of how the engine call went.
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use crate::document::Document;
use crate::errors::ExportError;
use crate::file_utils::FileManager;
use crate::summary::SummaryResult;

pub mod layout;
pub mod pdf;

pub use pdf::PrintPdfEngine;

/// Filename stem used when no result is held or the title sanitizes away
pub const DEFAULT_EXPORT_STEM: &str = "summary";

/// Prefix of the throwaway staging directory
const STAGING_PREFIX: &str = ".tubedoc-export-";

/// Page margins in millimeters, one value per side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Same margin on all four sides
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Page format and orientation of the exported file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageFormat {
    #[default]
    A4Portrait,
    A4Landscape,
}

impl PageFormat {
    pub fn width_mm(&self) -> f32 {
        match self {
            Self::A4Portrait => 210.0,
            Self::A4Landscape => 297.0,
        }
    }

    pub fn height_mm(&self) -> f32 {
        match self {
            Self::A4Portrait => 297.0,
            Self::A4Landscape => 210.0,
        }
    }
}

/// Output configuration handed to the PDF engine
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// Page margins
    pub margins: Margins,

    /// Page format/orientation
    pub page: PageFormat,

    /// Raster quality in (0, 1] for embedded imagery
    pub image_quality: f32,

    /// Minimum body lines kept on the same page as their section heading
    pub keep_with_next: usize,

    /// Title font size in points
    pub title_size: f32,

    /// Section heading font size in points
    pub heading_size: f32,

    /// Body font size in points
    pub body_size: f32,

    /// Meta/footer font size in points
    pub meta_size: f32,

    /// Line height as a multiple of the font size
    pub line_spacing: f32,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            page: PageFormat::A4Portrait,
            image_quality: 0.98,
            keep_with_next: 2,
            title_size: 22.0,
            heading_size: 14.0,
            body_size: 11.0,
            meta_size: 9.0,
            line_spacing: 1.4,
        }
    }
}

/// Derive the output filename from a held result.
///
/// Titles come from an uncontrolled remote service, so they are sanitized
/// before touching the filesystem. Without a result the generic default
/// name is used.
pub fn derive_filename(result: Option<&SummaryResult>) -> String {
    match result {
        Some(result) => format!(
            "{}.pdf",
            FileManager::sanitize_filename(&result.title, DEFAULT_EXPORT_STEM)
        ),
        None => format!("{}.pdf", DEFAULT_EXPORT_STEM),
    }
}

/// Normalize a snapshot for print: whitespace-trim every text run and drop
/// paragraphs that would render blank. The snapshot is already detached, so
/// the live document is never touched.
pub fn prepare_for_print(mut document: Document) -> Document {
    document.title = document.title.trim().to_string();
    document.meta_line = document.meta_line.trim().to_string();
    document.footer = document.footer.trim().to_string();

    for section in &mut document.sections {
        section.headline = section.headline.trim().to_string();
        section.paragraphs = section
            .paragraphs
            .iter()
            .map(|paragraph| paragraph.trim_end().to_string())
            .filter(|paragraph| !paragraph.trim().is_empty())
            .collect();
    }

    document
}

/// Rendering capability that turns a document into a PDF file.
///
/// Treated as opaque: the pipeline hands it the normalized snapshot, the
/// full options surface, and a target path inside the staging directory.
pub trait PdfEngine {
    fn render(
        &self,
        document: &Document,
        options: &PdfOptions,
        target: &Path,
    ) -> Result<(), ExportError>;
}

/// Pipeline producing a stable PDF snapshot of a rendered document
pub struct ExportPipeline<E: PdfEngine> {
    engine: E,
    options: PdfOptions,
}

impl<E: PdfEngine> ExportPipeline<E> {
    pub fn new(engine: E, options: PdfOptions) -> Self {
        Self { engine, options }
    }

    /// Export `document` as `filename` inside `output_dir`.
    ///
    /// The document is cloned up front and only the clone is processed, so
    /// concurrent exports and the live view stay independent. Returns the
    /// path of the written file.
    pub fn export(
        &self,
        document: &Document,
        filename: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let snapshot = prepare_for_print(document.clone());

        FileManager::ensure_dir(output_dir)
            .map_err(|e| ExportError::Output(e.to_string()))?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(output_dir)
            .map_err(|e| ExportError::Staging(e.to_string()))?;
        debug!("Export staging directory: {:?}", staging.path());

        let outcome = self.render_and_persist(&snapshot, &staging, filename, output_dir);

        // Cleanup must run whether the engine succeeded or failed. The
        // TempDir drop guard would also remove the directory, but closing
        // explicitly surfaces removal failures in the log.
        if let Err(error) = staging.close() {
            warn!("Failed to remove export staging directory: {}", error);
        }

        outcome
    }

    fn render_and_persist(
        &self,
        snapshot: &Document,
        staging: &TempDir,
        filename: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let staged = staging.path().join(filename);

        self.engine.render(snapshot, &self.options, &staged)?;

        let target = output_dir.join(filename);
        fs::copy(&staged, &target).map_err(|e| ExportError::Output(e.to_string()))?;

        Ok(target)
    }
}
