/*!
 * Mock PDF engine for exercising the export pipeline without printpdf.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tubedoc::document::Document;
use tubedoc::errors::ExportError;
use tubedoc::export::{PdfEngine, PdfOptions};

/// Records every render call; optionally fails instead of writing.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    fail: bool,
    calls: Arc<AtomicUsize>,
    targets: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingEngine {
    /// Engine that writes a stub file at the target path
    pub fn working() -> Self {
        Self::default()
    }

    /// Engine whose render call always fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of render calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Target paths of all render calls, staged paths included
    pub fn targets(&self) -> Vec<PathBuf> {
        self.targets.lock().expect("targets lock").clone()
    }
}

impl Clone for RecordingEngine {
    fn clone(&self) -> Self {
        Self {
            fail: self.fail,
            calls: Arc::clone(&self.calls),
            targets: Arc::clone(&self.targets),
        }
    }
}

impl PdfEngine for RecordingEngine {
    fn render(
        &self,
        document: &Document,
        _options: &PdfOptions,
        target: &Path,
    ) -> Result<(), ExportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.targets
            .lock()
            .expect("targets lock")
            .push(target.to_path_buf());

        if self.fail {
            return Err(ExportError::Render("simulated engine failure".to_string()));
        }

        fs::write(target, format!("pdf-stub: {}", document.title))
            .map_err(|e| ExportError::Output(e.to_string()))?;
        Ok(())
    }
}
