use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

// @module: File and filename utilities

/// Longest filename stem kept after sanitization
const MAX_STEM_CHARS: usize = 120;

/// Characters that must never reach the filesystem in a filename
static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|]|[[:cntrl:]]"#).expect("valid filename pattern"));

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Turn an untrusted title into a safe filename stem.
    ///
    /// Path separators, other filesystem-unsafe characters and control
    /// characters are replaced with underscores; surrounding whitespace,
    /// dots and replacement underscores are trimmed and the stem is
    /// length-capped. A stem that sanitizes away entirely falls back to
    /// `fallback_stem`.
    pub fn sanitize_filename(raw: &str, fallback_stem: &str) -> String {
        let replaced = UNSAFE_FILENAME_CHARS.replace_all(raw, "_");
        let capped: String = replaced.trim().chars().take(MAX_STEM_CHARS).collect();
        let stem = capped
            .trim_matches(|c: char| c == '.' || c == '_' || c.is_whitespace())
            .to_string();

        if stem.is_empty() {
            fallback_stem.to_string()
        } else {
            stem
        }
    }
}
