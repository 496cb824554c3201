use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::export::{Margins, PageFormat, PdfOptions};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the summarization backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// The only bound on how long a submission can stay in flight; there is
    /// no separate cancellation.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Export config
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// PDF export configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Top page margin in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_top_mm: f32,

    /// Right page margin in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_right_mm: f32,

    /// Bottom page margin in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_bottom_mm: f32,

    /// Left page margin in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_left_mm: f32,

    /// Page format and orientation
    #[serde(default)]
    pub page_format: PageFormat,

    /// Raster quality in (0, 1] for embedded imagery
    #[serde(default = "default_image_quality")]
    pub image_quality: f32,

    /// Minimum body lines kept on the same page as their section heading
    #[serde(default = "default_keep_with_next")]
    pub keep_with_next: usize,
}

impl ExportConfig {
    /// Options surface handed to the PDF engine
    pub fn to_pdf_options(&self) -> PdfOptions {
        PdfOptions {
            margins: Margins {
                top: self.margin_top_mm,
                right: self.margin_right_mm,
                bottom: self.margin_bottom_mm,
                left: self.margin_left_mm,
            },
            page: self.page_format,
            image_quality: self.image_quality,
            keep_with_next: self.keep_with_next,
            ..PdfOptions::default()
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin_top_mm: default_margin_mm(),
            margin_right_mm: default_margin_mm(),
            margin_bottom_mm: default_margin_mm(),
            margin_left_mm: default_margin_mm(),
            page_format: PageFormat::default(),
            image_quality: default_image_quality(),
            keep_with_next: default_keep_with_next(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_margin_mm() -> f32 {
    10.0
}

fn default_image_quality() -> f32 {
    0.98
}

fn default_keep_with_next() -> usize {
    2
}

impl Config {
    /// Validate the configuration after loading and overriding.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {}", self.base_url, e))?;

        if self.request_timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be at least 1 second"));
        }

        let export = &self.export;
        let margins = [
            export.margin_top_mm,
            export.margin_right_mm,
            export.margin_bottom_mm,
            export.margin_left_mm,
        ];
        if margins.iter().any(|margin| *margin < 0.0) {
            return Err(anyhow!("Page margins must not be negative"));
        }
        if export.margin_left_mm + export.margin_right_mm >= export.page_format.width_mm() {
            return Err(anyhow!("Horizontal margins leave no printable width"));
        }
        if export.margin_top_mm + export.margin_bottom_mm >= export.page_format.height_mm() {
            return Err(anyhow!("Vertical margins leave no printable height"));
        }

        if export.image_quality <= 0.0 || export.image_quality > 1.0 {
            return Err(anyhow!("Image quality must be within (0, 1]"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
            export: ExportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
