/*!
 * # tubedoc - Video summaries as documents
 *
 * A Rust library and CLI for turning a video URL into a structured summary
 * document and exporting it as a paginated PDF.
 *
 * ## Features
 *
 * - Submit a video URL to a remote summarization service
 * - Single request/result state machine shared by every view
 * - Deterministic projection of summaries into displayable documents
 * - PDF export with per-side margins and keep-with-next pagination
 * - Independent daily-quote workflow
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `summary`: Summary and quote data model plus wire envelopes
 * - `orchestrator`: Request/result state machine for both workflows
 * - `document`: Projection of summaries into documents
 * - `export`: PDF export pipeline:
 *   - `export::layout`: Pure pagination and line wrapping
 *   - `export::pdf`: printpdf-backed rendering engine
 * - `services`: Clients for the remote backend:
 *   - `services::http`: reqwest client
 *   - `services::mock`: configurable test double
 * - `file_utils`: Filename sanitization and filesystem helpers
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod orchestrator;
pub mod services;
pub mod summary;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::Document;
pub use errors::{AppError, ExportError, ServiceError};
pub use export::{ExportPipeline, PdfEngine, PdfOptions};
pub use orchestrator::{QuoteState, RequestOrchestrator, RequestState};
pub use summary::{Quote, Section, SummaryResult};
