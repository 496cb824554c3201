/*!
 * Error types for the tubedoc application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Generic message shown when the service reported a failure without a cause.
pub const SERVICE_FAILURE_FALLBACK: &str = "The service could not process this video.";

/// Generic message shown when the service could not be reached or its
/// response could not be interpreted. Deliberately different wording from
/// [`SERVICE_FAILURE_FALLBACK`] so the two failure kinds stay
/// distinguishable on screen.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Could not reach the summarization service. Check your connection and try again.";

/// Errors that can occur when talking to the remote services
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service answered but explicitly reported a failure
    #[error("service reported failure: {0}")]
    Reported(String),

    /// Error when making the request itself fails (connect, send, timeout)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Error when the response could not be parsed
    #[error("failed to parse service response: {0}")]
    ParseError(String),
}

impl ServiceError {
    /// Message suitable for the user-visible `Error` state.
    ///
    /// Service-reported failures surface the service's own message;
    /// transport and parse failures collapse into one generic,
    /// non-technical message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Reported(message) => message.clone(),
            Self::RequestFailed(_) | Self::ParseError(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Errors that can occur during PDF export
///
/// Export errors are logged and returned to the caller; they never touch the
/// request state and never block a subsequent export attempt.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error preparing the staging directory
    #[error("failed to prepare export staging area: {0}")]
    Staging(String),

    /// Error from the PDF rendering engine
    #[error("PDF rendering failed: {0}")]
    Render(String),

    /// Error writing the finished file to its destination
    #[error("failed to write exported file: {0}")]
    Output(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a remote service
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Error from the export pipeline
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
