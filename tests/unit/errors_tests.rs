/*!
 * Tests for error types and conversions
 */

use tubedoc::errors::{
    AppError, ExportError, ServiceError, SERVICE_FAILURE_FALLBACK, TRANSPORT_FAILURE_MESSAGE,
};

#[test]
fn test_serviceError_reported_shouldDisplayCorrectly() {
    let error = ServiceError::Reported("no captions".to_string());
    let display = format!("{}", error);
    assert!(display.contains("service reported failure"));
    assert!(display.contains("no captions"));
}

#[test]
fn test_serviceError_requestFailed_shouldDisplayCorrectly() {
    let error = ServiceError::RequestFailed("connection refused".to_string());
    let display = format!("{}", error);
    assert!(display.contains("request failed"));
    assert!(display.contains("connection refused"));
}

#[test]
fn test_serviceError_parseError_shouldDisplayCorrectly() {
    let error = ServiceError::ParseError("invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("failed to parse"));
    assert!(display.contains("invalid JSON"));
}

/// Service-reported failures surface their own message
#[test]
fn test_userMessage_withReportedError_shouldSurfaceServiceMessage() {
    let error = ServiceError::Reported("no captions".to_string());
    assert_eq!(error.user_message(), "no captions");
}

/// Transport and parse failures collapse into one generic message
#[test]
fn test_userMessage_withTransportErrors_shouldUseGenericMessage() {
    let request_failed = ServiceError::RequestFailed("connect timeout".to_string());
    let parse_error = ServiceError::ParseError("unexpected EOF".to_string());

    assert_eq!(request_failed.user_message(), TRANSPORT_FAILURE_MESSAGE);
    assert_eq!(parse_error.user_message(), TRANSPORT_FAILURE_MESSAGE);
}

/// The two generic fallbacks must stay distinguishable
#[test]
fn test_fallbackMessages_shouldDiffer() {
    assert_ne!(SERVICE_FAILURE_FALLBACK, TRANSPORT_FAILURE_MESSAGE);
}

#[test]
fn test_exportError_variants_shouldDisplayCorrectly() {
    let staging = ExportError::Staging("mkdir failed".to_string());
    let render = ExportError::Render("engine crashed".to_string());
    let output = ExportError::Output("disk full".to_string());

    assert!(format!("{}", staging).contains("staging"));
    assert!(format!("{}", render).contains("rendering failed"));
    assert!(format!("{}", output).contains("write exported file"));
}

#[test]
fn test_appError_fromServiceError_shouldWrap() {
    let error: AppError = ServiceError::Reported("nope".to_string()).into();
    assert!(format!("{}", error).contains("Service error"));
}

#[test]
fn test_appError_fromExportError_shouldWrap() {
    let error: AppError = ExportError::Render("boom".to_string()).into();
    assert!(format!("{}", error).contains("Export error"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: AppError = io.into();
    assert!(format!("{}", error).contains("File error"));
}
