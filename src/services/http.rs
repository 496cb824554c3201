use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;

use crate::errors::{ServiceError, SERVICE_FAILURE_FALLBACK};
use crate::services::SummaryService;
use crate::summary::{Quote, QuoteResponse, SummaryResult, TranscriptResponse, VideoRequest};

/// Path of the summarization endpoint
const TRANSCRIPT_PATH: &str = "/api/get-transcript";

/// Path of the quote endpoint
const QUOTE_PATH: &str = "/api/daily-quote";

/// HTTP client for the summarization backend
#[derive(Debug)]
pub struct HttpSummaryService {
    /// HTTP client for API requests
    client: Client,
    /// Base URL all endpoint paths are joined onto
    base_url: String,
}

impl HttpSummaryService {
    /// Create a new client against the given base URL.
    ///
    /// The timeout applies to each whole request, which is the only bound
    /// on how long a submission can stay in flight.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Interpret a decoded envelope, splitting service-reported failures from
/// malformed ones.
fn unwrap_envelope<T>(
    success: bool,
    data: Option<T>,
    service_error: Option<String>,
) -> Result<T, ServiceError> {
    if success {
        data.ok_or_else(|| {
            ServiceError::ParseError("success response without a data field".to_string())
        })
    } else {
        let message = service_error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| SERVICE_FAILURE_FALLBACK.to_string());
        Err(ServiceError::Reported(message))
    }
}

#[async_trait]
impl SummaryService for HttpSummaryService {
    async fn summarize(&self, url: &str) -> Result<SummaryResult, ServiceError> {
        let endpoint = self.endpoint(TRANSCRIPT_PATH);
        let request = VideoRequest { url: url.to_string() };

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Summarization request to {} failed: {}", endpoint, e);
                ServiceError::RequestFailed(e.to_string())
            })?;

        // The service wraps failures in the same envelope on any status
        // code, so the body is decoded before the status is considered.
        let envelope = response
            .json::<TranscriptResponse>()
            .await
            .map_err(|e| ServiceError::ParseError(e.to_string()))?;

        unwrap_envelope(envelope.success, envelope.data, envelope.error)
    }

    async fn daily_quote(&self) -> Result<Quote, ServiceError> {
        let endpoint = self.endpoint(QUOTE_PATH);

        let response = self.client.get(&endpoint).send().await.map_err(|e| {
            error!("Quote request to {} failed: {}", endpoint, e);
            ServiceError::RequestFailed(e.to_string())
        })?;

        let envelope = response
            .json::<QuoteResponse>()
            .await
            .map_err(|e| ServiceError::ParseError(e.to_string()))?;

        unwrap_envelope(envelope.success, envelope.data, envelope.error)
    }
}
