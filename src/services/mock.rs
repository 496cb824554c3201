/*!
 * Mock service implementations for testing.
 *
 * This module provides a mock service that simulates different behaviors:
 * - `MockSummaryService::working()` - Always succeeds with a fixed summary
 * - `MockSummaryService::reported_failure(..)` - Service-reported failure
 * - `MockSummaryService::unreachable()` - Transport-level failure
 * - `MockSummaryService::malformed()` - Uninterpretable response
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::{ServiceError, SERVICE_FAILURE_FALLBACK};
use crate::services::SummaryService;
use crate::summary::{Quote, Section, SummaryResult};

/// Behavior mode for the mock service
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Service reports failure; `None` simulates a missing error field
    ReportedFailure(Option<String>),
    /// Request never reaches the service
    Unreachable,
    /// Response cannot be parsed
    Malformed,
    /// Transport fails on every Nth request
    Intermittent { fail_every: usize },
    /// Succeeds after a delay (for spinner and timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock service for testing the orchestrator and workflows
#[derive(Debug)]
pub struct MockSummaryService {
    /// Behavior mode
    behavior: MockBehavior,
    /// Counts every summarize/daily_quote invocation
    request_count: Arc<AtomicUsize>,
    /// Summary returned on success
    result: SummaryResult,
    /// Quote returned on success
    quote: Quote,
}

impl MockSummaryService {
    /// Create a new mock service with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            result: Self::default_result(),
            quote: Self::default_quote(),
        }
    }

    /// Create a working mock service that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock where the service reports a failure.
    ///
    /// Pass `None` to simulate a failure response without an error field.
    pub fn reported_failure(message: Option<&str>) -> Self {
        Self::new(MockBehavior::ReportedFailure(message.map(str::to_string)))
    }

    /// Create a mock that simulates a transport failure
    pub fn unreachable() -> Self {
        Self::new(MockBehavior::Unreachable)
    }

    /// Create a mock that simulates a malformed response
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock whose transport fails on every Nth request
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a mock that succeeds after the given delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set the summary returned on success
    pub fn with_result(mut self, result: SummaryResult) -> Self {
        self.result = result;
        self
    }

    /// Set the quote returned on success
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    /// Number of service calls issued so far, across clones
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn default_result() -> SummaryResult {
        SummaryResult {
            title: "Mock Video".to_string(),
            sections: vec![Section {
                headline: "Overview".to_string(),
                content: "Mock summary content.".to_string(),
            }],
        }
    }

    fn default_quote() -> Quote {
        Quote {
            quote: "Stay hungry, stay foolish.".to_string(),
            author: "Steve Jobs".to_string(),
            context: "Stanford commencement address, 2005".to_string(),
        }
    }

    /// Shared failure logic for both endpoints; `count` is the 0-based
    /// index of the current request
    fn failure(&self, count: usize) -> Option<ServiceError> {
        match &self.behavior {
            MockBehavior::Working | MockBehavior::Slow { .. } => None,
            MockBehavior::ReportedFailure(message) => Some(ServiceError::Reported(
                message
                    .clone()
                    .unwrap_or_else(|| SERVICE_FAILURE_FALLBACK.to_string()),
            )),
            MockBehavior::Unreachable => Some(ServiceError::RequestFailed(
                "connection refused (simulated)".to_string(),
            )),
            MockBehavior::Malformed => Some(ServiceError::ParseError(
                "invalid JSON (simulated)".to_string(),
            )),
            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Some(ServiceError::RequestFailed(format!(
                        "simulated intermittent failure (request #{})",
                        count + 1
                    )))
                } else {
                    None
                }
            }
        }
    }

    async fn simulate_latency(&self) {
        if let MockBehavior::Slow { delay_ms } = &self.behavior {
            tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
        }
    }
}

impl Clone for MockSummaryService {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            result: self.result.clone(),
            quote: self.quote.clone(),
        }
    }
}

#[async_trait]
impl SummaryService for MockSummaryService {
    async fn summarize(&self, _url: &str) -> Result<SummaryResult, ServiceError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        match self.failure(count) {
            Some(error) => Err(error),
            None => Ok(self.result.clone()),
        }
    }

    async fn daily_quote(&self) -> Result<Quote, ServiceError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        match self.failure(count) {
            Some(error) => Err(error),
            None => Ok(self.quote.clone()),
        }
    }
}
