/*!
 * Client implementations for the remote services.
 *
 * This module contains the service interface and its implementations:
 * - `http`: reqwest-based client for the real summarization/quote service
 * - `mock`: configurable test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ServiceError;
use crate::summary::{Quote, SummaryResult};

/// Common interface over the summarization and quote services
///
/// Both endpoints live on the same backend, so one client serves both
/// workflows. Implementations issue exactly one network call per method
/// invocation and never retry on their own.
#[async_trait]
pub trait SummaryService: Send + Sync + Debug {
    /// Summarize the video behind `url` into a structured document.
    ///
    /// # Arguments
    /// * `url` - The raw video URL; callers are expected to have validated it
    ///
    /// # Returns
    /// * `Result<SummaryResult, ServiceError>` - The summary or a typed failure
    async fn summarize(&self, url: &str) -> Result<SummaryResult, ServiceError>;

    /// Fetch the quote of the day. Takes no parameters and is stateless.
    async fn daily_quote(&self) -> Result<Quote, ServiceError>;
}

pub mod http;
pub mod mock;

pub use http::HttpSummaryService;
pub use mock::{MockBehavior, MockSummaryService};
