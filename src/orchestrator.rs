/*!
 * Request/result state machine for the video and quote workflows.
 *
 * The orchestrator owns the single `RequestState` of a workflow instance
 * and is the only place it is ever mutated. Views read the state; they
 * never touch it directly.
 */

use log::debug;

use crate::errors::ServiceError;
use crate::services::SummaryService;
use crate::summary::{is_supported_video_url, Quote, SummaryResult};

/// Message shown when the submitted URL is not a recognized video link.
/// Detected locally; no network call is made.
pub const INVALID_URL_MESSAGE: &str =
    "Please paste a valid YouTube link (youtube.com or youtu.be).";

/// State of the video summarization workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet, or reset
    #[default]
    Idle,

    /// One request is in flight
    Fetching,

    /// The service produced a summary
    Complete(SummaryResult),

    /// Validation or service failure, with the user-visible message
    Error(String),
}

impl RequestState {
    /// True while a request is in flight
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching)
    }

    /// The held summary, if the workflow completed
    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            Self::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// The held error message, if the workflow failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// State of the quote workflow
///
/// There is no error terminal here: a failed fetch leaves the previous
/// state in place and the view offers a retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteState {
    /// No quote available yet
    #[default]
    Empty,

    /// The most recently fetched quote
    Available(Quote),
}

impl QuoteState {
    /// The held quote, if one was fetched
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Available(quote) => Some(quote),
            Self::Empty => None,
        }
    }
}

/// Mediates between user intent and the remote services, exposing a single
/// coherent state per workflow.
#[derive(Debug)]
pub struct RequestOrchestrator<S: SummaryService> {
    state: RequestState,
    quote: QuoteState,
    service: S,
}

impl<S: SummaryService> RequestOrchestrator<S> {
    /// Create an orchestrator in the `Idle` state
    pub fn new(service: S) -> Self {
        Self {
            state: RequestState::Idle,
            quote: QuoteState::Empty,
            service,
        }
    }

    /// Test constructor starting from an arbitrary request state
    pub fn new_for_test(service: S, state: RequestState) -> Self {
        Self {
            state,
            quote: QuoteState::Empty,
            service,
        }
    }

    /// Current state of the video workflow
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Current state of the quote workflow
    pub fn quote_state(&self) -> &QuoteState {
        &self.quote
    }

    /// Submit a video URL for summarization.
    ///
    /// A no-op while a request is already in flight. Invalid URLs move the
    /// workflow to `Error` without any network call; otherwise exactly one
    /// service call is issued and the workflow ends in `Complete` or
    /// `Error`. No automatic retries.
    pub async fn submit(&mut self, url: &str) {
        if self.state.is_fetching() {
            debug!("Ignoring submission while a request is in flight");
            return;
        }

        if !is_supported_video_url(url) {
            debug!("Rejected URL without a recognized video host");
            self.state = RequestState::Error(INVALID_URL_MESSAGE.to_string());
            return;
        }

        self.state = RequestState::Fetching;

        match self.service.summarize(url).await {
            Ok(result) => {
                debug!(
                    "Summary received: {:?} ({} sections)",
                    result.title,
                    result.sections.len()
                );
                self.state = RequestState::Complete(result);
            }
            Err(error) => {
                debug!("Summarization failed: {}", error);
                self.state = RequestState::Error(error.user_message());
            }
        }
    }

    /// Reset the video workflow to `Idle`, discarding any held result or
    /// error message. Legal from every state.
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
    }

    /// Fetch the quote of the day.
    ///
    /// Success replaces the current quote. Failure leaves the quote state
    /// untouched and hands the error back so the view can offer a retry.
    pub async fn fetch_quote(&mut self) -> Result<(), ServiceError> {
        let quote = self.service.daily_quote().await?;
        self.quote = QuoteState::Available(quote);
        Ok(())
    }
}
