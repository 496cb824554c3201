/*!
 * Data model for video summaries and daily quotes.
 *
 * Contains the structured summary returned by the summarization service,
 * the quote record returned by the quote service, and the wire envelopes
 * both services wrap their payloads in.
 */

use serde::{Deserialize, Serialize};

/// Substrings that identify a supported video host.
const VIDEO_HOST_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Check whether a URL points at a recognized video host.
///
/// This is a plain substring check, nothing more. The service does its own
/// video-id parsing; rejecting obviously wrong input here just avoids a
/// pointless round trip.
pub fn is_supported_video_url(url: &str) -> bool {
    VIDEO_HOST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// A validated request for the summarization service.
///
/// Can only be constructed from a URL that passes the host check, so a
/// `VideoRequest` in hand means the URL is safe to send.
#[derive(Debug, Clone, Serialize)]
pub struct VideoRequest {
    /// The user-supplied video URL, sent to the service verbatim
    pub url: String,
}

impl VideoRequest {
    /// Build a request from a raw URL, or `None` if the host is not recognized.
    pub fn new(url: &str) -> Option<Self> {
        if is_supported_video_url(url) {
            Some(Self { url: url.to_string() })
        } else {
            None
        }
    }
}

/// One titled section of a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub headline: String,

    /// Section body; embedded line breaks are paragraph breaks
    pub content: String,
}

/// Structured summary of one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Video title, also the basis of the export filename
    pub title: String,

    /// Ordered sections; order is preserved end-to-end and may be empty
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One inspirational quote record
///
/// All three fields are required; a response missing any of them is a parse
/// failure, never a partial quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text
    pub quote: String,

    /// Who said it
    pub author: String,

    /// Where or when it was said
    pub context: String,
}

/// Wire envelope of `POST /api/get-transcript`
///
/// A missing `success` field counts as failure, matching how the service
/// reports request-level errors with a bare `{"error": ...}` body.
#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    /// Whether the service produced a summary
    #[serde(default)]
    pub success: bool,

    /// The summary, present when `success` is true
    #[serde(default)]
    pub data: Option<SummaryResult>,

    /// Human-readable cause, sometimes present when `success` is false
    #[serde(default)]
    pub error: Option<String>,
}

/// Wire envelope of `GET /api/daily-quote`
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    /// Whether the service produced a quote
    #[serde(default)]
    pub success: bool,

    /// The quote, present when `success` is true
    #[serde(default)]
    pub data: Option<Quote>,

    /// Human-readable cause, sometimes present when `success` is false
    #[serde(default)]
    pub error: Option<String>,
}
