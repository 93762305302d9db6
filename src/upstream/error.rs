//! Upstream failure classification.

use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Any failure while fetching from the upstream API.
///
/// Every variant surfaces to the caller as the same 500 response; the
/// variants exist for logs and metrics.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Configured URL does not parse.
    #[error("invalid upstream url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {}", chain(.0))]
    Build(#[source] reqwest::Error),

    /// Connection refused, DNS failure, reset, TLS failure.
    #[error("connection error: {}", chain(.0))]
    Connect(#[source] reqwest::Error),

    /// Upstream did not answer within the configured timeout.
    #[error("upstream request timed out: {}", chain(.0))]
    Timeout(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status} for url ({url})")]
    Status { status: StatusCode, url: String },

    /// Upstream body was not valid JSON.
    #[error("upstream returned invalid JSON: {}", chain(.0))]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::InvalidUrl { .. } => "invalid_url",
            UpstreamError::Build(_) => "build",
            UpstreamError::Connect(_) => "connect",
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout(e)
        } else if e.is_decode() {
            UpstreamError::Decode(e)
        } else {
            UpstreamError::Connect(e)
        }
    }
}

/// Render an error followed by its sources, joined by `: `.
///
/// reqwest's own Display stops at "error sending request"; the cause
/// (e.g. "Connection refused") lives further down the chain.
fn chain(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
