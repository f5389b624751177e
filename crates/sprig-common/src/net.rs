//! HTTP fetch utilities for the Sprig parser.
//!
//! Provides a simple blocking HTTP GET wrapper used by the document loader
//! to obtain markup addressed by URL. The parser itself never touches the
//! network.
use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to obtain markup from a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error fetching {url}: {status}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The status line returned by the server.
        status: reqwest::StatusCode,
    },
    /// The response body could not be decoded as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The URL that was requested.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

/// Whether `source` names something [`fetch_text`] can retrieve.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://example.com"));
        assert!(is_remote("https://example.com/index.html"));
        assert!(!is_remote("index.html"));
        assert!(!is_remote("file:///tmp/index.html"));
    }

    #[test]
    fn test_fetch_invalid_url_fails_without_network() {
        let err = fetch_text("http://").unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
