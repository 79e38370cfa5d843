//! Error types for the hub.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`HubError`] - Failures of a user-triggered action, in four categories:
//!   fetch, parse, not-found and unavailable data
//!
//! Both are `Clone` so a single failed load can be handed to every caller
//! that was waiting on it.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, DNS, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of a hub action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    /// Target unreachable or answered with a non-success status.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Response body was not the HTML/JSON we expected.
    #[error("Parse error: {0}")]
    Parse(String),
    /// Referenced folder or file does not exist in the snapshot.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Snapshot absent or empty when a repository view was requested.
    #[error("Data unavailable: {0}")]
    Unavailable(String),
}

impl HubError {
    /// Message safe to show to the user.
    ///
    /// Technical detail stays in the log; the user only learns which kind of
    /// thing went wrong.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(FetchError::HttpError(404)) => "The resource was not found.".to_string(),
            Self::Fetch(FetchError::Timeout) => "The request took too long.".to_string(),
            Self::Fetch(_) => "The resource could not be reached.".to_string(),
            Self::Parse(_) => "The resource could not be read.".to_string(),
            Self::NotFound(path) => format!("'{}' was not found.", path),
            Self::Unavailable(_) => "The data is not available right now.".to_string(),
        }
    }

    /// Whether the remote side refused because of rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::HttpError(403 | 429)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_converts() {
        let err: HubError = FetchError::HttpError(500).into();
        assert_eq!(err, HubError::Fetch(FetchError::HttpError(500)));
        assert_eq!(err.to_string(), "HTTP error: 500");
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = HubError::Parse("unexpected token at line 3".to_string());
        assert!(!err.user_message().contains("line 3"));

        let err = HubError::NotFound("src/main.js".to_string());
        assert_eq!(err.user_message(), "'src/main.js' was not found.");
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(HubError::Fetch(FetchError::HttpError(429)).is_rate_limited());
        assert!(HubError::Fetch(FetchError::HttpError(403)).is_rate_limited());
        assert!(!HubError::Fetch(FetchError::HttpError(404)).is_rate_limited());
        assert!(!HubError::Unavailable("x".into()).is_rate_limited());
    }
}
