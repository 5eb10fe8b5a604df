//! Error types for Confluence API access.

use thiserror::Error;

/// Errors from talking to the Confluence API.
#[derive(Debug, Error)]
pub enum ConfluenceError {
    /// The request could not be sent or the response not read
    /// (connection refused, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Confluence API error {status}: {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// The Confluence site could not be determined from the
    /// accessible-resources endpoint.
    #[error("Site discovery failed: {0}")]
    Discovery(String),

    /// No usable credentials are configured.
    #[error("Credentials error: {0}")]
    Credentials(String),
}

impl ConfluenceError {
    /// Create a discovery error.
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Create a credentials error.
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_message_keeps_body() {
        let err = ConfluenceError::HttpResponse {
            status: 403,
            body: r#"{"message":"forbidden"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Confluence API error 403: {"message":"forbidden"}"#
        );
    }
}
