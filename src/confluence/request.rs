//! Request and response values exchanged with the Confluence API.

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the Confluence v2 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request ready to be sent, relative to the API v2 base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,

    /// Path with all placeholders substituted and percent-encoded,
    /// e.g. `/pages/123/labels`.
    pub path: String,

    /// Query pairs in the order they are sent.
    pub query: Vec<(String, String)>,

    /// JSON body for `POST`/`PUT` requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append one query pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Encoded query string without the leading `?`, empty when there is none.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(&self.query).unwrap_or_default()
    }

    /// Path plus query string, used for logging.
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,

    /// Parsed JSON body, `None` when the response had no body
    /// (e.g. `204 No Content` after a delete). Bodies that are not valid
    /// JSON are kept as a JSON string.
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Parse a raw response body.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())),
            )
        };
        Self { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_and_query_encodes_pairs() {
        let request = ApiRequest::new(HttpMethod::Get, "/pages")
            .with_query("title", "Release notes")
            .with_query("space-id", "1,2");
        assert_eq!(request.path_and_query(), "/pages?title=Release+notes&space-id=1%2C2");
    }

    #[test]
    fn test_path_and_query_without_query() {
        let request = ApiRequest::new(HttpMethod::Delete, "/pages/42");
        assert_eq!(request.path_and_query(), "/pages/42");
    }

    #[test]
    fn test_response_from_text() {
        let response = ApiResponse::from_text(200, r#"{"id": "1"}"#);
        assert_eq!(response.body, Some(json!({"id": "1"})));

        let empty = ApiResponse::from_text(204, "");
        assert_eq!(empty.body, None);

        let plain = ApiResponse::from_text(200, "ok");
        assert_eq!(plain.body, Some(json!("ok")));
    }

    #[test]
    fn test_method_body_rules() {
        assert!(HttpMethod::Post.sends_body());
        assert!(HttpMethod::Put.sends_body());
        assert!(!HttpMethod::Get.sends_body());
        assert!(!HttpMethod::Delete.sends_body());
    }
}
