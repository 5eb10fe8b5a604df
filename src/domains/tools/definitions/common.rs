//! Parameters and result helpers shared across Confluence tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};
use tracing::warn;

use crate::confluence::ApiResponse;
use crate::domains::tools::endpoint::{Param, ParamKind};

pub const CURSOR: Param = Param::query(
    "cursor",
    ParamKind::String,
    "Used for pagination, this opaque cursor will be returned in the `next` URL in the `Link` response header. Use the relative URL in the `Link` header to retrieve the `next` set of results.",
);

pub const SORT: Param = Param::query(
    "sort",
    ParamKind::String,
    "Used to sort the result by a particular field.",
);

pub const LIMIT: Param = Param::query(
    "limit",
    ParamKind::Integer,
    "Maximum number of results to return. If more results exist, use the `Link` header to retrieve a relative URL that will return the next set of results.",
);

pub const ANCESTORS_LIMIT: Param = Param::query(
    "limit",
    ParamKind::Integer,
    "Maximum number of ancestors to return. If more ancestors exist, call again with the ID of the highest ancestor returned.",
);

pub const BODY_FORMAT: Param = Param::query(
    "body_format",
    ParamKind::String,
    "The content format type to be returned in the `body` field of the response. If available, the representation will be available under a response field of the same name under the `body` field.",
)
.wire("body-format");

pub const PUBLISHED_VERSION: Param = Param::query(
    "version",
    ParamKind::Integer,
    "Allows you to retrieve a previously published version. Specify the previous version's number to retrieve its details.",
);

pub const LABEL_PREFIX: Param = Param::query(
    "prefix",
    ParamKind::String,
    "Filter the results to labels based on their prefix.",
);

pub const PROPERTY_KEY_FILTER: Param = Param::query(
    "key",
    ParamKind::String,
    "Filters the response to return a specific content property with matching key (case sensitive).",
);

pub const PROPERTY_KEY: Param =
    Param::body("key", ParamKind::String, "Key of the content property");

pub const PROPERTY_VALUE: Param =
    Param::body("value", ParamKind::Any, "Value of the content property.");

pub const PROPERTY_VERSION: Param = Param::body(
    "version",
    ParamKind::Object,
    "New version number and associated message",
);

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Turn a successful API response into a tool result.
///
/// The text content is the body as pretty JSON. Object bodies are also
/// returned as structured content; an empty body becomes `{"status": n}`.
pub fn success_result(response: ApiResponse) -> CallToolResult {
    let value = response
        .body
        .unwrap_or_else(|| json!({ "status": response.status }));

    let mut result = CallToolResult::success(vec![Content::text(render(&value))]);
    if value.is_object() {
        result.structured_content = Some(value);
    }
    result
}

/// Result for a non-2xx response; the body is kept verbatim for the caller.
pub fn api_error_result(status: u16, body: &str) -> CallToolResult {
    warn!("Confluence API error {}", status);

    let parsed = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::from(body));
    let mut result = CallToolResult::error(vec![Content::text(format!(
        "Confluence API error {}: {}",
        status, body
    ))]);
    result.structured_content = Some(json!({ "status": status, "body": parsed }));
    result
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_success_result_object() {
        let result = success_result(ApiResponse::new(200, Some(json!({ "id": "1" }))));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "id": "1" })));
        assert!(text_of(&result).contains("\"id\": \"1\""));
    }

    #[test]
    fn test_success_result_empty_body() {
        let result = success_result(ApiResponse::new(204, None));
        assert_eq!(result.structured_content, Some(json!({ "status": 204 })));
    }

    #[test]
    fn test_success_result_array_is_text_only() {
        let result = success_result(ApiResponse::new(200, Some(json!([{ "id": 1 }]))));
        assert_eq!(result.structured_content, None);
        assert!(text_of(&result).starts_with('['));
    }

    #[test]
    fn test_api_error_result() {
        let result = api_error_result(404, r#"{"message":"Not found"}"#);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            r#"Confluence API error 404: {"message":"Not found"}"#
        );
        assert_eq!(
            result.structured_content,
            Some(json!({ "status": 404, "body": { "message": "Not found" } }))
        );

        let result = api_error_result(502, "Bad gateway");
        assert_eq!(
            result.structured_content,
            Some(json!({ "status": 502, "body": "Bad gateway" }))
        );
    }
}
