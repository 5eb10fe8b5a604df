//! Endpoint descriptions and request construction.
//!
//! Every tool is an [`Endpoint`]: an HTTP method, a path template relative to
//! the API v2 base URL and a list of [`Param`]s saying where each argument
//! goes. [`Endpoint::build_request`] turns the caller's JSON arguments into
//! an [`ApiRequest`]; [`Endpoint::to_tool`] produces the MCP tool metadata.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rmcp::model::{Tool, ToolAnnotations};
use serde_json::{Map, Value, json};
use tracing::warn;

use super::error::ToolError;
use crate::confluence::ApiRequest;
pub use crate::confluence::HttpMethod;

/// Characters escaped when a value is placed in a single path segment.
/// Only RFC 3986 unreserved characters pass through.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// JSON type accepted for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
    /// Any JSON value, passed through untouched.
    Any,
}

impl ParamKind {
    fn expected(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::Array => "an array",
            Self::Object => "an object",
            Self::Any => "a JSON value",
        }
    }

    fn schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Array => json!({ "type": "array", "items": { "type": "string" } }),
            Self::Object => json!({ "type": "object" }),
            Self::Any => json!({}),
        }
    }
}

/// Where an argument is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
    /// Substituted into the path and repeated in the JSON body.
    PathAndBody,
}

impl Location {
    pub fn in_path(&self) -> bool {
        matches!(self, Self::Path | Self::PathAndBody)
    }

    pub fn in_body(&self) -> bool {
        matches!(self, Self::Body | Self::PathAndBody)
    }
}

/// One tool argument.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    /// Argument name as seen by tool callers.
    pub name: &'static str,
    /// Name sent to the API (query key, body field or path placeholder).
    pub wire: &'static str,
    pub kind: ParamKind,
    pub location: Location,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// A required string path segment; `name` must match the `{placeholder}`.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            kind: ParamKind::String,
            location: Location::Path,
            required: true,
            description,
        }
    }

    /// A required path segment that the API also expects in the body.
    pub const fn path_and_body(name: &'static str, description: &'static str) -> Self {
        Self {
            location: Location::PathAndBody,
            ..Self::path(name, description)
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            kind,
            location: Location::Query,
            required: false,
            description,
        }
    }

    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            kind,
            location: Location::Body,
            required: false,
            description,
        }
    }

    /// Use a different name on the wire, e.g. `body_format` → `body-format`.
    pub const fn wire(self, wire: &'static str) -> Self {
        Self { wire, ..self }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        schema["description"] = Value::from(self.description);
        schema
    }

    /// Check and normalize a supplied (non-null) value.
    fn coerce(&self, value: &Value) -> Result<Value, ToolError> {
        let invalid = || {
            ToolError::invalid_arguments(format!(
                "'{}' must be {}, got {}",
                self.name,
                self.kind.expected(),
                value
            ))
        };

        match self.kind {
            ParamKind::String => match value {
                Value::String(_) => Ok(value.clone()),
                Value::Number(n) => Ok(Value::String(n.to_string())),
                Value::Bool(b) => Ok(Value::String(b.to_string())),
                _ => Err(invalid()),
            },
            ParamKind::Integer => match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
                Value::String(s) => s
                    .trim()
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| invalid()),
                _ => Err(invalid()),
            },
            ParamKind::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(s) => match s.trim().to_lowercase().as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(invalid()),
                },
                _ => Err(invalid()),
            },
            ParamKind::Array => match value {
                Value::Array(_) => Ok(value.clone()),
                Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                    Ok(Value::Array(vec![value.clone()]))
                }
                _ => Err(invalid()),
            },
            ParamKind::Object => match value {
                Value::Object(_) => Ok(value.clone()),
                Value::String(s) => match serde_json::from_str::<Value>(s) {
                    Ok(parsed @ Value::Object(_)) => Ok(parsed),
                    _ => Err(invalid()),
                },
                _ => Err(invalid()),
            },
            ParamKind::Any => Ok(value.clone()),
        }
    }
}

/// Render a value for a query string or path segment.
///
/// Arrays are joined with commas (non-exploded form style).
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Static description of one Confluence endpoint exposed as a tool.
#[derive(Debug)]
pub struct Endpoint {
    /// Tool name, unique across the catalog.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the API v2 base URL, e.g. `/pages/{id}`.
    pub path: &'static str,
    pub summary: &'static str,
    /// API groups this endpoint belongs to, e.g. `["Page", "important"]`.
    pub tags: &'static [&'static str],
    pub params: &'static [Param],
}

impl Endpoint {
    /// Look up a parameter by argument name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Whether the endpoint only reads data.
    pub fn is_read_only(&self) -> bool {
        self.method == HttpMethod::Get
    }

    /// Case-insensitive tag check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag.trim()))
    }

    /// Human readable title, e.g. `get_page_by_id` → `Get page by id`.
    pub fn title(&self) -> String {
        let words = self.name.replace('_', " ");
        let mut chars = words.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Tool description: the summary followed by the HTTP call it makes.
    pub fn description(&self) -> String {
        format!("{}\n\n{} {}", self.summary, self.method, self.path)
    }

    /// JSON schema of the tool arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(param.name.to_string(), param.schema());
            if param.required {
                required.push(Value::from(param.name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Behaviour hints derived from the HTTP method.
    pub fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            title: Some(self.title()),
            read_only_hint: Some(self.is_read_only()),
            destructive_hint: Some(self.method == HttpMethod::Delete),
            idempotent_hint: Some(self.method != HttpMethod::Post),
            open_world_hint: Some(true),
        }
    }

    /// Create a Tool model for this endpoint (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description().into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: Some(self.annotations()),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the request for a tool call.
    ///
    /// Absent and `null` optional arguments are omitted; unknown arguments
    /// are ignored.
    pub fn build_request(
        &self,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<ApiRequest, ToolError> {
        let empty = Map::new();
        let arguments = arguments.unwrap_or(&empty);

        for name in arguments.keys() {
            if self.param(name).is_none() {
                warn!("Ignoring unknown argument '{}' for tool {}", name, self.name);
            }
        }

        let mut path = self.path.to_string();
        let mut query = Vec::new();
        let mut body = Map::new();

        for param in self.params {
            let value = match arguments.get(param.name).filter(|v| !v.is_null()) {
                Some(value) => param.coerce(value)?,
                None if param.required => {
                    return Err(ToolError::invalid_arguments(format!(
                        "Missing required parameter '{}'",
                        param.name
                    )));
                }
                None => continue,
            };

            if param.location.in_path() {
                let segment = text_value(&value);
                if segment.is_empty() {
                    return Err(ToolError::invalid_arguments(format!(
                        "'{}' must not be empty",
                        param.name
                    )));
                }
                // Dot segments are resolved away by URL parsing
                if segment == "." || segment == ".." {
                    return Err(ToolError::invalid_arguments(format!(
                        "'{}' must not be '.' or '..'",
                        param.name
                    )));
                }
                let encoded = utf8_percent_encode(&segment, PATH_SEGMENT).to_string();
                path = path.replace(&format!("{{{}}}", param.wire), &encoded);
            }

            if param.location == Location::Query {
                query.push((param.wire.to_string(), text_value(&value)));
            }

            if param.location.in_body() {
                body.insert(param.wire.to_string(), value);
            }
        }

        let mut request = ApiRequest::new(self.method, path);
        request.query = query;

        if self.method.sends_body() && self.params.iter().any(|p| p.location.in_body()) {
            request.body = Some(Value::Object(body));
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confluence::HttpMethod;

    static GET_WIDGET: Endpoint = Endpoint {
        name: "get_widget_by_id",
        method: HttpMethod::Get,
        path: "/widgets/{widget_id}",
        summary: "Returns a widget.",
        tags: &["Widget", "important"],
        params: &[
            Param::path("widget_id", "ID of the widget."),
            Param::query("status", ParamKind::Array, "Statuses."),
            Param::query("include_labels", ParamKind::Boolean, "Include labels.")
                .wire("include-labels"),
            Param::query("limit", ParamKind::Integer, "Page size."),
        ],
    };

    static UPDATE_WIDGET: Endpoint = Endpoint {
        name: "update_widget",
        method: HttpMethod::Put,
        path: "/widgets/{id}",
        summary: "Updates a widget.",
        tags: &["Widget"],
        params: &[
            Param::path_and_body("id", "ID of the widget."),
            Param::body("title", ParamKind::String, "Title.").required(),
            Param::body("version", ParamKind::Object, "Version."),
            Param::body("body", ParamKind::Any, "Body."),
        ],
    };

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_get_request_path_and_query() {
        let request = GET_WIDGET
            .build_request(Some(&args(json!({
                "widget_id": "42",
                "limit": 10,
                "status": ["current", "archived"],
                "include_labels": true
            }))))
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/widgets/42");
        // Declaration order, not argument order
        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "current,archived".to_string()),
                ("include-labels".to_string(), "true".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_missing_required_path_param() {
        let err = GET_WIDGET.build_request(None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("widget_id"));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let err = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": null }))))
            .unwrap_err();
        assert!(err.to_string().contains("widget_id"));

        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "1", "limit": null }))))
            .unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_path_segment_is_encoded() {
        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "a/b c" }))))
            .unwrap();
        assert_eq!(request.path, "/widgets/a%2Fb%20c");

        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "1\\labels;x|[y]^z" }))))
            .unwrap();
        assert_eq!(request.path, "/widgets/1%5Clabels%3Bx%7C%5By%5D%5Ez");

        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "v1.2-a_b~c" }))))
            .unwrap();
        assert_eq!(request.path, "/widgets/v1.2-a_b~c");
    }

    #[test]
    fn test_dot_segments_rejected() {
        for value in [".", ".."] {
            let err = GET_WIDGET
                .build_request(Some(&args(json!({ "widget_id": value }))))
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)));
            assert!(err.to_string().contains("widget_id"));
        }

        // Only whole-segment dots are special
        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "..." }))))
            .unwrap();
        assert_eq!(request.path, "/widgets/...");
    }

    #[test]
    fn test_empty_path_segment_rejected() {
        let err = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "" }))))
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": 12345 }))))
            .unwrap();
        assert_eq!(request.path, "/widgets/12345");
    }

    #[test]
    fn test_scalar_coercions() {
        let request = GET_WIDGET
            .build_request(Some(&args(json!({
                "widget_id": "1",
                "limit": "25",
                "include_labels": "FALSE",
                "status": "current"
            }))))
            .unwrap();
        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "current".to_string()),
                ("include-labels".to_string(), "false".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_types_rejected() {
        for bad in [
            json!({ "widget_id": "1", "limit": "many" }),
            json!({ "widget_id": "1", "limit": 2.5 }),
            json!({ "widget_id": "1", "include_labels": "maybe" }),
            json!({ "widget_id": "1", "status": { "a": 1 } }),
            json!({ "widget_id": ["1"] }),
        ] {
            let err = GET_WIDGET.build_request(Some(&args(bad))).unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)));
        }
    }

    #[test]
    fn test_unknown_arguments_ignored() {
        let request = GET_WIDGET
            .build_request(Some(&args(json!({ "widget_id": "1", "colour": "blue" }))))
            .unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_put_request_body() {
        let request = UPDATE_WIDGET
            .build_request(Some(&args(json!({
                "id": "7",
                "title": "New title",
                "version": "{\"number\": 2}",
                "body": { "representation": "storage", "value": "<p>Hi</p>" }
            }))))
            .unwrap();

        assert_eq!(request.path, "/widgets/7");
        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(json!({
                "id": "7",
                "title": "New title",
                "version": { "number": 2 },
                "body": { "representation": "storage", "value": "<p>Hi</p>" }
            }))
        );
    }

    #[test]
    fn test_object_rejects_non_object_string() {
        let err = UPDATE_WIDGET
            .build_request(Some(&args(json!({ "id": "7", "title": "t", "version": "2" }))))
            .unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_input_schema() {
        let schema = UPDATE_WIDGET.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id", "title"]));
        assert_eq!(schema["properties"]["title"]["type"], "string");
        assert_eq!(schema["properties"]["version"]["type"], "object");
        assert_eq!(schema["properties"]["body"], json!({ "description": "Body." }));

        let schema = GET_WIDGET.input_schema();
        assert_eq!(schema["properties"]["status"]["items"]["type"], "string");
        assert_eq!(
            schema["properties"]["include_labels"]["description"],
            "Include labels."
        );
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = GET_WIDGET.to_tool();
        assert_eq!(tool.name, "get_widget_by_id");
        assert_eq!(
            tool.description.as_deref(),
            Some("Returns a widget.\n\nGET /widgets/{widget_id}")
        );

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.title.as_deref(), Some("Get widget by id"));
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));

        let annotations = UPDATE_WIDGET.annotations();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.idempotent_hint, Some(true));
    }

    #[test]
    fn test_tags() {
        assert!(GET_WIDGET.has_tag("IMPORTANT"));
        assert!(GET_WIDGET.has_tag(" widget "));
        assert!(!UPDATE_WIDGET.has_tag("important"));
    }
}
