//! Tool definitions module.
//!
//! One file per Confluence API group. Each file exports a static
//! `ENDPOINTS` table; [`all_endpoints`] concatenates them into the catalog.

pub mod common;

pub mod attachments;
pub mod blogposts;
pub mod classification_levels;
pub mod comments;
pub mod content;
pub mod custom_content;
pub mod data_policies;
pub mod databases;
pub mod folders;
pub mod labels;
pub mod pages;
pub mod smart_links;
pub mod spaces;
pub mod tasks;
pub mod users;
pub mod whiteboards;

use super::endpoint::Endpoint;

const GROUPS: &[&[Endpoint]] = &[
    attachments::ENDPOINTS,
    blogposts::ENDPOINTS,
    content::ENDPOINTS,
    custom_content::ENDPOINTS,
    labels::ENDPOINTS,
    pages::ENDPOINTS,
    whiteboards::ENDPOINTS,
    databases::ENDPOINTS,
    smart_links::ENDPOINTS,
    folders::ENDPOINTS,
    spaces::ENDPOINTS,
    comments::ENDPOINTS,
    tasks::ENDPOINTS,
    users::ENDPOINTS,
    data_policies::ENDPOINTS,
    classification_levels::ENDPOINTS,
];

/// Every endpoint in the catalog, in a stable order.
pub fn all_endpoints() -> impl Iterator<Item = &'static Endpoint> {
    GROUPS.iter().flat_map(|group| group.iter())
}

/// Find an endpoint by tool name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    all_endpoints().find(|endpoint| endpoint.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::{Map, Value, json};

    use super::*;
    use crate::confluence::HttpMethod;
    use crate::domains::tools::endpoint::{Location, Param, ParamKind};

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_endpoints().count(), 187);
    }

    #[test]
    fn test_tool_names_unique() {
        let mut seen = HashSet::new();
        for endpoint in all_endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
    }

    #[test]
    fn test_argument_names_unique_per_tool() {
        for endpoint in all_endpoints() {
            let mut seen = HashSet::new();
            for param in endpoint.params {
                assert!(
                    seen.insert(param.name),
                    "{} declares '{}' twice",
                    endpoint.name,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_path_placeholders_have_params() {
        for endpoint in all_endpoints() {
            let placeholders: Vec<&str> = endpoint
                .path
                .split('/')
                .filter_map(|s| s.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
                .collect();

            for placeholder in &placeholders {
                let param = endpoint
                    .params
                    .iter()
                    .find(|p| p.location.in_path() && p.wire == *placeholder)
                    .unwrap_or_else(|| panic!("{} lacks {}", endpoint.name, placeholder));
                assert!(param.required);
            }

            let path_params = endpoint.params.iter().filter(|p| p.location.in_path());
            assert_eq!(path_params.count(), placeholders.len(), "{}", endpoint.name);
        }
    }

    #[test]
    fn test_body_params_only_on_writes() {
        for endpoint in all_endpoints() {
            if endpoint.params.iter().any(|p| p.location.in_body()) {
                assert!(endpoint.method.sends_body(), "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn test_every_endpoint_has_summary_and_tag() {
        for endpoint in all_endpoints() {
            assert!(!endpoint.summary.is_empty(), "{}", endpoint.name);
            assert!(!endpoint.tags.is_empty(), "{}", endpoint.name);
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.name);
        }
    }

    fn sample(param: &Param) -> Value {
        match param.kind {
            ParamKind::String => json!(format!("v-{}", param.name)),
            ParamKind::Integer => json!(1),
            ParamKind::Boolean => json!(true),
            ParamKind::Array => json!(["a"]),
            ParamKind::Object => json!({ "k": "v" }),
            ParamKind::Any => json!("x"),
        }
    }

    #[test]
    fn test_every_endpoint_builds_with_required_arguments() {
        for endpoint in all_endpoints() {
            let required: Vec<&Param> = endpoint.params.iter().filter(|p| p.required).collect();
            let arguments: Map<String, Value> = required
                .iter()
                .map(|p| (p.name.to_string(), sample(p)))
                .collect();

            let request = endpoint
                .build_request(Some(&arguments))
                .unwrap_or_else(|e| panic!("{}: {}", endpoint.name, e));

            assert_eq!(request.method, endpoint.method, "{}", endpoint.name);
            assert!(!request.path.contains('{'), "{}: {}", endpoint.name, request.path);

            let mut expected_path = endpoint.path.to_string();
            for param in required.iter().filter(|p| p.location.in_path()) {
                let value = format!("v-{}", param.name);
                expected_path = expected_path.replace(&format!("{{{}}}", param.wire), &value);
            }
            assert_eq!(request.path, expected_path, "{}", endpoint.name);

            for param in &required {
                if param.location == Location::Query {
                    assert!(
                        request.query.iter().any(|(k, _)| k == param.wire),
                        "{} missing query '{}'",
                        endpoint.name,
                        param.wire
                    );
                }
                if param.location.in_body() {
                    let body = request
                        .body
                        .as_ref()
                        .unwrap_or_else(|| panic!("{} sent no body", endpoint.name));
                    assert_eq!(body[param.wire], sample(param), "{}", endpoint.name);
                }
            }

            if !endpoint.method.sends_body() {
                assert_eq!(request.body, None, "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn test_find() {
        let endpoint = find("get_page_by_id").unwrap();
        assert_eq!(endpoint.method, HttpMethod::Get);
        assert_eq!(endpoint.path, "/pages/{id}");
        assert!(find("no_such_tool").is_none());
    }

    #[test]
    fn test_get_pages_request() {
        let request = find("get_pages")
            .unwrap()
            .build_request(Some(&args(json!({
                "space_id": ["1", "2"],
                "body_format": "storage",
                "limit": 5
            }))))
            .unwrap();

        assert_eq!(request.path, "/pages");
        assert_eq!(
            request.query,
            vec![
                ("space-id".to_string(), "1,2".to_string()),
                ("body-format".to_string(), "storage".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_page_requires_space_id() {
        let endpoint = find("create_page").unwrap();
        assert!(endpoint.build_request(None).is_err());

        let request = endpoint
            .build_request(Some(&args(json!({
                "spaceId": "123",
                "title": "Hello",
                "private": true
            }))))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.query, vec![("private".to_string(), "true".to_string())]);
        assert_eq!(request.body.unwrap()["spaceId"], "123");
    }

    #[test]
    fn test_delete_has_no_body() {
        let request = find("delete_page")
            .unwrap()
            .build_request(Some(&args(json!({ "id": "9", "purge": true }))))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/pages/9");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_update_page_repeats_id_in_body() {
        let request = find("update_page")
            .unwrap()
            .build_request(Some(&args(json!({
                "id": "9",
                "status": "current",
                "title": "T",
                "body": { "representation": "storage", "value": "<p/>" },
                "version": { "number": 2 }
            }))))
            .unwrap();
        assert_eq!(request.path, "/pages/9");
        let body = request.body.unwrap();
        assert_eq!(body["id"], "9");
        assert_eq!(body["version"]["number"], 2);
    }

    #[test]
    fn test_footer_comment_links_field() {
        let endpoint = find("update_footer_comment").unwrap();
        let links = endpoint.param("links").unwrap();
        assert_eq!(links.wire, "_links");
    }
}
