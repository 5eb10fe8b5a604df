//! Custom content tools.
//!
//! Custom content is app-defined content hosted in spaces, pages or blog posts.

use super::common::{
    BODY_FORMAT, CURSOR, LABEL_PREFIX, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, PUBLISHED_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_custom_content_by_type",
        method: HttpMethod::Get,
        path: "/custom-content",
        summary: "Retrieves custom content at the specified path \"/custom-content\" using the GET method, allowing for filtering by type, id, space-id, sort order, and pagination with optional cursor and limit parameters.",
        tags: &["Custom Content"],
        params: &[
            Param::query(
                "type",
                ParamKind::String,
                "The type of custom content being requested.",
            )
            .required(),
            Param::query(
                "id",
                ParamKind::Array,
                "Filter the results based on custom content ids. Multiple custom content ids can be specified as a comma-separated list.",
            ),
            Param::query(
                "space_id",
                ParamKind::Array,
                "Filter the results based on space ids. Multiple space ids can be specified as a comma-separated list.",
            )
            .wire("space-id"),
            SORT,
            CURSOR,
            LIMIT,
            BODY_FORMAT,
        ],
    },
    Endpoint {
        name: "create_custom_content",
        method: HttpMethod::Post,
        path: "/custom-content",
        summary: "Creates custom content via a POST request and returns appropriate status codes indicating success or specific errors.",
        tags: &["Custom Content"],
        params: &[
            Param::body("type", ParamKind::String, "Type of custom content.")
                .required(),
            Param::body(
                "status",
                ParamKind::String,
                "The status of the custom content. Defaults to `current` when status not provided.",
            ),
            Param::body("spaceId", ParamKind::String, "ID of the containing space."),
            Param::body("pageId", ParamKind::String, "ID of the containing page."),
            Param::body(
                "blogPostId",
                ParamKind::String,
                "ID of the containing Blog Post.",
            ),
            Param::body(
                "customContentId",
                ParamKind::String,
                "ID of the containing custom content.",
            ),
            Param::body("title", ParamKind::String, "Title of the custom content.")
                .required(),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            )
            .required(),
        ],
    },
    Endpoint {
        name: "get_custom_content_by_id",
        method: HttpMethod::Get,
        path: "/custom-content/{id}",
        summary: "Retrieves custom content by a specified ID using the \"GET\" method, allowing optional formatting and inclusion of additional details such as labels, properties, operations, versions, and collaborators.",
        tags: &["Custom Content"],
        params: &[
            Param::path("id", "ID of the custom content."),
            BODY_FORMAT,
            PUBLISHED_VERSION,
            Param::query(
                "include_labels",
                ParamKind::Boolean,
                "Includes labels associated with this custom content in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-labels"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this custom content in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this custom content in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this custom content in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this custom content in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the custom content.",
            )
            .wire("include-collaborators"),
        ],
    },
    Endpoint {
        name: "update_custom_content",
        method: HttpMethod::Put,
        path: "/custom-content/{id}",
        summary: "Updates or replaces a custom content resource identified by the provided ID using the PUT method, returning various status responses based on the request's success or failure.",
        tags: &["Custom Content"],
        params: &[
            Param::path_and_body("id", "ID of the custom content."),
            Param::body("type", ParamKind::String, "Type of custom content.")
                .required(),
            Param::body(
                "status",
                ParamKind::String,
                "The status of the custom content.",
            )
            .required(),
            Param::body("spaceId", ParamKind::String, "ID of the containing space."),
            Param::body("pageId", ParamKind::String, "ID of the containing page."),
            Param::body(
                "blogPostId",
                ParamKind::String,
                "ID of the containing Blog Post.",
            ),
            Param::body(
                "customContentId",
                ParamKind::String,
                "ID of the containing custom content.",
            ),
            Param::body("title", ParamKind::String, "Title of the custom content.")
                .required(),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            )
            .required(),
            Param::body(
                "version",
                ParamKind::Object,
                "Version information, e.g. `{\"number\": 2, \"message\": \"...\"}`.",
            )
            .required(),
        ],
    },
    Endpoint {
        name: "delete_custom_content",
        method: HttpMethod::Delete,
        path: "/custom-content/{id}",
        summary: "Deletes a custom content resource identified by its ID from the system, with an optional query parameter to specify whether to purge the content.",
        tags: &["Custom Content"],
        params: &[
            Param::path("id", "ID of the custom content."),
            Param::query(
                "purge",
                ParamKind::Boolean,
                "If attempting to purge the custom content.",
            ),
        ],
    },
    Endpoint {
        name: "get_custom_content_attachments",
        method: HttpMethod::Get,
        path: "/custom-content/{id}/attachments",
        summary: "Retrieves a list of attachments associated with custom content identified by the given ID, allowing for filtering by sort order, cursor, status, media type, filename, and limiting the number of results.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the custom content."),
            SORT,
            CURSOR,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the results to attachments based on their status. By default, `current` and `archived` are used.",
            ),
            Param::query(
                "mediaType",
                ParamKind::String,
                "Filters on the mediaType of attachments. Only one may be specified.",
            ),
            Param::query(
                "filename",
                ParamKind::String,
                "Filters on the file-name of attachments. Only one may be specified.",
            ),
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_custom_content_comments",
        method: HttpMethod::Get,
        path: "/custom-content/{id}/footer-comments",
        summary: "Retrieves a list of footer comments associated with a specific custom content item using the \"GET\" method, allowing for optional filtering by body format, cursor, limit, and sort order.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the custom content."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_custom_content_labels",
        method: HttpMethod::Get,
        path: "/custom-content/{id}/labels",
        summary: "Retrieves labels for custom content with a specified ID, allowing filtering by prefix, sorting, and pagination using query parameters.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the custom content."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_custom_content_operations",
        method: HttpMethod::Get,
        path: "/custom-content/{id}/operations",
        summary: "Retrieves operational details for a custom content item identified by its ID using the GET method.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the custom content."),
        ],
    },
    Endpoint {
        name: "get_custom_content_content_properties",
        method: HttpMethod::Get,
        path: "/custom-content/{custom_content_id}/properties",
        summary: "Retrieves the properties associated with a specific custom content item by its ID, with optional filtering and pagination via query parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_custom_content_property",
        method: HttpMethod::Post,
        path: "/custom-content/{custom_content_id}/properties",
        summary: "Adds or updates properties for a specified custom content item and returns the operation result.",
        tags: &["Content Properties"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_custom_content_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/custom-content/{custom_content_id}/properties/{property_id}",
        summary: "Retrieves properties of a specific item identified by a custom content ID and property ID using the GET method.",
        tags: &["Content Properties"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_custom_content_property_by_id",
        method: HttpMethod::Put,
        path: "/custom-content/{custom_content_id}/properties/{property_id}",
        summary: "Updates a specific custom property of a custom content item in Confluence and returns the updated property.",
        tags: &["Content Properties"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_custom_content_property_by_id",
        method: HttpMethod::Delete,
        path: "/custom-content/{custom_content_id}/properties/{property_id}",
        summary: "Deletes a specified property from a custom content resource.",
        tags: &["Content Properties"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_custom_content_versions",
        method: HttpMethod::Get,
        path: "/custom-content/{custom_content_id}/versions",
        summary: "Retrieves a paginated list of versions for a specific custom content item, supporting filtering, sorting, and format customization.",
        tags: &["Version"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_custom_content_version_details",
        method: HttpMethod::Get,
        path: "/custom-content/{custom_content_id}/versions/{version_number}",
        summary: "Retrieves a specific version of custom content by its ID and version number using the \"GET\" method.",
        tags: &["Version"],
        params: &[
            Param::path("custom_content_id", "ID of the custom content."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
    Endpoint {
        name: "get_child_custom_content",
        method: HttpMethod::Get,
        path: "/custom-content/{id}/children",
        summary: "Retrieves a list of child content items for a specified custom content item identified by `{id}`, allowing optional filtering by `cursor`, `limit`, and `sort` parameters.",
        tags: &["Children"],
        params: &[
            Param::path("id", "ID of the custom content."),
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
];
