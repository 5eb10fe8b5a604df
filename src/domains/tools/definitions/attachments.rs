//! Attachment tools.
//!
//! Attachments, their labels, versions, footer comments and content properties.

use super::common::{
    BODY_FORMAT, CURSOR, LABEL_PREFIX, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, PUBLISHED_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_attachments",
        method: HttpMethod::Get,
        path: "/attachments",
        summary: "Retrieves a list of attachments based on specified filters like sort order, cursor position, status, media type, filename, and limit, using the GET method.",
        tags: &["Attachment"],
        params: &[
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
        name: "get_attachment_by_id",
        method: HttpMethod::Get,
        path: "/attachments/{id}",
        summary: "Retrieves a specific attachment by ID with optional parameters to include labels, properties, operations, versions, collaborators, or specify a version.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the attachment."),
            PUBLISHED_VERSION,
            Param::query(
                "include_labels",
                ParamKind::Boolean,
                "Includes labels associated with this attachment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-labels"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this attachment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this attachment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this attachment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this attachment in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the attachment.",
            )
            .wire("include-collaborators"),
        ],
    },
    Endpoint {
        name: "delete_attachment",
        method: HttpMethod::Delete,
        path: "/attachments/{id}",
        summary: "Deletes the specified attachment using its unique identifier and optionally purges it permanently.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the attachment."),
            Param::query(
                "purge",
                ParamKind::Boolean,
                "If attempting to purge the attachment.",
            ),
        ],
    },
    Endpoint {
        name: "get_attachment_labels",
        method: HttpMethod::Get,
        path: "/attachments/{id}/labels",
        summary: "Retrieves labels associated with a specific attachment, optionally filtered by prefix, sorted, and paginated using cursor-based pagination.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the attachment."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_attachment_operations",
        method: HttpMethod::Get,
        path: "/attachments/{id}/operations",
        summary: "Retrieves operations associated with a specific attachment using its unique identifier.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the attachment."),
        ],
    },
    Endpoint {
        name: "get_attachment_content_properties",
        method: HttpMethod::Get,
        path: "/attachments/{attachment_id}/properties",
        summary: "Retrieves properties of a specific attachment identified by `attachment-id`, with optional filtering, sorting, and pagination via query parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_attachment_property",
        method: HttpMethod::Post,
        path: "/attachments/{attachment_id}/properties",
        summary: "Creates a new property for the specified attachment and returns the created property.",
        tags: &["Content Properties"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_attachment_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/attachments/{attachment_id}/properties/{property_id}",
        summary: "Retrieves a specific property of an attachment using the provided attachment ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_attachment_property_by_id",
        method: HttpMethod::Put,
        path: "/attachments/{attachment_id}/properties/{property_id}",
        summary: "Updates a specific property for an attachment by its ID and returns the updated result.",
        tags: &["Content Properties"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_attachment_property_by_id",
        method: HttpMethod::Delete,
        path: "/attachments/{attachment_id}/properties/{property_id}",
        summary: "Deletes a specific property from an attachment using the DELETE method, identified by both the attachment ID and the property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_attachment_versions",
        method: HttpMethod::Get,
        path: "/attachments/{id}/versions",
        summary: "Retrieves a list of versions for a specific attachment using the \"id\" parameter and supports query parameters for pagination and sorting.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the attachment."),
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_attachment_version_details",
        method: HttpMethod::Get,
        path: "/attachments/{attachment_id}/versions/{version_number}",
        summary: "Retrieves a specific version of an attachment file using the attachment ID and version number, returning the details of the specified version.",
        tags: &["Version"],
        params: &[
            Param::path("attachment_id", "ID of the attachment."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
    Endpoint {
        name: "get_attachment_comments",
        method: HttpMethod::Get,
        path: "/attachments/{id}/footer-comments",
        summary: "Retrieves paginated footer comments for a specific attachment using query parameters for formatting, pagination, sorting, and version control.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the attachment."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
            Param::query(
                "version",
                ParamKind::Integer,
                "Version number of the attachment to retrieve comments for. If no version provided, retrieves comments for the latest version.",
            ),
        ],
    },
];
