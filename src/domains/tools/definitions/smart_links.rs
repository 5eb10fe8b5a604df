//! Smart Link tools.
//!
//! Smart Links in the content tree live under the `/embeds` resource.

use super::common::{
    ANCESTORS_LIMIT, CURSOR, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "create_smart_link",
        method: HttpMethod::Post,
        path: "/embeds",
        summary: "Creates or processes embedded content via the API and returns a status or the created resource.",
        tags: &["Smart Link"],
        params: &[
            Param::body("spaceId", ParamKind::String, "ID of the space.")
                .required(),
            Param::body(
                "title",
                ParamKind::String,
                "Title of the Smart Link in the content tree.",
            ),
            Param::body(
                "parentId",
                ParamKind::String,
                "The parent content ID of the Smart Link in the content tree.",
            ),
            Param::body(
                "embedUrl",
                ParamKind::String,
                "The URL that the Smart Link in the content tree should be populated with.",
            ),
        ],
    },
    Endpoint {
        name: "get_smart_link_by_id",
        method: HttpMethod::Get,
        path: "/embeds/{id}",
        summary: "Retrieves an embed with the specified ID and optionally includes collaborators, direct children, operations, and properties based on query parameters.",
        tags: &["Smart Link"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the Smart Link.",
            )
            .wire("include-collaborators"),
            Param::query(
                "include_direct_children",
                ParamKind::Boolean,
                "Includes direct children of the Smart Link. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-direct-children"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this Smart Link in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this Smart Link in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
        ],
    },
    Endpoint {
        name: "delete_smart_link",
        method: HttpMethod::Delete,
        path: "/embeds/{id}",
        summary: "Deletes an embed resource by ID and returns a success status upon removal.",
        tags: &["Smart Link"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
        ],
    },
    Endpoint {
        name: "get_smart_link_content_properties",
        method: HttpMethod::Get,
        path: "/embeds/{id}/properties",
        summary: "Retrieves properties for an embed with the specified ID, allowing optional filtering by key, sorting, and pagination using query parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_smart_link_property",
        method: HttpMethod::Post,
        path: "/embeds/{id}/properties",
        summary: "Creates or updates properties for a specific embed using the embed ID and returns the operation status.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_smart_link_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/embeds/{embed_id}/properties/{property_id}",
        summary: "Retrieves the properties of a specific embed using its embed ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("embed_id", "ID of the Smart Link."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_smart_link_property_by_id",
        method: HttpMethod::Put,
        path: "/embeds/{embed_id}/properties/{property_id}",
        summary: "Updates a specific property of an embed using the provided embed ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("embed_id", "ID of the Smart Link."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_smart_link_property_by_id",
        method: HttpMethod::Delete,
        path: "/embeds/{embed_id}/properties/{property_id}",
        summary: "Deletes a specific property from an embed identified by embed-id and property-id.",
        tags: &["Content Properties"],
        params: &[
            Param::path("embed_id", "ID of the Smart Link."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_smart_link_operations",
        method: HttpMethod::Get,
        path: "/embeds/{id}/operations",
        summary: "Retrieves the operations associated with a specific embed identified by {id}.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
        ],
    },
    Endpoint {
        name: "get_smart_link_ancestors",
        method: HttpMethod::Get,
        path: "/embeds/{id}/ancestors",
        summary: "Retrieves a list of ancestors associated with a specified embed ID using a path parameter and an optional query limit.",
        tags: &["Ancestors"],
        params: &[
            Param::path("id", "ID of the Smart Link."),
            ANCESTORS_LIMIT,
        ],
    },
];
