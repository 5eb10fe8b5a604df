//! Whiteboard tools.

use super::common::{
    ANCESTORS_LIMIT, CURSOR, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "create_whiteboard",
        method: HttpMethod::Post,
        path: "/whiteboards",
        summary: "Creates a new whiteboard with optional privacy settings and returns the result.",
        tags: &["Whiteboard"],
        params: &[
            Param::query(
                "private",
                ParamKind::Boolean,
                "The whiteboard will be private. Only the user who creates this whiteboard will have permission to view and edit one.",
            ),
            Param::body("spaceId", ParamKind::String, "ID of the space.")
                .required(),
            Param::body("title", ParamKind::String, "Title of the whiteboard."),
            Param::body(
                "parentId",
                ParamKind::String,
                "The parent content ID of the whiteboard.",
            ),
            Param::body(
                "templateKey",
                ParamKind::String,
                "Providing a template key will add that template to the new whiteboard.",
            ),
            Param::body(
                "locale",
                ParamKind::String,
                "If you provide a templateKey, the locale determines the language for creating the template. If you omit the locale, the user's locale is used.",
            ),
        ],
    },
    Endpoint {
        name: "get_whiteboard_by_id",
        method: HttpMethod::Get,
        path: "/whiteboards/{id}",
        summary: "Retrieves a specific whiteboard by ID, optionally including additional details such as collaborators, direct children, operations, and properties using query parameters.",
        tags: &["Whiteboard"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the whiteboard.",
            )
            .wire("include-collaborators"),
            Param::query(
                "include_direct_children",
                ParamKind::Boolean,
                "Includes direct children of the whiteboard. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-direct-children"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this whiteboard in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this whiteboard in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
        ],
    },
    Endpoint {
        name: "delete_whiteboard",
        method: HttpMethod::Delete,
        path: "/whiteboards/{id}",
        summary: "Deletes the specified whiteboard by its ID and moves it to the trash.",
        tags: &["Whiteboard"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
        ],
    },
    Endpoint {
        name: "get_whiteboard_content_properties",
        method: HttpMethod::Get,
        path: "/whiteboards/{id}/properties",
        summary: "Retrieves properties for a whiteboard with the specified ID, optionally filtering by key, sorting, and paginating results using a cursor and limit parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_whiteboard_property",
        method: HttpMethod::Post,
        path: "/whiteboards/{id}/properties",
        summary: "Updates the properties of a specific whiteboard using the API at path \"/whiteboards/{id}/properties\" via the POST method.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_whiteboard_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/whiteboards/{whiteboard_id}/properties/{property_id}",
        summary: "Retrieves a specific property from a designated whiteboard using the provided whiteboard and property identifiers.",
        tags: &["Content Properties"],
        params: &[
            Param::path("whiteboard_id", "ID of the whiteboard."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_whiteboard_property_by_id",
        method: HttpMethod::Put,
        path: "/whiteboards/{whiteboard_id}/properties/{property_id}",
        summary: "Updates a specific property of a whiteboard using the \"PUT\" method, specifying the whiteboard and property IDs in the path.",
        tags: &["Content Properties"],
        params: &[
            Param::path("whiteboard_id", "ID of the whiteboard."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_whiteboard_property_by_id",
        method: HttpMethod::Delete,
        path: "/whiteboards/{whiteboard_id}/properties/{property_id}",
        summary: "Deletes a specific property from a whiteboard by ID using the DELETE method.",
        tags: &["Content Properties"],
        params: &[
            Param::path("whiteboard_id", "ID of the whiteboard."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_whiteboard_operations",
        method: HttpMethod::Get,
        path: "/whiteboards/{id}/operations",
        summary: "Retrieves a list of operations for a specific whiteboard identified by its ID using the GET method.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
        ],
    },
    Endpoint {
        name: "get_whiteboard_ancestors",
        method: HttpMethod::Get,
        path: "/whiteboards/{id}/ancestors",
        summary: "Retrieves all ancestors for a specified whiteboard in top-to-bottom order, limited by the `limit` parameter, with minimal details returned for each ancestor.",
        tags: &["Ancestors"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
            ANCESTORS_LIMIT,
        ],
    },
];
