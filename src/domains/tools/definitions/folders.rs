//! Folder tools.

use super::common::{
    ANCESTORS_LIMIT, CURSOR, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "create_folder",
        method: HttpMethod::Post,
        path: "/folders",
        summary: "Creates a new folder within a specified parent folder using the POST method and returns details of the newly created folder.",
        tags: &["Folder"],
        params: &[
            Param::body("spaceId", ParamKind::String, "ID of the space.")
                .required(),
            Param::body("title", ParamKind::String, "Title of the folder."),
            Param::body(
                "parentId",
                ParamKind::String,
                "The parent content ID of the folder.",
            ),
        ],
    },
    Endpoint {
        name: "get_folder_by_id",
        method: HttpMethod::Get,
        path: "/folders/{id}",
        summary: "Retrieves a specific folder's details including its collaborators, direct children, operations, and properties based on the provided ID.",
        tags: &["Folder"],
        params: &[
            Param::path("id", "ID of the folder."),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the folder.",
            )
            .wire("include-collaborators"),
            Param::query(
                "include_direct_children",
                ParamKind::Boolean,
                "Includes direct children of the folder. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-direct-children"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this folder in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this folder in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
        ],
    },
    Endpoint {
        name: "delete_folder",
        method: HttpMethod::Delete,
        path: "/folders/{id}",
        summary: "Deletes a folder by its ID using the DELETE method, returning a 204 status code upon successful removal.",
        tags: &["Folder"],
        params: &[
            Param::path("id", "ID of the folder."),
        ],
    },
    Endpoint {
        name: "get_folder_content_properties",
        method: HttpMethod::Get,
        path: "/folders/{id}/properties",
        summary: "Retrieves properties for a folder identified by the provided ID, allowing filtering by key and optional sorting, pagination, and limiting of results.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the folder."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_folder_property",
        method: HttpMethod::Post,
        path: "/folders/{id}/properties",
        summary: "Creates and updates properties for a specific folder identified by `{id}` using the \"POST\" method.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the folder."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_folder_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/folders/{folder_id}/properties/{property_id}",
        summary: "Retrieves a specific property associated with a folder using the folder ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("folder_id", "ID of the folder."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_folder_property_by_id",
        method: HttpMethod::Put,
        path: "/folders/{folder_id}/properties/{property_id}",
        summary: "Updates a specific property of a folder by ID using the specified property identifier.",
        tags: &["Content Properties"],
        params: &[
            Param::path("folder_id", "ID of the folder."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_folder_property_by_id",
        method: HttpMethod::Delete,
        path: "/folders/{folder_id}/properties/{property_id}",
        summary: "Deletes a specific property from a folder using the \"DELETE\" method by providing the folder ID and property ID in the request path.",
        tags: &["Content Properties"],
        params: &[
            Param::path("folder_id", "ID of the folder."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_folder_operations",
        method: HttpMethod::Get,
        path: "/folders/{id}/operations",
        summary: "Retrieves a list of available operations for a specific folder identified by its ID using the GET method.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the folder."),
        ],
    },
    Endpoint {
        name: "get_folder_ancestors",
        method: HttpMethod::Get,
        path: "/folders/{id}/ancestors",
        summary: "Retrieves a flat list of a folder's ancestors starting from its parent up to the root folder.",
        tags: &["Ancestors"],
        params: &[
            Param::path("id", "ID of the folder."),
            ANCESTORS_LIMIT,
        ],
    },
];
