//! Database tools.

use super::common::{
    ANCESTORS_LIMIT, CURSOR, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "create_database",
        method: HttpMethod::Post,
        path: "/databases",
        summary: "Creates a new database (optionally with private access restrictions) and returns the operation result.",
        tags: &["Database"],
        params: &[
            Param::query(
                "private",
                ParamKind::Boolean,
                "The database will be private. Only the user who creates this database will have permission to view and edit one.",
            ),
            Param::body("spaceId", ParamKind::String, "ID of the space.")
                .required(),
            Param::body("title", ParamKind::String, "Title of the database."),
            Param::body(
                "parentId",
                ParamKind::String,
                "The parent content ID of the database.",
            ),
        ],
    },
    Endpoint {
        name: "get_database_by_id",
        method: HttpMethod::Get,
        path: "/databases/{id}",
        summary: "Retrieves a database by its ID and optionally includes additional details such as collaborators, direct children, operations, or properties using the specified query parameters.",
        tags: &["Database"],
        params: &[
            Param::path("id", "ID of the database."),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the database.",
            )
            .wire("include-collaborators"),
            Param::query(
                "include_direct_children",
                ParamKind::Boolean,
                "Includes direct children of the database. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-direct-children"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this database in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this database in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
        ],
    },
    Endpoint {
        name: "delete_database",
        method: HttpMethod::Delete,
        path: "/databases/{id}",
        summary: "Deletes a database identified by its ID using the DELETE method, returning a success status of 204 if successful, or error statuses for unauthorized access, invalid requests, or if the database is not found.",
        tags: &["Database"],
        params: &[
            Param::path("id", "ID of the database."),
        ],
    },
    Endpoint {
        name: "get_database_content_properties",
        method: HttpMethod::Get,
        path: "/databases/{id}/properties",
        summary: "Retrieves the properties (columns) of a Notion database identified by its ID, supporting pagination and sorting via query parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the database."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_database_property",
        method: HttpMethod::Post,
        path: "/databases/{id}/properties",
        summary: "Creates a new property in a database using the specified database ID and returns the result.",
        tags: &["Content Properties"],
        params: &[
            Param::path("id", "ID of the database."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_database_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/databases/{database_id}/properties/{property_id}",
        summary: "Retrieves specific property details from a designated database using the provided database and property identifiers.",
        tags: &["Content Properties"],
        params: &[
            Param::path("database_id", "ID of the database."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_database_property_by_id",
        method: HttpMethod::Put,
        path: "/databases/{database_id}/properties/{property_id}",
        summary: "Updates a specific property in a database by providing the database ID and property ID, using the PUT method to modify its schema or settings.",
        tags: &["Content Properties"],
        params: &[
            Param::path("database_id", "ID of the database."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_database_property_by_id",
        method: HttpMethod::Delete,
        path: "/databases/{database_id}/properties/{property_id}",
        summary: "Removes a specified property from a database and returns a confirmation response upon success.",
        tags: &["Content Properties"],
        params: &[
            Param::path("database_id", "ID of the database."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_database_operations",
        method: HttpMethod::Get,
        path: "/databases/{id}/operations",
        summary: "Retrieves and performs operations on a specific database by its identifier.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the database."),
        ],
    },
    Endpoint {
        name: "get_database_ancestors",
        method: HttpMethod::Get,
        path: "/databases/{id}/ancestors",
        summary: "Retrieves a list of ancestors for a database specified by its ID, returning them in top-to-bottom order, with optional filtering by a limit parameter.",
        tags: &["Ancestors"],
        params: &[
            Param::path("id", "ID of the database."),
            ANCESTORS_LIMIT,
        ],
    },
];
