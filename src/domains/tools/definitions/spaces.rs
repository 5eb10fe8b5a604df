//! Space tools.
//!
//! Spaces, space properties, space permissions and space roles.

use super::common::{
    BODY_FORMAT, CURSOR, LABEL_PREFIX, LIMIT, PROPERTY_KEY, PROPERTY_VALUE, PROPERTY_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_spaces",
        method: HttpMethod::Get,
        path: "/spaces",
        summary: "Retrieves a list of spaces filtered by criteria such as IDs, keys, type, status, labels, favorited status, and pagination parameters.",
        tags: &["Space"],
        params: &[
            Param::query(
                "ids",
                ParamKind::Array,
                "Filter the results to spaces based on their IDs. Multiple IDs can be specified as a comma-separated list.",
            ),
            Param::query(
                "keys",
                ParamKind::Array,
                "Filter the results to spaces based on their keys. Multiple keys can be specified as a comma-separated list.",
            ),
            Param::query(
                "type",
                ParamKind::String,
                "Filter the results to spaces based on their type.",
            ),
            Param::query(
                "status",
                ParamKind::String,
                "Filter the results to spaces based on their status.",
            ),
            Param::query(
                "labels",
                ParamKind::Array,
                "Filter the results to spaces based on their labels. Multiple labels can be specified as a comma-separated list.",
            ),
            Param::query(
                "favorited_by",
                ParamKind::String,
                "Filter the results to spaces favorited by the user with the specified account ID.",
            )
            .wire("favorited-by"),
            Param::query(
                "not_favorited_by",
                ParamKind::String,
                "Filter the results to spaces NOT favorited by the user with the specified account ID.",
            )
            .wire("not-favorited-by"),
            SORT,
            Param::query(
                "description_format",
                ParamKind::String,
                "The content format type to be returned in the `description` field of the response. If available, the representation will be available under a response field of the same name under the `description` field.",
            )
            .wire("description-format"),
            Param::query(
                "include_icon",
                ParamKind::Boolean,
                "If the icon for the space should be fetched or not.",
            )
            .wire("include-icon"),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_space",
        method: HttpMethod::Post,
        path: "/spaces",
        summary: "Creates a new space resource and returns a success response upon creation.",
        tags: &["Space", "EAP"],
        params: &[
            Param::body(
                "name",
                ParamKind::String,
                "The name of the space to be created.",
            )
            .required(),
            Param::body(
                "key",
                ParamKind::String,
                "The key for the new space. See [Space Keys](https://support.atlassian.com/confluence-cloud/docs/create-a-space/). If the key property is not provided, the alias property is required to be used instead.",
            ),
            Param::body(
                "alias",
                ParamKind::String,
                "This field will be used as the new identifier for the space in confluence page URLs. If the alias property is not provided, the key property is required to be used instead. Maximum 255 alphanumeric characters in length.",
            ),
            Param::body(
                "description",
                ParamKind::Object,
                "The description of the new/updated space. Note, only the 'plain' representation is currently supported.",
            ),
            Param::body(
                "roleAssignments",
                ParamKind::Object,
                "The role assignments for the new space. If none are provided, the Default Space Roles are applied. If roles are provided, the space is created with exactly the provided set of roles. A private space is created if only the creator is assigned to a role and it's the Admin role. At least one Admin role assignment must be specified.",
            ),
        ],
    },
    Endpoint {
        name: "get_space_by_id",
        method: HttpMethod::Get,
        path: "/spaces/{id}",
        summary: "Retrieves a space's details by its ID, optionally including descriptions, icons, operations, properties, permissions, role assignments, and labels based on query parameters.",
        tags: &["Space"],
        params: &[
            Param::path("id", "ID of the space."),
            Param::query(
                "description_format",
                ParamKind::String,
                "The content format type to be returned in the `description` field of the response. If available, the representation will be available under a response field of the same name under the `description` field.",
            )
            .wire("description-format"),
            Param::query(
                "include_icon",
                ParamKind::Boolean,
                "If the icon for the space should be fetched or not.",
            )
            .wire("include-icon"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this space in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes space properties associated with this space in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_permissions",
                ParamKind::Boolean,
                "Includes space permissions associated with this space in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-permissions"),
            Param::query(
                "include_role_assignments",
                ParamKind::Boolean,
                "Includes role assignments associated with this space in the response. This parameter is only accepted for EAP sites. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-role-assignments"),
            Param::query(
                "include_labels",
                ParamKind::Boolean,
                "Includes labels associated with this space in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-labels"),
        ],
    },
    Endpoint {
        name: "get_blog_posts_in_space",
        method: HttpMethod::Get,
        path: "/spaces/{id}/blogposts",
        summary: "Retrieves a list of blog posts associated with a specific space, allowing filtering by status, title, and sorting options.",
        tags: &["Blog Post"],
        params: &[
            Param::path("id", "ID of the space."),
            SORT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the results to blog posts based on their status. By default, `current` is used.",
            ),
            Param::query(
                "title",
                ParamKind::String,
                "Filter the results to blog posts based on their title.",
            ),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_space_labels",
        method: HttpMethod::Get,
        path: "/spaces/{id}/labels",
        summary: "Retrieves a list of labels for a specific space identified by its ID, allowing optional filtering by prefix, sorting, and pagination using query parameters.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the space."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_space_content_labels",
        method: HttpMethod::Get,
        path: "/spaces/{id}/content/labels",
        summary: "Retrieves a list of content labels for a specific space using the provided ID, with optional filtering by prefix, sorting, and pagination.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the space."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_custom_content_by_type_in_space",
        method: HttpMethod::Get,
        path: "/spaces/{id}/custom-content",
        summary: "Retrieves custom content for a specific space, allowing users to filter by type, cursor, and limit, with options for different body formats.",
        tags: &["Custom Content"],
        params: &[
            Param::path("id", "ID of the space."),
            Param::query(
                "type",
                ParamKind::String,
                "The type of custom content being requested.",
            )
            .required(),
            CURSOR,
            LIMIT,
            BODY_FORMAT,
        ],
    },
    Endpoint {
        name: "get_space_operations",
        method: HttpMethod::Get,
        path: "/spaces/{id}/operations",
        summary: "Retrieves a list of operations for a specific space identified by the given ID using the provided API endpoint.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the space."),
        ],
    },
    Endpoint {
        name: "get_pages_in_space",
        method: HttpMethod::Get,
        path: "/spaces/{id}/pages",
        summary: "Retrieves a list of pages for a specified space, allowing filtering by depth, sort order, status, title, body format, and pagination controls.",
        tags: &["Page"],
        params: &[
            Param::path("id", "ID of the space."),
            Param::query(
                "depth",
                ParamKind::String,
                "Filter the results to pages at the root level of the space or to all pages in the space.",
            ),
            SORT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the results to pages based on their status. By default, `current` and `archived` are used.",
            ),
            Param::query(
                "title",
                ParamKind::String,
                "Filter the results to pages based on their title.",
            ),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_space_properties",
        method: HttpMethod::Get,
        path: "/spaces/{space_id}/properties",
        summary: "Retrieves a list of properties for a specified space, optionally filtered by key, with pagination support via cursor and limit parameters.",
        tags: &["Space Properties"],
        params: &[
            Param::path("space_id", "ID of the space."),
            Param::query(
                "key",
                ParamKind::String,
                "The key of the space property to retrieve. This should be used when a user knows the key of their property, but needs to retrieve the id for use in other methods.",
            ),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_space_property",
        method: HttpMethod::Post,
        path: "/spaces/{space_id}/properties",
        summary: "Creates a new property for a specified space using the \"POST\" method, where the space is identified by the `{space-id}` path parameter.",
        tags: &["Space Properties"],
        params: &[
            Param::path("space_id", "ID of the space."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_space_property_by_id",
        method: HttpMethod::Get,
        path: "/spaces/{space_id}/properties/{property_id}",
        summary: "Retrieves the specified property details for a space using the provided space and property identifiers.",
        tags: &["Space Properties"],
        params: &[
            Param::path("space_id", "ID of the space."),
            Param::path("property_id", "ID of the space property."),
        ],
    },
    Endpoint {
        name: "update_space_property_by_id",
        method: HttpMethod::Put,
        path: "/spaces/{space_id}/properties/{property_id}",
        summary: "Updates the specified property within a designated space and returns a success status upon completion.",
        tags: &["Space Properties"],
        params: &[
            Param::path("space_id", "ID of the space."),
            Param::path("property_id", "ID of the space property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_space_property_by_id",
        method: HttpMethod::Delete,
        path: "/spaces/{space_id}/properties/{property_id}",
        summary: "Deletes a property from a specified space using the provided space ID and property ID.",
        tags: &["Space Properties"],
        params: &[
            Param::path("space_id", "ID of the space."),
            Param::path("property_id", "ID of the space property."),
        ],
    },
    Endpoint {
        name: "get_space_permissions_assignments",
        method: HttpMethod::Get,
        path: "/spaces/{id}/permissions",
        summary: "Retrieves the list of permissions assigned to a specific space, supporting pagination via cursor and limit parameters.",
        tags: &["Space Permissions"],
        params: &[
            Param::path("id", "ID of the space."),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_available_space_permissions",
        method: HttpMethod::Get,
        path: "/space-permissions",
        summary: "Retrieves space permissions with pagination support using cursor and limit parameters.",
        tags: &["Space Permissions", "EAP"],
        params: &[
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_available_space_roles",
        method: HttpMethod::Get,
        path: "/space-roles",
        summary: "Retrieves a list of space roles, filtered by space ID, role type, principal ID, and principal type, with options for pagination using a cursor and limit, returning relevant space role information.",
        tags: &["Space Roles", "EAP"],
        params: &[
            Param::query(
                "space_id",
                ParamKind::String,
                "The space ID for which to filter available space roles; if empty, return all available space roles for the tenant.",
            )
            .wire("space-id"),
            Param::query(
                "role_type",
                ParamKind::String,
                "The space role type to filter results by.",
            )
            .wire("role-type"),
            Param::query(
                "principal_id",
                ParamKind::String,
                "The principal ID to filter results by. If specified, a principal-type must also be specified. Paired with a `principal-type` of `ACCESS_CLASS`, valid values include [`anonymous-users`, `jsm-project-admins`, `authenticated-users`, `all-licensed-users`, `all-product-admins`]",
            )
            .wire("principal-id"),
            Param::query(
                "principal_type",
                ParamKind::String,
                "The principal type to filter results by. If specified, a principal-id must also be specified.",
            )
            .wire("principal-type"),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_space_roles_by_id",
        method: HttpMethod::Get,
        path: "/space-roles/{id}",
        summary: "Retrieves space role assignments for a specified space ID, returning role-based permissions and user access details.",
        tags: &["Space Roles", "EAP"],
        params: &[
            Param::path("id", "ID of the space role."),
        ],
    },
    Endpoint {
        name: "get_space_role_assignments",
        method: HttpMethod::Get,
        path: "/spaces/{id}/role-assignments",
        summary: "Retrieves role assignments for a specific space with optional filtering by role type, role ID, principal type, principal ID, and pagination controls.",
        tags: &["Space Roles", "EAP"],
        params: &[
            Param::path("id", "ID of the space."),
            Param::query(
                "role_id",
                ParamKind::String,
                "Filters the returned role assignments to the provided role ID.",
            )
            .wire("role-id"),
            Param::query(
                "role_type",
                ParamKind::String,
                "Filters the returned role assignments to the provided role type.",
            )
            .wire("role-type"),
            Param::query(
                "principal_id",
                ParamKind::String,
                "Filters the returned role assignments to the provided principal id. If specified, a principal-type must also be specified. Paired with a `principal-type` of `ACCESS_CLASS`, valid values include [`anonymous-users`, `jsm-project-admins`, `authenticated-users`, `all-licensed-users`, `all-product-admins`]",
            )
            .wire("principal-id"),
            Param::query(
                "principal_type",
                ParamKind::String,
                "Filters the returned role assignments to the provided principal type. If specified, a principal-id must also be specified.",
            )
            .wire("principal-type"),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "set_space_role_assignments",
        method: HttpMethod::Post,
        path: "/spaces/{id}/role-assignments",
        summary: "Assigns a role to a specific space identified by the path parameter ID and returns the assignment status.",
        tags: &["Space Roles", "EAP"],
        params: &[
            Param::path("id", "ID of the space."),
            Param::body(
                "principal",
                ParamKind::Object,
                "The principal of the role assignment.",
            )
            .required(),
            Param::body(
                "roleId",
                ParamKind::String,
                "The role to which the principal is assigned.",
            ),
        ],
    },
];
