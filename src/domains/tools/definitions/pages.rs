//! Page tools.
//!
//! Page CRUD plus the page tree (children, ancestors), likes, labels,
//! versions and content properties.

use super::common::{
    ANCESTORS_LIMIT, BODY_FORMAT, CURSOR, LABEL_PREFIX, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER,
    PROPERTY_VALUE, PROPERTY_VERSION, PUBLISHED_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_pages",
        method: HttpMethod::Get,
        path: "/pages",
        summary: "Retrieves a list of pages based on specified parameters such as ID, space ID, sort order, status, title, body format, cursor, and limit using the GET method at the \"/pages\" endpoint.",
        tags: &["Page", "important"],
        params: &[
            Param::query(
                "id",
                ParamKind::Array,
                "Filter the results based on page ids. Multiple page ids can be specified as a comma-separated list.",
            ),
            Param::query(
                "space_id",
                ParamKind::Array,
                "Filter the results based on space ids. Multiple space ids can be specified as a comma-separated list.",
            )
            .wire("space-id"),
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
        name: "create_page",
        method: HttpMethod::Post,
        path: "/pages",
        summary: "Creates a new page with optional query parameters to specify visibility (private/public), embedding, and root-level placement, returning appropriate status codes.",
        tags: &["Page"],
        params: &[
            Param::query(
                "embedded",
                ParamKind::Boolean,
                "Tag the content as embedded and content will be created in NCS.",
            ),
            Param::query(
                "private",
                ParamKind::Boolean,
                "The page will be private. Only the user who creates this page will have permission to view and edit one.",
            ),
            Param::query(
                "root_level",
                ParamKind::Boolean,
                "The page will be created at the root level of the space (outside the space homepage tree). If true, then a value may not be supplied for the `parentId` body parameter.",
            )
            .wire("root-level"),
            Param::body("spaceId", ParamKind::String, "ID of the space.")
                .required(),
            Param::body(
                "status",
                ParamKind::String,
                "The status of the page, published or draft.",
            ),
            Param::body(
                "title",
                ParamKind::String,
                "Title of the page, required if page status is not draft.",
            ),
            Param::body(
                "parentId",
                ParamKind::String,
                "The parent content ID of the page. If the `root-level` query parameter is set to false and a value is not supplied for this parameter, then the space homepage's ID will be used. If the `root-level` query parameter is set to true, then a value may not be supplied for this parameter.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
        ],
    },
    Endpoint {
        name: "get_page_by_id",
        method: HttpMethod::Get,
        path: "/pages/{id}",
        summary: "Retrieves a specific page by its ID, including optional details such as version history, labels, collaborators, and web resources based on query parameters.",
        tags: &["Page"],
        params: &[
            Param::path("id", "ID of the page."),
            BODY_FORMAT,
            Param::query(
                "get_draft",
                ParamKind::Boolean,
                "Retrieve the draft version of this page.",
            )
            .wire("get-draft"),
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the page being retrieved by its status.",
            ),
            PUBLISHED_VERSION,
            Param::query(
                "include_labels",
                ParamKind::Boolean,
                "Includes labels associated with this page in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-labels"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this page in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this page in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_likes",
                ParamKind::Boolean,
                "Includes likes associated with this page in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-likes"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this page in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this page in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
            Param::query(
                "include_favorited_by_current_user_status",
                ParamKind::Boolean,
                "Includes whether this page has been favorited by the current user.",
            )
            .wire("include-favorited-by-current-user-status"),
            Param::query(
                "include_webresources",
                ParamKind::Boolean,
                "Includes web resources that can be used to render page content on a client.",
            )
            .wire("include-webresources"),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the page.",
            )
            .wire("include-collaborators"),
        ],
    },
    Endpoint {
        name: "update_page",
        method: HttpMethod::Put,
        path: "/pages/{id}",
        summary: "Updates or creates a page resource at the specified ID and returns a status.",
        tags: &["Page"],
        params: &[
            Param::path_and_body("id", "ID of the page."),
            Param::body(
                "status",
                ParamKind::String,
                "The updated status of the page. Note, if you change the status of a page from 'current' to 'draft' and it has an existing draft, the existing draft will be deleted in favor of the updated draft. Additionally, this endpoint can be used to restore a 'trashed' or 'deleted' page to 'current' status. For restoration, page contents will not be updated and only the page status will be changed.",
            )
            .required(),
            Param::body("title", ParamKind::String, "Title of the page.")
                .required(),
            Param::body(
                "spaceId",
                ParamKind::String,
                "ID of the containing space. This currently **does not support moving the page to a different space**.",
            ),
            Param::body(
                "parentId",
                ParamKind::String,
                "ID of the parent page. This allows the page to be moved under a different parent within the same space.",
            ),
            Param::body(
                "ownerId",
                ParamKind::String,
                "Account ID of the page owner. This allows page ownership to be transferred to another user.",
            ),
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
        name: "delete_page",
        method: HttpMethod::Delete,
        path: "/pages/{id}",
        summary: "Deletes a page specified by ID using the DELETE method, with optional purge and draft query parameters, returning a successful response if the operation is completed without providing content.",
        tags: &["Page"],
        params: &[
            Param::path("id", "ID of the page."),
            Param::query(
                "purge",
                ParamKind::Boolean,
                "If attempting to purge the page.",
            ),
            Param::query(
                "draft",
                ParamKind::Boolean,
                "If attempting to delete a page that is a draft.",
            ),
        ],
    },
    Endpoint {
        name: "get_page_attachments",
        method: HttpMethod::Get,
        path: "/pages/{id}/attachments",
        summary: "Retrieves a list of attachments for a page with the specified ID, allowing optional sorting, filtering, and pagination based on query parameters.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the page."),
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
        name: "get_custom_content_by_type_in_page",
        method: HttpMethod::Get,
        path: "/pages/{id}/custom-content",
        summary: "Retrieves custom content for a page with the specified ID using the GET method, allowing filtering by type, sorting, pagination, and body format customization.",
        tags: &["Custom Content"],
        params: &[
            Param::path("id", "ID of the page."),
            Param::query(
                "type",
                ParamKind::String,
                "The type of custom content being requested.",
            )
            .required(),
            SORT,
            CURSOR,
            LIMIT,
            BODY_FORMAT,
        ],
    },
    Endpoint {
        name: "get_page_labels",
        method: HttpMethod::Get,
        path: "/pages/{id}/labels",
        summary: "Retrieves a list of labels for a page with the specified ID, optionally filtering by prefix, sorting, and paginating using cursor and limit parameters.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the page."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_page_like_count",
        method: HttpMethod::Get,
        path: "/pages/{id}/likes/count",
        summary: "Retrieves the number of likes for a page identified by the given ID using the GET method.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the page."),
        ],
    },
    Endpoint {
        name: "get_page_like_users",
        method: HttpMethod::Get,
        path: "/pages/{id}/likes/users",
        summary: "Retrieves a list of users who have liked a page with the specified ID using the GET method, with optional parameters for pagination.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the page."),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_page_operations",
        method: HttpMethod::Get,
        path: "/pages/{id}/operations",
        summary: "Retrieves operations associated with a specific page based on the provided ID.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the page."),
        ],
    },
    Endpoint {
        name: "get_page_content_properties",
        method: HttpMethod::Get,
        path: "/pages/{page_id}/properties",
        summary: "Retrieves properties associated with a specific page using the Notion API and returns them based on query parameters like key, sort, cursor, and limit.",
        tags: &["Content Properties"],
        params: &[
            Param::path("page_id", "ID of the page."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_page_property",
        method: HttpMethod::Post,
        path: "/pages/{page_id}/properties",
        summary: "Updates properties for a page using the page ID provided in the path.",
        tags: &["Content Properties"],
        params: &[
            Param::path("page_id", "ID of the page."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_page_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/pages/{page_id}/properties/{property_id}",
        summary: "Retrieves the properties of a specific page element using the page ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("page_id", "ID of the page."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_page_property_by_id",
        method: HttpMethod::Put,
        path: "/pages/{page_id}/properties/{property_id}",
        summary: "Updates a specific property for a given page using the provided path parameters and returns the operation status.",
        tags: &["Content Properties"],
        params: &[
            Param::path("page_id", "ID of the page."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_page_property_by_id",
        method: HttpMethod::Delete,
        path: "/pages/{page_id}/properties/{property_id}",
        summary: "Deletes a specific property from a specified page using the provided page-id and property-id as path parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("page_id", "ID of the page."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_page_versions",
        method: HttpMethod::Get,
        path: "/pages/{id}/versions",
        summary: "Retrieves versions of a page identified by the specified ID, allowing optional filtering by body format, sorting, and pagination using cursor and limit parameters.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the page."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_page_version_details",
        method: HttpMethod::Get,
        path: "/pages/{page_id}/versions/{version_number}",
        summary: "Retrieves a specific version of a page using the provided page ID and version number.",
        tags: &["Version"],
        params: &[
            Param::path("page_id", "ID of the page."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
    Endpoint {
        name: "get_child_pages",
        method: HttpMethod::Get,
        path: "/pages/{id}/children",
        summary: "Retrieves a list of child pages for a given page, identified by the `{id}`, allowing optional filtering by cursor, limit, and sort order.",
        tags: &["Children"],
        params: &[
            Param::path("id", "ID of the page."),
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_page_ancestors",
        method: HttpMethod::Get,
        path: "/pages/{id}/ancestors",
        summary: "Retrieves the hierarchical ancestors of a specified Confluence page in top-to-bottom order, returning minimal page details with optional limit control.",
        tags: &["Ancestors"],
        params: &[
            Param::path("id", "ID of the page."),
            ANCESTORS_LIMIT,
        ],
    },
];
