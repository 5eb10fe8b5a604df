//! Comment tools.
//!
//! Footer and inline comments, their children, likes and versions, and
//! comment content properties.

use super::common::{
    BODY_FORMAT, CURSOR, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE, PROPERTY_VERSION,
    PUBLISHED_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_page_footer_comments",
        method: HttpMethod::Get,
        path: "/pages/{id}/footer-comments",
        summary: "Retrieves comments from the footer section of a specific page identified by its ID, allowing for optional filtering by body format, status, sorting, cursor, and limit.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the page."),
            BODY_FORMAT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the footer comment being retrieved by its status.",
            ),
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_page_inline_comments",
        method: HttpMethod::Get,
        path: "/pages/{id}/inline-comments",
        summary: "Retrieves a list of inline comments for a specific page, allowing customization by body format, status, resolution status, sorting, cursor, and limit, using the API at \"/pages/{id}/inline-comments\" via the GET method.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the page."),
            BODY_FORMAT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the inline comment being retrieved by its status.",
            ),
            Param::query(
                "resolution_status",
                ParamKind::Array,
                "Filter the inline comment being retrieved by its resolution status.",
            )
            .wire("resolution-status"),
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_blog_post_footer_comments",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/footer-comments",
        summary: "Retrieves comments from the footer section of a specific blog post using the \"GET\" method, allowing for customizable output format and sorting options based on query parameters.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the blog post."),
            BODY_FORMAT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the footer comment being retrieved by its status.",
            ),
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_blog_post_inline_comments",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/inline-comments",
        summary: "Retrieves a list of inline comments associated with a specific blog post using the provided parameters for filtering and sorting.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the blog post."),
            BODY_FORMAT,
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the inline comment being retrieved by its status.",
            ),
            Param::query(
                "resolution_status",
                ParamKind::Array,
                "Filter the inline comment being retrieved by its resolution status.",
            )
            .wire("resolution-status"),
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_footer_comments",
        method: HttpMethod::Get,
        path: "/footer-comments",
        summary: "Retrieves a list of comments for the footer, allowing customization through query parameters for body format, sorting, pagination with a cursor, and limiting the number of results.",
        tags: &["Comment"],
        params: &[
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_footer_comment",
        method: HttpMethod::Post,
        path: "/footer-comments",
        summary: "Creates a new footer comment entry and returns a success status upon creation.",
        tags: &["Comment"],
        params: &[
            Param::body(
                "blogPostId",
                ParamKind::String,
                "ID of the containing blog post, if intending to create a top level footer comment. Do not provide if creating a reply.",
            ),
            Param::body(
                "pageId",
                ParamKind::String,
                "ID of the containing page, if intending to create a top level footer comment. Do not provide if creating a reply.",
            ),
            Param::body(
                "parentCommentId",
                ParamKind::String,
                "ID of the parent comment, if intending to create a reply. Do not provide if creating a top level comment.",
            ),
            Param::body(
                "attachmentId",
                ParamKind::String,
                "ID of the attachment, if intending to create a comment against an attachment.",
            ),
            Param::body(
                "customContentId",
                ParamKind::String,
                "ID of the custom content, if intending to create a comment against a custom content.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
        ],
    },
    Endpoint {
        name: "get_footer_comment_by_id",
        method: HttpMethod::Get,
        path: "/footer-comments/{comment_id}",
        summary: "Retrieves information about a specific footer comment using the comment ID, with optional configurations for formatting and included metadata.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the footer comment."),
            BODY_FORMAT,
            PUBLISHED_VERSION,
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this footer comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this footer comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_likes",
                ParamKind::Boolean,
                "Includes likes associated with this footer comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-likes"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this footer comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this footer comment in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
        ],
    },
    Endpoint {
        name: "update_footer_comment",
        method: HttpMethod::Put,
        path: "/footer-comments/{comment_id}",
        summary: "Updates a Confluence footer comment's content and returns a success response.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the footer comment."),
            Param::body(
                "version",
                ParamKind::Object,
                "Version information, e.g. `{\"number\": 2, \"message\": \"...\"}`.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
            Param::body("links", ParamKind::Object, "Links object of the comment.")
                .wire("_links"),
        ],
    },
    Endpoint {
        name: "delete_footer_comment",
        method: HttpMethod::Delete,
        path: "/footer-comments/{comment_id}",
        summary: "Deletes a specific footer comment identified by its ID using the DELETE method, returning a 204 status code upon successful deletion.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the footer comment."),
        ],
    },
    Endpoint {
        name: "get_footer_comment_children",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/children",
        summary: "Retrieves child comments for a specific footer comment with optional filtering, sorting, and pagination parameters.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the footer comment."),
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_footer_like_count",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/likes/count",
        summary: "Retrieves the count of likes for a specific footer comment using the \"GET\" method at the \"/footer-comments/{id}/likes/count\" endpoint.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the footer comment."),
        ],
    },
    Endpoint {
        name: "get_footer_like_users",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/likes/users",
        summary: "Retrieves a list of users who have liked a specific comment with the given ID using the GET method, allowing for pagination through cursor and limit parameters.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the footer comment."),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_footer_comment_operations",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/operations",
        summary: "Retrieves the operations for a specific footer comment identified by the provided ID using the GET method.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the footer comment."),
        ],
    },
    Endpoint {
        name: "get_footer_comment_versions",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/versions",
        summary: "Retrieves and lists versions of a specific comment identified by `{id}` in the footer, allowing customization through query parameters such as format, sorting, and pagination.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the footer comment."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_footer_comment_version_details",
        method: HttpMethod::Get,
        path: "/footer-comments/{id}/versions/{version_number}",
        summary: "Retrieves a specific version of a footer comment by its ID and version number.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the footer comment."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
    Endpoint {
        name: "get_inline_comments",
        method: HttpMethod::Get,
        path: "/inline-comments",
        summary: "Retrieves a paginated list of inline comments with optional parameters for body formatting, sorting, pagination (cursor), and result limit.",
        tags: &["Comment"],
        params: &[
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_inline_comment",
        method: HttpMethod::Post,
        path: "/inline-comments",
        summary: "Creates inline comments on a specified line of a pull request file using the GitHub API and returns the created comment.",
        tags: &["Comment"],
        params: &[
            Param::body(
                "blogPostId",
                ParamKind::String,
                "ID of the containing blog post, if intending to create a top level footer comment. Do not provide if creating a reply.",
            ),
            Param::body(
                "pageId",
                ParamKind::String,
                "ID of the containing page, if intending to create a top level footer comment. Do not provide if creating a reply.",
            ),
            Param::body(
                "parentCommentId",
                ParamKind::String,
                "ID of the parent comment, if intending to create a reply. Do not provide if creating a top level comment.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
            Param::body(
                "inlineCommentProperties",
                ParamKind::Object,
                "Object describing the text to highlight on the page/blog post. Only applicable for top level inline comments (not replies) and required in that case.",
            ),
        ],
    },
    Endpoint {
        name: "get_inline_comment_by_id",
        method: HttpMethod::Get,
        path: "/inline-comments/{comment_id}",
        summary: "Retrieves the specified inline comment by ID, optionally including formatted content and associated metadata.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the inline comment."),
            BODY_FORMAT,
            PUBLISHED_VERSION,
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this inline comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this inline comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_likes",
                ParamKind::Boolean,
                "Includes likes associated with this inline comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-likes"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this inline comment in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this inline comment in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
        ],
    },
    Endpoint {
        name: "update_inline_comment",
        method: HttpMethod::Put,
        path: "/inline-comments/{comment_id}",
        summary: "Updates an inline comment's content in a version control system using the specified comment identifier.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the inline comment."),
            Param::body(
                "version",
                ParamKind::Object,
                "Version information, e.g. `{\"number\": 2, \"message\": \"...\"}`.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
            Param::body(
                "resolved",
                ParamKind::Boolean,
                "Resolved state of the comment. Set to true to resolve the comment, set to false to reopen it. If matching the existing state (i.e. true -> resolved or false -> open/reopened) , no change will occur. A dangling comment cannot be updated.",
            ),
        ],
    },
    Endpoint {
        name: "delete_inline_comment",
        method: HttpMethod::Delete,
        path: "/inline-comments/{comment_id}",
        summary: "Deletes an inline comment specified by its ID using the DELETE method and returns a successful status upon completion.",
        tags: &["Comment"],
        params: &[
            Param::path("comment_id", "ID of the inline comment."),
        ],
    },
    Endpoint {
        name: "get_inline_comment_children",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/children",
        summary: "Retrieves a paginated list of child comments for a specific inline comment, supporting query parameters for formatting, sorting, and pagination.",
        tags: &["Comment"],
        params: &[
            Param::path("id", "ID of the inline comment."),
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_inline_like_count",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/likes/count",
        summary: "Retrieves the total number of likes for a specific inline comment using the API endpoint \"/inline-comments/{id}/likes/count\" via the GET method.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the inline comment."),
        ],
    },
    Endpoint {
        name: "get_inline_like_users",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/likes/users",
        summary: "Retrieves a list of users who have liked an inline comment with the specified ID, with optional pagination using cursor and limit parameters.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the inline comment."),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_inline_comment_operations",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/operations",
        summary: "Retrieves an inline comment by ID from a GitHub repository using the GitHub API.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the inline comment."),
        ],
    },
    Endpoint {
        name: "get_inline_comment_versions",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/versions",
        summary: "Retrieves version history for a specific inline comment, supporting pagination and body formatting options.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the inline comment."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_inline_comment_version_details",
        method: HttpMethod::Get,
        path: "/inline-comments/{id}/versions/{version_number}",
        summary: "Retrieves a specific version of an inline comment by its ID and version number using the GET method.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the inline comment."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
    Endpoint {
        name: "get_comment_content_properties",
        method: HttpMethod::Get,
        path: "/comments/{comment_id}/properties",
        summary: "Retrieves specific properties of a comment using its ID, optionally filtered by key, sorted, and paginated.",
        tags: &["Content Properties"],
        params: &[
            Param::path("comment_id", "ID of the comment."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_comment_property",
        method: HttpMethod::Post,
        path: "/comments/{comment_id}/properties",
        summary: "Updates properties of a comment identified by the given \"comment-id\" using the specified API.",
        tags: &["Content Properties"],
        params: &[
            Param::path("comment_id", "ID of the comment."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_comment_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/comments/{comment_id}/properties/{property_id}",
        summary: "Retrieves the specified property of a comment using the provided comment ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("comment_id", "ID of the comment."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_comment_property_by_id",
        method: HttpMethod::Put,
        path: "/comments/{comment_id}/properties/{property_id}",
        summary: "Updates the specified property of a comment using the provided path parameters and returns a status message.",
        tags: &["Content Properties"],
        params: &[
            Param::path("comment_id", "ID of the comment."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_comment_property_by_id",
        method: HttpMethod::Delete,
        path: "/comments/{comment_id}/properties/{property_id}",
        summary: "Deletes a specific property from a comment using the provided `comment-id` and `property-id`, returning a status code upon successful deletion.",
        tags: &["Content Properties"],
        params: &[
            Param::path("comment_id", "ID of the comment."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
];
