//! Blog post tools.

use super::common::{
    BODY_FORMAT, CURSOR, LABEL_PREFIX, LIMIT, PROPERTY_KEY, PROPERTY_KEY_FILTER, PROPERTY_VALUE,
    PROPERTY_VERSION, PUBLISHED_VERSION, SORT,
};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_blog_posts",
        method: HttpMethod::Get,
        path: "/blogposts",
        summary: "Retrieves a list of blog posts using the \"GET\" method at the \"/blogposts\" endpoint, allowing filtering by parameters such as ID, space ID, sort order, status, title, and body format.",
        tags: &["Blog Post"],
        params: &[
            Param::query(
                "id",
                ParamKind::Array,
                "Filter the results based on blog post ids. Multiple blog post ids can be specified as a comma-separated list.",
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
        name: "create_blog_post",
        method: HttpMethod::Post,
        path: "/blogposts",
        summary: "Creates a new blog post using the POST method at the \"/blogposts\" endpoint, with an optional parameter to specify whether the post should be private.",
        tags: &["Blog Post"],
        params: &[
            Param::query(
                "private",
                ParamKind::Boolean,
                "The blog post will be private. Only the user who creates this blog post will have permission to view and edit one.",
            ),
            Param::body("spaceId", ParamKind::String, "ID of the space")
                .required(),
            Param::body(
                "status",
                ParamKind::String,
                "The status of the blog post, specifies if the blog post will be created as a new blog post or a draft",
            ),
            Param::body(
                "title",
                ParamKind::String,
                "Title of the blog post, required if creating non-draft.",
            ),
            Param::body(
                "body",
                ParamKind::Any,
                "Body of the content, e.g. `{\"representation\": \"storage\", \"value\": \"<p>...</p>\"}`.",
            ),
            Param::body(
                "createdAt",
                ParamKind::String,
                "Created date of the blog post in the format of \"yyyy-MM-ddTHH:mm:ss.SSSZ\".",
            ),
        ],
    },
    Endpoint {
        name: "get_blog_post_by_id",
        method: HttpMethod::Get,
        path: "/blogposts/{id}",
        summary: "Retrieves a specific blog post by ID, allowing optional filtering by various parameters such as body format, draft status, and inclusion of additional metadata like labels, properties, and collaborators.",
        tags: &["Blog Post"],
        params: &[
            Param::path("id", "ID of the blog post."),
            BODY_FORMAT,
            Param::query(
                "get_draft",
                ParamKind::Boolean,
                "Retrieve the draft version of this blog post.",
            )
            .wire("get-draft"),
            Param::query(
                "status",
                ParamKind::Array,
                "Filter the blog post being retrieved by its status.",
            ),
            PUBLISHED_VERSION,
            Param::query(
                "include_labels",
                ParamKind::Boolean,
                "Includes labels associated with this blog post in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-labels"),
            Param::query(
                "include_properties",
                ParamKind::Boolean,
                "Includes content properties associated with this blog post in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-properties"),
            Param::query(
                "include_operations",
                ParamKind::Boolean,
                "Includes operations associated with this blog post in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-operations"),
            Param::query(
                "include_likes",
                ParamKind::Boolean,
                "Includes likes associated with this blog post in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-likes"),
            Param::query(
                "include_versions",
                ParamKind::Boolean,
                "Includes versions associated with this blog post in the response. At most 50 results are embedded; follow the returned `_links` for the rest.",
            )
            .wire("include-versions"),
            Param::query(
                "include_version",
                ParamKind::Boolean,
                "Includes the current version associated with this blog post in the response. By default this is included and can be omitted by setting the value to `false`.",
            )
            .wire("include-version"),
            Param::query(
                "include_favorited_by_current_user_status",
                ParamKind::Boolean,
                "Includes whether this blog post has been favorited by the current user.",
            )
            .wire("include-favorited-by-current-user-status"),
            Param::query(
                "include_webresources",
                ParamKind::Boolean,
                "Includes web resources that can be used to render blog post content on a client.",
            )
            .wire("include-webresources"),
            Param::query(
                "include_collaborators",
                ParamKind::Boolean,
                "Includes collaborators on the blog post.",
            )
            .wire("include-collaborators"),
        ],
    },
    Endpoint {
        name: "update_blog_post",
        method: HttpMethod::Put,
        path: "/blogposts/{id}",
        summary: "Updates or creates a blog post with the specified ID and returns a status message.",
        tags: &["Blog Post"],
        params: &[
            Param::path_and_body("id", "ID of the blog post."),
            Param::body(
                "status",
                ParamKind::String,
                "The updated status of the blog post. Note, if you change the status of a blog post from 'current' to 'draft' and it has an existing draft, the existing draft will be deleted in favor of the updated draft. Additionally, this endpoint can be used to restore a 'trashed' or 'deleted' blog post to 'current' status. For restoration, blog post contents will not be updated and only the blog post status will be changed.",
            )
            .required(),
            Param::body("title", ParamKind::String, "Title of the blog post.")
                .required(),
            Param::body(
                "spaceId",
                ParamKind::String,
                "ID of the containing space. This currently **does not support moving the blog post to a different space**.",
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
            Param::body(
                "createdAt",
                ParamKind::String,
                "Created date of the blog post in the format of \"yyyy-MM-ddTHH:mm:ss.SSSZ\".",
            ),
        ],
    },
    Endpoint {
        name: "delete_blog_post",
        method: HttpMethod::Delete,
        path: "/blogposts/{id}",
        summary: "Deletes a blog post with the specified ID using the DELETE method, with optional parameters to purge or manage draft status.",
        tags: &["Blog Post"],
        params: &[
            Param::path("id", "ID of the blog post."),
            Param::query(
                "purge",
                ParamKind::Boolean,
                "If attempting to purge the blog post.",
            ),
            Param::query(
                "draft",
                ParamKind::Boolean,
                "If attempting to delete a blog post that is a draft.",
            ),
        ],
    },
    Endpoint {
        name: "get_blogpost_attachments",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/attachments",
        summary: "Retrieves a list of attachments associated with a specific blog post, supporting filtering by status, media type, filename, and pagination via query parameters.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the blog post."),
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
        name: "get_custom_content_by_type_in_blog_post",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/custom-content",
        summary: "Retrieves custom content for a specific blog post using the \"GET\" method with options to filter by type, sort order, and other parameters.",
        tags: &["Custom Content"],
        params: &[
            Param::path("id", "ID of the blog post."),
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
        name: "get_blog_post_labels",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/labels",
        summary: "Retrieves a list of labels associated with a specific blog post, filtered by prefix, sorted, and paginated based on provided query parameters.",
        tags: &["Label"],
        params: &[
            Param::path("id", "ID of the blog post."),
            LABEL_PREFIX,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_blog_post_like_count",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/likes/count",
        summary: "Retrieves the number of likes for a blog post using the specified ID via the GET method.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the blog post."),
        ],
    },
    Endpoint {
        name: "get_blog_post_like_users",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/likes/users",
        summary: "Retrieves a paginated list of users who liked a specific blog post, using cursor-based pagination parameters.",
        tags: &["Like"],
        params: &[
            Param::path("id", "ID of the blog post."),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_blogpost_content_properties",
        method: HttpMethod::Get,
        path: "/blogposts/{blogpost_id}/properties",
        summary: "Retrieves properties of a specific blog post identified by its ID, allowing optional filtering by key, sorting, and pagination using cursor and limit parameters.",
        tags: &["Content Properties"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            PROPERTY_KEY_FILTER,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "create_blogpost_property",
        method: HttpMethod::Post,
        path: "/blogposts/{blogpost_id}/properties",
        summary: "Adds custom properties to a specified blogpost and returns a success or error status.",
        tags: &["Content Properties"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
        ],
    },
    Endpoint {
        name: "get_blogpost_content_properties_by_id",
        method: HttpMethod::Get,
        path: "/blogposts/{blogpost_id}/properties/{property_id}",
        summary: "Retrieves a specific property from a blog post using the provided blogpost and property IDs.",
        tags: &["Content Properties"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "update_blogpost_property_by_id",
        method: HttpMethod::Put,
        path: "/blogposts/{blogpost_id}/properties/{property_id}",
        summary: "Updates the specified property of a blog post using the provided identifiers and returns a status message.",
        tags: &["Content Properties"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            Param::path("property_id", "ID of the content property."),
            PROPERTY_KEY,
            PROPERTY_VALUE,
            PROPERTY_VERSION,
        ],
    },
    Endpoint {
        name: "delete_blogpost_property_by_id",
        method: HttpMethod::Delete,
        path: "/blogposts/{blogpost_id}/properties/{property_id}",
        summary: "Deletes a specific property from a blog post using the blog post ID and property ID.",
        tags: &["Content Properties"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            Param::path("property_id", "ID of the content property."),
        ],
    },
    Endpoint {
        name: "get_blog_post_operations",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/operations",
        summary: "Retrieves operations associated with a specific blog post identified by the provided ID using the GET method.",
        tags: &["Operation"],
        params: &[
            Param::path("id", "ID of the blog post."),
        ],
    },
    Endpoint {
        name: "get_blog_post_versions",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/versions",
        summary: "Retrieves a list of version history entries for a specific blog post, optionally paginated and sorted, with customizable response formatting.",
        tags: &["Version"],
        params: &[
            Param::path("id", "ID of the blog post."),
            BODY_FORMAT,
            CURSOR,
            LIMIT,
            SORT,
        ],
    },
    Endpoint {
        name: "get_blog_post_version_details",
        method: HttpMethod::Get,
        path: "/blogposts/{blogpost_id}/versions/{version_number}",
        summary: "Retrieves a specific version of a blog post identified by its ID and version number using the GET method.",
        tags: &["Version"],
        params: &[
            Param::path("blogpost_id", "ID of the blog post."),
            Param::path("version_number", "Version number to retrieve."),
        ],
    },
];
