//! Label tools.

use super::common::{BODY_FORMAT, CURSOR, LIMIT, SORT};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_labels",
        method: HttpMethod::Get,
        path: "/labels",
        summary: "Retrieves a list of labels using the \"GET\" method at the \"/labels\" endpoint, allowing filtering by label ID, prefix, sorting, and pagination via query parameters.",
        tags: &["Label"],
        params: &[
            Param::query(
                "label_id",
                ParamKind::Array,
                "Filters on label ID. Multiple IDs can be specified as a comma-separated list.",
            )
            .wire("label-id"),
            Param::query(
                "prefix",
                ParamKind::Array,
                "Filters on label prefix. Multiple IDs can be specified as a comma-separated list.",
            ),
            CURSOR,
            SORT,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_label_attachments",
        method: HttpMethod::Get,
        path: "/labels/{id}/attachments",
        summary: "Retrieves a list of attachments associated with a label identified by the provided ID, allowing for sorting and pagination via query parameters.",
        tags: &["Attachment"],
        params: &[
            Param::path("id", "ID of the label."),
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_label_blog_posts",
        method: HttpMethod::Get,
        path: "/labels/{id}/blogposts",
        summary: "Retrieves a list of blog posts associated with a specific label by ID, allowing optional filtering by space ID, body format, sorting, cursor pagination, and content limit, using the GET method.",
        tags: &["Blog Post"],
        params: &[
            Param::path("id", "ID of the label."),
            Param::query(
                "space_id",
                ParamKind::Array,
                "Filter the results based on space ids. Multiple space ids can be specified as a comma-separated list.",
            )
            .wire("space-id"),
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_label_pages",
        method: HttpMethod::Get,
        path: "/labels/{id}/pages",
        summary: "Retrieves a list of pages associated with a label identified by `{id}`, allowing filtering by space, body format, sorting, and pagination options.",
        tags: &["Page"],
        params: &[
            Param::path("id", "ID of the label."),
            Param::query(
                "space_id",
                ParamKind::Array,
                "Filter the results based on space ids. Multiple space ids can be specified as a comma-separated list.",
            )
            .wire("space-id"),
            BODY_FORMAT,
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
];
