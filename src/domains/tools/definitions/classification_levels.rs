//! Classification level tools.

use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_classification_levels",
        method: HttpMethod::Get,
        path: "/classification-levels",
        summary: "Retrieves a list of classification levels using the \"GET\" method at the \"/classification-levels\" path.",
        tags: &["Classification Level"],
        params: &[],
    },
    Endpoint {
        name: "get_space_default_classification_level",
        method: HttpMethod::Get,
        path: "/spaces/{id}/classification-level/default",
        summary: "Retrieves the default classification level for a specified space using its unique identifier.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the space."),
        ],
    },
    Endpoint {
        name: "put_space_default_classification_level",
        method: HttpMethod::Put,
        path: "/spaces/{id}/classification-level/default",
        summary: "Updates the default classification level for a space with the specified ID using the \"PUT\" method via the API endpoint \"/spaces/{id}/classification-level/default.\"",
        tags: &["Classification Level"],
        params: &[
            Param::path_and_body("id", "ID of the space."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "delete_space_default_classification_level",
        method: HttpMethod::Delete,
        path: "/spaces/{id}/classification-level/default",
        summary: "Removes the default classification level from a specified space identified by its ID.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the space."),
        ],
    },
    Endpoint {
        name: "get_page_classification_level",
        method: HttpMethod::Get,
        path: "/pages/{id}/classification-level",
        summary: "Retrieves the classification level for a specified page using the `GET` method, accepting a page ID and an optional status query parameter.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the page."),
            Param::query(
                "status",
                ParamKind::String,
                "Status of page from which classification level will fetched.",
            ),
        ],
    },
    Endpoint {
        name: "put_page_classification_level",
        method: HttpMethod::Put,
        path: "/pages/{id}/classification-level",
        summary: "Updates the classification level of a page with the specified ID using the PUT method.",
        tags: &["Classification Level"],
        params: &[
            Param::path_and_body("id", "ID of the page."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "post_page_classification_level",
        method: HttpMethod::Post,
        path: "/pages/{id}/classification-level/reset",
        summary: "Resets the classification level for a specific page to the default, removing any custom classification settings.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the page."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "get_blog_post_classification_level",
        method: HttpMethod::Get,
        path: "/blogposts/{id}/classification-level",
        summary: "Retrieves the classification level for a specific blog post identified by its ID using the GET method at the \"/blogposts/{id}/classification-level\" endpoint, allowing for optional filtering by status.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the blog post."),
            Param::query(
                "status",
                ParamKind::String,
                "Status of blog post from which classification level will fetched.",
            ),
        ],
    },
    Endpoint {
        name: "put_blog_post_classification_level",
        method: HttpMethod::Put,
        path: "/blogposts/{id}/classification-level",
        summary: "Updates the classification level of the blog post with the specified ID and returns a success status upon completion.",
        tags: &["Classification Level"],
        params: &[
            Param::path_and_body("id", "ID of the blog post."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "post_blog_post_classification_level",
        method: HttpMethod::Post,
        path: "/blogposts/{id}/classification-level/reset",
        summary: "Resets the classification level for a specific blog post to the space's default level using the Confluence REST API.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the blog post."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "get_whiteboard_classification_level",
        method: HttpMethod::Get,
        path: "/whiteboards/{id}/classification-level",
        summary: "Retrieves the classification level of a specific whiteboard identified by its ID, returning relevant information if the request is successful.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
        ],
    },
    Endpoint {
        name: "put_whiteboard_classification_level",
        method: HttpMethod::Put,
        path: "/whiteboards/{id}/classification-level",
        summary: "Updates the classification level for a specific whiteboard identified by its ID using the Confluence Cloud REST API.",
        tags: &["Classification Level"],
        params: &[
            Param::path_and_body("id", "ID of the whiteboard."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "post_whiteboard_classification_level",
        method: HttpMethod::Post,
        path: "/whiteboards/{id}/classification-level/reset",
        summary: "Resets the classification level for a specific whiteboard to the default space classification level using the Confluence Cloud REST API.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the whiteboard."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "get_database_classification_level",
        method: HttpMethod::Get,
        path: "/databases/{id}/classification-level",
        summary: "Retrieves the classification level of a specific database by its unique identifier.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the database."),
        ],
    },
    Endpoint {
        name: "put_database_classification_level",
        method: HttpMethod::Put,
        path: "/databases/{id}/classification-level",
        summary: "Updates the classification level of a database identified by `{id}` using the PUT method.",
        tags: &["Classification Level"],
        params: &[
            Param::path_and_body("id", "ID of the database."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
    Endpoint {
        name: "post_database_classification_level",
        method: HttpMethod::Post,
        path: "/databases/{id}/classification-level/reset",
        summary: "Resets the classification level for a specified database using a POST request and returns an empty response on success.",
        tags: &["Classification Level"],
        params: &[
            Param::path("id", "ID of the database."),
            Param::body("status", ParamKind::String, "Status of the content.")
                .required(),
        ],
    },
];
