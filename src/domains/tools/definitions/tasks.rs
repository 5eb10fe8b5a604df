//! Task tools.

use super::common::{BODY_FORMAT, CURSOR, LIMIT};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_tasks",
        method: HttpMethod::Get,
        path: "/tasks",
        summary: "Retrieves a filtered list of tasks from a specified space, page, or blog post, allowing filtering by status, assignment, creation/due dates, and other criteria.",
        tags: &["Task"],
        params: &[
            BODY_FORMAT,
            Param::query(
                "include_blank_tasks",
                ParamKind::Boolean,
                "Specifies whether to include blank tasks in the response. Defaults to `true`.",
            )
            .wire("include-blank-tasks"),
            Param::query(
                "status",
                ParamKind::String,
                "Filters on the status of the task.",
            ),
            Param::query(
                "task_id",
                ParamKind::Array,
                "Filters on task ID. Multiple IDs can be specified.",
            )
            .wire("task-id"),
            Param::query(
                "space_id",
                ParamKind::Array,
                "Filters on the space ID of the task. Multiple IDs can be specified.",
            )
            .wire("space-id"),
            Param::query(
                "page_id",
                ParamKind::Array,
                "Filters on the page ID of the task. Multiple IDs can be specified. Note - page and blog post filters can be used in conjunction.",
            )
            .wire("page-id"),
            Param::query(
                "blogpost_id",
                ParamKind::Array,
                "Filters on the blog post ID of the task. Multiple IDs can be specified. Note - page and blog post filters can be used in conjunction.",
            )
            .wire("blogpost-id"),
            Param::query(
                "created_by",
                ParamKind::Array,
                "Filters on the Account ID of the user who created this task. Multiple IDs can be specified.",
            )
            .wire("created-by"),
            Param::query(
                "assigned_to",
                ParamKind::Array,
                "Filters on the Account ID of the user to whom this task is assigned. Multiple IDs can be specified.",
            )
            .wire("assigned-to"),
            Param::query(
                "completed_by",
                ParamKind::Array,
                "Filters on the Account ID of the user who completed this task. Multiple IDs can be specified.",
            )
            .wire("completed-by"),
            Param::query(
                "created_at_from",
                ParamKind::Integer,
                "Filters on start of date-time range of task based on creation date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("created-at-from"),
            Param::query(
                "created_at_to",
                ParamKind::Integer,
                "Filters on end of date-time range of task based on creation date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("created-at-to"),
            Param::query(
                "due_at_from",
                ParamKind::Integer,
                "Filters on start of date-time range of task based on due date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("due-at-from"),
            Param::query(
                "due_at_to",
                ParamKind::Integer,
                "Filters on end of date-time range of task based on due date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("due-at-to"),
            Param::query(
                "completed_at_from",
                ParamKind::Integer,
                "Filters on start of date-time range of task based on completion date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("completed-at-from"),
            Param::query(
                "completed_at_to",
                ParamKind::Integer,
                "Filters on end of date-time range of task based on completion date (inclusive). Input is epoch time in milliseconds.",
            )
            .wire("completed-at-to"),
            CURSOR,
            LIMIT,
        ],
    },
    Endpoint {
        name: "get_task_by_id",
        method: HttpMethod::Get,
        path: "/tasks/{id}",
        summary: "Retrieves a specific task by ID and optionally formats the response body based on the body-format query parameter.",
        tags: &["Task"],
        params: &[
            Param::path("id", "ID of the task."),
            BODY_FORMAT,
        ],
    },
];
