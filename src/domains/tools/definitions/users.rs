//! User tools.

use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "create_bulk_user_lookup",
        method: HttpMethod::Post,
        path: "/users-bulk",
        summary: "Creates a bulk operation on user data using the POST method at the \"/users-bulk\" endpoint.",
        tags: &["User"],
        params: &[
            Param::body(
                "accountIds",
                ParamKind::Array,
                "List of accountIds to retrieve user info for.",
            )
            .required(),
        ],
    },
    Endpoint {
        name: "check_access_by_email",
        method: HttpMethod::Post,
        path: "/user/access/check-access-by-email",
        summary: "Checks user access by email using a POST request to the \"/user/access/check-access-by-email\" endpoint, returning relevant access information.",
        tags: &["User"],
        params: &[
            Param::body(
                "emails",
                ParamKind::Array,
                "List of emails to check access to site.",
            )
            .required(),
        ],
    },
    Endpoint {
        name: "invite_by_email",
        method: HttpMethod::Post,
        path: "/user/access/invite-by-email",
        summary: "Sends an email invitation to grant user access and returns a success or error status.",
        tags: &["User"],
        params: &[
            Param::body(
                "emails",
                ParamKind::Array,
                "List of emails to check access to site.",
            )
            .required(),
        ],
    },
];
