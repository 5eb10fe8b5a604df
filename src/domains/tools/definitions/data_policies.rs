//! Data policy tools.

use super::common::{CURSOR, LIMIT, SORT};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_data_policy_metadata",
        method: HttpMethod::Get,
        path: "/data-policies/metadata",
        summary: "Retrieves data policy metadata from a workspace using the Confluence Cloud REST API.",
        tags: &["Data Policies"],
        params: &[],
    },
    Endpoint {
        name: "get_data_policy_spaces",
        method: HttpMethod::Get,
        path: "/data-policies/spaces",
        summary: "Retrieves information about data policies affecting spaces, returning details on whether content is blocked for each space specified by query parameters like `ids`, `keys`, `sort`, `cursor`, and `limit`.",
        tags: &["Data Policies"],
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
            SORT,
            CURSOR,
            LIMIT,
        ],
    },
];
