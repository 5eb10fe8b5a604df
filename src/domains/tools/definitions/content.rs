//! Generic content tools.

use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ParamKind};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "convert_content_ids_to_content_types",
        method: HttpMethod::Post,
        path: "/content/convert-ids-to-types",
        summary: "Converts content IDs to their corresponding types using a POST request and returns appropriate responses based on the conversion outcome.",
        tags: &["Content"],
        params: &[
            Param::body(
                "contentIds",
                ParamKind::Array,
                "The content ids to convert. They may be provided as strings or numbers.",
            )
            .required(),
        ],
    },
];
