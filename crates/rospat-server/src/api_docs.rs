// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use rospat_server_search_platform::PatentItem;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{search::SearchResponse, status::StatusResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RosPatent Search Gateway",
        description = "Normalized, paginated access to the patent search platform"
    ),
    paths(
        crate::routes::status::status,
        crate::routes::search::search,
    ),
    components(schemas(StatusResponse, SearchResponse, PatentItem, ErrorResponse)),
    tags(
        (name = "status", description = "Liveness"),
        (name = "search", description = "Patent search")
    )
)]
pub struct ApiDoc;
