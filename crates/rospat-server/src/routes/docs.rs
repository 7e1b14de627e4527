// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI document endpoint.

use axum::Json;
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	let mut doc = ApiDoc::openapi();
	doc.info.version = rospat_common_version::gateway_version().to_string();
	Json(doc)
}
