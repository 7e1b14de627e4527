// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Liveness endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported by `/status`.
pub const SERVICE_NAME: &str = "ros";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
	/// Always `"ok"`.
	pub status: String,
	pub service: String,
	/// Current server time, RFC 3339 UTC.
	pub time: String,
}

#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    ),
    tag = "status"
)]
/// GET /status - Liveness check. Never calls upstream.
pub async fn status() -> Json<StatusResponse> {
	Json(StatusResponse {
		status: "ok".to_string(),
		service: SERVICE_NAME.to_string(),
		time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
	})
}
