// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.
//!
//! Upstream failures never reach this type: the search handler degrades them
//! to an empty result set.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request parameters.
	#[error("Invalid request: {0}")]
	BadRequest(String),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match self {
			ServerError::BadRequest(message) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse {
					error: "bad_request".to_string(),
					message,
				},
			),
		};

		(status, Json(error_response)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_bad_request_response() {
		let response = ServerError::BadRequest("q must not be empty".into()).into_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
		assert_eq!(parsed.error, "bad_request");
		assert_eq!(parsed.message, "q must not be empty");
	}
}
