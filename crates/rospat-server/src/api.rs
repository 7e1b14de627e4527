// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{routing::get, Router};
use rospat_server_config::{SearchConfig, ServerConfig};
use rospat_server_search_platform::PlatformClient;
use tracing::info;

use crate::routes;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub platform: Arc<PlatformClient>,
	pub search: SearchConfig,
}

impl AppState {
	pub fn new(platform: PlatformClient, search: SearchConfig) -> Self {
		Self {
			platform: Arc::new(platform),
			search,
		}
	}
}

/// Builds the upstream client from configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let mut platform = PlatformClient::new();
	if let Some(base_url) = &config.search.base_url {
		platform = platform.with_base_url(base_url.clone());
	}
	info!(base_url = %platform.base_url(), "search platform client configured");

	AppState::new(platform, config.search.clone())
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/status", get(routes::status::status))
		.route("/search", get(routes::search::search))
		.route("/api-docs/openapi.json", get(routes::docs::openapi_json))
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::Body,
		http::{Request, StatusCode},
	};
	use tower::ServiceExt;

	fn test_app() -> Router {
		// Validation failures must never reach this address.
		let platform = PlatformClient::new().with_base_url("http://127.0.0.1:1/search");
		create_router(AppState::new(platform, SearchConfig::default()))
	}

	async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
		let response = test_app()
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();
		let status = response.status();
		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
		(status, json)
	}

	#[tokio::test]
	async fn test_status_endpoint() {
		let (status, json) = get_json("/status").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(json["status"], "ok");
		assert_eq!(json["service"], "ros");
		assert!(json["time"].is_string());
	}

	#[tokio::test]
	async fn test_search_rejects_blank_query() {
		let (status, json) = get_json("/search?q=%20%20").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(json["error"], "bad_request");
	}

	#[tokio::test]
	async fn test_search_rejects_missing_query() {
		let (status, _) = get_json("/search").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn test_search_rejects_page_zero() {
		let (status, json) = get_json("/search?q=graphene&page=0").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(json["message"].as_str().unwrap().contains("page"));
	}

	#[tokio::test]
	async fn test_search_rejects_oversized_page() {
		let (status, json) = get_json("/search?q=graphene&size=26").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(json["message"].as_str().unwrap().contains("size"));
	}

	#[tokio::test]
	async fn test_search_rejects_non_numeric_page() {
		let (status, _) = get_json("/search?q=graphene&page=two").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn test_search_degrades_when_upstream_unreachable() {
		let (status, json) = get_json("/search?q=graphene&page=2&size=5").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(json["total"], 0);
		assert_eq!(json["page"], 2);
		assert_eq!(json["size"], 5);
		assert!(json["nextPage"].is_null());
		assert_eq!(json["items"], serde_json::json!([]));
	}

	#[tokio::test]
	async fn test_openapi_document_served() {
		let (status, json) = get_json("/api-docs/openapi.json").await;
		assert_eq!(status, StatusCode::OK);
		assert!(json["paths"]["/search"].is_object());
	}
}
