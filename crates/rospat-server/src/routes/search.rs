// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Patent search endpoint.
//!
//! Validates `q`/`page`/`size`, forwards a single request to the search
//! platform and normalizes its hits. Upstream failures of any kind are
//! logged and answered with an empty page, never with a 5xx.

use std::sync::Arc;

use axum::{
	extract::{Query, State},
	Json,
};
use rospat_server_search_platform::{normalize, PatentItem, PlatformRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

use crate::{api::AppState, error::ServerError, pagination::Page};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
	/// Search phrase. Must not be blank.
	pub q: String,
	/// 1-based page number.
	#[param(minimum = 1)]
	pub page: Option<u32>,
	/// Items per page.
	#[param(minimum = 1, maximum = 25)]
	pub size: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Upstream total match count, or the item count when upstream omits it.
	pub total: u64,
	pub page: u32,
	pub size: u32,
	pub next_page: Option<u32>,
	pub items: Vec<PatentItem>,
}

impl SearchResponse {
	fn empty(page: Page) -> Self {
		Self {
			total: 0,
			page: page.page(),
			size: page.size(),
			next_page: None,
			items: Vec::new(),
		}
	}
}

#[utoipa::path(
	get,
	path = "/search",
	params(SearchParams),
	responses(
		(status = 200, description = "Normalized search results (empty on upstream failure)", body = SearchResponse),
		(status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse)
	),
	tag = "search"
)]
/// GET /search - Search patents via the search platform.
#[axum::debug_handler]
pub async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ServerError> {
	let query = params.q.trim().to_string();
	if query.is_empty() {
		warn!("search: rejected blank query");
		return Err(ServerError::BadRequest("q must not be empty".to_string()));
	}

	let page = Page::resolve(
		params.page,
		params.size,
		state.search.default_page_size,
		state.search.max_page_size,
	)?;

	info!(query = %query, page = page.page(), size = page.size(), "search: forwarding request");

	let request = PlatformRequest::new(query.clone(), page.offset(), page.size());
	let client = Arc::clone(&state.platform);

	// Runs to completion even if the caller disconnects.
	let outcome = tokio::spawn(async move { client.search(request).await }).await;

	let upstream = match outcome {
		Ok(Ok(response)) => response,
		Ok(Err(e)) => {
			warn!(error = %e, query = %query, "search: upstream request failed, returning empty page");
			return Ok(Json(SearchResponse::empty(page)));
		}
		Err(e) => {
			error!(error = %e, query = %query, "search: upstream task aborted, returning empty page");
			return Ok(Json(SearchResponse::empty(page)));
		}
	};

	let items: Vec<PatentItem> = upstream.hits.iter().map(normalize).collect();
	let total = upstream.total.unwrap_or(items.len() as u64);
	let next_page = page.next_page(total);

	info!(
		query = %query,
		total,
		returned = items.len(),
		next_page = ?next_page,
		"search: request completed"
	);

	Ok(Json(SearchResponse {
		total,
		page: page.page(),
		size: page.size(),
		next_page,
		items,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_response_keeps_page_and_size() {
		let response = SearchResponse::empty(Page::resolve(Some(3), Some(20), 10, 25).unwrap());
		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"total": 0,
				"page": 3,
				"size": 20,
				"nextPage": null,
				"items": []
			})
		);
	}
}
