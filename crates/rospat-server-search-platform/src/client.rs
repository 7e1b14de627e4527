// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search platform API client implementation.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rospat_common_http::BrowserProfile;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument, trace};

use crate::error::PlatformError;
use crate::types::{PlatformRequest, PlatformResponse};

pub const DEFAULT_BASE_URL: &str = "https://searchplatform.rospatent.gov.ru/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const ORIGIN: &str = "https://searchplatform.rospatent.gov.ru";
const REFERER: &str = "https://searchplatform.rospatent.gov.ru/";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; RosPatentBot/0.1)";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Collections searched on every request: domestic patents and designs,
/// CIS and Eurasian, plus the major foreign and international offices.
pub const DATASETS: &[&str] = &[
	"ru_till_1994",
	"ru_since_1994",
	"cis",
	"dsgn_ru",
	"ap",
	"cn",
	"ch",
	"au",
	"gb",
	"kr",
	"ca",
	"at",
	"de",
	"es",
	"fr",
	"jp",
	"sg",
	"us",
	"wo",
	"ea",
];

const SORT: &str = "relevance";
const PREFERRED_LANG: &str = "ru";
const HIGHLIGHT_PROFILE: &str = "_searchquery_";
const PRE_TAG: &str = "<span style='background: yellow' class=\"marked-element\">";
const POST_TAG: &str = "</span>";

/// Client for the patent search platform.
#[derive(Debug, Clone)]
pub struct PlatformClient {
	http_client: Client,
	base_url: String,
	timeout: Duration,
}

#[derive(Debug, Serialize)]
struct Highlight {
	profiles: [&'static str; 1],
}

/// Wire body. Field names are the platform's, including its `preffered_lang`
/// spelling.
#[derive(Debug, Serialize)]
struct PlatformApiRequest<'a> {
	qn: &'a str,
	offset: u64,
	limit: u32,
	sort: &'static str,
	preffered_lang: &'static str,
	highlight: Highlight,
	datasets: &'static [&'static str],
	#[serde(rename = "countStatistics")]
	count_statistics: bool,
	include_facets: u8,
	pre_tag: &'static str,
	post_tag: &'static str,
}

impl<'a> PlatformApiRequest<'a> {
	fn new(request: &'a PlatformRequest) -> Self {
		Self {
			qn: &request.query,
			offset: request.offset,
			limit: request.limit,
			sort: SORT,
			preffered_lang: PREFERRED_LANG,
			highlight: Highlight {
				profiles: [HIGHLIGHT_PROFILE],
			},
			datasets: DATASETS,
			count_statistics: true,
			include_facets: 0,
			pre_tag: PRE_TAG,
			post_tag: POST_TAG,
		}
	}
}

fn browser_profile() -> BrowserProfile {
	BrowserProfile::new(ORIGIN, REFERER, USER_AGENT)
}

fn build_http_client(timeout: Duration) -> Client {
	rospat_common_http::builder_with_browser_headers(&browser_profile())
		.expect("static browser headers are valid")
		.timeout(timeout)
		.build()
		.expect("Failed to create HTTP client")
}

impl PlatformClient {
	/// Creates a client for the public search platform.
	pub fn new() -> Self {
		Self {
			http_client: build_http_client(REQUEST_TIMEOUT),
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: REQUEST_TIMEOUT,
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Replaces the request timeout. Tests use this to hit the timeout path
	/// without waiting for the production value.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.http_client = build_http_client(timeout);
		self.timeout = timeout;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Performs a single search request. No retry is attempted.
	#[instrument(skip(self, request), fields(query = %request.query, offset = request.offset, limit = request.limit))]
	pub async fn search(&self, request: PlatformRequest) -> Result<PlatformResponse, PlatformError> {
		let api_request = PlatformApiRequest::new(&request);

		debug!(url = %self.base_url, "Sending search request to platform");

		let response = self
			.http_client
			.post(&self.base_url)
			.header(CONTENT_TYPE, JSON_CONTENT_TYPE)
			.json(&api_request)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return PlatformError::Timeout;
				}
				error!(error = %e, "Network error during platform request");
				PlatformError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from platform");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "Search platform API error");
			return Err(PlatformError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				error!("Timed out reading response body");
				return PlatformError::Timeout;
			}
			error!(error = %e, "Failed to read response body");
			PlatformError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let value: Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse platform response");
			PlatformError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let parsed = PlatformResponse::from_value(value);

		debug!(
			hits = parsed.hits.len(),
			total = ?parsed.total,
			"Search completed successfully"
		);

		Ok(parsed)
	}
}

impl Default for PlatformClient {
	fn default() -> Self {
		Self::new()
	}
}
