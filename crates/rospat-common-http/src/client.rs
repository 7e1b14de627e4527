// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client builder with a browser-like request fingerprint.

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, ORIGIN, REFERER};
use reqwest::ClientBuilder;
use tracing::trace;

/// Origin, referrer and User-Agent presented to an upstream that rejects
/// requests without a plausible browser fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserProfile {
	pub origin: String,
	pub referer: String,
	pub user_agent: String,
}

impl BrowserProfile {
	pub fn new(
		origin: impl Into<String>,
		referer: impl Into<String>,
		user_agent: impl Into<String>,
	) -> Self {
		Self {
			origin: origin.into(),
			referer: referer.into(),
			user_agent: user_agent.into(),
		}
	}
}

/// Builds the `Origin` / `Referer` default headers for a profile.
///
/// The User-Agent is set on the builder itself, not here.
pub fn browser_headers(profile: &BrowserProfile) -> Result<HeaderMap, InvalidHeaderValue> {
	let mut headers = HeaderMap::new();
	headers.insert(ORIGIN, HeaderValue::from_str(&profile.origin)?);
	headers.insert(REFERER, HeaderValue::from_str(&profile.referer)?);
	Ok(headers)
}

/// Creates a client builder that sends the profile's headers on every request.
///
/// Use this when you need to customize the client further (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let profile = BrowserProfile::new("https://example.org", "https://example.org/", "Mozilla/5.0");
/// let client = rospat_common_http::builder_with_browser_headers(&profile)?
///     .timeout(Duration::from_secs(20))
///     .build()?;
/// ```
pub fn builder_with_browser_headers(
	profile: &BrowserProfile,
) -> Result<ClientBuilder, InvalidHeaderValue> {
	let headers = browser_headers(profile)?;
	trace!(origin = %profile.origin, user_agent = %profile.user_agent, "building browser-profile client");
	Ok(reqwest::Client::builder()
		.user_agent(profile.user_agent.clone())
		.default_headers(headers))
}
