// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the search platform API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest page the platform serves per request.
pub const MAX_LIMIT: u32 = 25;

/// Request parameters for a platform search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRequest {
	pub query: String,
	pub offset: u64,
	pub limit: u32,
}

impl PlatformRequest {
	/// Creates a new request. `limit` is clamped to 1-25.
	pub fn new(query: impl Into<String>, offset: u64, limit: u32) -> Self {
		Self {
			query: query.into(),
			offset,
			limit: limit.clamp(1, MAX_LIMIT),
		}
	}
}

/// Raw hits and reported total from one platform response.
///
/// Hits are kept as untyped JSON: the platform guarantees nothing about
/// their shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformResponse {
	pub hits: Vec<Value>,
	pub total: Option<u64>,
}

impl PlatformResponse {
	/// Extracts `hits` and `total` from a decoded body.
	///
	/// A missing or non-list `hits` yields no hits; a missing or non-integer
	/// `total` yields `None`.
	pub fn from_value(body: Value) -> Self {
		let total = body.get("total").and_then(Value::as_u64);
		let hits = match body {
			Value::Object(mut map) => match map.remove("hits") {
				Some(Value::Array(hits)) => hits,
				_ => Vec::new(),
			},
			_ => Vec::new(),
		};
		Self { hits, total }
	}
}

/// One normalized patent record.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentItem {
	/// Office + document number + kind, e.g. `RU2712345C1`.
	pub publication_number: Option<String>,
	pub kind: Option<String>,
	/// Publishing office code, e.g. `RU`.
	pub country: Option<String>,
	/// `YYYY-MM-DD`.
	pub publication_date: Option<String>,
	pub application_number: Option<String>,
	pub title_original: Option<String>,
	pub title_ru: Option<String>,
	pub abstract_original: Option<String>,
	pub abstract_ru: Option<String>,
	pub ipc: Option<Vec<String>>,
}
