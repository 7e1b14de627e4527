// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search endpoint configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Page size used when `/search` is called without `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest `limit` the search platform accepts per request.
pub const PROVIDER_MAX_PAGE_SIZE: u32 = 25;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub default_page_size: Option<u32>,
	#[serde(default)]
	pub max_page_size: Option<u32>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.default_page_size.is_some() {
			self.default_page_size = other.default_page_size;
		}
		if other.max_page_size.is_some() {
			self.max_page_size = other.max_page_size;
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			base_url: self.base_url,
			default_page_size: self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			max_page_size: self.max_page_size.unwrap_or(PROVIDER_MAX_PAGE_SIZE),
		}
	}
}

/// Search configuration (runtime, fully resolved).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
	/// Upstream endpoint override; `None` means the public search platform.
	pub base_url: Option<String>,
	pub default_page_size: u32,
	pub max_page_size: u32,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			base_url: None,
			default_page_size: DEFAULT_PAGE_SIZE,
			max_page_size: PROVIDER_MAX_PAGE_SIZE,
		}
	}
}

impl SearchConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_page_size == 0 || self.max_page_size > PROVIDER_MAX_PAGE_SIZE {
			return Err(ConfigError::Validation(format!(
				"search.max_page_size must be between 1 and {PROVIDER_MAX_PAGE_SIZE}, got {}",
				self.max_page_size
			)));
		}
		if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
			return Err(ConfigError::Validation(format!(
				"search.default_page_size must be between 1 and {}, got {}",
				self.max_page_size, self.default_page_size
			)));
		}
		Ok(())
	}
}
