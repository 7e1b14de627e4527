// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, SearchConfigLayer};

/// Server configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub search: Option<SearchConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_option(&mut self.search, other.search, SearchConfigLayer::merge);
	}
}

fn merge_option<T>(target: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (target.as_mut(), other) {
		(Some(existing), Some(incoming)) => merge(existing, incoming),
		(None, Some(incoming)) => *target = Some(incoming),
		(_, None) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ServerConfigLayer::default();
		let overlay = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9000),
			}),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.http.unwrap().port, Some(9000));
		assert!(base.search.is_none());
	}

	#[test]
	fn test_merge_keeps_fields_not_overridden() {
		let mut base = ServerConfigLayer {
			search: Some(SearchConfigLayer {
				base_url: Some("http://upstream.local/search".to_string()),
				default_page_size: Some(10),
				max_page_size: None,
			}),
			..Default::default()
		};
		let overlay = ServerConfigLayer {
			search: Some(SearchConfigLayer {
				base_url: None,
				default_page_size: Some(25),
				max_page_size: None,
			}),
			..Default::default()
		};
		base.merge(overlay);
		let search = base.search.unwrap();
		assert_eq!(
			search.base_url.as_deref(),
			Some("http://upstream.local/search")
		);
		assert_eq!(search.default_page_size, Some(25));
	}

	#[test]
	fn test_deserialize_full_file() {
		let toml_str = r#"
[http]
host = "127.0.0.1"
port = 3000

[logging]
level = "debug"

[search]
default_page_size = 25
"#;
		let layer: ServerConfigLayer = toml::from_str(toml_str).unwrap();
		assert_eq!(layer.http.unwrap().port, Some(3000));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
		assert_eq!(layer.search.unwrap().default_page_size, Some(25));
	}
}
