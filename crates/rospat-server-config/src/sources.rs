// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where configuration layers come from.
//!
//! Sources are applied lowest [`Precedence`] first, so a value set in the
//! environment beats the TOML file, which beats the built-in defaults.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, LoggingConfigLayer, SearchConfigLayer};

/// Default config file location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/rospat/server.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Contributes nothing; section `finalize` fills the defaults.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer::default())
	}
}

/// A TOML file. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "config file not found, skipping");
				return Ok(ServerConfigLayer::default());
			}
			Err(source) => {
				return Err(ConfigError::FileRead {
					path: self.path.clone(),
					source,
				})
			}
		};

		let layer = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: self.path.clone(),
			source,
		})?;

		trace!(path = %self.path.display(), "parsed config file");
		Ok(layer)
	}
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// `ROSPAT_SERVER_*` variables. Empty values count as unset.
pub struct EnvSource {
	lookup: EnvLookup,
}

impl EnvSource {
	/// Reads the process environment.
	pub fn process() -> Self {
		Self {
			lookup: Box::new(|name| std::env::var(name).ok()),
		}
	}

	/// Reads a fixed set of variables instead of the process environment.
	pub fn from_map(vars: HashMap<String, String>) -> Self {
		Self {
			lookup: Box::new(move |name| vars.get(name).cloned()),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|value| !value.trim().is_empty())
	}

	fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>, ConfigError> {
		self.var(name)
			.map(|raw| {
				raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
					key: name.to_string(),
					message: format!(
						"expected {}, got '{raw}'",
						std::any::type_name::<T>()
					),
				})
			})
			.transpose()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: self.var("ROSPAT_SERVER_HOST"),
				port: self.parsed("ROSPAT_SERVER_PORT")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: self.var("ROSPAT_SERVER_LOG_LEVEL"),
			}),
			search: Some(SearchConfigLayer {
				base_url: self.var("ROSPAT_SERVER_SEARCH_BASE_URL"),
				default_page_size: self.parsed("ROSPAT_SERVER_SEARCH_DEFAULT_PAGE_SIZE")?,
				max_page_size: self.parsed("ROSPAT_SERVER_SEARCH_MAX_PAGE_SIZE")?,
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn env(pairs: &[(&str, &str)]) -> EnvSource {
		EnvSource::from_map(
			pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		)
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_toml_source_missing_file_is_empty() {
		let layer = TomlSource::new("/nonexistent/server.toml").load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.search.is_none());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[search]\nmax_page_size = 20\n\n[http]\nport = 9191").unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.search.unwrap().max_page_size, Some(20));
		assert_eq!(layer.http.unwrap().port, Some(9191));
	}

	#[test]
	fn test_toml_source_invalid_file_is_an_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[http\nport = ").unwrap();

		let result = TomlSource::new(file.path()).load();
		assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
	}

	#[test]
	fn test_toml_source_directory_is_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = TomlSource::new(dir.path()).load();
		assert!(matches!(result, Err(ConfigError::FileRead { .. })));
	}

	#[test]
	fn test_env_source_reads_all_keys() {
		let layer = env(&[
			("ROSPAT_SERVER_HOST", "127.0.0.1"),
			("ROSPAT_SERVER_PORT", "9000"),
			("ROSPAT_SERVER_LOG_LEVEL", "debug"),
			("ROSPAT_SERVER_SEARCH_BASE_URL", "http://localhost:1234/search"),
			("ROSPAT_SERVER_SEARCH_DEFAULT_PAGE_SIZE", " 5 "),
			("ROSPAT_SERVER_SEARCH_MAX_PAGE_SIZE", "20"),
		])
		.load()
		.unwrap();

		let http = layer.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(http.port, Some(9000));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));

		let search = layer.search.unwrap();
		assert_eq!(search.base_url.as_deref(), Some("http://localhost:1234/search"));
		assert_eq!(search.default_page_size, Some(5));
		assert_eq!(search.max_page_size, Some(20));
	}

	#[test]
	fn test_env_source_empty_value_is_unset() {
		let layer = env(&[("ROSPAT_SERVER_HOST", ""), ("ROSPAT_SERVER_PORT", "  ")])
			.load()
			.unwrap();
		let http = layer.http.unwrap();
		assert!(http.host.is_none());
		assert!(http.port.is_none());
	}

	#[test]
	fn test_env_source_invalid_number_reports_key() {
		match env(&[("ROSPAT_SERVER_PORT", "eighty")]).load() {
			Err(ConfigError::InvalidValue { key, message }) => {
				assert_eq!(key, "ROSPAT_SERVER_PORT");
				assert!(message.contains("eighty"));
			}
			other => panic!("expected InvalidValue, got {other:?}"),
		}
	}
}
