// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the patent search gateway.
//!
//! Each [`ConfigSource`] yields a partial [`ServerConfigLayer`]; layers are
//! merged by [`Precedence`] and then resolved into a validated
//! [`ServerConfig`].
//!
//! ```ignore
//! let config = rospat_server_config::load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use std::path::PathBuf;

use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub logging: LoggingConfig,
	pub search: SearchConfig,
}

impl ServerConfig {
	/// `host:port` for the listener.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Defaults, then [`SYSTEM_CONFIG_PATH`], then `ROSPAT_SERVER_*` variables.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_config_from(TomlSource::system())
}

/// Same as [`load_config`] but reads the TOML layer from `config_path`.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<ServerConfig, ConfigError> {
	load_config_from(TomlSource::new(config_path))
}

fn load_config_from(file: TomlSource) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(file),
		Box::new(EnvSource::process()),
	])
}

/// Merges `sources` in precedence order and resolves the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|source| source.precedence());

	let merged = sources
		.iter()
		.try_fold(ServerConfigLayer::default(), |mut merged, source| {
			debug!(source = source.name(), "applying configuration source");
			merged.merge(source.load()?);
			Ok::<_, ConfigError>(merged)
		})?;

	resolve(merged)
}

fn resolve(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		http: layer.http.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
		search: layer.search.unwrap_or_default().finalize(),
	};

	config.search.validate()?;

	info!(
		addr = %config.socket_addr(),
		upstream_override = config.search.base_url.is_some(),
		default_page_size = config.search.default_page_size,
		max_page_size = config.search.max_page_size,
		"configuration resolved"
	);

	Ok(config)
}
