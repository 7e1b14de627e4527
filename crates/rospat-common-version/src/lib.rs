// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compile-time build information for the gateway binaries.
//!
//! `rospat-server version`, the startup log line and the OpenAPI document all
//! read from here so they cannot disagree.

use std::fmt;

shadow_rs::shadow!(build);

/// `{os}-{arch}`, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("ROSPAT_PLATFORM");

const UNKNOWN_SHA: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				UNKNOWN_SHA
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}

	/// Whether the build was made from a git checkout.
	pub fn has_git_sha(&self) -> bool {
		self.git_sha != UNKNOWN_SHA
	}
}

/// `0.1.0 (abc1234, linux-x86_64)`
impl fmt::Display for BuildInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}, {})", self.version, self.git_sha, self.platform)
	}
}

/// Package version of the gateway.
pub const fn gateway_version() -> &'static str {
	build::PKG_VERSION
}
