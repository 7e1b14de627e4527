// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for `rospat-server version`.

use rospat_common_version::BuildInfo;

/// Format version info for display.
pub fn format_version_info() -> String {
	format_build_info(&BuildInfo::current())
}

fn format_build_info(info: &BuildInfo) -> String {
	use chrono::{DateTime, Utc};

	let git_sha = if info.has_git_sha() {
		info.git_sha
	} else {
		"unknown (not built from a git checkout)"
	};

	let mut output = format!(
		"rospat-server version: {}\n\
         Git SHA:               {}\n\
         Built at:              {}\n\
         Platform:              {}",
		info.version, git_sha, info.build_timestamp, info.platform,
	);

	if let Some(age) = DateTime::parse_from_rfc3339(info.build_timestamp)
		.or_else(|_| DateTime::parse_from_str(info.build_timestamp, "%Y-%m-%d %H:%M:%S %:z"))
		.ok()
		.and_then(|built_at| {
			Utc::now()
				.signed_duration_since(built_at.with_timezone(&Utc))
				.to_std()
				.ok()
		}) {
		output.push_str(&format!(
			"\nBuild age:             {}",
			humantime::format_duration(std::time::Duration::from_secs(age.as_secs()))
		));
	}

	output
}
