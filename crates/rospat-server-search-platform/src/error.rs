// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the search platform client.

use thiserror::Error;

/// Errors that can occur when interacting with the search platform.
#[derive(Debug, Error)]
pub enum PlatformError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Invalid or unparseable response from the platform.
	#[error("Invalid response from search platform: {0}")]
	InvalidResponse(String),

	/// The platform returned a non-success status.
	#[error("Search platform error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
