// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod logging;
mod search;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use search::{
	SearchConfig, SearchConfigLayer, DEFAULT_PAGE_SIZE, PROVIDER_MAX_PAGE_SIZE,
};
