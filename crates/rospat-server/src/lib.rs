// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Patent search gateway server.
//!
//! Forwards `/search` queries to the upstream search platform, normalizes
//! its hits into a flat schema and computes next-page bookkeeping. No state
//! is shared between requests beyond the immutable [`AppState`].

pub mod api;
pub mod api_docs;
pub mod error;
pub mod pagination;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::{ErrorResponse, ServerError};
pub use rospat_server_config::ServerConfig;
