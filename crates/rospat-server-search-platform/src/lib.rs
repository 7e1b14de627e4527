// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Patent search platform client for the gateway.
//!
//! This crate provides a typed Rust client for the upstream patent search
//! platform and the normalizer that maps its loosely-shaped hits onto
//! [`PatentItem`].

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{PlatformClient, DATASETS, DEFAULT_BASE_URL};
pub use error::PlatformError;
pub use normalize::{lookup, normalize, normalize_date};
pub use types::{PatentItem, PlatformRequest, PlatformResponse};
