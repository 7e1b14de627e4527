// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the gateway.
//!
//! This crate provides:
//! - A client builder that carries a browser-like header set
//! - The header construction used for upstream origin/referrer checks

mod client;

pub use client::{browser_headers, builder_with_browser_headers, BrowserProfile};
