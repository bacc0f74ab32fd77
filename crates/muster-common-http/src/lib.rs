// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Muster.
//!
//! This crate provides a pre-configured HTTP client builder with a
//! consistent User-Agent header so every outbound call identifies itself
//! the same way, plus a helper that pairs it with a request timeout.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
