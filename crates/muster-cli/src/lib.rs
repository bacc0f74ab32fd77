// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Command line interface for Muster.

pub mod args;
pub mod error;
pub mod export;
pub mod report;
pub mod run;

pub use args::Cli;
pub use error::{exit_code, RunError};
pub use run::{run, RunSummary};
