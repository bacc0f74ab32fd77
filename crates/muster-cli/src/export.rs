// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Roster export files.
//!
//! `members-verbose.json` holds one record per member with the fields other
//! tooling expects; `members-usernames.json` is the bare name list. Both are
//! replaced on every run.

use std::fs;
use std::path::{Path, PathBuf};

use muster_roster::Member;
use serde::Serialize;
use tracing::info;

use crate::error::RunError;

pub const VERBOSE_FILENAME: &str = "members-verbose.json";
pub const USERNAMES_FILENAME: &str = "members-usernames.json";

#[derive(Debug, Serialize)]
struct VerboseRecord<'a> {
	id: &'a str,
	name: &'a str,
	#[serde(rename = "fullName")]
	full_name: Option<&'a str>,
	deleted: bool,
	updated_unix: i64,
}

/// Writes both export files into `dir` and returns the written paths.
pub fn write_member_exports(dir: &Path, members: &[Member]) -> Result<Vec<PathBuf>, RunError> {
	let verbose: Vec<VerboseRecord> = members
		.iter()
		.map(|m| VerboseRecord {
			id: m.id.as_str(),
			name: &m.name,
			full_name: m.real_name.as_deref(),
			deleted: m.deleted,
			updated_unix: m.updated.timestamp(),
		})
		.collect();
	let usernames: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

	let verbose_path = dir.join(VERBOSE_FILENAME);
	write_json(&verbose_path, &verbose)?;

	let usernames_path = dir.join(USERNAMES_FILENAME);
	write_json(&usernames_path, &usernames)?;

	info!(count = members.len(), dir = %dir.display(), "wrote member exports");
	Ok(vec![verbose_path, usernames_path])
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RunError> {
	let json = serde_json::to_string_pretty(value).map_err(|e| RunError::Export {
		path: path.to_path_buf(),
		source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
	})?;

	fs::write(path, json).map_err(|e| RunError::Export {
		path: path.to_path_buf(),
		source: e,
	})
}
