// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a workspace member by the directory service.
///
/// Invitations are always dispatched against ids, never display names, so the
/// id is kept distinct from plain strings throughout the codebase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for MemberId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One entry in the workspace member directory.
///
/// Field names follow the wire format of the directory listing endpoint, so
/// a page of results deserializes straight into `Vec<Member>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
	pub id: MemberId,
	/// Short login-style handle, unique within a workspace.
	pub name: String,
	/// Full display name. Not every account has one set.
	#[serde(default)]
	pub real_name: Option<String>,
	/// Deactivated accounts stay in the directory with this flag set.
	#[serde(default)]
	pub deleted: bool,
	#[serde(default)]
	pub is_bot: bool,
	/// Unix timestamp of the last profile update.
	#[serde(with = "chrono::serde::ts_seconds")]
	pub updated: DateTime<Utc>,
}

impl Member {
	/// Returns `true` for members that can still be invited.
	pub fn is_active(&self) -> bool {
		!self.deleted
	}
}
