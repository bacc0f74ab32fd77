// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use muster_slack::{ConversationKind, SlackError};
use thiserror::Error;

/// Process exit codes. Scripts drive muster, so each failure class gets a
/// stable code.
pub mod exit_code {
	/// Everything requested was done.
	pub const SUCCESS: i32 = 0;
	/// At least one invitation failed, or an export could not be written.
	pub const RUN_FAILED: i32 = 1;
	/// Bad usage. Help output also exits with this code.
	pub const USAGE: i32 = 2;
	/// The member roster could not be fetched.
	pub const ROSTER_FETCH: i32 = 3;
	/// The group or channel could not be created.
	pub const PROVISIONING: i32 = 4;
}

/// Fatal failures of a single run.
///
/// Individual invitation failures are not in here: those are collected as
/// outcomes so the remaining invitations still go out.
#[derive(Debug, Error)]
pub enum RunError {
	#[error("failed to fetch the member roster: {0}")]
	Roster(#[source] SlackError),

	#[error("failed to create {kind} \"{name}\": {source}")]
	Provision {
		kind: ConversationKind,
		name: String,
		source: SlackError,
	},

	#[error("failed to write {}: {source}", path.display())]
	Export {
		path: PathBuf,
		source: std::io::Error,
	},
}

impl RunError {
	/// Process exit code for this failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			RunError::Roster(_) => exit_code::ROSTER_FETCH,
			RunError::Provision { .. } => exit_code::PROVISIONING,
			RunError::Export { .. } => exit_code::RUN_FAILED,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn each_failure_class_has_its_own_exit_code() {
		let roster = RunError::Roster(SlackError::Timeout);
		assert_eq!(roster.exit_code(), exit_code::ROSTER_FETCH);

		let provision = RunError::Provision {
			kind: ConversationKind::Group,
			name: "eng".to_string(),
			source: SlackError::Api {
				method: "groups.create".to_string(),
				code: "name_taken".to_string(),
			},
		};
		assert_eq!(provision.exit_code(), exit_code::PROVISIONING);

		let export = RunError::Export {
			path: PathBuf::from("members-verbose.json"),
			source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
		};
		assert_eq!(export.exit_code(), exit_code::RUN_FAILED);
	}

	#[test]
	fn provision_errors_name_the_conversation() {
		let err = RunError::Provision {
			kind: ConversationKind::Group,
			name: "eng".to_string(),
			source: SlackError::Api {
				method: "groups.create".to_string(),
				code: "name_taken".to_string(),
			},
		};

		let message = err.to_string();
		assert!(message.contains("group"));
		assert!(message.contains("eng"));
		assert!(message.contains("name_taken"));
	}
}
