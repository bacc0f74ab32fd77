// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Slack Web API client.

use thiserror::Error;

/// Errors that can occur when talking to the Slack Web API.
#[derive(Debug, Error)]
pub enum SlackError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Transport succeeded but the server answered a non-success status.
	#[error("Unexpected HTTP status {status}: {message}")]
	Status { status: u16, message: String },

	/// The API answered `ok: false` with an error code such as `name_taken`.
	#[error("{method} returned {code}")]
	Api { method: String, code: String },

	/// Invalid or unparseable response body.
	#[error("Invalid response from Slack: {0}")]
	InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, SlackError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_errors_name_the_failing_method() {
		let err = SlackError::Api {
			method: "groups.invite".to_string(),
			code: "cant_invite_self".to_string(),
		};
		assert_eq!(err.to_string(), "groups.invite returned cant_invite_self");
	}

	#[test]
	fn status_errors_carry_the_http_status() {
		let err = SlackError::Status {
			status: 503,
			message: "upstream unavailable".to_string(),
		};
		assert!(err.to_string().contains("503"));
		assert!(err.to_string().contains("upstream unavailable"));
	}

	#[test]
	fn timeout_has_a_stable_message() {
		assert_eq!(SlackError::Timeout.to_string(), "Request timed out");
	}
}
