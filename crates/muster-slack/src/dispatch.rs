// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Invitation dispatch with bounded concurrency.

use futures::stream::{self, StreamExt};
use muster_roster::MemberId;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::Conversation;

/// Default number of invitations in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Configuration for invitation dispatch.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
	/// Maximum number of invitations in flight at once. Values below one
	/// are treated as one.
	pub concurrency: usize,
}

impl Default for DispatchConfig {
	fn default() -> Self {
		Self {
			concurrency: DEFAULT_CONCURRENCY,
		}
	}
}

/// Result of one invitation attempt.
#[derive(Debug, Clone)]
pub struct InvitationOutcome {
	pub member_id: MemberId,
	/// Rendered error when the invitation failed, `None` on success.
	pub error: Option<String>,
}

impl InvitationOutcome {
	pub fn succeeded(&self) -> bool {
		self.error.is_none()
	}
}

/// Sends a single invitation.
#[async_trait::async_trait]
pub trait Inviter: Send + Sync {
	async fn invite(&self, conversation: &Conversation, member_id: &MemberId) -> Result<()>;
}

/// Invites every listed member into the conversation.
///
/// Each member gets exactly one invitation attempt. Failures are recorded
/// in the returned outcomes instead of aborting the batch, so one rejected
/// invitation never blocks the rest. The function returns once every
/// attempt has finished, with outcomes in the same order as the input.
pub async fn dispatch_invitations<I>(
	inviter: &I,
	conversation: &Conversation,
	member_ids: Vec<MemberId>,
	config: &DispatchConfig,
) -> Vec<InvitationOutcome>
where
	I: Inviter + ?Sized,
{
	let concurrency = config.concurrency.max(1);
	let total = member_ids.len();

	let outcomes: Vec<InvitationOutcome> = stream::iter(member_ids)
		.map(|member_id| async move {
			match inviter.invite(conversation, &member_id).await {
				Ok(()) => InvitationOutcome {
					member_id,
					error: None,
				},
				Err(e) => {
					warn!(member = %member_id, error = %e, "invitation failed");
					InvitationOutcome {
						member_id,
						error: Some(e.to_string()),
					}
				}
			}
		})
		.buffered(concurrency)
		.collect()
		.await;

	let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
	debug!(total, failed, conversation = %conversation.id, "invitation dispatch complete");

	outcomes
}
