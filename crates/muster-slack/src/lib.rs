// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Slack Web API client and invitation dispatch for Muster.
//!
//! [`SlackClient`] wraps the handful of Web API methods Muster needs:
//! listing the member directory (with cursor pagination), creating a group
//! or channel, and inviting a member into one. [`dispatch_invitations`]
//! fans invitations out over a client with bounded concurrency while
//! keeping per-member failures isolated.
//!
//! ```no_run
//! use muster_common_secret::SecretString;
//! use muster_slack::{dispatch_invitations, ConversationKind, DispatchConfig, SlackClient};
//!
//! # async fn demo() -> muster_slack::Result<()> {
//! let client = SlackClient::new(SecretString::new("xoxp-token".to_string()));
//!
//! let members = client.fetch_active_members().await?;
//! let conversation = client
//! 	.create_conversation(ConversationKind::Group, "engineering")
//! 	.await?;
//!
//! let ids = members.into_iter().map(|m| m.id).collect();
//! let outcomes =
//! 	dispatch_invitations(&client, &conversation, ids, &DispatchConfig::default()).await;
//! # Ok(())
//! # }
//! ```

mod client;
mod dispatch;
mod error;
mod types;

pub use client::SlackClient;
pub use dispatch::{
	dispatch_invitations, DispatchConfig, InvitationOutcome, Inviter, DEFAULT_CONCURRENCY,
};
pub use error::{Result, SlackError};
pub use types::{Conversation, ConversationKind};
