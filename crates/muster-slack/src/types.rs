// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversation types shared by the client and the dispatcher.

use std::fmt;

/// Kind of conversation Muster can provision.
///
/// The kind decides which API method family every call uses, so it is
/// selected once when arguments are parsed and carried along from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationKind {
	/// Private group, the default.
	Group,
	/// Public channel.
	Channel,
}

impl ConversationKind {
	/// API method that creates a conversation of this kind.
	pub fn create_method(self) -> &'static str {
		match self {
			ConversationKind::Group => "groups.create",
			ConversationKind::Channel => "channels.create",
		}
	}

	/// API method that invites a member into a conversation of this kind.
	pub fn invite_method(self) -> &'static str {
		match self {
			ConversationKind::Group => "groups.invite",
			ConversationKind::Channel => "channels.invite",
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ConversationKind::Group => "group",
			ConversationKind::Channel => "channel",
		}
	}
}

impl fmt::Display for ConversationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A provisioned group or channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
	pub id: String,
	pub name: String,
	pub kind: ConversationKind,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_use_the_group_method_family() {
		assert_eq!(ConversationKind::Group.create_method(), "groups.create");
		assert_eq!(ConversationKind::Group.invite_method(), "groups.invite");
	}

	#[test]
	fn channels_use_the_channel_method_family() {
		assert_eq!(ConversationKind::Channel.create_method(), "channels.create");
		assert_eq!(ConversationKind::Channel.invite_method(), "channels.invite");
	}

	#[test]
	fn kinds_display_as_lowercase_nouns() {
		assert_eq!(ConversationKind::Group.to_string(), "group");
		assert_eq!(ConversationKind::Channel.to_string(), "channel");
	}
}
