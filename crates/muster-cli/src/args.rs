// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use muster_roster::MembershipFilter;
use muster_slack::ConversationKind;

/// Bulk-invite workspace members into a freshly created group or channel.
///
/// At least one mode flag must be given. The print, export and group modes
/// can be combined freely and share a single roster fetch.
#[derive(Debug, Parser)]
#[command(
	name = "muster",
	about = "Bulk-invite Slack workspace members into groups and channels",
	group(
		ArgGroup::new("mode")
			.required(true)
			.multiple(true)
			.args(["print_members", "print_bots", "export", "group"])
	)
)]
pub struct Cli {
	/// API token used to authenticate every call
	#[arg(long, env = "MUSTER_SLACK_TOKEN", hide_env_values = true)]
	pub token: String,

	/// Print the names of all active members
	#[arg(short = 'p', long)]
	pub print_members: bool,

	/// Print the names of bot accounts
	#[arg(long)]
	pub print_bots: bool,

	/// Write the roster to members-verbose.json and members-usernames.json
	#[arg(long)]
	pub export: bool,

	/// Directory the export files are written into
	#[arg(long, value_name = "DIR", default_value = ".", requires = "export")]
	pub export_dir: PathBuf,

	/// Create a conversation with this name and invite the selected members
	#[arg(short = 'g', long, value_name = "NAME")]
	pub group: Option<String>,

	/// Comma-separated member names to invite
	#[arg(
		short = 'i',
		long,
		value_name = "NAMES",
		requires = "group",
		conflicts_with = "exclude"
	)]
	pub include: Option<String>,

	/// Comma-separated member names to leave out, inviting everyone else
	#[arg(short = 'e', long, value_name = "NAMES", requires = "group")]
	pub exclude: Option<String>,

	/// Create a public channel instead of a private group
	#[arg(long, requires = "group")]
	pub public: bool,

	/// Maximum invitations in flight at once
	#[arg(long, value_name = "N", default_value_t = muster_slack::DEFAULT_CONCURRENCY)]
	pub concurrency: usize,
}

impl Cli {
	/// Membership filter selected by the name-list flags.
	pub fn filter(&self) -> MembershipFilter {
		if let Some(spec) = &self.include {
			MembershipFilter::include(spec)
		} else if let Some(spec) = &self.exclude {
			MembershipFilter::exclude(spec)
		} else {
			MembershipFilter::All
		}
	}

	/// Kind of conversation to provision.
	pub fn conversation_kind(&self) -> ConversationKind {
		if self.public {
			ConversationKind::Channel
		} else {
			ConversationKind::Group
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeSet;

	fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(argv)
	}

	#[test]
	fn parses_a_minimal_invite_command() {
		let cli = parse(&["muster", "--token", "xoxp-t", "-g", "eng", "-i", "alice,bob"]).unwrap();

		assert_eq!(cli.group.as_deref(), Some("eng"));
		let expected: BTreeSet<String> =
			["alice".to_string(), "bob".to_string()].into_iter().collect();
		assert_eq!(cli.filter(), MembershipFilter::Include(expected));
		assert_eq!(cli.conversation_kind(), ConversationKind::Group);
	}

	#[test]
	fn defaults_are_as_documented() {
		let cli = parse(&["muster", "--token", "xoxp-t", "-p"]).unwrap();

		assert!(cli.print_members);
		assert!(!cli.print_bots);
		assert!(!cli.export);
		assert_eq!(cli.export_dir, PathBuf::from("."));
		assert_eq!(cli.concurrency, muster_slack::DEFAULT_CONCURRENCY);
		assert!(!cli.public);
		assert_eq!(cli.filter(), MembershipFilter::All);
	}

	#[test]
	fn include_and_exclude_conflict() {
		let err = parse(&[
			"muster", "--token", "xoxp-t", "-g", "eng", "-i", "alice", "-e", "bob",
		])
		.unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
	}

	#[test]
	fn name_lists_require_a_group() {
		assert!(parse(&["muster", "--token", "xoxp-t", "-i", "alice"]).is_err());
		assert!(parse(&["muster", "--token", "xoxp-t", "-e", "alice"]).is_err());
	}

	#[test]
	fn public_requires_a_group() {
		assert!(parse(&["muster", "--token", "xoxp-t", "-p", "--public"]).is_err());
	}

	#[test]
	fn at_least_one_mode_is_required() {
		let err = parse(&["muster", "--token", "xoxp-t"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
	}

	#[test]
	fn modes_can_be_combined() {
		let cli = parse(&[
			"muster", "--token", "xoxp-t", "-p", "--export", "-g", "eng", "-e", "bob",
		])
		.unwrap();

		assert!(cli.print_members);
		assert!(cli.export);
		assert_eq!(cli.group.as_deref(), Some("eng"));
		let expected: BTreeSet<String> = ["bob".to_string()].into_iter().collect();
		assert_eq!(cli.filter(), MembershipFilter::Exclude(expected));
	}

	#[test]
	fn public_selects_the_channel_kind() {
		let cli = parse(&["muster", "--token", "xoxp-t", "-g", "town-square", "--public"]).unwrap();
		assert_eq!(cli.conversation_kind(), ConversationKind::Channel);
	}

	#[test]
	fn token_can_come_from_the_environment() {
		std::env::set_var("MUSTER_SLACK_TOKEN", "xoxp-from-env");
		let cli = parse(&["muster", "-p"]).unwrap();
		assert_eq!(cli.token, "xoxp-from-env");

		std::env::remove_var("MUSTER_SLACK_TOKEN");
		assert!(parse(&["muster", "-p"]).is_err());
	}

	#[test]
	fn help_is_a_parse_error() {
		let err = parse(&["muster", "--help"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
	}
}
