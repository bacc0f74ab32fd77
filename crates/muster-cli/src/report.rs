// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal output for run results.
//!
//! Diagnostics go to stderr through `tracing`; everything here is the
//! user-facing stdout surface.

use std::collections::HashMap;
use std::path::PathBuf;

use console::style;
use muster_roster::{Member, MemberId};
use muster_slack::{Conversation, InvitationOutcome};

/// Prints the names of all active members, comma separated.
pub fn print_member_names(members: &[Member]) {
	let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
	println!("{}", names.join(", "));
}

/// Prints the names of bot accounts, comma separated.
pub fn print_bot_names(members: &[Member]) {
	let names: Vec<&str> = members
		.iter()
		.filter(|m| m.is_bot)
		.map(|m| m.name.as_str())
		.collect();
	println!("{}", names.join(", "));
}

pub fn report_export(written: &[PathBuf]) {
	for path in written {
		println!("{} Wrote {}", style("→").green(), style(path.display()).cyan());
	}
}

pub fn report_created(conversation: &Conversation) {
	println!(
		"{} Created {} {} ({})",
		style("✓").green().bold(),
		conversation.kind,
		style(&conversation.name).cyan(),
		style(&conversation.id).dim()
	);
}

/// Prints one line per invitation attempt, then a summary line.
pub fn report_outcomes(
	roster: &[Member],
	conversation: &Conversation,
	outcomes: &[InvitationOutcome],
) {
	let names: HashMap<&MemberId, &str> =
		roster.iter().map(|m| (&m.id, m.name.as_str())).collect();

	for outcome in outcomes {
		let label = names
			.get(&outcome.member_id)
			.copied()
			.unwrap_or_else(|| outcome.member_id.as_str());

		match &outcome.error {
			None => println!(
				"{} Invited {} to {}",
				style("✓").green().bold(),
				style(label).cyan(),
				conversation.name
			),
			Some(reason) => println!(
				"{} Failed to invite {}: {}",
				style("!").red().bold(),
				style(label).cyan(),
				reason
			),
		}
	}

	let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
	if failed > 0 {
		println!(
			"{} {} of {} invitations failed",
			style("!").red().bold(),
			failed,
			outcomes.len()
		);
	} else if !outcomes.is_empty() {
		println!(
			"{} Invited {} members to {}",
			style("✓").green().bold(),
			outcomes.len(),
			style(&conversation.name).cyan()
		);
	}
}
