// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One run of the tool: fetch the roster once, then apply every requested
//! mode to it.

use muster_roster::{resolve, MemberId};
use muster_slack::{dispatch_invitations, DispatchConfig, SlackClient};
use tracing::{info, instrument, warn};

use crate::args::Cli;
use crate::error::RunError;
use crate::{export, report};

/// Invitation counts of a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
	pub invited: usize,
	pub failed: usize,
}

/// Executes every mode selected on the command line.
///
/// The roster is fetched exactly once and shared by the print, export and
/// invite modes. Fatal failures come back as [`RunError`]; failures of
/// individual invitations only show up in the summary.
#[instrument(skip(cli, client))]
pub async fn run(cli: &Cli, client: &SlackClient) -> Result<RunSummary, RunError> {
	let members = client.fetch_active_members().await.map_err(RunError::Roster)?;
	info!(count = members.len(), "fetched active member roster");

	if cli.print_members {
		report::print_member_names(&members);
	}
	if cli.print_bots {
		report::print_bot_names(&members);
	}
	if cli.export {
		let written = export::write_member_exports(&cli.export_dir, &members)?;
		report::report_export(&written);
	}

	let Some(group_name) = cli.group.as_deref() else {
		return Ok(RunSummary::default());
	};

	let filter = cli.filter();
	let resolution = resolve(&members, &filter);
	for name in &resolution.unknown_names {
		warn!(name = %name, "no active member with this name");
	}

	// Without an include or exclude list the conversation is still created,
	// but nobody is invited into it.
	let member_ids: Vec<MemberId> = if filter.is_all() {
		warn!(group = %group_name, "no include or exclude list given; nobody will be invited");
		Vec::new()
	} else {
		resolution.ids.iter().cloned().collect()
	};

	let kind = cli.conversation_kind();
	let conversation = client
		.create_conversation(kind, group_name)
		.await
		.map_err(|source| RunError::Provision {
			kind,
			name: group_name.to_string(),
			source,
		})?;
	report::report_created(&conversation);

	let config = DispatchConfig {
		concurrency: cli.concurrency,
	};
	let outcomes = dispatch_invitations(client, &conversation, member_ids, &config).await;
	report::report_outcomes(&members, &conversation, &outcomes);

	let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
	Ok(RunSummary {
		invited: outcomes.len() - failed,
		failed,
	})
}
