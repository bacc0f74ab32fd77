// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::Parser;
use muster_cli::error::exit_code;
use muster_cli::Cli;
use muster_common_secret::SecretString;
use muster_slack::SlackClient;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
	// Help output is treated like any other parse failure: print and exit
	// with the usage code so scripts never mistake it for a completed run.
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			let _ = err.print();
			std::process::exit(exit_code::USAGE);
		}
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let client = SlackClient::new(SecretString::new(cli.token.clone()));

	match muster_cli::run(&cli, &client).await {
		Ok(summary) if summary.failed > 0 => {
			error!(failed = summary.failed, invited = summary.invited, "run finished with failures");
			std::process::exit(exit_code::RUN_FAILED);
		}
		Ok(_) => {}
		Err(err) => {
			error!(error = %err, "run failed");
			std::process::exit(err.exit_code());
		}
	}
}
