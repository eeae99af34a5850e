//! Freezer inventory CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod logging;
mod table;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{CommandContext, run_add, run_edit, run_list, run_remove};
use crate::logging::{LogConfig, LogFormat, init_logging};

use freezer_model::Config;
use freezer_sync::{DriveClient, DriveSession, SyncService};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let Some(access_token) = cli.access_token.clone() else {
        anyhow::bail!(
            "no access token; pass --access-token or set FREEZER_ACCESS_TOKEN"
        );
    };
    let session = DriveSession::new(cli.token_type.clone(), access_token);
    let client = DriveClient::new(session)?;
    let mut ctx = CommandContext {
        config,
        service: SyncService::new(client),
    };

    match &cli.command {
        Command::List(args) => run_list(&mut ctx, args).await,
        Command::Add(args) => run_add(&mut ctx, args).await,
        Command::Remove(args) => run_remove(&mut ctx, args).await,
        Command::Edit(args) => run_edit(&mut ctx, args).await,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
