mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::{CommandFactory, Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use fpp_api::{CallContext, Client};
use fpp_config::Config;

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::commands::Session;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "fppctl", &mut std::io::stdout());
            Ok(())
        }

        Command::Config(args) => {
            let cfg = fpp_config::load_config_or_default();
            let format = output_format(&cli.global, &cfg);
            commands::config_cmd::handle(args, format, cli.global.quiet)
        }

        Command::Device(cmd) => {
            let cfg = fpp_config::load_config()?;
            let session = Session {
                client: build_client(&cli.global, &cfg)?,
                ctx: CallContext::from(interrupt_token()),
                format: output_format(&cli.global, &cfg),
                quiet: cli.global.quiet,
            };

            tracing::debug!(command = ?cmd, base_url = %session.client.base_url(), "dispatching command");
            commands::dispatch(cmd, &session).await
        }
    }
}

/// `--output`, else the config default, else table.
fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&cfg.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// A token cancelled on Ctrl-C, so the in-flight call returns promptly.
fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received, cancelling request");
            child.cancel();
        }
    });
    token
}

/// Build the client from `--host`, or the active profile, with `--timeout`
/// overriding either.
fn build_client(global: &GlobalOpts, cfg: &Config) -> Result<Client, CliError> {
    let timeout_override = global.timeout.map(Duration::from_secs);

    if let Some(host) = global.host.as_deref() {
        let timeout =
            timeout_override.unwrap_or_else(|| Duration::from_secs(cfg.defaults.timeout));
        return Ok(fpp_config::build_client(host, timeout)?);
    }

    let name = cfg.active_profile_name(global.profile.as_deref());
    let profile = match cfg.profile(&name) {
        Ok(profile) => profile,
        // Nothing named on the command line and nothing configured.
        Err(_) if global.profile.is_none() && cfg.profiles.is_empty() => {
            return Err(CliError::NoDevice {
                path: fpp_config::config_path().display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let client = match timeout_override {
        Some(timeout) => fpp_config::build_client(&profile.host, timeout)?,
        None => fpp_config::profile_to_client(cfg, profile)?,
    };
    Ok(client)
}
