use std::process::ExitCode;
use tokio::signal;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod error;
mod format;
mod providers;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::provider::RecordApi;
use crate::core::reconciler::{ChangeSpec, DeleteSpec, WriteAction};
use crate::core::{identity, paginator, reconciler};
use crate::error::Error;
use crate::format::{OutputFormat, Verbosity};
use crate::providers::dnsimple::{DnsimpleConfig, DnsimpleProvider, error::map_error};

/// Result of one invocation that did not fail outright.
enum Outcome {
    Done,
    /// Some zones could not be listed; their errors were already reported.
    Partial,
}

fn provider_from(config: &Config) -> Result<DnsimpleProvider, Error> {
    DnsimpleProvider::new(DnsimpleConfig {
        api_url: config.api_url.clone(),
        token: config.token.clone(),
        timeout: config.timeout(),
    })
    .map_err(map_error)
}

async fn render_zone(
    api: &dyn RecordApi,
    account: &str,
    zone: &str,
    cli: &Cli,
    output: OutputFormat,
    verbosity: Verbosity,
) -> Result<String, Error> {
    let mut records = paginator::list_all(api, account, zone, cli.record_type.as_deref()).await?;
    if cli.sort {
        records.sort_by_name();
    }
    format::render(&records, output, verbosity)
}

async fn list_zones(
    api: &dyn RecordApi,
    account: &str,
    cli: &Cli,
    output: OutputFormat,
    verbosity: Verbosity,
) -> Outcome {
    let mut outcome = Outcome::Done;
    for zone in &cli.zones {
        match render_zone(api, account, zone, cli, output, verbosity).await {
            Ok(text) => emit(&text),
            Err(e) => {
                error!(zone = %zone, "listing failed");
                eprintln!("could not get records for {zone}: {e}");
                outcome = Outcome::Partial;
            }
        }
    }
    outcome
}

fn emit(text: &str) {
    print!("{text}");
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }
}

async fn run(cli: Cli) -> Result<Outcome, Error> {
    let output: OutputFormat = cli.format.parse()?;
    let verbosity = Verbosity::from(cli.verbose);

    // Parse write requests before touching the network.
    let change = cli.update.as_deref().map(ChangeSpec::parse).transpose()?;
    let removal = cli.delete.as_deref().map(DeleteSpec::parse).transpose()?;

    let path = config::resolve_path(cli.config.clone(), std::env::var_os(config::CONFIG_ENV))?;
    let config = Config::load(&path)?;
    debug!(path = %path.display(), user = %config.user, "loaded config");
    let provider = provider_from(&config)?;
    let api: &dyn RecordApi = &provider;

    let account = identity::resolve_account(api).await?;

    if cli.list {
        let domains = paginator::list_domains(api, &account).await?;
        emit(&format::render_domains(&domains, verbosity));
        return Ok(Outcome::Done);
    }
    if let Some(spec) = change {
        let written = reconciler::create_or_update(api, &account, &spec).await?;
        match written.action {
            WriteAction::Created => info!(id = %written.id, "record created"),
            WriteAction::Updated => info!(id = %written.id, "record updated"),
        }
        println!("{written}");
        return Ok(Outcome::Done);
    }
    if let Some(spec) = removal {
        let id = reconciler::delete(api, &account, &spec).await?;
        println!("record deleted with id {id}");
        return Ok(Outcome::Done);
    }
    Ok(list_zones(api, &account, &cli, output, verbosity).await)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::parse();
    if !cli.has_action() {
        return match cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to print help: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    tokio::select! {
        result = run(cli) => match result {
            Ok(Outcome::Done) => ExitCode::SUCCESS,
            Ok(Outcome::Partial) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                e.exit_code()
            }
        },
        interrupted = signal::ctrl_c() => {
            match interrupted {
                Ok(()) => warn!("Interrupted, abandoning request"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
            ExitCode::from(130)
        }
    }
}
