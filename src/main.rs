//! catalog-relay - push a cached course catalog to an ingestion webhook
//!
//! CLI binary: one invocation relays semesters, sections and schedules.

use anyhow::{Context, Result};
use catalog_relay::config::{
    DEFAULT_CACHE_ROOT, DEFAULT_ENDPOINT, ENV_CACHE_ROOT, ENV_WEBHOOK_SECRET, ENV_WEBHOOK_URL,
    RelayConfig,
};
use catalog_relay::error::Error;
use catalog_relay::submit::{FailurePolicy, RelayOptions};
use catalog_relay::types::JwId;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser)]
#[command(name = "catalog-relay")]
#[command(about = "Relay cached semesters, sections and schedules to the load-data webhook")]
#[command(version)]
struct Cli {
    /// Webhook endpoint
    #[arg(long, env = ENV_WEBHOOK_URL, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Shared webhook secret, sent as a bearer token
    #[arg(long, env = ENV_WEBHOOK_SECRET, hide_env_values = true)]
    secret: Option<String>,

    /// Root of the scraper cache
    #[arg(long, env = ENV_CACHE_ROOT, default_value = DEFAULT_CACHE_ROOT)]
    cache_root: PathBuf,

    /// Stop at the first semester that fails instead of continuing
    #[arg(long)]
    fail_fast: bool,

    /// Read the cache and show what would be sent, without sending
    #[arg(long)]
    dry_run: bool,

    /// Only relay sections and schedules for this semester (repeatable)
    #[arg(long = "semester", value_name = "JW_ID")]
    semesters: Vec<JwId>,

    /// Verbose output (debug logs, webhook messages)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = match RelayConfig::new(&cli.endpoint, cli.secret, cli.cache_root) {
        Ok(config) => config,
        Err(Error::MissingSecret) => {
            cli::print_setup();
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("invalid configuration"),
    };

    let options = RelayOptions {
        policy: if cli.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        },
        dry_run: cli.dry_run,
        only_semesters: cli.semesters,
    };

    let report = cli::run_relay(&config, &options, cli.verbose)
        .await
        .context("relay aborted")?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CATALOG_RELAY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
