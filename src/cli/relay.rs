//! Relay command - push the whole cache to the webhook

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, println};
use catalog_relay::cache::CacheReader;
use catalog_relay::config::RelayConfig;
use catalog_relay::error::Result;
use catalog_relay::submit::{RelayOptions, RelayReport, run_relay};
use catalog_relay::webhook::{WebhookClient, WebhookSink};

/// Run a relay and print a summary
pub async fn run(config: &RelayConfig, options: &RelayOptions, verbose: bool) -> Result<RelayReport> {
    let reader = CacheReader::new(config.cache_root.clone());
    let client = WebhookClient::from_config(config)?;
    let progress = CliProgress::new(verbose);

    progress.header(client.endpoint(), &config.cache_root.display().to_string());

    let report = run_relay(&reader, &client, &progress, options).await?;
    print_summary(&report, options.dry_run);
    Ok(report)
}

fn print_summary(report: &RelayReport, dry_run: bool) {
    let semesters = report.semesters_visited;
    let plural = if semesters == 1 { "" } else { "s" };

    if report.is_success() {
        if dry_run {
            println!(
                "{} Dry run complete for {} semester{plural}",
                check(),
                semesters.accent()
            );
        } else {
            println!(
                "{} Relayed {} semester{plural} ({} envelopes submitted)",
                check(),
                semesters.accent(),
                report.submitted_count().accent()
            );
        }
        return;
    }

    let failed: Vec<String> = report
        .failed_semesters
        .iter()
        .map(ToString::to_string)
        .collect();
    eprintln!(
        "{} {} of {} semester{plural} failed: {}",
        cross(),
        report.failed_semesters.len().accent().for_stderr(),
        semesters,
        failed.join(", ").error()
    );
    if report.halted {
        eprintln!(
            "  {}",
            "Stopped at the first failure (--fail-fast); later semesters were not sent".warn()
        );
    }
}
