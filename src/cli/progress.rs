//! CLI progress callback with styled output and spinners

use crate::cli::style::{Stream, Stylize, check, cross, dash, hyperlink_url, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use catalog_relay::error::Error;
use catalog_relay::submit::{Phase, ProgressCallback, SkipReason};
use catalog_relay::types::{DataKind, JwId, Semester, SubmitResponse};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to the terminal
///
/// `verbose` also prints the webhook's response message for each envelope.
pub struct CliProgress {
    verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress printer
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }

    /// Print the run header
    pub fn header(&self, endpoint: &str, cache_root: &str) {
        println!(
            "Relaying {} {} {}",
            cache_root.accent(),
            "→".muted(),
            hyperlink_url(Stream::Stdout, endpoint).accent()
        );
        println!();
    }
}

fn target(kind: DataKind, semester_jw_id: Option<JwId>) -> String {
    semester_jw_id.map_or_else(|| kind.to_string(), |id| format!("{kind} for semester {id}"))
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!(),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_semester(&self, semester: &Semester) {
        println!("  {}", semester.label().emphasis());
    }

    async fn on_submitting(&self, kind: DataKind, semester_jw_id: Option<JwId>, records: usize) {
        self.start_spinner(format!(
            "Submitting {records} {}...",
            target(kind, semester_jw_id)
        ));
    }

    async fn on_submitted(
        &self,
        kind: DataKind,
        semester_jw_id: Option<JwId>,
        response: &SubmitResponse,
    ) {
        self.stop_spinner();
        let indent = if semester_jw_id.is_some() { "    " } else { "  " };
        if self.verbose {
            println!(
                "{indent}{} {} {} {}",
                check(),
                "Submitted".success(),
                kind.accent(),
                response.message_or_default().muted()
            );
        } else {
            println!("{indent}{} {} {}", check(), "Submitted".success(), kind.accent());
        }
    }

    async fn on_skipped(&self, kind: DataKind, _semester_jw_id: Option<JwId>, reason: SkipReason) {
        println!(
            "    {} Skipped {} {}",
            dash(),
            kind,
            format!("({reason})").muted()
        );
    }

    async fn on_error(&self, error: &Error) {
        self.stop_spinner();
        eprintln!("    {} {}", cross(), error.to_string().error());
    }

    async fn on_message(&self, message: &str) {
        if self.verbose {
            println!("  {message}");
        } else {
            println!("  {}", message.muted());
        }
    }
}
