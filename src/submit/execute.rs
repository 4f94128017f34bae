//! Relay execution
//!
//! Walks the cache in dependency order and submits one envelope per stage:
//! 1. Semester list (failure aborts the run)
//! 2. Per semester: sections, then schedules for those sections

use crate::cache::CacheReader;
use crate::error::{Error, Result};
use crate::payload::{schedules_envelope, sections_envelope, semesters_envelope};
use crate::submit::{
    FailurePolicy, Phase, ProgressCallback, RelayOptions, RelayReport, SkipReason, StageStatus,
};
use crate::types::{DataKind, Envelope, JwId, Section, Semester};
use crate::webhook::WebhookSink;
use tracing::info;

/// Relay the whole cache to the webhook
///
/// Returns `Err` only when the run cannot start: the semester list is missing
/// or unreadable, or the webhook rejected it. Per-semester failures are
/// recorded in the returned [`RelayReport`] and handled per
/// [`RelayOptions::policy`].
pub async fn run_relay(
    reader: &CacheReader,
    sink: &dyn WebhookSink,
    progress: &dyn ProgressCallback,
    options: &RelayOptions,
) -> Result<RelayReport> {
    let relay = Relay {
        reader,
        sink,
        progress,
        options,
    };
    relay.run().await
}

struct Relay<'a> {
    reader: &'a CacheReader,
    sink: &'a dyn WebhookSink,
    progress: &'a dyn ProgressCallback,
    options: &'a RelayOptions,
}

impl Relay<'_> {
    async fn run(&self) -> Result<RelayReport> {
        let mut report = RelayReport::default();

        if self.options.dry_run {
            self.progress
                .on_message("Dry run - nothing will be submitted")
                .await;
        }

        // Phase: semester list
        self.progress.on_phase(Phase::Semesters).await;

        let semesters = self.reader.read_semesters()?;
        self.progress
            .on_message(&format!("Found {} semesters", semesters.len()))
            .await;

        let envelope = semesters_envelope(&semesters)?;
        let status = match self.deliver(&envelope).await {
            Ok(status) => status,
            Err(e) => {
                // closes out the on_submitting for this envelope
                self.progress.on_error(&e).await;
                return Err(e);
            }
        };
        report.record(DataKind::Semesters, None, status);

        for id in &self.options.only_semesters {
            if !semesters.iter().any(|s| s.id == *id) {
                self.progress
                    .on_message(&format!("Semester {id} is not in the cache"))
                    .await;
            }
        }

        // Phase: sections and schedules, one semester at a time
        self.progress.on_phase(Phase::Sections).await;

        for semester in semesters.iter().filter(|s| self.options.includes(s.id)) {
            report.semesters_visited += 1;
            self.progress.on_semester(semester).await;

            if !self.relay_semester(semester, &mut report).await
                && self.options.policy == FailurePolicy::FailFast
            {
                info!(semester = semester.id, "halting after failed semester");
                report.halted = true;
                break;
            }
        }

        self.progress.on_phase(Phase::Complete).await;

        info!(
            submitted = report.submitted_count(),
            failed = report.failure_count(),
            halted = report.halted,
            "relay finished"
        );
        Ok(report)
    }

    /// Sections then schedules for one semester; `false` if a stage failed
    async fn relay_semester(&self, semester: &Semester, report: &mut RelayReport) -> bool {
        let jw_id = semester.id;

        let sections = match self.sections_stage(jw_id).await {
            Ok((sections, status)) => {
                report.record(DataKind::Sections, Some(jw_id), status);
                sections
            }
            Err(e) => {
                self.fail(DataKind::Sections, jw_id, &e, report).await;
                self.skip(DataKind::Schedules, jw_id, SkipReason::SectionsFailed, report)
                    .await;
                return false;
            }
        };

        match self.schedules_stage(jw_id, &sections).await {
            Ok(status) => {
                report.record(DataKind::Schedules, Some(jw_id), status);
                true
            }
            Err(e) => {
                self.fail(DataKind::Schedules, jw_id, &e, report).await;
                false
            }
        }
    }

    async fn sections_stage(&self, jw_id: JwId) -> Result<(Vec<Section>, StageStatus)> {
        let sections = self.reader.read_sections(jw_id)?;
        if sections.is_empty() {
            self.progress
                .on_skipped(DataKind::Sections, Some(jw_id), SkipReason::NoSections)
                .await;
            return Ok((sections, StageStatus::Skipped(SkipReason::NoSections)));
        }

        let envelope = sections_envelope(jw_id, &sections)?;
        let status = self.deliver(&envelope).await?;
        Ok((sections, status))
    }

    async fn schedules_stage(&self, jw_id: JwId, sections: &[Section]) -> Result<StageStatus> {
        let section_ids: Vec<JwId> = sections.iter().map(|s| s.id).collect();
        if section_ids.is_empty() {
            self.progress
                .on_skipped(DataKind::Schedules, Some(jw_id), SkipReason::NoSections)
                .await;
            return Ok(StageStatus::Skipped(SkipReason::NoSections));
        }

        let schedules = self.reader.read_schedules(&section_ids)?;
        if schedules.is_empty() {
            self.progress
                .on_skipped(DataKind::Schedules, Some(jw_id), SkipReason::NoSchedules)
                .await;
            return Ok(StageStatus::Skipped(SkipReason::NoSchedules));
        }

        let envelope = schedules_envelope(jw_id, &schedules)?;
        self.deliver(&envelope).await
    }

    /// Send one envelope, or describe it in a dry run
    async fn deliver(&self, envelope: &Envelope) -> Result<StageStatus> {
        let records = envelope.record_count();

        if self.options.dry_run {
            self.progress
                .on_message(&format!(
                    "Would submit {records} {} ({})",
                    envelope.kind,
                    envelope
                        .semester_jw_id
                        .map_or_else(|| "all semesters".to_string(), |id| format!("semester {id}"))
                ))
                .await;
            return Ok(StageStatus::DryRun { records });
        }

        self.progress
            .on_submitting(envelope.kind, envelope.semester_jw_id, records)
            .await;
        let response = self.sink.submit(envelope).await?;
        self.progress
            .on_submitted(envelope.kind, envelope.semester_jw_id, &response)
            .await;

        Ok(StageStatus::Submitted {
            records,
            message: response.message_or_default().to_string(),
        })
    }

    async fn skip(&self, kind: DataKind, jw_id: JwId, reason: SkipReason, report: &mut RelayReport) {
        self.progress.on_skipped(kind, Some(jw_id), reason).await;
        report.record(kind, Some(jw_id), StageStatus::Skipped(reason));
    }

    async fn fail(&self, kind: DataKind, jw_id: JwId, error: &Error, report: &mut RelayReport) {
        info!(semester = jw_id, %kind, error = %error, "stage failed");
        self.progress.on_error(error).await;
        report.record(kind, Some(jw_id), StageStatus::Failed(error.to_string()));
    }
}
