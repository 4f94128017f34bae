//! Relay outcome reporting

use crate::types::{DataKind, JwId};
use std::fmt;

/// Why a stage sent nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The semester has no cached sections
    NoSections,
    /// None of the semester's sections has a cached schedule
    NoSchedules,
    /// The sections stage failed, so schedules were not attempted
    SectionsFailed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSections => write!(f, "no sections cached"),
            Self::NoSchedules => write!(f, "no schedules cached"),
            Self::SectionsFailed => write!(f, "sections failed"),
        }
    }
}

/// Outcome of one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    /// Envelope accepted by the webhook
    Submitted {
        /// Records in the envelope
        records: usize,
        /// Message returned by the webhook
        message: String,
    },
    /// Nothing to send; counts as success
    Skipped(SkipReason),
    /// Envelope built but not sent (dry run)
    DryRun {
        /// Records in the envelope
        records: usize,
    },
    /// Stage failed
    Failed(String),
}

impl StageStatus {
    /// Whether this stage failed
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One line of the relay report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRecord {
    /// Data kind of the stage
    pub kind: DataKind,
    /// Semester the stage belongs to (`None` for the semester list)
    pub semester_jw_id: Option<JwId>,
    /// What happened
    pub status: StageStatus,
}

/// Result of a relay run
#[derive(Debug, Clone, Default)]
pub struct RelayReport {
    /// Stage outcomes in execution order
    pub records: Vec<StageRecord>,
    /// Semesters with at least one failed stage, in the order they failed
    pub failed_semesters: Vec<JwId>,
    /// Whether the run stopped early (fail-fast)
    pub halted: bool,
    /// Semesters visited by the per-semester stages
    pub semesters_visited: usize,
}

impl RelayReport {
    /// Whether every visited stage succeeded and the run was not halted
    pub fn is_success(&self) -> bool {
        !self.halted && self.failed_semesters.is_empty()
    }

    /// Number of envelopes the webhook accepted
    pub fn submitted_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, StageStatus::Submitted { .. }))
            .count()
    }

    /// Number of failed stages
    pub fn failure_count(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_failed()).count()
    }

    pub(crate) fn record(&mut self, kind: DataKind, semester_jw_id: Option<JwId>, status: StageStatus) {
        if status.is_failed() {
            if let Some(id) = semester_jw_id {
                if !self.failed_semesters.contains(&id) {
                    self.failed_semesters.push(id);
                }
            }
        }
        self.records.push(StageRecord {
            kind,
            semester_jw_id,
            status,
        });
    }
}
