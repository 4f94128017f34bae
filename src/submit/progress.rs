//! Progress callback trait for interface-agnostic updates
//!
//! The relay reports what it is doing through this trait so the CLI can
//! render it while tests and library callers can ignore it.

use crate::error::Error;
use crate::submit::SkipReason;
use crate::types::{DataKind, JwId, Semester, SubmitResponse};
use async_trait::async_trait;
use std::fmt;

/// Relay phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading and submitting the semester list
    Semesters,
    /// Walking semesters for sections and schedules
    Sections,
    /// Relay complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semesters => write!(f, "Submitting semesters"),
            Self::Sections => write!(f, "Submitting sections and schedules"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called before a semester's sections and schedules are processed
    async fn on_semester(&self, semester: &Semester);

    /// Called right before an envelope is sent
    async fn on_submitting(&self, kind: DataKind, semester_jw_id: Option<JwId>, records: usize);

    /// Called when the webhook accepted an envelope
    async fn on_submitted(
        &self,
        kind: DataKind,
        semester_jw_id: Option<JwId>,
        response: &SubmitResponse,
    );

    /// Called when a stage had nothing to send
    async fn on_skipped(&self, kind: DataKind, semester_jw_id: Option<JwId>, reason: SkipReason);

    /// Called once per failed stage, including a rejected semester list
    ///
    /// Follows `on_submitting` when the webhook itself failed the envelope.
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_semester(&self, _semester: &Semester) {}
    async fn on_submitting(&self, _kind: DataKind, _semester_jw_id: Option<JwId>, _records: usize) {
    }
    async fn on_submitted(
        &self,
        _kind: DataKind,
        _semester_jw_id: Option<JwId>,
        _response: &SubmitResponse,
    ) {
    }
    async fn on_skipped(&self, _kind: DataKind, _semester_jw_id: Option<JwId>, _reason: SkipReason) {
    }
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
