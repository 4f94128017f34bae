//! Recording progress callback for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_relay::error::Error;
use catalog_relay::submit::{Phase, ProgressCallback, SkipReason};
use catalog_relay::types::{DataKind, JwId, Semester, SubmitResponse};
use std::sync::Mutex;

/// Progress callback that records submit and error events as short strings
///
/// Phase, semester and message events are not recorded.
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Recorded events, in order
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

fn target(kind: DataKind, semester_jw_id: Option<JwId>) -> String {
    semester_jw_id.map_or_else(|| kind.to_string(), |id| format!("{kind} {id}"))
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, _phase: Phase) {}

    async fn on_semester(&self, _semester: &Semester) {}

    async fn on_submitting(&self, kind: DataKind, semester_jw_id: Option<JwId>, _records: usize) {
        self.push(format!("submitting {}", target(kind, semester_jw_id)));
    }

    async fn on_submitted(
        &self,
        kind: DataKind,
        semester_jw_id: Option<JwId>,
        _response: &SubmitResponse,
    ) {
        self.push(format!("submitted {}", target(kind, semester_jw_id)));
    }

    async fn on_skipped(&self, kind: DataKind, semester_jw_id: Option<JwId>, _reason: SkipReason) {
        self.push(format!("skipped {}", target(kind, semester_jw_id)));
    }

    async fn on_error(&self, error: &Error) {
        self.push(format!("error: {error}"));
    }

    async fn on_message(&self, _message: &str) {}
}
