//! Mock webhook sink for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_relay::error::{Error, ErrorBody, Result};
use catalog_relay::types::{DataKind, Envelope, JwId, SubmitResponse};
use catalog_relay::webhook::WebhookSink;
use serde_json::json;
use std::sync::Mutex;

/// Injected failure for a specific envelope
#[derive(Debug, Clone, PartialEq, Eq)]
struct Failure {
    kind: DataKind,
    semester_jw_id: Option<JwId>,
    status: u16,
}

/// Recording webhook sink
///
/// Features:
/// - Records every submitted envelope (including rejected ones)
/// - Error injection per kind and semester
pub struct MockWebhookSink {
    calls: Mutex<Vec<Envelope>>,
    failures: Mutex<Vec<Failure>>,
}

impl MockWebhookSink {
    /// Create a sink that accepts everything
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
        }
    }

    // === Error injection ===

    /// Reject envelopes of `kind` for `semester_jw_id` with `status`
    pub fn fail_on(&self, kind: DataKind, semester_jw_id: Option<JwId>, status: u16) {
        self.failures.lock().unwrap().push(Failure {
            kind,
            semester_jw_id,
            status,
        });
    }

    // === Call verification ===

    /// All envelopes submitted, in order
    pub fn calls(&self) -> Vec<Envelope> {
        self.calls.lock().unwrap().clone()
    }

    /// `(kind, semester)` of each submitted envelope, in order
    pub fn call_summary(&self) -> Vec<(DataKind, Option<JwId>)> {
        self.calls()
            .iter()
            .map(|e| (e.kind, e.semester_jw_id))
            .collect()
    }

    /// Assert that nothing was submitted
    pub fn assert_no_calls(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "Expected no submissions but got: {calls:?}");
    }
}

#[async_trait]
impl WebhookSink for MockWebhookSink {
    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse> {
        self.calls.lock().unwrap().push(envelope.clone());

        let failure = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.kind == envelope.kind && f.semester_jw_id == envelope.semester_jw_id)
            .cloned();
        if let Some(failure) = failure {
            return Err(Error::Http {
                status: failure.status,
                body: ErrorBody::Json(json!({"error": "injected failure"})),
            });
        }

        Ok(SubmitResponse {
            success: Some(true),
            message: Some(format!("Loaded {} {}", envelope.record_count(), envelope.kind)),
            count: Some(envelope.record_count() as u64),
            ..SubmitResponse::default()
        })
    }

    fn endpoint(&self) -> &str {
        "mock://webhook"
    }
}
