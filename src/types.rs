//! Core types for catalog-relay

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// External ("jw") identifier assigned by the upstream source system
pub type JwId = i64;

/// A semester from the cached semester list
///
/// Only the identifier is typed; every other field, `nameZh` included, is
/// carried through untouched when the record is relayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Semester {
    /// External identifier
    pub id: JwId,
    /// Passthrough fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Semester {
    /// Chinese display name, when the record carries one as a string
    pub fn name_zh(&self) -> Option<&str> {
        self.extra.get("nameZh").and_then(Value::as_str)
    }

    /// Human-readable label for progress output
    pub fn label(&self) -> String {
        match self.name_zh() {
            Some(name) => format!("{name} (jwId={})", self.id),
            None => format!("jwId={}", self.id),
        }
    }
}

/// A course section, found under its semester's section list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// External identifier
    pub id: JwId,
    /// Passthrough fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One section's schedule document, relayed as-is
pub type Schedule = Value;

/// Sparse mapping from section id to its cached schedule
///
/// Serializes as a JSON object keyed by the decimal section id. Ordered so
/// that repeated runs produce identical request bodies.
pub type ScheduleMap = BTreeMap<JwId, Schedule>;

/// Kind of data carried by an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    /// The semester list
    Semesters,
    /// Sections of one semester
    Sections,
    /// Schedules of one semester's sections
    Schedules,
}

impl DataKind {
    /// Whether envelopes of this kind must name a semester
    pub const fn requires_semester(self) -> bool {
        matches!(self, Self::Sections | Self::Schedules)
    }

    /// Wire name of this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Semesters => "semesters",
            Self::Sections => "sections",
            Self::Schedules => "schedules",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body sent to the webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    /// Data kind tag
    #[serde(rename = "type")]
    pub kind: DataKind,
    /// Opaque payload
    pub data: Value,
    /// Correlating semester (required for sections and schedules)
    #[serde(
        rename = "semesterJwId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub semester_jw_id: Option<JwId>,
}

impl Envelope {
    /// Number of records in the payload (array length or mapping size)
    pub fn record_count(&self) -> usize {
        match &self.data {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            Value::Null => 0,
            _ => 1,
        }
    }
}

/// Parsed body of a successful webhook response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubmitResponse {
    /// Success flag reported by the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of records the endpoint loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Anything else the endpoint returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmitResponse {
    /// The response message, or a generic fallback
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("Data submitted")
    }
}
