//! Envelope construction
//!
//! Payloads are not inspected: whatever the cache holds is serialized into the
//! envelope's `data` field. The only rule enforced here is the semester id:
//! sections and schedules must name their semester, the semester list must not.

use crate::error::{Error, Result};
use crate::types::{DataKind, Envelope, JwId, ScheduleMap, Section, Semester};
use serde::Serialize;

/// Wrap `data` in an envelope of the given kind
pub fn build_envelope<T: Serialize + ?Sized>(
    kind: DataKind,
    data: &T,
    semester_jw_id: Option<JwId>,
) -> Result<Envelope> {
    match (kind.requires_semester(), semester_jw_id) {
        (true, None) => return Err(Error::MissingSemester(kind)),
        (false, Some(_)) => return Err(Error::UnexpectedSemester),
        _ => {}
    }

    Ok(Envelope {
        kind,
        data: serde_json::to_value(data)?,
        semester_jw_id,
    })
}

/// Envelope for the full semester list
pub fn semesters_envelope(semesters: &[Semester]) -> Result<Envelope> {
    build_envelope(DataKind::Semesters, semesters, None)
}

/// Envelope for one semester's sections
pub fn sections_envelope(semester_jw_id: JwId, sections: &[Section]) -> Result<Envelope> {
    build_envelope(DataKind::Sections, sections, Some(semester_jw_id))
}

/// Envelope for one semester's schedules
pub fn schedules_envelope(semester_jw_id: JwId, schedules: &ScheduleMap) -> Result<Envelope> {
    build_envelope(DataKind::Schedules, schedules, Some(semester_jw_id))
}
