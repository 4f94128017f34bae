//! Submission pipeline
//!
//! Relays the cache in dependency order:
//! 1. Semesters - the whole list, one envelope
//! 2. Sections - one envelope per semester
//! 3. Schedules - one sparse envelope per semester
//!
//! Within a semester, sections always precede schedules.

mod execute;
mod options;
mod progress;
mod report;

pub use execute::run_relay;
pub use options::{FailurePolicy, RelayOptions};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use report::{RelayReport, SkipReason, StageRecord, StageStatus};
