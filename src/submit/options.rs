//! Relay options

use crate::types::JwId;

/// What to do when one semester's submission fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next semester
    #[default]
    Continue,
    /// Stop at the first failed semester
    FailFast,
}

/// Options for a relay run
#[derive(Debug, Clone, Default)]
pub struct RelayOptions {
    /// Per-semester failure handling
    pub policy: FailurePolicy,
    /// Read and report, but send nothing
    pub dry_run: bool,
    /// Restrict per-semester stages to these semesters (empty = all)
    pub only_semesters: Vec<JwId>,
}

impl RelayOptions {
    /// Whether the per-semester stages should visit `semester_jw_id`
    pub fn includes(&self, semester_jw_id: JwId) -> bool {
        self.only_semesters.is_empty() || self.only_semesters.contains(&semester_jw_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_everything() {
        let options = RelayOptions::default();
        assert_eq!(options.policy, FailurePolicy::Continue);
        assert!(options.includes(1));
        assert!(options.includes(999));
    }

    #[test]
    fn test_filter() {
        let options = RelayOptions {
            only_semesters: vec![2, 3],
            ..RelayOptions::default()
        };
        assert!(!options.includes(1));
        assert!(options.includes(3));
    }
}
