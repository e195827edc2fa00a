//! Assessment status values

use std::fmt;

/// Status of an assessment
///
/// Statuses are compared by exact string equality; anything that is not
/// exactly `COMPLETE` (including an absent status) is not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentStatus {
    /// Every goal reached
    Complete,
    /// Started but goals outstanding
    Incomplete,
    /// Never opened
    NotStarted,
    /// The rules engine failed
    Error,
    /// Must be (re)completed before submission
    Required,
    /// Unchanged since the last submission
    Unchanged,
}

impl AssessmentStatus {
    /// Every status
    pub const ALL: [AssessmentStatus; 6] = [
        AssessmentStatus::Complete,
        AssessmentStatus::Incomplete,
        AssessmentStatus::NotStarted,
        AssessmentStatus::Error,
        AssessmentStatus::Required,
        AssessmentStatus::Unchanged,
    ];

    /// Status literal as stored on documents
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Complete => "COMPLETE",
            AssessmentStatus::Incomplete => "INCOMPLETE",
            AssessmentStatus::NotStarted => "NOT_STARTED",
            AssessmentStatus::Error => "ERROR",
            AssessmentStatus::Required => "REQUIRED",
            AssessmentStatus::Unchanged => "UNCHANGED",
        }
    }

    /// Look up a status literal (exact match)
    pub fn find_by_status(status: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == status)
    }

    /// Whether a document status equals this literal
    pub fn is(&self, status: Option<&str>) -> bool {
        status == Some(self.as_str())
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_status_is_exact() {
        assert_eq!(
            AssessmentStatus::find_by_status("COMPLETE"),
            Some(AssessmentStatus::Complete)
        );
        assert_eq!(AssessmentStatus::find_by_status("complete"), None);
        assert_eq!(AssessmentStatus::find_by_status(""), None);
    }

    #[test]
    fn test_absent_status_is_not_complete() {
        assert!(AssessmentStatus::Complete.is(Some("COMPLETE")));
        assert!(!AssessmentStatus::Complete.is(Some("Complete")));
        assert!(!AssessmentStatus::Complete.is(None));
    }
}
