//! Trait definitions for injected capabilities
//!
//! The rule layer reports data problems through these traits instead of a
//! process-wide logger, so callers decide where diagnostics go.

use std::fmt;
use std::sync::Arc;

/// A global entity that disagrees with its document's case reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMismatch {
    /// Case reference on the document
    pub case_reference: Option<String>,

    /// Assessment name on the document
    pub assessment: Option<String>,

    /// Name of the offending global entity
    pub entity: String,

    /// Value of its case-reference attribute, when that is what disagreed
    pub attribute: Option<String>,
}

impl fmt::Display for ReferenceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CORRUPTED : Assessment : {}, Name : {}, EntityId : {}",
            self.case_reference.as_deref().unwrap_or("<none>"),
            self.assessment.as_deref().unwrap_or("<none>"),
            self.entity
        )?;
        if let Some(attribute) = &self.attribute {
            write!(f, ", Attribute : {}", attribute)?;
        }
        Ok(())
    }
}

/// Receiver for data-corruption diagnostics
///
/// Shared across concurrent callers, so implementations must be thread-safe.
pub trait DiagnosticSink: Send + Sync {
    /// Record a reference mismatch
    fn reference_mismatch(&self, mismatch: &ReferenceMismatch);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn reference_mismatch(&self, mismatch: &ReferenceMismatch) {
        (**self).reference_mismatch(mismatch)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn reference_mismatch(&self, mismatch: &ReferenceMismatch) {
        (**self).reference_mismatch(mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_attribute() {
        let mismatch = ReferenceMismatch {
            case_reference: Some("CASE1".to_string()),
            assessment: Some("meansAssessment".to_string()),
            entity: "CASE2".to_string(),
            attribute: None,
        };
        assert_eq!(
            mismatch.to_string(),
            "CORRUPTED : Assessment : CASE1, Name : meansAssessment, EntityId : CASE2"
        );
    }

    #[test]
    fn test_display_with_attribute() {
        let mismatch = ReferenceMismatch {
            case_reference: Some("CASE1".to_string()),
            assessment: None,
            entity: "CASE1".to_string(),
            attribute: Some("CASE9".to_string()),
        };
        assert!(mismatch.to_string().ends_with("EntityId : CASE1, Attribute : CASE9"));
        assert!(mismatch.to_string().contains("Name : <none>"));
    }
}
