//! Rules error types

use thiserror::Error;

/// Result type alias for rule evaluation
pub type Result<T> = std::result::Result<T, RulesError>;

/// Errors that abort an evaluation
///
/// Only states the evaluation cannot continue from are errors; missing
/// sections during plain lookups are `None`, and reference mismatches are
/// reported as diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A complete assessment has no global section to read evidence flags from
    #[error("Failed to find GLOBAL entity type in assessment {assessment}")]
    MissingGlobalEntityType {
        /// Assessment name
        assessment: String,
    },

    /// No document in a collection came from the requested rulebase
    #[error("Failed to retrieve assessment {name}")]
    AssessmentNotFound {
        /// Assessment name that was looked for
        name: String,
    },

    /// An assessment pair failed the case-reference consistency check
    #[error("Pre-pop assessment or assessment data is corrupted for case {case_reference}")]
    CorruptedAssessment {
        /// Case reference of the assessment
        case_reference: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
