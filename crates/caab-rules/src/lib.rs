//! CAAB Assessment Rules
//!
//! Queries and derived-rule evaluation over assessment entity graphs.
//!
//! The rules layer provides:
//! - Graph access (entity types, entities, attributes, relationships by name)
//! - Recency selection across assessment versions
//! - Case-reference consistency checking of the global section
//! - Evidence-requirement evaluation (assessment flags, emergency, prior authority)
//! - Evidence matching against uploaded documents
//!
//! Every function is pure and synchronous. Documents are borrowed and never
//! modified; absence of a section or attribute is a normal result, not an error.
//!
//! # Examples
//!
//! ```
//! use caab_domain::{ApplicationType, AssessmentDocument, EvidenceDocument};
//! use caab_rules::{is_evidence_provided, is_evidence_required, ConsistencyValidator};
//!
//! let means = AssessmentDocument::new("meansAssessment", "CASE1");
//! let validator = ConsistencyValidator::new();
//! assert!(validator.is_reference_consistent(&means));
//!
//! // Emergency applications always need evidence
//! let required = is_evidence_required(None, None, &ApplicationType::emergency(), None).unwrap();
//! assert!(required);
//!
//! let uploaded = vec![EvidenceDocument::new("Payslip^BankStatement")];
//! assert!(is_evidence_provided("Payslip", &uploaded));
//! ```

#![warn(missing_docs)]

pub mod accessor;
mod config;
mod consistency;
mod diagnostics;
mod error;
mod matching;
mod requirement;
mod selection;

pub use accessor::{
    entities_of, entities_of_name, find_attribute, find_attribute_by_name, find_entity,
    find_entity_type, find_entity_type_by_name, find_relationship, related_entities,
};
pub use config::EvaluationConfig;
pub use consistency::{is_reference_consistent, ConsistencyValidator};
pub use diagnostics::{MemorySink, TracingSink};
pub use error::{Result, RulesError};
pub use matching::{evidence_checklist, is_all_evidence_provided, is_evidence_provided};
pub use requirement::{is_assessment_evidence_required, is_evidence_required, EvidenceEvaluator};
pub use selection::{find_assessment, most_recent, non_financial_assessment_names_including_prepop};
