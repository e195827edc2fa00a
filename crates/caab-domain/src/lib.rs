//! CAAB Assessment Domain Layer
//!
//! This crate contains the data model and fixed vocabularies for legal-aid
//! assessments. It defines the fundamental concepts, value objects, and trait
//! interfaces that the rule and presentation layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Assessment document**: a schema-less graph of entity types → entities →
//!   attributes/relationships produced by the external rules engine
//! - **Entity type**: a named section of a document (global, proceeding, opponent)
//! - **Attribute**: a named string value on an entity, possibly a boolean flag
//! - **Evidence document**: an uploaded file tagged with caret-delimited
//!   evidence descriptions
//! - **Vocabularies**: the fixed entity-type, attribute, relationship, status
//!   and rulebase identifiers shared with the rest of the application
//!
//! ## Architecture
//!
//! - No evaluation logic lives here; see `caab-rules`
//! - Names in documents are matched case-insensitively against vocabularies
//! - Trait definitions for injected capabilities (diagnostics)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod assessment;
pub mod attribute;
pub mod entity_type;
pub mod evidence;
pub mod names;
pub mod relationship;
pub mod rulebase;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use application::{ApplicationType, PriorAuthority};
pub use assessment::{
    AssessmentDocument, Attribute, AuditDetail, Entity, EntityType, Relationship,
    RelationshipTarget,
};
pub use attribute::{AssessmentAttribute, AttributeValueType};
pub use entity_type::AssessmentEntityType;
pub use evidence::{EvidenceDescriptions, EvidenceDocument, EvidenceRequired, EvidenceRequirement};
pub use relationship::AssessmentRelationship;
pub use rulebase::{AssessmentName, AssessmentRulebase};
pub use status::AssessmentStatus;
pub use traits::{DiagnosticSink, ReferenceMismatch};
