//! Assessment document model
//!
//! An assessment is a generic entity graph: entity types contain entities,
//! entities carry attributes and relationships. Nothing about which sections
//! or attributes exist is guaranteed; absence is a normal state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One assessment instance as returned by the Assessment API
///
/// Owned by whoever fetched it. The rules layer only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDocument {
    /// Assessment API identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Which rulebase produced it (e.g. `meansAssessment`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Provider firm that owns the assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    /// Case reference the assessment was started for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_reference_number: Option<String>,

    /// Free-form status; `COMPLETE` signals completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Ordered entity-type sections
    #[serde(default)]
    pub entity_types: Vec<EntityType>,

    /// Audit trail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_detail: Option<AuditDetail>,
}

impl AssessmentDocument {
    /// Create an empty assessment for a rulebase name and case reference
    pub fn new(name: impl Into<String>, case_reference_number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            case_reference_number: Some(case_reference_number.into()),
            ..Default::default()
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Append an entity-type section
    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_types.push(entity_type);
        self
    }

    /// Set the last-saved timestamp, creating the audit detail if needed
    pub fn with_last_saved(mut self, last_saved: DateTime<Utc>) -> Self {
        self.audit_detail
            .get_or_insert_with(AuditDetail::default)
            .last_saved = Some(last_saved);
        self
    }

    /// Last-saved timestamp, if the document has one
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.audit_detail
            .as_ref()
            .and_then(|audit| audit.last_saved)
    }
}

/// Audit information attached to an assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetail {
    /// When the assessment was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Who created it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// When it was last saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,

    /// Who last saved it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved_by: Option<String>,
}

/// A named section of an assessment document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    /// Section name; matched case-insensitively against `AssessmentEntityType`
    pub name: String,

    /// Ordered entities in this section
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl EntityType {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Append an entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }
}

/// An entity within a section
///
/// For the global section the name is the case reference; for proceedings
/// and opponents it is an instance mapping id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity identifier
    pub name: String,

    /// Ordered attributes
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Ordered relationships to other entities
    #[serde(default, rename = "relations")]
    pub relationships: Vec<Relationship>,

    /// Whether the entity was mapped from application data
    #[serde(default)]
    pub prepopulated: bool,
}

impl Entity {
    /// Create an entity with no attributes or relationships
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }
}

/// A named string value on an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute identifier; matched case-insensitively against `AssessmentAttribute`
    pub name: String,

    /// Declared value type (`text`, `boolean`, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Raw value; booleans are the literal text `true`/`false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the value was mapped from application data
    #[serde(default)]
    pub prepopulated: bool,

    /// Whether the question was asked
    #[serde(default)]
    pub asked: bool,
}

impl Attribute {
    /// Create an attribute with a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Value as a string slice, if present
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A named link from an entity to entities elsewhere in the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Relationship identifier; matched case-insensitively against `AssessmentRelationship`
    pub name: String,

    /// Target entity references
    #[serde(default)]
    pub relationship_targets: Vec<RelationshipTarget>,

    /// Whether the relationship was mapped from application data
    #[serde(default)]
    pub prepopulated: bool,
}

impl Relationship {
    /// Create a relationship with no targets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a target entity id
    pub fn with_target(mut self, target_entity_id: impl Into<String>) -> Self {
        self.relationship_targets.push(RelationshipTarget {
            target_entity_id: target_entity_id.into(),
        });
        self
    }
}

/// Opaque reference to the target of a relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTarget {
    /// Name of the target entity
    pub target_entity_id: String,
}
