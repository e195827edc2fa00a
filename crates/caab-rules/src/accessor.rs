//! Graph accessor over assessment documents
//!
//! Every lookup is total: a missing section, entity, attribute or relationship
//! resolves to `None` (or an empty slice), never a panic or error. Names are
//! matched case-insensitively, except entity names, which are identifiers and
//! match exactly.

use caab_domain::names::eq_ignore_case;
use caab_domain::relationship::section_key;
use caab_domain::{
    AssessmentAttribute, AssessmentDocument, AssessmentEntityType, AssessmentRelationship,
    Attribute, Entity, EntityType, Relationship,
};

/// First section of the given category
///
/// # Examples
///
/// ```
/// use caab_domain::{AssessmentDocument, AssessmentEntityType, EntityType};
/// use caab_rules::find_entity_type;
///
/// let document = AssessmentDocument::new("meansAssessment", "CASE1")
///     .with_entity_type(EntityType::new("GLOBAL"));
///
/// assert!(find_entity_type(&document, AssessmentEntityType::Global).is_some());
/// assert!(find_entity_type(&document, AssessmentEntityType::Proceeding).is_none());
/// ```
pub fn find_entity_type(
    document: &AssessmentDocument,
    category: AssessmentEntityType,
) -> Option<&EntityType> {
    find_entity_type_by_name(document, category.as_str())
}

/// First section whose name matches a raw name
pub fn find_entity_type_by_name<'a>(
    document: &'a AssessmentDocument,
    name: &str,
) -> Option<&'a EntityType> {
    document
        .entity_types
        .iter()
        .find(|entity_type| eq_ignore_case(&entity_type.name, name))
}

/// Entities of a section, empty when the section is absent
pub fn entities_of(document: &AssessmentDocument, category: AssessmentEntityType) -> &[Entity] {
    entities_of_name(document, category.as_str())
}

/// Entities of a section found by raw name, empty when absent
pub fn entities_of_name<'a>(document: &'a AssessmentDocument, name: &str) -> &'a [Entity] {
    find_entity_type_by_name(document, name)
        .map(|entity_type| entity_type.entities.as_slice())
        .unwrap_or(&[])
}

/// Entity with exactly the given name
pub fn find_entity<'a>(entity_type: &'a EntityType, entity_name: &str) -> Option<&'a Entity> {
    entity_type
        .entities
        .iter()
        .find(|entity| entity.name == entity_name)
}

/// First attribute matching an identifier
pub fn find_attribute(entity: &Entity, attribute: AssessmentAttribute) -> Option<&Attribute> {
    find_attribute_by_name(entity, attribute.as_str())
}

/// First attribute matching a raw name
pub fn find_attribute_by_name<'a>(entity: &'a Entity, name: &str) -> Option<&'a Attribute> {
    entity
        .attributes
        .iter()
        .find(|candidate| eq_ignore_case(&candidate.name, name))
}

/// First relationship matching an identifier
pub fn find_relationship(
    entity: &Entity,
    relationship: AssessmentRelationship,
) -> Option<&Relationship> {
    entity
        .relationships
        .iter()
        .find(|candidate| relationship.matches(&candidate.name))
}

/// Entities in every section the relationship points into
///
/// Relationship and section names are paired once underscores are removed
/// from both, so `opponentotherparties` reaches `opponent_other_parties`.
pub fn related_entities<'a>(
    relationship: &Relationship,
    document: &'a AssessmentDocument,
) -> Vec<&'a Entity> {
    let key = section_key(&relationship.name);

    document
        .entity_types
        .iter()
        .filter(|entity_type| eq_ignore_case(&section_key(&entity_type.name), &key))
        .flat_map(|entity_type| entity_type.entities.iter())
        .collect()
}
