//! Relationship identifiers between assessment entities

use std::fmt;

use crate::names::eq_ignore_case;
use crate::AssessmentEntityType;

/// Identifier of a relationship from the global entity to child entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentRelationship {
    /// Global entity → proceeding entities
    Proceeding,

    /// Global entity → opponent entities
    Opponent,
}

impl AssessmentRelationship {
    /// Every relationship identifier
    pub const ALL: [AssessmentRelationship; 2] = [
        AssessmentRelationship::Proceeding,
        AssessmentRelationship::Opponent,
    ];

    /// Relationship name as written by the rules engine
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentRelationship::Proceeding => "proceeding",
            AssessmentRelationship::Opponent => "opponentotherparties",
        }
    }

    /// Entity-type category the relationship points into
    pub fn target(&self) -> AssessmentEntityType {
        match self {
            AssessmentRelationship::Proceeding => AssessmentEntityType::Proceeding,
            AssessmentRelationship::Opponent => AssessmentEntityType::Opponent,
        }
    }

    /// Whether a relationship name refers to this identifier
    pub fn matches(&self, name: &str) -> bool {
        eq_ignore_case(self.as_str(), name)
    }

    /// Parse a relationship name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|relationship| relationship.matches(s))
    }
}

impl fmt::Display for AssessmentRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underscore-free form used to pair relationship names with section names
///
/// Relationship names are entity-type names with the underscores dropped, so
/// `opponentotherparties` and `opponent_other_parties` share one key.
pub fn section_key(name: &str) -> String {
    name.replace('_', "")
}
