//! Entity-type categories of an assessment document

use std::fmt;

use crate::names::eq_ignore_case;

/// Category of an entity-type section
///
/// The global section is scoped to the whole case; proceeding and opponent
/// sections hold one entity per proceeding or party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentEntityType {
    /// Case-wide entities (one, named after the case reference)
    Global,

    /// One entity per proceeding
    Proceeding,

    /// One entity per opponent or other party
    Opponent,
}

impl AssessmentEntityType {
    /// Every category, in document order
    pub const ALL: [AssessmentEntityType; 3] = [
        AssessmentEntityType::Global,
        AssessmentEntityType::Proceeding,
        AssessmentEntityType::Opponent,
    ];

    /// Section name as written by the rules engine
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentEntityType::Global => "global",
            AssessmentEntityType::Proceeding => "proceeding",
            AssessmentEntityType::Opponent => "opponent_other_parties",
        }
    }

    /// Whether a section name refers to this category
    pub fn matches(&self, name: &str) -> bool {
        eq_ignore_case(self.as_str(), name)
    }

    /// Parse a section name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entity_type| entity_type.matches(s))
    }
}

impl fmt::Display for AssessmentEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssessmentEntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_any_case() {
        assert_eq!(
            AssessmentEntityType::parse("GLOBAL"),
            Some(AssessmentEntityType::Global)
        );
        assert_eq!(
            AssessmentEntityType::parse("Opponent_Other_Parties"),
            Some(AssessmentEntityType::Opponent)
        );
        assert_eq!(AssessmentEntityType::parse("client"), None);
    }

    #[test]
    fn test_from_str_error() {
        assert!("nope".parse::<AssessmentEntityType>().is_err());
        assert_eq!(
            "proceeding".parse::<AssessmentEntityType>(),
            Ok(AssessmentEntityType::Proceeding)
        );
    }
}
