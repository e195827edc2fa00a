//! Evidence documents and requirements

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Delimiter packing several evidence descriptions into one field
pub const DESCRIPTION_DELIMITER: char = '^';

/// An uploaded evidence document
///
/// `evidence_descriptions` is kept exactly as stored: one string holding
/// every description the document covers, joined by `^`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDocument {
    /// Registered document id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_document_id: Option<String>,

    /// Document type code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Free-text description entered on upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Caret-delimited evidence descriptions
    #[serde(default)]
    pub evidence_descriptions: String,
}

impl EvidenceDocument {
    /// Create a document covering the given raw description field
    pub fn new(evidence_descriptions: impl Into<String>) -> Self {
        Self {
            evidence_descriptions: evidence_descriptions.into(),
            ..Default::default()
        }
    }

    /// Parsed descriptions using the standard delimiter
    pub fn descriptions(&self) -> EvidenceDescriptions {
        EvidenceDescriptions::parse(&self.evidence_descriptions)
    }
}

/// Parsed set of evidence descriptions
///
/// Membership is exact, case-sensitive string equality; there is no
/// substring matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceDescriptions(HashSet<String>);

impl EvidenceDescriptions {
    /// Split a raw field on `^`
    ///
    /// # Examples
    ///
    /// ```
    /// use caab_domain::EvidenceDescriptions;
    ///
    /// let parsed = EvidenceDescriptions::parse("Payslip^BankStatement");
    /// assert!(parsed.contains("Payslip"));
    /// assert!(!parsed.contains("Pay"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, DESCRIPTION_DELIMITER)
    }

    /// Split a raw field on a custom delimiter
    ///
    /// Trailing empty parts are dropped; an empty field is a single empty
    /// description.
    pub fn parse_with(raw: &str, delimiter: char) -> Self {
        if raw.is_empty() {
            return Self(HashSet::from([String::new()]));
        }

        let mut parts: Vec<&str> = raw.split(delimiter).collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        Self(parts.into_iter().map(str::to_string).collect())
    }

    /// Whether a description is present verbatim
    pub fn contains(&self, description: &str) -> bool {
        self.0.contains(description)
    }

    /// Number of distinct descriptions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no descriptions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the descriptions (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A piece of evidence the application needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRequirement {
    /// Document type lookup code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Description uploaded documents must carry
    pub description: String,
}

impl EvidenceRequirement {
    /// Create a requirement from its description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            code: None,
            description: description.into(),
        }
    }
}

/// A requirement paired with whether it has been satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRequired {
    /// Document type lookup code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Required description
    pub description: String,

    /// Whether some uploaded document carries the description
    pub provided: bool,
}
