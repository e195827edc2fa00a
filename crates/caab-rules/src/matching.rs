//! Matching required evidence against uploaded documents

use caab_domain::{EvidenceDescriptions, EvidenceDocument, EvidenceRequired, EvidenceRequirement};

use crate::EvidenceEvaluator;

impl EvidenceEvaluator {
    /// Whether some uploaded document carries `description` exactly
    ///
    /// Matching is case-sensitive and whole-description only.
    pub fn is_evidence_provided(&self, description: &str, uploaded: &[EvidenceDocument]) -> bool {
        uploaded
            .iter()
            .any(|document| self.descriptions(document).contains(description))
    }

    /// Whether every requirement is matched by some uploaded document
    pub fn is_all_evidence_provided(
        &self,
        requirements: &[EvidenceRequirement],
        uploaded: &[EvidenceDocument],
    ) -> bool {
        let parsed = self.parse_all(uploaded);
        requirements
            .iter()
            .all(|requirement| provided(&parsed, &requirement.description))
    }

    /// Each requirement paired with whether it has been provided, in input order
    pub fn evidence_checklist(
        &self,
        requirements: &[EvidenceRequirement],
        uploaded: &[EvidenceDocument],
    ) -> Vec<EvidenceRequired> {
        let parsed = self.parse_all(uploaded);
        requirements
            .iter()
            .map(|requirement| EvidenceRequired {
                code: requirement.code.clone(),
                description: requirement.description.clone(),
                provided: provided(&parsed, &requirement.description),
            })
            .collect()
    }

    fn descriptions(&self, document: &EvidenceDocument) -> EvidenceDescriptions {
        EvidenceDescriptions::parse_with(
            &document.evidence_descriptions,
            self.config().description_delimiter,
        )
    }

    fn parse_all(&self, uploaded: &[EvidenceDocument]) -> Vec<EvidenceDescriptions> {
        uploaded
            .iter()
            .map(|document| self.descriptions(document))
            .collect()
    }
}

fn provided(parsed: &[EvidenceDescriptions], description: &str) -> bool {
    parsed
        .iter()
        .any(|descriptions| descriptions.contains(description))
}

/// Whether some uploaded document carries `description`, split on `^`
///
/// # Examples
///
/// ```
/// use caab_domain::EvidenceDocument;
/// use caab_rules::is_evidence_provided;
///
/// let uploaded = vec![EvidenceDocument::new("Payslip^BankStatement")];
/// assert!(is_evidence_provided("BankStatement", &uploaded));
/// assert!(!is_evidence_provided("payslip", &uploaded));
/// assert!(!is_evidence_provided("Pay", &uploaded));
/// ```
pub fn is_evidence_provided(description: &str, uploaded: &[EvidenceDocument]) -> bool {
    EvidenceEvaluator::default().is_evidence_provided(description, uploaded)
}

/// Whether every requirement has been provided, split on `^`
pub fn is_all_evidence_provided(
    requirements: &[EvidenceRequirement],
    uploaded: &[EvidenceDocument],
) -> bool {
    EvidenceEvaluator::default().is_all_evidence_provided(requirements, uploaded)
}

/// Provided flags for each requirement, split on `^`
pub fn evidence_checklist(
    requirements: &[EvidenceRequirement],
    uploaded: &[EvidenceDocument],
) -> Vec<EvidenceRequired> {
    EvidenceEvaluator::default().evidence_checklist(requirements, uploaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvaluationConfig;

    fn uploaded() -> Vec<EvidenceDocument> {
        vec![
            EvidenceDocument::new("Payslip^BankStatement"),
            EvidenceDocument::new("Passport"),
        ]
    }

    #[test]
    fn test_exact_match_only() {
        let uploaded = uploaded();
        assert!(is_evidence_provided("Payslip", &uploaded));
        assert!(is_evidence_provided("BankStatement", &uploaded));
        assert!(is_evidence_provided("Passport", &uploaded));
        assert!(!is_evidence_provided("payslip", &uploaded));
        assert!(!is_evidence_provided("Pay", &uploaded));
        assert!(!is_evidence_provided("Payslip^BankStatement", &uploaded));
    }

    #[test]
    fn test_no_uploads() {
        assert!(!is_evidence_provided("Payslip", &[]));
    }

    #[test]
    fn test_empty_field_matches_empty_description() {
        let uploaded = vec![EvidenceDocument::new("")];
        assert!(is_evidence_provided("", &uploaded));
        assert!(!is_evidence_provided("Payslip", &uploaded));
    }

    #[test]
    fn test_trailing_delimiter_is_ignored() {
        let uploaded = vec![EvidenceDocument::new("Payslip^")];
        assert!(is_evidence_provided("Payslip", &uploaded));
        assert!(!is_evidence_provided("", &uploaded));
    }

    #[test]
    fn test_all_provided() {
        let uploaded = uploaded();
        let satisfied = vec![
            EvidenceRequirement::new("Payslip"),
            EvidenceRequirement::new("Passport"),
        ];
        let missing = vec![
            EvidenceRequirement::new("Payslip"),
            EvidenceRequirement::new("P60"),
        ];

        assert!(is_all_evidence_provided(&satisfied, &uploaded));
        assert!(!is_all_evidence_provided(&missing, &uploaded));
        assert!(is_all_evidence_provided(&[], &uploaded));
        assert!(is_all_evidence_provided(&[], &[]));
    }

    #[test]
    fn test_checklist_keeps_order() {
        let requirements = vec![
            EvidenceRequirement {
                code: Some("P60".to_string()),
                description: "P60".to_string(),
            },
            EvidenceRequirement::new("BankStatement"),
        ];

        let checklist = evidence_checklist(&requirements, &uploaded());
        assert_eq!(checklist.len(), 2);
        assert_eq!(checklist[0].code.as_deref(), Some("P60"));
        assert!(!checklist[0].provided);
        assert_eq!(checklist[1].description, "BankStatement");
        assert!(checklist[1].provided);
    }

    #[test]
    fn test_custom_delimiter() {
        let evaluator = EvidenceEvaluator::new(EvaluationConfig {
            description_delimiter: '|',
            ..Default::default()
        });
        let uploaded = vec![EvidenceDocument::new("Payslip|BankStatement")];

        assert!(evaluator.is_evidence_provided("Payslip", &uploaded));
        assert!(!is_evidence_provided("Payslip", &uploaded));
    }
}
