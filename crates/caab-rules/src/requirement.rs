//! Whether an application must be supported by evidence documents

use caab_domain::{
    ApplicationType, AssessmentAttribute, AssessmentDocument, AssessmentEntityType, PriorAuthority,
};
use tracing::debug;

use crate::accessor::{find_attribute, find_entity_type};
use crate::{EvaluationConfig, Result, RulesError};

/// Evaluates evidence rules against a fixed set of literals
///
/// # Examples
///
/// ```
/// use caab_domain::ApplicationType;
/// use caab_rules::{EvaluationConfig, EvidenceEvaluator};
///
/// let evaluator = EvidenceEvaluator::new(EvaluationConfig {
///     emergency_application_type: "DP".to_string(),
///     ..Default::default()
/// });
///
/// let required = evaluator
///     .is_evidence_required(None, None, &ApplicationType::new("DP"), None)
///     .unwrap();
/// assert!(required);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvidenceEvaluator {
    config: EvaluationConfig,
}

impl EvidenceEvaluator {
    /// Create an evaluator with the given configuration
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Whether a document carries the complete status
    pub fn is_complete(&self, document: Option<&AssessmentDocument>) -> bool {
        document
            .and_then(|document| document.status.as_deref())
            .is_some_and(|status| status == self.config.complete_status)
    }

    /// Whether evidence documents are required
    ///
    /// Three signals are OR-ed:
    /// - both assessments complete and either flags evidence as required
    /// - the application is an emergency application
    /// - at least one prior authority is attached
    ///
    /// The assessment signal is evaluated first, so a complete assessment
    /// without a global section is an error even for emergency applications.
    pub fn is_evidence_required(
        &self,
        means: Option<&AssessmentDocument>,
        merits: Option<&AssessmentDocument>,
        application_type: &ApplicationType,
        prior_authorities: Option<&[PriorAuthority]>,
    ) -> Result<bool> {
        let both_complete = self.is_complete(means) && self.is_complete(merits);
        let assessment_required = match (means, merits) {
            (Some(means), Some(merits)) if both_complete => {
                let means_attribute = AssessmentAttribute::MeansEvidenceReqd;
                let merits_attribute = AssessmentAttribute::MeritsEvidenceReqd;
                self.is_assessment_evidence_required(means, means_attribute)?
                    || self.is_assessment_evidence_required(merits, merits_attribute)?
            }
            _ => false,
        };

        let emergency = application_type.id == self.config.emergency_application_type;
        let prior_authority = prior_authorities.is_some_and(|authorities| !authorities.is_empty());

        debug!(
            assessment_required,
            emergency, prior_authority, "Evaluated evidence requirement"
        );

        Ok(assessment_required || emergency || prior_authority)
    }

    /// Whether any global entity flags evidence as required through `attribute`
    ///
    /// Only a value of `true` (in any case) counts. A document without a
    /// global section cannot be evaluated and is an error.
    pub fn is_assessment_evidence_required(
        &self,
        document: &AssessmentDocument,
        attribute: AssessmentAttribute,
    ) -> Result<bool> {
        let Some(global) = find_entity_type(document, AssessmentEntityType::Global) else {
            return Err(RulesError::MissingGlobalEntityType {
                assessment: document.name.clone().unwrap_or_default(),
            });
        };

        Ok(global.entities.iter().any(|entity| {
            find_attribute(entity, attribute)
                .and_then(|found| found.value())
                .is_some_and(|value| value.eq_ignore_ascii_case("true"))
        }))
    }
}

/// Evaluate the evidence requirement with default literals
pub fn is_evidence_required(
    means: Option<&AssessmentDocument>,
    merits: Option<&AssessmentDocument>,
    application_type: &ApplicationType,
    prior_authorities: Option<&[PriorAuthority]>,
) -> Result<bool> {
    EvidenceEvaluator::default().is_evidence_required(
        means,
        merits,
        application_type,
        prior_authorities,
    )
}

/// Read an evidence flag from the global section with default literals
pub fn is_assessment_evidence_required(
    document: &AssessmentDocument,
    attribute: AssessmentAttribute,
) -> Result<bool> {
    EvidenceEvaluator::default().is_assessment_evidence_required(document, attribute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caab_domain::application::APP_TYPE_SUBSTANTIVE;
    use caab_domain::{Attribute, Entity, EntityType};

    fn assessment(name: &str, status: &str, flag: Option<(&str, &str)>) -> AssessmentDocument {
        let mut entity = Entity::new("CASE1");
        if let Some((attribute, value)) = flag {
            entity = entity.with_attribute(Attribute::new(attribute, value));
        }
        AssessmentDocument::new(name, "CASE1")
            .with_status(status)
            .with_entity_type(EntityType::new("global").with_entity(entity))
    }

    fn flagged(name: &str, status: &str, attribute: &str) -> AssessmentDocument {
        assessment(name, status, Some((attribute, "true")))
    }

    fn substantive() -> ApplicationType {
        ApplicationType::new(APP_TYPE_SUBSTANTIVE)
    }

    fn required(
        means: Option<&AssessmentDocument>,
        merits: Option<&AssessmentDocument>,
        application_type: &ApplicationType,
    ) -> bool {
        is_evidence_required(means, merits, application_type, None).unwrap()
    }

    #[test]
    fn test_complete_without_flags_is_not_required() {
        let means = assessment("meansAssessment", "COMPLETE", None);
        let merits = assessment("meritsAssessment", "COMPLETE", None);
        let no_authorities: &[PriorAuthority] = &[];

        let required = is_evidence_required(
            Some(&means),
            Some(&merits),
            &substantive(),
            Some(no_authorities),
        )
        .unwrap();
        assert!(!required);
    }

    #[test]
    fn test_emergency_alone_is_required() {
        let means = assessment("meansAssessment", "COMPLETE", None);
        let merits = assessment("meritsAssessment", "COMPLETE", None);
        let no_authorities: &[PriorAuthority] = &[];
        let emergency = ApplicationType::emergency();

        let required = is_evidence_required(
            Some(&means),
            Some(&merits),
            &emergency,
            Some(no_authorities),
        )
        .unwrap();
        assert!(required);
    }

    #[test]
    fn test_prior_authority_alone_is_required() {
        let authorities = [PriorAuthority::default()];
        let result = is_evidence_required(None, None, &substantive(), Some(&authorities[..]));
        assert!(result.unwrap());

        assert!(!required(None, None, &substantive()));
    }

    #[test]
    fn test_either_flag_requires_evidence() {
        let means = flagged("meansAssessment", "COMPLETE", "MEANS_EVIDENCE_REQD");
        let merits = assessment("meritsAssessment", "COMPLETE", None);
        assert!(required(Some(&means), Some(&merits), &substantive()));

        let means = assessment("meansAssessment", "COMPLETE", None);
        let merits = assessment(
            "meritsAssessment",
            "COMPLETE",
            Some(("merits_evidence_reqd", "TRUE")),
        );
        assert!(required(Some(&means), Some(&merits), &substantive()));
    }

    #[test]
    fn test_incomplete_suppresses_assessment_signal() {
        let means = flagged("meansAssessment", "INCOMPLETE", "MEANS_EVIDENCE_REQD");
        let merits = flagged("meritsAssessment", "COMPLETE", "MERITS_EVIDENCE_REQD");

        assert!(!required(Some(&means), Some(&merits), &substantive()));
        assert!(required(Some(&means), Some(&merits), &ApplicationType::emergency()));
    }

    #[test]
    fn test_missing_assessment_suppresses_assessment_signal() {
        let means = flagged("meansAssessment", "COMPLETE", "MEANS_EVIDENCE_REQD");
        assert!(!required(Some(&means), None, &substantive()));
    }

    #[test]
    fn test_status_match_is_exact() {
        let means = flagged("meansAssessment", "complete", "MEANS_EVIDENCE_REQD");
        let merits = assessment("meritsAssessment", "COMPLETE", None);
        assert!(!required(Some(&means), Some(&merits), &substantive()));
    }

    #[test]
    fn test_missing_global_is_an_error() {
        let means = AssessmentDocument::new("meansAssessment", "CASE1").with_status("COMPLETE");
        let merits = assessment("meritsAssessment", "COMPLETE", None);
        let emergency = ApplicationType::emergency();

        let err = is_evidence_required(Some(&means), Some(&merits), &emergency, None).unwrap_err();
        assert_eq!(
            err,
            RulesError::MissingGlobalEntityType {
                assessment: "meansAssessment".to_string()
            }
        );
    }

    #[test]
    fn test_merits_global_skipped_when_means_flagged() {
        let means = flagged("meansAssessment", "COMPLETE", "MEANS_EVIDENCE_REQD");
        let merits = AssessmentDocument::new("meritsAssessment", "CASE1").with_status("COMPLETE");

        assert!(required(Some(&means), Some(&merits), &substantive()));
    }

    #[test]
    fn test_only_true_is_truthy() {
        for value in ["yes", "1", "", " true", "false"] {
            let document = assessment(
                "meansAssessment",
                "COMPLETE",
                Some(("MEANS_EVIDENCE_REQD", value)),
            );
            let flag = AssessmentAttribute::MeansEvidenceReqd;
            assert!(
                !is_assessment_evidence_required(&document, flag).unwrap(),
                "value {:?} should not be truthy",
                value
            );
        }
    }

    #[test]
    fn test_any_global_entity_may_carry_flag() {
        let flagged_entity =
            Entity::new("CASE1").with_attribute(Attribute::new("MEANS_EVIDENCE_REQD", "true"));
        let document = AssessmentDocument::new("meansAssessment", "CASE1").with_entity_type(
            EntityType::new("GLOBAL")
                .with_entity(Entity::new("CASE1"))
                .with_entity(flagged_entity),
        );

        let flag = AssessmentAttribute::MeansEvidenceReqd;
        assert!(is_assessment_evidence_required(&document, flag).unwrap());
    }

    #[test]
    fn test_custom_config() {
        let evaluator = EvidenceEvaluator::new(EvaluationConfig {
            complete_status: "DONE".to_string(),
            ..Default::default()
        });
        let means = flagged("meansAssessment", "DONE", "MEANS_EVIDENCE_REQD");
        let merits = assessment("meritsAssessment", "DONE", None);

        assert!(evaluator.is_complete(Some(&means)));
        assert!(!evaluator.is_complete(None));
        assert!(evaluator
            .is_evidence_required(Some(&means), Some(&merits), &substantive(), None)
            .unwrap());
    }
}
