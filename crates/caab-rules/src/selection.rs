//! Choosing among several versions of an assessment

use caab_domain::names::eq_ignore_case;
use caab_domain::{AssessmentDocument, AssessmentName, AssessmentRulebase};
use tracing::debug;

use crate::{Result, RulesError};

/// Document with the latest last-saved timestamp
///
/// A missing timestamp sorts earliest. Among equal timestamps (including
/// all-missing) the earliest document in input order wins.
///
/// # Examples
///
/// ```
/// use caab_domain::AssessmentDocument;
/// use caab_rules::most_recent;
///
/// assert!(most_recent(&[]).is_none());
///
/// let documents = vec![AssessmentDocument::new("meansAssessment", "CASE1")];
/// assert!(most_recent(&documents).is_some());
/// ```
pub fn most_recent(documents: &[AssessmentDocument]) -> Option<&AssessmentDocument> {
    documents.iter().reduce(|latest, candidate| {
        if candidate.last_saved() > latest.last_saved() {
            candidate
        } else {
            latest
        }
    })
}

/// First document produced by the given rulebase
pub fn find_assessment(
    documents: &[AssessmentDocument],
    rulebase: AssessmentRulebase,
) -> Result<&AssessmentDocument> {
    let name = rulebase.assessment_name();

    documents
        .iter()
        .find(|document| {
            document
                .name
                .as_deref()
                .is_some_and(|candidate| eq_ignore_case(candidate, name))
        })
        .ok_or_else(|| {
            debug!(assessment = name, count = documents.len(), "Assessment not found");
            RulesError::AssessmentNotFound {
                name: name.to_string(),
            }
        })
}

/// Assessment names of every non-financial rulebase with their pre-populated companions
pub fn non_financial_assessment_names_including_prepop() -> Vec<String> {
    AssessmentRulebase::non_financial()
        .into_iter()
        .flat_map(|rulebase| AssessmentName::by_category(rulebase.rulebase_type()))
        .map(|name| name.as_str().to_string())
        .collect()
}
