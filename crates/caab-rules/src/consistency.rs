//! Case-reference consistency of the global section
//!
//! The global section of a document must only contain entities named after the
//! document's case reference, and any case-reference attribute they carry must
//! agree. A disagreement means the document was saved against the wrong case.

use caab_domain::names::eq_ignore_case;
use caab_domain::{
    AssessmentAttribute, AssessmentDocument, AssessmentEntityType, DiagnosticSink, Entity,
    ReferenceMismatch,
};
use tracing::warn;

use crate::accessor::{entities_of, find_attribute};
use crate::{Result, RulesError, TracingSink};

/// Checks global entities against the document case reference
///
/// Mismatches are reported to the injected sink and surface as `false`;
/// they never interrupt the caller.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyValidator<S = TracingSink> {
    sink: S,
}

impl ConsistencyValidator<TracingSink> {
    /// Create a validator that reports through `tracing`
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: DiagnosticSink> ConsistencyValidator<S> {
    /// Create a validator reporting to the given sink
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// The sink diagnostics go to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether the global section agrees with the document case reference
    ///
    /// Entity names are checked first for every global entity; the first
    /// mismatch fails. Then the first global entity carrying a case-reference
    /// attribute decides the result. With no such attribute (or no global
    /// entities at all) nothing contradicts the case reference.
    pub fn is_reference_consistent(&self, document: &AssessmentDocument) -> bool {
        let case_reference = document.case_reference_number.as_deref();
        let global_entities = entities_of(document, AssessmentEntityType::Global);

        for entity in global_entities {
            let name_matches =
                case_reference.is_some_and(|reference| eq_ignore_case(reference, &entity.name));
            if !name_matches {
                self.report(document, entity, None);
                return false;
            }
        }

        let first_with_attribute = global_entities.iter().find_map(|entity| {
            find_attribute(entity, AssessmentAttribute::ApplicationCaseRef)
                .map(|attribute| (entity, attribute.value()))
        });
        let Some((entity, value)) = first_with_attribute else {
            return true;
        };

        let consistent = match (case_reference, value) {
            (Some(reference), Some(value)) => {
                eq_ignore_case(reference, &entity.name)
                    && eq_ignore_case(&entity.name, value)
                    && eq_ignore_case(value, reference)
            }
            _ => false,
        };

        if !consistent {
            self.report(document, entity, Some(value.unwrap_or_default()));
        }
        consistent
    }

    /// Require a pre-populated assessment and its assessment to both be consistent
    ///
    /// This is the gate before an assessment pair is saved, so a mismatch here
    /// is an error rather than a diagnostic.
    pub fn ensure_consistent(
        &self,
        prepop: &AssessmentDocument,
        assessment: &AssessmentDocument,
    ) -> Result<()> {
        if self.is_reference_consistent(prepop) && self.is_reference_consistent(assessment) {
            return Ok(());
        }

        let case_reference = assessment
            .case_reference_number
            .clone()
            .unwrap_or_default();
        warn!(
            case_reference = %case_reference,
            "Pre-pop assessment or assessment data is corrupted"
        );
        Err(RulesError::CorruptedAssessment { case_reference })
    }

    fn report(&self, document: &AssessmentDocument, entity: &Entity, attribute: Option<&str>) {
        self.sink.reference_mismatch(&ReferenceMismatch {
            case_reference: document.case_reference_number.clone(),
            assessment: document.name.clone(),
            entity: entity.name.clone(),
            attribute: attribute.map(str::to_string),
        });
    }
}

/// Check reference consistency, reporting mismatches through `tracing`
pub fn is_reference_consistent(document: &AssessmentDocument) -> bool {
    ConsistencyValidator::new().is_reference_consistent(document)
}
