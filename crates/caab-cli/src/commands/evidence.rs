//! Evidence command implementations.

use crate::cli::{EvidenceProvidedArgs, EvidenceRequiredArgs};
use crate::error::Result;
use crate::loader::{load_document, load_evidence};
use crate::output::Formatter;
use caab_domain::{ApplicationType, EvidenceRequirement, PriorAuthority};
use caab_rules::EvidenceEvaluator;
use tracing::info;

/// Execute the evidence-required command.
pub fn execute_evidence_required(
    args: EvidenceRequiredArgs,
    evaluator: &EvidenceEvaluator,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", run_evidence_required(args, evaluator, formatter)?);
    Ok(())
}

/// Decide whether evidence is required and render the answer.
pub fn run_evidence_required(
    args: EvidenceRequiredArgs,
    evaluator: &EvidenceEvaluator,
    formatter: &Formatter,
) -> Result<String> {
    let means = args.means.as_deref().map(load_document).transpose()?;
    let merits = args.merits.as_deref().map(load_document).transpose()?;
    let application_type = ApplicationType::new(args.application_type);
    let prior_authorities = vec![PriorAuthority::default(); args.prior_authorities];

    let required = evaluator.is_evidence_required(
        means.as_ref(),
        merits.as_ref(),
        &application_type,
        Some(prior_authorities.as_slice()),
    )?;

    formatter.format_evidence_required(required)
}

/// Execute the evidence-provided command.
pub fn execute_evidence_provided(
    args: EvidenceProvidedArgs,
    evaluator: &EvidenceEvaluator,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", run_evidence_provided(args, evaluator, formatter)?);
    Ok(())
}

/// Build the evidence checklist and render it.
pub fn run_evidence_provided(
    args: EvidenceProvidedArgs,
    evaluator: &EvidenceEvaluator,
    formatter: &Formatter,
) -> Result<String> {
    let uploaded = load_evidence(&args.uploaded)?;
    let requirements: Vec<EvidenceRequirement> = args
        .descriptions
        .into_iter()
        .map(EvidenceRequirement::new)
        .collect();

    let checklist = evaluator.evidence_checklist(&requirements, &uploaded);
    info!(
        "{} of {} description(s) provided by {} document(s)",
        checklist.iter().filter(|item| item.provided).count(),
        checklist.len(),
        uploaded.len()
    );

    formatter.format_checklist(&checklist)
}
