//! Latest command implementation.

use crate::cli::LatestArgs;
use crate::error::{CliError, Result};
use crate::loader::load_documents;
use crate::output::Formatter;
use caab_domain::names::eq_ignore_case;
use caab_domain::AssessmentRulebase;
use caab_rules::most_recent;
use tracing::info;

/// Execute the latest command.
pub fn execute_latest(args: LatestArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", run_latest(args, formatter)?);
    Ok(())
}

/// Render the most recently saved assessment, optionally narrowed to one
/// rulebase's assessments.
pub fn run_latest(args: LatestArgs, formatter: &Formatter) -> Result<String> {
    let mut documents = load_documents(&args.files)?;

    if let Some(rulebase_type) = args.rulebase.as_deref() {
        let Some(rulebase) = AssessmentRulebase::find_by_type(rulebase_type) else {
            let message = format!("Unknown rulebase type: {}", rulebase_type);
            return Err(CliError::InvalidInput(message));
        };
        let name = if args.prepop {
            rulebase.pre_pop_assessment_name()
        } else {
            rulebase.assessment_name().to_string()
        };
        documents.retain(|document| {
            document
                .name
                .as_deref()
                .is_some_and(|candidate| eq_ignore_case(candidate, &name))
        });
    }

    info!("Selecting latest of {} assessment(s)", documents.len());

    let latest: Vec<_> = most_recent(&documents).into_iter().collect();
    formatter.format_documents(&latest)
}
