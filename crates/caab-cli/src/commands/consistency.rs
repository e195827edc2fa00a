//! Consistency command implementation.

use crate::cli::ConsistencyArgs;
use crate::error::Result;
use crate::loader::load_document;
use crate::output::Formatter;
use caab_rules::{ConsistencyValidator, MemorySink};

/// Execute the consistency command.
///
/// A corrupted assessment is a finding, not a failure, so the command
/// succeeds either way.
pub fn execute_consistency(args: ConsistencyArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", run_consistency(args, formatter)?);
    Ok(())
}

/// Check the assessment and render the verdict with any mismatches.
pub fn run_consistency(args: ConsistencyArgs, formatter: &Formatter) -> Result<String> {
    let document = load_document(&args.file)?;

    let validator = ConsistencyValidator::with_sink(MemorySink::new());
    let consistent = validator.is_reference_consistent(&document);
    let mismatches = validator.sink().mismatches();

    for mismatch in &mismatches {
        tracing::warn!(file = %args.file.display(), "{}", mismatch);
    }

    formatter.format_consistency(&document, consistent, &mismatches)
}
