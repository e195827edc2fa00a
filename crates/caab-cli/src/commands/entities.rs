//! Entities command implementation.

use crate::cli::EntitiesArgs;
use crate::error::Result;
use crate::loader::load_document;
use crate::output::Formatter;
use caab_rules::entities_of_name;

/// Execute the entities command.
pub fn execute_entities(args: EntitiesArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", run_entities(args, formatter)?);
    Ok(())
}

/// Render the entities of one section.
pub fn run_entities(args: EntitiesArgs, formatter: &Formatter) -> Result<String> {
    let document = load_document(&args.file)?;
    let entities = entities_of_name(&document, &args.entity_type);

    formatter.format_entities(&args.entity_type, entities)
}
