//! caab-assess - Command-line inspection of legal-aid assessments.

use caab_cli::commands;
use caab_cli::{Cli, Command, Config, Formatter};
use caab_rules::EvidenceEvaluator;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> caab_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the given path or ~/.caab/config.toml
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_tracing(&config.settings.log_filter);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let evaluator = EvidenceEvaluator::new(config.rules);

    match cli.command {
        Command::Latest(args) => commands::execute_latest(args, &formatter)?,
        Command::Consistency(args) => commands::execute_consistency(args, &formatter)?,
        Command::EvidenceRequired(args) => {
            commands::execute_evidence_required(args, &evaluator, &formatter)?
        }
        Command::EvidenceProvided(args) => {
            commands::execute_evidence_provided(args, &evaluator, &formatter)?
        }
        Command::Entities(args) => commands::execute_entities(args, &formatter)?,
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` or else the configured filter.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
