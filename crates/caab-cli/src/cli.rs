//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CAAB assessment tool - Inspect exported assessments and evaluate evidence rules.
#[derive(Debug, Parser)]
#[command(name = "caab-assess")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CAAB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the most recently saved of several assessment versions
    Latest(LatestArgs),

    /// Check that an assessment's global section matches its case reference
    Consistency(ConsistencyArgs),

    /// Decide whether evidence documents are required
    EvidenceRequired(EvidenceRequiredArgs),

    /// Check evidence descriptions against uploaded documents
    EvidenceProvided(EvidenceProvidedArgs),

    /// List the entities of one section of an assessment
    Entities(EntitiesArgs),
}

/// Arguments for the latest command.
#[derive(Debug, Parser)]
pub struct LatestArgs {
    /// Assessment JSON files (each a document or an array of documents)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only consider this rulebase's assessments (e.g. MEANS, MERITS)
    #[arg(short, long)]
    pub rulebase: Option<String>,

    /// Consider the rulebase's pre-populated assessment instead
    #[arg(long, requires = "rulebase")]
    pub prepop: bool,
}

/// Arguments for the consistency command.
#[derive(Debug, Parser)]
pub struct ConsistencyArgs {
    /// Assessment JSON file
    pub file: PathBuf,
}

/// Arguments for the evidence-required command.
#[derive(Debug, Parser)]
pub struct EvidenceRequiredArgs {
    /// Means assessment JSON file
    #[arg(long)]
    pub means: Option<PathBuf>,

    /// Merits assessment JSON file
    #[arg(long)]
    pub merits: Option<PathBuf>,

    /// Application type code (e.g. EMER, SUB)
    #[arg(short, long)]
    pub application_type: String,

    /// Number of prior authorities attached to the application
    #[arg(short, long, default_value = "0")]
    pub prior_authorities: usize,
}

/// Arguments for the evidence-provided command.
#[derive(Debug, Parser)]
pub struct EvidenceProvidedArgs {
    /// Uploaded evidence documents JSON file
    #[arg(short, long)]
    pub uploaded: PathBuf,

    /// Evidence descriptions to look for
    #[arg(required = true)]
    pub descriptions: Vec<String>,
}

/// Arguments for the entities command.
#[derive(Debug, Parser)]
pub struct EntitiesArgs {
    /// Assessment JSON file
    pub file: PathBuf,

    /// Section name (e.g. global, proceeding, opponent_other_parties)
    pub entity_type: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["caab-assess"]).is_err());
    }

    #[test]
    fn test_latest_command() {
        let cli = Cli::parse_from(["caab-assess", "latest", "a.json", "b.json"]);
        match cli.command {
            Command::Latest(args) => assert_eq!(args.files.len(), 2),
            _ => panic!("Expected Latest command"),
        }
    }

    #[test]
    fn test_latest_rulebase_filter() {
        let cli = Cli::parse_from([
            "caab-assess",
            "latest",
            "a.json",
            "--rulebase",
            "means",
            "--prepop",
        ]);
        match cli.command {
            Command::Latest(args) => {
                assert_eq!(args.rulebase.as_deref(), Some("means"));
                assert!(args.prepop);
            }
            _ => panic!("Expected Latest command"),
        }

        let without_rulebase = ["caab-assess", "latest", "a.json", "--prepop"];
        assert!(Cli::try_parse_from(without_rulebase).is_err());
    }

    #[test]
    fn test_latest_requires_files() {
        assert!(Cli::try_parse_from(["caab-assess", "latest"]).is_err());
    }

    #[test]
    fn test_evidence_required_command() {
        let cli = Cli::parse_from([
            "caab-assess",
            "--format",
            "json",
            "evidence-required",
            "--means",
            "means.json",
            "--application-type",
            "EMER",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::EvidenceRequired(args) => {
                assert_eq!(args.means, Some(PathBuf::from("means.json")));
                assert!(args.merits.is_none());
                assert_eq!(args.application_type, "EMER");
                assert_eq!(args.prior_authorities, 0);
            }
            _ => panic!("Expected EvidenceRequired command"),
        }
    }

    #[test]
    fn test_evidence_provided_command() {
        let cli = Cli::parse_from([
            "caab-assess",
            "evidence-provided",
            "--uploaded",
            "docs.json",
            "Payslip",
            "Bank Statement",
            "--no-color",
        ]);
        assert!(cli.no_color);
        match cli.command {
            Command::EvidenceProvided(args) => {
                assert_eq!(args.descriptions, vec!["Payslip", "Bank Statement"]);
            }
            _ => panic!("Expected EvidenceProvided command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
