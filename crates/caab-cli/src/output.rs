//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use caab_domain::{
    AssessmentDocument, AssessmentStatus, Entity, EvidenceRequired, ReferenceMismatch,
};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const NONE: &str = "-";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format assessment summaries.
    pub fn format_documents(&self, documents: &[&AssessmentDocument]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_documents_json(documents),
            OutputFormat::Table => Ok(self.format_documents_table(documents)),
            OutputFormat::Quiet => Ok(documents
                .iter()
                .map(|d| d.name.as_deref().unwrap_or(NONE))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_documents_json(&self, documents: &[&AssessmentDocument]) -> Result<String> {
        let summaries: Vec<serde_json::Value> = documents
            .iter()
            .map(|d| {
                serde_json::json!({
                    "id": d.id,
                    "name": d.name,
                    "caseReferenceNumber": d.case_reference_number,
                    "status": d.status,
                    "lastSaved": d.last_saved(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&summaries)?)
    }

    fn format_documents_table(&self, documents: &[&AssessmentDocument]) -> String {
        if documents.is_empty() {
            return self.colorize("No assessments found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Case Reference", "Status", "Last Saved"]);

        for document in documents {
            builder.push_record([
                document
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| NONE.to_string()),
                document.name.clone().unwrap_or_else(|| NONE.to_string()),
                document
                    .case_reference_number
                    .clone()
                    .unwrap_or_else(|| NONE.to_string()),
                self.status(document.status.as_deref()),
                document
                    .last_saved()
                    .map(|saved| saved.to_rfc3339())
                    .unwrap_or_else(|| NONE.to_string()),
            ]);
        }

        self.render(builder)
    }

    /// Format a consistency check result.
    pub fn format_consistency(
        &self,
        document: &AssessmentDocument,
        consistent: bool,
        mismatches: &[ReferenceMismatch],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mismatches: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "name": document.name,
                    "caseReferenceNumber": document.case_reference_number,
                    "consistent": consistent,
                    "mismatches": mismatches,
                }))?)
            }
            OutputFormat::Quiet => Ok(consistent.to_string()),
            OutputFormat::Table => {
                let case_reference = document.case_reference_number.as_deref().unwrap_or(NONE);
                if consistent {
                    let message =
                        format!("Assessment is consistent with case {}", case_reference);
                    return Ok(self.success(&message));
                }

                let message = format!("Assessment is corrupted for case {}", case_reference);
                let mut lines = vec![self.error(&message)];
                lines.extend(mismatches.iter().map(|m| format!("  {}", m)));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the evidence-required decision.
    pub fn format_evidence_required(&self, required: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "evidenceRequired": required,
            }))?),
            OutputFormat::Quiet => Ok(required.to_string()),
            OutputFormat::Table if required => Ok(self.warning("Evidence is required")),
            OutputFormat::Table => Ok(self.info("No evidence is required")),
        }
    }

    /// Format an evidence checklist.
    pub fn format_checklist(&self, checklist: &[EvidenceRequired]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(checklist)?),
            OutputFormat::Quiet => Ok(checklist
                .iter()
                .filter(|item| !item.provided)
                .map(|item| item.description.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Description", "Provided"]);
                for item in checklist {
                    let provided = if item.provided {
                        self.colorize("yes", "green")
                    } else {
                        self.colorize("no", "red")
                    };
                    builder.push_record([item.description.clone(), provided]);
                }

                let summary = if checklist.iter().all(|item| item.provided) {
                    self.success("All evidence provided")
                } else {
                    self.warning("Evidence outstanding")
                };
                Ok(format!("{}\n{}", self.render(builder), summary))
            }
        }
    }

    /// Format the entities of a section.
    pub fn format_entities(&self, section: &str, entities: &[Entity]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = entities
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "name": e.name,
                            "attributes": e.attributes.len(),
                            "relationships": e.relationships.len(),
                            "prepopulated": e.prepopulated,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(entities
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if entities.is_empty() {
                    let message = format!("No entities in section '{}'.", section);
                    return Ok(self.colorize(&message, "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Entity", "Attributes", "Relationships", "Prepopulated"]);
                for entity in entities {
                    builder.push_record([
                        entity.name.clone(),
                        entity.attributes.len().to_string(),
                        entity.relationships.len().to_string(),
                        entity.prepopulated.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Status cell, marked when the assessment is complete.
    fn status(&self, status: Option<&str>) -> String {
        match status {
            Some(complete) if AssessmentStatus::Complete.is(status) => self.success(complete),
            Some(other) => other.to_string(),
            None => NONE.to_string(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
