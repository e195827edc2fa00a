//! Reading exported assessment and evidence files.
//!
//! Files hold either a single JSON object or an array of them, in the shape
//! the Assessment API returns.

use crate::error::{CliError, Result};
use caab_domain::{AssessmentDocument, EvidenceDocument};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)?;
    let parsed: OneOrMany<T> = serde_json::from_str(&contents)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    let items = parsed.into_vec();
    debug!(path = %path.display(), count = items.len(), "Loaded JSON file");
    Ok(items)
}

/// Load a file that must hold exactly one assessment.
pub fn load_document(path: &Path) -> Result<AssessmentDocument> {
    let mut documents = read_json::<AssessmentDocument>(path)?;
    if documents.len() != 1 {
        return Err(CliError::InvalidInput(format!(
            "{}: expected one assessment, found {}",
            path.display(),
            documents.len()
        )));
    }
    Ok(documents.remove(0))
}

/// Load every assessment from a set of files, in file order.
pub fn load_documents(paths: &[impl AsRef<Path>]) -> Result<Vec<AssessmentDocument>> {
    let mut documents = Vec::new();
    for path in paths {
        documents.extend(read_json::<AssessmentDocument>(path.as_ref())?);
    }
    Ok(documents)
}

/// Load uploaded evidence documents.
pub fn load_evidence(path: &Path) -> Result<Vec<EvidenceDocument>> {
    read_json(path)
}
