//! Evaluation configuration

use caab_domain::application::APP_TYPE_EMERGENCY;
use caab_domain::evidence::DESCRIPTION_DELIMITER;
use caab_domain::AssessmentStatus;
use serde::{Deserialize, Serialize};

use crate::{Result, RulesError};

/// Literals the evidence rules compare against
///
/// The defaults are the values shared with the rest of the application;
/// overriding them is only meant for rulebase test deployments.
///
/// # Examples
///
/// ```
/// use caab_rules::EvaluationConfig;
///
/// let config = EvaluationConfig::default();
/// assert_eq!(config.complete_status, "COMPLETE");
/// assert_eq!(config.emergency_application_type, "EMER");
/// assert_eq!(config.description_delimiter, '^');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Status literal that marks an assessment complete
    pub complete_status: String,

    /// Application-type id that always requires evidence
    pub emergency_application_type: String,

    /// Delimiter between evidence descriptions on an uploaded document
    pub description_delimiter: char,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            complete_status: AssessmentStatus::Complete.as_str().to_string(),
            emergency_application_type: APP_TYPE_EMERGENCY.to_string(),
            description_delimiter: DESCRIPTION_DELIMITER,
        }
    }
}

impl EvaluationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.complete_status.trim().is_empty() {
            return Err(RulesError::Config("complete_status must not be empty".to_string()));
        }
        if self.emergency_application_type.trim().is_empty() {
            return Err(RulesError::Config(
                "emergency_application_type must not be empty".to_string(),
            ));
        }
        if self.description_delimiter.is_whitespace() {
            return Err(RulesError::Config(
                "description_delimiter must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| RulesError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RulesError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EvaluationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EvaluationConfig::from_toml("emergency_application_type = \"DP\"").unwrap();
        assert_eq!(config.emergency_application_type, "DP");
        assert_eq!(config.complete_status, "COMPLETE");
        assert_eq!(config.description_delimiter, '^');
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EvaluationConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(EvaluationConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = EvaluationConfig::from_toml("complete_status = \"  \"");
        assert!(matches!(result, Err(RulesError::Config(_))));

        let config = EvaluationConfig {
            description_delimiter: ' ',
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = EvaluationConfig::from_toml("complete_status = ");
        match result {
            Err(RulesError::Config(msg)) => assert!(msg.contains("Failed to parse TOML")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
