//! Application value objects read by the evidence rules

use serde::{Deserialize, Serialize};

/// Emergency application
pub const APP_TYPE_EMERGENCY: &str = "EMER";

/// Emergency application using devolved powers
pub const APP_TYPE_EMERGENCY_DEVOLVED_POWERS: &str = "DP";

/// Exceptional case funding
pub const APP_TYPE_EXCEPTIONAL_CASE_FUNDING: &str = "ECF";

/// Substantive application
pub const APP_TYPE_SUBSTANTIVE: &str = "SUB";

/// Substantive application using devolved powers
pub const APP_TYPE_SUBSTANTIVE_DEVOLVED_POWERS: &str = "SUBDP";

/// Type of a legal-aid application
///
/// Only the identifier takes part in rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationType {
    /// Type code (e.g. `EMER`)
    pub id: String,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

impl ApplicationType {
    /// Create an application type from its code
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_value: None,
        }
    }

    /// Emergency application type
    pub fn emergency() -> Self {
        Self::new(APP_TYPE_EMERGENCY)
    }
}

/// A prior-authority request attached to an application
///
/// Its presence alone matters to the evidence rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorAuthority {
    /// Prior authority id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Prior authority type code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,

    /// Summary of what is being requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
