//! Inspection profiles: which inspections run and at which severity
//!
//! Profiles come from YAML the host loads alongside a project:
//!
//! ```yaml
//! inspections:
//!   unnecessary_charsequence_tostring:
//!     enabled: true
//!     severity: warning
//! ```
//!
//! Inspections the profile does not mention stay enabled at their default
//! severity.

use std::collections::HashMap;

use javelint_core::Severity;
use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to parse inspection profile: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Severity names accepted in profile files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SeverityName {
    Error,
    Warning,
    Redundant,
}

impl SeverityName {
    fn as_severity(self) -> Severity {
        match self {
            SeverityName::Error => Severity::Error,
            SeverityName::Warning => Severity::Warning,
            SeverityName::Redundant => Severity::Redundant,
        }
    }

    fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => SeverityName::Error,
            Severity::Warning => SeverityName::Warning,
            Severity::Redundant => SeverityName::Redundant,
        }
    }
}

/// Per-inspection settings.
#[derive(Debug, Clone, Deserialize)]
struct InspectionSettings {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    severity: Option<SeverityName>,
}

fn default_enabled() -> bool {
    true
}

/// Host-supplied configuration for an analysis run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InspectionProfile {
    #[serde(default)]
    inspections: HashMap<String, InspectionSettings>,
}

impl InspectionProfile {
    /// Parse a profile from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.inspections
            .get(id)
            .map(|settings| settings.enabled)
            .unwrap_or(true)
    }

    /// Severity override for an inspection, when the profile sets one.
    pub fn severity_for(&self, id: &str) -> Option<Severity> {
        self.inspections
            .get(id)
            .and_then(|settings| settings.severity)
            .map(SeverityName::as_severity)
    }

    /// Disable one inspection.
    pub fn with_disabled(mut self, id: impl Into<String>) -> Self {
        self.inspections.insert(
            id.into(),
            InspectionSettings {
                enabled: false,
                severity: None,
            },
        );
        self
    }

    /// Override the severity of one inspection.
    pub fn with_severity(mut self, id: impl Into<String>, severity: Severity) -> Self {
        self.inspections.insert(
            id.into(),
            InspectionSettings {
                enabled: true,
                severity: Some(SeverityName::from_severity(severity)),
            },
        );
        self
    }
}
