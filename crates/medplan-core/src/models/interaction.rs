//! Interaction finding models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Medication, Patient};

/// Classifier output tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Contraindicated combination
    Avoid,
    /// Monitor when combined
    Caution,
    /// No known issue in the rule table
    None,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Avoid => "Avoid",
            Severity::Caution => "Caution",
            Severity::None => "None",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one pair of medications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionFinding {
    /// Name of the earlier medication in the submitted list
    pub a: String,
    /// Name of the later medication in the submitted list
    pub b: String,
    pub severity: Severity,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionsRequest {
    pub meds: Vec<Medication>,
    #[serde(default)]
    pub patient: Patient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionsResponse {
    pub findings: Vec<InteractionFinding>,
}
