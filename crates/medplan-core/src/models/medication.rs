//! Medication models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// Dose unit as submitted by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Unit {
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "mcg")]
    Mcg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mL")]
    Ml,
    #[serde(rename = "tabs")]
    Tabs,
    #[serde(rename = "caps")]
    Caps,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Mg => "mg",
            Unit::Mcg => "mcg",
            Unit::G => "g",
            Unit::Ml => "mL",
            Unit::Tabs => "tabs",
            Unit::Caps => "caps",
        }
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "mg" => Ok(Unit::Mg),
            "mcg" => Ok(Unit::Mcg),
            "g" => Ok(Unit::G),
            "mL" => Ok(Unit::Ml),
            "tabs" => Ok(Unit::Tabs),
            "caps" => Ok(Unit::Caps),
            other => Err(ValidationError::UnknownVariant {
                field: "unit",
                value: other.to_string(),
            }),
        }
    }
}

/// Dosage form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Tablet,
    Capsule,
    Liquid,
    Injection,
    Other,
}

impl Form {
    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Tablet => "tablet",
            Form::Capsule => "capsule",
            Form::Liquid => "liquid",
            Form::Injection => "injection",
            Form::Other => "other",
        }
    }
}

impl FromStr for Form {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "tablet" => Ok(Form::Tablet),
            "capsule" => Ok(Form::Capsule),
            "liquid" => Ok(Form::Liquid),
            "injection" => Ok(Form::Injection),
            "other" => Ok(Form::Other),
            other => Err(ValidationError::UnknownVariant {
                field: "form",
                value: other.to_string(),
            }),
        }
    }
}

/// Dosing frequency (Latin prescription abbreviations).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Once daily
    Qd,
    /// Twice daily
    Bid,
    /// Three times daily
    Tid,
    /// Four times daily
    Qid,
    /// Every other day
    Qod,
    /// As needed
    Prn,
}

impl Frequency {
    /// All frequencies in display order.
    pub const ALL: [Frequency; 6] = [
        Frequency::Qd,
        Frequency::Bid,
        Frequency::Tid,
        Frequency::Qid,
        Frequency::Qod,
        Frequency::Prn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Qd => "qd",
            Frequency::Bid => "bid",
            Frequency::Tid => "tid",
            Frequency::Qid => "qid",
            Frequency::Qod => "qod",
            Frequency::Prn => "prn",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Qd => "QD — Once daily",
            Frequency::Bid => "BID — Twice daily",
            Frequency::Tid => "TID — Three times daily",
            Frequency::Qid => "QID — Four times daily",
            Frequency::Qod => "QOD — Every other day",
            Frequency::Prn => "PRN — As needed",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "qd" => Ok(Frequency::Qd),
            "bid" => Ok(Frequency::Bid),
            "tid" => Ok(Frequency::Tid),
            "qid" => Ok(Frequency::Qid),
            "qod" => Ok(Frequency::Qod),
            "prn" => Ok(Frequency::Prn),
            other => Err(ValidationError::UnknownVariant {
                field: "frequency",
                value: other.to_string(),
            }),
        }
    }
}

/// A medication as submitted in a single request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Opaque identifier, unique within a request
    pub id: String,
    /// Free-text drug name (matched case-insensitively)
    pub name: String,
    /// Free-text dose amount (e.g., "500")
    pub dose: String,
    pub unit: Unit,
    pub form: Form,
    pub frequency: Frequency,
    /// Patient was told to take this with food
    #[serde(rename = "withFood")]
    pub with_food: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Medication {
    /// Create a medication with a freshly generated id.
    pub fn new(name: String, dose: String, unit: Unit, form: Form, frequency: Frequency) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            dose,
            unit,
            form,
            frequency,
            with_food: false,
            notes: None,
        }
    }

    /// Lowercased name used as the label-hint lookup key.
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}
