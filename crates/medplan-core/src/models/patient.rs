//! Patient models.
//!
//! Patient context is accepted with every request but no rule consults it yet.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// Patient sex.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            other => Err(ValidationError::UnknownVariant {
                field: "sex",
                value: other.to_string(),
            }),
        }
    }
}

/// Patient context submitted alongside a medication list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default, rename = "weightKg")]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub pregnant: Option<bool>,
    #[serde(default)]
    pub breastfeeding: Option<bool>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}
