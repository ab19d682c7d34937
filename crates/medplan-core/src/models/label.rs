//! Label hint models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// Preferred time of day mined from label text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Bedtime,
    Morning,
}

impl PreferredTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredTime::Bedtime => "bedtime",
            PreferredTime::Morning => "morning",
        }
    }
}

impl FromStr for PreferredTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "bedtime" => Ok(PreferredTime::Bedtime),
            "morning" => Ok(PreferredTime::Morning),
            other => Err(ValidationError::UnknownVariant {
                field: "preferred_time_hint",
                value: other.to_string(),
            }),
        }
    }
}

/// Heuristic signals mined from a drug label. Not verified clinical facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelHints {
    /// Label asks for food, and nothing asks for an empty stomach
    pub with_food_hint: bool,
    pub empty_stomach_hint: bool,
    pub preferred_time_hint: Option<PreferredTime>,
    /// Co-administration keywords, in vocabulary order
    pub avoid_coadmin_keywords: Vec<String>,
}

/// One search hit from the label registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelSummary {
    /// Registry set id (stable across label versions)
    pub setid: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Label lookup result for one drug name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelSection {
    /// Drug name exactly as requested
    pub name: String,
    /// Set id of the first registry hit, if any
    pub setid: Option<String>,
    /// Hints extracted from that label; absent when no label was found
    pub hints: Option<LabelHints>,
}

/// Terminology lookup result for one drug name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedName {
    pub name: String,
    pub rxcui: Option<String>,
}
