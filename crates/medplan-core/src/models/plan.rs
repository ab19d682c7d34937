//! Dosing plan models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{Medication, Patient, ValidationError};

const CLOCK_FORMAT: &str = "%H:%M";
const ALT_DAYS_SUFFIX: &str = " (alt days)";
const AS_NEEDED: &str = "As needed";

/// When a dose slot falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SlotTime {
    /// Every day at a clock time
    At(NaiveTime),
    /// Every other day at a clock time
    AlternateDays(NaiveTime),
    /// No fixed time
    AsNeeded,
}

impl SlotTime {
    /// Daily slot at `hour:minute`.
    ///
    /// Panics on an out-of-range clock time; only used with literal template times.
    pub fn daily(hour: u32, minute: u32) -> Self {
        SlotTime::At(clock(hour, minute))
    }

    /// Alternate-day slot at `hour:minute`.
    pub fn alternate_days(hour: u32, minute: u32) -> Self {
        SlotTime::AlternateDays(clock(hour, minute))
    }

    /// The clock time, if the slot has one.
    pub fn clock_time(&self) -> Option<NaiveTime> {
        match self {
            SlotTime::At(t) | SlotTime::AlternateDays(t) => Some(*t),
            SlotTime::AsNeeded => None,
        }
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("template clock time out of range")
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotTime::At(t) => write!(f, "{}", t.format(CLOCK_FORMAT)),
            SlotTime::AlternateDays(t) => {
                write!(f, "{}{}", t.format(CLOCK_FORMAT), ALT_DAYS_SUFFIX)
            }
            SlotTime::AsNeeded => f.write_str(AS_NEEDED),
        }
    }
}

impl FromStr for SlotTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == AS_NEEDED {
            return Ok(SlotTime::AsNeeded);
        }
        let parse = |clock: &str| {
            NaiveTime::parse_from_str(clock, CLOCK_FORMAT)
                .map_err(|_| ValidationError::MalformedTime(s.to_string()))
        };
        match s.strip_suffix(ALT_DAYS_SUFFIX) {
            Some(clock) => Ok(SlotTime::AlternateDays(parse(clock)?)),
            None => Ok(SlotTime::At(parse(s)?)),
        }
    }
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for SlotTime {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A single scheduled dose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseSlot {
    pub time: SlotTime,
    pub with_food: Option<bool>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// All dose slots for one medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    pub med_id: String,
    pub med_name: String,
    pub slots: Vec<DoseSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub meds: Vec<Medication>,
    #[serde(default)]
    pub patient: Patient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResponse {
    pub items: Vec<PlanItem>,
    pub caveats: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_display() {
        assert_eq!(SlotTime::daily(8, 0).to_string(), "08:00");
        assert_eq!(SlotTime::daily(22, 0).to_string(), "22:00");
        assert_eq!(SlotTime::alternate_days(8, 0).to_string(), "08:00 (alt days)");
        assert_eq!(SlotTime::AsNeeded.to_string(), "As needed");
    }

    #[test]
    fn test_slot_time_parse() {
        assert_eq!("14:00".parse::<SlotTime>().unwrap(), SlotTime::daily(14, 0));
        assert_eq!(
            "08:00 (alt days)".parse::<SlotTime>().unwrap(),
            SlotTime::alternate_days(8, 0)
        );
        assert_eq!("As needed".parse::<SlotTime>().unwrap(), SlotTime::AsNeeded);
        assert_eq!(
            "noon".parse::<SlotTime>().unwrap_err(),
            ValidationError::MalformedTime("noon".into())
        );
    }

    #[test]
    fn test_dose_slot_serializes_time_as_string() {
        let slot = DoseSlot {
            time: SlotTime::alternate_days(8, 0),
            with_food: Some(true),
            notes: vec![],
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["time"], "08:00 (alt days)");

        let back: DoseSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(SlotTime::AsNeeded.clock_time(), None);
        assert_eq!(
            SlotTime::alternate_days(8, 0).clock_time(),
            NaiveTime::from_hms_opt(8, 0, 0)
        );
    }
}
