//! Time-of-day templates per dosing frequency.

use crate::models::{Frequency, PreferredTime, SlotTime};

/// Default dose times for a frequency, in slot order.
pub fn dose_times(frequency: Frequency) -> Vec<SlotTime> {
    match frequency {
        Frequency::Qd => vec![SlotTime::daily(8, 0)],
        Frequency::Bid => vec![SlotTime::daily(8, 0), SlotTime::daily(20, 0)],
        Frequency::Tid => vec![
            SlotTime::daily(8, 0),
            SlotTime::daily(14, 0),
            SlotTime::daily(20, 0),
        ],
        Frequency::Qid => vec![
            SlotTime::daily(6, 0),
            SlotTime::daily(12, 0),
            SlotTime::daily(18, 0),
            SlotTime::daily(22, 0),
        ],
        Frequency::Qod => vec![SlotTime::alternate_days(8, 0)],
        Frequency::Prn => vec![SlotTime::AsNeeded],
    }
}

/// Dose times after applying a label's preferred time.
///
/// Only a once-daily medication is retimed, and only to bedtime. Every other
/// combination keeps the frequency template.
pub fn preferred_dose_times(
    frequency: Frequency,
    preferred: Option<PreferredTime>,
) -> Vec<SlotTime> {
    match (frequency, preferred) {
        (Frequency::Qd, Some(PreferredTime::Bedtime)) => vec![SlotTime::daily(22, 0)],
        _ => dose_times(frequency),
    }
}
