//! Dosing plan builder.
//!
//! Each medication gets the time template for its frequency, adjusted by the
//! hints mined from its label. Medications are planned independently: two
//! empty-stomach drugs can still land in the same slot.

mod schedule;

pub use schedule::*;

use std::collections::HashMap;

use crate::models::{DoseSlot, LabelHints, LabelSection, Medication, PlanItem, PlanResponse};

/// Disclaimer attached to every plan.
pub const EDUCATIONAL_CAVEAT: &str = "Educational tool only—confirm with a licensed clinician.";

/// Note added to every slot of an empty-stomach medication.
pub const EMPTY_STOMACH_NOTE: &str = "Prefer on an empty stomach.";

/// Label hints keyed by lowercased drug name.
pub type HintIndex = HashMap<String, LabelHints>;

/// Index label sections by lowercased name, dropping names with no label.
///
/// Later sections win when two names differ only by case.
pub fn index_hints<'a>(sections: impl IntoIterator<Item = &'a LabelSection>) -> HintIndex {
    sections
        .into_iter()
        .filter_map(|section| {
            section
                .hints
                .as_ref()
                .map(|hints| (section.name.to_lowercase(), hints.clone()))
        })
        .collect()
}

/// Build a dosing plan for every medication, in input order.
pub fn build_plan(meds: &[Medication], hints: &HintIndex) -> PlanResponse {
    PlanResponse {
        items: meds
            .iter()
            .map(|med| plan_item(med, hints.get(&med.lookup_key())))
            .collect(),
        caveats: vec![EDUCATIONAL_CAVEAT.to_string()],
    }
}

/// Plan a single medication against its (optional) label hints.
pub fn plan_item(med: &Medication, hints: Option<&LabelHints>) -> PlanItem {
    let mut with_food = med.with_food;
    let mut notes = Vec::new();
    let mut times = dose_times(med.frequency);

    if let Some(hints) = hints {
        with_food = with_food || hints.with_food_hint;
        if hints.empty_stomach_hint {
            with_food = false;
            notes.push(EMPTY_STOMACH_NOTE.to_string());
        }

        times = preferred_dose_times(med.frequency, hints.preferred_time_hint);

        if !hints.avoid_coadmin_keywords.is_empty() {
            notes.push(format!("Avoid with: {}", hints.avoid_coadmin_keywords.join(", ")));
        }
    }

    let slots = times
        .into_iter()
        .map(|time| DoseSlot {
            time,
            with_food: Some(with_food),
            notes: notes.clone(),
        })
        .collect();

    PlanItem {
        med_id: med.id.clone(),
        med_name: med.name.clone(),
        slots,
    }
}
