//! Drug interaction lookup.
//!
//! Every unordered pair of a medication list is classified against a fixed
//! rule table. Rules know nothing about patient context.

mod classifier;
mod rules;

pub use classifier::*;
pub use rules::*;

use crate::models::{InteractionFinding, Medication};

/// Classify every unordered pair `(i, j)` with `i < j`, in list order.
///
/// Lists of zero or one medication produce no findings.
pub fn find_interactions(meds: &[Medication]) -> Vec<InteractionFinding> {
    let mut findings = Vec::with_capacity(meds.len() * meds.len().saturating_sub(1) / 2);

    for (i, first) in meds.iter().enumerate() {
        for second in &meds[i + 1..] {
            let (severity, reason) = classify(&first.name, &second.name);
            findings.push(InteractionFinding {
                a: first.name.clone(),
                b: second.name.clone(),
                severity,
                reason: reason.to_string(),
            });
        }
    }

    findings
}
