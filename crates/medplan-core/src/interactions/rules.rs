//! Demo interaction rule table.
//!
//! Rules are checked in order and the first hit wins, so more specific pairs
//! must come before broader ones.

use crate::models::Severity;

/// Reason attached to pairs no rule matched.
pub const NO_MATCH_REASON: &str = "No known interaction from demo rules.";

/// A pairwise rule matched by substring containment on lowercased names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionRule {
    pub first: &'static str,
    pub second: &'static str,
    pub severity: Severity,
    pub reason: &'static str,
}

impl InteractionRule {
    /// Check both assignments of the rule keys to the two names.
    ///
    /// Both names must already be trimmed and lowercased.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (a.contains(self.first) && b.contains(self.second))
            || (a.contains(self.second) && b.contains(self.first))
    }
}

/// The fixed rule table. Swap for a real knowledge base later.
pub static INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        first: "ibuprofen",
        second: "naproxen",
        severity: Severity::Avoid,
        reason: "Two NSAIDs increase GI/renal risk without added benefit.",
    },
    InteractionRule {
        first: "simvastatin",
        second: "clarithromycin",
        severity: Severity::Avoid,
        reason: "Clarithromycin inhibits metabolism of simvastatin → rhabdomyolysis risk.",
    },
    InteractionRule {
        first: "warfarin",
        second: "ibuprofen",
        severity: Severity::Caution,
        reason: "Bleeding risk increases. Monitor INR and avoid long-term combo.",
    },
    InteractionRule {
        first: "metformin",
        second: "cimetidine",
        severity: Severity::Caution,
        reason: "May increase metformin levels. Monitor for GI/lactic acidosis risk.",
    },
];
