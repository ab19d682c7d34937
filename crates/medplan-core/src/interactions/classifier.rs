//! Pairwise interaction classifier.

use crate::models::Severity;

use super::rules::{INTERACTION_RULES, NO_MATCH_REASON};

/// Classify a pair of free-text drug names against the rule table.
///
/// Case and surrounding whitespace are ignored. Falls back to
/// [`Severity::None`] with [`NO_MATCH_REASON`].
pub fn classify(a: &str, b: &str) -> (Severity, &'static str) {
    let a = normalize_name(a);
    let b = normalize_name(b);

    INTERACTION_RULES
        .iter()
        .find(|rule| rule.matches(&a, &b))
        .map(|rule| (rule.severity, rule.reason))
        .unwrap_or((Severity::None, NO_MATCH_REASON))
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_substring_insensitive() {
        let (severity, reason) = classify("Ibuprofen", "Naproxen Sodium");
        assert_eq!(severity, Severity::Avoid);
        assert!(reason.contains("NSAIDs"));
    }

    #[test]
    fn test_reversed_order() {
        let (severity, _) = classify("  CLARITHROMYCIN ", "simvastatin 40mg");
        assert_eq!(severity, Severity::Avoid);
    }

    #[test]
    fn test_no_match() {
        let (severity, reason) = classify("Aspirin", "Tylenol");
        assert_eq!(severity, Severity::None);
        assert_eq!(reason, NO_MATCH_REASON);
    }

    #[test]
    fn test_first_rule_wins() {
        // Matches both the NSAID rule and the warfarin rule.
        let (severity, _) = classify("ibuprofen", "naproxen/warfarin kit");
        assert_eq!(severity, Severity::Avoid);

        let (severity, _) = classify("Warfarin", "Advil (ibuprofen)");
        assert_eq!(severity, Severity::Caution);
    }
}
