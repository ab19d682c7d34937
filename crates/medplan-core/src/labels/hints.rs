//! Label hint extraction.
//!
//! Heuristic text mining over the flattened label. Every pattern runs against
//! the whole lowercased blob; none of them look at section structure.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{LabelHints, PreferredTime};

use super::LabelDocument;

/// Co-administration keywords, in reporting order.
pub const COADMIN_KEYWORDS: [&str; 6] = [
    "antacids",
    "calcium",
    "iron",
    "magnesium",
    "dairy",
    "grapefruit",
];

static WITH_FOOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"take with food|with meals|administer with food").expect("valid with-food pattern")
});

static EMPTY_STOMACH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"empty stomach|1 hour before|2 hours after meals")
        .expect("valid empty-stomach pattern")
});

static BEDTIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bbedtime\b").expect("valid bedtime pattern"));

static MORNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmorning\b").expect("valid morning pattern"));

/// Derive dosing hints from a label document.
pub fn extract_label_hints(document: &LabelDocument) -> LabelHints {
    hints_from_text(&document.flatten().to_lowercase())
}

/// Derive dosing hints from an already-flattened, lowercased label blob.
pub fn hints_from_text(blob: &str) -> LabelHints {
    let with_food = WITH_FOOD.is_match(blob);
    let empty_stomach = EMPTY_STOMACH.is_match(blob);

    let preferred_time_hint = if BEDTIME.is_match(blob) {
        Some(PreferredTime::Bedtime)
    } else if MORNING.is_match(blob) {
        Some(PreferredTime::Morning)
    } else {
        None
    };

    let avoid_coadmin_keywords = COADMIN_KEYWORDS
        .iter()
        .filter(|k| blob.contains(*k))
        .map(|k| k.to_string())
        .collect();

    LabelHints {
        // Empty-stomach guidance overrides food guidance
        with_food_hint: with_food && !empty_stomach,
        empty_stomach_hint: empty_stomach,
        preferred_time_hint,
        avoid_coadmin_keywords,
    }
}
