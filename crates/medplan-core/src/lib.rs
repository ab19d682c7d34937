//! MedPlan Core Library
//!
//! Educational drug-interaction lookup and label-driven dosing planner.
//! Nothing here is a clinical knowledge base: the rule table is a demo and
//! label hints are keyword heuristics.
//!
//! # Architecture
//!
//! ```text
//!   Medication list ──────────────────────────► Interaction Classifier
//!         │                                      (every unordered pair)
//!         │
//!         ▼
//!   Label registry (collaborator)
//!         │  structured label document
//!         ▼
//!   Label-Hint Extractor ──► hints by name ──► Plan Builder ──► dose slots
//!                                                              + caveats
//! ```
//!
//! # Core Principle
//!
//! **Every plan carries the educational caveat.** The builder never drops it.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Medication, Patient, LabelHints, DoseSlot, etc.)
//! - [`interactions`]: Rule table and pairwise classifier
//! - [`labels`]: Label document tree and hint extraction
//! - [`planner`]: Frequency templates and plan assembly
//! - [`service`]: Request orchestration over terminology/label collaborators

pub mod interactions;
pub mod labels;
pub mod models;
pub mod planner;
pub mod service;

// Re-export commonly used types
pub use interactions::{classify, find_interactions};
pub use labels::{extract_label_hints, LabelDocument, Scalar};
pub use models::{
    DoseSlot, Form, Frequency, InteractionFinding, LabelHints, LabelSection, Medication, Patient,
    PlanItem, PlanResponse, PreferredTime, Severity, SlotTime, Unit, ValidationError,
};
pub use planner::{build_plan, index_hints, HintIndex};
pub use service::{LabelSource, MedPlanService, ServiceError, SourceError, TerminologySource};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "medplan_core=info,medplan_registry=info";

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
#[uniffi::export]
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::info!("MedPlan core v{} logging initialised", env!("CARGO_PKG_VERSION"));
    }
}

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedPlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ValidationError> for MedPlanError {
    fn from(e: ValidationError) -> Self {
        MedPlanError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for MedPlanError {
    fn from(e: serde_json::Error) -> Self {
        MedPlanError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Classify a single pair of drug names.
#[uniffi::export]
pub fn classify_pair(a: String, b: String) -> FfiClassification {
    let (severity, reason) = classify(&a, &b);
    FfiClassification {
        severity: severity.to_string(),
        reason: reason.to_string(),
    }
}

/// Classify every unordered pair of medications, in list order.
#[uniffi::export]
pub fn check_interactions(
    meds: Vec<FfiMedication>,
) -> Result<Vec<FfiInteractionFinding>, MedPlanError> {
    let meds = into_medications(meds)?;
    Ok(find_interactions(&meds)
        .into_iter()
        .map(|f| f.into())
        .collect())
}

/// Extract label hints from a label document encoded as JSON.
#[uniffi::export]
pub fn extract_label_hints_json(label_json: String) -> Result<FfiLabelHints, MedPlanError> {
    let value: serde_json::Value = serde_json::from_str(&label_json)?;
    let document = LabelDocument::from(value);
    Ok(extract_label_hints(&document).into())
}

/// Build a dosing plan from medications and per-drug label hints.
#[uniffi::export]
pub fn build_dosing_plan(
    meds: Vec<FfiMedication>,
    hints: Vec<FfiNamedHints>,
) -> Result<FfiPlan, MedPlanError> {
    let meds = into_medications(meds)?;

    let mut index = HintIndex::new();
    for named in hints {
        index.insert(named.name.to_lowercase(), named.hints.try_into()?);
    }

    Ok(build_plan(&meds, &index).into())
}

fn into_medications(meds: Vec<FfiMedication>) -> Result<Vec<Medication>, MedPlanError> {
    meds.into_iter()
        .map(|m| Medication::try_from(m).map_err(MedPlanError::from))
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medication. Enum fields use their wire strings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub id: String,
    pub name: String,
    pub dose: String,
    pub unit: String,
    pub form: String,
    pub frequency: String,
    pub with_food: bool,
    pub notes: Option<String>,
}

impl TryFrom<FfiMedication> for Medication {
    type Error = ValidationError;

    fn try_from(med: FfiMedication) -> Result<Self, Self::Error> {
        Ok(Medication {
            id: med.id,
            name: med.name,
            dose: med.dose,
            unit: med.unit.parse()?,
            form: med.form.parse()?,
            frequency: med.frequency.parse()?,
            with_food: med.with_food,
            notes: med.notes,
        })
    }
}

/// FFI-safe classification result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClassification {
    pub severity: String,
    pub reason: String,
}

/// FFI-safe interaction finding.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInteractionFinding {
    pub a: String,
    pub b: String,
    pub severity: String,
    pub reason: String,
}

impl From<InteractionFinding> for FfiInteractionFinding {
    fn from(finding: InteractionFinding) -> Self {
        Self {
            a: finding.a,
            b: finding.b,
            severity: finding.severity.to_string(),
            reason: finding.reason,
        }
    }
}

/// FFI-safe label hints.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabelHints {
    pub with_food_hint: bool,
    pub empty_stomach_hint: bool,
    pub preferred_time_hint: Option<String>,
    pub avoid_coadmin_keywords: Vec<String>,
}

impl From<LabelHints> for FfiLabelHints {
    fn from(hints: LabelHints) -> Self {
        Self {
            with_food_hint: hints.with_food_hint,
            empty_stomach_hint: hints.empty_stomach_hint,
            preferred_time_hint: hints.preferred_time_hint.map(|p| p.as_str().to_string()),
            avoid_coadmin_keywords: hints.avoid_coadmin_keywords,
        }
    }
}

impl TryFrom<FfiLabelHints> for LabelHints {
    type Error = ValidationError;

    fn try_from(hints: FfiLabelHints) -> Result<Self, Self::Error> {
        Ok(LabelHints {
            with_food_hint: hints.with_food_hint,
            empty_stomach_hint: hints.empty_stomach_hint,
            preferred_time_hint: hints
                .preferred_time_hint
                .as_deref()
                .map(str::parse)
                .transpose()?,
            avoid_coadmin_keywords: hints.avoid_coadmin_keywords,
        })
    }
}

/// Label hints for one drug name.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNamedHints {
    pub name: String,
    pub hints: FfiLabelHints,
}

/// FFI-safe dose slot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoseSlot {
    pub time: String,
    pub with_food: Option<bool>,
    pub notes: Vec<String>,
}

impl From<DoseSlot> for FfiDoseSlot {
    fn from(slot: DoseSlot) -> Self {
        Self {
            time: slot.time.to_string(),
            with_food: slot.with_food,
            notes: slot.notes,
        }
    }
}

/// FFI-safe plan item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPlanItem {
    pub med_id: String,
    pub med_name: String,
    pub slots: Vec<FfiDoseSlot>,
}

impl From<PlanItem> for FfiPlanItem {
    fn from(item: PlanItem) -> Self {
        Self {
            med_id: item.med_id,
            med_name: item.med_name,
            slots: item.slots.into_iter().map(|s| s.into()).collect(),
        }
    }
}

/// FFI-safe plan.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPlan {
    pub items: Vec<FfiPlanItem>,
    pub caveats: Vec<String>,
}

impl From<PlanResponse> for FfiPlan {
    fn from(plan: PlanResponse) -> Self {
        Self {
            items: plan.items.into_iter().map(|i| i.into()).collect(),
            caveats: plan.caveats,
        }
    }
}
