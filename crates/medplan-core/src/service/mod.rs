//! Request-level orchestration over the pure core.
//!
//! Flow: names → Terminology / Label registry → Hint extraction → Plan builder
//!
//! The service owns no transport. Callers decode a request, hand it here and
//! encode whatever comes back.

mod sources;

pub use sources::*;

use thiserror::Error;

use crate::interactions::find_interactions;
use crate::labels::extract_label_hints;
use crate::models::{
    InteractionsRequest, InteractionsResponse, LabelSection, NormalizedName, PlanRequest,
    PlanResponse,
};
use crate::planner::{build_plan, index_hints};

/// Service errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Terminology lookup failed for {name}: {source}")]
    Terminology { name: String, source: SourceError },

    #[error("Label lookup failed for {name}: {source}")]
    Label { name: String, source: SourceError },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coordinates the interaction, normalization, label and plan operations.
pub struct MedPlanService<T, L> {
    terminology: T,
    labels: L,
}

impl<T: TerminologySource, L: LabelSource> MedPlanService<T, L> {
    /// Create a new service over the given collaborators.
    pub fn new(terminology: T, labels: L) -> Self {
        Self {
            terminology,
            labels,
        }
    }

    /// Classify every pair of submitted medications.
    ///
    /// Patient context is accepted but not consulted.
    pub fn interactions(&self, request: &InteractionsRequest) -> InteractionsResponse {
        let findings = find_interactions(&request.meds);
        tracing::debug!(
            meds = request.meds.len(),
            findings = findings.len(),
            "Classified medication pairs"
        );
        InteractionsResponse { findings }
    }

    /// Look up a terminology identifier for each name, in input order.
    pub fn normalize(&self, names: &[String]) -> ServiceResult<Vec<NormalizedName>> {
        tracing::debug!(count = names.len(), "Normalizing drug names");

        names
            .iter()
            .map(|name| -> ServiceResult<NormalizedName> {
                let rxcui = self.terminology.find_rxcui(name).map_err(|source| {
                    tracing::warn!(name = %name, error = %source, "Terminology lookup failed");
                    ServiceError::Terminology {
                        name: name.clone(),
                        source,
                    }
                })?;
                Ok(NormalizedName {
                    name: name.clone(),
                    rxcui,
                })
            })
            .collect()
    }

    /// Fetch the first matching label for each name and mine its hints.
    pub fn label_sections(&self, names: &[String]) -> ServiceResult<Vec<LabelSection>> {
        tracing::debug!(count = names.len(), "Fetching label sections");
        names.iter().map(|name| self.label_section(name)).collect()
    }

    fn label_section(&self, name: &str) -> ServiceResult<LabelSection> {
        let label_error = |source: SourceError| {
            tracing::warn!(name = %name, error = %source, "Label lookup failed");
            ServiceError::Label {
                name: name.to_string(),
                source,
            }
        };

        let setid = self
            .labels
            .search(name)
            .map_err(label_error)?
            .into_iter()
            .next()
            .map(|summary| summary.setid);

        let hints = match &setid {
            Some(setid) => {
                let document = self.labels.fetch(setid).map_err(label_error)?;
                Some(extract_label_hints(&document))
            }
            None => {
                tracing::debug!(name = %name, "No label found");
                None
            }
        };

        Ok(LabelSection {
            name: name.to_string(),
            setid,
            hints,
        })
    }

    /// Build a dosing plan from label hints for every submitted medication.
    pub fn plan(&self, request: &PlanRequest) -> ServiceResult<PlanResponse> {
        let names: Vec<String> = request.meds.iter().map(|m| m.name.clone()).collect();
        let sections = self.label_sections(&names)?;
        let hints = index_hints(&sections);

        let plan = build_plan(&request.meds, &hints);
        tracing::info!(
            meds = request.meds.len(),
            labelled = hints.len(),
            "Built dosing plan"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelDocument;
    use crate::models::{Form, Frequency, Medication, Patient, SlotTime, Unit};

    fn service() -> MedPlanService<StaticTerminology, StaticLabelSource> {
        let terminology = StaticTerminology::new().with("simvastatin", "36567");
        let labels = StaticLabelSource::new().with_label(
            "Simvastatin",
            "simva-set",
            LabelDocument::text("Take in the evening or at bedtime. Avoid grapefruit juice."),
        );
        MedPlanService::new(terminology, labels)
    }

    /// Label source whose fetch always fails.
    struct BrokenLabels;

    impl LabelSource for BrokenLabels {
        fn search(&self, _name: &str) -> SourceResult<Vec<crate::models::LabelSummary>> {
            Ok(vec![crate::models::LabelSummary {
                setid: "x".into(),
                title: None,
            }])
        }

        fn fetch(&self, _setid: &str) -> SourceResult<LabelDocument> {
            Err(SourceError::Upstream {
                status: 503,
                body: "maintenance".into(),
            })
        }
    }

    #[test]
    fn test_normalize_in_order() {
        let names = vec!["Simvastatin".to_string(), "Unobtainium".to_string()];
        let out = service().normalize(&names).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].rxcui, Some("36567".into()));
        assert_eq!(out[1].name, "Unobtainium");
        assert_eq!(out[1].rxcui, None);
    }

    #[test]
    fn test_label_sections() {
        let names = vec!["Simvastatin".to_string(), "Unobtainium".to_string()];
        let sections = service().label_sections(&names).unwrap();

        assert_eq!(sections[0].setid, Some("simva-set".into()));
        let hints = sections[0].hints.as_ref().unwrap();
        assert_eq!(hints.avoid_coadmin_keywords, vec!["grapefruit".to_string()]);

        assert_eq!(sections[1].setid, None);
        assert!(sections[1].hints.is_none());
    }

    #[test]
    fn test_plan_uses_label_hints() {
        let mut med = Medication::new(
            "Simvastatin".into(),
            "40".into(),
            Unit::Mg,
            Form::Tablet,
            Frequency::Qd,
        );
        med.id = "m1".into();

        let request = PlanRequest {
            meds: vec![med],
            patient: Patient::default(),
        };
        let plan = service().plan(&request).unwrap();

        assert_eq!(plan.items.len(), 1);
        let slots = &plan.items[0].slots;
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].time, SlotTime::daily(22, 0));
        assert_eq!(slots[0].notes, vec!["Avoid with: grapefruit".to_string()]);
        assert_eq!(plan.caveats.len(), 1);
    }

    #[test]
    fn test_label_failure_propagates() {
        let service = MedPlanService::new(StaticTerminology::new(), BrokenLabels);
        let err = service.label_sections(&["Warfarin".to_string()]).unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Label { ref name, source: SourceError::Upstream { status: 503, .. } }
                if name == "Warfarin"
        ));
    }

    #[test]
    fn test_interactions_ignore_patient() {
        let meds = vec![
            Medication::new(
                "Metformin".into(),
                "500".into(),
                Unit::Mg,
                Form::Tablet,
                Frequency::Bid,
            ),
            Medication::new(
                "Cimetidine".into(),
                "400".into(),
                Unit::Mg,
                Form::Tablet,
                Frequency::Bid,
            ),
        ];
        let bare = InteractionsRequest {
            meds: meds.clone(),
            patient: Patient::default(),
        };
        let pregnant = InteractionsRequest {
            meds,
            patient: Patient {
                pregnant: Some(true),
                ..Default::default()
            },
        };

        let service = service();
        assert_eq!(service.interactions(&bare), service.interactions(&pregnant));
        assert_eq!(service.interactions(&bare).findings.len(), 1);
    }
}
