//! End-to-end plan tests over recorded registry responses.
//!
//! The fixtures are trimmed DailyMed/RxNav payloads; no network is used.

use std::collections::HashMap;

use medplan_core::models::{
    Form, Frequency, LabelSummary, Medication, Patient, PlanRequest, SlotTime, Unit,
};
use medplan_core::service::{LabelSource, MedPlanService, SourceResult, TerminologySource};
use medplan_core::{LabelDocument, SourceError};
use medplan_registry::{parse_rxcui_response, parse_spl_search_response, parse_spl_xml};

const LEVOTHYROXINE_SEARCH: &str = r#"{"data":[{"setid":"levo-1","title":"LEVOTHYROXINE SODIUM tablet"}]}"#;

const LEVOTHYROXINE_SPL: &str = r#"<document>
  <title>LEVOTHYROXINE SODIUM tablet</title>
  <section>
    <text>Administer once daily on an empty stomach, one-half to one hour before breakfast.</text>
    <text>Take at least 4 hours before or after drugs known to interfere with absorption, such as iron and calcium supplements and antacids.</text>
  </section>
</document>"#;

const ZOLPIDEM_SEARCH: &str = r#"{"data":[{"setid":"zol-1","title":"ZOLPIDEM TARTRATE tablet"}]}"#;

const ZOLPIDEM_SPL: &str = r#"<document>
  <section><text>Take immediately before bedtime. Do not administer with or immediately after a meal.</text></section>
</document>"#;

const NO_HITS: &str = r#"{"data":[]}"#;

/// Label source replaying recorded search and XML payloads.
struct RecordedDailyMed {
    searches: HashMap<String, &'static str>,
    documents: HashMap<String, &'static str>,
}

impl RecordedDailyMed {
    fn new() -> Self {
        let mut searches = HashMap::new();
        searches.insert("levothyroxine".to_string(), LEVOTHYROXINE_SEARCH);
        searches.insert("zolpidem".to_string(), ZOLPIDEM_SEARCH);

        let mut documents = HashMap::new();
        documents.insert("levo-1".to_string(), LEVOTHYROXINE_SPL);
        documents.insert("zol-1".to_string(), ZOLPIDEM_SPL);

        Self { searches, documents }
    }
}

impl LabelSource for RecordedDailyMed {
    fn search(&self, name: &str) -> SourceResult<Vec<LabelSummary>> {
        let body = self.searches.get(&name.to_lowercase()).copied().unwrap_or(NO_HITS);
        Ok(parse_spl_search_response(body)?)
    }

    fn fetch(&self, setid: &str) -> SourceResult<LabelDocument> {
        let xml = self
            .documents
            .get(setid)
            .ok_or_else(|| SourceError::NotFound(setid.to_string()))?;
        Ok(parse_spl_xml(xml)?)
    }
}

struct RecordedRxNav;

impl TerminologySource for RecordedRxNav {
    fn find_rxcui(&self, name: &str) -> SourceResult<Option<String>> {
        let body = match name.to_lowercase().as_str() {
            "levothyroxine" => r#"{"idGroup":{"name":"levothyroxine","rxnormId":["10582"]}}"#,
            _ => r#"{"idGroup":{"name":null}}"#,
        };
        Ok(parse_rxcui_response(body)?)
    }
}

fn med(id: &str, name: &str, frequency: Frequency, with_food: bool) -> Medication {
    let mut med = Medication::new(name.into(), "1".into(), Unit::Tabs, Form::Tablet, frequency);
    med.id = id.into();
    med.with_food = with_food;
    med
}

#[test]
fn test_plan_from_recorded_labels() {
    let service = MedPlanService::new(RecordedRxNav, RecordedDailyMed::new());
    let request = PlanRequest {
        meds: vec![
            med("1", "Levothyroxine", Frequency::Qd, true),
            med("2", "Zolpidem", Frequency::Qd, false),
            med("3", "Lisinopril", Frequency::Bid, false),
        ],
        patient: Patient::default(),
    };

    let plan = service.plan(&request).unwrap();
    assert_eq!(plan.items.len(), 3);
    assert_eq!(plan.caveats.len(), 1);

    // Empty-stomach label overrides the medication's own food flag.
    let levo = &plan.items[0];
    assert_eq!(levo.slots.len(), 1);
    assert_eq!(levo.slots[0].time, SlotTime::daily(8, 0));
    assert_eq!(levo.slots[0].with_food, Some(false));
    assert_eq!(
        levo.slots[0].notes,
        vec![
            "Prefer on an empty stomach.".to_string(),
            "Avoid with: antacids, calcium, iron".to_string(),
        ]
    );

    let zolpidem = &plan.items[1];
    assert_eq!(zolpidem.slots.len(), 1);
    assert_eq!(zolpidem.slots[0].time, SlotTime::daily(22, 0));
    assert_eq!(zolpidem.slots[0].with_food, Some(false));
    assert!(zolpidem.slots[0].notes.is_empty());

    // No label: template and the medication's own flag.
    let lisinopril = &plan.items[2];
    assert_eq!(lisinopril.slots.len(), 2);
    assert!(lisinopril.slots.iter().all(|s| s.notes.is_empty()));
}

#[test]
fn test_normalize_from_recorded_rxnav() {
    let service = MedPlanService::new(RecordedRxNav, RecordedDailyMed::new());
    let out = service
        .normalize(&["Levothyroxine".to_string(), "Zolpidem".to_string()])
        .unwrap();

    assert_eq!(out[0].rxcui, Some("10582".into()));
    assert_eq!(out[1].rxcui, None);
}

#[test]
fn test_plan_serializes_like_the_wire_format() {
    let service = MedPlanService::new(RecordedRxNav, RecordedDailyMed::new());
    let request: PlanRequest = serde_json::from_str(
        r#"{"meds":[{"id":"z","name":"zolpidem","dose":"5","unit":"mg","form":"tablet","frequency":"qd","withFood":false}],
            "patient":{"conditions":[],"allergies":[]}}"#,
    )
    .unwrap();

    let json = serde_json::to_value(service.plan(&request).unwrap()).unwrap();
    assert_eq!(json["items"][0]["med_id"], "z");
    assert_eq!(json["items"][0]["slots"][0]["time"], "22:00");
    assert_eq!(json["items"][0]["slots"][0]["with_food"], false);
}
