//! DailyMed v2 response handling.

use medplan_core::models::LabelSummary;
use serde::Deserialize;

use crate::RegistryResult;

/// Response body from `/spls.json`.
#[derive(Debug, Deserialize)]
struct SplListResponse {
    #[serde(default)]
    data: Option<Vec<SplListEntry>>,
}

#[derive(Debug, Deserialize)]
struct SplListEntry {
    setid: String,
    #[serde(default)]
    title: Option<String>,
}

/// URL of the label listing endpoint.
pub fn spl_search_url(base_url: &str) -> String {
    format!("{}/spls.json", base_url)
}

/// URL of a single label's XML.
pub fn spl_document_url(base_url: &str, setid: &str) -> String {
    format!("{}/spls/{}.xml", base_url, setid)
}

/// Label hits from a `/spls.json` response, in registry order.
pub fn parse_spl_search_response(json: &str) -> RegistryResult<Vec<LabelSummary>> {
    let parsed: SplListResponse = serde_json::from_str(json)?;
    Ok(parsed
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|entry| LabelSummary {
            setid: entry.setid,
            title: entry.title,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let json = r#"{
            "metadata": {"total_elements": 2},
            "data": [
                {"spl_version": 3, "published_date": "May 01, 2024", "title": "WARFARIN SODIUM tablet", "setid": "aaa-111"},
                {"spl_version": 1, "title": "WARFARIN SODIUM tablet [Bryant Ranch]", "setid": "bbb-222"}
            ]
        }"#;

        let hits = parse_spl_search_response(json).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].setid, "aaa-111");
        assert_eq!(hits[0].title.as_deref(), Some("WARFARIN SODIUM tablet"));
    }

    #[test]
    fn test_parse_empty_search() {
        assert!(parse_spl_search_response(r#"{"data":[]}"#).unwrap().is_empty());
        assert!(parse_spl_search_response(r#"{"data":null}"#).unwrap().is_empty());
        assert!(parse_spl_search_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_urls() {
        assert_eq!(spl_search_url("https://x/v2"), "https://x/v2/spls.json");
        assert_eq!(spl_document_url("https://x/v2", "abc"), "https://x/v2/spls/abc.xml");
    }
}
