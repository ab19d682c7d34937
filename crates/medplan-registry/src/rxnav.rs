//! RxNav (RxNorm) response handling.

use serde::Deserialize;

use crate::RegistryResult;

/// Response body from `/rxcui.json`.
#[derive(Debug, Deserialize)]
struct RxcuiResponse {
    #[serde(rename = "idGroup", default)]
    id_group: IdGroup,
}

#[derive(Debug, Default, Deserialize)]
struct IdGroup {
    #[serde(rename = "rxnormId", default)]
    rxnorm_id: Option<Vec<String>>,
}

/// URL of the exact/normalized name lookup.
pub fn rxcui_url(base_url: &str) -> String {
    format!("{}/rxcui.json", base_url)
}

/// First RxCUI in an `/rxcui.json` response, if any.
pub fn parse_rxcui_response(json: &str) -> RegistryResult<Option<String>> {
    let parsed: RxcuiResponse = serde_json::from_str(json)?;
    Ok(parsed.id_group.rxnorm_id.into_iter().flatten().next())
}
