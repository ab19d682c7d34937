//! Blocking HTTP clients for RxNav and DailyMed.

use std::time::Duration;

use medplan_core::models::LabelSummary;
use medplan_core::service::{LabelSource, SourceResult, TerminologySource};
use medplan_core::LabelDocument;
use reqwest::blocking::{Client, Response};

use crate::{
    parse_rxcui_response, parse_spl_search_response, parse_spl_xml, rxcui_url,
    spl_document_url, spl_search_url, RegistryConfig, RegistryError, RegistryResult,
};

fn build_client(timeout_secs: u64) -> RegistryResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| RegistryError::HttpClient(e.to_string()))
}

fn map_send_error(e: reqwest::Error, base_url: &str, timeout_secs: u64) -> RegistryError {
    if e.is_connect() {
        RegistryError::Connection(base_url.to_string())
    } else if e.is_timeout() {
        RegistryError::HttpClient(format!("Request timed out after {}s", timeout_secs))
    } else {
        RegistryError::HttpClient(e.to_string())
    }
}

/// Read a successful body as text, or turn the status into an error.
fn read_body(response: Response) -> RegistryResult<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(RegistryError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .text()
        .map_err(|e| RegistryError::HttpClient(e.to_string()))
}

/// RxNav client for name → RxCUI lookups.
pub struct RxNavClient {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl RxNavClient {
    pub fn new(config: &RegistryConfig) -> RegistryResult<Self> {
        Ok(Self {
            base_url: config.rxnav_base_url.clone(),
            client: build_client(config.rxnav_timeout_secs)?,
            timeout_secs: config.rxnav_timeout_secs,
        })
    }

    /// First RxCUI for a drug name.
    pub fn find_rxcui_by_string(&self, name: &str) -> RegistryResult<Option<String>> {
        let url = rxcui_url(&self.base_url);
        tracing::debug!(url = %url, name = %name, "RxNav lookup");

        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .map_err(|e| map_send_error(e, &self.base_url, self.timeout_secs))?;

        parse_rxcui_response(&read_body(response)?)
    }
}

impl TerminologySource for RxNavClient {
    fn find_rxcui(&self, name: &str) -> SourceResult<Option<String>> {
        Ok(self.find_rxcui_by_string(name)?)
    }
}

/// DailyMed client for label search and retrieval.
pub struct DailyMedClient {
    base_url: String,
    client: Client,
    timeout_secs: u64,
    page_size: u32,
}

impl DailyMedClient {
    pub fn new(config: &RegistryConfig) -> RegistryResult<Self> {
        Ok(Self {
            base_url: config.dailymed_base_url.clone(),
            client: build_client(config.dailymed_timeout_secs)?,
            timeout_secs: config.dailymed_timeout_secs,
            page_size: config.search_page_size,
        })
    }

    /// Labels whose drug name matches, in registry order.
    pub fn search_spls_by_drug_name(&self, name: &str) -> RegistryResult<Vec<LabelSummary>> {
        let url = spl_search_url(&self.base_url);
        tracing::debug!(url = %url, name = %name, "DailyMed search");

        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("drug_name", name), ("pagesize", page_size.as_str())])
            .send()
            .map_err(|e| map_send_error(e, &self.base_url, self.timeout_secs))?;

        parse_spl_search_response(&read_body(response)?)
    }

    /// Fetch a label's SPL XML and convert it.
    pub fn fetch_spl_by_setid(&self, setid: &str) -> RegistryResult<LabelDocument> {
        let url = spl_document_url(&self.base_url, setid);
        tracing::debug!(url = %url, "DailyMed fetch");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| map_send_error(e, &self.base_url, self.timeout_secs))?;

        let xml = read_body(response)?;
        let document = parse_spl_xml(&xml);
        if let Err(e) = &document {
            tracing::warn!(setid = %setid, error = %e, "Unparseable SPL document");
        }
        document
    }
}

impl LabelSource for DailyMedClient {
    fn search(&self, name: &str) -> SourceResult<Vec<LabelSummary>> {
        Ok(self.search_spls_by_drug_name(name)?)
    }

    fn fetch(&self, setid: &str) -> SourceResult<LabelDocument> {
        Ok(self.fetch_spl_by_setid(setid)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> RegistryConfig {
        RegistryConfig {
            rxnav_base_url: "http://127.0.0.1:9".into(),
            dailymed_base_url: "http://127.0.0.1:9".into(),
            rxnav_timeout_secs: 2,
            dailymed_timeout_secs: 2,
            search_page_size: 3,
        }
    }

    #[test]
    fn test_clients_build_from_default_config() {
        let config = RegistryConfig::default();
        assert!(RxNavClient::new(&config).is_ok());
        assert!(DailyMedClient::new(&config).is_ok());
    }

    #[test]
    fn test_unreachable_registry_is_unavailable() {
        let client = RxNavClient::new(&unreachable_config()).unwrap();
        let err = client.find_rxcui("metformin").unwrap_err();
        assert!(matches!(err, medplan_core::SourceError::Unavailable(_)));
    }
}
