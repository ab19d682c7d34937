//! Registry endpoint configuration.

use crate::{RegistryError, RegistryResult};

pub const DEFAULT_RXNAV_URL: &str = "https://rxnav.nlm.nih.gov/REST";
pub const DEFAULT_DAILYMED_URL: &str = "https://dailymed.nlm.nih.gov/dailymed/services/v2";

pub const ENV_RXNAV_URL: &str = "MEDPLAN_RXNAV_URL";
pub const ENV_DAILYMED_URL: &str = "MEDPLAN_DAILYMED_URL";
pub const ENV_RXNAV_TIMEOUT: &str = "MEDPLAN_RXNAV_TIMEOUT_SECS";
pub const ENV_DAILYMED_TIMEOUT: &str = "MEDPLAN_DAILYMED_TIMEOUT_SECS";
pub const ENV_SEARCH_PAGE_SIZE: &str = "MEDPLAN_SEARCH_PAGE_SIZE";

/// Where and how to reach the registries.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub rxnav_base_url: String,
    pub dailymed_base_url: String,
    pub rxnav_timeout_secs: u64,
    /// Label XML is large, so DailyMed gets a longer budget
    pub dailymed_timeout_secs: u64,
    /// Number of label search hits requested per drug name
    pub search_page_size: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            rxnav_base_url: DEFAULT_RXNAV_URL.into(),
            dailymed_base_url: DEFAULT_DAILYMED_URL.into(),
            rxnav_timeout_secs: 15,
            dailymed_timeout_secs: 20,
            search_page_size: 3,
        }
    }
}

impl RegistryConfig {
    /// Defaults overridden by `MEDPLAN_*` environment variables.
    pub fn from_env() -> RegistryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RegistryResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_RXNAV_URL) {
            config.rxnav_base_url = url;
        }
        if let Some(url) = lookup(ENV_DAILYMED_URL) {
            config.dailymed_base_url = url;
        }
        if let Some(raw) = lookup(ENV_RXNAV_TIMEOUT) {
            config.rxnav_timeout_secs = parse_number(ENV_RXNAV_TIMEOUT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DAILYMED_TIMEOUT) {
            config.dailymed_timeout_secs = parse_number(ENV_DAILYMED_TIMEOUT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEARCH_PAGE_SIZE) {
            config.search_page_size = parse_number(ENV_SEARCH_PAGE_SIZE, &raw)?;
        }

        config.rxnav_base_url = trim_base(&config.rxnav_base_url);
        config.dailymed_base_url = trim_base(&config.dailymed_base_url);
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> RegistryResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| RegistryError::Config(format!("{key} must be a number, got {raw:?}")))
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
