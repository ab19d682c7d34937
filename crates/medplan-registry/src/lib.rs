//! External registry collaborators for the medplan core.
//!
//! This crate talks to the public NLM services: RxNav for name → RxCUI
//! normalization and DailyMed for Structured Product Labels (SPL). Response
//! parsing is always compiled; the blocking HTTP clients need the `http`
//! feature.

pub mod config;
pub mod dailymed;
#[cfg(feature = "http")]
pub mod http;
pub mod rxnav;
pub mod spl;

pub use config::*;
pub use dailymed::*;
#[cfg(feature = "http")]
pub use http::*;
pub use rxnav::*;
pub use spl::*;

use medplan_core::SourceError;
use thiserror::Error;

/// Registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Registry is not reachable at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Registry returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

impl From<RegistryError> for SourceError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Status { status, body } => SourceError::Upstream { status, body },
            RegistryError::JsonParse(_) | RegistryError::Xml(_) => {
                SourceError::Malformed(e.to_string())
            }
            RegistryError::Config(_)
            | RegistryError::Connection(_)
            | RegistryError::HttpClient(_) => SourceError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_upstream() {
        let err: SourceError = RegistryError::Status {
            status: 404,
            body: "no such setid".into(),
        }
        .into();
        assert_eq!(
            err,
            SourceError::Upstream {
                status: 404,
                body: "no such setid".into()
            }
        );
    }

    #[test]
    fn test_parse_errors_map_to_malformed() {
        let err: SourceError = RegistryError::Xml("unexpected end".into()).into();
        assert!(matches!(err, SourceError::Malformed(msg) if msg.contains("unexpected end")));
    }
}
