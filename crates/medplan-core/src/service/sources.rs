//! External collaborators the service depends on.
//!
//! Real implementations live in the `medplan-registry` crate. The static
//! sources here answer from in-memory tables for tests and offline use.

use std::collections::HashMap;

use thiserror::Error;

use crate::labels::LabelDocument;
use crate::models::LabelSummary;

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed upstream response: {0}")]
    Malformed(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Name → concept identifier lookup (e.g. RxNorm).
pub trait TerminologySource {
    /// Best identifier for a free-text drug name, if the terminology knows it.
    fn find_rxcui(&self, name: &str) -> SourceResult<Option<String>>;
}

/// Drug label registry (e.g. DailyMed).
pub trait LabelSource {
    /// Labels matching a drug name, best match first.
    fn search(&self, name: &str) -> SourceResult<Vec<LabelSummary>>;

    /// Fetch and parse a label by set id.
    fn fetch(&self, setid: &str) -> SourceResult<LabelDocument>;
}

impl<S: TerminologySource + ?Sized> TerminologySource for &S {
    fn find_rxcui(&self, name: &str) -> SourceResult<Option<String>> {
        (**self).find_rxcui(name)
    }
}

impl<S: LabelSource + ?Sized> LabelSource for &S {
    fn search(&self, name: &str) -> SourceResult<Vec<LabelSummary>> {
        (**self).search(name)
    }

    fn fetch(&self, setid: &str) -> SourceResult<LabelDocument> {
        (**self).fetch(setid)
    }
}

/// In-memory terminology keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct StaticTerminology {
    ids: HashMap<String, String>,
}

impl StaticTerminology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name → rxcui mapping.
    pub fn with(mut self, name: &str, rxcui: &str) -> Self {
        self.ids.insert(name.trim().to_lowercase(), rxcui.to_string());
        self
    }
}

impl TerminologySource for StaticTerminology {
    fn find_rxcui(&self, name: &str) -> SourceResult<Option<String>> {
        Ok(self.ids.get(&name.trim().to_lowercase()).cloned())
    }
}

/// In-memory label registry keyed by lowercased drug name.
#[derive(Debug, Clone, Default)]
pub struct StaticLabelSource {
    by_name: HashMap<String, LabelSummary>,
    documents: HashMap<String, LabelDocument>,
}

impl StaticLabelSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label for a drug name.
    pub fn with_label(mut self, name: &str, setid: &str, document: LabelDocument) -> Self {
        self.by_name.insert(
            name.trim().to_lowercase(),
            LabelSummary {
                setid: setid.to_string(),
                title: Some(name.to_string()),
            },
        );
        self.documents.insert(setid.to_string(), document);
        self
    }
}

impl LabelSource for StaticLabelSource {
    fn search(&self, name: &str) -> SourceResult<Vec<LabelSummary>> {
        Ok(self
            .by_name
            .get(&name.trim().to_lowercase())
            .cloned()
            .into_iter()
            .collect())
    }

    fn fetch(&self, setid: &str) -> SourceResult<LabelDocument> {
        self.documents
            .get(setid)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(setid.to_string()))
    }
}
