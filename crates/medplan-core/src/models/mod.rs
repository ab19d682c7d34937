//! Domain models for the medplan system.

mod interaction;
mod label;
mod medication;
mod patient;
mod plan;

pub use interaction::*;
pub use label::*;
pub use medication::*;
pub use patient::*;
pub use plan::*;

use thiserror::Error;

/// Errors raised while validating loosely-typed input at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown {field} value: {value:?}")]
    UnknownVariant { field: &'static str, value: String },

    #[error("Malformed dose time: {0:?}")]
    MalformedTime(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
