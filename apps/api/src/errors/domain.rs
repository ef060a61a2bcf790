//! Domain-level error type used across the repos and adapters layers.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Central domain error type: the three kinds every data-access failure
/// collapses into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller input failed validation or violated a store constraint.
    /// Always caller-fixable.
    InvalidData(String),
    /// The referenced song does not exist. Expected outcome of lookups
    /// and updates on missing ids, not fatal.
    NotFound(String),
    /// Connectivity, configuration, or unclassified store failure.
    /// Operationally actionable, not caller-fixable.
    Db(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidData(d) => write!(f, "{d}"),
            DomainError::NotFound(d) => write!(f, "{d}"),
            DomainError::Db(d) => write!(f, "{d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_data(detail: impl Into<String>) -> Self {
        Self::InvalidData(detail.into())
    }
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }
    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db(detail.into())
    }
}
