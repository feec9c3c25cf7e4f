//! Domain error types for the series editor.
//!
//! `FooterError` covers events the footer cannot interpret. `SaveError` is the
//! single failure kind of a save cycle; the footer carries it but never acts
//! on its contents.

use thiserror::Error;

use super::series::SeriesId;

/// Errors raised while interpreting a footer event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FooterError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },

    #[error("Unknown series type: {0}")]
    UnknownSeriesType(String),

    #[error("Unknown apply mode: {0}")]
    UnknownApplyMode(String),
}

/// A failed save cycle, reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Save rejected: {0}")]
    Rejected(String),

    #[error("Series not found: {0}")]
    SeriesNotFound(SeriesId),

    #[error("Backend failure: {0}")]
    Backend(String),
}
