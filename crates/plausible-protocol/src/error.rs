//! Protocol error types

use thiserror::Error;

/// A query or request is missing a mandatory field.
///
/// Produced by the `validate` methods before anything is sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InvalidQuery {
    pub reason: String,
}

impl InvalidQuery {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure to recover a typed value from its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("unknown property name: {0}")]
    UnknownProperty(String),

    #[error("malformed filter clause: {0}")]
    MalformedFilter(String),

    #[error("malformed date: {0}")]
    MalformedDate(String),

    #[error("malformed time: {0}")]
    MalformedTime(String),

    #[error("missing query argument: {0}")]
    MissingArgument(&'static str),
}
