use thiserror::Error;

/// Errors produced while reading fields off a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("header '{header}' is not an integer: {value:?}")]
    InvalidHeaderValue { header: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}
