use faultcheck_types::{FailureKind, KindTag};

/// Why a failure did not look the way a validator expected.
///
/// The `Display` form is the diagnostic a failing test reports.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// No failure was raised, but one was expected.
    #[error("expected a failure of kind {expected}, but none was raised")]
    Absent { expected: KindTag },

    /// The failure is not of the expected kind.
    #[error("expected a failure of kind {expected}, got {actual}: {message}")]
    WrongKind {
        expected: KindTag,
        actual: FailureKind,
        message: String,
    },

    /// A field of the failure differs from the expectation.
    #[error("{field}: expected {expected}, got {actual}")]
    ValueMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// The failure is not the exact instance that was expected.
    #[error("expected the same failure instance as {expected:?}, got a different one: {actual:?}")]
    NotSameInstance { expected: String, actual: String },

    /// The failure has no cause, but one was expected.
    #[error("expected a cause of kind {expected}, but the failure has no cause")]
    MissingCause { expected: KindTag },

    /// The failure's cause is not of the expected kind.
    #[error("expected a cause of kind {expected}, got {actual}")]
    WrongCauseKind { expected: KindTag, actual: FailureKind },

    /// Reported by a hand-written validator.
    #[error("{0}")]
    Custom(String),
}

impl ValidationFailure {
    /// Create a value mismatch for `field`.
    pub fn mismatch(
        field: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::ValueMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Errors loading a [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid validator config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Invalid(String),
}
