//! Composable failure validators for faultcheck.
//!
//! Tests describe what a failure from the replicated store must look like
//! by chaining checks on a builder. The builder produces one composite
//! validator that runs every check, in registration order, against the
//! failure the test observed. The first check that does not hold fails the
//! test with its diagnostic.
//!
//! # Quick Start
//!
//! ```rust
//! use faultcheck_types::{DocumentClientError, Failure};
//! use faultcheck_validator::FailureValidator;
//! use uuid::Uuid;
//!
//! let validator = faultcheck_validator::builder()
//!     .status_code(404)
//!     .activity_id_present()
//!     .build();
//!
//! let failure = Failure::from(DocumentClientError::new(404).with_activity_id(Uuid::now_v7()));
//! validator.validate(Some(&failure));
//! ```

pub mod builder;
pub mod composite;
pub mod config;
pub mod error;
pub mod predicates;
pub mod validator;

// Re-exports for convenience.
pub use builder::FailureValidatorBuilder;
pub use composite::CompositeValidator;
pub use config::ValidatorConfig;
pub use error::{ConfigError, ValidationFailure};
pub use predicates::Expectation;
pub use validator::{from_fn, FailureValidator, FnValidator};

/// Start a builder with the default configuration.
pub fn builder() -> FailureValidatorBuilder {
    FailureValidatorBuilder::new()
}

/// Start a builder whose config-dependent checks use `config`.
pub fn builder_with_config(config: ValidatorConfig) -> FailureValidatorBuilder {
    FailureValidatorBuilder::with_config(config)
}
