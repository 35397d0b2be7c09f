use std::sync::Arc;

use faultcheck_types::{ErrorPayload, Failure, KindTag};

use crate::composite::CompositeValidator;
use crate::config::ValidatorConfig;
use crate::predicates::Expectation;
use crate::validator::FailureValidator;

/// Accumulates checks in registration order.
///
/// Every registration appends one check and hands the builder back, so
/// checks chain fluently. [`Self::build`] snapshots the checks registered
/// so far; registering more afterwards does not change built composites.
#[derive(Clone, Debug, Default)]
pub struct FailureValidatorBuilder {
    config: ValidatorConfig,
    checks: Vec<Expectation>,
}

impl FailureValidatorBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            checks: Vec::new(),
        }
    }

    /// The configuration checks are registered with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Number of checks registered so far.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    fn push(mut self, expectation: Expectation) -> Self {
        self.checks.push(expectation);
        self
    }

    /// The failure's status code must equal `code`.
    pub fn status_code(self, code: u16) -> Self {
        self.push(Expectation::StatusCode(code))
    }

    /// The failure must carry sub-status `code`.
    pub fn sub_status_code(self, code: u32) -> Self {
        self.push(Expectation::SubStatusCode(code))
    }

    /// The failure must carry no sub-status.
    pub fn null_sub_status_code(self) -> Self {
        self.push(Expectation::NullSubStatusCode)
    }

    /// The failure's LSN must be strictly greater than `threshold`.
    pub fn lsn_greater_than(self, threshold: i64) -> Self {
        self.push(Expectation::LsnGreaterThan(threshold))
    }

    /// The failure's LSN must be at least `threshold`.
    pub fn lsn_greater_than_or_equal(self, threshold: i64) -> Self {
        self.push(Expectation::LsnGreaterThanOrEqual(threshold))
    }

    /// The failure's LSN must equal `lsn`.
    pub fn lsn(self, lsn: i64) -> Self {
        self.push(Expectation::Lsn(lsn))
    }

    /// The quorum-acked LSN header must hold an integer other than `-1`.
    pub fn quorum_acked_lsn_present(self) -> Self {
        let header = self.config.quorum_acked_lsn_header.clone();
        self.push(Expectation::QuorumAckedLsnPresent { header })
    }

    /// The failure's message must contain `needle`.
    pub fn error_message_contains(self, needle: impl Into<String>) -> Self {
        self.push(Expectation::MessageContains(needle.into()))
    }

    /// The failure must carry an activity id.
    pub fn activity_id_present(self) -> Self {
        self.push(Expectation::ActivityIdPresent)
    }

    /// Response header `key` must equal `value`.
    pub fn response_header(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Expectation::ResponseHeader {
            key: key.into(),
            value: value.into(),
        })
    }

    /// The error body must serialize to the same canonical form as `payload`.
    pub fn error_payload(self, payload: ErrorPayload) -> Self {
        self.push(Expectation::ErrorPayload(payload))
    }

    pub fn partition_key_range_id(self, id: impl Into<String>) -> Self {
        self.push(Expectation::PartitionKeyRangeId(id.into()))
    }

    pub fn resource_address(self, address: impl Into<String>) -> Self {
        self.push(Expectation::ResourceAddress(address.into()))
    }

    /// The failure's kind must fall under `tag`.
    pub fn kind_is(self, tag: impl Into<KindTag>) -> Self {
        self.push(Expectation::KindIs(tag.into()))
    }

    /// The failure must be this exact instance, not merely an equal one.
    pub fn same_as(self, failure: &Arc<Failure>) -> Self {
        self.push(Expectation::SameAs(Arc::clone(failure)))
    }

    /// Shorthand for a client failure with status 404.
    pub fn resource_not_found(self) -> Self {
        self.push(Expectation::ResourceNotFound)
    }

    /// Shorthand for a client failure with status 409.
    pub fn resource_already_exists(self) -> Self {
        self.push(Expectation::ResourceAlreadyExists)
    }

    /// Shorthand for the illegal-argument failure raised when no resource
    /// token covers the addressed resource.
    pub fn resource_token_not_found(self) -> Self {
        let message = self.config.resource_token_not_found_message.clone();
        self.push(Expectation::ResourceTokenNotFound { message })
    }

    /// The failure must have a cause whose kind falls under `tag`.
    pub fn cause_kind_is(self, tag: impl Into<KindTag>) -> Self {
        self.push(Expectation::CauseKindIs(tag.into()))
    }

    /// Splice a hand-written validator into the chain.
    pub fn custom(self, validator: impl FailureValidator + 'static) -> Self {
        self.push(Expectation::Custom(Arc::new(validator)))
    }

    /// Snapshot the registered checks into a composite validator.
    pub fn build(&self) -> CompositeValidator {
        CompositeValidator::new(self.checks.clone(), self.config.trace_checks)
    }
}
