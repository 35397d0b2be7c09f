//! Built-in failure checks.
//!
//! Every check first verifies the failure's structure (present, of the
//! expected kind) and only then compares the field it cares about.

pub mod fields;
pub mod lsn;
pub mod status;
pub mod structure;

use std::sync::Arc;

use faultcheck_types::{ErrorPayload, Failure, KindTag};

use crate::error::ValidationFailure;
use crate::validator::FailureValidator;

/// One registered check and the expectation it captured.
#[derive(Clone, Debug)]
pub enum Expectation {
    StatusCode(u16),
    SubStatusCode(u32),
    NullSubStatusCode,
    LsnGreaterThan(i64),
    LsnGreaterThanOrEqual(i64),
    Lsn(i64),
    QuorumAckedLsnPresent { header: String },
    MessageContains(String),
    ActivityIdPresent,
    ResponseHeader { key: String, value: String },
    ErrorPayload(ErrorPayload),
    PartitionKeyRangeId(String),
    ResourceAddress(String),
    KindIs(KindTag),
    SameAs(Arc<Failure>),
    ResourceNotFound,
    ResourceAlreadyExists,
    ResourceTokenNotFound { message: String },
    CauseKindIs(KindTag),
    Custom(Arc<dyn FailureValidator>),
}

impl FailureValidator for Expectation {
    fn name(&self) -> &str {
        match self {
            Self::StatusCode(_) => "status_code",
            Self::SubStatusCode(_) => "sub_status_code",
            Self::NullSubStatusCode => "null_sub_status_code",
            Self::LsnGreaterThan(_) => "lsn_greater_than",
            Self::LsnGreaterThanOrEqual(_) => "lsn_greater_than_or_equal",
            Self::Lsn(_) => "lsn",
            Self::QuorumAckedLsnPresent { .. } => "quorum_acked_lsn_present",
            Self::MessageContains(_) => "error_message_contains",
            Self::ActivityIdPresent => "activity_id_present",
            Self::ResponseHeader { .. } => "response_header",
            Self::ErrorPayload(_) => "error_payload",
            Self::PartitionKeyRangeId(_) => "partition_key_range_id",
            Self::ResourceAddress(_) => "resource_address",
            Self::KindIs(_) => "kind_is",
            Self::SameAs(_) => "same_as",
            Self::ResourceNotFound => "resource_not_found",
            Self::ResourceAlreadyExists => "resource_already_exists",
            Self::ResourceTokenNotFound { .. } => "resource_token_not_found",
            Self::CauseKindIs(_) => "cause_kind_is",
            Self::Custom(validator) => validator.name(),
        }
    }

    fn check(&self, failure: Option<&Failure>) -> Result<(), ValidationFailure> {
        match self {
            Self::StatusCode(code) => status::status_code(failure, *code),
            Self::SubStatusCode(code) => status::sub_status_code(failure, Some(*code)),
            Self::NullSubStatusCode => status::sub_status_code(failure, None),
            Self::LsnGreaterThan(threshold) => lsn::greater_than(failure, *threshold),
            Self::LsnGreaterThanOrEqual(threshold) => {
                lsn::greater_than_or_equal(failure, *threshold)
            }
            Self::Lsn(expected) => lsn::equals(failure, *expected),
            Self::QuorumAckedLsnPresent { header } => lsn::quorum_acked_present(failure, header),
            Self::MessageContains(needle) => fields::message_contains(failure, needle),
            Self::ActivityIdPresent => fields::activity_id_present(failure),
            Self::ResponseHeader { key, value } => fields::response_header(failure, key, value),
            Self::ErrorPayload(payload) => fields::error_payload(failure, payload),
            Self::PartitionKeyRangeId(id) => fields::partition_key_range_id(failure, id),
            Self::ResourceAddress(address) => fields::resource_address(failure, address),
            Self::KindIs(tag) => structure::require_kind(failure, tag).map(|_| ()),
            Self::SameAs(expected) => structure::same_as(failure, expected),
            Self::ResourceNotFound => status::status_code(failure, 404),
            Self::ResourceAlreadyExists => status::status_code(failure, 409),
            Self::ResourceTokenNotFound { message } => {
                structure::resource_token_not_found(failure, message)
            }
            Self::CauseKindIs(tag) => structure::cause_kind_is(failure, tag),
            Self::Custom(validator) => validator.check(failure),
        }
    }
}
