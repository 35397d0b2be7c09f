//! Presence, kind, identity, and cause checks.

use std::sync::Arc;

use faultcheck_types::{ClientFailure, Failure, FailureKind, KindTag};

use crate::error::ValidationFailure;

/// The failure must be present and fall under `tag`.
pub fn require_kind<'a>(
    failure: Option<&'a Failure>,
    tag: &KindTag,
) -> Result<&'a Failure, ValidationFailure> {
    match failure {
        Some(f) if f.is_a(tag) => Ok(f),
        _ => Err(kind_mismatch(failure, tag)),
    }
}

/// The failure must be a store client failure.
pub fn require_client(failure: Option<&Failure>) -> Result<&dyn ClientFailure, ValidationFailure> {
    match failure.and_then(Failure::as_client) {
        Some(client) => Ok(client as &dyn ClientFailure),
        None => Err(kind_mismatch(
            failure,
            &KindTag::Exact(FailureKind::DocumentClient),
        )),
    }
}

fn kind_mismatch(failure: Option<&Failure>, tag: &KindTag) -> ValidationFailure {
    match failure {
        None => ValidationFailure::Absent {
            expected: tag.clone(),
        },
        Some(f) => ValidationFailure::WrongKind {
            expected: tag.clone(),
            actual: f.kind(),
            message: f.message().to_string(),
        },
    }
}

/// The failure must be the very instance `expected` points at.
pub fn same_as(failure: Option<&Failure>, expected: &Arc<Failure>) -> Result<(), ValidationFailure> {
    let failure = require_kind(failure, &KindTag::Any)?;
    if std::ptr::eq(failure, Arc::as_ptr(expected)) {
        Ok(())
    } else {
        Err(ValidationFailure::NotSameInstance {
            expected: expected.to_string(),
            actual: failure.to_string(),
        })
    }
}

/// The failure must have a cause falling under `tag`.
pub fn cause_kind_is(failure: Option<&Failure>, tag: &KindTag) -> Result<(), ValidationFailure> {
    let failure = require_kind(failure, &KindTag::Any)?;
    let cause = failure.cause().ok_or_else(|| ValidationFailure::MissingCause {
        expected: tag.clone(),
    })?;
    if cause.is_a(tag) {
        Ok(())
    } else {
        Err(ValidationFailure::WrongCauseKind {
            expected: tag.clone(),
            actual: cause.kind(),
        })
    }
}

/// The failure must be an illegal-argument failure with exactly `message`.
pub fn resource_token_not_found(
    failure: Option<&Failure>,
    message: &str,
) -> Result<(), ValidationFailure> {
    let failure = require_kind(failure, &KindTag::Exact(FailureKind::IllegalArgument))?;
    if failure.message() == message {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch(
            "message",
            format!("{message:?}"),
            format!("{:?}", failure.message()),
        ))
    }
}
