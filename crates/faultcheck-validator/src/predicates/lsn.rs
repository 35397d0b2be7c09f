//! Log sequence number checks.

use faultcheck_types::headers::ABSENT_LSN;
use faultcheck_types::Failure;

use super::structure::require_client;
use crate::error::ValidationFailure;

pub fn greater_than(failure: Option<&Failure>, threshold: i64) -> Result<(), ValidationFailure> {
    let lsn = require_client(failure)?.lsn();
    if lsn > threshold {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch("lsn", format!("> {threshold}"), lsn))
    }
}

pub fn greater_than_or_equal(
    failure: Option<&Failure>,
    threshold: i64,
) -> Result<(), ValidationFailure> {
    let lsn = require_client(failure)?.lsn();
    if lsn >= threshold {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch("lsn", format!(">= {threshold}"), lsn))
    }
}

pub fn equals(failure: Option<&Failure>, expected: i64) -> Result<(), ValidationFailure> {
    let lsn = require_client(failure)?.lsn();
    if lsn == expected {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch("lsn", expected, lsn))
    }
}

/// The quorum-acked LSN header must hold an integer other than the sentinel.
pub fn quorum_acked_present(failure: Option<&Failure>, header: &str) -> Result<(), ValidationFailure> {
    let client = require_client(failure)?;
    if client.quorum_acked_lsn(header) != ABSENT_LSN {
        return Ok(());
    }
    let raw = client
        .response_headers()
        .get(header)
        .map_or_else(|| "no header".to_string(), |v| format!("{v:?}"));
    Err(ValidationFailure::mismatch(
        "quorum-acked lsn",
        format!("an integer in '{header}'"),
        raw,
    ))
}
