//! Status and sub-status code checks.

use faultcheck_types::Failure;

use super::structure::require_client;
use crate::error::ValidationFailure;

pub fn status_code(failure: Option<&Failure>, expected: u16) -> Result<(), ValidationFailure> {
    let client = require_client(failure)?;
    let actual = client.status_code();
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch("status code", expected, actual))
    }
}

/// `expected == None` asserts that no sub-status was sent.
pub fn sub_status_code(
    failure: Option<&Failure>,
    expected: Option<u32>,
) -> Result<(), ValidationFailure> {
    let client = require_client(failure)?;
    let actual = client.sub_status_code();
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch(
            "sub-status code",
            display_opt(expected),
            display_opt(actual),
        ))
    }
}

fn display_opt(code: Option<u32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}
