//! Well-known backend response headers.

use std::collections::BTreeMap;

use crate::error::TypeError;

/// Highest LSN acknowledged by a write quorum, as a string-encoded integer.
pub const QUORUM_ACKED_LSN: &str = "x-ms-quorum-acked-lsn";

/// Value reported for an LSN header that is missing or unparsable.
pub const ABSENT_LSN: i64 = -1;

/// Response headers: string keys to string values, kept sorted.
pub type ResponseHeaders = BTreeMap<String, String>;

/// Parse an integer-valued header.
///
/// Returns `Ok(None)` when the header is missing and an error when it is
/// present but not an integer.
pub fn parse_i64(headers: &ResponseHeaders, header: &str) -> Result<Option<i64>, TypeError> {
    match headers.get(header) {
        None => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| TypeError::InvalidHeaderValue {
                header: header.to_string(),
                value: value.clone(),
            }),
    }
}

/// Read an LSN-valued header, collapsing missing and unparsable values to
/// [`ABSENT_LSN`].
pub fn lsn_or_absent(headers: &ResponseHeaders, header: &str) -> i64 {
    parse_i64(headers, header)
        .ok()
        .flatten()
        .unwrap_or(ABSENT_LSN)
}
