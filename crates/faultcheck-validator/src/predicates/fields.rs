//! Message, metadata, header, and payload checks.

use faultcheck_types::{ErrorPayload, Failure, FailureKind, KindTag};

use super::structure::{require_client, require_kind};
use crate::error::ValidationFailure;

pub fn message_contains(failure: Option<&Failure>, needle: &str) -> Result<(), ValidationFailure> {
    let message = require_kind(failure, &KindTag::Exact(FailureKind::DocumentClient))?.message();
    if message.contains(needle) {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch(
            "message",
            format!("text containing {needle:?}"),
            format!("{message:?}"),
        ))
    }
}

pub fn activity_id_present(failure: Option<&Failure>) -> Result<(), ValidationFailure> {
    match require_client(failure)?.activity_id() {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::mismatch("activity id", "an activity id", "none")),
    }
}

pub fn response_header(
    failure: Option<&Failure>,
    key: &str,
    expected: &str,
) -> Result<(), ValidationFailure> {
    let client = require_client(failure)?;
    match client.response_headers().get(key) {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(ValidationFailure::mismatch(
            "response header",
            format!("{key}={expected:?}"),
            format!("{key}={actual:?}"),
        )),
        None => Err(ValidationFailure::mismatch(
            "response header",
            format!("{key}={expected:?}"),
            format!("no '{key}' header"),
        )),
    }
}

/// Payloads are compared through their canonical JSON form.
pub fn error_payload(failure: Option<&Failure>, expected: &ErrorPayload) -> Result<(), ValidationFailure> {
    let client = require_client(failure)?;
    let expected_json = canonical(expected)?;
    let actual_json = match client.error_payload() {
        Some(actual) => canonical(actual)?,
        None => "no payload".to_string(),
    };
    if actual_json == expected_json {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch("error payload", expected_json, actual_json))
    }
}

fn canonical(payload: &ErrorPayload) -> Result<String, ValidationFailure> {
    payload
        .to_json()
        .map_err(|e| ValidationFailure::Custom(format!("error payload: {e}")))
}

pub fn partition_key_range_id(failure: Option<&Failure>, expected: &str) -> Result<(), ValidationFailure> {
    let actual = require_client(failure)?.partition_key_range_id();
    compare_optional("partition key range id", expected, actual)
}

pub fn resource_address(failure: Option<&Failure>, expected: &str) -> Result<(), ValidationFailure> {
    let actual = require_client(failure)?.resource_address();
    compare_optional("resource address", expected, actual)
}

fn compare_optional(
    field: &'static str,
    expected: &str,
    actual: Option<&str>,
) -> Result<(), ValidationFailure> {
    if actual == Some(expected) {
        Ok(())
    } else {
        Err(ValidationFailure::mismatch(
            field,
            format!("{expected:?}"),
            actual.map_or_else(|| "none".to_string(), |a| format!("{a:?}")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use faultcheck_types::DocumentClientError;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn message_substring() {
        let failure = Failure::from(
            DocumentClientError::new(400).with_message("Partition key provided doesn't match"),
        );
        assert!(message_contains(Some(&failure), "doesn't match").is_ok());
        assert!(message_contains(Some(&failure), "timeout").is_err());
    }

    #[test]
    fn message_check_requires_client_kind() {
        let failure = Failure::illegal_argument("doesn't match");
        assert!(matches!(
            message_contains(Some(&failure), "match"),
            Err(ValidationFailure::WrongKind { .. })
        ));
    }

    #[test]
    fn activity_id() {
        let with = Failure::from(DocumentClientError::new(404).with_activity_id(Uuid::now_v7()));
        let without = Failure::from(DocumentClientError::new(404));
        assert!(activity_id_present(Some(&with)).is_ok());
        assert!(activity_id_present(Some(&without)).is_err());
    }

    #[test]
    fn header_missing_vs_different() {
        let failure = Failure::from(DocumentClientError::new(429).with_header("x-ms-retry-after-ms", "100"));
        assert!(response_header(Some(&failure), "x-ms-retry-after-ms", "100").is_ok());
        assert_eq!(
            response_header(Some(&failure), "x-ms-retry-after-ms", "200")
                .unwrap_err()
                .to_string(),
            "response header: expected x-ms-retry-after-ms=\"200\", got x-ms-retry-after-ms=\"100\""
        );
        assert_eq!(
            response_header(Some(&failure), "etag", "1").unwrap_err().to_string(),
            "response header: expected etag=\"1\", got no 'etag' header"
        );
    }

    #[test]
    fn payload_compared_canonically() {
        let sent = ErrorPayload::new("Conflict", "exists")
            .with_property("b", json!(2))
            .with_property("a", json!(1));
        let failure = Failure::from(DocumentClientError::new(409).with_error(sent));

        let expected = ErrorPayload::new("Conflict", "exists")
            .with_property("a", json!(1))
            .with_property("b", json!(2));
        assert!(error_payload(Some(&failure), &expected).is_ok());
        assert!(error_payload(Some(&failure), &ErrorPayload::new("Conflict", "other")).is_err());

        let bare = Failure::from(DocumentClientError::new(409));
        assert!(error_payload(Some(&bare), &expected).is_err());
    }

    #[test]
    fn routing_fields() {
        let failure = Failure::from(
            DocumentClientError::new(410)
                .with_partition_key_range_id("7")
                .with_resource_address("rntbd://replica-2/apps/a/services/b/partitions/c"),
        );
        assert!(partition_key_range_id(Some(&failure), "7").is_ok());
        assert!(partition_key_range_id(Some(&failure), "8").is_err());
        assert!(resource_address(Some(&failure), "rntbd://replica-2/apps/a/services/b/partitions/c").is_ok());

        let unrouted = Failure::from(DocumentClientError::new(410));
        assert_eq!(
            resource_address(Some(&unrouted), "x").unwrap_err().to_string(),
            "resource address: expected \"x\", got none"
        );
    }
}
