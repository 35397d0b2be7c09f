use std::sync::Arc;

use uuid::Uuid;

use crate::failure::Failure;
use crate::headers::{self, ResponseHeaders};
use crate::payload::ErrorPayload;

// ---------------------------------------------------------------------------
// ClientFailure trait
// ---------------------------------------------------------------------------

/// Read-only accessors a store client failure exposes to validators.
///
/// The trait is object-safe so validators can inspect any client error
/// implementation through `&dyn ClientFailure`.
pub trait ClientFailure {
    /// HTTP-like status code.
    fn status_code(&self) -> u16;

    /// Finer-grained classifier, when the store sent one.
    fn sub_status_code(&self) -> Option<u32>;

    /// Per-request correlation identifier.
    fn activity_id(&self) -> Option<Uuid>;

    /// LSN of the replica that produced the failure, or
    /// [`headers::ABSENT_LSN`].
    fn lsn(&self) -> i64;

    fn partition_key_range_id(&self) -> Option<&str>;

    fn resource_address(&self) -> Option<&str>;

    fn response_headers(&self) -> &ResponseHeaders;

    /// Structured error body, when the store sent one.
    fn error_payload(&self) -> Option<&ErrorPayload>;

    /// Quorum-acknowledged LSN carried in `header`, or
    /// [`headers::ABSENT_LSN`] when missing or unparsable.
    fn quorum_acked_lsn(&self, header: &str) -> i64 {
        headers::lsn_or_absent(self.response_headers(), header)
    }
}

// ---------------------------------------------------------------------------
// DocumentClientError
// ---------------------------------------------------------------------------

/// A failure reported by the data store client.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct DocumentClientError {
    pub status_code: u16,
    pub sub_status_code: Option<u32>,
    pub activity_id: Option<Uuid>,
    pub message: String,
    pub lsn: i64,
    pub partition_key_range_id: Option<String>,
    pub resource_address: Option<String>,
    pub response_headers: ResponseHeaders,
    pub error: Option<ErrorPayload>,
    #[source]
    pub cause: Option<Arc<Failure>>,
}

impl DocumentClientError {
    /// A bare error with only a status code set.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            sub_status_code: None,
            activity_id: None,
            message: format!("request failed with status {status_code}"),
            lsn: headers::ABSENT_LSN,
            partition_key_range_id: None,
            resource_address: None,
            response_headers: ResponseHeaders::new(),
            error: None,
            cause: None,
        }
    }

    pub fn with_sub_status(mut self, sub_status_code: u32) -> Self {
        self.sub_status_code = Some(sub_status_code);
        self
    }

    pub fn with_activity_id(mut self, activity_id: Uuid) -> Self {
        self.activity_id = Some(activity_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_lsn(mut self, lsn: i64) -> Self {
        self.lsn = lsn;
        self
    }

    pub fn with_partition_key_range_id(mut self, id: impl Into<String>) -> Self {
        self.partition_key_range_id = Some(id.into());
        self
    }

    pub fn with_resource_address(mut self, address: impl Into<String>) -> Self {
        self.resource_address = Some(address.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.response_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_error(mut self, error: ErrorPayload) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_cause(mut self, cause: Arc<Failure>) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl ClientFailure for DocumentClientError {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn sub_status_code(&self) -> Option<u32> {
        self.sub_status_code
    }

    fn activity_id(&self) -> Option<Uuid> {
        self.activity_id
    }

    fn lsn(&self) -> i64 {
        self.lsn
    }

    fn partition_key_range_id(&self) -> Option<&str> {
        self.partition_key_range_id.as_deref()
    }

    fn resource_address(&self) -> Option<&str> {
        self.resource_address.as_deref()
    }

    fn response_headers(&self) -> &ResponseHeaders {
        &self.response_headers
    }

    fn error_payload(&self) -> Option<&ErrorPayload> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_error_has_no_optional_metadata() {
        let e = DocumentClientError::new(404);
        assert_eq!(e.status_code(), 404);
        assert_eq!(e.sub_status_code(), None);
        assert_eq!(e.activity_id(), None);
        assert_eq!(e.lsn(), headers::ABSENT_LSN);
        assert!(e.response_headers().is_empty());
        assert!(e.error_payload().is_none());
    }

    #[test]
    fn builders_populate_accessors() {
        let activity = Uuid::now_v7();
        let e = DocumentClientError::new(410)
            .with_sub_status(1002)
            .with_activity_id(activity)
            .with_lsn(77)
            .with_partition_key_range_id("3")
            .with_resource_address("rntbd://replica-1/")
            .with_header(headers::QUORUM_ACKED_LSN, "76");

        assert_eq!(e.sub_status_code(), Some(1002));
        assert_eq!(e.activity_id(), Some(activity));
        assert_eq!(e.lsn(), 77);
        assert_eq!(e.partition_key_range_id(), Some("3"));
        assert_eq!(e.resource_address(), Some("rntbd://replica-1/"));
        assert_eq!(e.quorum_acked_lsn(headers::QUORUM_ACKED_LSN), 76);
    }

    #[test]
    fn quorum_acked_lsn_defaults_to_sentinel() {
        let e = DocumentClientError::new(503).with_header(headers::QUORUM_ACKED_LSN, "n/a");
        assert_eq!(e.quorum_acked_lsn(headers::QUORUM_ACKED_LSN), headers::ABSENT_LSN);
    }
}
