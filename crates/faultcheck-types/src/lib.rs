//! Failure model for faultcheck.
//!
//! These are the types a test observes after an operation against the
//! replicated data store fails. Validators in `faultcheck-validator` read
//! them; nothing here makes requests or recovers from failures.
//!
//! # Key Types
//!
//! - [`Failure`] — A raised failure of some [`FailureKind`], with an optional cause
//! - [`DocumentClientError`] — Store-reported failure carrying status, LSN, and routing metadata
//! - [`ClientFailure`] — Accessor contract validators use to read client failures
//! - [`KindTag`] — Tag matched against a failure's kind (`Any`, `Runtime`, or exact)
//! - [`ErrorPayload`] — Structured error body with a canonical JSON form

pub mod client;
pub mod error;
pub mod failure;
pub mod headers;
pub mod payload;
pub mod resources;

pub use client::{ClientFailure, DocumentClientError};
pub use error::TypeError;
pub use failure::{Failure, FailureKind, KindTag};
pub use headers::ResponseHeaders;
pub use payload::ErrorPayload;
