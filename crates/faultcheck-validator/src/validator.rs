use std::fmt;

use faultcheck_types::Failure;

use crate::error::ValidationFailure;

// ---------------------------------------------------------------------------
// FailureValidator trait
// ---------------------------------------------------------------------------

/// Inspects a raised failure and either accepts it or explains the mismatch.
///
/// `None` stands for "no failure was raised". Validators never mutate the
/// failure and always give the same answer for the same input.
///
/// The trait is object-safe and `Send + Sync` so validators can be stored
/// in a `Vec<Arc<dyn FailureValidator>>` and shared across threads.
pub trait FailureValidator: Send + Sync {
    /// Short name used in logs (e.g. "status_code", "lsn").
    fn name(&self) -> &str {
        "custom"
    }

    /// Check the failure, returning the diagnostic on mismatch.
    fn check(&self, failure: Option<&Failure>) -> Result<(), ValidationFailure>;

    /// Check the failure and fail the current test on mismatch.
    ///
    /// # Panics
    ///
    /// Panics with the diagnostic when [`Self::check`] fails, the same way
    /// `assert!` reports a failed assertion.
    #[track_caller]
    fn validate(&self, failure: Option<&Failure>) {
        if let Err(mismatch) = self.check(failure) {
            panic!("failure validation failed: {mismatch}");
        }
    }
}

impl fmt::Debug for dyn FailureValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FailureValidator").field(&self.name()).finish()
    }
}

// ---------------------------------------------------------------------------
// FnValidator
// ---------------------------------------------------------------------------

/// A validator backed by a closure.
pub struct FnValidator<F> {
    name: String,
    check: F,
}

/// Wrap a closure as a named [`FailureValidator`].
pub fn from_fn<F>(name: impl Into<String>, check: F) -> FnValidator<F>
where
    F: Fn(Option<&Failure>) -> Result<(), ValidationFailure> + Send + Sync,
{
    FnValidator {
        name: name.into(),
        check,
    }
}

impl<F> FailureValidator for FnValidator<F>
where
    F: Fn(Option<&Failure>) -> Result<(), ValidationFailure> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, failure: Option<&Failure>) -> Result<(), ValidationFailure> {
        (self.check)(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects_everything() -> impl FailureValidator {
        from_fn("never", |_| Err(ValidationFailure::Custom("nope".into())))
    }

    #[test]
    fn fn_validator_reports_its_name() {
        let v = rejects_everything();
        assert_eq!(v.name(), "never");
        assert_eq!(
            v.check(None),
            Err(ValidationFailure::Custom("nope".into()))
        );
    }

    #[test]
    #[should_panic(expected = "failure validation failed: nope")]
    fn validate_panics_with_diagnostic() {
        rejects_everything().validate(None);
    }

    #[test]
    fn validate_is_silent_on_pass() {
        from_fn("always", |_| Ok(())).validate(Some(&Failure::io("x")));
    }
}
