use std::sync::Arc;

use faultcheck_types::Failure;
use tracing::debug;

use crate::builder::FailureValidatorBuilder;
use crate::config::ValidatorConfig;
use crate::error::ValidationFailure;
use crate::predicates::Expectation;
use crate::validator::FailureValidator;

// ---------------------------------------------------------------------------
// CompositeValidator
// ---------------------------------------------------------------------------

/// An immutable, ordered set of checks run against one failure.
///
/// Evaluation is **fail-fast**: checks run in registration order and the
/// first one that fails ends evaluation with its own diagnostic. Cloning
/// shares the underlying checks.
#[derive(Clone, Debug)]
pub struct CompositeValidator {
    checks: Arc<[Expectation]>,
    trace: bool,
}

impl CompositeValidator {
    pub(crate) fn new(checks: Vec<Expectation>, trace: bool) -> Self {
        Self {
            checks: checks.into(),
            trace,
        }
    }

    /// Start a builder with the default configuration.
    pub fn builder() -> FailureValidatorBuilder {
        FailureValidatorBuilder::new()
    }

    /// Start a builder with the given configuration.
    pub fn builder_with_config(config: ValidatorConfig) -> FailureValidatorBuilder {
        FailureValidatorBuilder::with_config(config)
    }

    /// Number of checks in the composite.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The checks in evaluation order.
    pub fn checks(&self) -> &[Expectation] {
        &self.checks
    }

    /// Names of the checks in evaluation order.
    pub fn check_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    /// Run the checks in order and return the position and diagnostic of the
    /// first one that fails. Later checks are not evaluated.
    pub fn first_failure(&self, failure: Option<&Failure>) -> Option<(usize, ValidationFailure)> {
        for (index, check) in self.checks.iter().enumerate() {
            if self.trace {
                debug!(index, check = check.name(), "evaluating failure check");
            }
            if let Err(mismatch) = check.check(failure) {
                if self.trace {
                    debug!(index, check = check.name(), %mismatch, "failure check did not hold");
                }
                return Some((index, mismatch));
            }
        }
        None
    }
}

impl FailureValidator for CompositeValidator {
    fn name(&self) -> &str {
        "composite"
    }

    fn check(&self, failure: Option<&Failure>) -> Result<(), ValidationFailure> {
        match self.first_failure(failure) {
            Some((_, mismatch)) => Err(mismatch),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use faultcheck_types::DocumentClientError;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::validator::from_fn;

    fn counting(counter: &Arc<AtomicUsize>) -> impl FailureValidator + 'static {
        let counter = Arc::clone(counter);
        from_fn("counting", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn empty_composite_passes_everything() {
        let composite = CompositeValidator::builder().build();
        assert!(composite.check(None).is_ok());
        assert!(composite.check(Some(&Failure::io("x"))).is_ok());
    }

    #[test]
    fn stops_at_first_failing_check() {
        let after = Arc::new(AtomicUsize::new(0));
        let composite = CompositeValidator::builder()
            .status_code(404)
            .custom(counting(&after))
            .build();

        let failure = Failure::from(DocumentClientError::new(500));
        let (index, mismatch) = composite.first_failure(Some(&failure)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(mismatch, ValidationFailure::mismatch("status code", 404, 500));
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn all_checks_run_on_success() {
        let seen = Arc::new(AtomicUsize::new(0));
        let composite = CompositeValidator::builder()
            .custom(counting(&seen))
            .status_code(404)
            .custom(counting(&seen))
            .build();

        let failure = Failure::from(DocumentClientError::new(404));
        assert!(composite.check(Some(&failure)).is_ok());
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn composites_nest() {
        let inner = CompositeValidator::builder().resource_not_found().build();
        let outer = CompositeValidator::builder().custom(inner).build();

        assert_eq!(outer.check_names().collect::<Vec<_>>(), ["composite"]);
        assert!(outer.check(Some(&Failure::from(DocumentClientError::new(404)))).is_ok());
        assert!(outer.check(Some(&Failure::from(DocumentClientError::new(410)))).is_err());
    }

    /// Records the `check` field of every event it sees.
    struct CheckRecorder(Arc<Mutex<Vec<String>>>);

    struct CheckField<'a>(&'a mut Option<String>);

    impl Visit for CheckField<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "check" {
                *self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for CheckRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut check = None;
            event.record(&mut CheckField(&mut check));
            if let Ok(mut seen) = self.0.lock() {
                seen.push(check.unwrap_or_default());
            }
        }
    }

    /// Run `f` under a subscriber that records every event's check name.
    fn recorded_checks(f: impl FnOnce()) -> Vec<String> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CheckRecorder(Arc::clone(&seen)));
        tracing::subscriber::with_default(subscriber, f);
        let seen = seen.lock().unwrap();
        seen.clone()
    }

    #[test]
    fn traces_each_evaluated_check_and_the_failing_one() {
        let composite = CompositeValidator::builder()
            .resource_not_found()
            .activity_id_present()
            .status_code(404)
            .build();
        let failure = Failure::from(DocumentClientError::new(404));

        let events = recorded_checks(|| {
            let (index, _) = composite.first_failure(Some(&failure)).unwrap();
            assert_eq!(index, 1);
        });

        // Two evaluations, then the failing check; the third check never runs.
        assert_eq!(
            events,
            ["resource_not_found", "activity_id_present", "activity_id_present"]
        );
    }

    #[test]
    fn passing_composite_traces_one_event_per_check() {
        let composite = CompositeValidator::builder()
            .resource_not_found()
            .status_code(404)
            .build();
        let failure = Failure::from(DocumentClientError::new(404));

        let events = recorded_checks(|| assert!(composite.check(Some(&failure)).is_ok()));
        assert_eq!(events, ["resource_not_found", "status_code"]);
    }

    #[test]
    fn tracing_can_be_disabled() {
        let config = ValidatorConfig {
            trace_checks: false,
            ..Default::default()
        };
        let composite = CompositeValidator::builder_with_config(config)
            .resource_already_exists()
            .status_code(500)
            .build();
        let failure = Failure::from(DocumentClientError::new(409));

        let events = recorded_checks(|| assert!(composite.check(Some(&failure)).is_err()));
        assert!(events.is_empty());
    }
}
