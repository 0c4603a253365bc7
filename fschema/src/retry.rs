//! Retrying schema fetches.
//!
//! A [`RetryPolicy`] is an explicit schedule of pauses; a fetch is tried once
//! plus once per pause, and only errors flagged `retryable` use a pause.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use fschema::RetryPolicy;
//!
//! let policy = RetryPolicy::doubling(3, Duration::from_millis(100), Duration::from_millis(250));
//! assert_eq!(policy.max_attempts(), 4);
//! assert_eq!(
//!     policy.delays(),
//!     &[
//!         Duration::from_millis(100),
//!         Duration::from_millis(200),
//!         Duration::from_millis(250),
//!     ]
//! );
//! assert_eq!(RetryPolicy::none().max_attempts(), 1);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use fcommon::FormType;
use futures_timer::Delay;

use crate::{FormSchema, SchemaError, SchemaErrorKind, SchemaFuture, SchemaProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    delays: Vec<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::doubling(2, Duration::from_millis(150), Duration::from_secs(1))
    }
}

impl RetryPolicy {
    /// A single attempt.
    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    pub fn from_delays(delays: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            delays: delays.into_iter().collect(),
        }
    }

    /// `retries` pauses starting at `first`, doubling each time, never above `cap`.
    pub fn doubling(retries: u32, first: Duration, cap: Duration) -> Self {
        let mut delays = Vec::new();
        let mut next = first.min(cap);
        for _ in 0..retries {
            delays.push(next);
            next = next.saturating_mul(2).min(cap);
        }

        Self { delays }
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    pub fn max_attempts(&self) -> u32 {
        u32::try_from(self.delays.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded {
        field_count: usize,
    },
    /// `retries_exhausted` is set when the last error was retryable but the
    /// schedule had no pause left.
    Failed {
        kind: SchemaErrorKind,
        retries_exhausted: bool,
    },
}

impl FetchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Summary of one logical fetch, across every attempt it took.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReport {
    pub attempts: u32,
    pub elapsed: Duration,
    pub outcome: FetchOutcome,
}

impl FetchReport {
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Loaded { .. })
    }
}

pub trait SchemaFetchHooks: Send + Sync {
    fn on_fetch_started(&self, _form_type: &FormType) {}

    /// Attempt `attempt` failed with `error`; the next one starts after `delay`.
    fn on_retry(&self, _form_type: &FormType, _attempt: u32, _delay: Duration, _error: &SchemaError) {
    }

    fn on_fetch_finished(&self, _form_type: &FormType, _report: &FetchReport) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFetchHooks;

impl SchemaFetchHooks for NoopFetchHooks {}

/// Wraps another provider and retries retryable fetch failures on a
/// [`RetryPolicy`] schedule.
pub struct RetryingSchemaProvider {
    inner: Arc<dyn SchemaProvider>,
    policy: RetryPolicy,
    hooks: Arc<dyn SchemaFetchHooks>,
}

impl RetryingSchemaProvider {
    pub fn new(inner: Arc<dyn SchemaProvider>, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            hooks: Arc::new(NoopFetchHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn SchemaFetchHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    async fn fetch_with_retries(&self, form_type: &FormType) -> Result<FormSchema, SchemaError> {
        let started = Instant::now();
        self.hooks.on_fetch_started(form_type);

        let mut pauses = self.policy.delays.iter().copied();
        let mut attempts = 0;
        let (result, retries_exhausted) = loop {
            attempts += 1;
            match self.inner.fetch_schema(form_type).await {
                Err(error) if error.retryable => match pauses.next() {
                    Some(delay) => {
                        self.hooks.on_retry(form_type, attempts, delay, &error);
                        Delay::new(delay).await;
                    }
                    None => break (Err(error), true),
                },
                other => break (other, false),
            }
        };

        let outcome = match &result {
            Ok(schema) => FetchOutcome::Loaded {
                field_count: schema.len(),
            },
            Err(error) => FetchOutcome::Failed {
                kind: error.kind,
                retries_exhausted,
            },
        };
        self.hooks.on_fetch_finished(
            form_type,
            &FetchReport {
                attempts,
                elapsed: started.elapsed(),
                outcome,
            },
        );

        result
    }
}

impl SchemaProvider for RetryingSchemaProvider {
    fn fetch_schema<'a>(
        &'a self,
        form_type: &'a FormType,
    ) -> SchemaFuture<'a, Result<FormSchema, SchemaError>> {
        Box::pin(self.fetch_with_retries(form_type))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::FieldDescriptor;

    #[test]
    fn doubling_schedule_is_capped() {
        let policy = RetryPolicy::doubling(4, Duration::from_millis(100), Duration::from_millis(250));

        assert_eq!(
            policy.delays(),
            &[
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(250),
                Duration::from_millis(250),
            ]
        );
        assert_eq!(policy.max_attempts(), 5);
    }

    #[test]
    fn first_delay_above_cap_is_clamped() {
        let policy = RetryPolicy::doubling(1, Duration::from_secs(5), Duration::from_secs(1));
        assert_eq!(policy.delays(), &[Duration::from_secs(1)]);
    }

    #[test]
    fn default_policy_retries_twice() {
        assert_eq!(RetryPolicy::default().max_attempts(), 3);
        assert!(RetryPolicy::none().delays().is_empty());
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
        reports: Mutex<Vec<FetchReport>>,
    }

    impl SchemaFetchHooks for RecordingHooks {
        fn on_fetch_started(&self, form_type: &FormType) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("started:{form_type}"));
        }

        fn on_retry(&self, form_type: &FormType, attempt: u32, delay: Duration, _error: &SchemaError) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("retry:{form_type}:{attempt}:{}ms", delay.as_millis()));
        }

        fn on_fetch_finished(&self, form_type: &FormType, report: &FetchReport) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("finished:{form_type}:{}", report.outcome.as_str()));
            self.reports.lock().expect("reports lock").push(report.clone());
        }
    }

    /// Fails the first `failures` fetches with `error`, then serves a one-field schema.
    struct FlakyProvider {
        attempts: Mutex<u32>,
        failures: u32,
        error: SchemaError,
    }

    impl FlakyProvider {
        fn new(failures: u32, error: SchemaError) -> Arc<Self> {
            Arc::new(Self {
                attempts: Mutex::new(0),
                failures,
                error,
            })
        }

        fn attempts(&self) -> u32 {
            *self.attempts.lock().expect("attempts lock")
        }
    }

    impl SchemaProvider for FlakyProvider {
        fn fetch_schema<'a>(
            &'a self,
            _form_type: &'a FormType,
        ) -> SchemaFuture<'a, Result<FormSchema, SchemaError>> {
            Box::pin(async move {
                let mut attempts = self.attempts.lock().expect("attempts lock");
                *attempts += 1;
                if *attempts <= self.failures {
                    return Err(self.error.clone());
                }

                FormSchema::new(vec![FieldDescriptor::text("name", "Name").required()])
            })
        }
    }

    fn quick(retries: u32) -> RetryPolicy {
        RetryPolicy::doubling(retries, Duration::from_millis(1), Duration::from_millis(2))
    }

    #[tokio::test]
    async fn transient_failures_are_retried_on_schedule() {
        let inner = FlakyProvider::new(2, SchemaError::unavailable("warming up"));
        let hooks = Arc::new(RecordingHooks::default());
        let provider = RetryingSchemaProvider::new(inner.clone(), quick(3)).with_hooks(hooks.clone());

        let schema = provider
            .fetch_schema(&FormType::user_info())
            .await
            .expect("third attempt succeeds");

        assert!(schema.contains("name"));
        assert_eq!(inner.attempts(), 3);
        assert_eq!(
            *hooks.events.lock().expect("events lock"),
            vec![
                "started:userInfo",
                "retry:userInfo:1:1ms",
                "retry:userInfo:2:2ms",
                "finished:userInfo:loaded",
            ]
        );
        let reports = hooks.reports.lock().expect("reports lock");
        assert_eq!(reports[0].attempts, 3);
        assert_eq!(reports[0].outcome, FetchOutcome::Loaded { field_count: 1 });
    }

    #[tokio::test]
    async fn non_retryable_errors_fail_on_the_first_attempt() {
        let inner = FlakyProvider::new(u32::MAX, SchemaError::not_found("no payment schema"));
        let hooks = Arc::new(RecordingHooks::default());
        let provider = RetryingSchemaProvider::new(inner.clone(), quick(5)).with_hooks(hooks.clone());

        let error = provider
            .fetch_schema(&FormType::payment())
            .await
            .expect_err("not found is final");

        assert_eq!(error.kind, SchemaErrorKind::NotFound);
        assert_eq!(inner.attempts(), 1);
        let reports = hooks.reports.lock().expect("reports lock");
        assert_eq!(
            reports[0].outcome,
            FetchOutcome::Failed {
                kind: SchemaErrorKind::NotFound,
                retries_exhausted: false,
            }
        );
    }

    #[tokio::test]
    async fn exhausted_schedule_reports_the_last_error() {
        let inner = FlakyProvider::new(u32::MAX, SchemaError::timeout("slow catalog"));
        let hooks = Arc::new(RecordingHooks::default());
        let provider = RetryingSchemaProvider::new(inner.clone(), quick(2)).with_hooks(hooks.clone());

        let error = provider
            .fetch_schema(&FormType::address())
            .await
            .expect_err("every attempt times out");

        assert_eq!(error.kind, SchemaErrorKind::Timeout);
        assert_eq!(inner.attempts(), 3);
        let reports = hooks.reports.lock().expect("reports lock");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].attempts, 3);
        assert!(!reports[0].is_loaded());
        assert_eq!(
            reports[0].outcome,
            FetchOutcome::Failed {
                kind: SchemaErrorKind::Timeout,
                retries_exhausted: true,
            }
        );
    }

    #[tokio::test]
    async fn no_retry_policy_tries_once() {
        let inner = FlakyProvider::new(1, SchemaError::transport("reset"));
        let provider = RetryingSchemaProvider::new(inner.clone(), RetryPolicy::none());

        assert!(provider.fetch_schema(&FormType::address()).await.is_err());
        assert_eq!(inner.attempts(), 1);
    }
}
