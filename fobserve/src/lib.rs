//! Production-friendly observability hooks for schema fetches and form sessions.
//!
//! ```rust
//! use fobserve::{MetricsObservabilityHooks, SafeSessionHooks, TracingObservabilityHooks};
//!
//! let _session_hooks = SafeSessionHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeFetchHooks, SafeNotificationSink, SafeSessionHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeFetchHooks, SafeNotificationSink, SafeSessionHooks,
        TracingObservabilityHooks,
    };
}

#[cfg(test)]
mod tests;
