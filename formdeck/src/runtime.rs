//! Runtime wiring helpers for form sessions.

use std::sync::Arc;

use fobserve::{SafeFetchHooks, SafeNotificationSink, SafeSessionHooks, TracingObservabilityHooks};

use crate::{
    FormSession, FormType, InMemoryRecordStore, InMemorySchemaProvider, RecordStore, RetryPolicy,
    RetryingSchemaProvider, SchemaApply, SchemaCatalog, SchemaError, SchemaProvider, SessionError,
    SessionPolicy, ToastCenter,
};

/// A session together with the shared handles a view needs alongside it.
pub struct SessionBundle {
    pub session: FormSession,
    pub store: Arc<dyn RecordStore>,
    pub toasts: Arc<ToastCenter>,
}

pub fn in_memory_store() -> Arc<dyn RecordStore> {
    Arc::new(InMemoryRecordStore::new())
}

pub fn catalog_provider(catalog: SchemaCatalog) -> Arc<dyn SchemaProvider> {
    Arc::new(InMemorySchemaProvider::new(catalog))
}

pub fn catalog_provider_from_json(json: &str) -> Result<Arc<dyn SchemaProvider>, SchemaError> {
    Ok(Arc::new(InMemorySchemaProvider::from_json_str(json)?))
}

/// Wraps `inner` with retries that report through tracing.
pub fn retrying_provider(
    inner: Arc<dyn SchemaProvider>,
    policy: RetryPolicy,
) -> Arc<dyn SchemaProvider> {
    Arc::new(
        RetryingSchemaProvider::new(inner, policy)
            .with_hooks(Arc::new(SafeFetchHooks::new(TracingObservabilityHooks))),
    )
}

pub fn build_session(provider: Arc<dyn SchemaProvider>) -> Result<SessionBundle, SessionError> {
    build_session_with(provider, in_memory_store(), SessionPolicy::default())
}

pub fn build_session_with_store(
    provider: Arc<dyn SchemaProvider>,
    store: Arc<dyn RecordStore>,
) -> Result<SessionBundle, SessionError> {
    build_session_with(provider, store, SessionPolicy::default())
}

pub fn build_session_with(
    provider: Arc<dyn SchemaProvider>,
    store: Arc<dyn RecordStore>,
    policy: SessionPolicy,
) -> Result<SessionBundle, SessionError> {
    policy.validate()?;
    let toasts = Arc::new(ToastCenter::new(policy.notification_ttl));

    let session = FormSession::builder(provider)
        .store(Arc::clone(&store))
        .toasts(Arc::clone(&toasts))
        .hooks(Arc::new(SafeSessionHooks::new(TracingObservabilityHooks)))
        .notification_sink(Arc::new(SafeNotificationSink::new(
            TracingObservabilityHooks,
        )))
        .policy(policy)
        .build()?;

    Ok(SessionBundle {
        session,
        store,
        toasts,
    })
}

/// Builds a session and loads the schema for `form_type`, the way a form
/// view does when first shown.
pub async fn open_session(
    provider: Arc<dyn SchemaProvider>,
    form_type: impl Into<FormType>,
) -> Result<(SessionBundle, SchemaApply), SessionError> {
    let mut bundle = build_session(provider)?;
    let loaded = bundle.session.select_form_type(form_type).await;
    Ok((bundle, loaded))
}
