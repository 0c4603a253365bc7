//! Form session orchestration.
//!
//! A [`FormSession`] owns the active form type, its schema, the draft being
//! filled in, and the per-field errors. Schema fetches are correlated by a
//! monotonic ticket: a response is only applied when it answers the most
//! recent request, so a slow fetch for a form type the user already left
//! can never overwrite the current form.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fform::{FormSession, SubmitOutcome};
//! use fschema::{FieldDescriptor, FormSchema, FormType, InMemorySchemaProvider, InputKind, SchemaCatalog};
//!
//! # block_on(async {
//! let schema = FormSchema::new(vec![
//!     FieldDescriptor::new("email", InputKind::Email, "Email").required(),
//! ])
//! .expect("schema");
//! let provider = Arc::new(InMemorySchemaProvider::new(
//!     SchemaCatalog::new().with_schema(FormType::user_info(), schema),
//! ));
//!
//! let mut session = FormSession::builder(provider).build().expect("session");
//! session.select_form_type(FormType::user_info()).await;
//! session.change_field("email", "a@b.com").expect("field accepted");
//!
//! let outcome = session.submit().expect("submit");
//! assert!(matches!(outcome, SubmitOutcome::Created(_)));
//! assert!(session.draft().is_empty());
//! # });
//! # fn block_on<F: std::future::Future>(future: F) -> F::Output {
//! #     futures_util::FutureExt::now_or_never(future).expect("in-memory fetch completes immediately")
//! # }
//! ```

use std::sync::Arc;

use fcommon::{FormType, RecordId};
use frecords::{FieldValue, FieldValues, InMemoryRecordStore, Record, RecordGroup, RecordStore};
use fschema::{FormSchema, SchemaError, SchemaProvider};

use crate::{
    DanglingEditPolicy, EditCancelReason, ErrorSet, NoopSessionHooks, Notification,
    NotificationSink, SaveKind, SchemaTicket, SessionError, SessionHooks, SessionPolicy,
    ToastCenter, progress, validate,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Creating,
    Editing(RecordId),
}

impl SessionMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            Self::Editing(id) => Some(id),
            Self::Creating => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Creating => "Submit",
            Self::Editing(_) => "Update",
        }
    }
}

/// An issued schema fetch. Resolve it anywhere, then hand the response back
/// to [`FormSession::apply_schema`].
pub struct SchemaRequest {
    ticket: SchemaTicket,
    form_type: FormType,
    provider: Arc<dyn SchemaProvider>,
}

impl SchemaRequest {
    pub fn ticket(&self) -> SchemaTicket {
        self.ticket
    }

    pub fn form_type(&self) -> &FormType {
        &self.form_type
    }

    pub async fn resolve(self) -> SchemaResponse {
        let result = self.provider.fetch_schema(&self.form_type).await;
        SchemaResponse {
            ticket: self.ticket,
            form_type: self.form_type,
            result,
        }
    }
}

impl std::fmt::Debug for SchemaRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRequest")
            .field("ticket", &self.ticket)
            .field("form_type", &self.form_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaResponse {
    pub ticket: SchemaTicket,
    pub form_type: FormType,
    pub result: Result<FormSchema, SchemaError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaApply {
    Applied,
    Failed(SchemaError),
    /// A newer request superseded this response; nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Record),
    Updated(Record),
    /// Validation failed; the errors are also held by the session.
    Rejected(ErrorSet),
    /// The record under edit no longer exists. Nothing was saved.
    Missing(RecordId),
}

/// Read-only snapshot of everything a form view renders.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub form_type: &'a FormType,
    pub title: &'a str,
    pub schema: Option<&'a FormSchema>,
    pub draft: &'a FieldValues,
    pub errors: &'a ErrorSet,
    pub mode: &'a SessionMode,
    pub loading: bool,
    /// Present only while a schema is loaded.
    pub progress: Option<f64>,
    pub submit_label: &'static str,
}

#[derive(Debug)]
struct EditSeed {
    id: RecordId,
    values: FieldValues,
}

#[derive(Debug)]
struct PendingFetch {
    ticket: SchemaTicket,
    edit: Option<EditSeed>,
}

pub struct FormSessionBuilder {
    provider: Arc<dyn SchemaProvider>,
    store: Option<Arc<dyn RecordStore>>,
    toasts: Option<Arc<ToastCenter>>,
    sinks: Vec<Arc<dyn NotificationSink>>,
    hooks: Arc<dyn SessionHooks>,
    policy: SessionPolicy,
    form_type: FormType,
}

impl FormSessionBuilder {
    pub fn new(provider: Arc<dyn SchemaProvider>) -> Self {
        Self {
            provider,
            store: None,
            toasts: None,
            sinks: Vec::new(),
            hooks: Arc::new(NoopSessionHooks),
            policy: SessionPolicy::default(),
            form_type: FormType::default(),
        }
    }

    pub fn store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Shares a toast center with the caller. Defaults to a private one
    /// using the policy's notification TTL.
    pub fn toasts(mut self, toasts: Arc<ToastCenter>) -> Self {
        self.toasts = Some(toasts);
        self
    }

    /// Adds a sink that receives every notification alongside the toasts.
    pub fn notification_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn policy(mut self, policy: SessionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn form_type(mut self, form_type: impl Into<FormType>) -> Self {
        self.form_type = form_type.into();
        self
    }

    pub fn build(self) -> Result<FormSession, SessionError> {
        self.policy.validate()?;

        let toasts = self
            .toasts
            .unwrap_or_else(|| Arc::new(ToastCenter::new(self.policy.notification_ttl)));
        let store: Arc<dyn RecordStore> = match self.store {
            Some(store) => store,
            None => Arc::new(InMemoryRecordStore::new()),
        };

        Ok(FormSession {
            provider: self.provider,
            store,
            toasts,
            sinks: self.sinks,
            hooks: self.hooks,
            policy: self.policy,
            form_type: self.form_type,
            schema: None,
            draft: FieldValues::new(),
            errors: ErrorSet::new(),
            mode: SessionMode::Creating,
            pending: None,
            next_ticket: 1,
        })
    }
}

pub struct FormSession {
    provider: Arc<dyn SchemaProvider>,
    store: Arc<dyn RecordStore>,
    toasts: Arc<ToastCenter>,
    sinks: Vec<Arc<dyn NotificationSink>>,
    hooks: Arc<dyn SessionHooks>,
    policy: SessionPolicy,
    form_type: FormType,
    schema: Option<FormSchema>,
    draft: FieldValues,
    errors: ErrorSet,
    mode: SessionMode,
    pending: Option<PendingFetch>,
    next_ticket: SchemaTicket,
}

impl FormSession {
    pub fn builder(provider: Arc<dyn SchemaProvider>) -> FormSessionBuilder {
        FormSessionBuilder::new(provider)
    }

    pub fn form_type(&self) -> &FormType {
        &self.form_type
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    pub fn draft(&self) -> &FieldValues {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn policy(&self) -> &SessionPolicy {
        &self.policy
    }

    pub fn toasts(&self) -> &Arc<ToastCenter> {
        &self.toasts
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Input is accepted only with a schema loaded and no fetch in flight.
    pub fn is_ready(&self) -> bool {
        self.schema.is_some() && self.pending.is_none()
    }

    pub fn progress(&self) -> Option<f64> {
        self.schema
            .as_ref()
            .map(|schema| progress(&self.draft, schema))
    }

    pub fn view(&self) -> SessionView<'_> {
        let title = self
            .schema
            .as_ref()
            .and_then(FormSchema::title)
            .unwrap_or_else(|| self.form_type.display_title());

        SessionView {
            form_type: &self.form_type,
            title,
            schema: self.schema.as_ref(),
            draft: &self.draft,
            errors: &self.errors,
            mode: &self.mode,
            loading: self.is_loading(),
            progress: self.progress(),
            submit_label: self.mode.submit_label(),
        }
    }

    /// Switches to `form_type` and issues the fetch for its schema.
    ///
    /// The previous schema, draft, errors, and any active edit are dropped
    /// immediately; the session stays not-ready until the matching response
    /// is applied.
    pub fn begin_select_form_type(&mut self, form_type: impl Into<FormType>) -> SchemaRequest {
        if let SessionMode::Editing(id) = std::mem::take(&mut self.mode) {
            self.hooks
                .on_edit_cancelled(&id, EditCancelReason::FormTypeChanged);
        }

        self.form_type = form_type.into();
        self.reset_form();
        self.issue_request(None)
    }

    /// Applies a resolved fetch. Responses to superseded requests are discarded.
    pub fn apply_schema(&mut self, response: SchemaResponse) -> SchemaApply {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == response.ticket => pending,
            other => {
                self.pending = other;
                self.hooks
                    .on_schema_discarded(&response.form_type, response.ticket);
                return SchemaApply::Stale;
            }
        };

        match response.result {
            Ok(schema) => {
                self.hooks
                    .on_schema_applied(&response.form_type, response.ticket, schema.len());
                self.schema = Some(schema);
                self.errors.clear();
                match pending.edit {
                    Some(seed) => {
                        self.draft = seed.values;
                        self.mode = SessionMode::Editing(seed.id);
                    }
                    None => {
                        self.draft.clear();
                        self.mode = SessionMode::Creating;
                    }
                }
                SchemaApply::Applied
            }
            Err(error) => {
                self.hooks
                    .on_schema_failed(&response.form_type, response.ticket, &error);
                self.reset_form();
                if let Some(seed) = pending.edit {
                    self.mode = SessionMode::Creating;
                    self.hooks
                        .on_edit_cancelled(&seed.id, EditCancelReason::SchemaFailed);
                }
                self.notify(Notification::error(self.policy.messages.load_failed.clone()));
                SchemaApply::Failed(error)
            }
        }
    }

    pub async fn select_form_type(&mut self, form_type: impl Into<FormType>) -> SchemaApply {
        let request = self.begin_select_form_type(form_type);
        let response = request.resolve().await;
        self.apply_schema(response)
    }

    /// Re-fetches the schema for the current form type, dropping the draft.
    pub async fn reload(&mut self) -> SchemaApply {
        let form_type = self.form_type.clone();
        self.select_form_type(form_type).await
    }

    pub fn change_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SessionError> {
        let schema = self.ready_schema()?;
        if !schema.contains(name) {
            return Err(SessionError::invalid_request(format!(
                "form '{}' has no field '{name}'",
                self.form_type
            )));
        }

        self.draft.insert(name, value);
        let cleared = self.errors.clear_field(name);
        self.hooks.on_field_changed(&self.form_type, name, cleared);
        Ok(())
    }

    /// Validates the draft and saves it as a new record or over the record
    /// under edit.
    ///
    /// Store failures leave the draft and mode untouched so the user can retry.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let schema = self.ready_schema()?;
        let outcome = validate(&self.draft, schema);
        if !outcome.is_valid {
            self.errors = outcome.errors.clone();
            self.hooks.on_submit_rejected(&self.form_type, &self.errors);
            self.notify(Notification::error(
                self.policy.messages.required_fields_missing.clone(),
            ));
            return Ok(SubmitOutcome::Rejected(outcome.errors));
        }

        let values = typed_values(&self.draft, schema);
        match self.mode.clone() {
            SessionMode::Creating => {
                let record = Record::create(self.form_type.clone(), values);
                if let Err(error) = self.store.insert(record.clone()) {
                    return Err(self.storage_failure(error.into()));
                }

                self.hooks
                    .on_record_saved(&self.form_type, &record.id, SaveKind::Created);
                self.notify(Notification::success(self.policy.messages.submitted.clone()));
                self.clear_draft();
                Ok(SubmitOutcome::Created(record))
            }
            SessionMode::Editing(id) => {
                let updated = match self.store.update(&id, values.clone()) {
                    Ok(updated) => updated,
                    Err(error) => return Err(self.storage_failure(error.into())),
                };

                if !updated {
                    self.mode = SessionMode::Creating;
                    self.hooks
                        .on_edit_cancelled(&id, EditCancelReason::RecordMissing);
                    self.notify(Notification::error(
                        self.policy.messages.edit_target_missing.clone(),
                    ));
                    return Ok(SubmitOutcome::Missing(id));
                }

                self.hooks
                    .on_record_saved(&self.form_type, &id, SaveKind::Updated);
                self.notify(Notification::success(self.policy.messages.updated.clone()));
                self.clear_draft();
                self.mode = SessionMode::Creating;
                Ok(SubmitOutcome::Updated(Record::new(
                    id,
                    self.form_type.clone(),
                    values,
                )))
            }
        }
    }

    /// Enters edit mode for `record`.
    ///
    /// When its schema is already loaded the draft is filled in place and no
    /// request is returned. Otherwise the session switches form type and the
    /// returned request carries the record's values, applied together with
    /// the schema.
    pub fn begin_edit(&mut self, record: &Record) -> Option<SchemaRequest> {
        let in_place = record.form_type == self.form_type && self.is_ready();

        self.mode = SessionMode::Editing(record.id.clone());
        self.hooks.on_edit_started(&record.form_type, &record.id);
        self.notify(Notification::info(self.policy.messages.edit_started.clone()));

        if in_place {
            self.draft = record.values.clone();
            self.errors.clear();
            return None;
        }

        self.form_type = record.form_type.clone();
        self.reset_form();
        Some(self.issue_request(Some(EditSeed {
            id: record.id.clone(),
            values: record.values.clone(),
        })))
    }

    /// Returns `None` when no schema fetch was needed.
    pub async fn start_edit(&mut self, record: &Record) -> Option<SchemaApply> {
        let request = self.begin_edit(record)?;
        let response = request.resolve().await;
        Some(self.apply_schema(response))
    }

    pub async fn start_edit_by_id(
        &mut self,
        id: &RecordId,
    ) -> Result<Option<SchemaApply>, SessionError> {
        let record = self
            .store
            .get(id)?
            .ok_or_else(|| SessionError::invalid_request(format!("no record '{id}'")))?;
        Ok(self.start_edit(&record).await)
    }

    /// Leaves edit mode, clearing the draft. Returns whether an edit was active.
    pub fn cancel_edit(&mut self) -> bool {
        let Some(id) = self.mode.editing_id().cloned() else {
            return false;
        };

        self.mode = SessionMode::Creating;
        if let Some(pending) = self.pending.as_mut() {
            pending.edit = None;
        }
        self.clear_draft();
        self.hooks
            .on_edit_cancelled(&id, EditCancelReason::Requested);
        true
    }

    /// Removes a record. Deleting an absent id is a successful no-op.
    pub fn delete_record(&mut self, id: &RecordId) -> Result<bool, SessionError> {
        let existed = match self.store.delete(id) {
            Ok(existed) => existed,
            Err(error) => return Err(self.storage_failure(error.into())),
        };

        self.hooks.on_record_deleted(id, existed);
        self.notify(Notification::success(self.policy.messages.deleted.clone()));

        if self.mode.editing_id() == Some(id)
            && self.policy.dangling_edit == DanglingEditPolicy::CancelEdit
        {
            self.mode = SessionMode::Creating;
            if let Some(pending) = self.pending.as_mut() {
                pending.edit = None;
            }
            self.clear_draft();
            self.hooks
                .on_edit_cancelled(id, EditCancelReason::RecordDeleted);
        }

        Ok(existed)
    }

    pub fn record(&self, id: &RecordId) -> Result<Option<Record>, SessionError> {
        Ok(self.store.get(id)?)
    }

    pub fn records(&self) -> Result<Vec<RecordGroup>, SessionError> {
        Ok(self.store.list_grouped_by_type()?)
    }

    fn ready_schema(&self) -> Result<&FormSchema, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::not_ready(format!(
                "schema for '{}' is still loading",
                self.form_type
            )));
        }

        self.schema.as_ref().ok_or_else(|| {
            SessionError::not_ready(format!("no schema loaded for '{}'", self.form_type))
        })
    }

    fn issue_request(&mut self, edit: Option<EditSeed>) -> SchemaRequest {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(PendingFetch { ticket, edit });
        self.hooks.on_schema_requested(&self.form_type, ticket);

        SchemaRequest {
            ticket,
            form_type: self.form_type.clone(),
            provider: Arc::clone(&self.provider),
        }
    }

    fn reset_form(&mut self) {
        self.schema = None;
        self.clear_draft();
    }

    fn clear_draft(&mut self) {
        self.draft.clear();
        self.errors.clear();
    }

    fn storage_failure(&self, error: SessionError) -> SessionError {
        self.notify(Notification::error(
            self.policy.messages.storage_failed.clone(),
        ));
        error
    }

    fn notify(&self, notification: Notification) {
        self.toasts.notify(&notification);
        for sink in &self.sinks {
            sink.notify(&notification);
        }
    }
}

/// Numeric fields carry numbers once submitted when the number renders back
/// to the text as entered; anything else is kept as text.
fn typed_values(draft: &FieldValues, schema: &FormSchema) -> FieldValues {
    draft
        .iter()
        .map(|(name, value)| {
            let numeric = schema
                .field(name)
                .is_some_and(|field| field.input_kind.is_numeric());
            let value = if numeric {
                value.clone().into_numeric()
            } else {
                value.clone()
            };
            (name.to_string(), value)
        })
        .collect()
}
