//! Form sessions over dynamically fetched schemas: drafts, validation,
//! progress, edit mode, and user notifications.

mod error;
mod hooks;
mod notify;
mod policy;
mod progress;
mod session;
mod validation;

pub mod prelude {
    pub use crate::{
        DanglingEditPolicy, EditCancelReason, ErrorSet, FormSession, FormSessionBuilder,
        NoopSessionHooks, Notification, NotificationKind, NotificationSink, SaveKind,
        SchemaApply, SchemaRequest, SchemaResponse, SessionError, SessionErrorKind,
        SessionHooks, SessionMessages, SessionMode, SessionPolicy, SessionView, SubmitOutcome,
        ToastCenter, ValidationOutcome, VisibleToast, progress, validate,
    };
    pub use fcommon::{FormType, RecordId};
    pub use frecords::{FieldValue, FieldValues, Record, RecordGroup, RecordStore};
    pub use fschema::{FieldDescriptor, FormSchema, InputKind, SchemaProvider};
}

pub use error::{SessionError, SessionErrorKind};
pub use hooks::{EditCancelReason, NoopSessionHooks, SaveKind, SchemaTicket, SessionHooks};
pub use notify::{
    DEFAULT_NOTIFICATION_TTL, NoopNotificationSink, Notification, NotificationKind,
    NotificationSink, Toast, ToastCenter, ToastId, VisibleToast,
};
pub use policy::{DanglingEditPolicy, SessionMessages, SessionPolicy};
pub use progress::progress;
pub use session::{
    FormSession, FormSessionBuilder, SchemaApply, SchemaRequest, SchemaResponse, SessionMode,
    SessionView, SubmitOutcome,
};
pub use validation::{ErrorSet, ValidationOutcome, validate};
pub use fcommon::{FormType, RecordId};
