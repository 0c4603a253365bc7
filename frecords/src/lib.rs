//! In-memory storage for submitted form records.

mod error;
mod record;
mod store;
mod value;

pub use error::{RecordError, RecordErrorKind};
pub use record::{Record, RecordGroup, group_by_form_type};
pub use store::{InMemoryRecordStore, RecordStore};
pub use value::{FieldValue, FieldValues};
pub use fcommon::{FormType, RecordId};
