//! intake-storage
//!
//! The record store behind the submit button: the stored-record shape, the
//! list query used by the records viewer, an in-memory store, and the async
//! submit boundary that ties a finished wizard to a store.

pub mod error;
pub mod events;
pub mod memory;
pub mod record;
pub mod store;
pub mod submit;

pub use error::{StorageError, SubmitError};
pub use memory::MemoryStore;
pub use record::{NewRecord, RecordQuery, RecordSummary, StoredRecord};
pub use store::{BoxFuture, RecordStore};
pub use submit::submit;
