use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;
use crate::record::{NewRecord, RecordQuery, StoredRecord};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for submitted questionnaires.
///
/// Implementations assign `id` and `created_at`; callers never choose them.
pub trait RecordStore: Send + Sync {
    /// Store one submission and return it as stored.
    fn insert(&self, record: NewRecord) -> BoxFuture<'_, Result<StoredRecord, StorageError>>;

    /// Every stored record matching `query`, newest first.
    fn list(&self, query: RecordQuery) -> BoxFuture<'_, Result<Vec<StoredRecord>, StorageError>>;
}
