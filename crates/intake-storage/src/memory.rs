use jiff::Timestamp;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StorageError;
use crate::record::{NewRecord, RecordQuery, StoredRecord};
use crate::store::{BoxFuture, RecordStore};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<StoredRecord>,
    last_id: u64,
    fail_next: Option<String>,
}

/// In-process record store. Ids are assigned from a counter starting at 1
/// and never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with existing records. New ids continue after the
    /// highest seeded id.
    pub fn seeded(records: Vec<StoredRecord>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                records,
                last_id,
                fail_next: None,
            }),
        }
    }

    /// Make the next insert fail with [`StorageError::Unavailable`].
    pub async fn fail_next(&self, reason: impl Into<String>) {
        self.inner.lock().await.fail_next = Some(reason.into());
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, record: NewRecord) -> BoxFuture<'_, Result<StoredRecord, StorageError>> {
        Box::pin(async move {
            let mut inner = self.inner.lock().await;
            if let Some(reason) = inner.fail_next.take() {
                return Err(StorageError::Unavailable(reason));
            }

            inner.last_id += 1;
            let stored = record.into_stored(inner.last_id, Timestamp::now());
            debug!(record_id = stored.id, "record inserted");
            inner.records.push(stored.clone());
            Ok(stored)
        })
    }

    fn list(&self, query: RecordQuery) -> BoxFuture<'_, Result<Vec<StoredRecord>, StorageError>> {
        Box::pin(async move {
            let inner = self.inner.lock().await;
            let mut matched = Vec::new();
            for record in &inner.records {
                if query.matches(record)? {
                    matched.push(record.clone());
                }
            }
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            debug!(count = matched.len(), "records listed");
            Ok(matched)
        })
    }
}
