//! In-memory document store.
//!
//! Backs tests and `--memory` demo runs. Handles are cheap to clone and
//! share one underlying store, so multiple screens (or tasks) observe the
//! same collections. The single mutex also provides the transactional
//! boundary for [`MemoryStore::toggle_flag`].

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::record::{FieldValue, Fields, Record, RecordId};
use crate::store::RemoteStore;
use crate::util::now_millis;

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Record>>,
    last_marker: i64,
    fail_writes: u32,
    fail_reads: u32,
}

impl Inner {
    /// Next strictly-increasing creation marker (Unix ms resolution).
    fn next_marker(&mut self) -> i64 {
        self.last_marker = self.last_marker.max(now_millis()) + 1;
        self.last_marker
    }

    fn take_write_failure(&mut self) -> Result<()> {
        if self.fail_writes > 0 {
            self.fail_writes -= 1;
            return Err(Error::Persistence("injected write failure".to_string()));
        }
        Ok(())
    }

    fn take_read_failure(&mut self) -> Result<()> {
        if self.fail_reads > 0 {
            self.fail_reads -= 1;
            return Err(Error::Fetch("injected read failure".to_string()));
        }
        Ok(())
    }

    fn find_mut(&mut self, collection: &str, id: &RecordId) -> Option<&mut Record> {
        self.collections
            .get_mut(collection)?
            .iter_mut()
            .find(|record| &record.id == id)
    }
}

/// Shared in-memory implementation of [`RemoteStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` write operations fail with a `Persistence` error.
    pub async fn inject_write_failures(&self, count: u32) {
        self.inner.lock().await.fail_writes = count;
    }

    /// Make the next `count` read operations fail with a `Fetch` error.
    pub async fn inject_read_failures(&self, count: u32) {
        self.inner.lock().await.fail_reads = count;
    }

    /// Number of documents currently stored in a collection.
    pub async fn collection_len(&self, collection: &str) -> usize {
        self.inner
            .lock()
            .await
            .collections
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl RemoteStore for MemoryStore {
    async fn insert(&self, collection: &str, fields: Fields) -> Result<Record> {
        let mut inner = self.inner.lock().await;
        inner.take_write_failure()?;

        let record = Record {
            id: RecordId::from(Uuid::now_v7().to_string()),
            fields,
            created_at: inner.next_marker(),
        };
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Fields>> {
        let mut inner = self.inner.lock().await;
        inner.take_read_failure()?;

        Ok(inner
            .collections
            .get(collection)
            .and_then(|records| records.iter().find(|record| &record.id == id))
            .map(|record| record.fields.clone()))
    }

    async fn get_all(&self, collection: &str, order_by: Option<&str>) -> Result<Vec<Record>> {
        let mut inner = self.inner.lock().await;
        inner.take_read_failure()?;

        let mut records = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        if let Some(field) = order_by {
            // Stable sort: records missing the field sort first, ties keep
            // creation order.
            records.sort_by(|a, b| match (a.fields.get(field), b.fields.get(field)) {
                (Some(left), Some(right)) => left.compare(right),
                (None, Some(_)) => std::cmp::Ordering::Less,
                (Some(_), None) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }
        Ok(records)
    }

    async fn merge(&self, collection: &str, id: &RecordId, partial: Fields) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.take_write_failure()?;

        let record = inner.find_mut(collection, id).ok_or_else(|| {
            Error::Persistence(format!("no document {id} in collection {collection}"))
        })?;
        record.fields.extend(partial);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.take_write_failure()?;

        let records = inner.collections.get_mut(collection).ok_or_else(|| {
            Error::Persistence(format!("no document {id} in collection {collection}"))
        })?;
        let position = records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| {
                Error::Persistence(format!("no document {id} in collection {collection}"))
            })?;
        records.remove(position);
        Ok(())
    }

    async fn toggle_flag(&self, collection: &str, id: &RecordId, field: &str) -> Result<bool> {
        // Read-negate-write under one lock guard: atomic with respect to
        // concurrent toggles on the same document.
        let mut inner = self.inner.lock().await;
        inner.take_write_failure()?;

        let record = inner.find_mut(collection, id).ok_or_else(|| {
            Error::PreconditionFailed(format!("document {id} does not exist"))
        })?;
        let current = record
            .fields
            .get(field)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false);
        let next = !current;
        record
            .fields
            .insert(field.to_string(), FieldValue::Bool(next));
        Ok(next)
    }
}
