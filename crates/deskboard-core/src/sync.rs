//! View-state synchronization between a local collection and a remote store.
//!
//! [`ViewSync`] keeps one screen's ordered [`Collection`] consistent with a
//! remote document collection. `create` and `update` are pessimistic: local
//! state changes only after remote acknowledgement. `toggle` and `delete`
//! are optimistic: the local mutation is applied first for immediate
//! feedback, with a captured pre-image restored when the remote call fails.
//! `load` is the coarse reconciliation point that replaces local state with
//! the fetched remote state wholesale.

use crate::error::{Error, Result};
use crate::record::{Collection, FieldValue, Fields, Record, RecordId};
use crate::store::RemoteStore;

/// Synchronizer for one screen's view of a remote collection.
#[derive(Debug)]
pub struct ViewSync<S> {
    store: S,
    collection: String,
    order_by: Option<String>,
    records: Collection,
}

impl<S: RemoteStore> ViewSync<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            order_by: None,
            records: Collection::new(),
        }
    }

    /// Sort fetched records by a named field instead of creation order.
    #[must_use]
    pub fn with_order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// The local view of the collection.
    #[must_use]
    pub const fn records(&self) -> &Collection {
        &self.records
    }

    /// The underlying store handle.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the full remote collection and replace the local view.
    ///
    /// On fetch failure the local view keeps its previous (stale) contents.
    pub async fn load(&mut self) -> Result<&Collection> {
        let fetched = self
            .store
            .get_all(&self.collection, self.order_by.as_deref())
            .await
            .inspect_err(|error| {
                tracing::warn!(collection = %self.collection, %error, "load failed");
            })?;
        self.records.replace_all(fetched)?;
        Ok(&self.records)
    }

    /// Insert a fully populated record remotely, appending it locally once
    /// the store has acknowledged and assigned an identifier.
    pub async fn create(&mut self, fields: Fields) -> Result<Record> {
        if fields.is_empty() {
            return Err(Error::InvalidInput(
                "record fields must not be empty".to_string(),
            ));
        }

        let record = self
            .store
            .insert(&self.collection, fields)
            .await
            .inspect_err(|error| {
                tracing::warn!(collection = %self.collection, %error, "create failed");
            })?;
        self.records.push(record.clone())?;
        Ok(record)
    }

    /// Merge a single field remotely, then mutate the local record in place.
    ///
    /// Last remote write wins between concurrent updates on the same
    /// identifier; use [`ViewSync::toggle`] for boolean fields that must not
    /// lose updates.
    pub async fn update(
        &mut self,
        id: &RecordId,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        let partial = Fields::from([(field.to_string(), value.into())]);
        self.update_fields(id, partial).await
    }

    /// Merge a partial field mapping remotely, then mutate the local record.
    pub async fn update_fields(&mut self, id: &RecordId, partial: Fields) -> Result<()> {
        self.store
            .merge(&self.collection, id, partial.clone())
            .await
            .inspect_err(|error| {
                tracing::warn!(collection = %self.collection, %id, %error, "update failed");
            })?;

        if let Some(record) = self.records.get_mut(id) {
            record.fields.extend(partial);
        }
        Ok(())
    }

    /// Negate a boolean field, optimistically in the local view and
    /// atomically in the store.
    ///
    /// The local flip happens before the remote call resolves; on success
    /// the local value is reconciled to the store's returned value (which
    /// may differ under concurrent toggles from other clients), on failure
    /// the captured pre-image is restored.
    pub async fn toggle(&mut self, id: &RecordId, field: &str) -> Result<bool> {
        let previous = {
            let record = self
                .records
                .get_mut(id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            let previous = record.flag(field);
            record
                .fields
                .insert(field.to_string(), FieldValue::Bool(!previous));
            previous
        };

        match self.store.toggle_flag(&self.collection, id, field).await {
            Ok(value) => {
                if let Some(record) = self.records.get_mut(id) {
                    record
                        .fields
                        .insert(field.to_string(), FieldValue::Bool(value));
                }
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(
                    collection = %self.collection, %id, %error,
                    "toggle failed, rolling back local flip"
                );
                if let Some(record) = self.records.get_mut(id) {
                    record
                        .fields
                        .insert(field.to_string(), FieldValue::Bool(previous));
                }
                Err(error)
            }
        }
    }

    /// Remove a record, optimistically from the local view and then from the
    /// store. The pre-image is restored at its original position when the
    /// remote delete fails.
    pub async fn delete(&mut self, id: &RecordId) -> Result<()> {
        let (position, pre_image) = self
            .records
            .remove(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        match self.store.delete(&self.collection, id).await {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(
                    collection = %self.collection, %id, %error,
                    "delete failed, restoring record"
                );
                self.records.insert_at(position, pre_image)?;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn todo_fields(text: &str) -> Fields {
        Fields::from([
            ("todo".to_string(), FieldValue::from(text)),
            ("is_checked".to_string(), FieldValue::Bool(false)),
        ])
    }

    fn view(store: &MemoryStore) -> ViewSync<MemoryStore> {
        ViewSync::new(store.clone(), "todo")
    }

    #[tokio::test]
    async fn create_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut sync = view(&store);

        let record = sync.create(todo_fields("Buy milk")).await.unwrap();
        assert_eq!(sync.records().len(), 1);

        let mut fresh = view(&store);
        fresh.load().await.unwrap();
        let loaded = fresh.records().get(&record.id).unwrap();
        assert_eq!(loaded.text("todo"), "Buy milk");
        assert!(!loaded.flag("is_checked"));
    }

    #[tokio::test]
    async fn create_rejects_empty_fields() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        assert!(matches!(
            sync.create(Fields::new()).await,
            Err(Error::InvalidInput(_))
        ));
        assert!(sync.records().is_empty());
    }

    #[tokio::test]
    async fn failed_create_leaves_local_unchanged() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        store.inject_write_failures(1).await;

        let result = sync.create(todo_fields("Buy milk")).await;
        assert!(matches!(result, Err(Error::Persistence(_))));
        assert!(sync.records().is_empty());
        assert_eq!(store.collection_len("todo").await, 0);
    }

    #[tokio::test]
    async fn update_is_visible_after_reload() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        sync.update(&record.id, "todo", "Buy oat milk").await.unwrap();
        assert_eq!(sync.records().get(&record.id).unwrap().text("todo"), "Buy oat milk");

        let mut fresh = view(&store);
        fresh.load().await.unwrap();
        assert_eq!(
            fresh.records().get(&record.id).unwrap().text("todo"),
            "Buy oat milk"
        );
    }

    #[tokio::test]
    async fn failed_update_leaves_local_value() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        store.inject_write_failures(1).await;
        let result = sync.update(&record.id, "todo", "Buy oat milk").await;
        assert!(matches!(result, Err(Error::Persistence(_))));
        assert_eq!(sync.records().get(&record.id).unwrap().text("todo"), "Buy milk");
    }

    #[tokio::test]
    async fn delete_removes_locally_and_remotely() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        sync.delete(&record.id).await.unwrap();
        assert!(!sync.records().contains(&record.id));

        let mut fresh = view(&store);
        fresh.load().await.unwrap();
        assert!(!fresh.records().contains(&record.id));
    }

    #[tokio::test]
    async fn failed_delete_restores_record_at_position() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        sync.create(todo_fields("first")).await.unwrap();
        let target = sync.create(todo_fields("second")).await.unwrap();
        sync.create(todo_fields("third")).await.unwrap();

        store.inject_write_failures(1).await;
        let result = sync.delete(&target.id).await;
        assert!(matches!(result, Err(Error::Persistence(_))));

        assert_eq!(sync.records().position(&target.id), Some(1));
        assert_eq!(sync.records().len(), 3);
        // Remote still has the record.
        assert_eq!(store.collection_len("todo").await, 3);
    }

    #[tokio::test]
    async fn toggle_reconciles_to_remote_value() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        let value = sync.toggle(&record.id, "is_checked").await.unwrap();
        assert!(value);
        assert!(sync.records().get(&record.id).unwrap().flag("is_checked"));

        let value = sync.toggle(&record.id, "is_checked").await.unwrap();
        assert!(!value);
    }

    #[tokio::test]
    async fn failed_toggle_rolls_back_local_flip() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        store.inject_write_failures(1).await;
        let result = sync.toggle(&record.id, "is_checked").await;
        assert!(matches!(result, Err(Error::Persistence(_))));
        assert!(!sync.records().get(&record.id).unwrap().flag("is_checked"));
    }

    #[tokio::test]
    async fn toggle_on_remotely_deleted_record_fails_precondition_and_rolls_back() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();

        // Another client deletes the document out from under this view.
        store.delete("todo", &record.id).await.unwrap();

        let result = sync.toggle(&record.id, "is_checked").await;
        assert!(matches!(result, Err(Error::PreconditionFailed(_))));
        assert!(!sync.records().get(&record.id).unwrap().flag("is_checked"));
    }

    #[tokio::test]
    async fn failed_load_keeps_stale_view() {
        let store = MemoryStore::new();
        let mut sync = view(&store);
        let record = sync.create(todo_fields("Buy milk")).await.unwrap();
        sync.load().await.unwrap();

        store.inject_read_failures(1).await;
        let result = sync.load().await;
        assert!(matches!(result, Err(Error::Fetch(_))));
        assert!(sync.records().contains(&record.id));
    }

    #[tokio::test]
    async fn load_heals_divergence_after_mixed_operations() {
        let store = MemoryStore::new();
        let mut sync = view(&store);

        let a = sync.create(todo_fields("a")).await.unwrap();
        let b = sync.create(todo_fields("b")).await.unwrap();
        sync.update(&a.id, "todo", "a2").await.unwrap();
        sync.toggle(&b.id, "is_checked").await.unwrap();
        sync.delete(&a.id).await.unwrap();

        let mut fresh = view(&store);
        fresh.load().await.unwrap();
        assert_eq!(fresh.records().len(), 1);
        let survivor = fresh.records().get(&b.id).unwrap();
        assert_eq!(survivor.text("todo"), "b");
        assert!(survivor.flag("is_checked"));
    }
}
