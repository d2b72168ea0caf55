//! Todo list screen.

use crate::error::{Error, Result};
use crate::record::{FieldValue, Fields, Record, RecordId};
use crate::store::RemoteStore;
use crate::sync::ViewSync;

const COLLECTION: &str = "todo";
const FIELD_TODO: &str = "todo";
const FIELD_IS_CHECKED: &str = "is_checked";

/// One todo entry as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: RecordId,
    pub todo: String,
    pub is_checked: bool,
    pub created_at: i64,
}

impl TodoItem {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            todo: record.text(FIELD_TODO).to_string(),
            is_checked: record.flag(FIELD_IS_CHECKED),
            created_at: record.created_at,
        }
    }
}

/// Todo screen: draft input, add/edit modal flags, and the synced list.
#[derive(Debug)]
pub struct TodoScreen<S> {
    view: ViewSync<S>,
    /// Text of the todo being composed in the add modal.
    pub draft: String,
    pub add_modal_open: bool,
    /// Id of the item currently open in the edit modal, if any.
    pub editing: Option<RecordId>,
}

impl<S: RemoteStore> TodoScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            view: ViewSync::new(store, COLLECTION),
            draft: String::new(),
            add_modal_open: false,
            editing: None,
        }
    }

    /// Fetch the remote list (creation order) into the local view.
    pub async fn reload(&mut self) -> Result<()> {
        self.view.load().await?;
        Ok(())
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> Vec<TodoItem> {
        self.view.records().iter().map(TodoItem::from_record).collect()
    }

    /// Add a new unchecked todo; the item appears once the store confirms.
    pub async fn add(&mut self, text: &str) -> Result<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("todo text must not be empty".to_string()));
        }

        let fields = Fields::from([
            (FIELD_TODO.to_string(), FieldValue::from(text)),
            (FIELD_IS_CHECKED.to_string(), FieldValue::Bool(false)),
        ]);
        let record = self.view.create(fields).await?;
        Ok(TodoItem::from_record(&record))
    }

    /// Submit the add-modal form: persist the draft, then clear it and close
    /// the modal. The draft survives a failed submit.
    pub async fn submit_draft(&mut self) -> Result<TodoItem> {
        let draft = self.draft.clone();
        let item = self.add(&draft).await?;
        self.draft.clear();
        self.add_modal_open = false;
        Ok(item)
    }

    /// Rename an item (the edit-modal save).
    pub async fn rename(&mut self, id: &RecordId, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("todo text must not be empty".to_string()));
        }
        self.view.update(id, FIELD_TODO, text).await?;
        self.editing = None;
        Ok(())
    }

    /// Flip an item's checked state; atomic against concurrent toggles.
    pub async fn toggle_done(&mut self, id: &RecordId) -> Result<bool> {
        self.view.toggle(id, FIELD_IS_CHECKED).await
    }

    /// Delete an item. Callers present the destructive-action confirmation
    /// before invoking this.
    pub async fn remove(&mut self, id: &RecordId) -> Result<()> {
        self.view.delete(id).await
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
        self.draft.clear();
    }
}
