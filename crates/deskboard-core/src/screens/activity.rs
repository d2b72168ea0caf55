//! Activity detail screen: view and edit a single event document.
//!
//! Unlike the list screens this one operates on one document: it loads the
//! fields directly, buffers edits in a draft mapping, and merges the full
//! edited mapping back on save. The committed local copy changes only after
//! the store acknowledges.

use crate::error::{Error, Result};
use crate::record::{FieldValue, Fields, RecordId};
use crate::store::RemoteStore;

const COLLECTION: &str = "events";

/// Detail view of one event, with an optional in-progress edit buffer.
#[derive(Debug)]
pub struct ActivityScreen<S> {
    store: S,
    event_id: RecordId,
    fields: Fields,
    edited: Option<Fields>,
}

impl<S: RemoteStore> ActivityScreen<S> {
    /// Load the event document; a missing document is a `NotFound` error
    /// surfaced inline by the caller.
    pub async fn open(store: S, event_id: RecordId) -> Result<Self> {
        let fields = store
            .get(COLLECTION, &event_id)
            .await
            .inspect_err(|error| {
                tracing::warn!(%event_id, %error, "failed to fetch event");
            })?
            .ok_or_else(|| Error::NotFound(format!("event {event_id}")))?;

        Ok(Self {
            store,
            event_id,
            fields,
            edited: None,
        })
    }

    #[must_use]
    pub const fn event_id(&self) -> &RecordId {
        &self.event_id
    }

    /// The committed field mapping.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Text of a committed field, empty when absent.
    #[must_use]
    pub fn field_text(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edited.is_some()
    }

    /// Start editing from a copy of the committed fields.
    pub fn begin_edit(&mut self) {
        if self.edited.is_none() {
            self.edited = Some(self.fields.clone());
        }
    }

    /// Change one field in the edit buffer.
    pub fn edit_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let edited = self
            .edited
            .as_mut()
            .ok_or_else(|| Error::InvalidInput("not in edit mode".to_string()))?;
        edited.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Discard the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.edited = None;
    }

    /// Merge the full edited mapping into the remote document, committing it
    /// locally only on acknowledgement.
    pub async fn save(&mut self) -> Result<()> {
        let Some(edited) = self.edited.clone() else {
            return Err(Error::InvalidInput("not in edit mode".to_string()));
        };

        self.store
            .merge(COLLECTION, &self.event_id, edited.clone())
            .await
            .inspect_err(|error| {
                tracing::warn!(event_id = %self.event_id, %error, "failed to save event");
            })?;

        self.fields = edited;
        self.edited = None;
        Ok(())
    }
}
