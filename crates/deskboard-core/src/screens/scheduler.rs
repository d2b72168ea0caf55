//! Calendar scheduler screen.

use crate::error::{Error, Result};
use crate::record::{FieldValue, Fields, Record, RecordId};
use crate::store::RemoteStore;
use crate::sync::ViewSync;

const COLLECTION: &str = "scheduler";

const FIELD_SUBJECT: &str = "subject";
const FIELD_LOCATION: &str = "location";
const FIELD_START: &str = "start";
const FIELD_END: &str = "end";
const FIELD_ALL_DAY: &str = "all_day";

/// One calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerEntry {
    pub id: RecordId,
    pub subject: String,
    pub location: String,
    /// ISO 8601 start, as entered by the scheduler widget.
    pub start: String,
    /// ISO 8601 end.
    pub end: String,
    pub all_day: bool,
}

impl SchedulerEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            subject: record.text(FIELD_SUBJECT).to_string(),
            location: record.text(FIELD_LOCATION).to_string(),
            start: record.text(FIELD_START).to_string(),
            end: record.text(FIELD_END).to_string(),
            all_day: record.flag(FIELD_ALL_DAY),
        }
    }
}

/// Scheduler screen: the synced calendar entry list, ordered by start time.
#[derive(Debug)]
pub struct SchedulerScreen<S> {
    view: ViewSync<S>,
}

impl<S: RemoteStore> SchedulerScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            view: ViewSync::new(store, COLLECTION).with_order_by(FIELD_START),
        }
    }

    pub async fn reload(&mut self) -> Result<()> {
        self.view.load().await?;
        Ok(())
    }

    #[must_use]
    pub fn entries(&self) -> Vec<SchedulerEntry> {
        self.view
            .records()
            .iter()
            .map(SchedulerEntry::from_record)
            .collect()
    }

    /// Add a calendar entry; appears once the store confirms.
    pub async fn add(
        &mut self,
        subject: &str,
        location: &str,
        start: &str,
        end: &str,
        all_day: bool,
    ) -> Result<SchedulerEntry> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(Error::InvalidInput("subject must not be empty".to_string()));
        }
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(Error::InvalidInput(
                "start and end times are required".to_string(),
            ));
        }

        let fields = Fields::from([
            (FIELD_SUBJECT.to_string(), FieldValue::from(subject)),
            (FIELD_LOCATION.to_string(), FieldValue::from(location.trim())),
            (FIELD_START.to_string(), FieldValue::from(start.trim())),
            (FIELD_END.to_string(), FieldValue::from(end.trim())),
            (FIELD_ALL_DAY.to_string(), FieldValue::Bool(all_day)),
        ]);
        let record = self.view.create(fields).await?;
        Ok(SchedulerEntry::from_record(&record))
    }

    /// Remove an entry.
    pub async fn remove(&mut self, id: &RecordId) -> Result<()> {
        self.view.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn entries_come_back_ordered_by_start() {
        let store = MemoryStore::new();
        let mut screen = SchedulerScreen::new(store);

        screen
            .add("Standup", "", "2024-05-11T09:00:00", "2024-05-11T09:15:00", false)
            .await
            .unwrap();
        screen
            .add("Planning", "Room 2", "2024-05-10T10:00:00", "2024-05-10T11:00:00", false)
            .await
            .unwrap();
        screen.reload().await.unwrap();

        let subjects: Vec<String> = screen
            .entries()
            .into_iter()
            .map(|entry| entry.subject)
            .collect();
        assert_eq!(subjects, vec!["Planning", "Standup"]);
    }

    #[tokio::test]
    async fn add_validates_subject_and_times() {
        let store = MemoryStore::new();
        let mut screen = SchedulerScreen::new(store);

        assert!(screen.add("", "x", "a", "b", false).await.is_err());
        assert!(screen.add("Standup", "x", " ", "b", false).await.is_err());
    }

    #[tokio::test]
    async fn remove_drops_entry() {
        let store = MemoryStore::new();
        let mut screen = SchedulerScreen::new(store);
        let entry = screen
            .add("Standup", "", "2024-05-11T09:00:00", "2024-05-11T09:15:00", true)
            .await
            .unwrap();

        screen.remove(&entry.id).await.unwrap();
        screen.reload().await.unwrap();
        assert!(screen.entries().is_empty());
    }
}
