//! Team events screen: the event grid and the add-event form.

use crate::error::{Error, Result};
use crate::record::{FieldValue, Fields, Record, RecordId};
use crate::store::RemoteStore;
use crate::sync::ViewSync;

const COLLECTION: &str = "events";

const FIELD_NAME: &str = "event_name";
const FIELD_ORGANIZATION: &str = "organization";
const FIELD_VENUE: &str = "venue";
const FIELD_DETAILS: &str = "event_details";
const FIELD_START_DATE: &str = "start_date";
const FIELD_START_TIME: &str = "start_time";
const FIELD_END_DATE: &str = "end_date";
const FIELD_END_TIME: &str = "end_time";
const FIELD_IMAGE_URL: &str = "image_url";

/// One team event as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEvent {
    pub id: RecordId,
    pub event_name: String,
    pub organization: String,
    pub venue: String,
    pub event_details: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub image_url: Option<String>,
}

impl TeamEvent {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            event_name: record.text(FIELD_NAME).to_string(),
            organization: record.text(FIELD_ORGANIZATION).to_string(),
            venue: record.text(FIELD_VENUE).to_string(),
            event_details: record.text(FIELD_DETAILS).to_string(),
            start_date: record.text(FIELD_START_DATE).to_string(),
            start_time: record.text(FIELD_START_TIME).to_string(),
            end_date: record.text(FIELD_END_DATE).to_string(),
            end_time: record.text(FIELD_END_TIME).to_string(),
            image_url: record
                .fields
                .get(FIELD_IMAGE_URL)
                .and_then(FieldValue::as_text)
                .map(ToString::to_string),
        }
    }
}

/// The add-event form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_name: String,
    pub organization: String,
    pub venue: String,
    pub event_details: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl EventForm {
    fn require(value: &str, label: &str) -> Result<String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::InvalidInput(format!("{label} is required")));
        }
        Ok(value.to_string())
    }

    /// Validate and convert to a field mapping for insertion.
    pub fn to_fields(&self) -> Result<Fields> {
        Ok(Fields::from([
            (
                FIELD_NAME.to_string(),
                Self::require(&self.event_name, "event name")?.into(),
            ),
            (
                FIELD_ORGANIZATION.to_string(),
                Self::require(&self.organization, "organization")?.into(),
            ),
            (
                FIELD_VENUE.to_string(),
                Self::require(&self.venue, "venue")?.into(),
            ),
            (
                FIELD_DETAILS.to_string(),
                Self::require(&self.event_details, "event details")?.into(),
            ),
            (
                FIELD_START_DATE.to_string(),
                Self::require(&self.start_date, "start date")?.into(),
            ),
            (
                FIELD_START_TIME.to_string(),
                Self::require(&self.start_time, "start time")?.into(),
            ),
            (
                FIELD_END_DATE.to_string(),
                Self::require(&self.end_date, "end date")?.into(),
            ),
            (
                FIELD_END_TIME.to_string(),
                Self::require(&self.end_time, "end time")?.into(),
            ),
        ]))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Events screen: synced event grid plus the add-event modal form.
#[derive(Debug)]
pub struct EventsScreen<S> {
    view: ViewSync<S>,
    pub form: EventForm,
    pub modal_open: bool,
}

impl<S: RemoteStore> EventsScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            view: ViewSync::new(store, COLLECTION),
            form: EventForm::default(),
            modal_open: false,
        }
    }

    pub async fn reload(&mut self) -> Result<()> {
        self.view.load().await?;
        Ok(())
    }

    #[must_use]
    pub fn events(&self) -> Vec<TeamEvent> {
        self.view.records().iter().map(TeamEvent::from_record).collect()
    }

    /// Submit the add-event form. On success the form resets and the modal
    /// closes; on failure both keep their state for correction.
    pub async fn submit(&mut self) -> Result<TeamEvent> {
        let fields = self.form.to_fields()?;
        let record = self.view.create(fields).await?;
        self.form.clear();
        self.modal_open = false;
        Ok(TeamEvent::from_record(&record))
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn filled_form() -> EventForm {
        EventForm {
            event_name: "Hack Night".to_string(),
            organization: "CS Society".to_string(),
            venue: "CS Lounge".to_string(),
            event_details: "Monthly hack night".to_string(),
            start_date: "2024-05-10".to_string(),
            start_time: "18:00".to_string(),
            end_date: "2024-05-10".to_string(),
            end_time: "22:00".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_persists_and_resets_form() {
        let store = MemoryStore::new();
        let mut screen = EventsScreen::new(store.clone());
        screen.open_modal();
        screen.form = filled_form();

        let event = screen.submit().await.unwrap();
        assert_eq!(event.event_name, "Hack Night");
        assert_eq!(screen.form, EventForm::default());
        assert!(!screen.modal_open);

        let mut other = EventsScreen::new(store);
        other.reload().await.unwrap();
        assert_eq!(other.events().len(), 1);
        assert_eq!(other.events()[0].venue, "CS Lounge");
        assert_eq!(other.events()[0].image_url, None);
    }

    #[tokio::test]
    async fn submit_rejects_missing_required_field() {
        let store = MemoryStore::new();
        let mut screen = EventsScreen::new(store);
        screen.form = filled_form();
        screen.form.venue = String::new();

        let result = screen.submit().await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        // Form keeps its state for correction.
        assert_eq!(screen.form.event_name, "Hack Night");
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_modal() {
        let store = MemoryStore::new();
        let mut screen = EventsScreen::new(store.clone());
        screen.open_modal();
        screen.form = filled_form();

        store.inject_write_failures(1).await;
        assert!(screen.submit().await.is_err());
        assert_eq!(screen.form, filled_form());
        assert!(screen.modal_open);
        assert!(screen.events().is_empty());
    }
}
