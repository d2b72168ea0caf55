use deskboard_core::screens::{ActivityScreen, EventForm, EventsScreen, TeamEvent};
use deskboard_core::{RecordId, RemoteStore};
use serde::Serialize;

use crate::commands::common::print_json;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct EventListItem {
    pub id: String,
    pub event_name: String,
    pub organization: String,
    pub venue: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl From<TeamEvent> for EventListItem {
    fn from(event: TeamEvent) -> Self {
        Self {
            id: event.id.to_string(),
            event_name: event.event_name,
            organization: event.organization,
            venue: event.venue,
            start_date: event.start_date,
            start_time: event.start_time,
            end_date: event.end_date,
            end_time: event.end_time,
        }
    }
}

pub struct AddEventArgs {
    pub name: String,
    pub organization: String,
    pub venue: String,
    pub details: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

pub async fn run_add<S: RemoteStore>(store: S, args: AddEventArgs) -> Result<(), CliError> {
    let mut screen = EventsScreen::new(store);
    screen.form = EventForm {
        event_name: args.name,
        organization: args.organization,
        venue: args.venue,
        event_details: args.details,
        start_date: args.start_date,
        start_time: args.start_time,
        end_date: args.end_date,
        end_time: args.end_time,
    };
    let event = screen.submit().await?;

    println!("{}", event.id);
    Ok(())
}

pub async fn run_list<S: RemoteStore>(store: S, as_json: bool) -> Result<(), CliError> {
    let mut screen = EventsScreen::new(store);
    screen.reload().await?;
    let events: Vec<EventListItem> = screen.events().into_iter().map(Into::into).collect();

    if as_json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("No events yet.");
        return Ok(());
    }
    for event in events {
        println!(
            "{}  {}  {} @ {}  ({} {} - {} {})",
            event.id,
            event.event_name,
            event.organization,
            event.venue,
            event.start_date,
            event.start_time,
            event.end_date,
            event.end_time
        );
    }
    Ok(())
}

pub async fn run_show<S: RemoteStore>(store: S, id: &str) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;
    let screen = ActivityScreen::open(store, id).await?;

    println!("{}", screen.event_id());
    for (name, value) in screen.fields() {
        println!("  {name}: {value}");
    }
    Ok(())
}

pub async fn run_edit<S: RemoteStore>(
    store: S,
    id: &str,
    field: &str,
    value: &str,
) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;

    let mut screen = ActivityScreen::open(store, id).await?;
    screen.begin_edit();
    screen.edit_field(field, value)?;
    screen.save().await?;

    println!("{}", screen.event_id());
    Ok(())
}
