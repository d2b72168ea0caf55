use deskboard_core::screens::{SchedulerEntry, SchedulerScreen};
use deskboard_core::{RecordId, RemoteStore};
use serde::Serialize;

use crate::commands::common::{confirm, print_json};
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct SchedulerListItem {
    pub id: String,
    pub subject: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
}

impl From<SchedulerEntry> for SchedulerListItem {
    fn from(entry: SchedulerEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            subject: entry.subject,
            location: entry.location,
            start: entry.start,
            end: entry.end,
            all_day: entry.all_day,
        }
    }
}

pub async fn run_add<S: RemoteStore>(
    store: S,
    subject: &str,
    location: &str,
    start: &str,
    end: &str,
    all_day: bool,
) -> Result<(), CliError> {
    let mut screen = SchedulerScreen::new(store);
    let entry = screen.add(subject, location, start, end, all_day).await?;

    println!("{}", entry.id);
    Ok(())
}

pub async fn run_list<S: RemoteStore>(store: S, as_json: bool) -> Result<(), CliError> {
    let mut screen = SchedulerScreen::new(store);
    screen.reload().await?;
    let entries: Vec<SchedulerListItem> = screen.entries().into_iter().map(Into::into).collect();

    if as_json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No calendar entries yet.");
        return Ok(());
    }
    for entry in entries {
        let all_day = if entry.all_day { " (all day)" } else { "" };
        println!(
            "{}  {}  {} - {}{}  {}",
            entry.id, entry.subject, entry.start, entry.end, all_day, entry.location
        );
    }
    Ok(())
}

pub async fn run_delete<S: RemoteStore>(store: S, id: &str, assume_yes: bool) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;

    if !confirm("Delete this calendar entry?", assume_yes)? {
        return Err(CliError::Aborted);
    }

    let mut screen = SchedulerScreen::new(store);
    screen.reload().await?;
    screen.remove(&id).await?;

    println!("Deleted {id}");
    Ok(())
}
