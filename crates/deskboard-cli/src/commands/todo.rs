use deskboard_core::screens::{TodoItem, TodoScreen};
use deskboard_core::{RecordId, RemoteStore};
use serde::Serialize;

use crate::commands::common::{confirm, format_timestamp, joined_text, print_json};
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct TodoListItem {
    pub id: String,
    pub todo: String,
    pub is_checked: bool,
    pub created_at: i64,
}

impl From<TodoItem> for TodoListItem {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id.to_string(),
            todo: item.todo,
            is_checked: item.is_checked,
            created_at: item.created_at,
        }
    }
}

pub async fn run_add<S: RemoteStore>(store: S, text: &[String]) -> Result<(), CliError> {
    let text = joined_text(text).ok_or(CliError::EmptyTodoText)?;

    let mut screen = TodoScreen::new(store);
    let item = screen.add(&text).await?;

    println!("{}", item.id);
    Ok(())
}

pub async fn run_list<S: RemoteStore>(store: S, as_json: bool) -> Result<(), CliError> {
    let mut screen = TodoScreen::new(store);
    screen.reload().await?;
    let items: Vec<TodoListItem> = screen.items().into_iter().map(Into::into).collect();

    if as_json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("No todos yet.");
        return Ok(());
    }
    for item in items {
        let marker = if item.is_checked { "x" } else { " " };
        println!(
            "[{marker}] {}  {}  ({})",
            item.id,
            item.todo,
            format_timestamp(item.created_at)
        );
    }
    Ok(())
}

pub async fn run_done<S: RemoteStore>(store: S, id: &str) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;

    let mut screen = TodoScreen::new(store);
    screen.reload().await?;
    let checked = screen.toggle_done(&id).await?;

    println!("{} -> {}", id, if checked { "done" } else { "open" });
    Ok(())
}

pub async fn run_edit<S: RemoteStore>(store: S, id: &str, text: &[String]) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;
    let text = joined_text(text).ok_or(CliError::EmptyTodoText)?;

    let mut screen = TodoScreen::new(store);
    screen.reload().await?;
    screen.rename(&id, &text).await?;

    println!("{id}");
    Ok(())
}

pub async fn run_delete<S: RemoteStore>(store: S, id: &str, assume_yes: bool) -> Result<(), CliError> {
    let id: RecordId = id.parse()?;

    if !confirm("Delete this todo?", assume_yes)? {
        return Err(CliError::Aborted);
    }

    let mut screen = TodoScreen::new(store);
    screen.reload().await?;
    screen.remove(&id).await?;

    println!("Deleted {id}");
    Ok(())
}
