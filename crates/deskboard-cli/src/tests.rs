use deskboard_core::store::{MemoryStore, RemoteStore};
use pretty_assertions::assert_eq;

use crate::commands::common::{confirm, format_timestamp, joined_text, resolve_store_config};
use crate::commands::event::{self, AddEventArgs};
use crate::commands::{scheduler, todo};
use crate::error::CliError;

#[test]
fn joined_text_trims_and_rejects_blank() {
    assert_eq!(
        joined_text(&["buy".to_string(), "milk".to_string()]),
        Some("buy milk".to_string())
    );
    assert_eq!(joined_text(&["  ".to_string()]), None);
    assert_eq!(joined_text(&[]), None);
}

#[test]
fn confirm_skips_prompt_with_assume_yes() {
    assert!(confirm("Delete?", true).unwrap());
}

#[test]
fn format_timestamp_renders_utc() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
}

#[test]
fn store_config_overrides_win_over_env() {
    std::env::set_var("DESKBOARD_STORE_URL", "https://env.example.com");
    std::env::set_var("DESKBOARD_STORE_TOKEN", "env-token");

    let config = resolve_store_config(Some("https://flag.example.com".to_string()), None);
    assert_eq!(config.endpoint.as_deref(), Some("https://flag.example.com"));
    assert_eq!(config.token.as_deref(), Some("env-token"));

    std::env::remove_var("DESKBOARD_STORE_URL");
    std::env::remove_var("DESKBOARD_STORE_TOKEN");
}

#[tokio::test]
async fn todo_add_rejects_empty_text() {
    let store = MemoryStore::new();
    let result = todo::run_add(store, &[]).await;
    assert!(matches!(result, Err(CliError::EmptyTodoText)));
}

#[tokio::test]
async fn todo_add_then_done_then_delete() {
    let store = MemoryStore::new();

    todo::run_add(store.clone(), &["buy".to_string(), "milk".to_string()])
        .await
        .unwrap();
    assert_eq!(store.collection_len("todo").await, 1);

    let records = store.get_all("todo", None).await.unwrap();
    let id = records[0].id.to_string();
    assert_eq!(records[0].text("todo"), "buy milk");

    todo::run_done(store.clone(), &id).await.unwrap();
    let records = store.get_all("todo", None).await.unwrap();
    assert!(records[0].flag("is_checked"));

    todo::run_delete(store.clone(), &id, true).await.unwrap();
    assert_eq!(store.collection_len("todo").await, 0);
}

#[tokio::test]
async fn todo_list_handles_empty_collection() {
    let store = MemoryStore::new();
    todo::run_list(store.clone(), false).await.unwrap();
    todo::run_list(store, true).await.unwrap();
}

#[tokio::test]
async fn event_add_and_edit_round_trip() {
    let store = MemoryStore::new();
    event::run_add(
        store.clone(),
        AddEventArgs {
            name: "Hack Night".to_string(),
            organization: "CS Society".to_string(),
            venue: "CS Lounge".to_string(),
            details: "Monthly hack night".to_string(),
            start_date: "2024-05-10".to_string(),
            start_time: "18:00".to_string(),
            end_date: "2024-05-10".to_string(),
            end_time: "22:00".to_string(),
        },
    )
    .await
    .unwrap();

    let records = store.get_all("events", None).await.unwrap();
    let id = records[0].id.to_string();

    event::run_edit(store.clone(), &id, "venue", "FYP Lab")
        .await
        .unwrap();
    let records = store.get_all("events", None).await.unwrap();
    assert_eq!(records[0].text("venue"), "FYP Lab");

    event::run_show(store, &id).await.unwrap();
}

#[tokio::test]
async fn event_show_missing_is_core_not_found() {
    let store = MemoryStore::new();
    let result = event::run_show(store, "missing").await;
    assert!(matches!(
        result,
        Err(CliError::Core(deskboard_core::Error::NotFound(_)))
    ));
}

#[tokio::test]
async fn scheduler_add_list_delete() {
    let store = MemoryStore::new();
    scheduler::run_add(
        store.clone(),
        "Standup",
        "",
        "2024-05-11T09:00:00",
        "2024-05-11T09:15:00",
        false,
    )
    .await
    .unwrap();

    scheduler::run_list(store.clone(), false).await.unwrap();

    let records = store.get_all("scheduler", None).await.unwrap();
    let id = records[0].id.to_string();
    scheduler::run_delete(store.clone(), &id, true).await.unwrap();
    assert_eq!(store.collection_len("scheduler").await, 0);
}
