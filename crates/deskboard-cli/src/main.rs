//! deskboard CLI - drive the dashboard screens from the terminal.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;
use deskboard_core::store::{HttpStore, MemoryStore, RemoteStore};

use crate::cli::{Cli, Commands, EventCommands, SchedulerCommands, TodoCommands};
use crate::commands::common::resolve_store_config;
use crate::commands::event::AddEventArgs;
use crate::commands::{event, scheduler, todo};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deskboard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if cli.memory {
        tracing::info!("Running against an ephemeral in-memory store");
        return dispatch(MemoryStore::new(), cli.command).await;
    }

    let config = resolve_store_config(cli.store_url, cli.token);
    if !config.is_configured() {
        return Err(CliError::StoreNotConfigured);
    }
    let store = HttpStore::from_config(&config)?;
    dispatch(store, cli.command).await
}

async fn dispatch<S: RemoteStore>(store: S, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Todo(command) => match command {
            TodoCommands::Add { text } => todo::run_add(store, &text).await,
            TodoCommands::List { json } => todo::run_list(store, json).await,
            TodoCommands::Done { id } => todo::run_done(store, &id).await,
            TodoCommands::Edit { id, text } => todo::run_edit(store, &id, &text).await,
            TodoCommands::Delete { id, yes } => todo::run_delete(store, &id, yes).await,
        },
        Commands::Event(command) => match command {
            EventCommands::Add {
                name,
                organization,
                venue,
                details,
                start_date,
                start_time,
                end_date,
                end_time,
            } => {
                event::run_add(
                    store,
                    AddEventArgs {
                        name,
                        organization,
                        venue,
                        details,
                        start_date,
                        start_time,
                        end_date,
                        end_time,
                    },
                )
                .await
            }
            EventCommands::List { json } => event::run_list(store, json).await,
            EventCommands::Show { id } => event::run_show(store, &id).await,
            EventCommands::Edit { id, field, value } => {
                event::run_edit(store, &id, &field, &value).await
            }
        },
        Commands::Scheduler(command) => match command {
            SchedulerCommands::Add {
                subject,
                location,
                start,
                end,
                all_day,
            } => scheduler::run_add(store, &subject, &location, &start, &end, all_day).await,
            SchedulerCommands::List { json } => scheduler::run_list(store, json).await,
            SchedulerCommands::Delete { id, yes } => scheduler::run_delete(store, &id, yes).await,
        },
    }
}
