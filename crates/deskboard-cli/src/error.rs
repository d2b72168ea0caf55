use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] deskboard_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No todo text provided")]
    EmptyTodoText,
    #[error("Aborted")]
    Aborted,
    #[error(
        "Store is not configured. Set DESKBOARD_STORE_URL (and optionally DESKBOARD_STORE_TOKEN), or pass --store-url / --memory."
    )]
    StoreNotConfigured,
}
