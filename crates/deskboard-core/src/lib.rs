//! deskboard-core - Core library for deskboard
//!
//! This crate contains the record/collection model, the remote document
//! store contract and its implementations, the view-state synchronizer, and
//! the typed screen layer shared by all deskboard frontends.

pub mod config;
pub mod error;
pub mod record;
pub mod screens;
pub mod state;
pub mod store;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use record::{Collection, FieldValue, Fields, Record, RecordId};
pub use store::{HttpStore, MemoryStore, RemoteStore};
pub use sync::ViewSync;
