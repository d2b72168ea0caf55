//! Remote document store contract and implementations.

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::record::{Fields, Record, RecordId};

/// Contract consumed from the remote document store.
///
/// Collections are named sequences of documents; identifiers are assigned by
/// the store on insert, together with a monotonic creation marker. Writes and
/// reads fail with `Persistence` and `Fetch` errors respectively; the single
/// transactional operation is [`RemoteStore::toggle_flag`].
pub trait RemoteStore {
    /// Insert a document, returning the stored record with its generated
    /// identifier and creation marker.
    fn insert(
        &self,
        collection: &str,
        fields: Fields,
    ) -> impl std::future::Future<Output = Result<Record>> + Send;

    /// Fetch a single document's fields, `None` when absent.
    fn get(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<Option<Fields>>> + Send;

    /// Fetch all documents, in creation order or sorted by `order_by`.
    ///
    /// Records missing the `order_by` field sort first.
    fn get_all(
        &self,
        collection: &str,
        order_by: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<Record>>> + Send;

    /// Merge a partial field mapping into a document, preserving unspecified
    /// fields. Unknown identifiers are a `Persistence` error.
    fn merge(
        &self,
        collection: &str,
        id: &RecordId,
        partial: Fields,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Delete a document. Unknown identifiers are a `Persistence` error.
    fn delete(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Atomically negate a boolean field inside a transactional boundary and
    /// return the new value.
    ///
    /// Reads the current value, negates it, and writes it back with no lost
    /// updates under concurrent toggles. A missing or non-boolean field
    /// toggles from an implicit `false`. Fails with `PreconditionFailed`
    /// when the document no longer exists at transaction time.
    fn toggle_flag(
        &self,
        collection: &str,
        id: &RecordId,
        field: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}
