//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for collection access.
//! Implementations can use HTTP, in-memory, etc.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CatalogRecord;

/// Failure modes of a remote collection.
///
/// The store never looks past these three shapes: a request that produced
/// no HTTP response, a response with a status it has to classify, or a
/// body it could not decode. Which statuses count as conflicts or as
/// implied successes is the store's business, not the repository's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server (or no response came back).
    #[error("no response from server")]
    Connection,
    /// Non-success HTTP status. A 204 on a mutation lands here too: an
    /// empty reply where a body was expected surfaces as its status code.
    #[error("server answered with status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("unreadable response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote collection holding one catalog
///
/// Generic over any catalog record type. Mutations return no payload; the
/// authoritative state is always re-fetched with [`list`](Self::list).
#[async_trait]
pub trait CollectionClient<T: CatalogRecord>: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// Create a new record from a draft
    async fn create(&self, draft: &T::Draft) -> ApiResult<()>;

    /// Replace the record's editable fields
    async fn update(&self, id: u32, draft: &T::Draft) -> ApiResult<()>;

    /// Delete a record by id
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
