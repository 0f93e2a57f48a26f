//! Port for example persistence.

use async_trait::async_trait;
use pagination::PageRequest;
use railway::{Either, ErrorResult};
use uuid::Uuid;

use crate::domain::Example;

/// Storage capability for [`Example`] aggregates.
///
/// Soft-deleted records are invisible to every read: lookups return `None`
/// and listings skip them, including in the reported total.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// Find a live example by id.
    async fn get_by_id(&self, id: Uuid) -> Option<Example>;

    /// Find a live example by exact name.
    async fn get_by_name(&self, name: &str) -> Option<Example>;

    /// Insert or replace an example, returning the stored value.
    async fn save(&self, example: Example) -> Either<ErrorResult, Example>;

    /// Soft delete by id. Unknown ids are not an error.
    async fn delete(&self, id: Uuid) -> Either<ErrorResult, ()>;

    /// One page of live examples in insertion order, plus the live total.
    async fn list_all(&self, page: PageRequest) -> (Vec<Example>, usize);
}
