//! In-process example store.

use async_trait::async_trait;
use pagination::PageRequest;
use railway::{Either, ErrorResult};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::Example;
use crate::domain::ports::ExampleRepository;

/// Insertion-ordered [`ExampleRepository`] held in memory.
///
/// Saving an existing id replaces the record in place, so listings keep the
/// order of first insertion. Deleted records stay stored with
/// [`Status::Deleted`](crate::domain::Status::Deleted).
#[derive(Debug, Default)]
pub struct InMemoryExampleRepository {
    records: RwLock<Vec<Example>>,
}

impl InMemoryExampleRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every record, deleted ones included.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl ExampleRepository for InMemoryExampleRepository {
    async fn get_by_id(&self, id: Uuid) -> Option<Example> {
        self.records
            .read()
            .await
            .iter()
            .find(|example| example.id() == id && !example.is_deleted())
            .cloned()
    }

    async fn get_by_name(&self, name: &str) -> Option<Example> {
        self.records
            .read()
            .await
            .iter()
            .find(|example| example.name() == name && !example.is_deleted())
            .cloned()
    }

    async fn save(&self, example: Example) -> Either<ErrorResult, Example> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|stored| stored.id() == example.id()) {
            Some(stored) => stored.clone_from(&example),
            None => records.push(example.clone()),
        }
        Either::Right(example)
    }

    async fn delete(&self, id: Uuid) -> Either<ErrorResult, ()> {
        let mut records = self.records.write().await;
        if let Some(stored) = records.iter_mut().find(|stored| stored.id() == id) {
            stored.mark_deleted();
        } else {
            debug!(%id, "delete of unknown example ignored");
        }
        Either::Right(())
    }

    async fn list_all(&self, page: PageRequest) -> (Vec<Example>, usize) {
        let records = self.records.read().await;
        let live = || records.iter().filter(|example| !example.is_deleted());
        let items = live()
            .skip(page.offset())
            .take(page.page_size())
            .cloned()
            .collect();
        (items, live().count())
    }
}
