//! Driving port for example use cases.
//!
//! Commands and queries are plain data; every fallible operation answers
//! with an [`Either`] whose left side is an [`ErrorResult`].

use async_trait::async_trait;
use pagination::{PageRequest, PageRequestError, PaginatedResult};
use railway::{Either, ErrorResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Example;

/// Create a new example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExampleCommand {
    pub name: String,
    pub description: String,
    pub value: i64,
}

impl CreateExampleCommand {
    /// Command with an empty description and a zero value.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value: 0,
        }
    }
}

/// Partially update an example; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateExampleCommand {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<i64>,
}

/// Fetch one example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetByIdQuery {
    pub id: Uuid,
}

/// Fetch one page of examples. Defaults to page 1 of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListAllQuery {
    pub page: PageRequest,
}

impl ListAllQuery {
    /// Validate the page coordinates.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        match PageRequest::new(page, page_size) {
            Ok(page) => Ok(Self { page }),
            Err(err) => Err(err),
        }
    }
}

/// Read model returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub value: i64,
    /// Lowercase status name.
    pub status: String,
}

impl From<Example> for ExampleView {
    fn from(value: Example) -> Self {
        Self {
            id: value.id(),
            status: value.status().to_string(),
            value: value.value(),
            description: value.description().to_owned(),
            name: value.name().to_owned(),
        }
    }
}

/// Use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExampleUseCases: Send + Sync {
    /// Create an example; names must be non-blank and unique among live
    /// examples.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ExampleHandler;
    /// use backend::domain::ports::{CreateExampleCommand, ExampleUseCases};
    /// use backend::outbound::memory::InMemoryExampleRepository;
    ///
    /// # async fn demo() {
    /// let handler = ExampleHandler::from_repository(Arc::new(InMemoryExampleRepository::new()));
    /// let view = handler
    ///     .create(CreateExampleCommand::named("Test"))
    ///     .await
    ///     .right()
    ///     .expect("created");
    /// assert_eq!(view.status, "pending");
    /// # }
    /// ```
    async fn create(&self, command: CreateExampleCommand) -> Either<ErrorResult, ExampleView>;

    /// Fetch a live example; missing and deleted ids are `not_found`.
    async fn get_by_id(&self, query: GetByIdQuery) -> Either<ErrorResult, ExampleView>;

    /// Apply a partial update.
    async fn update(&self, command: UpdateExampleCommand) -> Either<ErrorResult, ExampleView>;

    /// Soft delete.
    async fn delete(&self, id: Uuid) -> Either<ErrorResult, ()>;

    /// One page of live examples.
    async fn list_all(&self, query: ListAllQuery) -> PaginatedResult<ExampleView>;

    /// Move a live example to `active`.
    async fn activate(&self, id: Uuid) -> Either<ErrorResult, ExampleView>;

    /// Move an active example to `inactive`.
    async fn deactivate(&self, id: Uuid) -> Either<ErrorResult, ExampleView>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn view_copies_entity_fields() {
        let mut example = Example::create("Test", "desc", 3);
        example.activate();
        let view = ExampleView::from(example.clone());
        assert_eq!(view.id, example.id());
        assert_eq!(view.name, "Test");
        assert_eq!(view.description, "desc");
        assert_eq!(view.value, 3);
        assert_eq!(view.status, "active");
    }

    #[rstest]
    fn list_query_defaults_to_first_page_of_ten() {
        let query = ListAllQuery::default();
        assert_eq!((query.page.page(), query.page.page_size()), (1, 10));
    }

    #[rstest]
    fn list_query_rejects_zero_page() {
        assert_eq!(ListAllQuery::new(0, 10), Err(PageRequestError::ZeroPage));
    }
}
