//! Use-case handler translating commands and queries into service calls.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PaginatedResult;
use railway::{Either, ErrorResult};
use uuid::Uuid;

use crate::domain::ExampleService;
use crate::domain::ports::{
    CreateExampleCommand, ExampleRepository, ExampleUseCases, ExampleView, GetByIdQuery,
    ListAllQuery, UpdateExampleCommand,
};

/// Driving-port implementation over an [`ExampleService`].
#[derive(Clone)]
pub struct ExampleHandler {
    service: ExampleService<dyn ExampleRepository>,
}

impl ExampleHandler {
    /// Wrap an existing service.
    pub const fn new(service: ExampleService<dyn ExampleRepository>) -> Self {
        Self { service }
    }

    /// Build the service over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: ExampleRepository + 'static,
    {
        let repo: Arc<dyn ExampleRepository> = repo;
        Self::new(ExampleService::new(repo))
    }
}

#[async_trait]
impl ExampleUseCases for ExampleHandler {
    async fn create(&self, command: CreateExampleCommand) -> Either<ErrorResult, ExampleView> {
        self.service
            .create(&command.name, &command.description, command.value)
            .await
            .map_right(ExampleView::from)
    }

    async fn get_by_id(&self, query: GetByIdQuery) -> Either<ErrorResult, ExampleView> {
        self.service
            .get_by_id(query.id)
            .await
            .map_right(ExampleView::from)
    }

    async fn update(&self, command: UpdateExampleCommand) -> Either<ErrorResult, ExampleView> {
        let UpdateExampleCommand {
            id,
            name,
            description,
            value,
        } = command;
        self.service
            .update(id, name, description, value)
            .await
            .map_right(ExampleView::from)
    }

    async fn delete(&self, id: Uuid) -> Either<ErrorResult, ()> {
        self.service.delete(id).await
    }

    async fn list_all(&self, query: ListAllQuery) -> PaginatedResult<ExampleView> {
        let (items, total) = self.service.list_all(query.page).await;
        PaginatedResult::for_request(items, total, query.page).map(ExampleView::from)
    }

    async fn activate(&self, id: Uuid) -> Either<ErrorResult, ExampleView> {
        self.service.activate(id).await.map_right(ExampleView::from)
    }

    async fn deactivate(&self, id: Uuid) -> Either<ErrorResult, ExampleView> {
        self.service
            .deactivate(id)
            .await
            .map_right(ExampleView::from)
    }
}
