//! Example domain service.
//!
//! Business rules for creating, reading, updating and retiring examples.
//! Every operation answers with an [`Either`]: the left side carries an
//! [`ErrorResult`] and short-circuits the remaining steps.

use std::sync::Arc;

use pagination::PageRequest;
use railway::{Either, ErrorResult, OptionExt, Specification, tap, then_async};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::ExampleRepository;
use crate::domain::specifications::{ExampleNotDeleted, NameNotEmpty, example_can_be_modified};
use crate::domain::Example;

/// Reported when a live example already uses the requested name.
pub const DUPLICATE_NAME_MESSAGE: &str = "Nome ja existe";

/// Reported when an id is unknown or soft deleted.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Pass `example` through when `spec` accepts it.
fn require(spec: &impl Specification<Example>, example: Example) -> Either<ErrorResult, Example> {
    let verdict = spec.validate(&example).map_right(|_| ());
    verdict.map_right(|()| example)
}

fn apply_changes(
    mut example: Example,
    name: Option<String>,
    description: Option<String>,
    value: Option<i64>,
) -> Either<ErrorResult, Example> {
    if let Some(name) = name {
        if let Either::Left(error) = NameNotEmpty.validate(&name) {
            return Either::Left(error);
        }
        example.rename(name);
    }
    if let Some(description) = description {
        example.set_description(description);
    }
    if let Some(value) = value {
        example.set_value(value);
    }
    example.mark_updated(None);
    Either::Right(example)
}

/// Service orchestrating example use cases over a repository port.
pub struct ExampleService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for ExampleService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> ExampleService<R>
where
    R: ExampleRepository + ?Sized,
{
    /// Create a service backed by `repo`.
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the name, reject duplicates among live examples, then
    /// persist a new pending example.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        value: i64,
    ) -> Either<ErrorResult, Example> {
        let validated = NameNotEmpty.validate(name).map_right(str::to_owned);
        let unique = then_async(validated, |name| async move {
            match self.repo.get_by_name(&name).await {
                Some(existing) => {
                    debug!(id = %existing.id(), name = %name, "duplicate example name");
                    Either::Left(ErrorResult::validation(DUPLICATE_NAME_MESSAGE))
                }
                None => Either::Right(name),
            }
        })
        .await;
        let built = unique.map_right(|name| Example::create(name, description, value));
        let saved = then_async(built, |example| self.repo.save(example)).await;
        tap(saved, |example| {
            info!(id = %example.id(), name = %example.name(), "example created");
        })
    }

    /// Fetch a live example.
    pub async fn get_by_id(&self, id: Uuid) -> Either<ErrorResult, Example> {
        self.repo
            .get_by_id(id)
            .await
            .to_either_with(|| ErrorResult::not_found(NOT_FOUND_MESSAGE))
    }

    /// Apply the supplied fields; a supplied name must be non-blank.
    ///
    /// Renaming does not re-check uniqueness.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
        value: Option<i64>,
    ) -> Either<ErrorResult, Example> {
        let found = self.get_by_id(id).await;
        let changed = found.bind(|example| apply_changes(example, name, description, value));
        let saved = then_async(changed, |example| self.repo.save(example)).await;
        tap(saved, |example| {
            info!(id = %example.id(), "example updated");
        })
    }

    /// Soft delete; unknown ids succeed without effect.
    pub async fn delete(&self, id: Uuid) -> Either<ErrorResult, ()> {
        let deleted = self.repo.delete(id).await;
        tap(deleted, |()| info!(%id, "example deleted"))
    }

    /// One page of live examples and the live total.
    pub async fn list_all(&self, page: PageRequest) -> (Vec<Example>, usize) {
        let (items, total) = self.repo.list_all(page).await;
        debug!(
            page = page.page(),
            page_size = page.page_size(),
            returned = items.len(),
            total,
            "examples listed"
        );
        (items, total)
    }

    /// Move a live example to `active`.
    pub async fn activate(&self, id: Uuid) -> Either<ErrorResult, Example> {
        let found = self.get_by_id(id).await;
        let activated = found
            .bind(|example| require(&ExampleNotDeleted, example))
            .map_right(|mut example| {
                example.activate();
                example
            });
        let saved = then_async(activated, |example| self.repo.save(example)).await;
        tap(saved, |example| info!(id = %example.id(), "example activated"))
    }

    /// Move an active example to `inactive`.
    pub async fn deactivate(&self, id: Uuid) -> Either<ErrorResult, Example> {
        let found = self.get_by_id(id).await;
        let deactivated = found
            .bind(|example| require(&example_can_be_modified(), example))
            .map_right(|mut example| {
                example.deactivate();
                example
            });
        let saved = then_async(deactivated, |example| self.repo.save(example)).await;
        tap(saved, |example| {
            info!(id = %example.id(), "example deactivated");
        })
    }
}

#[cfg(test)]
#[path = "example_service_tests.rs"]
mod tests;
