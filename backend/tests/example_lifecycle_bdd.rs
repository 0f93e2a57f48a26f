//! Behavioural tests for the example use cases over the in-memory store.

use std::cell::RefCell;
use std::sync::Arc;

use backend::domain::ExampleHandler;
use backend::domain::ports::{
    CreateExampleCommand, ExampleUseCases, ExampleView, GetByIdQuery, ListAllQuery,
};
use backend::outbound::memory::InMemoryExampleRepository;
use pagination::PaginatedResult;
use railway::{Either, ErrorResult};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;
use uuid::Uuid;

struct LifecycleWorld {
    runtime: Runtime,
    handler: RefCell<Option<ExampleHandler>>,
    current: RefCell<Option<Uuid>>,
    outcome: RefCell<Option<Either<ErrorResult, ExampleView>>>,
    page: RefCell<Option<PaginatedResult<ExampleView>>>,
}

impl LifecycleWorld {
    fn handler(&self) -> ExampleHandler {
        self.handler
            .borrow()
            .clone()
            .expect("catalogue must be prepared first")
    }

    fn current_id(&self) -> Uuid {
        self.current.borrow().expect("an example must exist")
    }

    fn record(&self, outcome: Either<ErrorResult, ExampleView>) {
        if let Either::Right(view) = &outcome {
            *self.current.borrow_mut() = Some(view.id);
        }
        *self.outcome.borrow_mut() = Some(outcome);
    }
}

#[fixture]
fn world() -> LifecycleWorld {
    LifecycleWorld {
        runtime: Runtime::new().expect("tokio runtime"),
        handler: RefCell::new(None),
        current: RefCell::new(None),
        outcome: RefCell::new(None),
        page: RefCell::new(None),
    }
}

fn unquote(value: &str) -> String {
    value.trim_matches('"').to_owned()
}

#[given("an empty catalogue")]
fn an_empty_catalogue(world: &LifecycleWorld) {
    let repo = Arc::new(InMemoryExampleRepository::new());
    *world.handler.borrow_mut() = Some(ExampleHandler::from_repository(repo));
}

#[given("an existing example named {name}")]
fn an_existing_example_named(world: &LifecycleWorld, name: String) {
    let handler = world.handler();
    let created = world
        .runtime
        .block_on(handler.create(CreateExampleCommand::named(unquote(&name))));
    let view = created.right().expect("seed example created");
    *world.current.borrow_mut() = Some(view.id);
}

#[given("{count} stored examples")]
fn stored_examples(world: &LifecycleWorld, count: usize) {
    let handler = world.handler();
    world.runtime.block_on(async {
        for n in 0..count {
            let created = handler
                .create(CreateExampleCommand::named(format!("item-{n}")))
                .await;
            assert!(created.is_right(), "item-{n} should be created");
        }
    });
}

#[when("an example named {name} is created")]
fn an_example_named_is_created(world: &LifecycleWorld, name: String) {
    let handler = world.handler();
    let outcome = world
        .runtime
        .block_on(handler.create(CreateExampleCommand::named(unquote(&name))));
    *world.outcome.borrow_mut() = Some(outcome);
}

#[when("the example is deleted")]
fn the_example_is_deleted(world: &LifecycleWorld) {
    let handler = world.handler();
    let deleted = world.runtime.block_on(handler.delete(world.current_id()));
    assert!(deleted.is_right());
}

#[when("the example is fetched")]
fn the_example_is_fetched(world: &LifecycleWorld) {
    let handler = world.handler();
    let query = GetByIdQuery {
        id: world.current_id(),
    };
    let outcome = world.runtime.block_on(handler.get_by_id(query));
    *world.outcome.borrow_mut() = Some(outcome);
}

#[when("the example is activated")]
fn the_example_is_activated(world: &LifecycleWorld) {
    let handler = world.handler();
    let outcome = world.runtime.block_on(handler.activate(world.current_id()));
    world.record(outcome);
}

#[when("the example is deactivated")]
fn the_example_is_deactivated(world: &LifecycleWorld) {
    let handler = world.handler();
    let outcome = world
        .runtime
        .block_on(handler.deactivate(world.current_id()));
    world.record(outcome);
}

#[when("page {page} of size {size} is listed")]
fn page_of_size_is_listed(world: &LifecycleWorld, page: usize, size: usize) {
    let handler = world.handler();
    let query = ListAllQuery::new(page, size).expect("valid page request");
    *world.page.borrow_mut() = Some(world.runtime.block_on(handler.list_all(query)));
}

#[then("the example is returned with status {status}")]
fn the_example_is_returned_with_status(world: &LifecycleWorld, status: String) {
    let outcome = world.outcome.borrow();
    let view = outcome
        .as_ref()
        .and_then(|either| either.as_ref().right())
        .expect("success expected");
    assert_eq!(view.status, unquote(&status));
}

#[then("the request fails with message {message}")]
fn the_request_fails_with_message(world: &LifecycleWorld, message: String) {
    let outcome = world.outcome.borrow();
    let error = outcome
        .as_ref()
        .and_then(|either| either.as_ref().left())
        .expect("failure expected");
    assert!(error.is_validation());
    assert_eq!(error.first_message(), unquote(&message));
}

#[then("the lookup reports not found")]
fn the_lookup_reports_not_found(world: &LifecycleWorld) {
    let outcome = world.outcome.borrow();
    let error = outcome
        .as_ref()
        .and_then(|either| either.as_ref().left())
        .expect("failure expected");
    assert!(error.is_not_found());
}

#[then("the page holds {items} items out of {total}")]
fn the_page_holds_items_out_of(world: &LifecycleWorld, items: usize, total: usize) {
    let page = world.page.borrow();
    let page = page.as_ref().expect("page listed");
    assert_eq!(page.items.len(), items);
    assert_eq!(page.total, total);
    assert_eq!(page.page, 2);
    assert!(page.has_next() && page.has_previous());
}

#[scenario(
    path = "tests/features/example_lifecycle.feature",
    name = "A new example starts pending"
)]
fn a_new_example_starts_pending(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/example_lifecycle.feature",
    name = "Duplicate names are refused"
)]
fn duplicate_names_are_refused(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/example_lifecycle.feature",
    name = "Deleted examples are no longer found"
)]
fn deleted_examples_are_no_longer_found(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/example_lifecycle.feature",
    name = "Activated examples can be deactivated"
)]
fn activated_examples_can_be_deactivated(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/example_lifecycle.feature",
    name = "Listing returns the requested page"
)]
fn listing_returns_the_requested_page(world: LifecycleWorld) {
    drop(world);
}
