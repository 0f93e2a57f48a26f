//! Request constraints enforced before any use case runs.
//!
//! Violations are collected with [`ValidationBuilder`] so one rejection
//! reports every broken constraint, joined with `"; "`.

use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use railway::{MaxLength, MinLength, Predicate, Specification, ValidationBuilder};

use crate::inbound::http::error::Rejection;

/// Longest accepted example name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Longest accepted description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Record the rule's message when `candidate` breaks it.
fn check<T: ?Sized>(
    builder: ValidationBuilder,
    rule: &impl Specification<T>,
    candidate: &T,
) -> ValidationBuilder {
    builder.add(!rule.is_satisfied_by(candidate), rule.error_message())
}

fn check_name(builder: ValidationBuilder, name: &str) -> ValidationBuilder {
    let rule = MinLength::new(1, "name").and(MaxLength::new(NAME_MAX_CHARS, "name"));
    match rule.validate(name).left() {
        Some(error) => error
            .messages()
            .iter()
            .fold(builder, |builder, message| builder.add(true, message.as_str())),
        None => builder,
    }
}

fn check_description(builder: ValidationBuilder, description: &str) -> ValidationBuilder {
    check(
        builder,
        &MaxLength::new(DESCRIPTION_MAX_CHARS, "description"),
        description,
    )
}

fn check_value(builder: ValidationBuilder, value: i64) -> ValidationBuilder {
    let rule = Predicate::new(|candidate: &i64| *candidate >= 0, "value must not be negative");
    check(builder, &rule, &value)
}

fn finish(builder: ValidationBuilder) -> Result<(), Rejection> {
    builder
        .build()
        .map_or(Ok(()), |error| Err(Rejection::unprocessable(error.to_string())))
}

/// Constraints on a create payload.
pub fn validate_create(name: &str, description: &str, value: i64) -> Result<(), Rejection> {
    let builder = check_name(ValidationBuilder::new(), name);
    let builder = check_description(builder, description);
    finish(check_value(builder, value))
}

/// Constraints on the fields an update payload supplies.
pub fn validate_update(
    name: Option<&str>,
    description: Option<&str>,
    value: Option<i64>,
) -> Result<(), Rejection> {
    let mut builder = ValidationBuilder::new();
    if let Some(name) = name {
        builder = check_name(builder, name);
    }
    if let Some(description) = description {
        builder = check_description(builder, description);
    }
    if let Some(value) = value {
        builder = check_value(builder, value);
    }
    finish(builder)
}

/// Page coordinates from optional query parameters, defaulting to page 1
/// of [`DEFAULT_PAGE_SIZE`].
pub fn page_request(page: Option<usize>, page_size: Option<usize>) -> Result<PageRequest, Rejection> {
    let request = PageRequest::new(page.unwrap_or(1), page_size.unwrap_or(DEFAULT_PAGE_SIZE))?;
    Ok(request)
}
