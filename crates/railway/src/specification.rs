//! Composable business rules.
//!
//! A [`Specification`] is a named predicate with a failure message. Rules
//! compose with [`Specification::and`], [`Specification::or`] and
//! [`Specification::not`], and boxed trait objects compose the same way, so
//! rule sets can be assembled at runtime.
//!
//! `AndSpec` reports only its left child through
//! [`Specification::error_message`], but its [`Specification::validate`]
//! evaluates both children and collects every failing message.

use std::fmt::Display;

use crate::{Either, ErrorResult};

/// A business rule over candidates of type `T`.
///
/// Implementations must be pure: the same candidate always yields the same
/// answer and nothing is mutated.
///
/// # Examples
/// ```
/// use railway::{MaxLength, NotEmpty, Specification};
///
/// let name = NotEmpty::new("Name").and(MaxLength::new(5, "Name"));
/// assert!(name.is_satisfied_by("Ada"));
/// assert!(!name.is_satisfied_by("Grace Hopper"));
///
/// let error = name.validate("   ").left().expect("blank is rejected");
/// assert_eq!(error.first_message(), "Name must not be empty");
/// ```
pub trait Specification<T: ?Sized> {
    /// `true` when `candidate` satisfies the rule.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Message reported when the rule is not satisfied.
    fn error_message(&self) -> String;

    /// `Right(candidate)` when satisfied, otherwise a validation failure
    /// carrying [`Specification::error_message`].
    fn validate<'a>(&self, candidate: &'a T) -> Either<ErrorResult, &'a T> {
        if self.is_satisfied_by(candidate) {
            Either::Right(candidate)
        } else {
            Either::Left(ErrorResult::validation(self.error_message()))
        }
    }

    /// Both rules must hold.
    fn and<S>(self, other: S) -> AndSpec<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpec {
            left: self,
            right: other,
        }
    }

    /// At least one rule must hold.
    fn or<S>(self, other: S) -> OrSpec<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpec {
            left: self,
            right: other,
        }
    }

    /// Invert the rule.
    fn not(self) -> NotSpec<Self>
    where
        Self: Sized,
    {
        NotSpec { inner: self }
    }

    /// Erase the concrete type.
    fn boxed<'s>(self) -> Box<dyn Specification<T> + Send + Sync + 's>
    where
        Self: Sized + Send + Sync + 's,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }

    fn error_message(&self) -> String {
        (**self).error_message()
    }

    fn validate<'a>(&self, candidate: &'a T) -> Either<ErrorResult, &'a T> {
        (**self).validate(candidate)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }

    fn error_message(&self) -> String {
        (**self).error_message()
    }

    fn validate<'a>(&self, candidate: &'a T) -> Either<ErrorResult, &'a T> {
        (**self).validate(candidate)
    }
}

/// Conjunction of two rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpec<A, B> {
    left: A,
    right: B,
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for AndSpec<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }

    fn error_message(&self) -> String {
        self.left.error_message()
    }

    fn validate<'a>(&self, candidate: &'a T) -> Either<ErrorResult, &'a T> {
        let mut messages = Vec::new();
        for child in [self.left.validate(candidate), self.right.validate(candidate)] {
            if let Either::Left(error) = child {
                messages.extend(error.messages().iter().cloned());
            }
        }
        if messages.is_empty() {
            Either::Right(candidate)
        } else {
            Either::Left(ErrorResult::validation_list(messages))
        }
    }
}

/// Disjunction of two rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpec<A, B> {
    left: A,
    right: B,
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for OrSpec<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }

    fn error_message(&self) -> String {
        format!(
            "{} or {}",
            self.left.error_message(),
            self.right.error_message()
        )
    }
}

/// Negation of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpec<A> {
    inner: A,
}

impl<T: ?Sized, A: Specification<T>> Specification<T> for NotSpec<A> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }

    fn error_message(&self) -> String {
        format!("Not: {}", self.inner.error_message())
    }
}

/// Ad-hoc rule built from a closure and a fixed message.
///
/// # Examples
/// ```
/// use railway::{Predicate, Specification};
///
/// let even = Predicate::new(|n: &i32| n % 2 == 0, "must be even");
/// assert!(even.is_satisfied_by(&4));
/// assert_eq!(even.not().error_message(), "Not: must be even");
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    check: F,
    message: String,
}

impl<F> Predicate<F> {
    /// Wrap `check` with the message reported on failure.
    pub fn new(check: F, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for Predicate<F> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.check)(candidate)
    }

    fn error_message(&self) -> String {
        self.message.clone()
    }
}

/// Text must contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEmpty {
    field: String,
}

impl NotEmpty {
    /// Rule for the named field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Specification<str> for NotEmpty {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty()
    }

    fn error_message(&self) -> String {
        format!("{} must not be empty", self.field)
    }
}

/// Text must be at least `min` characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
    field: String,
}

impl MinLength {
    /// Rule for the named field.
    pub fn new(min: usize, field: impl Into<String>) -> Self {
        Self {
            min,
            field: field.into(),
        }
    }
}

impl Specification<str> for MinLength {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        candidate.chars().count() >= self.min
    }

    fn error_message(&self) -> String {
        format!("{} must be at least {} characters", self.field, self.min)
    }
}

/// Text must be at most `max` characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLength {
    max: usize,
    field: String,
}

impl MaxLength {
    /// Rule for the named field.
    pub fn new(max: usize, field: impl Into<String>) -> Self {
        Self {
            max,
            field: field.into(),
        }
    }
}

impl Specification<str> for MaxLength {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.max
    }

    fn error_message(&self) -> String {
        format!("{} must be at most {} characters", self.field, self.max)
    }
}

/// Number must be strictly greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveNumber<N> {
    zero: N,
    field: String,
}

impl<N: Default> PositiveNumber<N> {
    /// Rule for the named field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            zero: N::default(),
            field: field.into(),
        }
    }
}

impl<N: PartialOrd> Specification<N> for PositiveNumber<N> {
    fn is_satisfied_by(&self, candidate: &N) -> bool {
        *candidate > self.zero
    }

    fn error_message(&self) -> String {
        format!("{} must be positive", self.field)
    }
}

/// Number must lie within `min..=max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InRange<N> {
    min: N,
    max: N,
    field: String,
}

impl<N> InRange<N> {
    /// Rule for the named field; both bounds are inclusive.
    pub fn new(min: N, max: N, field: impl Into<String>) -> Self {
        Self {
            min,
            max,
            field: field.into(),
        }
    }
}

impl<N: PartialOrd + Display> Specification<N> for InRange<N> {
    fn is_satisfied_by(&self, candidate: &N) -> bool {
        self.min <= *candidate && *candidate <= self.max
    }

    fn error_message(&self) -> String {
        format!(
            "{} must be between {} and {}",
            self.field, self.min, self.max
        )
    }
}

#[cfg(test)]
#[path = "specification_tests.rs"]
mod tests;
