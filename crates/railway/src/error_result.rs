//! Closed error taxonomy carried on the `Left` branch.
//!
//! The type is transport agnostic. [`ErrorResult::http_status`] exposes the
//! conventional status for adapters that speak HTTP; it performs no I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Either;

/// Message returned by [`ErrorResult::first_message`] when no message exists.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Not authorized";
const DEFAULT_FORBIDDEN_MESSAGE: &str = "Access denied";

/// Failure category. Every [`ErrorResult`] carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or duplicate input.
    Validation,
    /// The requested resource does not exist.
    NotFound,
    /// Unexpected internal failure captured from an error or panic.
    Exception,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted.
    Forbidden,
}

impl ErrorKind {
    /// Conventional HTTP status for the category.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Exception => 500,
        }
    }
}

/// Domain error value.
///
/// ## Invariants
/// - Exactly one category is active; it is fixed by the factory used.
/// - Single-message factories always store one message.
///
/// # Examples
/// ```
/// use railway::{ErrorKind, ErrorResult};
///
/// let err = ErrorResult::not_found("example 42 not found");
/// assert!(err.is_not_found());
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.http_status(), 404);
/// assert_eq!(err.first_message(), "example 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    kind: ErrorKind,
    messages: Vec<String>,
}

impl ErrorResult {
    fn single(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            messages: vec![message.into()],
        }
    }

    /// Validation failure with one message (400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::single(ErrorKind::Validation, message)
    }

    /// Validation failure accumulating several messages (400).
    ///
    /// An empty list records [`UNKNOWN_ERROR_MESSAGE`] so `messages` is
    /// never empty.
    pub fn validation_list<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Self::single(ErrorKind::Validation, UNKNOWN_ERROR_MESSAGE);
        }
        Self {
            kind: ErrorKind::Validation,
            messages,
        }
    }

    /// Missing resource (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::single(ErrorKind::NotFound, message)
    }

    /// Internal failure (500).
    pub fn exception(message: impl Into<String>) -> Self {
        Self::single(ErrorKind::Exception, message)
    }

    /// Internal failure whose message is the error's display string.
    ///
    /// # Examples
    /// ```
    /// use railway::ErrorResult;
    ///
    /// let io = std::io::Error::other("socket closed");
    /// let err = ErrorResult::from_exception(&io);
    /// assert!(err.is_exception());
    /// assert_eq!(err.first_message(), "socket closed");
    /// ```
    pub fn from_exception<E: fmt::Display + ?Sized>(error: &E) -> Self {
        Self::exception(error.to_string())
    }

    /// Authentication failure (401).
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::single(ErrorKind::Unauthorized, message)
    }

    /// Authentication failure with the default message.
    pub fn unauthorized_default() -> Self {
        Self::unauthorized(DEFAULT_UNAUTHORIZED_MESSAGE)
    }

    /// Permission failure (403).
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::single(ErrorKind::Forbidden, message)
    }

    /// Permission failure with the default message.
    pub fn forbidden_default() -> Self {
        Self::forbidden(DEFAULT_FORBIDDEN_MESSAGE)
    }

    /// Active category.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `true` for validation failures.
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// `true` for missing resources.
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    /// `true` for captured internal failures.
    pub const fn is_exception(&self) -> bool {
        matches!(self.kind, ErrorKind::Exception)
    }

    /// `true` for authentication failures.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized)
    }

    /// `true` for permission failures.
    pub const fn is_forbidden(&self) -> bool {
        matches!(self.kind, ErrorKind::Forbidden)
    }

    /// Conventional HTTP status code for the category.
    pub const fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    /// First message, or [`UNKNOWN_ERROR_MESSAGE`] when there is none.
    pub fn first_message(&self) -> &str {
        self.messages
            .first()
            .map_or(UNKNOWN_ERROR_MESSAGE, String::as_str)
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

impl std::error::Error for ErrorResult {}

/// Accumulates validation messages before producing one [`ErrorResult`].
///
/// # Examples
/// ```
/// use railway::ValidationBuilder;
///
/// let error = ValidationBuilder::new()
///     .add_if_empty(Some("  "), "Name")
///     .add(-1 < 0, "Value must not be negative")
///     .build()
///     .expect("two failures were recorded");
/// assert_eq!(error.messages().len(), 2);
/// assert_eq!(error.first_message(), "Name is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationBuilder {
    errors: Vec<String>,
}

impl ValidationBuilder {
    /// Start with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` when `condition` holds.
    #[must_use]
    pub fn add(mut self, condition: bool, message: impl Into<String>) -> Self {
        if condition {
            self.errors.push(message.into());
        }
        self
    }

    /// Record `"{field} is required"` when the value is missing or blank.
    #[must_use]
    pub fn add_if_empty(self, value: Option<&str>, field: &str) -> Self {
        let blank = value.is_none_or(|text| text.trim().is_empty());
        self.add(blank, format!("{field} is required"))
    }

    /// Record `"{field} is required"` when the value is missing.
    #[must_use]
    pub fn add_if_none<T>(self, value: Option<&T>, field: &str) -> Self {
        self.add(value.is_none(), format!("{field} is required"))
    }

    /// Recorded messages so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `true` while nothing has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `true` once at least one message has been recorded.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Produce a validation error when anything was recorded.
    pub fn build(self) -> Option<ErrorResult> {
        if self.is_valid() {
            None
        } else {
            Some(ErrorResult::validation_list(self.errors))
        }
    }

    /// Pass `value` through on success, or fail with every recorded message.
    pub fn into_either<T>(self, value: T) -> Either<ErrorResult, T> {
        match self.build() {
            Some(error) => Either::Left(error),
            None => Either::Right(value),
        }
    }
}
