//! Example aggregate.
//!
//! The sample entity carried through every layer: a named record with a
//! free-form description, an integer value and a lifecycle [`Status`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

/// Audit stamps recorded on every persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    created_by: Option<String>,
    updated_by: Option<String>,
}

impl AuditFields {
    /// Stamps for an entity created now.
    pub fn created_now(by: Option<String>) -> Self {
        Self {
            created_at: Utc::now(),
            updated_at: None,
            created_by: by,
            updated_by: None,
        }
    }

    /// Record a modification at the current time.
    pub fn touch(&mut self, by: Option<String>) {
        self.updated_at = Some(Utc::now());
        self.updated_by = by;
    }

    /// Creation time.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last modification, if any.
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Creator, if known.
    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    /// Last modifier, if known.
    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }
}

/// Example entity.
///
/// ## Invariants
/// - `id` never changes after creation.
/// - New entities start [`Status::Pending`].
/// - Every mutator stamps `updated_at`.
///
/// Name validation lives in the service layer; the entity accepts whatever
/// it is given.
///
/// # Examples
/// ```
/// use backend::domain::{Example, Status};
///
/// let mut example = Example::create("Test", "", 0);
/// assert_eq!(example.status(), Status::Pending);
/// example.activate();
/// assert!(example.is_active());
/// assert!(example.audit().updated_at().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    id: Uuid,
    name: String,
    description: String,
    value: i64,
    status: Status,
    audit: AuditFields,
}

impl Example {
    /// Build a fresh pending entity with a random id.
    pub fn create(name: impl Into<String>, description: impl Into<String>, value: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            value,
            status: Status::Pending,
            audit: AuditFields::created_now(None),
        }
    }

    /// Identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Numeric payload.
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Current lifecycle state.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Audit stamps.
    pub const fn audit(&self) -> &AuditFields {
        &self.audit
    }

    /// `true` while [`Status::Active`].
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// `true` once soft deleted.
    pub fn is_deleted(&self) -> bool {
        self.status == Status::Deleted
    }

    /// Replace the name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the value.
    pub const fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Move to [`Status::Active`].
    pub fn activate(&mut self) {
        self.transition(Status::Active);
    }

    /// Move to [`Status::Inactive`].
    pub fn deactivate(&mut self) {
        self.transition(Status::Inactive);
    }

    /// Soft delete: the record stays stored but disappears from reads.
    pub fn mark_deleted(&mut self) {
        self.transition(Status::Deleted);
    }

    /// Stamp a modification without changing state.
    pub fn mark_updated(&mut self, by: Option<String>) {
        self.audit.touch(by);
    }

    fn transition(&mut self, status: Status) {
        self.status = status;
        self.mark_updated(None);
    }
}
