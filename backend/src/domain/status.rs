//! Lifecycle status shared by domain entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an entity.
///
/// Serialised in lowercase (`"active"`, `"inactive"`, `"pending"`,
/// `"deleted"`), which is also the [`fmt::Display`] form used in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// In use.
    Active,
    /// Switched off but retained.
    Inactive,
    /// Created and awaiting activation.
    #[default]
    Pending,
    /// Soft deleted; hidden from every read.
    Deleted,
}

impl Status {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Deleted => "deleted",
        }
    }
}

/// Error returned when parsing a [`Status`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(String);

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            "deleted" => Ok(Self::Deleted),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Status::Active, "active")]
    #[case(Status::Inactive, "inactive")]
    #[case(Status::Pending, "pending")]
    #[case(Status::Deleted, "deleted")]
    fn display_and_parse_agree(#[case] status: Status, #[case] name: &str) {
        assert_eq!(status.to_string(), name);
        assert_eq!(name.parse::<Status>(), Ok(status));
        assert_eq!(
            serde_json::to_value(status).expect("serialise status"),
            serde_json::json!(name)
        );
    }

    #[rstest]
    fn unknown_names_are_rejected() {
        let err = "archived".parse::<Status>().expect_err("unknown status");
        assert_eq!(err.to_string(), "unknown status: archived");
    }

    #[rstest]
    fn new_entities_start_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }
}
