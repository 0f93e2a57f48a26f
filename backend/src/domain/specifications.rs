//! Business rules for the example aggregate.

use railway::{AndSpec, Specification};

use super::{Example, Status};

/// Example names must contain something other than whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNotEmpty;

impl Specification<str> for NameNotEmpty {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty()
    }

    fn error_message(&self) -> String {
        "Name must not be empty".to_owned()
    }
}

/// Values must be strictly positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuePositive;

impl Specification<i64> for ValuePositive {
    fn is_satisfied_by(&self, candidate: &i64) -> bool {
        *candidate > 0
    }

    fn error_message(&self) -> String {
        "Value must be positive".to_owned()
    }
}

/// Values must lie within an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct ValueInRange {
    min: i64,
    max: i64,
}

impl ValueInRange {
    /// Rule for `min..=max`.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Specification<i64> for ValueInRange {
    fn is_satisfied_by(&self, candidate: &i64) -> bool {
        (self.min..=self.max).contains(candidate)
    }

    fn error_message(&self) -> String {
        format!("Value must be between {} and {}", self.min, self.max)
    }
}

/// The example must be [`Status::Active`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleActive;

impl Specification<Example> for ExampleActive {
    fn is_satisfied_by(&self, candidate: &Example) -> bool {
        candidate.status() == Status::Active
    }

    fn error_message(&self) -> String {
        "Example must be active".to_owned()
    }
}

/// The example must not be soft deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleNotDeleted;

impl Specification<Example> for ExampleNotDeleted {
    fn is_satisfied_by(&self, candidate: &Example) -> bool {
        candidate.status() != Status::Deleted
    }

    fn error_message(&self) -> String {
        "Example must not be deleted".to_owned()
    }
}

/// An example may be modified while active and not deleted.
pub fn example_can_be_modified() -> AndSpec<ExampleActive, ExampleNotDeleted> {
    ExampleActive.and(ExampleNotDeleted)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Test", true)]
    #[case("", false)]
    #[case(" \t", false)]
    fn name_not_empty(#[case] name: &str, #[case] satisfied: bool) {
        assert_eq!(NameNotEmpty.is_satisfied_by(name), satisfied);
    }

    #[rstest]
    fn name_failure_message() {
        let error = NameNotEmpty.validate("").left().expect("blank name rejected");
        assert!(error.is_validation());
        assert_eq!(error.first_message(), "Name must not be empty");
    }

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-3, false)]
    fn value_positive(#[case] value: i64, #[case] satisfied: bool) {
        assert_eq!(ValuePositive.is_satisfied_by(&value), satisfied);
    }

    #[rstest]
    #[case(10, true)]
    #[case(20, true)]
    #[case(9, false)]
    #[case(21, false)]
    fn value_in_range(#[case] value: i64, #[case] satisfied: bool) {
        let rule = ValueInRange::new(10, 20);
        assert_eq!(rule.is_satisfied_by(&value), satisfied);
        assert_eq!(rule.error_message(), "Value must be between 10 and 20");
    }

    fn with_status(transition: Option<fn(&mut Example)>) -> Example {
        let mut example = Example::create("Test", "", 0);
        if let Some(apply) = transition {
            apply(&mut example);
        }
        example
    }

    #[rstest]
    #[case::pending(None, false, true)]
    #[case::active(Some(Example::activate as fn(&mut Example)), true, true)]
    #[case::inactive(Some(Example::deactivate as fn(&mut Example)), false, true)]
    #[case::deleted(Some(Example::mark_deleted as fn(&mut Example)), false, false)]
    fn entity_rules(
        #[case] transition: Option<fn(&mut Example)>,
        #[case] active: bool,
        #[case] not_deleted: bool,
    ) {
        let example = with_status(transition);
        assert_eq!(ExampleActive.is_satisfied_by(&example), active);
        assert_eq!(ExampleNotDeleted.is_satisfied_by(&example), not_deleted);
        assert_eq!(
            example_can_be_modified().is_satisfied_by(&example),
            active && not_deleted
        );
    }

    #[rstest]
    fn modifiable_rule_reports_the_active_requirement() {
        let example = with_status(None);
        let error = example_can_be_modified()
            .validate(&example)
            .left()
            .expect("pending example is not modifiable");
        assert_eq!(error.messages(), ["Example must be active"]);
        assert_eq!(example_can_be_modified().error_message(), "Example must be active");
    }
}
