//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycle statuses (Reservation, Payment).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Draft,
        Active,
        Done,
    }

    impl StateMachine for TestStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            matches!(
                (self, target),
                (TestStatus::Draft, TestStatus::Active) | (TestStatus::Active, TestStatus::Done)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                TestStatus::Draft => vec![TestStatus::Active],
                TestStatus::Active => vec![TestStatus::Done],
                TestStatus::Done => vec![],
            }
        }
    }

    #[test]
    fn valid_transition_succeeds() {
        assert_eq!(
            TestStatus::Draft.transition_to(TestStatus::Active),
            Ok(TestStatus::Active)
        );
    }

    #[test]
    fn invalid_transition_fails() {
        assert!(TestStatus::Draft.transition_to(TestStatus::Done).is_err());
    }

    #[test]
    fn terminal_state_has_no_transitions() {
        assert!(TestStatus::Done.is_terminal());
        assert!(!TestStatus::Draft.is_terminal());
    }
}
