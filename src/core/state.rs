//! Core State trait for pushdown state machine states.
//!
//! States form a closed, zero-based enumeration. The engine only ever uses a
//! state as an index into its transition graph and behavior registry.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state is a value from a closed enumeration of size `N`, where every
/// variant maps to a distinct index in `0..N`. Use the [`state_enum!`]
/// macro to derive an implementation for a fieldless enum; a manual
/// implementation must list `ALL` in index order (this is checked when the
/// handler is built).
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are small tags compared only for equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: records holding states can be persisted
///
/// # Example
///
/// ```rust
/// use pushdown_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Robot {
///     Idle,
///     Moving,
/// }
///
/// impl State for Robot {
///     const ALL: &'static [Self] = &[Self::Idle, Self::Moving];
///
///     fn index(self) -> usize {
///         self as usize
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Moving => "Moving",
///         }
///     }
/// }
///
/// assert_eq!(Robot::count(), 2);
/// assert_eq!(Robot::from_index(1), Some(Robot::Moving));
/// ```
///
/// [`state_enum!`]: crate::state_enum
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every state, in index order. `ALL[i].index() == i` must hold.
    const ALL: &'static [Self];

    /// Position of this state in `0..N`.
    fn index(self) -> usize;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Number of declared states (`N`).
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Look a state up by its index.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Moving,
        Dancing,
    }

    impl State for TestState {
        const ALL: &'static [Self] = &[Self::Idle, Self::Moving, Self::Dancing];

        fn index(self) -> usize {
            self as usize
        }

        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Moving => "Moving",
                Self::Dancing => "Dancing",
            }
        }
    }

    #[test]
    fn count_matches_declared_states() {
        assert_eq!(TestState::count(), 3);
    }

    #[test]
    fn index_and_from_index_agree() {
        for (i, state) in TestState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
            assert_eq!(TestState::from_index(i), Some(*state));
        }
    }

    #[test]
    fn from_index_out_of_range_is_none() {
        assert_eq!(TestState::from_index(3), None);
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Moving.name(), "Moving");
        assert_eq!(TestState::Dancing.name(), "Dancing");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Moving;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
