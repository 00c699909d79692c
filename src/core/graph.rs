//! Transition tables and the precomputed adjacency graph built from them.

use super::state::State;
use crate::builder::{BuildError, SetupViolation};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One row of a transition table: the states `from` may move to.
///
/// Transitions are directional. Listing `A -> B` does not permit `B -> A`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub from: S,
    pub targets: Vec<S>,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, targets: impl IntoIterator<Item = S>) -> Self {
        Self {
            from,
            targets: targets.into_iter().collect(),
        }
    }
}

/// Ordered list of transitions, the declarative form of a [`TransitionGraph`].
///
/// Tables serialize as a plain JSON array, so they can live in config files:
///
/// ```rust
/// use pushdown_fsm::core::TransitionTable;
/// use pushdown_fsm::state_enum;
///
/// state_enum! {
///     enum Robot {
///         Idle,
///         Moving,
///         Dancing,
///     }
/// }
///
/// let table: TransitionTable<Robot> = TransitionTable::from_json(
///     r#"[{"from": "Idle", "targets": ["Moving", "Dancing"]}]"#,
/// )
/// .unwrap();
/// assert_eq!(table.entries().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct TransitionTable<S: State> {
    entries: Vec<Transition<S>>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a row, returning the extended table.
    pub fn with(mut self, from: S, targets: impl IntoIterator<Item = S>) -> Self {
        self.push(Transition::new(from, targets));
        self
    }

    pub fn push(&mut self, transition: Transition<S>) {
        self.entries.push(transition);
    }

    pub fn extend(&mut self, other: TransitionTable<S>) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Transition<S>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<S: State> FromIterator<Transition<S>> for TransitionTable<S> {
    fn from_iter<I: IntoIterator<Item = Transition<S>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Precomputed `N x N` adjacency matrix answering "may `from` move to `to`".
///
/// Built once from a [`TransitionTable`]; rows listed more than once have
/// their targets merged. The graph is immutable afterwards and lookups are
/// O(1).
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionGraph<S: State> {
    allowed: Vec<bool>,
    _phantom: PhantomData<S>,
}

impl<S: State> TransitionGraph<S> {
    /// Build the matrix, rejecting rows that name a state outside `0..N`.
    pub fn from_table(table: &TransitionTable<S>) -> Result<Self, BuildError> {
        let n = S::count();
        let mut checks: Vec<Validation<(), NonEmptyVec<SetupViolation>>> = Vec::new();
        let mut allowed = vec![false; n * n];

        for transition in table.entries() {
            let from = transition.from.index();
            if from >= n {
                checks.push(Validation::fail(SetupViolation::out_of_range(transition.from)));
                continue;
            }
            for target in &transition.targets {
                if target.index() >= n {
                    checks.push(Validation::fail(SetupViolation::out_of_range(*target)));
                } else {
                    allowed[from * n + target.index()] = true;
                }
            }
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks).map(|_| ()) {
            return Err(BuildError::InvalidSetup {
                violations: errors.iter().cloned().collect(),
            });
        }

        Ok(Self {
            allowed,
            _phantom: PhantomData,
        })
    }

    /// Check whether `from -> to` is listed (pure).
    ///
    /// States outside `0..N` are never allowed.
    pub fn allows(&self, from: S, to: S) -> bool {
        let n = S::count();
        let (from, to) = (from.index(), to.index());
        from < n && to < n && self.allowed[from * n + to]
    }

    /// Every state `from` may move to, in index order.
    pub fn targets(&self, from: S) -> impl Iterator<Item = S> + '_ {
        S::ALL
            .iter()
            .copied()
            .filter(move |to| self.allows(from, *to))
    }
}
