//! Macros for declaring states and transition tables.

/// Declare a state enum and derive its `State` implementation.
///
/// Variants are indexed in declaration order, starting at zero. The first
/// variant is the state every machine starts in.
///
/// # Example
///
/// ```
/// use pushdown_fsm::core::State;
/// use pushdown_fsm::state_enum;
///
/// state_enum! {
///     pub enum RobotState {
///         Idle,
///         Moving,
///         Dancing,
///     }
/// }
///
/// assert_eq!(RobotState::count(), 3);
/// assert_eq!(RobotState::Moving.index(), 1);
/// assert_eq!(RobotState::Dancing.name(), "Dancing");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::State for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

/// Build a `TransitionTable` from `from => [targets...]` rows.
///
/// # Example
///
/// ```
/// use pushdown_fsm::core::TransitionGraph;
/// use pushdown_fsm::{state_enum, transitions};
///
/// state_enum! {
///     enum S {
///         A,
///         B,
///         C,
///     }
/// }
///
/// let table = transitions![
///     S::A => [S::B, S::C],
///     S::B => [S::C],
/// ];
/// let graph = TransitionGraph::from_table(&table).unwrap();
/// assert!(graph.allows(S::A, S::C));
/// assert!(!graph.allows(S::C, S::A));
/// ```
#[macro_export]
macro_rules! transitions {
    ($($from:expr => [$($to:expr),* $(,)?]),* $(,)?) => {
        $crate::core::TransitionTable::new()
            $(.with($from, [$($to),*]))*
    };
}
