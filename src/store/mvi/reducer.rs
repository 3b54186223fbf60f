//! Reducer trait.

use super::intent::Intent;
use super::state::StateSnapshot;

/// Folds one intent into a state snapshot.
///
/// Implementations do no I/O; every state change in the store goes
/// through `reduce`.
pub trait Reducer {
    type State: StateSnapshot;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
