use super::intent::Intent;
use super::state::UiState;

/// A state machine expressed as `(State, Intent) -> State`.
///
/// Implementations own no data and perform no I/O. Callers that need side
/// effects compare the phase before and after dispatch and act on the edge.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
