//! Reducer for the flip sequencer.

use crate::mvi::Reducer;

use super::intent::FlipIntent;
use super::state::{AnimationState, FlipPhase, FlipState, HALF_TURN_DEG, QUARTER_TURN_DEG};

/// Reducer for flip phase transitions.
///
/// Pure function. Listener removal, stacking order, the face swap and
/// frame scheduling are applied by the widget around the dispatch call.
pub struct FlipReducer;

impl Reducer for FlipReducer {
    type State = FlipState;
    type Intent = FlipIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlipIntent::Start { motion } => match state.phase {
                FlipPhase::Idle => FlipState {
                    phase: FlipPhase::Rising,
                    animation: AnimationState {
                        is_flipping: true,
                        ..AnimationState::REST
                    },
                    motion,
                },
                // A flip is already running
                _ => state,
            },

            FlipIntent::Tick => match state.phase {
                FlipPhase::Idle => state,
                FlipPhase::Rising => {
                    let animation = state.animation.step(&state.motion, true, QUARTER_TURN_DEG);
                    let phase = if animation.rotation_deg >= QUARTER_TURN_DEG {
                        FlipPhase::Swapped
                    } else {
                        FlipPhase::Rising
                    };
                    FlipState {
                        phase,
                        animation,
                        ..state
                    }
                }
                FlipPhase::Swapped | FlipPhase::Falling => {
                    let animation = state.animation.step(&state.motion, false, HALF_TURN_DEG);
                    if animation.rotation_deg >= HALF_TURN_DEG {
                        FlipState {
                            phase: FlipPhase::Idle,
                            animation: AnimationState::REST,
                            ..state
                        }
                    } else {
                        FlipState {
                            phase: FlipPhase::Falling,
                            animation,
                            ..state
                        }
                    }
                }
            },

            FlipIntent::Reset => FlipState {
                motion: state.motion,
                ..FlipState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::flip::FlipMotion;

    fn started() -> FlipState {
        FlipReducer::reduce(
            FlipState::default(),
            FlipIntent::Start {
                motion: FlipMotion::default(),
            },
        )
    }

    fn tick_n(mut state: FlipState, n: usize) -> FlipState {
        for _ in 0..n {
            state = FlipReducer::reduce(state, FlipIntent::Tick);
        }
        state
    }

    #[test]
    fn idle_start_transitions_to_rising() {
        let state = started();
        assert_eq!(state.phase, FlipPhase::Rising);
        assert!(state.is_flipping());
        assert_eq!(state.animation.rotation_deg, 0);
    }

    #[test]
    fn start_while_flipping_is_noop() {
        let state = tick_n(started(), 2);
        let again = FlipReducer::reduce(
            state,
            FlipIntent::Start {
                motion: FlipMotion::default(),
            },
        );
        assert_eq!(again, state);
    }

    #[test]
    fn idle_tick_is_noop() {
        let state = FlipReducer::reduce(FlipState::default(), FlipIntent::Tick);
        assert_eq!(state, FlipState::default());
    }

    #[test]
    fn rising_reaches_swapped_exactly_at_quarter_turn() {
        let state = tick_n(started(), 5);
        assert_eq!(state.phase, FlipPhase::Rising);
        assert_eq!(state.animation.rotation_deg, 75);

        let state = tick_n(state, 1);
        assert_eq!(state.phase, FlipPhase::Swapped);
        assert_eq!(state.animation.rotation_deg, 90);
        assert_eq!(state.animation.depth, 6);
        assert!((state.animation.scale - 1.09).abs() < 1e-5);
        assert!((state.animation.translate_x + 18.0).abs() < 1e-5);
    }

    #[test]
    fn swapped_tick_starts_falling() {
        let state = tick_n(started(), 7);
        assert_eq!(state.phase, FlipPhase::Falling);
        assert_eq!(state.animation.rotation_deg, 105);
        assert_eq!(state.animation.depth, 5);
    }

    #[test]
    fn half_turn_returns_to_idle_at_rest() {
        let state = tick_n(started(), 11);
        assert_eq!(state.phase, FlipPhase::Falling);
        assert_eq!(state.animation.rotation_deg, 165);

        let state = tick_n(state, 1);
        assert_eq!(state.phase, FlipPhase::Idle);
        assert!(state.animation.is_at_rest());
        assert!(!state.is_flipping());
    }

    #[test]
    fn without_depth_effect_only_rotation_changes() {
        let motion = FlipMotion {
            depth_effect: false,
            ..FlipMotion::default()
        };
        let state = FlipReducer::reduce(FlipState::default(), FlipIntent::Start { motion });
        let state = tick_n(state, 3);
        assert_eq!(state.animation.rotation_deg, 45);
        assert_eq!(state.animation.scale, 1.0);
        assert_eq!(state.animation.translate_x, 0.0);
    }

    #[test]
    fn uneven_step_stops_on_the_quarter_and_half_turn() {
        let motion = FlipMotion {
            degrees_per_tick: 40,
            ..FlipMotion::default()
        };
        let state = FlipReducer::reduce(FlipState::default(), FlipIntent::Start { motion });

        let state = tick_n(state, 2);
        assert_eq!(state.phase, FlipPhase::Rising);
        assert_eq!(state.animation.rotation_deg, 80);

        let state = tick_n(state, 1);
        assert_eq!(state.phase, FlipPhase::Swapped);
        assert_eq!(state.animation.rotation_deg, 90);

        let state = tick_n(state, 2);
        assert_eq!(state.phase, FlipPhase::Falling);
        assert_eq!(state.animation.rotation_deg, 170);

        let state = tick_n(state, 1);
        assert_eq!(state.phase, FlipPhase::Idle);
        assert!(state.animation.is_at_rest());
    }

    #[test]
    fn reset_drops_flip_in_progress() {
        let state = tick_n(started(), 4);
        let state = FlipReducer::reduce(state, FlipIntent::Reset);
        assert!(state.is_idle());
        assert!(state.animation.is_at_rest());
    }
}
