//! Flip sequencer.
//!
//! Animates a half turn one frame at a time and swaps the logical face
//! at the quarter turn.
//!
//! # Architecture
//!
//! Driven through [`crate::mvi`]:
//! - `state.rs` - Phase enum (Idle → Rising → Swapped → Falling → Idle) and animation values
//! - `intent.rs` - Host requests and frame ticks (Start, Tick, Reset)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::FlipIntent;
pub use reducer::FlipReducer;
pub use state::{AnimationState, FlipMotion, FlipPhase, FlipState, HALF_TURN_DEG, QUARTER_TURN_DEG};
