//! Intents for the flip sequencer.

use crate::mvi::Intent;

use super::state::FlipMotion;

/// Intents that can be dispatched to the flip reducer.
#[derive(Debug, Clone, Copy)]
pub enum FlipIntent {
    /// Begin a flip with the given per-tick motion. Ignored unless idle.
    Start { motion: FlipMotion },

    /// One display frame elapsed.
    Tick,

    /// Drop any flip in progress (widget detached).
    Reset,
}

impl Intent for FlipIntent {}
