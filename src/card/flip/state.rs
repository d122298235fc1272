//! Flip phases and animation values.

use crate::card::surface::Transform;
use crate::mvi::UiState;

pub const QUARTER_TURN_DEG: u32 = 90;
pub const HALF_TURN_DEG: u32 = 180;

/// Where the sequencer is within one flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipPhase {
    #[default]
    Idle,
    /// Turning from 0° toward the quarter turn.
    Rising,
    /// Quarter turn reached and the face swapped on this frame.
    Swapped,
    /// Turning from the quarter turn toward the half turn.
    Falling,
}

/// Per-tick animation increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipMotion {
    pub degrees_per_tick: u32,
    pub scale_per_tick: f32,
    pub translate_per_tick: f32,
    /// Scale up and shift sideways while turning, to suggest depth.
    pub depth_effect: bool,
}

impl Default for FlipMotion {
    fn default() -> Self {
        Self {
            degrees_per_tick: 15,
            scale_per_tick: 0.015,
            translate_per_tick: 3.0,
            depth_effect: true,
        }
    }
}

/// Animation values; never exposed as attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub rotation_deg: u32,
    /// Number of depth steps currently applied.
    pub depth: u32,
    pub scale: f32,
    pub translate_x: f32,
    pub is_flipping: bool,
}

impl AnimationState {
    pub const REST: AnimationState = AnimationState {
        rotation_deg: 0,
        depth: 0,
        scale: 1.0,
        translate_x: 0.0,
        is_flipping: false,
    };

    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn transform(&self) -> Transform {
        Transform {
            rotate_y_deg: self.rotation_deg,
            scale: self.scale,
            translate_x: self.translate_x,
        }
    }

    /// Advance one tick without passing `target_deg`; `toward_viewer` grows
    /// depth, otherwise it shrinks.
    pub(super) fn step(
        mut self,
        motion: &FlipMotion,
        toward_viewer: bool,
        target_deg: u32,
    ) -> Self {
        let advanced = self.rotation_deg + motion.degrees_per_tick.max(1);
        self.rotation_deg = advanced.min(target_deg);
        if motion.depth_effect {
            self.depth = if toward_viewer {
                self.depth + 1
            } else {
                self.depth.saturating_sub(1)
            };
        }
        // Derived from the step count so the return trip lands exactly on rest.
        self.scale = 1.0 + motion.scale_per_tick * self.depth as f32;
        self.translate_x = -motion.translate_per_tick * self.depth as f32;
        self
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlipState {
    pub phase: FlipPhase,
    pub animation: AnimationState,
    pub motion: FlipMotion,
}

impl UiState for FlipState {}

impl FlipState {
    pub fn is_flipping(&self) -> bool {
        self.animation.is_flipping
    }

    pub fn is_idle(&self) -> bool {
        self.phase == FlipPhase::Idle
    }
}
