use serde::{Deserialize, Serialize};

use crate::card::classifier::DEFAULT_LONG_TEXT_THRESHOLD;
use crate::card::{CardSettings, FlipMotion, Orientation};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub card: CardDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Flip animation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Rotation per frame in degrees; must divide 90 (default: 15).
    #[serde(default = "default_degrees_per_tick")]
    pub degrees_per_tick: u32,
    /// Scale added per frame while turning toward the viewer (default: 0.015).
    #[serde(default = "default_scale_per_tick")]
    pub scale_per_tick: f32,
    /// Horizontal shift per frame in pixels (default: 3.0).
    #[serde(default = "default_translate_per_tick")]
    pub translate_per_tick: f32,
    /// Apply scale/translation during the flip (default: true).
    #[serde(default = "default_depth_effect")]
    pub depth_effect: bool,
    /// Stacking order while flipping (default: 9000).
    #[serde(default = "default_raised_z_index")]
    pub raised_z_index: i32,
    /// Stacking order at rest (default: 0).
    #[serde(default)]
    pub rest_z_index: i32,
    /// Display frame interval in milliseconds (default: 16).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

/// Content classification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Plain text longer than this many characters uses the long-text view.
    #[serde(default = "default_long_text_threshold")]
    pub long_text_threshold: usize,
}

/// Attribute values applied to the card at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDefaults {
    #[serde(default = "default_front")]
    pub front: String,
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default = "default_face")]
    pub face: String,
    #[serde(default = "default_flippable")]
    pub flippable: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_degrees_per_tick() -> u32 {
    15
}

fn default_scale_per_tick() -> f32 {
    0.015
}

fn default_translate_per_tick() -> f32 {
    3.0
}

fn default_depth_effect() -> bool {
    true
}

fn default_raised_z_index() -> i32 {
    9000
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_long_text_threshold() -> usize {
    DEFAULT_LONG_TEXT_THRESHOLD
}

fn default_front() -> String {
    "name".to_string()
}

fn default_back() -> String {
    "image".to_string()
}

fn default_face() -> String {
    Orientation::Up.as_str().to_string()
}

fn default_flippable() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            degrees_per_tick: default_degrees_per_tick(),
            scale_per_tick: default_scale_per_tick(),
            translate_per_tick: default_translate_per_tick(),
            depth_effect: default_depth_effect(),
            raised_z_index: default_raised_z_index(),
            rest_z_index: 0,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            long_text_threshold: default_long_text_threshold(),
        }
    }
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            front: default_front(),
            back: default_back(),
            face: default_face(),
            flippable: default_flippable(),
            hidden: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl From<&AnimationConfig> for FlipMotion {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            degrees_per_tick: config.degrees_per_tick,
            scale_per_tick: config.scale_per_tick,
            translate_per_tick: config.translate_per_tick,
            depth_effect: config.depth_effect,
        }
    }
}

impl From<&Config> for CardSettings {
    fn from(config: &Config) -> Self {
        Self {
            motion: FlipMotion::from(&config.animation),
            raised_z_index: config.animation.raised_z_index,
            rest_z_index: config.animation.rest_z_index,
            long_text_threshold: config.content.long_text_threshold,
        }
    }
}
