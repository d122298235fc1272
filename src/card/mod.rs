//! The flashcard widget.
//!
//! A two-sided card whose visible face and content follow a handful of
//! string attributes and a host-supplied model, with a frame-driven flip.

pub mod attributes;
pub mod classifier;
pub mod element;
pub mod flip;
pub mod gateway;
pub mod model;
pub mod render;
pub mod state;
pub mod surface;

pub use attributes::{AttributeMap, AttributeName};
pub use classifier::{ContentClassifier, ContentKind, DataController};
pub use element::{CardSettings, Flashcard};
pub use flip::{AnimationState, FlipMotion, FlipPhase, FlipState};
pub use gateway::{CardEvent, ClickEvent, ClickOutcome, ACTIVATE_EVENT};
pub use model::{CardModel, ContentField, FaceSelector, Orientation, Side};
pub use state::{CardState, StateField};
pub use surface::{Slot, Surface, Transform, ViewTree};
