//! A two-sided flippable flashcard widget.
//!
//! The widget keeps declared attributes, in-memory state and the rendered
//! surface consistent, and flips between faces with a frame-driven
//! animation. [`ui`] hosts a card in the terminal.

pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod ui;

pub use card::{CardModel, CardSettings, Flashcard, Orientation, ViewTree};
pub use error::FlashcardError;
