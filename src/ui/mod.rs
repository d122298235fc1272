//! Terminal host for a single flashcard.
//!
//! Plays the part of the display: owns the frame clock, forwards clicks
//! and draws the card's [`ViewTree`](crate::card::ViewTree).

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
