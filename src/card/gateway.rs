//! Click handling and the public notification event.

use super::model::CardModel;

/// Name of the notification dispatched on every handled click.
pub const ACTIVATE_EVENT: &str = "flashcard-activate";

/// A user click delivered to the card's container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the click from reaching ancestor listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Public notification carrying the card's model.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEvent {
    pub name: &'static str,
    pub detail: CardModel,
}

impl CardEvent {
    pub fn activate(detail: CardModel) -> Self {
        Self {
            name: ACTIVATE_EVENT,
            detail,
        }
    }
}

/// What a click resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub flipped: bool,
    pub event: CardEvent,
}
