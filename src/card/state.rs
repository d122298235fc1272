//! Effective widget state, derived from attributes.

use super::model::{CardModel, FaceSelector, Orientation};

/// Which piece of state changed, so only the matching update runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Face,
    Hidden,
    /// Full refresh (attach).
    All,
}

/// The authoritative in-memory state of one card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardState {
    pub model: Option<CardModel>,
    pub front: Option<FaceSelector>,
    pub back: Option<FaceSelector>,
    pub face: Option<Orientation>,
    pub hidden: bool,
    pub flippable: bool,
    /// True between `connect` and `disconnect`.
    pub connected: bool,
    /// Whether the container's click listener is attached.
    pub listening: bool,
}

impl CardState {
    pub fn with_model(model: Option<CardModel>) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Rendering needs both a surface and a model.
    pub fn can_render(&self) -> bool {
        self.connected && self.model.is_some()
    }

    /// Returns true when the value changed.
    pub fn set_face(&mut self, face: Orientation) -> bool {
        replace_if_changed(&mut self.face, Some(face))
    }

    pub fn set_hidden(&mut self, hidden: bool) -> bool {
        replace_if_changed(&mut self.hidden, hidden)
    }

    pub fn set_flippable(&mut self, flippable: bool) -> bool {
        replace_if_changed(&mut self.flippable, flippable)
    }

    pub fn set_front(&mut self, selector: Option<FaceSelector>) -> bool {
        replace_if_changed(&mut self.front, selector)
    }

    pub fn set_back(&mut self, selector: Option<FaceSelector>) -> bool {
        replace_if_changed(&mut self.back, selector)
    }

    pub fn set_model(&mut self, model: CardModel) -> bool {
        replace_if_changed(&mut self.model, Some(model))
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
