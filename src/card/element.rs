//! The flashcard widget instance.
//!
//! Attributes are the source of truth. Both entry points, the host writing
//! an attribute and a property setter, end up in [`Flashcard::sync`], which
//! copies one attribute into [`CardState`] and renders only when the
//! effective value changed.

use crate::error::FlashcardError;
use crate::mvi::Reducer;

use super::attributes::{bool_attribute, parse_bool_attribute, AttributeMap, AttributeName};
use super::classifier::{ContentClassifier, DataController, DEFAULT_LONG_TEXT_THRESHOLD};
use super::flip::{FlipIntent, FlipMotion, FlipPhase, FlipReducer, FlipState};
use super::gateway::{CardEvent, ClickEvent, ClickOutcome};
use super::model::{CardModel, FaceSelector, Orientation, Side};
use super::render::ViewRenderer;
use super::state::{CardState, StateField};
use super::surface::Surface;

/// Tunables the widget takes from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSettings {
    pub motion: FlipMotion,
    /// Stacking order while flipping, so the card overlaps its siblings.
    pub raised_z_index: i32,
    pub rest_z_index: i32,
    pub long_text_threshold: usize,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            motion: FlipMotion::default(),
            raised_z_index: 9000,
            rest_z_index: 0,
            long_text_threshold: DEFAULT_LONG_TEXT_THRESHOLD,
        }
    }
}

pub struct Flashcard<S: Surface> {
    attributes: AttributeMap,
    state: CardState,
    flip: FlipState,
    settings: CardSettings,
    classifier: Box<dyn ContentClassifier>,
    /// Present only while attached.
    surface: Option<S>,
    frame_requested: bool,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

impl<S: Surface> Flashcard<S> {
    pub fn new(model: Option<CardModel>, settings: CardSettings) -> Self {
        Self {
            attributes: AttributeMap::default(),
            state: CardState::with_model(model),
            flip: FlipState::default(),
            settings,
            classifier: Box::new(DataController::new(settings.long_text_threshold)),
            surface: None,
            frame_requested: false,
        }
    }

    /// Replace the content classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn ContentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Attach to a rendering surface and draw the current state.
    pub fn connect(&mut self, mut surface: S) {
        let orientation = self.orientation();
        // A surface detached mid-flip may still carry a partial turn.
        surface.set_transform(self.flip.animation.transform());
        surface.set_z_index(self.settings.rest_z_index);
        self.surface = Some(surface);
        self.state.connected = true;
        self.state.listening = true;
        self.render(|renderer, state| {
            renderer.update_visibility(orientation);
            renderer.apply(state, StateField::All);
        });
        tracing::info!(face = %orientation, "flashcard attached");
    }

    /// Detach from the surface, abandoning any flip in progress.
    pub fn disconnect(&mut self) -> Option<S> {
        if !self.flip.is_idle() {
            tracing::debug!(phase = ?self.flip.phase, "detached mid-flip");
        }
        dispatch_mvi!(self, flip, FlipReducer, FlipIntent::Reset);
        self.frame_requested = false;
        self.state.listening = false;
        self.state.connected = false;
        tracing::info!("flashcard detached");
        self.surface.take()
    }

    // ── Attributes ─────────────────────────────────────────────────────

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Host-side attribute write.
    ///
    /// Only a malformed `value` is reported; in that case the attribute,
    /// the model and the view all keep their previous contents.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), FlashcardError> {
        let previous = self.attributes.set(name, value);
        let Ok(observed) = name.parse::<AttributeName>() else {
            let error = FlashcardError::configuration(name, "not an observed attribute");
            tracing::warn!(%error, "ignoring attribute");
            return Ok(());
        };
        if let Err(error) = self.attribute_changed(observed) {
            self.attributes.restore(name, previous);
            return Err(error);
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, name: &str) {
        if self.attributes.remove(name).is_none() {
            return;
        }
        if let Ok(observed) = name.parse::<AttributeName>() {
            // Absent `value` keeps the current model, so this cannot fail.
            let _ = self.attribute_changed(observed);
        }
    }

    fn attribute_changed(&mut self, name: AttributeName) -> Result<(), FlashcardError> {
        match name {
            AttributeName::Value => self.sync_value(),
            other => {
                self.sync(other);
                Ok(())
            }
        }
    }

    /// Two-phase property write: mirror into the attribute first and let
    /// the change notification do the work; sync directly only when the
    /// attribute already holds `value`.
    fn mirror(&mut self, name: AttributeName, value: &str) {
        if self.attributes.get(name.as_str()) != Some(value) {
            self.attributes.set(name.as_str(), value);
        }
        // Either the attribute change notification or the direct path.
        self.sync(name);
    }

    /// Copy one attribute into state, rendering only on an actual change.
    fn sync(&mut self, name: AttributeName) {
        let raw = self.attributes.get(name.as_str()).map(str::to_string);
        match name {
            AttributeName::Front | AttributeName::Back => {
                let selector = raw.as_deref().map(FaceSelector::parse);
                let (side, changed) = if name == AttributeName::Front {
                    (Side::Front, self.state.set_front(selector))
                } else {
                    (Side::Back, self.state.set_back(selector))
                };
                if changed {
                    self.render(|renderer, state| renderer.render_side(state, side));
                }
            }
            AttributeName::Face => {
                let Some(raw) = raw else {
                    return;
                };
                match raw.parse::<Orientation>() {
                    Ok(face) => {
                        if self.state.set_face(face) {
                            tracing::debug!(%face, "face changed");
                            self.render(|renderer, state| renderer.apply(state, StateField::Face));
                        }
                    }
                    Err(reason) => {
                        let error = FlashcardError::configuration(name.as_str(), reason);
                        tracing::warn!(%error, "ignoring face value");
                    }
                }
            }
            AttributeName::Hidden => {
                if self.state.set_hidden(parse_bool_attribute(raw.as_deref())) {
                    self.render(|renderer, state| renderer.apply(state, StateField::Hidden));
                }
            }
            AttributeName::Flippable => {
                // Only gates future clicks.
                self.state.set_flippable(parse_bool_attribute(raw.as_deref()));
            }
            AttributeName::Value => {
                if let Err(error) = self.sync_value() {
                    tracing::warn!(%error, "value attribute rejected");
                }
            }
        }
    }

    fn sync_value(&mut self) -> Result<(), FlashcardError> {
        let Some(raw) = self.attributes.get(AttributeName::Value.as_str()) else {
            return Ok(());
        };
        let model = CardModel::from_json(raw)?;
        self.apply_model(model);
        Ok(())
    }

    fn apply_model(&mut self, model: CardModel) {
        if self.state.set_model(model) {
            self.render(|renderer, state| renderer.render_both(state));
        }
    }

    // ── Properties ─────────────────────────────────────────────────────

    pub fn front(&self) -> Option<&str> {
        self.attributes.get(AttributeName::Front.as_str())
    }

    pub fn set_front(&mut self, selector: &str) {
        self.mirror(AttributeName::Front, selector);
    }

    pub fn back(&self) -> Option<&str> {
        self.attributes.get(AttributeName::Back.as_str())
    }

    pub fn set_back(&mut self, selector: &str) {
        self.mirror(AttributeName::Back, selector);
    }

    pub fn face(&self) -> Option<Orientation> {
        self.state.face
    }

    /// Effective orientation; a card without a `face` shows its front.
    pub fn orientation(&self) -> Orientation {
        self.state.face.unwrap_or_default()
    }

    pub fn set_face(&mut self, face: Orientation) {
        self.mirror(AttributeName::Face, face.as_str());
    }

    pub fn hidden(&self) -> bool {
        self.state.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.mirror(AttributeName::Hidden, bool_attribute(hidden));
    }

    pub fn flippable(&self) -> bool {
        self.state.flippable
    }

    pub fn set_flippable(&mut self, flippable: bool) {
        self.mirror(AttributeName::Flippable, bool_attribute(flippable));
    }

    pub fn value(&self) -> Option<&CardModel> {
        self.state.model.as_ref()
    }

    /// Replace the model directly; no attribute mirrors an object.
    pub fn set_value(&mut self, model: CardModel) {
        self.apply_model(model);
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    // ── Flip sequencer ─────────────────────────────────────────────────

    pub fn flip_state(&self) -> &FlipState {
        &self.flip
    }

    pub fn is_flipping(&self) -> bool {
        self.flip.is_flipping()
    }

    /// Start a flip. Returns false (and does nothing) when detached,
    /// not flippable, or already flipping.
    pub fn flip(&mut self) -> bool {
        if !self.state.connected || !self.state.flippable || self.flip.is_flipping() {
            tracing::debug!(
                connected = self.state.connected,
                flippable = self.state.flippable,
                flipping = self.flip.is_flipping(),
                "flip request ignored"
            );
            return false;
        }

        dispatch_mvi!(
            self,
            flip,
            FlipReducer,
            FlipIntent::Start {
                motion: self.settings.motion
            }
        );
        self.state.listening = false;
        let raised = self.settings.raised_z_index;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_z_index(raised);
        }
        self.frame_requested = true;
        tracing::debug!(from = %self.orientation(), "flip started");
        true
    }

    /// True when the widget wants [`Flashcard::on_animation_frame`] called
    /// on the next display frame.
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Advance the flip by one tick.
    pub fn on_animation_frame(&mut self) {
        if !self.frame_requested || !self.state.connected {
            return;
        }
        self.frame_requested = false;

        let before = self.flip.phase;
        dispatch_mvi!(self, flip, FlipReducer, FlipIntent::Tick);
        let after = self.flip.phase;

        let transform = self.flip.animation.transform();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_transform(transform);
        }

        match (before, after) {
            (FlipPhase::Rising, FlipPhase::Swapped) => {
                let next = self.orientation().toggled();
                tracing::debug!(face = %next, "quarter turn, swapping face");
                self.set_face(next);
                self.frame_requested = true;
            }
            (_, FlipPhase::Idle) => {
                self.state.listening = true;
                let rest = self.settings.rest_z_index;
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_z_index(rest);
                }
                tracing::debug!(face = %self.orientation(), "flip finished");
            }
            _ => self.frame_requested = true,
        }
    }

    // ── Event gateway ──────────────────────────────────────────────────

    /// Handle a click on the container.
    ///
    /// Returns `None` while the listener is detached (before attach and
    /// during a flip). Otherwise the notification is always produced,
    /// whether or not a flip started.
    pub fn on_click(&mut self, event: &mut ClickEvent) -> Option<ClickOutcome> {
        if !self.state.listening {
            return None;
        }
        event.stop_propagation();
        let flipped = self.state.flippable && self.flip();
        let detail = self.state.model.clone().unwrap_or_default();
        Some(ClickOutcome {
            flipped,
            event: CardEvent::activate(detail),
        })
    }

    fn render(&mut self, update: impl FnOnce(&mut ViewRenderer<'_, S>, &CardState)) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let mut renderer = ViewRenderer::new(surface, self.classifier.as_ref());
        update(&mut renderer, &self.state);
    }
}
