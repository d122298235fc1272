//! View renderer: decides which sub-view each face shows.

use crate::error::FlashcardError;

use super::classifier::{classify, ContentClassifier, ContentKind};
use super::model::{CardModel, FaceSelector, Orientation, Side};
use super::state::{CardState, StateField};
use super::flip::HALF_TURN_DEG;
use super::surface::{Slot, Surface, Transform};

/// Borrowed view over what a render pass needs.
pub struct ViewRenderer<'a, S: Surface> {
    surface: &'a mut S,
    classifier: &'a dyn ContentClassifier,
}

impl<'a, S: Surface> ViewRenderer<'a, S> {
    pub fn new(surface: &'a mut S, classifier: &'a dyn ContentClassifier) -> Self {
        Self {
            surface,
            classifier,
        }
    }

    /// Run the update matching `field`.
    ///
    /// Content work is skipped while there is no model.
    pub fn apply(&mut self, state: &CardState, field: StateField) {
        match field {
            StateField::Face => self.update_face(state),
            StateField::Hidden => self.update_hidden(state.hidden),
            StateField::All => {
                self.render_both(state);
                self.update_hidden(state.hidden);
            }
        }
    }

    /// Show the side facing the viewer and refresh its content; side
    /// visibility follows the orientation even without a model.
    pub fn update_face(&mut self, state: &CardState) {
        let orientation = state.face.unwrap_or_default();
        self.update_visibility(orientation);
        let Some(model) = state.model.as_ref() else {
            return;
        };
        let side = orientation.visible_side();
        self.render_face(model, side, selector_for(state, side));
    }

    /// Re-classify and re-render both faces, then fix side visibility.
    pub fn render_both(&mut self, state: &CardState) {
        let Some(model) = state.model.as_ref() else {
            return;
        };
        self.render_face(model, Side::Front, state.front.as_ref());
        self.render_face(model, Side::Back, state.back.as_ref());
        self.update_visibility(state.face.unwrap_or_default());
    }

    /// Re-render one face's content without touching side visibility.
    pub fn render_side(&mut self, state: &CardState, side: Side) {
        if let Some(model) = state.model.as_ref() {
            self.render_face(model, side, selector_for(state, side));
        }
    }

    /// Show the side facing the viewer; the far side is hidden and turned
    /// away so it reads correctly once the card has rotated.
    pub fn update_visibility(&mut self, orientation: Orientation) {
        let shown = orientation.visible_side();
        let far = shown.opposite();
        self.surface.set_hidden(Slot::side(far), true);
        self.surface
            .set_side_transform(far, Transform::rotated(HALF_TURN_DEG));
        self.surface.set_side_transform(shown, Transform::IDENTITY);
        self.surface.set_hidden(Slot::side(shown), false);
    }

    pub fn update_hidden(&mut self, hidden: bool) {
        self.surface.set_hidden(Slot::Container, hidden);
    }

    /// Resolve, classify and show exactly one sub-view on `side`.
    ///
    /// Returns the kind shown, or `None` when the face renders empty.
    pub fn render_face(
        &mut self,
        model: &CardModel,
        side: Side,
        selector: Option<&FaceSelector>,
    ) -> Option<ContentKind> {
        let value = selector.and_then(|selector| selector.resolve(model));
        let kind = classify(self.classifier, value.as_deref());

        let shown = match (kind, value.as_deref()) {
            (Some(ContentKind::Image), Some(url)) => {
                self.surface.set_source(Slot::image(side), url);
                Some(Slot::image(side))
            }
            (Some(ContentKind::LongText), Some(text)) => {
                self.surface.set_text(Slot::description(side), text);
                Some(Slot::description(side))
            }
            (Some(ContentKind::ShortText), Some(text)) => {
                self.surface.set_text(Slot::name(side), text);
                Some(Slot::name(side))
            }
            _ => {
                let error = FlashcardError::ContentTypeUnresolved { side };
                tracing::warn!(
                    error = %error,
                    selector = ?selector,
                    "rendering empty face"
                );
                None
            }
        };

        for slot in [Slot::image(side), Slot::name(side), Slot::description(side)] {
            self.surface.set_hidden(slot, Some(slot) != shown);
        }

        tracing::debug!(%side, kind = ?kind, "face rendered");
        kind
    }
}

fn selector_for(state: &CardState, side: Side) -> Option<&FaceSelector> {
    match side {
        Side::Front => state.front.as_ref(),
        Side::Back => state.back.as_ref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::classifier::DataController;
    use crate::card::surface::ViewTree;

    fn render(value: &str) -> (ViewTree, Option<ContentKind>) {
        let mut tree = ViewTree::new();
        let classifier = DataController::default();
        let model = CardModel::new().with("name", value);
        let kind = ViewRenderer::new(&mut tree, &classifier).render_face(
            &model,
            Side::Front,
            Some(&FaceSelector::parse("name")),
        );
        (tree, kind)
    }

    #[test]
    fn exactly_one_sub_view_is_visible() {
        for value in ["https://x/y.png", "a fairly long description text", "Dog"] {
            let (tree, kind) = render(value);
            assert!(kind.is_some());
            assert_eq!(tree.visible_sub_views(Side::Front).len(), 1);
        }
    }

    #[test]
    fn unresolved_face_hides_every_sub_view() {
        let (tree, kind) = render("");
        assert_eq!(kind, None);
        assert!(tree.visible_sub_views(Side::Front).is_empty());
    }

    #[test]
    fn missing_selector_renders_empty() {
        let mut tree = ViewTree::new();
        let classifier = DataController::default();
        let model = CardModel::new().with("name", "Dog");
        let kind =
            ViewRenderer::new(&mut tree, &classifier).render_face(&model, Side::Back, None);
        assert_eq!(kind, None);
        assert!(tree.visible_sub_views(Side::Back).is_empty());
    }

    #[test]
    fn update_visibility_hides_the_far_side() {
        let mut tree = ViewTree::new();
        let classifier = DataController::default();
        let mut renderer = ViewRenderer::new(&mut tree, &classifier);
        renderer.update_visibility(Orientation::Down);
        assert_eq!(tree.visible_side(), Some(Side::Back));
    }
}
