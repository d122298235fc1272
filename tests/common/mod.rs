//! Shared test helpers.

#![allow(dead_code)]

use flashcard::card::{CardSettings, Flashcard, Orientation, Side, Slot, ViewTree};

pub const DOG: &str = r#"{"name":"Dog","image":"http://a/d.png","description":"A domesticated descendant of the wolf."}"#;

/// Unattached card with the dog model and the given selectors.
pub fn card(front: &str, back: &str) -> Flashcard<ViewTree> {
    let mut card = Flashcard::new(None, CardSettings::default());
    card.set_attribute("value", DOG).expect("valid model");
    card.set_front(front);
    card.set_back(back);
    card.set_face(Orientation::Up);
    card.set_flippable(true);
    card
}

/// Attached card showing `name` on the front and `image` on the back.
pub fn connected() -> Flashcard<ViewTree> {
    let mut card = card("name", "image");
    card.connect(ViewTree::new());
    card
}

pub fn tree(card: &Flashcard<ViewTree>) -> &ViewTree {
    card.surface().expect("card is attached")
}

/// Drive frames until the card stops asking, returning how many ran.
pub fn run_frames(card: &mut Flashcard<ViewTree>) -> usize {
    let mut frames = 0;
    while card.frame_requested() {
        card.on_animation_frame();
        frames += 1;
        assert!(frames < 1000, "flip never finished");
    }
    frames
}

pub fn visible_slots(card: &Flashcard<ViewTree>, side: Side) -> Vec<Slot> {
    tree(card).visible_sub_views(side)
}
