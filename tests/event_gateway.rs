mod common;

use common::{connected, run_frames};
use flashcard::card::{
    CardModel, CardSettings, ClickEvent, Flashcard, Orientation, ViewTree, ACTIVATE_EVENT,
};

#[test]
fn click_flips_and_notifies_with_the_model() {
    let mut card = connected();
    let mut click = ClickEvent::new();

    let outcome = card.on_click(&mut click).expect("listener attached");
    assert!(outcome.flipped);
    assert_eq!(outcome.event.name, ACTIVATE_EVENT);
    assert_eq!(outcome.event.detail.text("name").as_deref(), Some("Dog"));
    assert!(click.propagation_stopped());

    run_frames(&mut card);
    assert_eq!(card.orientation(), Orientation::Down);
}

#[test]
fn non_flippable_card_still_notifies() {
    let mut card = connected();
    card.set_flippable(false);
    let mut click = ClickEvent::new();

    let outcome = card.on_click(&mut click).expect("listener attached");
    assert!(!outcome.flipped);
    assert_eq!(Some(&outcome.event.detail), card.value());
    assert!(click.propagation_stopped());
    assert!(!card.frame_requested());
    assert_eq!(card.orientation(), Orientation::Up);
}

#[test]
fn click_before_attach_is_not_handled() {
    let mut card = common::card("name", "image");
    let mut click = ClickEvent::new();
    assert!(card.on_click(&mut click).is_none());
    assert!(!click.propagation_stopped());
}

#[test]
fn click_after_detach_is_not_handled() {
    let mut card = connected();
    card.disconnect();
    assert!(card.on_click(&mut ClickEvent::new()).is_none());
}

#[test]
fn click_during_flip_is_not_handled() {
    let mut card = connected();
    card.flip();
    let mut click = ClickEvent::new();
    assert!(card.on_click(&mut click).is_none());
    assert!(!click.propagation_stopped());
}

#[test]
fn click_without_model_sends_an_empty_detail() {
    let mut card = Flashcard::<ViewTree>::new(None, CardSettings::default());
    card.connect(ViewTree::new());
    let outcome = card.on_click(&mut ClickEvent::new()).expect("listener attached");
    assert!(!outcome.flipped);
    assert_eq!(outcome.event.detail, CardModel::new());
}
