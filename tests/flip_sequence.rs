mod common;

use common::{connected, run_frames, tree};
use flashcard::card::{
    AnimationState, CardSettings, ClickEvent, FlipMotion, FlipPhase, Flashcard, Orientation,
    Side, Transform, ViewTree,
};

#[test]
fn flip_runs_twelve_frames_and_lands_face_down() {
    let mut card = connected();
    assert!(card.flip());
    assert_eq!(run_frames(&mut card), 12);

    assert_eq!(card.orientation(), Orientation::Down);
    assert_eq!(card.attribute("face"), Some("down"));
    assert_eq!(tree(&card).visible_side(), Some(Side::Back));
    assert_eq!(tree(&card).transform(), Transform::IDENTITY);
    assert_eq!(tree(&card).z_index(), 0);
    assert!(!card.is_flipping());
    assert!(card.flip_state().animation.is_at_rest());
}

#[test]
fn face_swaps_exactly_at_the_quarter_turn() {
    let mut card = connected();
    card.flip();

    for frame in 1..12u32 {
        card.on_animation_frame();
        let rotation = tree(&card).transform().rotate_y_deg;
        assert_eq!(rotation, frame * 15);
        let expected = if rotation < 90 {
            Orientation::Up
        } else {
            Orientation::Down
        };
        assert_eq!(card.orientation(), expected, "frame {frame}");
        assert_eq!(tree(&card).visible_side(), Some(expected.visible_side()));
    }
}

#[test]
fn swapped_phase_is_seen_once() {
    let mut card = connected();
    card.flip();
    let mut phases = Vec::new();
    while card.frame_requested() {
        card.on_animation_frame();
        phases.push(card.flip_state().phase);
    }
    let swapped = phases
        .iter()
        .filter(|phase| **phase == FlipPhase::Swapped)
        .count();
    assert_eq!(swapped, 1);
    assert_eq!(phases[5], FlipPhase::Swapped);
    assert_eq!(phases.last(), Some(&FlipPhase::Idle));
}

#[test]
fn depth_grows_then_shrinks() {
    let mut card = connected();
    card.flip();
    for _ in 0..6 {
        card.on_animation_frame();
    }
    let peak = tree(&card).transform();
    assert!(peak.scale > 1.0);
    assert!(peak.translate_x < 0.0);
    assert_eq!(card.flip_state().animation.depth, 6);

    for _ in 0..5 {
        card.on_animation_frame();
    }
    assert_eq!(card.flip_state().animation.depth, 1);
}

#[test]
fn two_flips_return_to_the_start() {
    let mut card = connected();
    card.flip();
    run_frames(&mut card);
    card.flip();
    run_frames(&mut card);

    assert_eq!(card.orientation(), Orientation::Up);
    assert_eq!(tree(&card).visible_side(), Some(Side::Front));
    assert_eq!(card.flip_state().animation, AnimationState::REST);
    assert_eq!(tree(&card).transform(), Transform::IDENTITY);
}

#[test]
fn flip_is_ignored_while_flipping() {
    let mut card = connected();
    assert!(card.flip());
    card.on_animation_frame();
    card.on_animation_frame();
    let state = *card.flip_state();

    assert!(!card.flip());
    assert_eq!(*card.flip_state(), state);
    assert_eq!(run_frames(&mut card), 10);
    assert_eq!(card.orientation(), Orientation::Down);
}

#[test]
fn flip_needs_flippable() {
    let mut card = connected();
    card.set_flippable(false);
    assert!(!card.flip());
    assert!(!card.frame_requested());
    assert_eq!(card.orientation(), Orientation::Up);
}

#[test]
fn flip_needs_a_surface() {
    let mut card = common::card("name", "image");
    assert!(!card.flip());
    assert!(!card.frame_requested());
}

#[test]
fn card_is_raised_while_flipping() {
    let mut card = connected();
    card.flip();
    assert_eq!(tree(&card).z_index(), 9000);
    card.on_animation_frame();
    assert_eq!(tree(&card).z_index(), 9000);
    run_frames(&mut card);
    assert_eq!(tree(&card).z_index(), 0);
}

#[test]
fn clicks_are_ignored_until_the_flip_finishes() {
    let mut card = connected();
    assert!(card.on_click(&mut ClickEvent::new()).is_some());
    assert!(card.is_flipping());

    card.on_animation_frame();
    assert!(card.on_click(&mut ClickEvent::new()).is_none());

    run_frames(&mut card);
    assert!(card.on_click(&mut ClickEvent::new()).is_some());
}

#[test]
fn detaching_mid_flip_resets_the_sequencer() {
    let mut card = connected();
    card.flip();
    for _ in 0..3 {
        card.on_animation_frame();
    }

    let surface = card.disconnect().expect("was attached");
    assert!(!card.frame_requested());
    assert!(!card.is_flipping());
    assert_eq!(card.flip_state().phase, FlipPhase::Idle);
    assert_eq!(surface.transform().rotate_y_deg, 45);

    card.on_animation_frame();
    assert!(card.surface().is_none());

    card.connect(surface);
    assert_eq!(tree(&card).transform(), Transform::IDENTITY);
    assert_eq!(tree(&card).z_index(), 0);
    assert_eq!(card.orientation(), Orientation::Up);
    assert!(card.flip());
    run_frames(&mut card);
    assert_eq!(card.orientation(), Orientation::Down);
}

#[test]
fn motion_without_depth_only_rotates() {
    let settings = CardSettings {
        motion: FlipMotion {
            degrees_per_tick: 30,
            depth_effect: false,
            ..FlipMotion::default()
        },
        ..CardSettings::default()
    };
    let mut card = Flashcard::<ViewTree>::new(None, settings);
    card.set_attribute("value", common::DOG).unwrap();
    card.set_flippable(true);
    card.connect(ViewTree::new());

    card.flip();
    card.on_animation_frame();
    let transform = tree(&card).transform();
    assert_eq!(transform.rotate_y_deg, 30);
    assert_eq!(transform.scale, 1.0);
    assert_eq!(transform.translate_x, 0.0);

    assert_eq!(run_frames(&mut card), 5);
    assert_eq!(card.orientation(), Orientation::Down);
}

#[test]
fn uneven_step_still_swaps_at_the_quarter_turn() {
    let settings = CardSettings {
        motion: FlipMotion {
            degrees_per_tick: 40,
            ..FlipMotion::default()
        },
        ..CardSettings::default()
    };
    let mut card = Flashcard::<ViewTree>::new(None, settings);
    card.set_attribute("value", common::DOG).unwrap();
    card.set_flippable(true);
    card.connect(ViewTree::new());
    card.flip();

    let mut seen = Vec::new();
    while card.frame_requested() {
        card.on_animation_frame();
        seen.push((card.flip_state().animation.rotation_deg, card.orientation()));
    }

    assert_eq!(
        seen,
        vec![
            (40, Orientation::Up),
            (80, Orientation::Up),
            (90, Orientation::Down),
            (130, Orientation::Down),
            (170, Orientation::Down),
            (0, Orientation::Down),
        ]
    );
    assert_eq!(tree(&card).transform(), Transform::IDENTITY);
}
