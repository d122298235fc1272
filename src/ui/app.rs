use crate::card::{CardEvent, ClickEvent, Flashcard, Orientation, ViewTree};
use crate::ui::layout::{body_rect, card_rect, contains};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal host state around a single card.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    frame_interval: Duration,
    card: Flashcard<ViewTree>,
    last_event: Option<CardEvent>,
    events_received: u64,
    last_error: Option<String>,
    /// File the model was read from, for reloads.
    model_source: Option<PathBuf>,
}

impl App {
    /// `card` should already be attached to its surface.
    pub fn new(card: Flashcard<ViewTree>, frame_interval: Duration) -> Self {
        Self {
            should_quit: false,
            size: None,
            frame_interval,
            card,
            last_event: None,
            events_received: 0,
            last_error: None,
            model_source: None,
        }
    }

    pub fn with_model_source(mut self, path: Option<PathBuf>) -> Self {
        self.model_source = path;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn card(&self) -> &Flashcard<ViewTree> {
        &self.card
    }

    pub fn last_event(&self) -> Option<&CardEvent> {
        self.last_event.as_ref()
    }

    pub fn events_received(&self) -> u64 {
        self.events_received
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// One display frame: advance the flip if it asked for a frame.
    pub fn on_tick(&mut self) {
        if self.card.frame_requested() {
            self.card.on_animation_frame();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Deliver a click to the card.
    pub fn click(&mut self) {
        let mut event = ClickEvent::new();
        if let Some(outcome) = self.card.on_click(&mut event) {
            tracing::debug!(
                event = outcome.event.name,
                flipped = outcome.flipped,
                "card notification"
            );
            self.events_received += 1;
            self.last_event = Some(outcome.event);
        }
    }

    /// Mouse click at a screen cell; only clicks on the card count.
    pub fn click_at(&mut self, col: u16, row: u16) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        if self.card.hidden() {
            return;
        }
        let screen = Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };
        if contains(card_rect(body_rect(screen)), col, row) {
            self.click();
        }
    }

    pub fn toggle_flippable(&mut self) {
        let flippable = !self.card.flippable();
        self.card.set_flippable(flippable);
    }

    pub fn toggle_hidden(&mut self) {
        let hidden = !self.card.hidden();
        self.card.set_hidden(hidden);
    }

    pub fn set_face(&mut self, face: Orientation) {
        if self.card.is_flipping() {
            return;
        }
        self.card.set_face(face);
    }

    /// Re-read the model file, if the model came from one.
    pub fn reload_model(&mut self) {
        let Some(path) = self.model_source.clone() else {
            return;
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => self.load_model(&raw),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "model reload failed");
                self.last_error = Some(format!("{}: {err}", path.display()));
            }
        }
    }

    /// Swap in a new model from JSON, keeping the old one on error.
    pub fn load_model(&mut self, raw: &str) {
        match self.card.set_attribute("value", raw) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "model rejected");
                self.last_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardModel, CardSettings};

    fn app() -> App {
        let model = CardModel::new().with("name", "Dog");
        let mut card = Flashcard::new(Some(model), CardSettings::default());
        card.set_front("name");
        card.set_back("name");
        card.set_face(Orientation::Up);
        card.set_flippable(true);
        card.connect(ViewTree::new());
        let mut app = App::new(card, Duration::from_millis(16));
        app.on_resize(100, 30);
        app
    }

    #[test]
    fn click_records_notification_and_starts_flip() {
        let mut app = app();
        app.click();
        assert_eq!(app.events_received(), 1);
        assert!(app.card().is_flipping());
    }

    #[test]
    fn ticks_run_the_flip_to_completion() {
        let mut app = app();
        app.click();
        for _ in 0..12 {
            app.on_tick();
        }
        assert!(!app.card().is_flipping());
        assert_eq!(app.card().orientation(), Orientation::Down);
    }

    #[test]
    fn click_outside_the_card_is_ignored() {
        let mut app = app();
        app.click_at(0, 0);
        assert_eq!(app.events_received(), 0);
        app.click_at(50, 15);
        assert_eq!(app.events_received(), 1);
    }

    #[test]
    fn bad_model_is_reported_and_kept_out() {
        let mut app = app();
        app.load_model("{bad");
        assert!(app.last_error().is_some());
        assert_eq!(app.card().value().and_then(|m| m.text("name")).as_deref(), Some("Dog"));
    }

    #[test]
    fn reload_reads_the_model_file_again() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"name":"Cat"}"#).unwrap();

        let mut app = app().with_model_source(Some(path.clone()));
        app.reload_model();
        assert_eq!(app.card().value().and_then(|m| m.text("name")).as_deref(), Some("Cat"));
        assert_eq!(app.card().surface().unwrap().text(crate::card::Slot::FrontName), "Cat");
    }
}
