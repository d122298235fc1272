use crate::card::Orientation;
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Shows or hides the card; the hidden-card hint names it.
pub const HIDE_KEY: char = 'h';

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.click(),
        KeyCode::Char('f') => app.toggle_flippable(),
        KeyCode::Char(HIDE_KEY) => app.toggle_hidden(),
        KeyCode::Char('u') => app.set_face(Orientation::Up),
        KeyCode::Char('d') => app.set_face(Orientation::Down),
        KeyCode::Char('r') => app.reload_model(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click_at(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
