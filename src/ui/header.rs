use crate::card::{Flashcard, ViewTree};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Attribute summary line above the card.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, card: &Flashcard<ViewTree>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, marker_style) = if card.flippable() {
            ("●", Style::default().fg(STATUS_OK))
        } else {
            ("●", Style::default().fg(STATUS_ERROR))
        };
        let attr = |name: &str| card.attribute(name).unwrap_or("-").to_string();

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, marker_style),
            Span::styled("  ", text_style),
            Span::styled(format!("front: {}", attr("front")), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("back: {}", attr("back")), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("face: {}", card.orientation()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("flippable: {}", card.flippable()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
