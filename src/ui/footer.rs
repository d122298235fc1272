use crate::card::CardEvent;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, IMAGE_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const KEY_HINTS: &str = " space click · f flippable · h hide · u/d face · r reload · q quit";

/// Bottom bar: key hints until the card has sent a notification, then the
/// latest notification and its payload.
pub fn footer_widget(width: u16, last_event: Option<&CardEvent>, received: u64) -> Paragraph<'static> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let version = format!("v{} ", env!("CARGO_PKG_VERSION"));

    let mut spans = match last_event {
        Some(event) => vec![
            Span::styled(format!(" #{received} "), dim),
            Span::styled(event.name, Style::default().fg(IMAGE_TEXT)),
            Span::styled(format!(" {}", event.detail.to_json()), dim),
        ],
        None => vec![Span::styled(KEY_HINTS, dim)],
    };

    let inner = usize::from(width.saturating_sub(2));
    let budget = inner.saturating_sub(version.chars().count());
    let used = truncate_spans(&mut spans, budget);
    spans.push(Span::raw(" ".repeat(budget - used)));
    spans.push(Span::styled(version, dim));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Cut spans to at most `budget` characters, returning the width kept.
fn truncate_spans(spans: &mut Vec<Span<'static>>, budget: usize) -> usize {
    let mut used = 0;
    let mut kept = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        let room = budget - used;
        if room == 0 {
            break;
        }
        let len = span.content.chars().count();
        if len <= room {
            used += len;
            kept.push(span);
        } else {
            let text: String = span.content.chars().take(room).collect();
            used += room;
            kept.push(Span::styled(text, span.style));
        }
    }
    *spans = kept;
    used
}
