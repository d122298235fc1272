use crate::card::{Side, Slot, ViewTree};
use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::input::HIDE_KEY;
use crate::ui::layout::{animated_card_rect, card_rect, layout_regions};
use crate::ui::theme::{
    CARD_BORDER, CARD_RAISED, HEADER_SEPARATOR, HEADER_TEXT, IMAGE_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.card()), header);
    frame.render_widget(Clear, body);

    if let Some(tree) = app.card().surface() {
        draw_card(frame, body, tree);
    }

    if let Some(error) = app.last_error() {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        ));
        let row = Rect {
            height: body.height.min(1),
            ..body
        };
        frame.render_widget(Paragraph::new(line), row);
    }

    frame.render_widget(
        footer_widget(footer.width, app.last_event(), app.events_received()),
        footer,
    );
}

fn draw_card(frame: &mut Frame<'_>, body: Rect, tree: &ViewTree) {
    let rest = card_rect(body);
    if tree.is_hidden(Slot::Container) {
        let hint = Paragraph::new(Line::from(Span::styled(
            hidden_hint(),
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rest);
        return;
    }

    let transform = tree.transform();
    let area = animated_card_rect(
        rest,
        transform.rotate_y_deg,
        transform.scale,
        transform.translate_x,
    )
    .intersection(body);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border = if tree.z_index() > 0 {
        CARD_RAISED
    } else {
        CARD_BORDER
    };
    let side = tree.visible_side();
    let title = match side {
        Some(Side::Front) => " front ",
        Some(Side::Back) => " back ",
        None => "",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let lines = side.map(|side| face_lines(tree, side)).unwrap_or_default();
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn hidden_hint() -> String {
    format!("(hidden, press {HIDE_KEY})")
}

/// Text for the one visible sub-view of `side`.
fn face_lines(tree: &ViewTree, side: Side) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from("")];
    for slot in tree.visible_sub_views(side) {
        if slot == Slot::image(side) {
            lines.push(Line::from(Span::styled(
                "[image]",
                Style::default().fg(IMAGE_TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                tree.source(slot).to_string(),
                Style::default().fg(IMAGE_TEXT),
            )));
        } else if slot == Slot::name(side) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                tree.text(slot).to_string(),
                text_style.add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                tree.text(slot).to_string(),
                text_style,
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_hint_names_the_hide_binding() {
        assert_eq!(hidden_hint(), "(hidden, press h)");
        assert!(hidden_hint().contains(HIDE_KEY));
    }
}
