use ratatui::layout::Rect;

/// Card size at rest, in cells.
pub const CARD_WIDTH: u16 = 44;
pub const CARD_HEIGHT: u16 = 12;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where the card sits at rest inside `body`.
pub fn card_rect(body: Rect) -> Rect {
    centered_rect_by_size(body, CARD_WIDTH, CARD_HEIGHT)
}

/// The card's on-screen rect for a given animation frame.
///
/// Rotation narrows the card by |cos θ|, scale widens it and the
/// translation shifts it sideways. Callers clip the result to the body.
pub fn animated_card_rect(rest: Rect, rotate_deg: u32, scale: f32, translate_x: f32) -> Rect {
    const PX_PER_CELL: f32 = 2.0;
    let factor = (rotate_deg as f32).to_radians().cos().abs() * scale;
    let width = ((rest.width as f32 * factor).round() as u16).clamp(2, rest.width.saturating_mul(2).max(2));
    let center = rest.x as f32 + rest.width as f32 / 2.0 + translate_x / PX_PER_CELL;
    let x = (center - width as f32 / 2.0).max(0.0).round() as u16;
    Rect {
        x,
        y: rest.y,
        width,
        height: rest.height,
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        }
    }

    #[test]
    fn card_is_centered_in_body() {
        let body = body_rect(screen());
        let card = card_rect(body);
        assert_eq!(card.width, CARD_WIDTH);
        assert_eq!(card.x, (100 - CARD_WIDTH) / 2);
        assert!(contains(card, card.x, card.y));
        assert!(!contains(card, card.x + card.width, card.y));
    }

    #[test]
    fn quarter_turn_collapses_the_card() {
        let rest = card_rect(body_rect(screen()));
        let edge_on = animated_card_rect(rest, 90, 1.0, 0.0);
        assert_eq!(edge_on.width, 2);
        let flat = animated_card_rect(rest, 0, 1.0, 0.0);
        assert_eq!(flat, rest);
    }

    #[test]
    fn small_screens_clamp_the_card() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        };
        let card = card_rect(tiny);
        assert_eq!(card.width, 10);
        assert_eq!(card.height, 4);
    }
}
