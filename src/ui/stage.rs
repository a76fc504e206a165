//! The carousel stage — lays out every card by its placement and draws them
//! back to front.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::carousel::{Carousel, Position};

use super::card::CardWidget;
use super::placement::Placement;
use super::theme::Theme;

const MAX_CARD_WIDTH: u16 = 40;
const MAX_CARD_HEIGHT: u16 = 22;

/// Unscaled card size for a stage interior.
pub fn base_card_size(inner: Rect) -> (u16, u16) {
    let w = (inner.width * 9 / 20).clamp(1, MAX_CARD_WIDTH);
    let h = inner.height.clamp(1, MAX_CARD_HEIGHT);
    (w, h)
}

/// Horizontal distance between neighbouring card centres.
pub fn card_spacing(inner: Rect) -> u16 {
    let (w, _) = base_card_size(inner);
    (w as f32 * 0.6).round() as u16
}

/// Where a card with `placement` lands inside `inner`, clipped to it.
/// `shift` moves the card horizontally by whole columns.
pub fn card_rect(inner: Rect, placement: &Placement, shift: i32) -> Rect {
    let (base_w, base_h) = base_card_size(inner);
    let w = (base_w as f32 * placement.scale).round() as i32;
    let h = (base_h as f32 * placement.scale).round() as i32;

    let center_x = inner.x as i32
        + inner.width as i32 / 2
        + (placement.translate_x_pct / 100.0 * base_w as f32).round() as i32
        + shift;
    let center_y = inner.y as i32 + inner.height as i32 / 2 + placement.tilt_rows() as i32;

    let left = (center_x - w / 2).max(inner.x as i32);
    let top = (center_y - h / 2).max(inner.y as i32);
    let right = (center_x - w / 2 + w).min(inner.right() as i32);
    let bottom = (center_y - h / 2 + h).min(inner.bottom() as i32);
    if right <= left || bottom <= top {
        return Rect::new(inner.x, inner.y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

pub struct StageWidget<'a> {
    pub carousel: &'a Carousel,
    /// Whole-deck slide from the running transition, in columns.
    pub slide_columns: i32,
    /// How far the centred card follows an in-progress drag, in columns.
    pub drag_columns: i32,
}

impl<'a> Widget for StageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Swipeable cards ")
            .title_style(Theme::muted_style())
            .borders(Borders::ALL)
            .border_style(Theme::stage_border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.carousel.is_empty() {
            let y = inner.y + inner.height / 2;
            Paragraph::new(Line::from(Span::styled("No cards", Theme::muted_style())))
                .centered()
                .render(Rect::new(inner.x, y, inner.width, inner.height.min(1)), buf);
            return;
        }

        let mut visible: Vec<_> = self
            .carousel
            .positions()
            .map(|(card, position)| (card, position, Placement::for_position(position)))
            .filter(|(_, _, placement)| placement.is_visible())
            .collect();
        // Back to front; equal stack orders keep deck order.
        visible.sort_by_key(|(_, _, placement)| placement.stack_order);

        for (card, position, placement) in visible {
            let mut shift = self.slide_columns;
            if position == Position::Center {
                shift += self.drag_columns;
            }
            let rect = card_rect(inner, &placement, shift);
            CardWidget {
                card,
                opacity: placement.opacity,
            }
            .render(rect, buf);
        }
    }
}
