//! Layout helpers — split the terminal area into regions.
//!
//! The input handler recomputes the same layout to hit-test mouse events,
//! so everything clickable is derived from here.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const BUTTON_WIDTH: u16 = 12;
const BUTTON_GAP: u16 = 6;

/// Primary screen layout.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub heading_area: Rect,
    /// Region where cards are drawn and drags begin.
    pub stage_area: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub instructions_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // heading + spacer
                Constraint::Min(5),    // stage (takes all remaining space)
                Constraint::Length(3), // buttons
                Constraint::Length(1), // instructions
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let buttons = chunks[2];
        let total = BUTTON_WIDTH * 2 + BUTTON_GAP;
        let left = buttons.x + buttons.width.saturating_sub(total) / 2;
        let width = BUTTON_WIDTH.min(buttons.width);
        let prev_button = Rect::new(left, buttons.y, width, buttons.height);
        let next_button = Rect::new(
            left.saturating_add(BUTTON_WIDTH + BUTTON_GAP),
            buttons.y,
            width,
            buttons.height,
        )
        .intersection(buttons);

        Self {
            heading_area: Rect::new(chunks[0].x, chunks[0].y, chunks[0].width, 1),
            stage_area: chunks[1],
            prev_button,
            next_button,
            instructions_area: chunks[3],
            status_area: chunks[4],
        }
    }
}

/// True if the terminal cell (`col`, `row`) lies inside `area`.
pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
