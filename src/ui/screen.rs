//! Full-screen composition: heading, stage, buttons, instructions, status bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

use crate::app::state::AppState;

use super::layout::AppLayout;
use super::stage::{card_spacing, StageWidget};
use super::theme::Theme;

const HEADING: &str = "Card Swiper Showcase";
const INSTRUCTIONS: &str = "Swipe cards, use the buttons, or navigate with arrow keys.";

/// Draw the whole UI for the current state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());
    let buf = frame.buffer_mut();

    Paragraph::new(Line::from(Span::styled(HEADING, Theme::heading_style())))
        .centered()
        .render(layout.heading_area, buf);

    let stage_inner = Block::default().borders(Borders::ALL).inner(layout.stage_area);
    let drag_columns = state.gesture.drag_delta() / state.config.units_per_column.max(1);
    StageWidget {
        carousel: &state.carousel,
        slide_columns: state.transition.column_offset(card_spacing(stage_inner)),
        drag_columns,
    }
    .render(layout.stage_area, buf);

    Button { label: "◀ Prev" }.render(layout.prev_button, buf);
    Button { label: "Next ▶" }.render(layout.next_button, buf);

    Paragraph::new(Line::from(Span::styled(INSTRUCTIONS, Theme::muted_style())))
        .centered()
        .render(layout.instructions_area, buf);

    let position = match state.carousel.active_card() {
        Some(card) => format!(
            " {} · {} / {} ",
            card.title,
            state.carousel.active_index() + 1,
            state.carousel.len()
        ),
        None => " 0 / 0 ".to_string(),
    };
    let status = format!("{position}| {}", state.config.status_bar_hint());
    Paragraph::new(status)
        .style(Theme::status_bar_style())
        .render(layout.status_area, buf);
}

/// Outlined push button with a centred label.
struct Button {
    label: &'static str,
}

impl Widget for Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::stage_border_style());
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Span::styled(self.label, Theme::button_style()))
            .centered()
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::deck;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_chrome_and_active_card() {
        let state = AppState::new(deck::builtin(), AppConfig::default());
        let text = screen_text(&state, 100, 32);
        assert!(text.contains(HEADING));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));
        assert!(text.contains(INSTRUCTIONS));
        assert!(text.contains("Serene Abstract · 1 / 3"));
    }

    #[test]
    fn empty_deck_renders() {
        let state = AppState::new(Vec::new(), AppConfig::default());
        let text = screen_text(&state, 80, 24);
        assert!(text.contains("No cards"));
        assert!(text.contains(" 0 / 0 "));
    }
}
