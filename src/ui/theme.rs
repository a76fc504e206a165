//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── cards ──────────────────────────────────────────────────

    /// Border style for a card drawn at `opacity`.
    pub fn card_border_style(opacity: f32) -> Style {
        if opacity >= 1.0 {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn card_title_style(opacity: f32) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if opacity >= 1.0 {
            style.fg(Color::Cyan)
        } else {
            style.fg(Color::DarkGray)
        }
    }

    pub fn card_text_style(opacity: f32) -> Style {
        if opacity >= 1.0 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn image_style(opacity: f32) -> Style {
        if opacity >= 1.0 {
            Style::default().fg(Color::Blue).bg(Color::Black)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stage_border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
