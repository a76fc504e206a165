//! A single card: image placeholder on top, title, description and body below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::core::carousel::Card;

use super::theme::Theme;

pub struct CardWidget<'a> {
    pub card: &'a Card,
    pub opacity: f32,
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.opacity <= 0.0 || area.width < 4 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::card_border_style(self.opacity));
        let inner = block.inner(area);
        block.render(area, buf);

        // Picture takes a bit under half the card, like a 600×400 photo.
        let image_h = (inner.height * 2 / 5).max(1).min(inner.height);
        let image_area = Rect::new(inner.x, inner.y, inner.width, image_h);
        render_image_placeholder(self.card, self.opacity, image_area, buf);

        let text_area = Rect::new(
            inner.x.saturating_add(1),
            inner.y + image_h,
            inner.width.saturating_sub(2),
            inner.height - image_h,
        );
        if text_area.height == 0 || text_area.width == 0 {
            return;
        }

        let text_style = Theme::card_text_style(self.opacity);
        let lines = vec![
            Line::from(Span::styled(
                self.card.title.clone(),
                Theme::card_title_style(self.opacity),
            )),
            Line::from(Span::styled(self.card.description.clone(), text_style)),
            Line::raw(""),
            Line::from(Span::styled(
                format!(
                    "Explore more details about {}. This card offers unique insights and opportunities.",
                    self.card.title
                ),
                text_style,
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

/// Shaded block standing in for the card's picture, with its hint centred.
fn render_image_placeholder(card: &Card, opacity: f32, area: Rect, buf: &mut Buffer) {
    let style = Theme::image_style(opacity);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_symbol("░").set_style(style);
        }
    }

    let label = if card.hint.is_empty() {
        card.title.as_str()
    } else {
        card.hint.as_str()
    };
    let label = format!(" {label} ");
    let width = (label.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    buf.set_stringn(x, y, &label, width as usize, style);

    if area.height >= 3 && !card.image_url.is_empty() {
        let url = card
            .image_url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let width = (url.chars().count() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        buf.set_stringn(x, y + 1, url, width as usize, style.add_modifier(Modifier::DIM));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn draws_hint_title_and_description() {
        let cards = deck::builtin();
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        CardWidget {
            card: &cards[1],
            opacity: 1.0,
        }
        .render(area, &mut buf);

        let all: Vec<String> = (0..16).map(|y| row_text(&buf, y)).collect();
        assert!(all[0].starts_with('╭'));
        assert!(all.iter().any(|l| l.contains("city twilight")));
        assert!(all.iter().any(|l| l.contains("Urban Dreams")));
        assert!(all.iter().any(|l| l.contains("Dynamic cityscape at twilight.")));
    }

    #[test]
    fn invisible_card_draws_nothing() {
        let cards = deck::builtin();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        CardWidget {
            card: &cards[0],
            opacity: 0.0,
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
