//! Carousel state — the ordered card list and the single active index.
//!
//! Every input path (keys, buttons, swipes) ends in [`Carousel::advance`].
//! Indices are kept in range by modular arithmetic, so nothing here can fail.

/// One card in the deck.  Immutable once the carousel is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Short phrase describing the image (shown in place of the picture).
    pub hint: String,
}

/// Which way a single advance step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next card (active index + 1).
    Forward,
    /// Previous card (active index − 1).
    Backward,
}

/// Where a card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Center,
    Left,
    Right,
    Hidden,
}

/// Fixed card list plus the active index.
#[derive(Debug, Clone)]
pub struct Carousel {
    cards: Vec<Card>,
    active: usize,
}

impl Carousel {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the centered card.  Always 0 for an empty deck.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.cards.get(self.active)
    }

    /// Step the active index one card, wrapping at both ends.
    /// A no-op on an empty deck.
    pub fn advance(&mut self, direction: Direction) {
        let n = self.cards.len();
        if n == 0 {
            return;
        }
        let previous = self.active;
        self.active = match direction {
            Direction::Forward => (self.active + 1) % n,
            Direction::Backward => (self.active + n - 1) % n,
        };
        tracing::debug!(?direction, from = previous, to = self.active, "advance");
    }

    /// Relative position of the card at `index`.
    ///
    /// The right neighbour is checked before the left one, so with two
    /// cards the non-active card is `Right`.
    pub fn position_of(&self, index: usize) -> Position {
        let n = self.cards.len();
        if index >= n {
            return Position::Hidden;
        }
        if index == self.active {
            Position::Center
        } else if index == (self.active + 1) % n {
            Position::Right
        } else if index == (self.active + n - 1) % n {
            Position::Left
        } else {
            Position::Hidden
        }
    }

    /// Every card with its current position, in deck order.
    pub fn positions(&self) -> impl Iterator<Item = (&Card, Position)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card, self.position_of(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                id: format!("{}", i + 1),
                title: format!("Card {}", i + 1),
                description: String::new(),
                image_url: String::new(),
                hint: String::new(),
            })
            .collect()
    }

    fn positions_at(carousel: &Carousel) -> Vec<Position> {
        carousel.positions().map(|(_, p)| p).collect()
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let mut c = Carousel::new(deck(n));
                for _ in 0..start {
                    c.advance(Direction::Forward);
                }
                assert_eq!(c.active_index(), start);

                c.advance(Direction::Forward);
                c.advance(Direction::Backward);
                assert_eq!(c.active_index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn n_forward_steps_close_the_cycle() {
        for n in 1..=6 {
            let mut c = Carousel::new(deck(n));
            c.advance(Direction::Backward);
            let start = c.active_index();
            for _ in 0..n {
                c.advance(Direction::Forward);
            }
            assert_eq!(c.active_index(), start);
        }
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let mut c = Carousel::new(deck(3));
        c.advance(Direction::Backward);
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.active_card().map(|card| card.id.as_str()), Some("3"));
    }

    #[test]
    fn exactly_one_center_for_every_active_index() {
        for n in 1..=6 {
            let mut c = Carousel::new(deck(n));
            for _ in 0..n {
                let ps = positions_at(&c);
                let count = |want: Position| ps.iter().filter(|&&p| p == want).count();
                assert_eq!(count(Position::Center), 1);
                assert!(count(Position::Left) <= 1);
                assert!(count(Position::Right) <= 1);
                c.advance(Direction::Forward);
            }
        }
    }

    #[test]
    fn three_cards_at_zero() {
        let c = Carousel::new(deck(3));
        assert_eq!(
            positions_at(&c),
            vec![Position::Center, Position::Right, Position::Left]
        );
    }

    #[test]
    fn five_cards_hide_the_far_ones() {
        let mut c = Carousel::new(deck(5));
        c.advance(Direction::Forward);
        c.advance(Direction::Forward);
        assert_eq!(
            positions_at(&c),
            vec![
                Position::Hidden,
                Position::Left,
                Position::Center,
                Position::Right,
                Position::Hidden,
            ]
        );
    }

    #[test]
    fn two_cards_resolve_the_neighbour_as_right() {
        let mut c = Carousel::new(deck(2));
        assert_eq!(positions_at(&c), vec![Position::Center, Position::Right]);
        c.advance(Direction::Forward);
        assert_eq!(positions_at(&c), vec![Position::Right, Position::Center]);
    }

    #[test]
    fn single_card_stays_centered() {
        let mut c = Carousel::new(deck(1));
        c.advance(Direction::Forward);
        c.advance(Direction::Backward);
        assert_eq!(c.active_index(), 0);
        assert_eq!(positions_at(&c), vec![Position::Center]);
    }

    #[test]
    fn empty_deck_ignores_advance() {
        let mut c = Carousel::new(Vec::new());
        c.advance(Direction::Forward);
        c.advance(Direction::Backward);
        assert_eq!(c.active_index(), 0);
        assert!(c.active_card().is_none());
        assert_eq!(c.position_of(0), Position::Hidden);
    }

    #[test]
    fn out_of_range_index_is_hidden() {
        let c = Carousel::new(deck(3));
        assert_eq!(c.position_of(3), Position::Hidden);
    }
}
