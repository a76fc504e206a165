//! Card slide with exponential ease-out.
//!
//! Each advance injects a displacement of one card spacing so the deck
//! appears to start where it was and slide into its new rest placement.
//! Each tick the displacement decays toward zero.

use crate::core::carousel::Direction;

/// Horizontal slide animator, measured in card spacings.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    /// Current displacement.  Positive = cards shifted right of their rest
    /// placement (after a forward step); negative = shifted left.
    offset: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
}

impl SlideTransition {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Kick off a slide for one advance step.
    pub fn start(&mut self, direction: Direction) {
        let step = match direction {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        };
        // Rapid repeats stack, but never more than two spacings.
        self.offset = (self.offset + step).clamp(-2.0, 2.0);
    }

    /// Decay the offset toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        self.offset *= 1.0 - self.speed;
        if self.offset.abs() < 0.02 {
            self.offset = 0.0;
        }
    }

    /// Current displacement in terminal columns for a given card spacing.
    pub fn column_offset(&self, spacing: u16) -> i32 {
        (self.offset * spacing as f64).round() as i32
    }

    pub fn is_animating(&self) -> bool {
        self.offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_starts_right_and_settles() {
        let mut t = SlideTransition::new(0.5);
        assert!(!t.is_animating());
        t.start(Direction::Forward);
        assert_eq!(t.column_offset(20), 20);
        t.tick();
        assert_eq!(t.column_offset(20), 10);
        for _ in 0..10 {
            t.tick();
        }
        assert!(!t.is_animating());
        assert_eq!(t.column_offset(20), 0);
    }

    #[test]
    fn backward_starts_left() {
        let mut t = SlideTransition::new(0.35);
        t.start(Direction::Backward);
        assert_eq!(t.column_offset(10), -10);
    }

    #[test]
    fn repeated_steps_are_capped() {
        let mut t = SlideTransition::new(0.35);
        for _ in 0..5 {
            t.start(Direction::Forward);
        }
        assert_eq!(t.column_offset(10), 20);
    }
}
