//! Visual placement for each carousel position.

use crate::core::carousel::Position;

/// Transform, opacity and stacking for one card.
///
/// `translate_x_pct` is a percentage of the card's own width and
/// `rotate_deg` is a clockwise tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translate_x_pct: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
    pub stack_order: u8,
}

impl Placement {
    pub fn for_position(position: Position) -> Self {
        match position {
            Position::Center => Self {
                translate_x_pct: 0.0,
                scale: 1.0,
                rotate_deg: 0.0,
                opacity: 1.0,
                stack_order: 20,
            },
            Position::Left => Self {
                translate_x_pct: -60.0,
                scale: 0.8,
                rotate_deg: -5.0,
                opacity: 0.6,
                stack_order: 10,
            },
            Position::Right => Self {
                translate_x_pct: 60.0,
                scale: 0.8,
                rotate_deg: 5.0,
                opacity: 0.6,
                stack_order: 10,
            },
            Position::Hidden => Self {
                translate_x_pct: 0.0,
                scale: 0.5,
                rotate_deg: 0.0,
                opacity: 0.0,
                stack_order: 0,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Rows a tilted card drops by — one row per 5° either way.
    pub fn tilt_rows(&self) -> u16 {
        (self.rotate_deg.abs() / 5.0).round() as u16
    }
}
