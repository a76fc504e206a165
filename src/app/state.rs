//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::carousel::{Card, Carousel};
use crate::core::gesture::{GestureInterpreter, PointerCapture, PointerId};
use crate::ui::transition::SlideTransition;

/// Which pointer currently owns mouse routing, if any.
///
/// While a pointer is held its drag and release events go to the gesture
/// interpreter wherever they land on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSlot {
    held: Option<PointerId>,
}

impl CaptureSlot {
    pub fn holds(&self, pointer_id: PointerId) -> bool {
        self.held == Some(pointer_id)
    }

    pub fn held(&self) -> Option<PointerId> {
        self.held
    }
}

impl PointerCapture for CaptureSlot {
    fn capture(&mut self, pointer_id: PointerId) {
        self.held = Some(pointer_id);
    }

    fn release(&mut self, pointer_id: PointerId) {
        if self.held == Some(pointer_id) {
            self.held = None;
        }
    }
}

/// Top-level application state.
pub struct AppState {
    /// Cards and the active index.
    pub carousel: Carousel,
    pub gesture: GestureInterpreter,
    pub capture: CaptureSlot,
    /// Slide animation after each advance.
    pub transition: SlideTransition,
    pub config: AppConfig,
    /// Last drawn terminal size, used to hit-test mouse events.
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(cards: Vec<Card>, config: AppConfig) -> Self {
        Self {
            carousel: Carousel::new(cards),
            gesture: GestureInterpreter::new(config.swipe_threshold),
            capture: CaptureSlot::default(),
            transition: SlideTransition::new(config.transition_speed),
            config,
            terminal_area: Rect::default(),
            should_quit: false,
        }
    }
}
