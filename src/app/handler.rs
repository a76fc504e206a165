//! Input handling — maps key/mouse events to carousel advances.
//!
//! Keys, the Prev/Next buttons and finished swipes all end up in
//! [`advance`], so they share one code path and one result.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::carousel::Direction;
use crate::core::gesture::{PointerEvent, PointerId};
use crate::ui::layout::{point_in_rect, AppLayout};

use super::state::AppState;

/// Terminals report a single mouse; the left button is our pointer.
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// On-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
}

/// Step the carousel and start the slide animation.
pub fn advance(state: &mut AppState, direction: Direction) {
    if state.carousel.is_empty() {
        return;
    }
    state.carousel.advance(direction);
    state.transition.start(direction);
}

/// A button was activated.
pub fn activate(state: &mut AppState, control: Control) {
    tracing::debug!(?control, "button");
    match control {
        Control::Prev => advance(state, Direction::Backward),
        Control::Next => advance(state, Direction::Forward),
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Terminals with enhanced key reporting also send releases; repeats of a
    // held arrow keep advancing.
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    match action {
        Action::Prev => advance(state, Direction::Backward),
        Action::Next => advance(state, Direction::Forward),
        Action::Quit => state.should_quit = true,
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let event = PointerEvent::new(MOUSE_POINTER, to_units(state, mouse.column));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A press while still captured means the last release was lost.
            abandon_stale_drag(state);
            let layout = AppLayout::from_area(state.terminal_area);
            if point_in_rect(layout.prev_button, mouse.column, mouse.row) {
                activate(state, Control::Prev);
            } else if point_in_rect(layout.next_button, mouse.column, mouse.row) {
                activate(state, Control::Next);
            } else if point_in_rect(layout.stage_area, mouse.column, mouse.row) {
                state.gesture.pointer_down(event, &mut state.capture);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.capture.holds(MOUSE_POINTER) {
                state.gesture.pointer_move(event);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.capture.holds(MOUSE_POINTER) {
                if let Some(direction) = state.gesture.pointer_up(event, &mut state.capture) {
                    advance(state, direction);
                }
            }
        }
        // Buttonless motion: the button went up without us hearing it.
        MouseEventKind::Moved => abandon_stale_drag(state),
        _ => {}
    }
}

/// Drop a drag whose release never arrived, without advancing.
fn abandon_stale_drag(state: &mut AppState) {
    if state.capture.held().is_some() {
        state.gesture.abandon(&mut state.capture);
    }
}

/// Abandon a drag in progress (focus lost, window resized).  The drag is
/// finished at its last known position, so a long enough drag still swipes.
pub fn cancel_drag(state: &mut AppState) {
    let Some(pointer_id) = state.capture.held() else {
        return;
    };
    tracing::debug!(?pointer_id, "drag cancelled");
    if let Some(direction) = state.gesture.pointer_cancel(pointer_id, &mut state.capture) {
        advance(state, direction);
    }
}

/// Terminal column → horizontal distance units.
fn to_units(state: &AppState, column: u16) -> i32 {
    column as i32 * state.config.units_per_column
}
