//! Pointer gesture → swipe translation.
//!
//! A drag starts on pointer-down inside the stage and ends on pointer-up or
//! pointer-cancel.  Only the horizontal displacement between the two ends
//! matters: past the threshold it becomes one advance, otherwise it's a tap.

use super::carousel::Direction;

/// Minimum horizontal travel (exclusive) for a drag to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

/// Identifies one pointer (mouse button, touch contact, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// A pointer sample.  `x` is in distance units, not terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub x: i32,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, x: i32) -> Self {
        Self { pointer_id, x }
    }
}

/// Routes a pointer's later events to the interpreter while it is held.
///
/// `capture` is called once when a drag begins and `release` exactly once
/// when it ends, whether it ends by pointer-up or by cancel.
pub trait PointerCapture {
    fn capture(&mut self, pointer_id: PointerId);
    fn release(&mut self, pointer_id: PointerId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        pointer_id: PointerId,
        start_x: i32,
        last_x: i32,
    },
}

/// Drag state machine: `Idle` ⇄ `Dragging`.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    state: GestureState,
    threshold: i32,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureInterpreter {
    pub fn new(threshold: i32) -> Self {
        Self {
            state: GestureState::Idle,
            threshold: threshold.max(0),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Displacement of the current drag so far (0 when idle).
    pub fn drag_delta(&self) -> i32 {
        match self.state {
            GestureState::Dragging { start_x, last_x, .. } => last_x - start_x,
            GestureState::Idle => 0,
        }
    }

    /// Begin a drag.  The caller has already hit-tested the event against
    /// the stage.  A second pointer going down mid-drag is ignored.
    pub fn pointer_down(&mut self, event: PointerEvent, capture: &mut impl PointerCapture) {
        if self.is_dragging() {
            return;
        }
        self.state = GestureState::Dragging {
            pointer_id: event.pointer_id,
            start_x: event.x,
            last_x: event.x,
        };
        capture.capture(event.pointer_id);
    }

    /// Track the pointer.  Never changes state.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if let GestureState::Dragging {
            pointer_id, last_x, ..
        } = &mut self.state
        {
            if *pointer_id == event.pointer_id {
                *last_x = event.x;
            }
        }
    }

    /// Finish the drag at `event.x`.  Returns the advance to perform, if any.
    pub fn pointer_up(
        &mut self,
        event: PointerEvent,
        capture: &mut impl PointerCapture,
    ) -> Option<Direction> {
        self.finish(event.pointer_id, Some(event.x), capture)
    }

    /// Finish the drag at the last known x (system took the pointer away).
    pub fn pointer_cancel(
        &mut self,
        pointer_id: PointerId,
        capture: &mut impl PointerCapture,
    ) -> Option<Direction> {
        self.finish(pointer_id, None, capture)
    }

    /// Drop the drag without interpreting it, e.g. when its release was
    /// never reported.  Releases the capture; emits no advance.
    pub fn abandon(&mut self, capture: &mut impl PointerCapture) {
        if let GestureState::Dragging { pointer_id, .. } = self.state {
            self.state = GestureState::Idle;
            capture.release(pointer_id);
            tracing::debug!(?pointer_id, "drag abandoned");
        }
    }

    fn finish(
        &mut self,
        id: PointerId,
        end_x: Option<i32>,
        capture: &mut impl PointerCapture,
    ) -> Option<Direction> {
        let GestureState::Dragging {
            pointer_id,
            start_x,
            last_x,
        } = self.state
        else {
            return None;
        };
        if pointer_id != id {
            return None;
        }

        self.state = GestureState::Idle;
        capture.release(pointer_id);

        let delta = end_x.unwrap_or(last_x) - start_x;
        let swipe = if delta.abs() <= self.threshold {
            None
        } else if delta > 0 {
            // Dragging right pulls the previous card in.
            Some(Direction::Backward)
        } else {
            Some(Direction::Forward)
        };
        tracing::debug!(delta, threshold = self.threshold, ?swipe, "drag finished");
        swipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every capture/release call in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, PointerId)>,
    }

    impl PointerCapture for Recorder {
        fn capture(&mut self, pointer_id: PointerId) {
            self.calls.push(("capture", pointer_id));
        }
        fn release(&mut self, pointer_id: PointerId) {
            self.calls.push(("release", pointer_id));
        }
    }

    const P: PointerId = PointerId(1);

    fn drag(from: i32, to: i32) -> (Option<Direction>, Recorder) {
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, from), &mut rec);
        g.pointer_move(PointerEvent::new(P, (from + to) / 2));
        let out = g.pointer_up(PointerEvent::new(P, to), &mut rec);
        assert!(!g.is_dragging());
        (out, rec)
    }

    #[test]
    fn leftward_drag_past_threshold_goes_forward() {
        let (out, rec) = drag(100, 40);
        assert_eq!(out, Some(Direction::Forward));
        assert_eq!(rec.calls, vec![("capture", P), ("release", P)]);
    }

    #[test]
    fn rightward_drag_past_threshold_goes_backward() {
        let (out, _) = drag(40, 100);
        assert_eq!(out, Some(Direction::Backward));
    }

    #[test]
    fn short_drag_is_a_tap() {
        let (out, rec) = drag(100, 70);
        assert_eq!(out, None);
        assert_eq!(rec.calls, vec![("capture", P), ("release", P)]);
    }

    #[test]
    fn threshold_itself_is_not_a_swipe() {
        assert_eq!(drag(100, 50).0, None);
        assert_eq!(drag(100, 49).0, Some(Direction::Forward));
        assert_eq!(drag(100, 150).0, None);
        assert_eq!(drag(100, 151).0, Some(Direction::Backward));
    }

    #[test]
    fn cancel_at_start_position_emits_nothing_and_goes_idle() {
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, 100), &mut rec);
        assert!(g.is_dragging());

        assert_eq!(g.pointer_cancel(P, &mut rec), None);
        assert!(!g.is_dragging());
        assert_eq!(rec.calls, vec![("capture", P), ("release", P)]);
    }

    #[test]
    fn cancel_uses_last_known_position() {
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, 100), &mut rec);
        g.pointer_move(PointerEvent::new(P, 20));
        assert_eq!(g.drag_delta(), -80);
        assert_eq!(g.pointer_cancel(P, &mut rec), Some(Direction::Forward));
    }

    #[test]
    fn other_pointers_are_ignored() {
        let other = PointerId(2);
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, 100), &mut rec);
        g.pointer_down(PointerEvent::new(other, 0), &mut rec);
        g.pointer_move(PointerEvent::new(other, 500));
        assert_eq!(g.pointer_up(PointerEvent::new(other, 500), &mut rec), None);
        assert!(g.is_dragging());
        assert_eq!(g.drag_delta(), 0);
        assert_eq!(rec.calls, vec![("capture", P)]);
    }

    #[test]
    fn abandon_releases_without_swiping() {
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, 500), &mut rec);
        g.pointer_move(PointerEvent::new(P, 0));
        g.abandon(&mut rec);
        assert!(!g.is_dragging());
        assert_eq!(g.drag_delta(), 0);
        assert_eq!(rec.calls, vec![("capture", P), ("release", P)]);

        // Idle: nothing to release.
        g.abandon(&mut rec);
        assert_eq!(rec.calls.len(), 2);
    }

    #[test]
    fn up_without_down_does_nothing() {
        let mut g = GestureInterpreter::default();
        let mut rec = Recorder::default();
        assert_eq!(g.pointer_up(PointerEvent::new(P, 0), &mut rec), None);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn custom_threshold() {
        let mut g = GestureInterpreter::new(10);
        let mut rec = Recorder::default();
        g.pointer_down(PointerEvent::new(P, 0), &mut rec);
        assert_eq!(
            g.pointer_up(PointerEvent::new(P, 11), &mut rec),
            Some(Direction::Backward)
        );
    }
}
