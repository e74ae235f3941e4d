// SPDX-License-Identifier: MPL-2.0
//! Gesture bookkeeping scoped to one opening of the viewer.
//!
//! An [`InteractionSession`] is created when the modal opens and dropped when
//! it closes, so no drag, pinch or animation state can leak between openings.
//! It translates raw pointer and touch input into viewer [`Transition`]s.

use super::coalescer::FrameCoalescer;
use super::drag::DragState;
use super::pinch::{PinchTracker, TouchGesture};
use super::recenter::RecenterAnimation;
use super::viewer::{Applied, Transition, ViewerState};
use iced::touch::Finger;
use iced::{Point, Vector};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    drag: DragState,
    pinch: PinchTracker,
    pending_pan: FrameCoalescer<Vector>,
    recenter: Option<RecenterAnimation>,
}

impl InteractionSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Whether the frame subscription must run.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.pending_pan.is_pending() || self.recenter.is_some()
    }

    /// Offset to draw: the animated one while recentring, else the state's.
    #[must_use]
    pub fn displayed_offset(&self, state: &ViewerState, now: Instant) -> Vector {
        match &self.recenter {
            Some(animation) if !state.zoom().is_magnified() => animation.offset_at(now),
            _ => state.pan_offset(),
        }
    }

    /// Reacts to the outcome of a viewer transition.
    pub fn observe(&mut self, applied: Applied, state: &ViewerState, now: Instant) {
        if let Some(from) = applied.recentered_from {
            self.recenter = Some(RecenterAnimation::start(from, now));
            self.end_drag();
        } else if state.zoom().is_magnified() {
            self.recenter = None;
        }
    }

    /// Frame tick: returns the coalesced pan to commit, if any.
    pub fn frame(&mut self, now: Instant) -> Option<Transition> {
        if self
            .recenter
            .as_ref()
            .is_some_and(|animation| animation.is_finished(now))
        {
            self.recenter = None;
        }
        self.pending_pan.commit().map(Transition::PanTo)
    }

    // ---------------------------------------------------------------------
    // Mouse
    // ---------------------------------------------------------------------

    /// Starts a drag if the image is magnified.
    pub fn pointer_pressed(&mut self, position: Point, state: &ViewerState) {
        if state.zoom().is_magnified() {
            self.drag.start(position, state.pan_offset());
        }
    }

    /// Queues the drag offset for the next frame.
    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(offset) = self.drag.calculate_offset(position) {
            self.pending_pan.submit(offset);
        }
    }

    /// Ends the drag and returns the final pan, bypassing frame coalescing.
    pub fn pointer_released(&mut self, position: Option<Point>) -> Option<Transition> {
        if !self.drag.is_dragging {
            return None;
        }
        let last = position.and_then(|p| self.drag.calculate_offset(p));
        let offset = self.pending_pan.flush(last);
        self.drag.stop();
        offset.map(Transition::PanTo)
    }

    // ---------------------------------------------------------------------
    // Touch
    // ---------------------------------------------------------------------

    pub fn finger_pressed(&mut self, id: Finger, position: Point, state: &ViewerState) {
        if !self.pinch.press(id, position) {
            return;
        }
        if self.pinch.is_pinching() {
            // A second finger turns the pan into a pinch
            self.drag.stop();
            self.pending_pan.cancel();
        } else {
            self.pointer_pressed(position, state);
        }
    }

    pub fn finger_moved(&mut self, id: Finger, position: Point) -> Option<Transition> {
        match self.pinch.moved(id, position) {
            TouchGesture::Pinch { previous, current } => {
                Some(Transition::Pinch { previous, current })
            }
            TouchGesture::Pan { position } => {
                self.pointer_moved(position);
                None
            }
            TouchGesture::None => None,
        }
    }

    pub fn finger_lifted(&mut self, id: Finger, state: &ViewerState) -> Option<Transition> {
        let was_pinching = self.pinch.is_pinching();
        self.pinch.release(id);

        if was_pinching {
            // Continue panning with the finger that stayed down
            if let Some(position) = self.pinch.single_position() {
                self.pointer_pressed(position, state);
            }
            return None;
        }
        self.pointer_released(None)
    }

    fn end_drag(&mut self) {
        self.drag.stop();
        self.pending_pan.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::tests::sized;
    use crate::gallery::Gallery;

    fn magnified(gallery: &Gallery) -> ViewerState {
        let mut state = ViewerState::default();
        state.apply(Transition::Open(0), gallery);
        state.apply(Transition::ZoomIn, gallery);
        state
    }

    #[test]
    fn drag_at_fit_does_nothing() {
        let gallery = sized(1);
        let mut state = ViewerState::default();
        state.apply(Transition::Open(0), &gallery);
        let mut session = InteractionSession::new();

        session.pointer_pressed(Point::new(10.0, 10.0), &state);
        session.pointer_moved(Point::new(50.0, 50.0));

        assert!(!session.is_dragging());
        assert!(!session.needs_frames());
    }

    #[test]
    fn moves_coalesce_to_one_commit_per_frame() {
        let gallery = sized(1);
        let state = magnified(&gallery);
        let mut session = InteractionSession::new();

        session.pointer_pressed(Point::new(0.0, 0.0), &state);
        session.pointer_moved(Point::new(5.0, 0.0));
        session.pointer_moved(Point::new(9.0, 2.0));
        assert!(session.needs_frames());

        let now = Instant::now();
        assert_eq!(
            session.frame(now),
            Some(Transition::PanTo(Vector::new(9.0, 2.0)))
        );
        assert_eq!(session.frame(now), None);
    }

    #[test]
    fn release_flushes_final_position() {
        let gallery = sized(1);
        let mut state = magnified(&gallery);
        let mut session = InteractionSession::new();

        session.pointer_pressed(Point::new(0.0, 0.0), &state);
        session.pointer_moved(Point::new(5.0, 0.0));
        let flushed = session.pointer_released(Some(Point::new(20.0, 4.0)));

        assert_eq!(flushed, Some(Transition::PanTo(Vector::new(20.0, 4.0))));
        assert!(!session.is_dragging());
        assert!(!session.needs_frames());

        if let Some(transition) = flushed {
            state.apply(transition, &gallery);
        }
        assert_eq!(state.pan_offset(), Vector::new(20.0, 4.0));
    }

    #[test]
    fn zooming_to_fit_starts_recenter_animation() {
        let gallery = sized(1);
        let mut state = magnified(&gallery);
        state.apply(Transition::PanTo(Vector::new(30.0, 0.0)), &gallery);
        let mut session = InteractionSession::new();
        let now = Instant::now();

        let applied = state.apply(Transition::ResetZoom, &gallery);
        session.observe(applied, &state, now);

        assert_eq!(state.pan_offset(), Vector::ZERO);
        assert!(session.needs_frames());
        assert_eq!(session.displayed_offset(&state, now), Vector::new(30.0, 0.0));

        let later = now + crate::config::RECENTER_TRANSITION;
        session.frame(later);
        assert!(!session.needs_frames());
        assert_eq!(session.displayed_offset(&state, later), Vector::ZERO);
    }

    #[test]
    fn zooming_in_cancels_recenter() {
        let gallery = sized(1);
        let mut state = magnified(&gallery);
        state.apply(Transition::PanTo(Vector::new(30.0, 0.0)), &gallery);
        let mut session = InteractionSession::new();
        let now = Instant::now();

        let applied = state.apply(Transition::ResetZoom, &gallery);
        session.observe(applied, &state, now);
        let applied = state.apply(Transition::ZoomIn, &gallery);
        session.observe(applied, &state, now);

        assert!(!session.needs_frames());
    }

    #[test]
    fn two_fingers_produce_pinch_transition() {
        let gallery = sized(1);
        let state = magnified(&gallery);
        let mut session = InteractionSession::new();

        session.finger_pressed(Finger(1), Point::new(0.0, 0.0), &state);
        session.finger_pressed(Finger(2), Point::new(100.0, 0.0), &state);
        assert!(!session.is_dragging());

        let transition = session.finger_moved(Finger(2), Point::new(150.0, 0.0));
        assert_eq!(
            transition,
            Some(Transition::Pinch {
                previous: 100.0,
                current: 150.0
            })
        );
    }

    #[test]
    fn single_finger_lift_flushes_pan() {
        let gallery = sized(1);
        let state = magnified(&gallery);
        let mut session = InteractionSession::new();

        session.finger_pressed(Finger(7), Point::new(10.0, 10.0), &state);
        session.finger_moved(Finger(7), Point::new(16.0, 13.0));
        let flushed = session.finger_lifted(Finger(7), &state);

        assert_eq!(flushed, Some(Transition::PanTo(Vector::new(6.0, 3.0))));
    }
}
