// SPDX-License-Identifier: MPL-2.0
//! Two-finger tracking for pinch zoom and one-finger panning.

use iced::touch::Finger;
use iced::Point;

/// What a finger movement means for the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// Two fingers changed distance from `previous` to `current`.
    Pinch { previous: f32, current: f32 },
    /// A single finger moved to `position`.
    Pan { position: Point },
    /// Nothing actionable.
    None,
}

/// Active fingers (at most two are tracked) and the last pinch distance.
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    fingers: Vec<(Finger, Point)>,
    last_distance: Option<f32>,
}

impl PinchTracker {
    /// Number of fingers currently tracked.
    #[must_use]
    pub fn active_fingers(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.fingers.len() == 2
    }

    /// Registers a new finger. Returns `true` if it is tracked.
    pub fn press(&mut self, id: Finger, position: Point) -> bool {
        if self.fingers.len() >= 2 || self.fingers.iter().any(|(f, _)| *f == id) {
            return false;
        }
        self.fingers.push((id, position));
        self.last_distance = self.distance();
        true
    }

    /// Updates a finger position and reports the resulting gesture.
    pub fn moved(&mut self, id: Finger, position: Point) -> TouchGesture {
        let Some(slot) = self.fingers.iter_mut().find(|(f, _)| *f == id) else {
            return TouchGesture::None;
        };
        slot.1 = position;

        match self.fingers.len() {
            1 => TouchGesture::Pan { position },
            2 => {
                let Some(current) = self.distance() else {
                    return TouchGesture::None;
                };
                let previous = self.last_distance.replace(current);
                match previous {
                    Some(previous) => TouchGesture::Pinch { previous, current },
                    None => TouchGesture::None,
                }
            }
            _ => TouchGesture::None,
        }
    }

    /// Removes a lifted or lost finger.
    pub fn release(&mut self, id: Finger) {
        self.fingers.retain(|(f, _)| *f != id);
        self.last_distance = self.distance();
    }

    /// Position of the only remaining finger, if exactly one is down.
    #[must_use]
    pub fn single_position(&self) -> Option<Point> {
        match self.fingers.as_slice() {
            [(_, position)] => Some(*position),
            _ => None,
        }
    }

    fn distance(&self) -> Option<f32> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_finger_pans() {
        let mut tracker = PinchTracker::default();
        assert!(tracker.press(Finger(1), Point::new(0.0, 0.0)));
        assert_eq!(
            tracker.moved(Finger(1), Point::new(5.0, 5.0)),
            TouchGesture::Pan {
                position: Point::new(5.0, 5.0)
            }
        );
    }

    #[test]
    fn two_fingers_report_distance_change() {
        let mut tracker = PinchTracker::default();
        tracker.press(Finger(1), Point::new(0.0, 0.0));
        tracker.press(Finger(2), Point::new(100.0, 0.0));
        assert!(tracker.is_pinching());

        let gesture = tracker.moved(Finger(2), Point::new(150.0, 0.0));
        assert_eq!(
            gesture,
            TouchGesture::Pinch {
                previous: 100.0,
                current: 150.0
            }
        );

        // Next sample is relative to the last one
        let gesture = tracker.moved(Finger(2), Point::new(300.0, 0.0));
        assert_eq!(
            gesture,
            TouchGesture::Pinch {
                previous: 150.0,
                current: 300.0
            }
        );
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut tracker = PinchTracker::default();
        tracker.press(Finger(1), Point::ORIGIN);
        tracker.press(Finger(2), Point::new(10.0, 0.0));
        assert!(!tracker.press(Finger(3), Point::new(20.0, 0.0)));
        assert_eq!(tracker.moved(Finger(3), Point::new(30.0, 0.0)), TouchGesture::None);
    }

    #[test]
    fn release_returns_to_single_finger() {
        let mut tracker = PinchTracker::default();
        tracker.press(Finger(1), Point::ORIGIN);
        tracker.press(Finger(2), Point::new(10.0, 0.0));
        tracker.release(Finger(1));
        assert_eq!(tracker.active_fingers(), 1);
        assert_eq!(tracker.single_position(), Some(Point::new(10.0, 0.0)));
    }
}
