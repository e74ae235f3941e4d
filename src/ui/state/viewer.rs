// SPDX-License-Identifier: MPL-2.0
//! Viewer state and its transition function.
//!
//! Every change to the modal viewer goes through [`ViewerState::apply`], which
//! upholds two invariants after each transition:
//!
//! - `active_index` is either `None` (closed) or an eligible index of the
//!   gallery it was applied against;
//! - the pan offset is zero whenever the zoom factor is at or below fit.

use super::zoom::ZoomFactor;
use crate::gallery::Gallery;
use iced::Vector;

/// Inputs the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Open(usize),
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Wheel scroll in down-positive pixels.
    Wheel(f32),
    /// Two-finger distance change between successive samples.
    Pinch { previous: f32, current: f32 },
    /// Relative pan, accumulated into the offset.
    PanBy(Vector),
    /// Absolute pan, as computed by a drag gesture.
    PanTo(Vector),
}

/// What a transition did, for the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Applied {
    pub changed: bool,
    /// Offset that was discarded because zoom dropped to fit or below.
    pub recentered_from: Option<Vector>,
}

impl Applied {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            recentered_from: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    active_index: Option<usize>,
    zoom: ZoomFactor,
    pan_offset: Vector,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            active_index: None,
            zoom: ZoomFactor::default(),
            pan_offset: Vector::ZERO,
        }
    }
}

impl ViewerState {
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active_index.is_some()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.pan_offset
    }

    /// Applies `transition` against `gallery` and reports the effect.
    pub fn apply(&mut self, transition: Transition, gallery: &Gallery) -> Applied {
        let before = *self;

        let recentered_from = match transition {
            Transition::Open(index) => {
                if !gallery.is_eligible(index) {
                    return Applied::unchanged();
                }
                *self = Self {
                    active_index: Some(index),
                    ..Self::default()
                };
                None
            }
            Transition::Close => {
                *self = Self::default();
                None
            }
            Transition::Next | Transition::Previous => {
                let Some(current) = self.active_index else {
                    return Applied::unchanged();
                };
                let target = if transition == Transition::Next {
                    gallery.next_eligible(current)
                } else {
                    gallery.previous_eligible(current)
                };
                *self = Self {
                    // None if the current index is no longer eligible
                    active_index: target,
                    ..Self::default()
                };
                None
            }
            Transition::ZoomIn => self.zoom_to(self.zoom.step_in()),
            Transition::ZoomOut => self.zoom_to(self.zoom.step_out()),
            Transition::ResetZoom => self.zoom_to(ZoomFactor::default()),
            Transition::Wheel(delta_y) => self.zoom_to(self.zoom.wheel(delta_y)),
            Transition::Pinch { previous, current } => {
                self.zoom_to(self.zoom.pinch(previous, current))
            }
            Transition::PanBy(delta) => {
                if self.is_open() && self.zoom.is_magnified() {
                    self.pan_offset = self.pan_offset + delta;
                }
                None
            }
            Transition::PanTo(offset) => {
                if self.is_open() && self.zoom.is_magnified() {
                    self.pan_offset = offset;
                }
                None
            }
        };

        if *self == before {
            return Applied::unchanged();
        }
        Applied {
            recentered_from,
            ..Applied::changed()
        }
    }

    fn zoom_to(&mut self, zoom: ZoomFactor) -> Option<Vector> {
        if !self.is_open() {
            return None;
        }
        self.zoom = zoom;
        if self.zoom.is_magnified() || self.pan_offset == Vector::ZERO {
            return None;
        }
        let previous = self.pan_offset;
        self.pan_offset = Vector::ZERO;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::tests::{item, sized};
    use crate::test_utils::assert_abs_diff_eq;

    fn open(gallery: &Gallery, index: usize) -> ViewerState {
        let mut state = ViewerState::default();
        state.apply(Transition::Open(index), gallery);
        state
    }

    fn assert_pan_invariant(state: &ViewerState) {
        if !state.zoom().is_magnified() {
            assert_eq!(state.pan_offset(), Vector::ZERO);
        }
    }

    #[test]
    fn open_then_close_resets_everything() {
        let gallery = sized(4);
        for index in 0..4 {
            let mut state = open(&gallery, index);
            state.apply(Transition::ZoomIn, &gallery);
            state.apply(Transition::PanBy(Vector::new(10.0, 5.0)), &gallery);
            state.apply(Transition::Close, &gallery);
            assert_eq!(state, ViewerState::default());
        }
    }

    #[test]
    fn open_ignores_ineligible_and_out_of_range() {
        let gallery = Gallery::new(vec![item("a.jpg", Some(10), None)]);
        let mut state = ViewerState::default();
        assert!(!state.apply(Transition::Open(0), &gallery).changed);
        assert!(!state.apply(Transition::Open(5), &gallery).changed);
        assert!(!state.is_open());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let gallery = sized(3);
        let mut state = open(&gallery, 0);
        state.apply(Transition::Previous, &gallery);
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn n_steps_return_to_start() {
        for count in 1..6 {
            let gallery = sized(count);
            for start in 0..count {
                let mut state = open(&gallery, start);
                for _ in 0..count {
                    state.apply(Transition::Next, &gallery);
                }
                assert_eq!(state.active_index(), Some(start));
                for _ in 0..count {
                    state.apply(Transition::Previous, &gallery);
                }
                assert_eq!(state.active_index(), Some(start));
            }
        }
    }

    #[test]
    fn navigation_resets_zoom_and_pan() {
        let gallery = sized(2);
        let mut state = open(&gallery, 0);
        state.apply(Transition::Wheel(-400.0), &gallery);
        state.apply(Transition::PanBy(Vector::new(30.0, 0.0)), &gallery);
        state.apply(Transition::Next, &gallery);
        assert_eq!(state.zoom(), ZoomFactor::default());
        assert_eq!(state.pan_offset(), Vector::ZERO);
    }

    #[test]
    fn single_item_navigation_keeps_index_but_resets_zoom() {
        let gallery = sized(1);
        let mut state = open(&gallery, 0);
        state.apply(Transition::ZoomIn, &gallery);
        state.apply(Transition::Next, &gallery);
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.zoom(), ZoomFactor::default());
    }

    #[test]
    fn navigation_when_closed_is_noop() {
        let gallery = sized(3);
        let mut state = ViewerState::default();
        assert!(!state.apply(Transition::Next, &gallery).changed);
        assert!(!state.apply(Transition::Previous, &gallery).changed);
        assert!(!state.is_open());
    }

    #[test]
    fn wheel_zoom_matches_exponential_curve() {
        let gallery = sized(1);
        let mut state = open(&gallery, 0);
        state.apply(Transition::Wheel(-100.0), &gallery);
        assert_abs_diff_eq!(state.zoom().value(), 1.10517, epsilon = 1e-4);
    }

    #[test]
    fn pinch_applies_once() {
        let gallery = sized(1);
        let mut state = open(&gallery, 0);
        state.apply(
            Transition::Pinch {
                previous: 100.0,
                current: 150.0,
            },
            &gallery,
        );
        assert_abs_diff_eq!(state.zoom().value(), 1.2247, epsilon = 1e-4);
    }

    #[test]
    fn pan_ignored_at_fit() {
        let gallery = sized(1);
        let mut state = open(&gallery, 0);
        let applied = state.apply(Transition::PanBy(Vector::new(5.0, 5.0)), &gallery);
        assert!(!applied.changed);
        assert_eq!(state.pan_offset(), Vector::ZERO);
    }

    #[test]
    fn zooming_back_to_fit_zeroes_pan_and_reports_it() {
        let gallery = sized(1);
        let mut state = open(&gallery, 0);
        state.apply(Transition::ZoomIn, &gallery);
        state.apply(Transition::PanTo(Vector::new(12.0, -4.0)), &gallery);

        let applied = state.apply(Transition::ResetZoom, &gallery);

        assert!(applied.changed);
        assert_eq!(applied.recentered_from, Some(Vector::new(12.0, -4.0)));
        assert_eq!(state.pan_offset(), Vector::ZERO);
    }

    #[test]
    fn zoom_stays_in_range_and_pan_invariant_holds() {
        let gallery = sized(2);
        let mut state = open(&gallery, 0);
        let script = [
            Transition::Wheel(-10_000.0),
            Transition::PanBy(Vector::new(100.0, 100.0)),
            Transition::ZoomIn,
            Transition::Pinch {
                previous: 10.0,
                current: 1000.0,
            },
            Transition::Wheel(10_000.0),
            Transition::PanBy(Vector::new(1.0, 1.0)),
            Transition::ZoomOut,
            Transition::Pinch {
                previous: 1000.0,
                current: 1.0,
            },
            Transition::ZoomIn,
            Transition::ZoomIn,
            Transition::ZoomIn,
            Transition::ZoomIn,
            Transition::ZoomIn,
            Transition::ZoomIn,
            Transition::PanTo(Vector::new(-3.0, 8.0)),
            Transition::ZoomOut,
            Transition::ZoomOut,
            Transition::ZoomOut,
        ];
        for transition in script {
            state.apply(transition, &gallery);
            let zoom = state.zoom().value();
            assert!((0.5..=3.0).contains(&zoom), "zoom {zoom} out of range");
            assert_pan_invariant(&state);
        }
    }

    #[test]
    fn zoom_ignored_when_closed() {
        let gallery = sized(1);
        let mut state = ViewerState::default();
        assert!(!state.apply(Transition::ZoomIn, &gallery).changed);
        assert_eq!(state.zoom(), ZoomFactor::default());
    }
}
