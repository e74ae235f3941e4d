// SPDX-License-Identifier: MPL-2.0
//! Cosmetic ease of the rendered image back to centre.
//!
//! The authoritative pan offset is already zero when this runs; only the
//! drawn offset lags behind for [`RECENTER_TRANSITION`].

use crate::config::RECENTER_TRANSITION;
use iced::Vector;
use std::time::{Duration, Instant};

/// Eases a displayed offset from `from` to the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecenterAnimation {
    from: Vector,
    started_at: Instant,
    duration: Duration,
}

impl RecenterAnimation {
    #[must_use]
    pub fn start(from: Vector, now: Instant) -> Self {
        Self {
            from,
            started_at: now,
            duration: RECENTER_TRANSITION,
        }
    }

    /// Progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offset to draw at `now`, using an ease-out cubic curve.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> Vector {
        let t = self.progress(now);
        let remaining = (1.0 - t).powi(3);
        self.from * remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_at_source_offset() {
        let now = Instant::now();
        let animation = RecenterAnimation::start(Vector::new(40.0, -20.0), now);
        assert_eq!(animation.offset_at(now), Vector::new(40.0, -20.0));
        assert!(!animation.is_finished(now));
    }

    #[test]
    fn ends_centred_after_duration() {
        let now = Instant::now();
        let animation = RecenterAnimation::start(Vector::new(40.0, -20.0), now);
        let end = now + RECENTER_TRANSITION;
        assert!(animation.is_finished(end));
        let offset = animation.offset_at(end + Duration::from_millis(50));
        assert_abs_diff_eq!(offset.x, 0.0);
        assert_abs_diff_eq!(offset.y, 0.0);
    }

    #[test]
    fn halfway_is_mostly_recentred() {
        let now = Instant::now();
        let animation = RecenterAnimation::start(Vector::new(80.0, 0.0), now);
        let offset = animation.offset_at(now + RECENTER_TRANSITION / 2);
        assert_abs_diff_eq!(offset.x, 10.0, epsilon = 1e-3);
    }
}
