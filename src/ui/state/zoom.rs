// SPDX-License-Identifier: MPL-2.0
//! Zoom factor and the two input response curves.
//!
//! Buttons move the factor linearly, the mouse wheel multiplies it by an
//! exponential of the scroll distance and a pinch multiplies it by the square
//! root of the finger distance ratio. The curves stay separate on purpose so
//! each input keeps its own feel.

pub use crate::config::{
    DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, PINCH_ZOOM_EXPONENT,
    WHEEL_PIXELS_PER_LINE, WHEEL_ZOOM_SENSITIVITY, ZOOM_BUTTON_STEP,
};
use iced::mouse::ScrollDelta;

/// Zoom multiplier relative to the fitted image, guaranteed to be within
/// `[MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a zoom factor, clamping to the valid range. NaN maps to fit.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is larger than its fitted size, i.e. panning applies.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > DEFAULT_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    #[must_use]
    pub fn step_in(self) -> Self {
        Self::new(self.0 + ZOOM_BUTTON_STEP)
    }

    #[must_use]
    pub fn step_out(self) -> Self {
        Self::new(self.0 - ZOOM_BUTTON_STEP)
    }

    /// Applies a wheel scroll of `delta_y` pixels, positive meaning "scroll
    /// down" (zoom out).
    #[must_use]
    pub fn wheel(self, delta_y: f32) -> Self {
        Self::new(self.0 * wheel_multiplier(delta_y))
    }

    /// Applies one pinch sample where the finger distance went from
    /// `previous` to `current`. Degenerate distances leave the zoom unchanged.
    #[must_use]
    pub fn pinch(self, previous: f32, current: f32) -> Self {
        match pinch_multiplier(previous, current) {
            Some(multiplier) => Self::new(self.0 * multiplier),
            None => self,
        }
    }

    /// Zoom as a whole percentage for display.
    #[must_use]
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// `e^(-delta_y * sensitivity)`.
#[must_use]
pub fn wheel_multiplier(delta_y: f32) -> f32 {
    (-delta_y * WHEEL_ZOOM_SENSITIVITY).exp()
}

/// `(current / previous)^0.5`, or `None` when either distance is not positive.
#[must_use]
pub fn pinch_multiplier(previous: f32, current: f32) -> Option<f32> {
    if previous > 0.0 && current > 0.0 && previous.is_finite() && current.is_finite() {
        Some((current / previous).powf(PINCH_ZOOM_EXPONENT))
    } else {
        None
    }
}

/// Converts an Iced scroll delta (up-positive) into a down-positive pixel
/// distance.
#[must_use]
pub fn wheel_delta_y(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * WHEEL_PIXELS_PER_LINE,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}
