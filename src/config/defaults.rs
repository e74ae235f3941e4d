// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Viewer zoom bounds, button step and input response curves
//! - **Transition**: Cosmetic recenter animation
//! - **Gallery**: Grid presentation defaults
//! - **Fretboard**: Trainer neck dimensions

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor at which the image exactly fits the viewer.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Zoom delta applied by the zoom in/out buttons.
pub const ZOOM_BUTTON_STEP: f32 = 0.1;

/// Exponent scale for wheel zoom: `factor = e^(-delta_y * WHEEL_ZOOM_SENSITIVITY)`.
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.001;

/// Pixels per wheel "line" when the platform reports line-based deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 100.0;

/// Exponent applied to the pinch distance ratio between two samples.
pub const PINCH_ZOOM_EXPONENT: f32 = 0.5;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the ease back to centre after zooming out to fit.
pub const RECENTER_TRANSITION: Duration = Duration::from_millis(200);

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Heading shown above the thumbnail grid.
pub const DEFAULT_GALLERY_TITLE: &str = "Gallery";

/// Thumbnails whose index is below this value are requested first.
pub const PRIORITY_THUMBNAILS: usize = 2;

// ==========================================================================
// Fretboard Defaults
// ==========================================================================

/// Number of strings on the trainer neck.
pub const FRETBOARD_STRINGS: usize = 6;

/// Highest fret on the trainer neck (fret 0 is the open string).
pub const FRETBOARD_FRETS: usize = 22;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
    assert!(MAX_ZOOM_FACTOR > DEFAULT_ZOOM_FACTOR);
    assert!(ZOOM_BUTTON_STEP > 0.0);
    assert!(ZOOM_BUTTON_STEP < MAX_ZOOM_FACTOR - MIN_ZOOM_FACTOR);
    assert!(WHEEL_ZOOM_SENSITIVITY > 0.0);
    assert!(WHEEL_PIXELS_PER_LINE > 0.0);
    assert!(PINCH_ZOOM_EXPONENT > 0.0);

    // Fretboard validation
    assert!(FRETBOARD_STRINGS > 0);
    assert!(FRETBOARD_FRETS >= 12);
};
