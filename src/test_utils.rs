// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Zoom factors, offsets and layout sizes are `f32`; compare them with the
//! `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for values derived through `exp`/`powf`.
pub const CURVE_EPSILON: f32 = 1e-4;
