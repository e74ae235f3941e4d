// SPDX-License-Identifier: MPL-2.0
//! Plucked-string tone synthesis.
//!
//! A fundamental plus two overtones under a short attack and an exponential
//! decay. Output is interleaved `f32` in `[-1.0, 1.0]`, the same value on
//! every channel.

use std::f32::consts::TAU;

/// Length of one plucked note.
pub const PLUCK_SECONDS: f32 = 0.6;

const ATTACK_SECONDS: f32 = 0.005;

/// Exponential decay per second.
const DECAY_RATE: f32 = 6.0;

/// Peak amplitude.
pub const PEAK: f32 = 0.35;

/// Weights of the fundamental and its first two overtones.
const HARMONICS: [f32; 3] = [1.0, 0.5, 0.25];

/// Renders one plucked note at `frequency` Hz.
///
/// Returns no samples for a zero rate, zero channels or a non-positive
/// frequency.
#[must_use]
pub fn pluck(frequency: f32, sample_rate: u32, channels: u16) -> Vec<f32> {
    if sample_rate == 0 || channels == 0 || frequency.is_nan() || frequency <= 0.0 {
        return Vec::new();
    }

    let rate = sample_rate as f32;
    let frames = (PLUCK_SECONDS * rate) as usize;
    let channels = usize::from(channels);
    let weight: f32 = HARMONICS.iter().sum();

    let mut samples = Vec::with_capacity(frames * channels);
    for frame in 0..frames {
        let t = frame as f32 / rate;
        let envelope = (t / ATTACK_SECONDS).min(1.0) * (-DECAY_RATE * t).exp();
        let wave = HARMONICS
            .iter()
            .enumerate()
            .map(|(i, w)| w * (TAU * frequency * (i + 1) as f32 * t).sin())
            .sum::<f32>()
            / weight;
        samples.extend(std::iter::repeat_n(PEAK * envelope * wave, channels));
    }
    samples
}
