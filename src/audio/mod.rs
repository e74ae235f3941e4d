// SPDX-License-Identifier: MPL-2.0
//! Sound for the fretboard trainer: a small plucked-string synth and the
//! output thread that plays it.

pub mod output;
pub mod pluck;

pub use output::TonePlayer;
