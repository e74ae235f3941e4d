// SPDX-License-Identifier: MPL-2.0
//! Project gallery: thumbnail grid plus the full-window zoom/pan viewer.
//!
//! [`component::State`] owns the item list, the viewer state and the
//! interaction session; [`grid`] and [`modal`] are pure view functions over it.

pub mod component;
pub mod grid;
pub mod modal;

pub use component::{ImageSlot, Message, State, ViewContext};
