// SPDX-License-Identifier: MPL-2.0
pub mod scroll_lock;
pub mod zoomable_image;

pub use scroll_lock::ScrollLock;
pub use zoomable_image::{ImageInput, ZoomableImage};
