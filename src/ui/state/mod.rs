// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! The viewer's authoritative state ([`ViewerState`]) is a plain value moved
//! forward by transitions; everything gesture-related lives in an
//! [`InteractionSession`] that only exists while the modal is open.

pub mod coalescer;
pub mod drag;
pub mod pinch;
pub mod recenter;
pub mod session;
pub mod viewer;
pub mod zoom;

// Re-export commonly used types for convenience
pub use coalescer::FrameCoalescer;
pub use drag::DragState;
pub use pinch::{PinchTracker, TouchGesture};
pub use recenter::RecenterAnimation;
pub use session::InteractionSession;
pub use viewer::{Applied, Transition, ViewerState};
pub use zoom::ZoomFactor;
