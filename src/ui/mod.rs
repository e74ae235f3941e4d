// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `State`, handles its own `Message` and hands a view back to
//! the application shell.
//!
//! # Screens
//!
//! - [`home`] - Project list with cover cards
//! - [`gallery`] - Thumbnail grid and the full-window zoom/pan viewer
//! - [`project`] - Project header shown above the gallery
//! - [`fretboard`] - Note-finding trainer on a guitar neck
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Viewer state machine and gesture bookkeeping
//! - [`widgets`] - Custom Iced widgets (zoomable image, scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Screen switcher and global actions

pub mod about;
pub mod design_tokens;
pub mod fretboard;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod project;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
