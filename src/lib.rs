// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` presents a portfolio project built with the Iced GUI framework.
//!
//! A project manifest supplies the description and an ordered image list; the
//! gallery opens each eligible image in a full-window viewer with wheel, pinch
//! and button zoom, drag-to-pan and keyboard navigation. A small guitar
//! fretboard trainer sits alongside.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.1.0")]

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod gallery;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
