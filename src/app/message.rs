// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::Manifest;
use crate::ui::about;
use crate::ui::fretboard;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::navbar;
use iced::Size;
use std::path::PathBuf;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Gallery(gallery::Message),
    Fretboard(fretboard::Message),
    Navbar(navbar::Message),
    About(about::Message),
    SwitchScreen(Screen),
    /// Result from the open manifest dialog.
    ManifestDialogResult(Option<PathBuf>),
    /// A manifest finished loading (or failed to).
    ManifestLoaded {
        path: PathBuf,
        result: Result<Manifest, Error>,
    },
    /// The window was opened or resized; drives the grid column count.
    WindowResized(Size),
    /// The system opener returned for a project link.
    LinkOpened {
        url: String,
        result: Result<(), String>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional manifest to open on startup, overriding the configured one.
    pub manifest: Option<PathBuf>,
}
