// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component messages are routed here from `App::update`; each handler
//! returns the follow-up [`Task`] (manifest loading, file dialogs, image
//! fetches, link opening).

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::error::Error;
use crate::gallery::{self, Manifest};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::gallery as gallery_ui;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::project::{Notice, Severity};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// File extensions offered by the open manifest dialog.
const MANIFEST_EXTENSIONS: &[&str] = &["toml"];

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub portfolio: &'a mut Option<Manifest>,
    pub selected: &'a mut Option<usize>,
    pub home: &'a mut home::State,
    pub gallery: &'a mut gallery_ui::State,
    pub notices: &'a mut Vec<Notice>,
}

/// Switches screens. Leaving the project screen closes the viewer so page
/// scrolling is never left suspended behind another screen; the project
/// screen itself needs a selection and falls back to home without one.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let target = if target == Screen::Project && ctx.selected.is_none() {
        Screen::Home
    } else {
        target
    };
    if target != Screen::Project {
        ctx.gallery.close();
    }
    *ctx.screen = target;
    Task::none()
}

/// Handles project list messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match ctx.home.update(message) {
        HomeEvent::None => Task::none(),
        HomeEvent::OpenProject(index) => open_project(ctx, index),
    }
}

/// Selects the project at `index` and loads its gallery.
pub fn open_project(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(manifest) = ctx.portfolio.as_ref() else {
        return Task::none();
    };
    let Some(entry) = manifest.get(index) else {
        tracing::warn!(index, "no project at this index");
        return Task::none();
    };

    tracing::debug!(index, title = %entry.project.title, "project opened");
    let task = ctx
        .gallery
        .set_gallery(entry.gallery.clone(), manifest.base_dir.as_deref())
        .map(Message::Gallery);
    *ctx.selected = Some(index);
    *ctx.screen = Screen::Project;
    task
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::SwitchScreen(target) => handle_screen_switch(ctx, target),
        NavbarEvent::OpenManifest => handle_open_manifest_dialog(ctx.config.gallery.manifest.clone()),
        NavbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.cycle();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            persist_config(ctx.config);
            Task::none()
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::BackToHome => handle_screen_switch(ctx, Screen::Home),
    }
}

/// Opens the native file dialog, starting next to the last known manifest.
pub fn handle_open_manifest_dialog(last_manifest: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Manifest", MANIFEST_EXTENSIONS);

            if let Some(dir) = last_manifest.as_deref().and_then(std::path::Path::parent) {
                if dir.exists() {
                    dialog = dialog.set_directory(dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ManifestDialogResult,
    )
}

/// Reads and parses a manifest off the update loop.
pub fn load_manifest(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = gallery::load_manifest(&path);
            (path, result)
        },
        |(path, result)| Message::ManifestLoaded { path, result },
    )
}

/// Replaces the portfolio on success; on failure the previous one stays in
/// place and an error notice is shown.
///
/// A manifest with a single listed project opens it directly, otherwise the
/// home list is shown.
pub fn handle_manifest_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<Manifest, Error>,
) -> Task<Message> {
    ctx.notices
        .retain(|notice| notice.severity != Severity::Error);

    match result {
        Ok(manifest) => {
            let covers = ctx.home.set_manifest(&manifest).map(Message::Home);
            let listed = manifest.listed();
            *ctx.portfolio = Some(manifest);
            *ctx.selected = None;
            // Drops the old items and closes the viewer
            let cleared = ctx.gallery.set_gallery(gallery::Gallery::default(), None);

            let opened = match listed.as_slice() {
                [only] => open_project(ctx, *only),
                _ => {
                    if *ctx.screen == Screen::Project {
                        *ctx.screen = Screen::Home;
                    }
                    cleared.map(Message::Gallery)
                }
            };
            Task::batch([covers, opened])
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "manifest could not be loaded");
            let path = path.display().to_string();
            let error = err.to_string();
            ctx.notices.push(Notice {
                severity: Severity::Error,
                text: ctx.i18n.tr_with_args(
                    "notification-manifest-error",
                    &[("path", &path), ("error", &error)],
                ),
            });
            Task::none()
        }
    }
}

/// Hands a project link to the system opener off the update loop.
pub fn open_link(url: String) -> Task<Message> {
    tracing::debug!(%url, "opening project link");
    Task::perform(
        async move {
            let result = open::that(&url).map_err(|err| err.to_string());
            (url, result)
        },
        |(url, result)| Message::LinkOpened { url, result },
    )
}

/// Reports a link the system could not open.
pub fn handle_link_opened(ctx: &mut UpdateContext<'_>, url: &str, result: Result<(), String>) {
    if let Err(error) = result {
        tracing::warn!(%url, %error, "project link could not be opened");
        ctx.notices.push(Notice {
            severity: Severity::Warning,
            text: ctx
                .i18n
                .tr_with_args("notification-link-error", &[("url", url), ("error", &error)]),
        });
    }
}

/// Writes the settings file, logging instead of failing.
fn persist_config(config: &Config) {
    if let Err(err) = config::save(config) {
        tracing::warn!(error = %err, "settings could not be saved");
    }
}
