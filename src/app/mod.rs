// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home, project,
//! fretboard and about screens.
//!
//! The `App` struct wires together the components (project list, gallery,
//! trainer, localization, settings, tone output) and translates messages
//! into side effects like manifest loading, link opening or config
//! persistence.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::audio::TonePlayer;
use crate::config::{self, Config};
use crate::gallery::{Manifest, ProjectEntry};
use crate::i18n::fluent::I18n;
use crate::ui::fretboard;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::project::{Notice, Severity};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    portfolio: Option<Manifest>,
    /// Index into `portfolio` of the project on the project screen.
    selected: Option<usize>,
    home: home::State,
    gallery: gallery::State,
    /// Warnings and errors shown above the page content.
    notices: Vec<Notice>,
    fretboard: fretboard::State,
    /// `None` until the window boots; tests never open an audio device.
    tones: Option<TonePlayer>,
    window_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field(
                "project",
                &self.project().map(|entry| entry.project.title.as_str()),
            )
            .field("viewer_open", &self.gallery.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            portfolio: None,
            selected: None,
            home: home::State::default(),
            gallery: gallery::State::new(),
            notices: Vec::new(),
            fretboard: fretboard::State::default(),
            tones: None,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
        }
    }
}

impl App {
    /// Initializes application state and kicks off loading of the startup
    /// manifest (CLI argument first, then the configured one).
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            theme_mode: config.general.theme_mode,
            i18n,
            tones: Some(TonePlayer::spawn()),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notices.push(Notice {
                severity: Severity::Warning,
                text: app.i18n.tr(&key),
            });
        }

        let manifest = flags.manifest.or_else(|| config.gallery.manifest.clone());
        app.config = config;

        let task = match manifest {
            Some(path) => update::load_manifest(path),
            None => Task::none(),
        };
        (app, task)
    }

    /// The selected project, if any.
    fn project(&self) -> Option<&ProjectEntry> {
        self.portfolio.as_ref()?.get(self.selected?)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.project() {
            Some(entry) if self.screen == Screen::Project => {
                format!("{} - {app_name}", entry.project.title)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let gallery_sub = subscription::create_gallery_subscription(self.screen, &self.gallery);

        Subscription::batch([window_sub, gallery_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            portfolio: &mut self.portfolio,
            selected: &mut self.selected,
            home: &mut self.home,
            gallery: &mut self.gallery,
            notices: &mut self.notices,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Gallery(gallery::Message::LinkPressed(url)) => update::open_link(url),
            Message::Gallery(gallery_message) => ctx
                .gallery
                .handle(gallery_message)
                .map(Message::Gallery),
            Message::Fretboard(fretboard_message) => {
                if let Some(pitch) = self.fretboard.update(fretboard_message) {
                    if let Some(tones) = &self.tones {
                        tones.play(pitch);
                    }
                }
                Task::none()
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::ManifestDialogResult(path) => match path {
                Some(path) => update::load_manifest(path),
                // User cancelled the dialog
                None => Task::none(),
            },
            Message::ManifestLoaded { path, result } => {
                update::handle_manifest_loaded(&mut ctx, path, result)
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::LinkOpened { url, result } => {
                update::handle_link_opened(&mut ctx, &url, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            config: &self.config,
            portfolio: self.portfolio.as_ref(),
            selected: self.selected,
            home: &self.home,
            gallery: &self.gallery,
            notices: &self.notices,
            fretboard: &self.fretboard,
            sound: self.tones.as_ref().is_some_and(TonePlayer::is_available),
            window_width: self.window_width,
        })
    }
}
