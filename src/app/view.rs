// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar above the active screen.

use super::{Message, Screen};
use crate::config::Config;
use crate::gallery::Manifest;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::fretboard;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::project::{self, Notice};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub config: &'a Config,
    pub portfolio: Option<&'a Manifest>,
    pub selected: Option<usize>,
    pub home: &'a home::State,
    pub gallery: &'a gallery::State,
    pub notices: &'a [Notice],
    pub fretboard: &'a fretboard::State,
    /// Whether the tone output is usable.
    pub sound: bool,
    pub window_width: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
        has_project: ctx.selected.is_some(),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => ctx
            .home
            .view(home::ViewContext {
                i18n: ctx.i18n,
                manifest: ctx.portfolio,
                notices: ctx.notices,
                width: ctx.window_width,
            })
            .map(Message::Home),
        Screen::Project => view_project(&ctx),
        Screen::Fretboard => ctx
            .fretboard
            .view(fretboard::ViewContext {
                i18n: ctx.i18n,
                sound: ctx.sound,
            })
            .map(Message::Fretboard),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_project<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entry = ctx
        .selected
        .and_then(|index| ctx.portfolio.and_then(|manifest| manifest.get(index)));

    let header = project::view(project::ViewContext {
        i18n: ctx.i18n,
        project: entry.map(|entry| &entry.project),
        cover: ctx.selected.and_then(|index| ctx.home.cover(index)),
        notices: ctx.notices,
        on_link: gallery::Message::LinkPressed,
    });

    ctx.gallery
        .view(gallery::ViewContext {
            i18n: ctx.i18n,
            config: &ctx.config.gallery,
            width: ctx.window_width,
            header: Some(header),
        })
        .map(Message::Gallery)
}
