// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Switches between the home, project, fretboard and about screens, opens a
//! manifest through the native file dialog and cycles the theme mode. The
//! project tab only appears once a project has been opened.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Row, Space},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub has_project: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Screen),
    OpenManifest,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SwitchScreen(Screen),
    OpenManifest,
    CycleTheme,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Show(screen) => Event::SwitchScreen(screen),
        Message::OpenManifest => Event::OpenManifest,
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = [
        (Screen::Home, "navbar-home"),
        (Screen::Project, "navbar-project"),
        (Screen::Fretboard, "navbar-fretboard"),
        (Screen::About, "navbar-about"),
    ]
    .into_iter()
    .filter(|(screen, _)| *screen != Screen::Project || ctx.has_project)
    .fold(Row::new().spacing(spacing::XS), |row, (screen, key)| {
        row.push(tab(ctx.i18n.tr(key), screen, ctx.screen == screen))
    });

    let open_button = button(text(ctx.i18n.tr("navbar-open-manifest")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::OpenManifest);

    let theme_label = ctx.i18n.tr_with_args(
        "navbar-theme",
        &[("mode", &ctx.i18n.tr(ctx.theme_mode.i18n_key()))],
    );
    let theme_button = button(text(theme_label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::CycleTheme);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(open_button)
        .push(theme_button);

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::panel)
        .into()
}

fn tab<'a>(label: String, screen: Screen, active: bool) -> Element<'a, Message> {
    let style = if active {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::Show(screen))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_every_screen() {
        let i18n = I18n::default();
        for screen in [Screen::Home, Screen::Project, Screen::Fretboard, Screen::About] {
            for has_project in [false, true] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    screen,
                    theme_mode: ThemeMode::Dark,
                    has_project,
                });
            }
        }
    }

    #[test]
    fn show_emits_switch_event() {
        assert_eq!(
            update(Message::Show(Screen::Fretboard)),
            Event::SwitchScreen(Screen::Fretboard)
        );
    }

    #[test]
    fn actions_map_to_events() {
        assert_eq!(update(Message::OpenManifest), Event::OpenManifest);
        assert_eq!(update(Message::CycleTheme), Event::CycleTheme);
    }
}
