// SPDX-License-Identifier: MPL-2.0
//! About screen: application information, license and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToHome,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToHome,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToHome => Event::BackToHome,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .style(styles::button::unselected)
    .on_press(Message::BackToHome);

    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_app_section(&ctx))
        .push(build_license_section(&ctx))
        .push(build_credits_section(&ctx));

    scrollable(content).into()
}

fn build_app_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section(ctx.i18n.tr("about-section-app"), content.into())
}

fn build_license_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY));

    build_section(ctx.i18n.tr("about-section-license"), content.into())
}

fn build_credits_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = [
        "about-credits-iced",
        "about-credits-fluent",
        "about-credits-reqwest",
        "about-credits-cpal",
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XS), |column, key| {
        column.push(Text::new(format!("• {}", ctx.i18n.tr(key))).size(typography::BODY))
    });

    build_section(ctx.i18n.tr("about-section-credits"), content.into())
}

fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    container(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
