// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer layer.
//!
//! Layout: a backdrop that closes on press, and inside it an opaque panel
//! (header, image with side navigation, caption) that swallows clicks.

use super::component::{ImageSlot, Message};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ZoomFactor;
use crate::ui::styles;
use crate::ui::widgets::zoomable_image::ZoomableImage;
use iced::widget::{button, container, mouse_area, opaque, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Vector};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub index: usize,
    pub slot: Option<&'a ImageSlot>,
    pub zoom: ZoomFactor,
    pub offset: Vector,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut panel = Column::new()
        .push(header(&ctx))
        .push(stage(&ctx))
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill);
    if let Some(caption) = caption(&ctx) {
        panel = panel.push(caption);
    }

    let backdrop = container(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::overlay::backdrop);

    // Presses that reach the backdrop (outside the opaque panel) close the viewer
    opaque(mouse_area(backdrop).on_press(Message::Close))
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let zoom = ctx.zoom;

    let zoom_label = text(i18n.tr_with_args(
        "viewer-zoom-percent",
        &[("percent", &zoom.percent().to_string())],
    ))
    .size(typography::BODY);

    let position = ctx.gallery.eligible_position(ctx.index).unwrap_or(0);
    let counter = text(i18n.tr_with_args(
        "viewer-position",
        &[
            ("current", &position.to_string()),
            ("total", &ctx.gallery.eligible_count().to_string()),
        ],
    ))
    .size(typography::BODY);

    let zoom_out = control(i18n.tr("viewer-zoom-out"), (!zoom.is_min()).then_some(Message::ZoomOut));
    let reset = control(i18n.tr("viewer-zoom-reset"), Some(Message::ResetZoom));
    let zoom_in = control(i18n.tr("viewer-zoom-in"), (!zoom.is_max()).then_some(Message::ZoomIn));
    let close = control(i18n.tr("viewer-close"), Some(Message::Close));

    let bar = Row::new()
        .push(zoom_label)
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(zoom_out)
        .push(reset)
        .push(zoom_in)
        .push(close)
        .spacing(spacing::XS)
        .padding([spacing::XXS, spacing::SM])
        .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_HEADER))
        .center_y(Length::Fixed(sizing::MODAL_HEADER))
        .style(styles::overlay::header)
        .into()
}

fn stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match (ctx.slot, ctx.gallery.get(ctx.index)) {
        (Some(ImageSlot::Ready(handle)), Some(item)) => match item.dimensions() {
            Some(size) => ZoomableImage::new(handle.clone(), size, Message::Image)
                .zoom(ctx.zoom.value())
                .offset(ctx.offset)
                .into(),
            None => status(ctx.i18n.tr("gallery-image-missing")),
        },
        (Some(ImageSlot::Failed(key)), _) => status(ctx.i18n.tr(key)),
        (Some(ImageSlot::Loading), _) => status(ctx.i18n.tr("gallery-image-loading")),
        _ => status(ctx.i18n.tr("gallery-image-missing")),
    };

    let previous = nav_button("‹", Message::Previous);
    let next = nav_button("›", Message::Next);

    Row::new()
        .push(previous)
        .push(container(picture).width(Length::Fill).height(Length::Fill))
        .push(next)
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .height(Length::Fill)
        .into()
}

fn status<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::BODY_LG))
        .center(Length::Fill)
        .into()
}

fn control<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::viewer_control)
        .on_press_maybe(on_press)
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(typography::TITLE_MD)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::viewer_control)
    .on_press(message)
    .into()
}

/// Caption strip, omitted when the item has no caption.
fn caption<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let caption = ctx
        .gallery
        .get(ctx.index)
        .and_then(|item| item.caption.as_deref())
        .filter(|caption| !caption.trim().is_empty())?;

    Some(
        container(text(caption).size(typography::BODY))
            .center_x(Length::Fill)
            .padding(spacing::XS)
            .style(styles::overlay::caption)
            .into(),
    )
}
