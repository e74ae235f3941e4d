// SPDX-License-Identifier: MPL-2.0
//! Responsive thumbnail grid.

use super::component::{ImageSlot, Message};
use crate::config::GalleryConfig;
use crate::gallery::{Gallery, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock::scroll_lock;
use iced::widget::{button, container, image, scrollable, text, Column, Row};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;

/// Aspect ratio used for figures without known dimensions.
const FALLBACK_ASPECT: f32 = 4.0 / 3.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a GalleryConfig,
    pub gallery: &'a Gallery,
    pub images: &'a HashMap<usize, ImageSlot>,
    /// Suspends scrolling while the viewer is open.
    pub locked: bool,
    /// Current window width, for the responsive column count.
    pub width: f32,
    /// Page content scrolled together with the grid, above the title.
    pub header: Option<Element<'a, Message>>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        i18n,
        config,
        gallery,
        images,
        locked,
        width,
        header,
    } = ctx;

    let title = text(config.title.clone()).size(typography::TITLE_MD);

    let body: Element<'a, Message> = if gallery.is_empty() {
        text(i18n.tr("gallery-empty")).size(typography::BODY).into()
    } else {
        let width = if config.full_width {
            width
        } else {
            width.min(sizing::CONTENT_MAX_WIDTH + 2.0 * spacing::LG)
        };
        let count = config.columns.at_width(width);
        rows(gallery, images, i18n, count, column_width(width, count))
    };

    let mut content = Column::new().spacing(spacing::MD).padding(spacing::LG);
    if let Some(header) = header {
        content = content.push(header);
    }
    let content = content.push(title).push(body);

    let content = container(content).center_x(Length::Fill);
    let content = if config.full_width {
        content
    } else {
        content.max_width(sizing::CONTENT_MAX_WIDTH + 2.0 * spacing::LG)
    };

    scroll_lock(scrollable(container(content).center_x(Length::Fill)).height(Length::Fill))
        .locked(locked)
        .into()
}

/// Width of one column once gaps are taken out.
fn column_width(total: f32, columns: usize) -> f32 {
    let gaps = spacing::MD * columns.saturating_sub(1) as f32;
    ((total - 2.0 * spacing::LG - gaps) / columns.max(1) as f32).max(1.0)
}

fn rows<'a>(
    gallery: &'a Gallery,
    images: &'a HashMap<usize, ImageSlot>,
    i18n: &'a I18n,
    columns: usize,
    cell_width: f32,
) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    let indexed: Vec<(usize, &GalleryItem)> = gallery.items().iter().enumerate().collect();

    for chunk in indexed.chunks(columns.max(1)) {
        let row = chunk.iter().fold(
            Row::new().spacing(spacing::MD),
            |row, &(index, item)| {
                row.push(figure(
                    index,
                    item,
                    gallery.is_eligible(index),
                    images.get(&index),
                    i18n,
                    cell_width,
                ))
            },
        );
        grid = grid.push(row);
    }
    grid.into()
}

fn figure<'a>(
    index: usize,
    item: &'a GalleryItem,
    eligible: bool,
    slot: Option<&'a ImageSlot>,
    i18n: &'a I18n,
    width: f32,
) -> Element<'a, Message> {
    let height = width / item.aspect_ratio().unwrap_or(FALLBACK_ASPECT);

    let picture: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Loading) => placeholder(i18n.tr("gallery-image-loading"), width, height),
        Some(ImageSlot::Failed(key)) => placeholder(i18n.tr(key), width, height),
        None => placeholder(
            item.alt.clone().unwrap_or_else(|| i18n.tr("gallery-image-missing")),
            width,
            height,
        ),
    };

    if eligible {
        button(picture)
            .padding(0)
            .style(styles::button::thumbnail)
            .on_press(Message::ThumbnailPressed(index))
            .into()
    } else {
        // Not interactive: no button, no press message
        container(picture).into()
    }
}

fn placeholder<'a>(label: String, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn column_width_subtracts_gaps_and_padding() {
        let width = column_width(2.0 * spacing::LG + 3.0 * 100.0 + 2.0 * spacing::MD, 3);
        assert_abs_diff_eq!(width, 100.0);
    }

    #[test]
    fn column_width_never_collapses() {
        assert_abs_diff_eq!(column_width(10.0, 4), 1.0);
    }
}
