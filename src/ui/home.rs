// SPDX-License-Identifier: MPL-2.0
//! Home screen: the list of public projects as cover cards.
//!
//! Covers load like gallery thumbnails. Local files resolve immediately,
//! remote ones are fetched and tagged with a generation so results from a
//! replaced manifest are dropped.

use crate::error::Error;
use crate::gallery::source::{self, ImageSource};
use crate::gallery::{Manifest, Project};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::ImageSlot;
use crate::ui::project::{self, Notice};
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length, Task};
use std::collections::HashMap;

/// Below this width cards stack in a single column.
const SINGLE_COLUMN_BELOW: f32 = 640.0;

/// Cover height relative to the card width.
const COVER_ASPECT: f32 = 16.0 / 10.0;

#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    CoverFetched {
        generation: u64,
        index: usize,
        result: Result<image::Handle, Error>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenProject(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manifest: Option<&'a Manifest>,
    pub notices: &'a [Notice],
    pub width: f32,
}

#[derive(Debug, Default)]
pub struct State {
    covers: HashMap<usize, ImageSlot>,
    generation: u64,
}

impl State {
    /// Starts loading the covers of the listed projects in `manifest`.
    pub fn set_manifest(&mut self, manifest: &Manifest) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        self.covers.clear();

        let generation = self.generation;
        let mut tasks = Vec::new();
        for index in manifest.listed() {
            let Some(cover) = manifest
                .get(index)
                .and_then(|entry| entry.project.cover_image.as_deref())
                .filter(|cover| !cover.trim().is_empty())
            else {
                continue;
            };

            let source = ImageSource::parse(cover, manifest.base_dir.as_deref());
            if let Some(handle) = source.local_handle() {
                self.covers.insert(index, ImageSlot::Ready(handle));
                continue;
            }
            self.covers.insert(index, ImageSlot::Loading);
            tasks.push(Task::perform(source::fetch_handle(source), move |result| {
                Message::CoverFetched {
                    generation,
                    index,
                    result,
                }
            }));
        }
        Task::batch(tasks)
    }

    #[must_use]
    pub fn cover(&self, index: usize) -> Option<&ImageSlot> {
        self.covers.get(&index)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Open(index) => Event::OpenProject(index),
            Message::CoverFetched {
                generation,
                index,
                result,
            } => {
                if generation != self.generation {
                    return Event::None;
                }
                let slot = match result {
                    Ok(handle) => ImageSlot::Ready(handle),
                    Err(err) => {
                        tracing::warn!(index, error = %err, "project cover could not be loaded");
                        ImageSlot::Failed(match &err {
                            Error::Fetch(fetch) => fetch.i18n_key(),
                            _ => "gallery-image-error",
                        })
                    }
                };
                self.covers.insert(index, slot);
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::MD).padding(spacing::LG);

        if !ctx.notices.is_empty() {
            content = content.push(project::notices(ctx.notices));
        }

        let Some(manifest) = ctx.manifest else {
            content = content.push(project::missing(ctx.i18n));
            return page(content);
        };

        content = content
            .push(text(ctx.i18n.tr("home-title")).size(typography::TITLE_LG))
            .push(text(ctx.i18n.tr("home-tagline")).size(typography::BODY_LG));

        let listed = manifest.listed();
        if listed.is_empty() {
            content = content.push(text(ctx.i18n.tr("home-empty")).size(typography::BODY));
        } else {
            content = content.push(self.cards(ctx.i18n, manifest, &listed, ctx.width));
        }
        page(content)
    }

    fn cards<'a>(
        &'a self,
        i18n: &'a I18n,
        manifest: &'a Manifest,
        listed: &[usize],
        width: f32,
    ) -> Element<'a, Message> {
        let columns = columns_at(width);
        let width = width.min(sizing::CONTENT_MAX_WIDTH + 2.0 * spacing::LG);
        let gaps = spacing::MD * (columns - 1) as f32;
        let card_width = ((width - 2.0 * spacing::LG - gaps) / columns as f32).max(1.0);

        let mut list = Column::new().spacing(spacing::MD);
        for chunk in listed.chunks(columns) {
            let row = chunk
                .iter()
                .filter_map(|&index| manifest.get(index).map(|entry| (index, &entry.project)))
                .fold(Row::new().spacing(spacing::MD), |row, (index, project)| {
                    row.push(card(i18n, index, project, self.cover(index), card_width))
                });
            list = list.push(row);
        }
        list.into()
    }
}

fn page<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    let content = container(content)
        .center_x(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH + 2.0 * spacing::LG);
    scrollable(container(content).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// One column on narrow windows, two otherwise.
fn columns_at(width: f32) -> usize {
    if width < SINGLE_COLUMN_BELOW {
        1
    } else {
        2
    }
}

fn card<'a>(
    i18n: &'a I18n,
    index: usize,
    project: &'a Project,
    cover: Option<&'a ImageSlot>,
    width: f32,
) -> Element<'a, Message> {
    let height = width / COVER_ASPECT;
    let picture: Element<'a, Message> = match cover {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Loading) => placeholder(i18n.tr("gallery-image-loading"), width, height),
        Some(ImageSlot::Failed(key)) => placeholder(i18n.tr(key), width, height),
        None => placeholder(project.title.clone(), width, height),
    };

    let mut chips = Row::new().spacing(spacing::XS).align_y(Alignment::Center);
    if let Some(kind) = project.project_type {
        chips = chips.push(chip(i18n.tr(kind.i18n_key())));
    }
    if let Some(year) = project.year {
        chips = chips.push(chip(year.to_string()));
    }

    let mut body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(chips)
        .push(text(project.title.as_str()).size(typography::TITLE_SM));
    if let Some(blurb) = project.blurb() {
        body = body.push(text(blurb).size(typography::BODY));
    }
    body = body.push(text(i18n.tr("home-view-project")).size(typography::CAPTION));

    let inner = container(Column::new().push(picture).push(body))
        .width(Length::Fixed(width))
        .style(styles::container::panel);

    button(inner)
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::Open(index))
        .into()
}

fn chip<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tag)
        .into()
}

fn placeholder<'a>(label: String, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(styles::container::placeholder)
        .into()
}
