// SPDX-License-Identifier: MPL-2.0
//! Gallery component: thumbnail grid plus the modal viewer.
//!
//! All viewer changes funnel through [`State::apply`], which forwards the
//! transition outcome to the live [`InteractionSession`]. The session exists
//! exactly while the viewer is open.

use super::{grid, modal};
use crate::config::{GalleryConfig, PRIORITY_THUMBNAILS};
use crate::error::Error;
use crate::gallery::source::{self, ImageSource};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::state::zoom::wheel_delta_y;
use crate::ui::state::{InteractionSession, Transition, ViewerState};
use crate::ui::widgets::zoomable_image::ImageInput;
use iced::widget::{image, stack};
use iced::{event, keyboard, window, Element, Subscription, Task, Vector};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Image(ImageInput),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    FrameTick(Instant),
    ImageFetched {
        generation: u64,
        index: usize,
        result: Result<image::Handle, Error>,
    },
    /// A link in the page header; opened by the application.
    LinkPressed(String),
}

/// Loading state of one item's pixels.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(image::Handle),
    Failed(&'static str),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a GalleryConfig,
    pub width: f32,
    pub header: Option<Element<'a, Message>>,
}

#[derive(Debug, Default)]
pub struct State {
    gallery: Gallery,
    viewer: ViewerState,
    session: Option<InteractionSession>,
    images: HashMap<usize, ImageSlot>,
    generation: u64,
    last_frame: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Page scrolling is suspended exactly while the viewer is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageSlot> {
        self.images.get(&index)
    }

    /// Replaces the item list. The viewer is closed first and fetches still
    /// in flight for the previous list are ignored when they complete.
    pub fn set_gallery(&mut self, gallery: Gallery, base_dir: Option<&Path>) -> Task<Message> {
        self.close();
        self.generation = self.generation.wrapping_add(1);
        self.images.clear();
        self.gallery = gallery;

        let generation = self.generation;
        let mut priority = Vec::new();
        let mut deferred = Vec::new();

        for (index, item) in self.gallery.items().iter().enumerate() {
            let Some(url) = item.url.as_deref().filter(|url| !url.trim().is_empty()) else {
                continue;
            };
            let source = ImageSource::parse(url, base_dir);
            if let Some(handle) = source.local_handle() {
                self.images.insert(index, ImageSlot::Ready(handle));
                continue;
            }

            self.images.insert(index, ImageSlot::Loading);
            let task = Task::perform(source::fetch_handle(source), move |result| {
                Message::ImageFetched {
                    generation,
                    index,
                    result,
                }
            });
            if index < PRIORITY_THUMBNAILS {
                priority.push(task);
            } else {
                deferred.push(task);
            }
        }

        match (priority.is_empty(), deferred.is_empty()) {
            (true, true) => Task::none(),
            (false, true) => Task::batch(priority),
            (true, false) => Task::batch(deferred),
            (false, false) => Task::batch(priority).chain(Task::batch(deferred)),
        }
    }

    /// Closes the viewer and ends the interaction session. Idempotent.
    pub fn close(&mut self) {
        if self.viewer.is_open() {
            tracing::debug!("gallery viewer closed");
        }
        self.apply(Transition::Close);
    }

    /// Applies a viewer transition and keeps the session in sync.
    pub fn apply(&mut self, transition: Transition) {
        let was_open = self.viewer.is_open();
        let applied = self.viewer.apply(transition, &self.gallery);

        match (was_open, self.viewer.is_open()) {
            (_, false) => {
                self.session = None;
                self.last_frame = None;
            }
            (false, true) => {
                tracing::debug!(index = ?self.viewer.active_index(), "gallery viewer opened");
                self.session = Some(InteractionSession::new());
            }
            (true, true) => {
                if matches!(transition, Transition::Next | Transition::Previous) {
                    // A new image starts without leftover gestures
                    self.session = Some(InteractionSession::new());
                } else if let Some(session) = self.session.as_mut() {
                    let now = Instant::now();
                    session.observe(applied, &self.viewer, now);
                    if applied.recentered_from.is_some() {
                        self.last_frame = Some(now);
                    }
                }
            }
        }
    }

    /// Whether the frame subscription should run.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(InteractionSession::needs_frames)
    }

    /// Offset the image should be drawn at this frame.
    #[must_use]
    pub fn displayed_offset(&self) -> Vector {
        match (&self.session, self.last_frame) {
            (Some(session), Some(now)) => session.displayed_offset(&self.viewer, now),
            _ => self.viewer.pan_offset(),
        }
    }

    pub fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailPressed(index) => self.apply(Transition::Open(index)),
            Message::Close => self.close(),
            Message::Next => self.apply(Transition::Next),
            Message::Previous => self.apply(Transition::Previous),
            Message::ZoomIn => self.apply(Transition::ZoomIn),
            Message::ZoomOut => self.apply(Transition::ZoomOut),
            Message::ResetZoom => self.apply(Transition::ResetZoom),
            Message::Image(input) => self.handle_image_input(input),
            Message::RawEvent { event, .. } => self.handle_raw_event(&event),
            Message::FrameTick(now) => {
                self.last_frame = Some(now);
                let committed = self.session.as_mut().and_then(|s| s.frame(now));
                if let Some(transition) = committed {
                    self.apply(transition);
                }
            }
            Message::ImageFetched {
                generation,
                index,
                result,
            } => {
                if generation != self.generation {
                    return Task::none();
                }
                let slot = match result {
                    Ok(handle) => ImageSlot::Ready(handle),
                    Err(err) => {
                        tracing::warn!(index, error = %err, "gallery image could not be loaded");
                        ImageSlot::Failed(match &err {
                            Error::Fetch(fetch) => fetch.i18n_key(),
                            _ => "gallery-image-error",
                        })
                    }
                };
                self.images.insert(index, slot);
            }
            Message::LinkPressed(_) => {}
        }
        Task::none()
    }

    fn handle_image_input(&mut self, input: ImageInput) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let transition = match input {
            ImageInput::Pressed(position) => {
                session.pointer_pressed(position, &self.viewer);
                None
            }
            ImageInput::Moved(position) => {
                session.pointer_moved(position);
                None
            }
            ImageInput::Released(position) => session.pointer_released(position),
            ImageInput::Wheel(delta) => Some(Transition::Wheel(wheel_delta_y(delta))),
            ImageInput::FingerPressed(id, position) => {
                session.finger_pressed(id, position, &self.viewer);
                None
            }
            ImageInput::FingerMoved(id, position) => session.finger_moved(id, position),
            ImageInput::FingerLifted(id) => session.finger_lifted(id, &self.viewer),
        };
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event) {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
            self.handle_key(key);
        }
    }

    /// Escape closes, arrows navigate; everything else passes through.
    fn handle_key(&mut self, key: &keyboard::Key) {
        if !self.viewer.is_open() {
            return;
        }
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => self.close(),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.apply(Transition::Previous);
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.apply(Transition::Next);
            }
            _ => {}
        }
    }

    /// Keyboard routing while open, frame ticks while a pan or recenter is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = if self.viewer.is_open() {
            event::listen_with(|event, _status, window| {
                matches!(
                    event,
                    event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
                )
                .then_some(Message::RawEvent { window, event })
            })
        } else {
            Subscription::none()
        };

        let frames = if self.needs_frames() {
            window::frames().map(Message::FrameTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, frames])
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let grid = grid::view(grid::ViewContext {
            i18n: ctx.i18n,
            config: ctx.config,
            gallery: &self.gallery,
            images: &self.images,
            locked: self.scroll_locked(),
            width: ctx.width,
            header: ctx.header,
        });

        let Some(index) = self.viewer.active_index() else {
            return grid;
        };

        let layer = modal::view(modal::ViewContext {
            i18n: ctx.i18n,
            gallery: &self.gallery,
            index,
            slot: self.images.get(&index),
            zoom: self.viewer.zoom(),
            offset: self.displayed_offset(),
        });

        stack![grid, layer].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::gallery::tests::{item, sized};
    use crate::gallery::GalleryItem;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;
    use iced::Point;

    fn press(state: &mut State, named: Named) {
        state.handle_key(&Key::Named(named));
    }

    fn with_gallery(gallery: Gallery) -> State {
        let mut state = State::new();
        let _ = state.set_gallery(gallery, None);
        state
    }

    #[test]
    fn escape_closes_and_second_escape_is_noop() {
        let mut state = with_gallery(sized(3));
        let _ = state.handle(Message::ThumbnailPressed(1));
        assert!(state.is_open());

        press(&mut state, Named::Escape);
        assert!(!state.is_open());
        press(&mut state, Named::Escape);
        assert!(!state.is_open());
        assert_eq!(*state.viewer(), ViewerState::default());
    }

    #[test]
    fn arrows_navigate_only_while_open() {
        let mut state = with_gallery(sized(3));
        press(&mut state, Named::ArrowRight);
        assert!(!state.is_open());

        let _ = state.handle(Message::ThumbnailPressed(0));
        press(&mut state, Named::ArrowLeft);
        assert_eq!(state.viewer().active_index(), Some(2));
        press(&mut state, Named::ArrowRight);
        assert_eq!(state.viewer().active_index(), Some(0));
    }

    #[test]
    fn other_keys_pass_through() {
        let mut state = with_gallery(sized(3));
        let _ = state.handle(Message::ThumbnailPressed(1));
        press(&mut state, Named::Space);
        assert_eq!(state.viewer().active_index(), Some(1));
    }

    #[test]
    fn scroll_lock_follows_viewer_lifetime() {
        let mut state = with_gallery(sized(3));
        assert!(!state.scroll_locked());

        let _ = state.handle(Message::ThumbnailPressed(0));
        assert!(state.scroll_locked());
        press(&mut state, Named::ArrowRight);
        assert!(state.scroll_locked());

        press(&mut state, Named::Escape);
        assert!(!state.scroll_locked());

        let _ = state.handle(Message::ThumbnailPressed(1));
        let _ = state.set_gallery(sized(2), None);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn item_without_dimensions_never_opens() {
        let mut state = with_gallery(Gallery::new(vec![item("a.jpg", Some(100), None)]));
        let _ = state.handle(Message::ThumbnailPressed(0));
        assert!(!state.is_open());
    }

    #[test]
    fn session_lives_only_while_open() {
        let mut state = with_gallery(sized(2));
        assert!(state.session.is_none());
        let _ = state.handle(Message::ThumbnailPressed(0));
        assert!(state.session.is_some());
        let _ = state.handle(Message::Close);
        assert!(state.session.is_none());
    }

    #[test]
    fn drag_commits_on_frame_and_flushes_on_release() {
        let mut state = with_gallery(sized(1));
        let _ = state.handle(Message::ThumbnailPressed(0));
        let _ = state.handle(Message::ZoomIn);

        let _ = state.handle(Message::Image(ImageInput::Pressed(Point::new(0.0, 0.0))));
        let _ = state.handle(Message::Image(ImageInput::Moved(Point::new(4.0, 0.0))));
        let _ = state.handle(Message::Image(ImageInput::Moved(Point::new(8.0, 0.0))));
        assert_eq!(state.viewer().pan_offset(), Vector::ZERO);
        assert!(state.needs_frames());

        let _ = state.handle(Message::FrameTick(Instant::now()));
        assert_eq!(state.viewer().pan_offset(), Vector::new(8.0, 0.0));

        let _ = state.handle(Message::Image(ImageInput::Moved(Point::new(12.0, 1.0))));
        let _ = state.handle(Message::Image(ImageInput::Released(Some(Point::new(
            15.0, 2.0,
        )))));
        assert_eq!(state.viewer().pan_offset(), Vector::new(15.0, 2.0));
        assert!(!state.needs_frames());
    }

    #[test]
    fn replacing_gallery_closes_viewer_and_drops_stale_fetches() {
        let mut state = with_gallery(sized(2));
        let stale_generation = state.generation;
        let _ = state.handle(Message::ThumbnailPressed(1));

        let _ = state.set_gallery(sized(1), None);
        assert!(!state.is_open());

        let _ = state.handle(Message::ImageFetched {
            generation: stale_generation,
            index: 0,
            result: Err(FetchError::Status(500).into()),
        });
        assert!(matches!(state.image(0), Some(ImageSlot::Ready(_))));
    }

    #[test]
    fn failed_fetch_keeps_item_eligible() {
        let gallery = Gallery::new(vec![GalleryItem {
            url: Some("https://example.invalid/a.jpg".into()),
            width: Some(10),
            height: Some(10),
            ..GalleryItem::default()
        }]);
        let mut state = State::new();
        let _ = state.set_gallery(gallery, None);
        assert!(matches!(state.image(0), Some(ImageSlot::Loading)));

        let generation = state.generation;
        let _ = state.handle(Message::ImageFetched {
            generation,
            index: 0,
            result: Err(FetchError::Status(404).into()),
        });
        assert!(matches!(
            state.image(0),
            Some(ImageSlot::Failed("error-fetch-status"))
        ));

        let _ = state.handle(Message::ThumbnailPressed(0));
        assert!(state.is_open());
    }

    #[test]
    fn wheel_input_zooms() {
        let mut state = with_gallery(sized(1));
        let _ = state.handle(Message::ThumbnailPressed(0));
        let _ = state.handle(Message::Image(ImageInput::Wheel(
            iced::mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        )));
        assert!(state.viewer().zoom().is_magnified());
    }
}
