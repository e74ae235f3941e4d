// SPDX-License-Identifier: MPL-2.0
//! Image widget drawn fitted to its bounds, scaled by a zoom factor and
//! translated by a pan offset.
//!
//! The widget owns no zoom or pan state; it reports raw pointer, wheel and
//! touch input through [`ImageInput`] and draws whatever it is given.

use iced::advanced::image::Renderer as ImageRenderer;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::ScrollDelta;
use iced::widget::image as iced_image;
use iced::{mouse, touch, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};

/// Raw input forwarded to the owner.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    Pressed(Point),
    Moved(Point),
    Released(Option<Point>),
    Wheel(ScrollDelta),
    FingerPressed(touch::Finger, Point),
    FingerMoved(touch::Finger, Point),
    FingerLifted(touch::Finger),
}

#[derive(Debug, Default)]
struct State {
    pressed: bool,
}

pub struct ZoomableImage<Message> {
    handle: iced_image::Handle,
    image_size: Size,
    zoom: f32,
    offset: Vector,
    on_input: Box<dyn Fn(ImageInput) -> Message>,
}

impl<Message> ZoomableImage<Message> {
    pub fn new(
        handle: iced_image::Handle,
        (width, height): (u32, u32),
        on_input: impl Fn(ImageInput) -> Message + 'static,
    ) -> Self {
        Self {
            handle,
            image_size: Size::new(width as f32, height as f32),
            zoom: 1.0,
            offset: Vector::ZERO,
            on_input: Box::new(on_input),
        }
    }

    #[must_use]
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    fn image_bounds(&self, bounds: Rectangle) -> Rectangle {
        image_bounds(bounds, self.image_size, self.zoom, self.offset)
    }
}

/// Contain-fits `image` into `bounds`, scales by `zoom` around the centre and
/// translates by `offset`.
#[must_use]
pub fn image_bounds(bounds: Rectangle, image: Size, zoom: f32, offset: Vector) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }
    let fit = (bounds.width / image.width).min(bounds.height / image.height);
    let width = image.width * fit * zoom;
    let height = image.height * fit * zoom;
    let center = bounds.center() + offset;

    Rectangle {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}

impl<Message: Clone> Widget<Message, Theme, iced::Renderer> for ZoomableImage<Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let target = self.image_bounds(bounds);

        renderer.with_layer(bounds, |renderer| {
            let image = iced::advanced::image::Image::<iced_image::Handle> {
                handle: self.handle.clone(),
                filter_method: iced::advanced::image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, target, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        let input = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(position) = cursor.position_over(bounds) else {
                    return;
                };
                state.pressed = true;
                ImageInput::Pressed(position)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.pressed => {
                ImageInput::Moved(*position)
            }
            // Releases outside the bounds still end the drag
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.pressed => {
                state.pressed = false;
                ImageInput::Released(cursor.position())
            }
            Event::Mouse(mouse::Event::CursorLeft) if state.pressed => {
                state.pressed = false;
                ImageInput::Released(None)
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
                ImageInput::Wheel(*delta)
            }
            Event::Touch(touch::Event::FingerPressed { id, position })
                if bounds.contains(*position) =>
            {
                ImageInput::FingerPressed(*id, *position)
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                ImageInput::FingerMoved(*id, *position)
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => ImageInput::FingerLifted(*id),
            _ => return,
        };

        shell.publish((self.on_input)(input));
        shell.capture_event();
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.pressed && self.zoom > 1.0 {
            return mouse::Interaction::Grabbing;
        }
        if self.zoom > 1.0 && cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Grab;
        }
        mouse::Interaction::default()
    }
}

impl<'a, Message: Clone + 'static> From<ZoomableImage<Message>> for Element<'a, Message> {
    fn from(widget: ZoomableImage<Message>) -> Self {
        Element::new(widget)
    }
}
