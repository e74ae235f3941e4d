// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size changes are always tracked; gallery keyboard and frame
//! subscriptions only run on the project screen.

use super::{Message, Screen};
use crate::ui::gallery;
use iced::{event, window, Subscription};

/// Tracks the window width used for the responsive grid.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Viewer keyboard routing and frame ticks, while the project screen is shown.
pub fn create_gallery_subscription(
    screen: Screen,
    gallery: &gallery::State,
) -> Subscription<Message> {
    if screen == Screen::Project {
        gallery.subscription().map(Message::Gallery)
    } else {
        Subscription::none()
    }
}
