// SPDX-License-Identifier: MPL-2.0
//! Styles for the full-screen viewer layer.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dark backdrop covering the whole window.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Header bar holding the zoom readout, counter and close button.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CONTROL,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Caption under the image.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color {
            a: opacity::CONTROL_HOVER,
            ..WHITE
        }),
        ..Default::default()
    }
}
