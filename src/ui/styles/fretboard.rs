// SPDX-License-Identifier: MPL-2.0
//! Fretboard cell styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// How a position on the neck should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Idle,
    Found,
    Missed,
}

/// The neck background.
pub fn neck(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ROSEWOOD)),
        border: Border {
            color: palette::FRET_WIRE,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// A clickable string/fret intersection.
pub fn cell(mark: CellMark) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (mark, status) {
            (CellMark::Found, _) => palette::SUCCESS_500,
            (CellMark::Missed, _) => palette::ERROR_500,
            (CellMark::Idle, button::Status::Hovered) => Color {
                a: 0.35,
                ..palette::INLAY
            },
            (CellMark::Idle, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: Color {
                    a: 0.5,
                    ..palette::FRET_WIRE
                },
                width: 0.5,
                radius: radius::FULL.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Inlay dot under the neck at marked frets.
pub fn inlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INLAY)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_cells_are_green_regardless_of_hover() {
        let style = cell(CellMark::Found);
        assert_eq!(
            style(&Theme::Dark, button::Status::Hovered).background,
            Some(Background::Color(palette::SUCCESS_500))
        );
    }

    #[test]
    fn idle_cells_are_transparent_until_hovered() {
        let style = cell(CellMark::Idle);
        assert_eq!(
            style(&Theme::Dark, button::Status::Active).background,
            Some(Background::Color(Color::TRANSPARENT))
        );
        assert_ne!(
            style(&Theme::Dark, button::Status::Hovered).background,
            Some(Background::Color(Color::TRANSPARENT))
        );
    }
}
