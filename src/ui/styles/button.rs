// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn solid(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Primary action and the active navbar entry.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => {
            solid(palette::ACCENT_500, WHITE, palette::ACCENT_600)
        }
        button::Status::Hovered => solid(palette::ACCENT_400, WHITE, palette::ACCENT_500),
        button::Status::Disabled => solid(
            if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            },
            palette::GRAY_400,
            palette::GRAY_400,
        ),
    }
}

/// Secondary actions and inactive navbar entries.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            solid(background, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => solid(
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.36, 0.36, 0.38)
            },
            text_color,
            palette::ACCENT_500,
        ),
        button::Status::Disabled => solid(background, palette::GRAY_400, palette::GRAY_400),
    }
}

/// Translucent control drawn over the dark viewer backdrop.
pub fn viewer_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::CONTROL_HOVER,
        button::Status::Pressed => opacity::OPAQUE,
        button::Status::Disabled => opacity::SUBTLE,
        button::Status::Active => opacity::CONTROL,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..button::Style::default()
    }
}

/// Borderless thumbnail button; the image itself is the affordance.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: None,
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}
