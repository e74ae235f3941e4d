// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **palette**: base colors, including the fretboard woods and inlays
//! - **opacity**: backdrop and surface alpha levels
//! - **spacing**: 4px-based spacing scale
//! - **sizing**: fixed component sizes (thumbnails, modal chrome, frets)
//! - **typography**: font size scale
//! - **radius**: corner radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    pub const ACCENT_400: Color = Color::from_rgb(0.98, 0.62, 0.35);
    pub const ACCENT_500: Color = Color::from_rgb(0.93, 0.5, 0.22);
    pub const ACCENT_600: Color = Color::from_rgb(0.8, 0.4, 0.15);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Fretboard
    pub const ROSEWOOD: Color = Color::from_rgb(0.24, 0.14, 0.09);
    pub const FRET_WIRE: Color = Color::from_rgb(0.72, 0.72, 0.7);
    pub const STRING: Color = Color::from_rgb(0.85, 0.8, 0.65);
    pub const INLAY: Color = Color::from_rgb(0.93, 0.9, 0.82);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    /// Modal backdrop behind the viewer.
    pub const BACKDROP: f32 = 0.9;
    pub const CONTROL: f32 = 0.6;
    pub const CONTROL_HOVER: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Maximum content width when the gallery is not full width.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    /// Height of the viewer header bar.
    pub const MODAL_HEADER: f32 = 48.0;
    pub const NAV_BUTTON: f32 = 44.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const NAVBAR_HEIGHT: f32 = 52.0;

    pub const FRET_CELL_WIDTH: f32 = 44.0;
    pub const STRING_ROW_HEIGHT: f32 = 30.0;
    pub const NUT_WIDTH: f32 = 6.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 32.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::CONTROL);
    assert!(opacity::CONTROL_HOVER > opacity::CONTROL);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::FRET_CELL_WIDTH > sizing::NUT_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }
}
