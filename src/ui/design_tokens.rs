// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use lexfolio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.93);

    // Navigation gradient ends (deep navy)
    pub const NAVY_900: Color = Color::from_rgb(0.122, 0.165, 0.212); // #1f2a36
    pub const NAVY_700: Color = Color::from_rgb(0.176, 0.243, 0.314); // #2d3e50

    // Brand accent (olive green, #618056)
    pub const ACCENT_400: Color = Color::from_rgb(0.490, 0.612, 0.447); // #7d9c72
    pub const ACCENT_500: Color = Color::from_rgb(0.380, 0.502, 0.337); // #618056
    pub const ACCENT_600: Color = Color::from_rgb(0.290, 0.392, 0.259); // #4a6442

    // Gold highlight for numbers and markers
    pub const GOLD_500: Color = Color::from_rgb(0.784, 0.651, 0.392); // #c8a664

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #f44336
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196F3
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);

    /// Border of a required field left empty (#ff6b6b).
    pub const FIELD_INVALID: Color = Color::from_rgb(1.0, 0.420, 0.420);

    /// WhatsApp brand green (#25D366).
    pub const WHATSAPP: Color = Color::from_rgb(0.145, 0.827, 0.400);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Control sizes

    /// Diameter of a carousel dot.
    pub const DOT: f32 = 12.0;

    /// Diameter of the floating WhatsApp button.
    pub const FLOATING_BUTTON: f32 = 60.0;

    /// Diameter of a timeline marker at rest.
    pub const TIMELINE_MARKER: f32 = 18.0;

    /// Thickness of distribution bars and the timeline progress line.
    pub const BAR_TRACK: f32 = 10.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const FORM_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline and animated numbers
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Hero headline and counter.
    pub const DISPLAY: f32 = 42.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, brand name.
    pub const TITLE_MD: f32 = 20.0;

    /// Accordion headers, small headings.
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;

    /// Most text.
    pub const BODY: f32 = 14.0;

    /// Hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Badges, footnotes.
    pub const CAPTION: f32 = 12.0;

    /// Line height multiplier used for wrapped text estimates.
    pub const LINE_HEIGHT: f32 = 1.5;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, validated fields
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::FORM_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
