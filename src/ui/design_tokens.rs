// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the banner renderer.

## Organization

- **Palette**: Base and semantic colors (accent + tinted surface per theme)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px baseline grid)
- **Sizing**: Banner and control sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use banner_overlay::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let pressed = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::GRAY_400
};

let padding = spacing::SM; // 12px
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.96);

    // Semantic accents
    pub const CRITICAL_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Tinted banner surfaces
    pub const CRITICAL_100: Color = Color::from_rgb(0.99, 0.89, 0.88);
    pub const WARNING_100: Color = Color::from_rgb(1.0, 0.95, 0.84);
    pub const SUCCESS_100: Color = Color::from_rgb(0.88, 0.96, 0.9);
    pub const INFO_100: Color = Color::from_rgb(0.89, 0.93, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed banner width; height follows content.
    pub const BANNER_WIDTH: f32 = 360.0;
    /// Square hit area of dismiss / next / previous controls.
    pub const CONTROL_SIZE: f32 = 28.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title
    pub const TITLE_SM: f32 = 15.0;

    /// Banner body
    pub const BODY: f32 = 14.0;

    /// Control glyphs and custom region labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Accent border around a banner
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > 0.0);
    assert!(radius::MD > radius::SM);

    assert!(sizing::BANNER_WIDTH > sizing::CONTROL_SIZE * 4.0);
};
