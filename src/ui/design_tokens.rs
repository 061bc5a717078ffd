// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, and sizes shared by the storefront page.

## Organization

- **Palette**: Brand, surface, and notification colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and layout sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use storefront_fx::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::NAVBAR_SCROLLED,
    ..palette::WHITE
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
    pub const GRAY_900: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_700: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.88, 0.88, 0.88);
    pub const GRAY_100: Color = Color::from_rgb(0.97, 0.97, 0.97);

    // Brand
    pub const BRAND_500: Color = Color::from_rgb(0.545, 0.271, 0.075); // Saddle brown
    pub const BRAND_300: Color = Color::from_rgb(0.824, 0.706, 0.549); // Tan
    pub const HERO_START: Color = Color::from_rgb(0.4, 0.494, 0.918);

    // Notification backgrounds
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #f44336
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196F3
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.1;
    pub const TOAST_SHADOW: f32 = 0.15;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page has scrolled past the threshold.
    pub const NAVBAR_SCROLLED: f32 = 0.95;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 70.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Toast anchor distance from the top of the window.
    pub const TOAST_TOP: f32 = 100.0;
    /// Toast anchor distance from the right edge of the window.
    pub const TOAST_RIGHT: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Brand name in the navbar, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body text
    pub const BODY: f32 = 16.0;

    /// Secondary text
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    /// `0 4px 12px rgba(0,0,0,0.15)`
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::TOAST_SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 5.0 },
        blur_radius: 15.0,
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
    assert!(opacity::NAVBAR_SCROLLED > 0.0 && opacity::NAVBAR_SCROLLED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
