// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the toast design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Inner spacing of the toast card
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_toast::ui::design_tokens::{palette, opacity};
use iced::Color;

// The fill color of a warning toast
let warning_bg = Color {
    a: opacity::ALERT,
    ..palette::YELLOW
};
```

## Modification

⚠️ Tokens are the single source of truth for the category color table.
Before modifying, check the resolver tests in `toast::style`.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Category fills
    pub const YELLOW: Color = Color::from_rgb(1.0, 0.8, 0.0);
    pub const GREEN: Color = Color::from_rgb(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0);
    pub const RED: Color = Color::from_rgb(1.0, 59.0 / 255.0, 48.0 / 255.0);
    pub const PURPLE: Color = Color::from_rgb(175.0 / 255.0, 82.0 / 255.0, 222.0 / 255.0);

    /// Label color on warning/success/error fills (RGB 36, 71, 161).
    pub const NAVY: Color = Color::from_rgb(36.0 / 255.0, 71.0 / 255.0, 161.0 / 255.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Fill opacity of the warning/success/error cards.
    pub const ALERT: f32 = 0.85;

    /// Fill opacity of the notify and default custom cards.
    pub const SCRIM: f32 = 0.75;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Gap between the icon and the label.
    pub const XS: f32 = 5.0;

    /// Horizontal card padding; also half the card's height headroom
    /// around the label.
    pub const SM: f32 = 10.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Default icon edge length.
    pub const ICON: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast label size (bold).
    pub const BODY: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Corner radius of the toast card.
    pub const TOAST: f32 = 10.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::ALERT > opacity::SCRIM && opacity::ALERT < 1.0);

    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);

    // Sizing and typography validation
    assert!(sizing::ICON > 0.0);
    assert!(typography::BODY > 0.0);
    assert!(radius::TOAST >= 0.0);

    // Color validation
    assert!(palette::NAVY.r >= 0.0 && palette::NAVY.r <= 1.0);
    assert!(palette::NAVY.b >= 0.0 && palette::NAVY.b <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navy_matches_source_rgb_triple() {
        assert_eq!((palette::NAVY.r * 255.0).round() as u8, 36);
        assert_eq!((palette::NAVY.g * 255.0).round() as u8, 71);
        assert_eq!((palette::NAVY.b * 255.0).round() as u8, 161);
    }

    #[test]
    fn category_fills_are_distinct() {
        assert_ne!(palette::YELLOW, palette::GREEN);
        assert_ne!(palette::GREEN, palette::RED);
        assert_ne!(palette::RED, palette::PURPLE);
    }
}
