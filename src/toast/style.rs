// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from a toast category to its visual style.
//!
//! `resolve` is the only entry point. It has no side effects and no error
//! paths: every category maps to a fixed (background, label, icon) triple,
//! and `Custom` falls back to documented defaults for any override the
//! caller left unset.

use super::Category;
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::icons::Icon;
use iced::Color;

/// Caller-supplied styling for [`Category::Custom`] toasts.
///
/// Unset fields fall back to the defaults documented on [`resolve`].
/// Overrides are ignored for the four fixed categories.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub icon: Option<Icon>,
    pub icon_tint: Option<Color>,
}

/// The resolved style of one toast presentation.
///
/// Derived once per `show` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Style {
    pub background: Color,
    pub text_color: Color,
    /// `None` renders no glyph at all.
    pub icon: Option<Icon>,
    pub icon_tint: Color,
}

/// Resolves the style for `category`.
///
/// Fixed categories use the token table (yellow/green/red at alert opacity
/// with a navy label, black scrim with a white label for `Notify`).
/// `Custom` uses `overrides`, falling back to a purple scrim, white label,
/// white icon tint, and no icon.
pub fn resolve(category: Category, overrides: &Overrides) -> Style {
    match category {
        Category::Warning => Style {
            background: alert(palette::YELLOW),
            text_color: palette::NAVY,
            icon: Some(Icon::ExclamationCircle),
            icon_tint: palette::WHITE,
        },
        Category::Success => Style {
            background: alert(palette::GREEN),
            text_color: palette::NAVY,
            icon: Some(Icon::CheckCircle),
            icon_tint: palette::WHITE,
        },
        Category::Error => Style {
            background: alert(palette::RED),
            text_color: palette::NAVY,
            icon: Some(Icon::ExclamationTriangle),
            icon_tint: palette::WHITE,
        },
        Category::Notify => Style {
            background: scrim(palette::BLACK),
            text_color: palette::WHITE,
            icon: None,
            icon_tint: palette::WHITE,
        },
        Category::Custom => Style {
            background: overrides.background.unwrap_or(scrim(palette::PURPLE)),
            text_color: overrides.text_color.unwrap_or(palette::WHITE),
            icon: overrides.icon.clone(),
            icon_tint: overrides.icon_tint.unwrap_or(palette::WHITE),
        },
    }
}

fn alert(base: Color) -> Color {
    Color {
        a: opacity::ALERT,
        ..base
    }
}

fn scrim(base: Color) -> Color {
    Color {
        a: opacity::SCRIM,
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_categories_use_navy_label() {
        for category in [Category::Warning, Category::Success, Category::Error] {
            let style = resolve(category, &Overrides::default());
            assert_eq!(style.text_color, palette::NAVY);
            assert_eq!(style.background.a, opacity::ALERT);
        }
    }

    #[test]
    fn notify_is_white_on_black_without_icon() {
        let style = resolve(Category::Notify, &Overrides::default());
        assert_eq!(style.text_color, palette::WHITE);
        assert!(style.icon.is_none());
        assert_eq!(style.background.a, opacity::SCRIM);
    }

    #[test]
    fn custom_defaults_to_purple_scrim_and_white() {
        let style = resolve(Category::Custom, &Overrides::default());
        assert_eq!(style.background, scrim(palette::PURPLE));
        assert_eq!(style.text_color, palette::WHITE);
        assert_eq!(style.icon_tint, palette::WHITE);
        assert!(style.icon.is_none());
    }

    #[test]
    fn custom_overrides_win() {
        let overrides = Overrides {
            background: Some(palette::BLACK),
            text_color: Some(palette::YELLOW),
            icon: Some(Icon::CheckCircle),
            icon_tint: Some(palette::NAVY),
        };
        let style = resolve(Category::Custom, &overrides);
        assert_eq!(style.background, palette::BLACK);
        assert_eq!(style.text_color, palette::YELLOW);
        assert!(matches!(style.icon, Some(Icon::CheckCircle)));
        assert_eq!(style.icon_tint, palette::NAVY);
    }

    #[test]
    fn overrides_are_ignored_for_fixed_categories() {
        let overrides = Overrides {
            background: Some(palette::BLACK),
            text_color: Some(palette::YELLOW),
            icon: None,
            icon_tint: None,
        };
        let style = resolve(Category::Success, &overrides);
        assert_eq!(style.background, alert(palette::GREEN));
        assert_eq!(style.text_color, palette::NAVY);
    }

    #[test]
    fn category_icons_match_identifiers() {
        let warning = resolve(Category::Warning, &Overrides::default());
        let success = resolve(Category::Success, &Overrides::default());
        let error = resolve(Category::Error, &Overrides::default());
        assert_eq!(warning.icon.unwrap().name(), "exclamation-circle");
        assert_eq!(success.icon.unwrap().name(), "check-circle");
        assert_eq!(error.icon.unwrap().name(), "exclamation-triangle");
    }
}
