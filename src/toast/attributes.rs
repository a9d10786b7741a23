// SPDX-License-Identifier: MPL-2.0
//! Configuration surface of the reactive flavor.
//!
//! `ToastAttributes` is a single immutable value built with a struct
//! literal over [`Default`]; there is no mutable builder to thread through
//! the view.

use super::style::{resolve, Overrides, Style};
use super::Category;
use crate::config::defaults::DEFAULT_REACTIVE_TIME_SECS;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, typography};
use crate::ui::icons::Icon;
use iced::widget::text;
use iced::{alignment, font, Color, Font, Size};
use std::time::Duration;

/// How the label breaks across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Break on word boundaries.
    #[default]
    WordWrap,
    /// Break anywhere, including inside words.
    GlyphWrap,
    /// Never break; the label stays on one line.
    None,
}

impl LineBreak {
    /// The equivalent text wrapping strategy.
    #[must_use]
    pub fn wrapping(self) -> text::Wrapping {
        match self {
            LineBreak::WordWrap => text::Wrapping::Word,
            LineBreak::GlyphWrap => text::Wrapping::Glyph,
            LineBreak::None => text::Wrapping::None,
        }
    }
}

/// Appearance and timing of a reactive toast.
#[derive(Debug, Clone)]
pub struct ToastAttributes {
    /// How long the message stays up before the slot is cleared.
    pub time: Duration,
    /// Category driving the default colors and glyph.
    pub category: Category,

    pub image_tint_color: Color,
    pub image_background_color: Color,
    pub image_size: Size,
    /// Glyph shown for [`Category::Custom`]; `None` renders no glyph.
    pub custom_image: Option<Icon>,

    /// Label color for [`Category::Custom`].
    pub custom_label_color: Color,
    pub label_background_color: Color,
    pub font: Font,
    pub font_size: f32,
    pub text_alignment: alignment::Horizontal,
    /// Maximum label lines; `0` means unlimited.
    pub number_of_lines: usize,
    pub line_break_mode: LineBreak,

    /// Card fill for [`Category::Custom`].
    pub custom_background_color: Color,
    pub corner_radius: f32,
    /// Whether the card clips its content to the rounded bounds.
    pub masks_to_bounds: bool,
}

impl Default for ToastAttributes {
    fn default() -> Self {
        Self {
            time: Duration::from_secs_f32(DEFAULT_REACTIVE_TIME_SECS),
            category: Category::default(),
            image_tint_color: palette::WHITE,
            image_background_color: Color::TRANSPARENT,
            image_size: Size::new(sizing::ICON, sizing::ICON),
            custom_image: None,
            custom_label_color: palette::WHITE,
            label_background_color: Color::TRANSPARENT,
            font: Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            },
            font_size: typography::BODY,
            text_alignment: alignment::Horizontal::Center,
            number_of_lines: 0,
            line_break_mode: LineBreak::default(),
            custom_background_color: Color {
                a: opacity::SCRIM,
                ..palette::PURPLE
            },
            corner_radius: radius::TOAST,
            masks_to_bounds: true,
        }
    }
}

impl ToastAttributes {
    /// Adapts the custom fields into resolver overrides.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            background: Some(self.custom_background_color),
            text_color: Some(self.custom_label_color),
            icon: self.custom_image.clone(),
            icon_tint: Some(self.image_tint_color),
        }
    }

    /// Resolves the style for these attributes.
    #[must_use]
    pub fn style(&self) -> Style {
        resolve(self.category, &self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_time_is_one_and_a_half_seconds() {
        let attributes = ToastAttributes::default();
        assert_eq!(attributes.time, Duration::from_millis(1500));
    }

    #[test]
    fn default_category_is_error() {
        assert_eq!(ToastAttributes::default().category, Category::Error);
    }

    #[test]
    fn custom_style_uses_the_attribute_fields() {
        let attributes = ToastAttributes {
            category: Category::Custom,
            custom_background_color: palette::BLACK,
            custom_label_color: palette::YELLOW,
            ..ToastAttributes::default()
        };
        let style = attributes.style();
        assert_eq!(style.background, palette::BLACK);
        assert_eq!(style.text_color, palette::YELLOW);
        assert!(style.icon.is_none());
    }

    #[test]
    fn line_break_maps_to_wrapping() {
        assert_eq!(LineBreak::WordWrap.wrapping(), text::Wrapping::Word);
        assert_eq!(LineBreak::GlyphWrap.wrapping(), text::Wrapping::Glyph);
        assert_eq!(LineBreak::None.wrapping(), text::Wrapping::None);
    }
}
