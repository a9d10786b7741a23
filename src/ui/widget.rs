// SPDX-License-Identifier: MPL-2.0
//! Widget rendering a single toast card.
//!
//! Toasts are small rounded cards with an optional glyph and a bold label,
//! filled with the category color from the resolved [`Style`].

use crate::toast::{Style, ToastAttributes};
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use iced::widget::{container, text, Container, Row, Text};
use iced::{alignment, Background, Element, Length, Padding, Theme};

/// Renders one toast card from its message, resolved style, and
/// attributes.
///
/// The returned element borrows only `message`; colors and the glyph are
/// copied out of `style` and `attributes` so both may be temporaries.
pub fn toast<'a, Message: 'a>(
    message: &'a str,
    style: &Style,
    attributes: &ToastAttributes,
) -> Element<'a, Message> {
    let text_color = style.text_color;
    let background = style.background;
    let corner_radius = attributes.corner_radius;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    // Absent glyph renders nothing rather than a placeholder.
    if let Some(icon) = &style.icon {
        let glyph = icons::sized(icon, attributes.image_size, style.icon_tint);
        let glyph_background = attributes.image_background_color;
        row = row.push(
            Container::new(glyph).style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(glyph_background)),
                ..Default::default()
            }),
        );
    }

    let label = Text::new(message)
        .size(attributes.font_size)
        .font(attributes.font)
        .align_x(attributes.text_alignment)
        .wrapping(attributes.line_break_mode.wrapping())
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    let label_background = attributes.label_background_color;
    let mut label_container =
        Container::new(label).style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(label_background)),
            ..Default::default()
        });
    if attributes.number_of_lines > 0 {
        // Line height tracks the default 1.3 em of the text widget.
        let line_height = attributes.font_size * 1.3;
        label_container =
            label_container.max_height(line_height * attributes.number_of_lines as f32);
    }

    Container::new(row.push(label_container))
        .width(Length::Shrink)
        .padding(Padding {
            top: spacing::XS,
            right: spacing::SM,
            bottom: spacing::XS,
            left: spacing::XS,
        })
        .clip(attributes.masks_to_bounds)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: iced::Border {
                radius: corner_radius.into(),
                ..Default::default()
            },
            text_color: Some(text_color),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{resolve, Category, Overrides};

    #[derive(Debug, Clone)]
    enum TestMessage {}

    #[test]
    fn builds_for_every_category() {
        for category in Category::ALL {
            let style = resolve(category, &Overrides::default());
            let _: Element<'_, TestMessage> =
                toast("hello", &style, &ToastAttributes::default());
        }
    }

    #[test]
    fn builds_from_temporary_style_and_attributes() {
        let message = String::from("owned elsewhere");
        let element: Element<'_, TestMessage> = {
            let style = resolve(Category::Notify, &Overrides::default());
            let attributes = ToastAttributes::default();
            toast(&message, &style, &attributes)
        };
        drop(element);
    }
}
