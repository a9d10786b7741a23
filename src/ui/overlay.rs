// SPDX-License-Identifier: MPL-2.0
//! Overlay composition and the tick subscription.
//!
//! Two entry points, one per flavor:
//!
//! - [`view_overlay`] renders the imperative [`Scheduler`]'s active toasts;
//!   stack it over the host content.
//! - [`wrap`] wraps host content and derives a toast from a reactive
//!   [`Binding`].
//!
//! Both position the card per [`Position`], horizontally centered, with
//! the anchor offsets of [`crate::toast::layout`] mapped to edge insets
//! (an overlay cannot hang outside the window), and cap its width to the
//! available width minus the fixed margin.

use crate::config::defaults::DEFAULT_TICK_INTERVAL_MS;
use crate::toast::{layout, Binding, Position, Scheduler, ToastAttributes};
use crate::ui::widget;
use iced::widget::{responsive, Container, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    time, Element, Length, Padding, Size, Subscription,
};
use std::time::{Duration, Instant};

/// Renders every active toast of `scheduler`, positioned on the available
/// space. Returns an empty element when nothing is active.
pub fn view_overlay<'a, Message: 'a>(scheduler: &'a Scheduler) -> Element<'a, Message> {
    responsive(move |available: Size| {
        let mut stack = Stack::new();
        for presented in scheduler.active() {
            let toast = presented.toast();
            let card = widget::toast(toast.message(), presented.style(), &ToastAttributes::default());
            stack = stack.push(positioned(card, toast.position(), toast.padding(), available));
        }
        stack.width(Length::Fill).height(Length::Fill).into()
    })
    .into()
}

/// Wraps `content`, deriving a toast from `binding`.
///
/// Nothing is added while the bound message is blank; the toast disappears
/// as soon as the slot is cleared, with no explicit unmount call.
pub fn wrap<'a, Message: 'a>(
    content: Element<'a, Message>,
    binding: &'a Binding,
    position: Position,
    padding: f32,
    attributes: &'a ToastAttributes,
) -> Element<'a, Message> {
    if !binding.is_visible() {
        return content;
    }

    let toast_layer = responsive(move |available: Size| {
        let card = widget::toast(binding.message(), &attributes.style(), attributes);
        positioned(card, position, padding, available)
    });

    Stack::new()
        .push(content)
        .push(toast_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Aligns a card per `position` on a surface of `available` size.
fn positioned<'a, Message: 'a>(
    card: Element<'a, Message>,
    position: Position,
    padding: f32,
    available: Size,
) -> Element<'a, Message> {
    let inset = layout::edge_inset(position, padding);
    let capped = Container::new(card).max_width(layout::width_cap(available.width));

    let aligned = Container::new(capped)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center);

    match position {
        Position::Top => aligned.align_y(Vertical::Top).padding(Padding {
            top: inset,
            ..Padding::ZERO
        }),
        // Bottom padding of twice the inset shifts the centered card up by
        // exactly the inset.
        Position::Center => aligned.align_y(Vertical::Center).padding(Padding {
            bottom: inset * 2.0,
            ..Padding::ZERO
        }),
        Position::Bottom => aligned.align_y(Vertical::Bottom).padding(Padding {
            bottom: inset,
            ..Padding::ZERO
        }),
    }
    .into()
}

/// Periodic tick driving toast expiry.
///
/// Subscribe while `active` (any presented toast or armed countdown);
/// otherwise this is `Subscription::none()` so an idle app never wakes.
pub fn tick_subscription(active: bool) -> Subscription<Instant> {
    if active {
        time::every(Duration::from_millis(DEFAULT_TICK_INTERVAL_MS))
    } else {
        Subscription::none()
    }
}
