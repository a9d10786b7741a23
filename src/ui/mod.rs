// SPDX-License-Identifier: MPL-2.0
//! Iced presentation layer: design tokens, icons, the toast card widget,
//! and the overlay composition helpers.

pub mod design_tokens;
pub mod icons;
pub mod overlay;
pub mod widget;
