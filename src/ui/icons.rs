// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the category glyphs.
//!
//! The built-in glyphs are inline SVG sources embedded at compile time;
//! their handles are cached using `OnceLock` so repeated renders reuse the
//! same rasterization cache entry. Custom glyphs carry their own handle.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! category they decorate (e.g. `exclamation-triangle`, not `error`).

use iced::widget::svg::{self, Svg};
use iced::{Color, Length, Size, Theme};
use std::sync::OnceLock;

const EXCLAMATION_CIRCLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-1 5h2v7h-2V7zm0 9h2v2h-2v-2z"/></svg>"##;

const CHECK_CIRCLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-1.6 14.6-4.3-4.3 1.4-1.4 2.9 2.9 6.1-6.1 1.4 1.4-7.5 7.5z"/></svg>"##;

const EXCLAMATION_TRIANGLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2 1 21h22L12 2zm-1 7h2v6h-2V9zm0 7h2v2h-2v-2z"/></svg>"##;

/// Macro to define a cached handle accessor for a built-in glyph.
/// The handle is created once on first access and reused thereafter.
macro_rules! cached_handle {
    ($source:expr) => {{
        static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
        HANDLE
            .get_or_init(|| svg::Handle::from_memory($source.as_bytes()))
            .clone()
    }};
}

/// A toast glyph: one of the built-in category icons, or a caller-supplied
/// SVG handle for custom toasts.
#[derive(Debug, Clone)]
pub enum Icon {
    /// Exclamation mark in a circle (warning).
    ExclamationCircle,
    /// Check mark in a circle (success).
    CheckCircle,
    /// Exclamation mark in a triangle (error).
    ExclamationTriangle,
    /// Caller-supplied SVG.
    Custom(svg::Handle),
}

impl Icon {
    /// Stable identifier of this glyph.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ExclamationCircle => "exclamation-circle",
            Icon::CheckCircle => "check-circle",
            Icon::ExclamationTriangle => "exclamation-triangle",
            Icon::Custom(_) => "custom",
        }
    }

    /// Returns the renderer handle for this glyph.
    pub fn handle(&self) -> svg::Handle {
        match self {
            Icon::ExclamationCircle => cached_handle!(EXCLAMATION_CIRCLE_SVG),
            Icon::CheckCircle => cached_handle!(CHECK_CIRCLE_SVG),
            Icon::ExclamationTriangle => cached_handle!(EXCLAMATION_TRIANGLE_SVG),
            Icon::Custom(handle) => handle.clone(),
        }
    }
}

/// Builds a sized, tinted widget for the glyph.
pub fn sized<'a>(icon: &Icon, size: Size, tint: Color) -> Svg<'a> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(tint) })
}
