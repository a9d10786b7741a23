// SPDX-License-Identifier: MPL-2.0
//! The immutable per-show toast value.
//!
//! A `Toast` fully describes one presentation: what to say, how to style
//! it, where to place it, and how long it stays up. Callers build one per
//! `show` request; the scheduler owns it for its active lifetime.

use super::style::{resolve, Overrides, Style};
use super::{Category, Position};
use crate::config::defaults::{DEFAULT_DURATION_SECS, DEFAULT_PADDING};
use std::time::Duration;

/// Unique identifier for a toast presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// One toast to display.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    category: Category,
    position: Position,
    duration: Duration,
    padding: f32,
    overrides: Overrides,
}

impl Toast {
    /// Creates a toast with the default category (`Error`), position
    /// (`Center`), duration (3 s), and padding (0).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            category: Category::default(),
            position: Position::default(),
            duration: Duration::from_secs_f32(DEFAULT_DURATION_SECS),
            padding: DEFAULT_PADDING,
            overrides: Overrides::default(),
        }
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Warning)
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Success)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Error)
    }

    /// Creates a notify toast.
    pub fn notify(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Notify)
    }

    /// Creates a custom-styled toast.
    pub fn custom(message: impl Into<String>, overrides: Overrides) -> Self {
        Self::new(message)
            .with_category(Category::Custom)
            .with_overrides(overrides)
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the display duration.
    ///
    /// A zero duration is not a valid countdown; it keeps the 3 s default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        if duration > Duration::ZERO {
            self.duration = duration;
        }
        self
    }

    /// Sets the extra padding applied to the position offset.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the style overrides consulted for [`Category::Custom`].
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the position padding.
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the style overrides.
    #[must_use]
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Whether the message is empty after trimming whitespace.
    ///
    /// Blank toasts are a silent no-op when shown.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// Resolves the visual style for this toast.
    #[must_use]
    pub fn style(&self) -> Style {
        resolve(self.category, &self.overrides)
    }
}
