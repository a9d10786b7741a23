// SPDX-License-Identifier: MPL-2.0
//! The closed enumerations shared by both presentation flavors.
//!
//! A single declaration of `Category` and `Position` is consumed by the
//! imperative scheduler, the reactive binding, and the configuration file.

use serde::{Deserialize, Serialize};

/// Semantic kind of a toast, driving its default styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Cautionary message (yellow fill, navy label).
    Warning,
    /// Operation completed (green fill, navy label).
    Success,
    /// Something went wrong (red fill, navy label).
    #[default]
    Error,
    /// Neutral announcement (black scrim, white label, no icon).
    Notify,
    /// Caller-styled toast; colors and icon come from the overrides.
    Custom,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Warning,
        Category::Success,
        Category::Error,
        Category::Notify,
        Category::Custom,
    ];
}

/// Vertical placement of a toast on its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    #[default]
    Center,
    Bottom,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 3] = [Position::Top, Position::Center, Position::Bottom];
}
