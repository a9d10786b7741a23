// SPDX-License-Identifier: MPL-2.0
//! Placement math for the toast card.
//!
//! Pure helpers shared by the scheduler and the Iced overlay: the signed
//! anchor offset per position, its non-negative edge inset, and the width
//! cap relative to the containing surface.

use super::Position;
use crate::config::defaults::{
    BOTTOM_EDGE_OFFSET, CENTER_OFFSET, TOP_EDGE_OFFSET, WIDTH_MARGIN,
};

/// Signed vertical offset of the card's anchor for `position`.
///
/// Top and center anchors sit at `-15 - padding`, the bottom anchor at
/// `-25 - padding`. Negative values pull the anchor towards the top of the
/// surface.
#[must_use]
pub fn vertical_offset(position: Position, padding: f32) -> f32 {
    match position {
        Position::Top => TOP_EDGE_OFFSET - padding,
        Position::Center => CENTER_OFFSET - padding,
        Position::Bottom => BOTTOM_EDGE_OFFSET - padding,
    }
}

/// Non-negative inset from the anchored edge, for hosts that cannot place
/// content outside their bounds.
#[must_use]
pub fn edge_inset(position: Position, padding: f32) -> f32 {
    vertical_offset(position, padding).abs()
}

/// Maximum card width on a surface of `container` width.
#[must_use]
pub fn width_cap(container: f32) -> f32 {
    container - WIDTH_MARGIN
}

/// Caps `natural` width to the surface: widths beyond
/// `container - 20` are constrained to exactly that bound.
#[must_use]
pub fn capped_width(natural: f32, container: f32) -> f32 {
    let cap = width_cap(container);
    if natural > cap {
        cap
    } else {
        natural
    }
}
