// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Duration**: Display time bounds for both flavors
//! - **Placement**: Anchor offsets and padding
//! - **Width**: Horizontal margin of the card
//! - **Tick**: Expiry polling interval

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default display duration of an imperative toast (in seconds).
pub const DEFAULT_DURATION_SECS: f32 = 3.0;

/// Minimum allowed display duration.
pub const MIN_DURATION_SECS: f32 = 0.1;

/// Maximum allowed display duration.
pub const MAX_DURATION_SECS: f32 = 300.0;

/// Default display duration of a reactive toast (in seconds).
pub const DEFAULT_REACTIVE_TIME_SECS: f32 = 1.5;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Anchor offset from the top edge for top-positioned toasts.
pub const TOP_EDGE_OFFSET: f32 = -15.0;

/// Anchor offset from the vertical center for centered toasts.
pub const CENTER_OFFSET: f32 = -15.0;

/// Anchor offset from the bottom edge for bottom-positioned toasts.
pub const BOTTOM_EDGE_OFFSET: f32 = -25.0;

/// Default extra padding of the imperative entry point.
pub const DEFAULT_PADDING: f32 = 0.0;

/// Default extra padding of the reactive entry point.
pub const DEFAULT_REACTIVE_PADDING: f32 = 10.0;

// ==========================================================================
// Width Defaults
// ==========================================================================

/// Horizontal margin kept free when capping the card width.
pub const WIDTH_MARGIN: f32 = 20.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default expiry polling interval (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Duration validation
    assert!(MIN_DURATION_SECS > 0.0);
    assert!(MAX_DURATION_SECS > MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);
    assert!(DEFAULT_REACTIVE_TIME_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_REACTIVE_TIME_SECS <= MAX_DURATION_SECS);

    // Placement validation
    assert!(TOP_EDGE_OFFSET < 0.0);
    assert!(CENTER_OFFSET < 0.0);
    assert!(BOTTOM_EDGE_OFFSET < TOP_EDGE_OFFSET);
    assert!(DEFAULT_PADDING >= 0.0);
    assert!(DEFAULT_REACTIVE_PADDING >= 0.0);

    // Width validation
    assert!(WIDTH_MARGIN > 0.0);

    // Tick validation
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
