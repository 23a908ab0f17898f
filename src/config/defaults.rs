// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Placement**: Vertical offset and icon spacing of the toast view
//! - **Duration**: Display time for short and long toasts

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Distance in pixels between a top/bottom toast and the window edge.
pub const DEFAULT_Y_OFFSET: f32 = 64.0;

/// Minimum allowed vertical offset.
pub const MIN_Y_OFFSET: f32 = 0.0;

/// Maximum allowed vertical offset.
pub const MAX_Y_OFFSET: f32 = 400.0;

/// Space in pixels between the theme icon and the message text.
pub const DEFAULT_ICON_PADDING: f32 = 8.0;

/// Minimum allowed icon padding.
pub const MIN_ICON_PADDING: f32 = 0.0;

/// Maximum allowed icon padding.
pub const MAX_ICON_PADDING: f32 = 48.0;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// How long a short toast stays visible (milliseconds).
pub const DEFAULT_SHORT_DURATION_MS: u64 = 2_000;

/// How long a long toast stays visible (milliseconds).
pub const DEFAULT_LONG_DURATION_MS: u64 = 3_500;

/// Minimum display time for any toast (milliseconds).
pub const MIN_DURATION_MS: u64 = 500;

/// Maximum display time for any toast (milliseconds).
pub const MAX_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_Y_OFFSET >= 0.0);
    assert!(DEFAULT_Y_OFFSET >= MIN_Y_OFFSET);
    assert!(DEFAULT_Y_OFFSET <= MAX_Y_OFFSET);

    assert!(DEFAULT_ICON_PADDING >= MIN_ICON_PADDING);
    assert!(DEFAULT_ICON_PADDING <= MAX_ICON_PADDING);

    assert!(MIN_DURATION_MS > 0);
    assert!(DEFAULT_SHORT_DURATION_MS >= MIN_DURATION_MS);
    assert!(DEFAULT_LONG_DURATION_MS > DEFAULT_SHORT_DURATION_MS);
    assert!(DEFAULT_LONG_DURATION_MS <= MAX_DURATION_MS);
};
