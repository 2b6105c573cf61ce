// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Input**: Click debouncing and gesture limits
//! - **Volume**: Audio playback volume settings
//! - **Playback**: Buffering and seek bar scale
//! - **Layout**: Placeholder aspect ratio before the first video size

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Minimum delay between two accepted play clicks (in milliseconds).
pub const DEFAULT_CLICK_DEBOUNCE_MS: u64 = 1000;

/// Maximum accepted debounce delay (in milliseconds).
pub const MAX_CLICK_DEBOUNCE_MS: u64 = 10_000;

/// Accumulated rotation wraps at one full turn.
pub const ROTATION_WRAP_DEGREES: f32 = 360.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume in percent.
pub const DEFAULT_VOLUME_PERCENT: u8 = 100;

/// Maximum volume in percent; also the unmute target.
pub const MAX_VOLUME_PERCENT: u8 = 100;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Buffering percentage meaning "loading finished".
pub const LOADING_COMPLETE_PERCENT: i32 = 100;

/// Seek bar range; progress is expressed in percent of the duration.
pub const SEEK_BAR_MAX: u32 = 100;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Width part of the placeholder and `Ratio16x9` aspect ratio.
pub const WIDE_RATIO_WIDTH: u32 = 16;

/// Height part of the placeholder and `Ratio16x9` aspect ratio.
pub const WIDE_RATIO_HEIGHT: u32 = 9;
