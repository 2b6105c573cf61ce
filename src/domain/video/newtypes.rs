// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for values handed to the media
//! engine, ensuring they are always within the range the engine accepts.

// =============================================================================
// VolumePercent
// =============================================================================

/// Volume bounds as understood by the engine (0 = muted, 100 = full).
pub mod volume_bounds {
    /// Minimum volume level (muted).
    pub const MIN: u8 = 0;
    /// Maximum volume level.
    pub const MAX: u8 = 100;
    /// Volume reported when the engine cannot answer the query.
    pub const DEFAULT: u8 = 100;
}

/// Volume level in percent, guaranteed to be within 0–100.
///
/// The controller's mute toggle only ever targets the two extremes, see
/// [`VolumePercent::toggled_mute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Muted volume.
    pub const MUTED: Self = Self(volume_bounds::MIN);

    /// Full volume.
    pub const FULL: Self = Self(volume_bounds::MAX);

    /// Creates a new volume level, clamping to the valid range.
    #[must_use]
    pub fn new(percent: i32) -> Self {
        let clamped = percent.clamp(i32::from(volume_bounds::MIN), i32::from(volume_bounds::MAX));
        // Clamped above, always fits into u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(clamped as u8)
    }

    /// Interprets an engine volume query.
    ///
    /// Engines answer `-1` when no audio device is open; that reads as the
    /// default (full) volume.
    #[must_use]
    pub fn from_engine(raw: i32) -> Self {
        if raw < 0 {
            Self(volume_bounds::DEFAULT)
        } else {
            Self::new(raw)
        }
    }

    /// Returns the volume value in percent.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the volume is zero.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == volume_bounds::MIN
    }

    /// Returns the binary mute toggle target: muted volumes go to full,
    /// audible volumes go to zero.
    #[must_use]
    pub fn toggled_mute(self) -> Self {
        if self.is_muted() {
            Self::FULL
        } else {
            Self::MUTED
        }
    }
}

impl Default for VolumePercent {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds (0.5x to 2.0x).
pub mod rate_bounds {
    /// Minimum playback rate.
    pub const MIN: f32 = 0.5;
    /// Maximum playback rate.
    pub const MAX: f32 = 2.0;
    /// Normal speed.
    pub const DEFAULT: f32 = 1.0;
}

/// Playback rate, guaranteed to be within 0.5x–2.0x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f32);

impl PlaybackRate {
    /// Creates a new playback rate, clamping to the valid range.
    /// Non-finite values fall back to normal speed.
    #[must_use]
    pub fn new(rate: f32) -> Self {
        if rate.is_finite() {
            Self(rate.clamp(rate_bounds::MIN, rate_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the rate as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// Pitch
// =============================================================================

/// Pitch bounds (0.5 to 2.0, 1.0 = unchanged).
pub mod pitch_bounds {
    /// Minimum pitch factor.
    pub const MIN: f32 = 0.5;
    /// Maximum pitch factor.
    pub const MAX: f32 = 2.0;
    /// Unchanged pitch.
    pub const DEFAULT: f32 = 1.0;
}

/// Pitch factor, guaranteed to be within 0.5–2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch(f32);

impl Pitch {
    /// Creates a new pitch factor, clamping to the valid range.
    /// Non-finite values fall back to the unchanged pitch.
    #[must_use]
    pub fn new(pitch: f32) -> Self {
        if pitch.is_finite() {
            Self(pitch.clamp(pitch_bounds::MIN, pitch_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the pitch factor as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(pitch_bounds::DEFAULT)
    }
}
