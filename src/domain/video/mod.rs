// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or engine concerns.

pub mod newtypes;
pub mod types;

// Re-export commonly used types
pub use newtypes::{Pitch, PlaybackRate, VolumePercent};
pub use types::{
    Background, Bitmap, DataSource, Effect, Filter, SurfaceHandle, SurfaceId, VideoSize,
    WaterMark, WaterMarkLocation,
};
