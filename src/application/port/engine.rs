// SPDX-License-Identifier: MPL-2.0
//! Media engine port definition.
//!
//! This module defines the [`MediaEngine`] trait, the narrow command surface
//! through which the view drives the native decode/render/record engine.
//!
//! # Design Notes
//!
//! - Commands return nothing: they are queued by the engine and their
//!   outcome (prepared, error, size, time...) is posted back as a
//!   [`PlayerEvent`](crate::video_player::PlayerEvent)
//! - Recording answers a boolean because the engine decides synchronously
//!   whether it could open its encoder
//! - Queries (`duration_ms`, `position_ms`, ...) are answered immediately
//!
//! # Lifecycle
//!
//! 1. `setup()` hands the engine the poster it uses for events
//! 2. `bind_surface()` once a valid surface exists
//! 3. `reset()`, `set_data_source()`, `prepare_async()`
//! 4. `start()` once `Prepared` was delivered
//! 5. `release()` exactly once at the end

use crate::domain::video::{
    Background, Bitmap, DataSource, Effect, Filter, Pitch, PlaybackRate, SurfaceHandle,
    VolumePercent, WaterMark,
};
use crate::video_player::EventPoster;
use std::path::Path;

/// Port for the native media engine.
///
/// # Example
///
/// ```ignore
/// use player_view::application::port::MediaEngine;
/// use player_view::domain::video::DataSource;
///
/// fn open(engine: &mut impl MediaEngine, location: &str) {
///     engine.reset();
///     engine.set_data_source(&DataSource::parse(location));
///     engine.prepare_async();
/// }
/// ```
pub trait MediaEngine {
    /// Gives the engine the handle it posts events through, from any thread.
    fn setup(&mut self, events: EventPoster);

    /// Hands a valid surface to the renderer.
    fn bind_surface(&mut self, surface: SurfaceHandle);

    /// Tells the renderer the bound surface changed size.
    fn notify_surface_resized(&mut self, width: u32, height: u32);

    fn set_data_source(&mut self, source: &DataSource);

    /// Synchronous prepare.
    fn prepare(&mut self);

    /// Prepare in the background; `Prepared` is posted when done.
    fn prepare_async(&mut self);

    fn start(&mut self);

    fn stop(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    /// Returns the engine to its idle state, dropping the current source.
    fn reset(&mut self);

    /// Frees every native resource. No command may follow.
    fn release(&mut self);

    /// Absolute seek in milliseconds.
    fn seek_to(&mut self, position_ms: f32);

    fn set_looping(&mut self, looping: bool);

    fn set_mute(&mut self, mute: bool);

    fn set_volume(&mut self, volume: VolumePercent);

    fn set_stereo_volume(&mut self, left: VolumePercent, right: VolumePercent);

    fn set_rate(&mut self, rate: PlaybackRate);

    fn set_pitch(&mut self, pitch: Pitch);

    /// Starts recording into an already created file.
    /// Returns false if the engine could not start.
    fn start_record(&mut self, path: &Path) -> bool;

    /// Returns false if no recording could be finalized.
    fn stop_record(&mut self) -> bool;

    fn is_recording(&self) -> bool;

    /// Copies the last presented frame, if any.
    fn screenshot_bitmap(&mut self) -> Option<Bitmap>;

    fn change_background(&mut self, background: Background);

    fn change_filter(&mut self, filter: Filter);

    fn change_effect(&mut self, effect: Effect);

    fn set_water_mark(&mut self, water_mark: &WaterMark);

    /// Media duration in milliseconds, `<= 0` for live streams.
    fn duration_ms(&self) -> i64;

    /// Current position in milliseconds.
    fn position_ms(&self) -> i64;

    fn video_width(&self) -> u32;

    fn video_height(&self) -> u32;

    /// Rotation metadata of the video stream in degrees.
    fn rotate(&self) -> i32;

    fn is_playing(&self) -> bool;

    fn is_looping(&self) -> bool;

    /// Raw volume in percent, `-1` when no audio output is open.
    fn volume(&self) -> i32;
}
