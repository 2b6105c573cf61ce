// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and fake platform collaborators.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison and provides recording fakes for the engine and host ports.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use crate::application::port::{MediaEngine, SurfaceHost, WindowHost};
use crate::domain::layout::{ContainerParent, Orientation, ScreenMetrics};
use crate::domain::video::{
    Background, Bitmap, DataSource, Effect, Filter, Pitch, PlaybackRate, SurfaceHandle, SurfaceId,
    VolumePercent, WaterMark,
};
use crate::video_player::{EventPoster, PlayerEvent};
use std::path::{Path, PathBuf};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Command received by [`FakeEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Setup,
    BindSurface(SurfaceHandle),
    NotifySurfaceResized(u32, u32),
    SetDataSource(DataSource),
    Prepare,
    PrepareAsync,
    Start,
    Stop,
    Pause,
    Resume,
    Reset,
    Release,
    SeekTo(f32),
    SetLooping(bool),
    SetMute(bool),
    SetVolume(VolumePercent),
    SetStereoVolume(VolumePercent, VolumePercent),
    SetRate(PlaybackRate),
    SetPitch(Pitch),
    StartRecord(PathBuf),
    StopRecord,
    Screenshot,
    ChangeBackground(Background),
    ChangeFilter(Filter),
    ChangeEffect(Effect),
    SetWaterMark,
}

/// Media engine that records commands and answers queries from fields.
#[derive(Debug)]
pub struct FakeEngine {
    pub(crate) calls: Vec<EngineCall>,
    pub(crate) poster: Option<EventPoster>,
    pub duration: i64,
    pub position: i64,
    pub volume: i32,
    pub playing: bool,
    pub looping: bool,
    pub recording: bool,
    pub record_ok: bool,
    pub bitmap: Option<Bitmap>,
    pub video_size: (u32, u32),
    /// Posted from inside `reset()`, as a worker finishing late would.
    pub emit_on_reset: Option<PlayerEvent>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            poster: None,
            duration: 0,
            position: 0,
            volume: 100,
            playing: false,
            looping: false,
            recording: false,
            record_ok: true,
            bitmap: None,
            video_size: (0, 0),
            emit_on_reset: None,
        }
    }
}

impl FakeEngine {
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, predicate: impl Fn(&EngineCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Posts an event as the engine's worker thread would.
    pub fn emit(&self, event: PlayerEvent) -> bool {
        self.poster.as_ref().is_some_and(|poster| poster.post(event))
    }

    pub fn poster(&self) -> Option<&EventPoster> {
        self.poster.as_ref()
    }
}

impl MediaEngine for FakeEngine {
    fn setup(&mut self, events: EventPoster) {
        self.poster = Some(events);
        self.calls.push(EngineCall::Setup);
    }

    fn bind_surface(&mut self, surface: SurfaceHandle) {
        self.calls.push(EngineCall::BindSurface(surface));
    }

    fn notify_surface_resized(&mut self, width: u32, height: u32) {
        self.calls.push(EngineCall::NotifySurfaceResized(width, height));
    }

    fn set_data_source(&mut self, source: &DataSource) {
        self.calls.push(EngineCall::SetDataSource(source.clone()));
    }

    fn prepare(&mut self) {
        self.calls.push(EngineCall::Prepare);
    }

    fn prepare_async(&mut self) {
        self.calls.push(EngineCall::PrepareAsync);
    }

    fn start(&mut self) {
        self.playing = true;
        self.calls.push(EngineCall::Start);
    }

    fn stop(&mut self) {
        self.playing = false;
        self.calls.push(EngineCall::Stop);
    }

    fn pause(&mut self) {
        self.playing = false;
        self.calls.push(EngineCall::Pause);
    }

    fn resume(&mut self) {
        self.playing = true;
        self.calls.push(EngineCall::Resume);
    }

    fn reset(&mut self) {
        self.playing = false;
        self.calls.push(EngineCall::Reset);
        if let Some(event) = self.emit_on_reset.take() {
            self.emit(event);
        }
    }

    fn release(&mut self) {
        self.playing = false;
        self.calls.push(EngineCall::Release);
    }

    fn seek_to(&mut self, position_ms: f32) {
        self.calls.push(EngineCall::SeekTo(position_ms));
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        self.calls.push(EngineCall::SetLooping(looping));
    }

    fn set_mute(&mut self, mute: bool) {
        self.calls.push(EngineCall::SetMute(mute));
    }

    fn set_volume(&mut self, volume: VolumePercent) {
        self.volume = i32::from(volume.value());
        self.calls.push(EngineCall::SetVolume(volume));
    }

    fn set_stereo_volume(&mut self, left: VolumePercent, right: VolumePercent) {
        self.calls.push(EngineCall::SetStereoVolume(left, right));
    }

    fn set_rate(&mut self, rate: PlaybackRate) {
        self.calls.push(EngineCall::SetRate(rate));
    }

    fn set_pitch(&mut self, pitch: Pitch) {
        self.calls.push(EngineCall::SetPitch(pitch));
    }

    fn start_record(&mut self, path: &Path) -> bool {
        self.calls.push(EngineCall::StartRecord(path.to_path_buf()));
        self.recording = self.record_ok;
        self.record_ok
    }

    fn stop_record(&mut self) -> bool {
        self.calls.push(EngineCall::StopRecord);
        let was_recording = self.recording;
        self.recording = false;
        was_recording
    }

    fn is_recording(&self) -> bool {
        self.recording
    }

    fn screenshot_bitmap(&mut self) -> Option<Bitmap> {
        self.calls.push(EngineCall::Screenshot);
        self.bitmap.clone()
    }

    fn change_background(&mut self, background: Background) {
        self.calls.push(EngineCall::ChangeBackground(background));
    }

    fn change_filter(&mut self, filter: Filter) {
        self.calls.push(EngineCall::ChangeFilter(filter));
    }

    fn change_effect(&mut self, effect: Effect) {
        self.calls.push(EngineCall::ChangeEffect(effect));
    }

    fn set_water_mark(&mut self, _water_mark: &WaterMark) {
        self.calls.push(EngineCall::SetWaterMark);
    }

    fn duration_ms(&self) -> i64 {
        self.duration
    }

    fn position_ms(&self) -> i64 {
        self.position
    }

    fn video_width(&self) -> u32 {
        self.video_size.0
    }

    fn video_height(&self) -> u32 {
        self.video_size.1
    }

    fn rotate(&self) -> i32 {
        0
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn volume(&self) -> i32 {
        self.volume
    }
}

/// Request received by [`FakePlatform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCall {
    ReuseSurface(SurfaceId),
    ReleaseSurface(SurfaceId),
    ResolveDecor,
    SystemBars(bool),
    LockOrientation(Orientation),
    MoveContainer(ContainerParent, ContainerParent),
    KeepScreenOn(bool),
}

/// Host window and surface owner that records every request.
#[derive(Debug)]
pub struct FakePlatform {
    pub(crate) calls: Vec<PlatformCall>,
    pub(crate) container_parent: ContainerParent,
    pub decor_available: bool,
    pub metrics: ScreenMetrics,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            container_parent: ContainerParent::InLayout,
            decor_available: true,
            metrics: ScreenMetrics::default(),
        }
    }
}

impl FakePlatform {
    pub fn calls(&self) -> &[PlatformCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn container_parent(&self) -> ContainerParent {
        self.container_parent
    }

    pub fn count(&self, predicate: impl Fn(&PlatformCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl SurfaceHost for FakePlatform {
    fn reuse_surface(&mut self, surface: SurfaceId) {
        self.calls.push(PlatformCall::ReuseSurface(surface));
    }

    fn release_surface(&mut self, surface: SurfaceId) {
        self.calls.push(PlatformCall::ReleaseSurface(surface));
    }
}

impl WindowHost for FakePlatform {
    fn resolve_decor(&mut self) -> bool {
        self.calls.push(PlatformCall::ResolveDecor);
        self.decor_available
    }

    fn set_system_bars_visible(&mut self, visible: bool) {
        self.calls.push(PlatformCall::SystemBars(visible));
    }

    fn lock_orientation(&mut self, orientation: Orientation) {
        self.calls.push(PlatformCall::LockOrientation(orientation));
    }

    fn move_container(&mut self, from: ContainerParent, to: ContainerParent) {
        debug_assert_eq!(self.container_parent, from);
        self.container_parent = to;
        self.calls.push(PlatformCall::MoveContainer(from, to));
    }

    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }

    fn set_keep_screen_on(&mut self, keep_on: bool) {
        self.calls.push(PlatformCall::KeepScreenOn(keep_on));
    }
}
