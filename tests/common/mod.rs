// SPDX-License-Identifier: MPL-2.0
//! Shared fakes for integration tests.

#![allow(dead_code)]

use player_view::application::port::{MediaEngine, SurfaceHost, WindowHost};
use player_view::domain::layout::{ContainerParent, Orientation, ScreenMetrics};
use player_view::domain::video::{
    Background, Bitmap, DataSource, Effect, Filter, Pitch, PlaybackRate, SurfaceHandle, SurfaceId,
    VolumePercent, WaterMark,
};
use player_view::video_player::{EventPoster, PlayerEvent};
use std::path::Path;

/// Engine that logs command names and answers queries from fields.
#[derive(Debug)]
pub struct ScriptedEngine {
    pub log: Vec<String>,
    pub poster: Option<EventPoster>,
    pub playing: bool,
    pub looping: bool,
    pub recording: bool,
    pub volume: i32,
    pub duration: i64,
    pub bitmap: Option<Bitmap>,
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self {
            log: Vec::new(),
            poster: None,
            playing: false,
            looping: false,
            recording: false,
            volume: 100,
            duration: 0,
            bitmap: None,
        }
    }
}

impl ScriptedEngine {
    pub fn emit(&self, event: PlayerEvent) -> bool {
        self.poster.as_ref().is_some_and(|poster| poster.post(event))
    }

    pub fn count(&self, command: &str) -> usize {
        self.log.iter().filter(|entry| entry.as_str() == command).count()
    }

    fn push(&mut self, command: impl Into<String>) {
        self.log.push(command.into());
    }
}

impl MediaEngine for ScriptedEngine {
    fn setup(&mut self, events: EventPoster) {
        self.poster = Some(events);
        self.push("setup");
    }
    fn bind_surface(&mut self, surface: SurfaceHandle) {
        self.push(format!("bind:{}", surface.id().value()));
    }
    fn notify_surface_resized(&mut self, width: u32, height: u32) {
        self.push(format!("resized:{width}x{height}"));
    }
    fn set_data_source(&mut self, _source: &DataSource) {
        self.push("set_data_source");
    }
    fn prepare(&mut self) {
        self.push("prepare");
    }
    fn prepare_async(&mut self) {
        self.push("prepare_async");
    }
    fn start(&mut self) {
        self.playing = true;
        self.push("start");
    }
    fn stop(&mut self) {
        self.playing = false;
        self.push("stop");
    }
    fn pause(&mut self) {
        self.playing = false;
        self.push("pause");
    }
    fn resume(&mut self) {
        self.playing = true;
        self.push("resume");
    }
    fn reset(&mut self) {
        self.playing = false;
        self.push("reset");
    }
    fn release(&mut self) {
        self.playing = false;
        self.push("release");
    }
    fn seek_to(&mut self, position_ms: f32) {
        self.push(format!("seek:{position_ms}"));
    }
    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
    fn set_mute(&mut self, mute: bool) {
        self.push(format!("mute:{mute}"));
    }
    fn set_volume(&mut self, volume: VolumePercent) {
        self.volume = i32::from(volume.value());
    }
    fn set_stereo_volume(&mut self, _left: VolumePercent, _right: VolumePercent) {}
    fn set_rate(&mut self, _rate: PlaybackRate) {}
    fn set_pitch(&mut self, _pitch: Pitch) {}
    fn start_record(&mut self, _path: &Path) -> bool {
        self.recording = true;
        true
    }
    fn stop_record(&mut self) -> bool {
        std::mem::take(&mut self.recording)
    }
    fn is_recording(&self) -> bool {
        self.recording
    }
    fn screenshot_bitmap(&mut self) -> Option<Bitmap> {
        self.bitmap.clone()
    }
    fn change_background(&mut self, _background: Background) {}
    fn change_filter(&mut self, _filter: Filter) {}
    fn change_effect(&mut self, _effect: Effect) {}
    fn set_water_mark(&mut self, _water_mark: &WaterMark) {}
    fn duration_ms(&self) -> i64 {
        self.duration
    }
    fn position_ms(&self) -> i64 {
        0
    }
    fn video_width(&self) -> u32 {
        0
    }
    fn video_height(&self) -> u32 {
        0
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

/// Host window with a single container that is tracked across moves.
#[derive(Debug)]
pub struct TestWindow {
    pub parent: ContainerParent,
    pub bars_visible: bool,
    pub orientation: Orientation,
    pub metrics: ScreenMetrics,
    pub keep_screen_on: bool,
    pub reused: Vec<SurfaceId>,
    pub released: Vec<SurfaceId>,
    pub moves: usize,
}

impl Default for TestWindow {
    fn default() -> Self {
        Self {
            parent: ContainerParent::InLayout,
            bars_visible: true,
            orientation: Orientation::Portrait,
            metrics: ScreenMetrics::new(1080, 2340, 2400),
            keep_screen_on: false,
            reused: Vec::new(),
            released: Vec::new(),
            moves: 0,
        }
    }
}

impl SurfaceHost for TestWindow {
    fn reuse_surface(&mut self, surface: SurfaceId) {
        self.reused.push(surface);
    }
    fn release_surface(&mut self, surface: SurfaceId) {
        self.released.push(surface);
    }
}

impl WindowHost for TestWindow {
    fn resolve_decor(&mut self) -> bool {
        true
    }
    fn set_system_bars_visible(&mut self, visible: bool) {
        self.bars_visible = visible;
    }
    fn lock_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
    fn move_container(&mut self, from: ContainerParent, to: ContainerParent) {
        assert_eq!(self.parent, from, "container moved from a parent it was not in");
        self.parent = to;
        self.moves += 1;
    }
    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }
    fn set_keep_screen_on(&mut self, keep_on: bool) {
        self.keep_screen_on = keep_on;
    }
}
