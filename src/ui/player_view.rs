// SPDX-License-Identifier: MPL-2.0
//! The player view.
//!
//! [`PlayerView`] owns the engine handle, the platform handle and every
//! UI-thread component: surface lifecycle, layout fit, fullscreen state,
//! gesture transform and transport controller. Engine events reach it
//! through the [`EventBridge`]; the host calls [`PlayerView::process_events`]
//! from its UI loop to deliver them.
//!
//! # Example
//!
//! ```ignore
//! let mut view = PlayerView::new(engine, platform, &config);
//! view.set_fit_mode(FitMode::Default);
//! view.play(DataSource::parse("/videos/clip.mp4"));
//! loop {
//!     view.process_events();
//!     // render view.controls(), view.layout(), view.transform()
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::application::port::{MediaEngine, SurfaceHost, WindowHost};
use crate::config::Config;
use crate::domain::layout::{FitMode, LayoutResult, ScreenMode};
use crate::domain::video::{
    Background, DataSource, Effect, Filter, Pitch, PlaybackRate, SurfaceHandle, SurfaceId,
    VideoSize, VolumePercent, WaterMark,
};
use crate::error::CaptureError;
use crate::ui::controller::{ControlsState, Controller, Notice};
use crate::ui::fullscreen::FullscreenStateMachine;
use crate::ui::layout_fit::LayoutFitEngine;
use crate::ui::state::{TouchEvent, TransformState};
use crate::ui::surface::{SurfaceAction, SurfaceLifecycle};
use crate::video_player::capture::{self, CaptureKind};
use crate::video_player::{Debouncer, EventBridge, EventKind, Listener, PlayerEvent};

/// Opaque black, the container's initial background.
pub const DEFAULT_BACKGROUND_COLOR: u32 = 0xFF00_0000;

pub struct PlayerView<E, P>
where
    E: MediaEngine,
    P: SurfaceHost + WindowHost,
{
    engine: E,
    platform: P,
    bridge: EventBridge,
    surface: SurfaceLifecycle,
    layout: LayoutFitEngine,
    fullscreen: FullscreenStateMachine,
    transform: TransformState,
    controller: Controller,
    debouncer: Debouncer,
    source: Option<DataSource>,
    start_when_prepared: bool,
    recording_path: Option<PathBuf>,
    record_dir: PathBuf,
    screenshot_dir: PathBuf,
    background_color: u32,
    keep_screen_on: bool,
    released: bool,
}

impl<E, P> PlayerView<E, P>
where
    E: MediaEngine,
    P: SurfaceHost + WindowHost,
{
    /// Wires the engine to a fresh bridge and applies the stored settings.
    pub fn new(mut engine: E, mut platform: P, config: &Config) -> Self {
        let bridge = EventBridge::new();
        engine.setup(bridge.poster());
        engine.set_looping(config.looping());
        engine.set_volume(config.volume());
        platform.set_keep_screen_on(true);

        let metrics = platform.screen_metrics();
        let mut layout = LayoutFitEngine::new(metrics);
        layout.set_fit_mode(config.fit_mode(), metrics);

        Self {
            engine,
            platform,
            bridge,
            surface: SurfaceLifecycle::new(),
            layout,
            fullscreen: FullscreenStateMachine::new(),
            transform: TransformState::with_toggles(config.gesture.into()),
            controller: Controller::new(),
            debouncer: Debouncer::new(config.click_debounce()),
            source: None,
            start_when_prepared: false,
            recording_path: None,
            record_dir: config.record_dir(),
            screenshot_dir: config.screenshot_dir(),
            background_color: DEFAULT_BACKGROUND_COLOR,
            keep_screen_on: true,
            released: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controls(&self) -> &ControlsState {
        self.controller.controls()
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn surface(&self) -> &SurfaceLifecycle {
        &self.surface
    }

    /// Last computed layout.
    pub fn layout(&self) -> Option<LayoutResult> {
        self.layout.last_result()
    }

    pub fn fit_mode(&self) -> FitMode {
        self.layout.fit_mode()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    // =========================================================================
    // Controller and layout
    // =========================================================================

    /// Installs a controller and selects the fit mode.
    pub fn set_controller(&mut self, controller: Controller, fit_mode: FitMode) -> Option<LayoutResult> {
        self.controller = controller;
        self.controller
            .on_fullscreen_changed(self.fullscreen.is_fullscreen());
        self.set_fit_mode(fit_mode)
    }

    pub fn set_fit_mode(&mut self, fit_mode: FitMode) -> Option<LayoutResult> {
        let metrics = self.platform.screen_metrics();
        self.layout.set_fit_mode(fit_mode, metrics)
    }

    pub fn on_container_resized(&mut self, width: u32) -> Option<LayoutResult> {
        self.layout.on_container_resized(width)
    }

    /// Screen rotation or another configuration change.
    pub fn on_configuration_changed(&mut self) -> Option<LayoutResult> {
        let metrics = self.platform.screen_metrics();
        self.layout.on_configuration_changed(metrics)
    }

    pub fn measure(&self, width_spec: u32, height_spec: u32) -> (u32, u32) {
        self.layout.measure(width_spec, height_spec)
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Opens `source` and starts it once prepared.
    ///
    /// Returns false for empty sources, repeated clicks inside the debounce
    /// interval and after release.
    pub fn play(&mut self, source: DataSource) -> bool {
        if self.released || source.is_empty() {
            return false;
        }
        if self.debouncer.is_fast_click() {
            tracing::debug!("play ignored: repeated click");
            return false;
        }
        self.open(source);
        true
    }

    /// Plays the last source again from the beginning.
    pub fn repeat_play(&mut self) -> bool {
        let Some(source) = self.source.clone() else {
            return false;
        };
        if self.released {
            return false;
        }
        self.open(source);
        self.controller.on_repeat();
        true
    }

    fn open(&mut self, source: DataSource) {
        tracing::info!(?source, "opening media");
        self.engine.reset();
        self.bridge.reset();
        self.engine.set_data_source(&source);
        self.start_when_prepared = true;
        self.engine.prepare_async();
        self.source = Some(source);
    }

    pub fn pause(&mut self) {
        if self.released {
            return;
        }
        self.engine.pause();
        self.controller.on_pause();
    }

    pub fn resume(&mut self) {
        if self.released {
            return;
        }
        self.engine.resume();
        self.controller.on_resume(self.engine.volume());
    }

    /// Returns the engine to idle and drops every undelivered event of the
    /// current session. Registered listeners stay.
    pub fn reset(&mut self) {
        if self.released {
            return;
        }
        self.engine.reset();
        self.bridge.reset();
        self.start_when_prepared = false;
    }

    pub fn seek_to(&mut self, position_ms: f32) {
        if self.released {
            return;
        }
        self.engine.seek_to(position_ms);
    }

    pub fn toggle_play(&mut self) {
        if self.released {
            return;
        }
        self.controller.toggle_play(&mut self.engine);
    }

    pub fn is_playing(&self) -> bool {
        !self.released && self.engine.is_playing()
    }

    pub fn is_looping(&self) -> bool {
        !self.released && self.engine.is_looping()
    }

    pub fn set_looping(&mut self, looping: bool) {
        if self.released {
            return;
        }
        self.engine.set_looping(looping);
    }

    pub fn duration_ms(&self) -> i64 {
        if self.released {
            return 0;
        }
        self.engine.duration_ms()
    }

    pub fn position_ms(&self) -> i64 {
        if self.released {
            return 0;
        }
        self.engine.position_ms()
    }

    pub fn video_size(&self) -> VideoSize {
        if self.released {
            return VideoSize::new(0, 0);
        }
        VideoSize::new(self.engine.video_width(), self.engine.video_height())
    }

    pub fn set_rate(&mut self, rate: PlaybackRate) {
        if self.released {
            return;
        }
        self.engine.set_rate(rate);
    }

    pub fn set_pitch(&mut self, pitch: Pitch) {
        if self.released {
            return;
        }
        self.engine.set_pitch(pitch);
    }

    // =========================================================================
    // Seek bar
    // =========================================================================

    pub fn begin_seek(&mut self) {
        if self.released {
            return;
        }
        self.controller.begin_seek(&mut self.engine);
    }

    pub fn seek_preview(&mut self, progress: u32) -> i64 {
        self.controller.seek_preview(progress)
    }

    pub fn end_seek(&mut self) {
        if self.released {
            return;
        }
        self.controller.end_seek(&mut self.engine);
    }

    // =========================================================================
    // Volume
    // =========================================================================

    pub fn set_mute(&mut self, mute: bool) {
        if self.released {
            return;
        }
        self.engine.set_mute(mute);
    }

    pub fn set_volume(&mut self, percent: i32) {
        if self.released {
            return;
        }
        self.engine.set_volume(VolumePercent::new(percent));
    }

    pub fn set_stereo_volume(&mut self, left: i32, right: i32) {
        if self.released {
            return;
        }
        self.engine
            .set_stereo_volume(VolumePercent::new(left), VolumePercent::new(right));
    }

    /// Current volume; full volume while the engine has no audio output
    /// or after release.
    pub fn volume(&self) -> VolumePercent {
        if self.released {
            return VolumePercent::FULL;
        }
        VolumePercent::from_engine(self.engine.volume())
    }

    /// Returns the new volume; after release nothing changes.
    pub fn toggle_mute(&mut self) -> VolumePercent {
        if self.released {
            return VolumePercent::FULL;
        }
        self.controller.toggle_mute(&mut self.engine)
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    pub fn screen_mode(&self) -> ScreenMode {
        self.fullscreen.mode()
    }

    pub fn enter_fullscreen(&mut self) -> bool {
        let changed = self.fullscreen.enter(&mut self.platform);
        if changed {
            self.after_screen_mode_change();
        }
        changed
    }

    pub fn exit_fullscreen(&mut self) -> bool {
        let changed = self.fullscreen.exit(&mut self.platform);
        if changed {
            self.after_screen_mode_change();
        }
        changed
    }

    /// Toggles fullscreen. Returns whether a transition happened.
    pub fn switch_screen(&mut self) -> bool {
        let changed = self.fullscreen.switch_screen(&mut self.platform);
        if changed {
            self.after_screen_mode_change();
        }
        changed
    }

    fn after_screen_mode_change(&mut self) {
        let metrics = self.platform.screen_metrics();
        self.layout.set_screen_mode(self.fullscreen.mode(), metrics);
        self.controller
            .on_fullscreen_changed(self.fullscreen.is_fullscreen());
    }

    // =========================================================================
    // Surface callbacks
    // =========================================================================

    pub fn on_surface_available(&mut self, surface: SurfaceHandle) -> SurfaceAction {
        self.surface
            .on_surface_available(surface, &mut self.engine, &mut self.platform)
    }

    /// Forwards the resize; lays out only if no layout exists yet.
    pub fn on_surface_size_changed(&mut self, width: u32, height: u32) -> Option<LayoutResult> {
        self.surface.on_size_changed(width, height, &mut self.engine);
        if self.layout.has_initial_layout() {
            None
        } else {
            self.layout.relayout()
        }
    }

    pub fn on_surface_destroyed(&mut self, surface: SurfaceId) -> bool {
        self.surface.on_destroyed(surface)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.transform.on_touch_event(event)
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.transform.set_touch_enabled(enabled);
    }

    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.transform.set_rotation_enabled(enabled);
    }

    pub fn set_translation_enabled(&mut self, enabled: bool) {
        self.transform.set_translation_enabled(enabled);
    }

    pub fn reset_transform(&mut self, preserve_toggles: bool) {
        self.transform.reset(preserve_toggles);
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Registers the listener for `kind`, replacing the previous one.
    pub fn set_listener(&mut self, kind: EventKind, listener: Option<Listener>) {
        self.bridge.set_listener(kind, listener);
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: FnMut(&PlayerEvent) + 'static,
    {
        self.bridge.on(kind, listener);
    }

    /// Delivers queued engine events. Internal handling (layout, controller,
    /// auto start) runs before the registered listener of each event.
    pub fn process_events(&mut self) -> usize {
        let engine = &mut self.engine;
        let layout = &mut self.layout;
        let controller = &mut self.controller;
        let start_when_prepared = &mut self.start_when_prepared;
        self.bridge.process_pending(|event| {
            route_event(event, engine, layout, controller, start_when_prepared);
        })
    }

    /// Removes and returns pending user-facing notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.controller.take_notices()
    }

    // =========================================================================
    // Recording and screenshots
    // =========================================================================

    pub fn set_capture_dirs(&mut self, record_dir: PathBuf, screenshot_dir: PathBuf) {
        self.record_dir = record_dir;
        self.screenshot_dir = screenshot_dir;
    }

    pub fn is_recording(&self) -> bool {
        !self.released && self.engine.is_recording()
    }

    /// Creates the output file, then asks the engine to record into it.
    ///
    /// # Errors
    ///
    /// Fails if the view was released, the file cannot be created or the
    /// engine refuses. A refused recording leaves no file behind.
    pub fn start_record(&mut self) -> Result<PathBuf, CaptureError> {
        let result = if self.released {
            Err(CaptureError::Released)
        } else {
            start_record_into(&mut self.engine, &self.record_dir)
        };
        match &result {
            Ok(path) => {
                self.recording_path = Some(path.clone());
                self.controller
                    .push_notice(Notice::RecordingStarted(path.clone()));
            }
            Err(err) => self.report_capture_failure(err),
        }
        result
    }

    /// # Errors
    ///
    /// Fails if the engine could not finalize a recording or the view was
    /// released.
    pub fn stop_record(&mut self) -> Result<PathBuf, CaptureError> {
        let path = self.recording_path.take();
        let result = match path {
            _ if self.released => Err(CaptureError::Released),
            Some(path) if self.engine.stop_record() => Ok(path),
            _ => Err(CaptureError::EngineRefused),
        };
        match &result {
            Ok(path) => self.controller.push_notice(Notice::CaptureSaved {
                kind: CaptureKind::Recording,
                path: path.clone(),
            }),
            Err(err) => self.report_capture_failure(err),
        }
        result
    }

    /// Saves the current frame as JPEG.
    ///
    /// # Errors
    ///
    /// Fails if there is no frame, the frame is empty, the file cannot be
    /// created or written, or the view was released.
    pub fn screenshot(&mut self) -> Result<PathBuf, CaptureError> {
        let result = if self.released {
            Err(CaptureError::Released)
        } else {
            screenshot_into(&mut self.engine, &self.screenshot_dir)
        };
        match &result {
            Ok(path) => self.controller.push_notice(Notice::CaptureSaved {
                kind: CaptureKind::Screenshot,
                path: path.clone(),
            }),
            Err(err) => self.report_capture_failure(err),
        }
        result
    }

    fn report_capture_failure(&mut self, err: &CaptureError) {
        tracing::warn!(%err, "capture failed");
        self.controller
            .push_notice(Notice::CaptureFailed(err.clone()));
    }

    // =========================================================================
    // Renderer
    // =========================================================================

    pub fn change_background(&mut self, background: Background) {
        if self.released {
            return;
        }
        self.engine.change_background(background);
    }

    pub fn change_filter(&mut self, filter: Filter) {
        if self.released {
            return;
        }
        self.engine.change_filter(filter);
    }

    pub fn change_effect(&mut self, effect: Effect) {
        if self.released {
            return;
        }
        self.engine.change_effect(effect);
    }

    pub fn set_water_mark(&mut self, water_mark: &WaterMark) {
        if self.released {
            return;
        }
        if water_mark.is_empty() {
            tracing::debug!("ignoring empty watermark");
            return;
        }
        self.engine.set_water_mark(water_mark);
    }

    /// Container background as `0xAARRGGBB`.
    pub fn set_player_background_color(&mut self, argb: u32) {
        self.background_color = argb;
    }

    pub fn background_color(&self) -> u32 {
        self.background_color
    }

    pub fn keep_screen_on(&self) -> bool {
        self.keep_screen_on
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Unregisters listeners, invalidates the liveness token, releases the
    /// retained surface, then releases the engine. Idempotent.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.bridge.release();
        self.surface.release(&mut self.platform);
        self.engine.stop();
        self.engine.release();
        self.start_when_prepared = false;
        self.keep_screen_on = false;
        self.platform.set_keep_screen_on(false);
        tracing::info!("player view released");
    }
}

fn route_event<E>(
    event: &PlayerEvent,
    engine: &mut E,
    layout: &mut LayoutFitEngine,
    controller: &mut Controller,
    start_when_prepared: &mut bool,
) where
    E: MediaEngine + ?Sized,
{
    match event {
        PlayerEvent::Prepared => {
            if std::mem::take(start_when_prepared) {
                engine.start();
                controller.on_resume(engine.volume());
            }
        }
        PlayerEvent::VideoSizeChanged { width, height } => {
            layout.on_video_size_changed(VideoSize::new(*width, *height));
        }
        PlayerEvent::BufferingUpdate(_) | PlayerEvent::Started => {
            if let Some(percent) = event.buffering_percent() {
                controller.on_loading(percent);
            }
        }
        PlayerEvent::TimeUpdate {
            current_ms,
            duration_ms,
        } => controller.on_time_update(*current_ms, *duration_ms),
        PlayerEvent::Error { code, message } => controller.on_error(*code, message),
        PlayerEvent::PlaybackComplete => controller.on_completion(engine.is_looping()),
        PlayerEvent::Info { what, extra } => tracing::debug!(what, extra, "engine info"),
        PlayerEvent::SeekComplete => tracing::debug!("seek complete"),
    }
}

fn start_record_into<E>(engine: &mut E, dir: &Path) -> Result<PathBuf, CaptureError>
where
    E: MediaEngine + ?Sized,
{
    if engine.is_recording() {
        return Err(CaptureError::EngineRefused);
    }
    let path = capture::create_output_file(dir, CaptureKind::Recording)?;
    if engine.start_record(&path) {
        Ok(path)
    } else {
        capture::discard_output_file(&path);
        Err(CaptureError::EngineRefused)
    }
}

fn screenshot_into<E>(engine: &mut E, dir: &Path) -> Result<PathBuf, CaptureError>
where
    E: MediaEngine + ?Sized,
{
    let bitmap = engine.screenshot_bitmap().ok_or(CaptureError::NoFrame)?;
    if bitmap.is_empty() {
        return Err(CaptureError::EmptyFrame {
            width: bitmap.width,
            height: bitmap.height,
        });
    }
    let path = capture::create_output_file(dir, CaptureKind::Screenshot)?;
    if let Err(err) = capture::save_jpeg(&bitmap, &path) {
        capture::discard_output_file(&path);
        return Err(err);
    }
    Ok(path)
}
