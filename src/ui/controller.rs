// SPDX-License-Identifier: MPL-2.0
//! Transport controls.
//!
//! The [`Controller`] turns bridge callbacks into a [`ControlsState`] view
//! model (play icon, seek bar, time text, mute icon, loading and replay
//! affordances) and owns the seek drag: dragging pauses the engine and
//! freezes time updates of the seek bar, releasing issues one absolute seek
//! and resumes.

use crate::application::port::MediaEngine;
use crate::config::defaults::{LOADING_COMPLETE_PERCENT, SEEK_BAR_MAX};
use crate::domain::video::VolumePercent;
use crate::error::CaptureError;
use crate::i18n::I18n;
use crate::video_player::CaptureKind;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Playback state as observed through engine events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Paused,
    Playing,
    Seeking,
    Buffering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayIcon {
    #[default]
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuteIcon {
    #[default]
    VolumeOn,
    VolumeOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenIcon {
    #[default]
    Enter,
    Exit,
}

/// Everything the control widgets render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsState {
    pub play_icon: PlayIcon,
    /// Seek bar position, 0 to [`SEEK_BAR_MAX`].
    pub progress: u32,
    pub time_text: String,
    /// Hidden for live streams (no duration).
    pub bottom_panel_visible: bool,
    pub mute_icon: MuteIcon,
    pub loading_visible: bool,
    pub replay_visible: bool,
    pub fullscreen_icon: FullscreenIcon,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            play_icon: PlayIcon::Play,
            progress: 0,
            time_text: format!(
                "{} / {}",
                format_standard_time(0),
                format_standard_time(0)
            ),
            bottom_panel_visible: true,
            mute_icon: MuteIcon::VolumeOn,
            loading_visible: false,
            replay_visible: false,
            fullscreen_icon: FullscreenIcon::Enter,
        }
    }
}

/// User-facing message queued by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    PlaybackError { code: i32, message: String },
    RecordingStarted(PathBuf),
    CaptureSaved { kind: CaptureKind, path: PathBuf },
    CaptureFailed(CaptureError),
}

impl Notice {
    /// Localized text for this notice.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        match self {
            Notice::PlaybackError { code, message } => i18n.tr_with_args(
                "player-error",
                &[("code", &code.to_string()), ("message", message)],
            ),
            Notice::RecordingStarted(path) => i18n.tr_with_args(
                "capture-record-started",
                &[("path", &path.display().to_string())],
            ),
            Notice::CaptureSaved { kind, path } => {
                let key = match kind {
                    CaptureKind::Recording => "capture-record-saved",
                    CaptureKind::Screenshot => "capture-screenshot-saved",
                };
                i18n.tr_with_args(key, &[("path", &path.display().to_string())])
            }
            Notice::CaptureFailed(err) => i18n.tr(err.i18n_key()),
        }
    }
}

/// Formats milliseconds as `mm:ss`, or `hh:mm:ss` from one hour on.
/// Negative values format as zero.
#[must_use]
pub fn format_standard_time(millis: i64) -> String {
    let total_seconds = millis.max(0) / 1000;
    let seconds = total_seconds % 60;
    let minutes = total_seconds / 60 % 60;
    let hours = total_seconds / 3600;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Maps a seek bar position to milliseconds.
#[must_use]
pub fn progress_to_position(progress: u32, duration_ms: i64) -> i64 {
    i64::from(progress.min(SEEK_BAR_MAX)) * duration_ms.max(0) / i64::from(SEEK_BAR_MAX)
}

/// Maps a position to a seek bar value.
#[must_use]
pub fn position_to_progress(current_ms: i64, duration_ms: i64) -> u32 {
    if duration_ms <= 0 {
        return 0;
    }
    let progress = current_ms.clamp(0, duration_ms) * i64::from(SEEK_BAR_MAX) / duration_ms;
    u32::try_from(progress).unwrap_or(SEEK_BAR_MAX)
}

#[derive(Debug, Default)]
pub struct Controller {
    controls: ControlsState,
    playing: bool,
    loading: bool,
    seeking: bool,
    seek_position_ms: i64,
    duration_ms: i64,
    notices: VecDeque<Notice>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    /// Current state, derived from the flags the callbacks maintain.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        if self.seeking {
            ControllerState::Seeking
        } else if self.loading {
            ControllerState::Buffering
        } else if self.playing {
            ControllerState::Playing
        } else {
            ControllerState::Paused
        }
    }

    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Removes and returns queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn on_loading(&mut self, percent: i32) {
        self.loading = percent < LOADING_COMPLETE_PERCENT;
        self.controls.loading_visible = self.loading;
    }

    pub fn on_time_update(&mut self, current_ms: i64, duration_ms: i64) {
        self.duration_ms = duration_ms;
        self.controls.bottom_panel_visible = duration_ms > 0;
        // While dragging the seek bar shows the previewed position
        if !self.controls.bottom_panel_visible || self.seeking {
            return;
        }
        self.controls.time_text = format!(
            "{} / {}",
            format_standard_time(current_ms),
            format_standard_time(duration_ms)
        );
        self.controls.progress = position_to_progress(current_ms, duration_ms);
    }

    /// Engine error: playback is considered stopped until the user acts.
    pub fn on_error(&mut self, code: i32, message: &str) {
        tracing::warn!(code, error_message = message, "engine reported an error");
        self.playing = false;
        self.loading = false;
        self.controls.loading_visible = false;
        self.controls.play_icon = PlayIcon::Play;
        self.notices.push_back(Notice::PlaybackError {
            code,
            message: message.to_string(),
        });
    }

    pub fn on_completion(&mut self, looping: bool) {
        self.controls.replay_visible = !looping;
        if !looping {
            self.playing = false;
            self.controls.play_icon = PlayIcon::Play;
        }
    }

    pub fn on_pause(&mut self) {
        self.playing = false;
        self.controls.play_icon = PlayIcon::Play;
    }

    /// Playback (re)started. `raw_volume` refreshes the mute icon.
    pub fn on_resume(&mut self, raw_volume: i32) {
        self.playing = true;
        self.controls.play_icon = PlayIcon::Pause;
        self.controls.replay_visible = false;
        self.controls.mute_icon = mute_icon_for(VolumePercent::from_engine(raw_volume));
    }

    pub fn on_fullscreen_changed(&mut self, is_fullscreen: bool) {
        self.controls.fullscreen_icon = if is_fullscreen {
            FullscreenIcon::Exit
        } else {
            FullscreenIcon::Enter
        };
    }

    /// User grabbed the seek bar.
    pub fn begin_seek<E>(&mut self, engine: &mut E)
    where
        E: MediaEngine + ?Sized,
    {
        self.seeking = true;
        self.duration_ms = engine.duration_ms();
        self.seek_position_ms = engine.position_ms();
        engine.pause();
    }

    /// Seek bar moved while dragging. Returns the previewed position.
    pub fn seek_preview(&mut self, progress: u32) -> i64 {
        let progress = progress.min(SEEK_BAR_MAX);
        self.seek_position_ms = progress_to_position(progress, self.duration_ms);
        self.controls.progress = progress;
        if self.duration_ms > 0 {
            self.controls.time_text = format!(
                "{} / {}",
                format_standard_time(self.seek_position_ms),
                format_standard_time(self.duration_ms)
            );
        }
        self.seek_position_ms
    }

    /// User released the seek bar: one absolute seek, then resume.
    pub fn end_seek<E>(&mut self, engine: &mut E)
    where
        E: MediaEngine + ?Sized,
    {
        if !self.seeking {
            return;
        }
        engine.seek_to(self.seek_position_ms as f32);
        engine.resume();
        self.seeking = false;
        self.on_resume(engine.volume());
    }

    /// Play/pause button.
    pub fn toggle_play<E>(&mut self, engine: &mut E)
    where
        E: MediaEngine + ?Sized,
    {
        if engine.is_playing() {
            engine.pause();
            self.on_pause();
        } else {
            engine.resume();
            self.on_resume(engine.volume());
        }
    }

    /// Mute button: a volume of zero or below goes to full volume,
    /// anything else to zero.
    pub fn toggle_mute<E>(&mut self, engine: &mut E) -> VolumePercent
    where
        E: MediaEngine + ?Sized,
    {
        let target = VolumePercent::new(engine.volume()).toggled_mute();
        engine.set_volume(target);
        self.controls.mute_icon = mute_icon_for(target);
        target
    }

    /// Replay button pressed.
    pub fn on_repeat(&mut self) {
        self.controls.replay_visible = false;
    }
}

fn mute_icon_for(volume: VolumePercent) -> MuteIcon {
    if volume.is_muted() {
        MuteIcon::VolumeOff
    } else {
        MuteIcon::VolumeOn
    }
}
