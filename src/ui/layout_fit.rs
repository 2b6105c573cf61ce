// SPDX-License-Identifier: MPL-2.0
//! Layout-fit computation.
//!
//! [`compute_layout`] maps a video's natural size onto the player container
//! for a given [`FitMode`]. [`LayoutFitEngine`] keeps the inputs that arrive
//! at different times (video size events, container resizes, fullscreen
//! toggles, fit mode changes) and recomputes on each of them.
//!
//! Aspect-derived dimensions are computed in exact integer arithmetic and
//! rounded half up, so `1080 * 1080 / 1920 = 607.5` becomes `608`.

use crate::config::defaults::{WIDE_RATIO_HEIGHT, WIDE_RATIO_WIDTH};
use crate::domain::layout::{FitMode, LayoutResult, ScreenMetrics, ScreenMode};
use crate::domain::video::VideoSize;

/// `value * num / den`, rounded half up. Saturates at `u32::MAX`.
fn mul_div_round(value: u32, num: u32, den: u32) -> u32 {
    let den = u64::from(den.max(1));
    let scaled = (u64::from(value) * u64::from(num) * 2 + den) / (2 * den);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `value * num / den`, truncated. Saturates at `u32::MAX`.
fn mul_div_floor(value: u32, num: u32, den: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(num) / u64::from(den.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Computes surface and container sizes.
///
/// Zero video dimensions are treated as 1 so degenerate metadata never
/// produces a division by zero. In fullscreen the surface height is the
/// screen height regardless of `fit_mode`.
#[must_use]
pub fn compute_layout(
    video: VideoSize,
    container_width: u32,
    is_fullscreen: bool,
    fit_mode: FitMode,
    metrics: ScreenMetrics,
) -> LayoutResult {
    let video_w = video.width.max(1);
    let video_h = video.height.max(1);

    // height * aspect
    let width_for = |height: u32| mul_div_round(height, video_w, video_h);
    // width / aspect
    let height_for = |width: u32| mul_div_round(width, video_h, video_w);

    let (surface_width, surface_height) = if is_fullscreen {
        let height = metrics.height;
        (width_for(height), height)
    } else {
        match fit_mode {
            FitMode::FillWidthAutoHeight => (container_width, height_for(container_width)),
            FitMode::FillHeightAutoWidth => {
                let height = metrics.full_screen_height;
                (width_for(height), height)
            }
            FitMode::Ratio16x9 => {
                let height = mul_div_floor(container_width, WIDE_RATIO_HEIGHT, WIDE_RATIO_WIDTH);
                (width_for(height), height)
            }
            FitMode::Default => {
                if video.width > video.height {
                    (container_width, height_for(container_width))
                } else if video.width < video.height {
                    (width_for(container_width), container_width)
                } else {
                    (container_width, container_width)
                }
            }
        }
    };

    LayoutResult {
        surface_width,
        surface_height,
        container_height: surface_height,
    }
}

/// Placeholder video size used before the engine reports one: a 16:9
/// frame as wide as the screen.
#[must_use]
pub fn placeholder_video_size(metrics: ScreenMetrics) -> VideoSize {
    VideoSize::new(
        metrics.width,
        mul_div_floor(metrics.width, WIDE_RATIO_HEIGHT, WIDE_RATIO_WIDTH),
    )
}

/// Stateful wrapper around [`compute_layout`]. Caches only the last result.
#[derive(Debug, Clone)]
pub struct LayoutFitEngine {
    fit_mode: FitMode,
    video_size: Option<VideoSize>,
    placeholder: Option<VideoSize>,
    container_width: Option<u32>,
    screen_mode: ScreenMode,
    metrics: ScreenMetrics,
    last: Option<LayoutResult>,
}

impl LayoutFitEngine {
    #[must_use]
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            fit_mode: FitMode::default(),
            video_size: None,
            placeholder: None,
            container_width: None,
            screen_mode: ScreenMode::Normal,
            metrics,
            last: None,
        }
    }

    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    #[must_use]
    pub fn screen_mode(&self) -> ScreenMode {
        self.screen_mode
    }

    /// Last size reported by the engine.
    #[must_use]
    pub fn video_size(&self) -> Option<VideoSize> {
        self.video_size
    }

    #[must_use]
    pub fn last_result(&self) -> Option<LayoutResult> {
        self.last
    }

    /// Returns true once a layout has been computed for the current fit mode.
    #[must_use]
    pub fn has_initial_layout(&self) -> bool {
        self.last.is_some()
    }

    /// Container width used for the computation; screen width until the
    /// container reports its own.
    #[must_use]
    pub fn container_width(&self) -> u32 {
        self.container_width.unwrap_or(self.metrics.width)
    }

    /// Selects the fit mode and lays out immediately.
    ///
    /// Without a known video size a 16:9 placeholder is used so the
    /// container gets a sensible height before the first frame.
    pub fn set_fit_mode(&mut self, fit_mode: FitMode, metrics: ScreenMetrics) -> Option<LayoutResult> {
        self.fit_mode = fit_mode;
        self.metrics = metrics;
        self.last = None;
        if self.video_size.is_none() {
            self.placeholder = Some(placeholder_video_size(metrics));
        }
        self.relayout()
    }

    pub fn on_video_size_changed(&mut self, size: VideoSize) -> Option<LayoutResult> {
        if self.video_size == Some(size) && self.last.is_some() {
            return self.last;
        }
        tracing::debug!(width = size.width, height = size.height, "video size changed");
        self.video_size = Some(size);
        self.placeholder = None;
        self.relayout()
    }

    pub fn on_container_resized(&mut self, width: u32) -> Option<LayoutResult> {
        self.container_width = Some(width);
        self.relayout()
    }

    pub fn set_screen_mode(&mut self, mode: ScreenMode, metrics: ScreenMetrics) -> Option<LayoutResult> {
        self.screen_mode = mode;
        self.metrics = metrics;
        self.relayout()
    }

    /// Re-runs layout after a rotation or other configuration change.
    pub fn on_configuration_changed(&mut self, metrics: ScreenMetrics) -> Option<LayoutResult> {
        self.metrics = metrics;
        self.relayout()
    }

    /// Recomputes from the current inputs. Returns `None` while neither a
    /// video size nor a placeholder is known.
    pub fn relayout(&mut self) -> Option<LayoutResult> {
        let video = self.video_size.or(self.placeholder)?;
        let result = compute_layout(
            video,
            self.container_width(),
            self.screen_mode.is_fullscreen(),
            self.fit_mode,
            self.metrics,
        );
        self.last = Some(result);
        Some(result)
    }

    /// Measured size of the player view for the offered specs.
    ///
    /// `Default` and `FillHeightAutoWidth` report the computed container
    /// height; the other modes accept the offered height.
    #[must_use]
    pub fn measure(&self, width_spec: u32, height_spec: u32) -> (u32, u32) {
        if self.fit_mode.measures_own_height() {
            let height = self.last.map_or(height_spec, |layout| layout.container_height);
            (width_spec, height)
        } else {
            (width_spec, height_spec)
        }
    }
}
