// SPDX-License-Identifier: MPL-2.0
//! Layout domain types.
//!
//! Value types describing how a video is fitted into its container and
//! where the render container currently lives in the window hierarchy.

use std::fmt;
use std::str::FromStr;

/// Policy mapping the video's aspect ratio onto the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitMode {
    /// Landscape content fills the width; portrait content gets a square
    /// container (height = container width) with derived width.
    #[default]
    Default,

    /// Width fills the container, height follows the aspect ratio.
    FillWidthAutoHeight,

    /// Height fills the full screen height, width follows the aspect ratio.
    FillHeightAutoWidth,

    /// Container is 16:9, width follows the aspect ratio.
    Ratio16x9,
}

impl FitMode {
    /// Returns all fit modes.
    #[must_use]
    pub fn all() -> &'static [FitMode] {
        &[
            Self::Default,
            Self::FillWidthAutoHeight,
            Self::FillHeightAutoWidth,
            Self::Ratio16x9,
        ]
    }

    /// Stable name used in settings files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FillWidthAutoHeight => "fill-width",
            Self::FillHeightAutoWidth => "fill-height",
            Self::Ratio16x9 => "16x9",
        }
    }

    /// Returns true if the measured view height follows the computed
    /// container height instead of the height offered by the parent.
    #[must_use]
    pub fn measures_own_height(self) -> bool {
        matches!(self, Self::Default | Self::FillHeightAutoWidth)
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a fit mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFitMode(pub String);

impl fmt::Display for UnknownFitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fit mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownFitMode {}

impl FromStr for FitMode {
    type Err = UnknownFitMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "fill-width" | "fill_width" => Ok(Self::FillWidthAutoHeight),
            "fill-height" | "fill_height" => Ok(Self::FillHeightAutoWidth),
            "16x9" | "16:9" => Ok(Self::Ratio16x9),
            other => Err(UnknownFitMode(other.to_string())),
        }
    }
}

/// Whether the render container is shown inline or covers the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenMode {
    #[default]
    Normal,
    Fullscreen,
}

impl ScreenMode {
    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        self == Self::Fullscreen
    }
}

/// Computed target sizes for the rendering surface and its container.
///
/// The container width always fills its parent, so only its height is
/// part of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutResult {
    pub surface_width: u32,
    pub surface_height: u32,
    pub container_height: u32,
}

/// Display dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenMetrics {
    /// Usable screen width.
    pub width: u32,
    /// Usable screen height (excluding system decorations).
    pub height: u32,
    /// Real display height including status and navigation bars.
    pub full_screen_height: u32,
}

impl ScreenMetrics {
    #[must_use]
    pub const fn new(width: u32, height: u32, full_screen_height: u32) -> Self {
        Self {
            width,
            height,
            full_screen_height,
        }
    }

    /// Same metrics seen after the device is rotated by 90°.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            full_screen_height: self.width,
        }
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(1080, 2340, 2400)
    }
}

/// Which parent currently holds the render container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerParent {
    /// The player widget inside the regular layout.
    #[default]
    InLayout,
    /// The window's top-level decor view.
    Decor,
}

/// Screen orientation lock requested from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}
