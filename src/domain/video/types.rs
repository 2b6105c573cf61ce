// SPDX-License-Identifier: MPL-2.0
//! Core types exchanged between the view and the media engine.
//!
//! These types represent pure data without any platform dependencies.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

// =============================================================================
// Surface
// =============================================================================

/// Opaque identifier of one physical renderable surface instance.
///
/// The platform hands out a new identifier every time it (re-)creates the
/// drawing target of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Wraps a platform surface identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A surface reference as reported by the platform.
///
/// The view never owns the surface; it only references it and tracks
/// whether the platform still considers it usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle {
    id: SurfaceId,
    width: u32,
    height: u32,
    valid: bool,
}

impl SurfaceHandle {
    /// Creates a handle for a surface the platform reports as usable.
    #[must_use]
    pub const fn new(id: SurfaceId, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            valid: true,
        }
    }

    /// Creates a handle for a surface the platform already invalidated.
    #[must_use]
    pub const fn invalid(id: SurfaceId) -> Self {
        Self {
            id,
            width: 0,
            height: 0,
            valid: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if the surface may be handed to the engine.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

// =============================================================================
// Video metadata
// =============================================================================

/// Natural decoded dimensions of the video, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VideoSize {
    pub width: u32,
    pub height: u32,
}

impl VideoSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, with zero dimensions treated as 1 so the ratio
    /// is always finite.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width.max(1)) / f64::from(self.height.max(1))
    }

    #[must_use]
    pub const fn is_landscape(self) -> bool {
        self.width > self.height
    }

    #[must_use]
    pub const fn is_portrait(self) -> bool {
        self.width < self.height
    }
}

// =============================================================================
// Data source
// =============================================================================

/// Length used for descriptor sources whose size is not declared.
pub const UNDECLARED_DESCRIPTOR_LENGTH: i64 = 0x07ff_ffff_ffff_ffff;

/// Where the engine should read media from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file path.
    Path(PathBuf),

    /// Network or content URI, optionally with request headers.
    Uri {
        uri: String,
        headers: BTreeMap<String, String>,
    },

    /// Already opened file descriptor with a byte range.
    Descriptor { fd: i32, offset: i64, length: i64 },
}

impl DataSource {
    /// Builds a source from a textual location.
    ///
    /// `file://` URIs are turned into plain paths, anything with another
    /// scheme stays a URI and the rest is read as a local path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if let Some(path) = location.strip_prefix("file://") {
            return Self::Path(PathBuf::from(path));
        }
        if location.contains("://") {
            return Self::Uri {
                uri: location.to_string(),
                headers: BTreeMap::new(),
            };
        }
        Self::Path(PathBuf::from(location))
    }

    /// Descriptor source covering the whole file.
    #[must_use]
    pub fn descriptor(fd: i32) -> Self {
        Self::Descriptor {
            fd,
            offset: 0,
            length: UNDECLARED_DESCRIPTOR_LENGTH,
        }
    }

    /// Returns true if there is nothing to open (empty path or URI).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Path(path) => path.as_os_str().is_empty(),
            Self::Uri { uri, .. } => uri.is_empty(),
            Self::Descriptor { fd, .. } => *fd < 0,
        }
    }
}

// =============================================================================
// Frames
// =============================================================================

/// A captured frame in RGBA8 layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba_data: Arc<Vec<u8>>,
}

impl Bitmap {
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_data: Arc<Vec<u8>>) -> Self {
        Self {
            width,
            height,
            rgba_data,
        }
    }

    /// Returns true if the frame covers no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        u64::from(self.width) * u64::from(self.height) == 0
    }
}

// =============================================================================
// Renderer commands
// =============================================================================

/// Background color treatment applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    None,
    Gray,
    Cool,
    Warm,
    Blur,
}

impl Background {
    /// Renderer identifier.
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::None => 0x100,
            Self::Gray => 0x101,
            Self::Cool => 0x102,
            Self::Warm => 0x103,
            Self::Blur => 0x104,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Background] {
        &[Self::None, Self::Gray, Self::Cool, Self::Warm, Self::Blur]
    }
}

/// Animated filter applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Soul,
    Shake,
    Illusion,
    Scale,
    GlitterWhite,
}

impl Filter {
    /// Renderer identifier.
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::Soul => 0x000,
            Self::Shake => 0x001,
            Self::Illusion => 0x002,
            Self::Scale => 0x003,
            Self::GlitterWhite => 0x004,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Filter] {
        &[
            Self::Soul,
            Self::Shake,
            Self::Illusion,
            Self::Scale,
            Self::GlitterWhite,
        ]
    }
}

/// Split-screen style effect applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    BlurSplit,
    BlackWhiteThree,
    Two,
    Three,
    Four,
    Six,
    Nine,
    PictureInPicture,
    Circle,
}

impl Effect {
    /// Renderer identifier.
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::BlurSplit => 0x200,
            Self::BlackWhiteThree => 0x201,
            Self::Two => 0x202,
            Self::Three => 0x203,
            Self::Four => 0x204,
            Self::Six => 0x205,
            Self::Nine => 0x206,
            Self::PictureInPicture => 0x207,
            Self::Circle => 0x208,
        }
    }
}

/// Corner of the frame a watermark is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaterMarkLocation {
    #[default]
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl WaterMarkLocation {
    /// Renderer identifier (0 left-top, 1 left-bottom, 2 right-top, 3 right-bottom).
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::LeftTop => 0,
            Self::LeftBottom => 1,
            Self::RightTop => 2,
            Self::RightBottom => 3,
        }
    }
}

/// Watermark pixels plus placement.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterMark {
    pub pixels: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub location: WaterMarkLocation,
}

impl WaterMark {
    /// Number of pixel bytes handed to the renderer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
