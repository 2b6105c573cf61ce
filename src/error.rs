// SPDX-License-Identifier: MPL-2.0
use crate::domain::video::SurfaceId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Surface(SurfaceError),
    Capture(CaptureError),
    Fullscreen(String),
}

/// Problems with the renderable surface handed over by the platform.
///
/// None of these are fatal: the bind is deferred until the platform
/// reports the next valid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The platform reported a surface that is not (or no longer) valid.
    Invalid(SurfaceId),

    /// The view was released; no surface may be bound anymore.
    Released,
}

/// Failures while recording or taking a screenshot.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// The output file could not be created before writing started.
    FileCreation(String),

    /// The engine returned a frame with a zero area.
    EmptyFrame { width: u32, height: u32 },

    /// The engine had no frame to hand out.
    NoFrame,

    /// Encoding or writing the image failed.
    Encode(String),

    /// The engine declined to start or stop a recording.
    EngineRefused,

    /// The view was released; the engine takes no more commands.
    Released,
}

impl CaptureError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CaptureError::FileCreation(_) => "capture-error-file-creation",
            CaptureError::EmptyFrame { .. } => "capture-error-empty-frame",
            CaptureError::NoFrame => "capture-error-no-frame",
            CaptureError::Encode(_) => "capture-error-encode",
            CaptureError::EngineRefused => "capture-error-engine-refused",
            CaptureError::Released => "capture-error-released",
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Invalid(id) => write!(f, "Surface {} is not valid", id.value()),
            SurfaceError::Released => write!(f, "View has been released"),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::FileCreation(msg) => write!(f, "Cannot create output file: {}", msg),
            CaptureError::EmptyFrame { width, height } => {
                write!(f, "Frame has invalid dimensions {}x{}", width, height)
            }
            CaptureError::NoFrame => write!(f, "No frame available"),
            CaptureError::Encode(msg) => write!(f, "Failed to encode frame: {}", msg),
            CaptureError::EngineRefused => write!(f, "Engine refused the request"),
            CaptureError::Released => write!(f, "Player has been released"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Surface(e) => write!(f, "Surface Error: {}", e),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
            Error::Fullscreen(e) => write!(f, "Fullscreen Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<CaptureError> for Error {
    fn from(err: CaptureError) -> Self {
        Error::Capture(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn surface_error_wraps_into_error() {
        let err: Error = SurfaceError::Invalid(SurfaceId::new(7)).into();
        assert_eq!(format!("{}", err), "Surface Error: Surface 7 is not valid");
    }

    #[test]
    fn capture_error_display_includes_dimensions() {
        let err = CaptureError::EmptyFrame {
            width: 0,
            height: 720,
        };
        assert!(format!("{}", err).contains("0x720"));
    }

    #[test]
    fn capture_error_i18n_keys() {
        assert_eq!(
            CaptureError::FileCreation("x".into()).i18n_key(),
            "capture-error-file-creation"
        );
        assert_eq!(CaptureError::NoFrame.i18n_key(), "capture-error-no-frame");
        assert_eq!(
            CaptureError::EngineRefused.i18n_key(),
            "capture-error-engine-refused"
        );
    }
}
