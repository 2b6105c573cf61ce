// SPDX-License-Identifier: MPL-2.0
//! Typed engine events.
//!
//! The native engine reports everything through a numeric `what/arg1/arg2`
//! triple. This module turns that triple into [`PlayerEvent`] variants and
//! names the listener slot ([`EventKind`]) each variant is delivered to.

/// Numeric discriminants used by the native engine.
pub mod codes {
    /// Interface test message.
    pub const NOP: i32 = 0;
    pub const PREPARED: i32 = 1;
    pub const PLAYBACK_COMPLETE: i32 = 2;
    pub const BUFFERING_UPDATE: i32 = 3;
    pub const SEEK_COMPLETE: i32 = 4;
    pub const SET_VIDEO_SIZE: i32 = 5;
    pub const STARTED: i32 = 6;
    pub const TIMED_TEXT: i32 = 99;
    pub const ERROR: i32 = 100;
    pub const INFO: i32 = 200;
    /// Periodic position report.
    pub const CURRENT: i32 = 300;
}

pub use crate::config::defaults::LOADING_COMPLETE_PERCENT;

/// Event produced by the media engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The data source is ready to start.
    Prepared,

    /// Playback reached the end of the media.
    PlaybackComplete,

    /// Buffer fill level in percent; below 100 means still loading.
    BufferingUpdate(i32),

    SeekComplete,

    /// Natural decoded size changed (first report or stream renegotiation).
    VideoSizeChanged { width: u32, height: u32 },

    /// Rendering started; implies loading finished.
    Started,

    Error { code: i32, message: String },

    Info { what: i32, extra: i32 },

    TimeUpdate { current_ms: i64, duration_ms: i64 },
}

/// Listener slot an event is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Prepared,
    PlaybackComplete,
    BufferingUpdate,
    SeekComplete,
    VideoSizeChanged,
    Error,
    Info,
    TimeUpdate,
}

impl EventKind {
    /// Returns all listener slots.
    #[must_use]
    pub fn all() -> &'static [EventKind] {
        &[
            Self::Prepared,
            Self::PlaybackComplete,
            Self::BufferingUpdate,
            Self::SeekComplete,
            Self::VideoSizeChanged,
            Self::Error,
            Self::Info,
            Self::TimeUpdate,
        ]
    }
}

/// Result of decoding a raw engine message.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Event(PlayerEvent),
    /// Known message with no listener (interface tests, timed text).
    Ignored(i32),
    /// Unknown discriminant.
    Unknown(i32),
}

impl PlayerEvent {
    /// Listener slot for this event.
    ///
    /// `Started` shares the buffering slot: it is reported as loading
    /// complete.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Prepared => EventKind::Prepared,
            Self::PlaybackComplete => EventKind::PlaybackComplete,
            Self::BufferingUpdate(_) | Self::Started => EventKind::BufferingUpdate,
            Self::SeekComplete => EventKind::SeekComplete,
            Self::VideoSizeChanged { .. } => EventKind::VideoSizeChanged,
            Self::Error { .. } => EventKind::Error,
            Self::Info { .. } => EventKind::Info,
            Self::TimeUpdate { .. } => EventKind::TimeUpdate,
        }
    }

    /// Buffer fill level carried by this event, if any.
    #[must_use]
    pub fn buffering_percent(&self) -> Option<i32> {
        match self {
            Self::BufferingUpdate(percent) => Some(*percent),
            Self::Started => Some(LOADING_COMPLETE_PERCENT),
            _ => None,
        }
    }

    /// Maps a native `what/arg1/arg2` triple onto a typed event.
    ///
    /// For errors the message is the attached text when the engine sent
    /// one, otherwise the secondary code rendered as text.
    #[must_use]
    pub fn decode(what: i32, arg1: i32, arg2: i32, obj: Option<&str>) -> Decoded {
        let event = match what {
            codes::PREPARED => Self::Prepared,
            codes::PLAYBACK_COMPLETE => Self::PlaybackComplete,
            codes::BUFFERING_UPDATE => Self::BufferingUpdate(arg1),
            codes::SEEK_COMPLETE => Self::SeekComplete,
            codes::SET_VIDEO_SIZE => Self::VideoSizeChanged {
                width: u32::try_from(arg1).unwrap_or(0),
                height: u32::try_from(arg2).unwrap_or(0),
            },
            codes::STARTED => Self::Started,
            codes::ERROR => Self::Error {
                code: arg1,
                message: obj.map_or_else(|| arg2.to_string(), str::to_string),
            },
            codes::INFO => Self::Info {
                what: arg1,
                extra: arg2,
            },
            codes::CURRENT => Self::TimeUpdate {
                current_ms: i64::from(arg1),
                duration_ms: i64::from(arg2),
            },
            codes::NOP | codes::TIMED_TEXT => return Decoded::Ignored(what),
            other => return Decoded::Unknown(other),
        };
        Decoded::Event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_maps_known_codes() {
        assert_eq!(
            PlayerEvent::decode(codes::PREPARED, 0, 0, None),
            Decoded::Event(PlayerEvent::Prepared)
        );
        assert_eq!(
            PlayerEvent::decode(codes::BUFFERING_UPDATE, 42, 0, None),
            Decoded::Event(PlayerEvent::BufferingUpdate(42))
        );
        assert_eq!(
            PlayerEvent::decode(codes::SET_VIDEO_SIZE, 1920, 1080, None),
            Decoded::Event(PlayerEvent::VideoSizeChanged {
                width: 1920,
                height: 1080
            })
        );
        assert_eq!(
            PlayerEvent::decode(codes::CURRENT, 5_000, 60_000, None),
            Decoded::Event(PlayerEvent::TimeUpdate {
                current_ms: 5_000,
                duration_ms: 60_000
            })
        );
    }

    #[test]
    fn decode_error_prefers_attached_message() {
        assert_eq!(
            PlayerEvent::decode(codes::ERROR, -5, 7, Some("open failed")),
            Decoded::Event(PlayerEvent::Error {
                code: -5,
                message: "open failed".to_string()
            })
        );
        assert_eq!(
            PlayerEvent::decode(codes::ERROR, -5, 7, None),
            Decoded::Event(PlayerEvent::Error {
                code: -5,
                message: "7".to_string()
            })
        );
    }

    #[test]
    fn decode_negative_size_clamps_to_zero() {
        assert_eq!(
            PlayerEvent::decode(codes::SET_VIDEO_SIZE, -1, 720, None),
            Decoded::Event(PlayerEvent::VideoSizeChanged {
                width: 0,
                height: 720
            })
        );
    }

    #[test]
    fn decode_ignores_nop_and_timed_text() {
        assert_eq!(PlayerEvent::decode(codes::NOP, 0, 0, None), Decoded::Ignored(0));
        assert_eq!(
            PlayerEvent::decode(codes::TIMED_TEXT, 0, 0, None),
            Decoded::Ignored(99)
        );
        assert_eq!(PlayerEvent::decode(12345, 0, 0, None), Decoded::Unknown(12345));
    }

    #[test]
    fn started_reports_loading_complete_in_buffering_slot() {
        assert_eq!(PlayerEvent::Started.kind(), EventKind::BufferingUpdate);
        assert_eq!(
            PlayerEvent::Started.buffering_percent(),
            Some(LOADING_COMPLETE_PERCENT)
        );
        assert_eq!(PlayerEvent::Prepared.buffering_percent(), None);
    }

    #[test]
    fn every_event_kind_is_listed() {
        assert_eq!(EventKind::all().len(), 8);
    }
}
