// SPDX-License-Identifier: MPL-2.0
//! Plumbing between the native media engine and the view.
//!
//! The engine runs its own threads and reports back through an
//! [`EventPoster`]; the view drains the [`EventBridge`] on the UI thread.
//! Capture files and click debouncing live here as well since both sit
//! directly on top of engine commands.

pub mod bridge;
pub mod capture;
pub mod debounce;
pub mod events;
pub mod liveness;

pub use bridge::{BridgeStats, EventBridge, EventPoster, Listener};
pub use capture::CaptureKind;
pub use debounce::Debouncer;
pub use events::{codes, Decoded, EventKind, PlayerEvent, LOADING_COMPLETE_PERCENT};
pub use liveness::LivenessToken;
