// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`engine`]: Command and query interface of the native media engine
//! - [`platform`]: Surface ownership and window chrome of the host platform
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget; outcomes arrive later through the
//!   [`EventBridge`](crate::video_player::EventBridge)
//! - Queries answer synchronously
//! - Traits are not `Send`: every call is made from the UI thread

pub mod engine;
pub mod platform;

pub use engine::MediaEngine;
pub use platform::{SurfaceHost, WindowHost};
