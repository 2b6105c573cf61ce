// SPDX-License-Identifier: MPL-2.0
//! `player_view` is the view layer of a video player.
//!
//! It sits between a host platform and an opaque native media engine:
//! it keeps the render surface alive across platform recreation, fits the
//! video into its container, moves the container in and out of fullscreen,
//! turns touch input into a pan/zoom/rotate transform and delivers engine
//! events to the UI thread in order, with nothing delivered after release.
//!
//! The engine and the platform are reached only through the traits in
//! [`application::port`], so the whole crate runs against fakes in tests.

#![doc(html_root_url = "https://docs.rs/player_view/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
