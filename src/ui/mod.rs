// SPDX-License-Identifier: MPL-2.0
//! View-layer components and state management.
//!
//! Every component here runs on the UI thread. Engine and platform access
//! goes through the ports in [`crate::application::port`].
//!
//! # Components
//!
//! - [`player_view`] - The composed player view the host embeds
//! - [`surface`] - Retains the render surface across platform recreation
//! - [`layout_fit`] - Maps video size and fit mode to surface/container sizes
//! - [`fullscreen`] - Moves the render container between layout and decor
//! - [`controller`] - Transport controls state machine and notices
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Gesture transform state (pan, pinch zoom, rotation)

pub mod controller;
pub mod fullscreen;
pub mod layout_fit;
pub mod player_view;
pub mod state;
pub mod surface;

pub use controller::{Controller, ControllerState, ControlsState, Notice};
pub use fullscreen::FullscreenStateMachine;
pub use layout_fit::{compute_layout, LayoutFitEngine};
pub use player_view::PlayerView;
pub use surface::{SurfaceAction, SurfaceLifecycle};
