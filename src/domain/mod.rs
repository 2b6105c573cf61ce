// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects shared by the
//! view, the layout engine and the engine port. It has no dependencies on
//! external crates (except `std`) so every rule stays unit-testable.
//!
//! # Modules
//!
//! - [`layout`]: Fit policy and layout types ([`FitMode`](layout::FitMode),
//!   [`LayoutResult`](layout::LayoutResult), [`ScreenMetrics`](layout::ScreenMetrics))
//! - [`video`]: Media-engine facing types ([`VideoSize`](video::VideoSize),
//!   [`DataSource`](video::DataSource), [`VolumePercent`](video::VolumePercent))

pub mod layout;
pub mod video;
