// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State mutated only on the UI thread in response to input, kept apart from
//! the view that owns it.

pub mod transform;

pub use transform::{GestureMode, Point, TouchAction, TouchEvent, TouchToggles, TransformState};
