// SPDX-License-Identifier: MPL-2.0
//! Application layer - Boundaries to the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The native engine and the platform shell implement the ports
//! - The view layer (`ui`) only talks to them through these traits, which
//!   lets the whole core run against fakes in tests
//!
//! # Example
//!
//! ```ignore
//! use player_view::application::port::MediaEngine;
//!
//! struct NativeEngine { /* ... */ }
//! impl MediaEngine for NativeEngine { /* ... */ }
//! ```

pub mod port;
