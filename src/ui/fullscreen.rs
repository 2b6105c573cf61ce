// SPDX-License-Identifier: MPL-2.0
//! Fullscreen state machine.
//!
//! Entering fullscreen hides the system bars, locks landscape and moves the
//! render container from the player widget to the window decor. Exiting
//! mirrors every step. The container is moved through a single
//! [`WindowHost::move_container`] call so it always has exactly one parent.

use crate::application::port::WindowHost;
use crate::domain::layout::{ContainerParent, Orientation, ScreenMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenStateMachine {
    mode: ScreenMode,
    parent: ContainerParent,
}

impl FullscreenStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.mode.is_fullscreen()
    }

    /// Parent currently holding the render container.
    #[must_use]
    pub fn container_parent(&self) -> ContainerParent {
        self.parent
    }

    /// Returns true if the transition happened. Already being fullscreen or
    /// an unresolvable decor view leaves everything untouched.
    pub fn enter<W>(&mut self, host: &mut W) -> bool
    where
        W: WindowHost + ?Sized,
    {
        if self.is_fullscreen() {
            tracing::debug!("already fullscreen");
            return false;
        }
        if !host.resolve_decor() {
            tracing::warn!("cannot enter fullscreen: decor view unavailable");
            return false;
        }

        host.set_system_bars_visible(false);
        host.lock_orientation(Orientation::Landscape);
        host.move_container(ContainerParent::InLayout, ContainerParent::Decor);
        self.parent = ContainerParent::Decor;
        self.mode = ScreenMode::Fullscreen;
        tracing::info!("entered fullscreen");
        true
    }

    /// Returns true if the transition back to the inline layout happened.
    pub fn exit<W>(&mut self, host: &mut W) -> bool
    where
        W: WindowHost + ?Sized,
    {
        if !self.is_fullscreen() {
            tracing::debug!("not fullscreen");
            return false;
        }
        if !host.resolve_decor() {
            tracing::warn!("cannot exit fullscreen: decor view unavailable");
            return false;
        }

        host.set_system_bars_visible(true);
        host.lock_orientation(Orientation::Portrait);
        host.move_container(ContainerParent::Decor, ContainerParent::InLayout);
        self.parent = ContainerParent::InLayout;
        self.mode = ScreenMode::Normal;
        tracing::info!("exited fullscreen");
        true
    }

    /// Toggles between the two modes.
    pub fn switch_screen<W>(&mut self, host: &mut W) -> bool
    where
        W: WindowHost + ?Sized,
    {
        if self.is_fullscreen() {
            self.exit(host)
        } else {
            self.enter(host)
        }
    }
}
