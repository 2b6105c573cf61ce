// SPDX-License-Identifier: MPL-2.0
//! Platform port definitions.
//!
//! The view never touches windowing APIs directly. Everything it needs from
//! the host (surface reuse, system bars, orientation, reparenting the render
//! container) goes through these two traits.

use crate::domain::layout::{ContainerParent, Orientation, ScreenMetrics};
use crate::domain::video::SurfaceId;

/// Widget-side control over renderable surfaces.
pub trait SurfaceHost {
    /// Makes the widget present into a previously retained surface instead
    /// of the one the platform just created.
    fn reuse_surface(&mut self, surface: SurfaceId);

    /// Frees the platform resources of a retained surface.
    fn release_surface(&mut self, surface: SurfaceId);
}

/// Host window chrome and hierarchy.
pub trait WindowHost {
    /// Locates the window's top-level decor view.
    /// Returns false if the decor cannot be resolved from the current context.
    fn resolve_decor(&mut self) -> bool;

    /// Shows or hides the status and navigation bars.
    fn set_system_bars_visible(&mut self, visible: bool);

    fn lock_orientation(&mut self, orientation: Orientation);

    /// Detaches the render container from `from` and attaches it to `to`
    /// as one step; the container is never observable without a parent.
    fn move_container(&mut self, from: ContainerParent, to: ContainerParent);

    fn screen_metrics(&self) -> ScreenMetrics;

    fn set_keep_screen_on(&mut self, keep_on: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakePlatform, PlatformCall};

    fn _assert_object_safe(_: &dyn SurfaceHost, _: &dyn WindowHost) {}

    #[test]
    fn fake_platform_records_moves() {
        let mut platform = FakePlatform::default();
        let host: &mut dyn WindowHost = &mut platform;
        host.move_container(ContainerParent::InLayout, ContainerParent::Decor);
        assert_eq!(
            platform.calls(),
            &[PlatformCall::MoveContainer(
                ContainerParent::InLayout,
                ContainerParent::Decor
            )]
        );
        assert_eq!(platform.container_parent(), ContainerParent::Decor);
    }
}
