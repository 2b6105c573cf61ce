// SPDX-License-Identifier: MPL-2.0
//! Surface lifecycle management.
//!
//! The platform creates and destroys the renderable surface on its own
//! schedule. The first valid surface is retained and bound to the engine;
//! every later "surface available" callback for the same widget makes the
//! widget reuse the retained surface instead, so the engine sees exactly one
//! bind and never renders into a torn-down target.

use crate::application::port::{MediaEngine, SurfaceHost};
use crate::domain::video::{SurfaceHandle, SurfaceId};
use crate::error::SurfaceError;

/// Outcome of a "surface available" callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    /// The surface was retained and handed to the engine.
    Bound(SurfaceId),
    /// A surface was already retained; the widget was told to reuse it.
    Reused(SurfaceId),
    /// Nothing was bound; waiting for the next valid surface.
    Deferred(SurfaceError),
}

#[derive(Debug, Default)]
pub struct SurfaceLifecycle {
    retained: Option<SurfaceHandle>,
    bind_count: u32,
    released: bool,
}

impl SurfaceLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface currently retained for the engine, if any.
    #[must_use]
    pub fn retained(&self) -> Option<SurfaceHandle> {
        self.retained
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.retained.is_some()
    }

    /// Number of bind commands sent to the engine so far.
    #[must_use]
    pub fn bind_count(&self) -> u32 {
        self.bind_count
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Handles the platform reporting a new surface instance.
    pub fn on_surface_available<E, H>(
        &mut self,
        surface: SurfaceHandle,
        engine: &mut E,
        host: &mut H,
    ) -> SurfaceAction
    where
        E: MediaEngine + ?Sized,
        H: SurfaceHost + ?Sized,
    {
        if self.released {
            tracing::warn!(surface = surface.id().value(), "surface reported after release");
            return SurfaceAction::Deferred(SurfaceError::Released);
        }

        if let Some(retained) = self.retained {
            tracing::debug!(
                retained = retained.id().value(),
                offered = surface.id().value(),
                "reusing retained surface, engine bind suppressed"
            );
            host.reuse_surface(retained.id());
            return SurfaceAction::Reused(retained.id());
        }

        if !surface.is_valid() {
            let err = SurfaceError::Invalid(surface.id());
            tracing::warn!(%err, "deferring surface bind");
            return SurfaceAction::Deferred(err);
        }

        self.retained = Some(surface);
        self.bind_count += 1;
        engine.bind_surface(surface);
        tracing::info!(
            surface = surface.id().value(),
            width = surface.width(),
            height = surface.height(),
            "surface bound"
        );
        SurfaceAction::Bound(surface.id())
    }

    /// Forwards a size change of the bound surface to the engine.
    ///
    /// Returns false if no surface is bound, in which case nothing is sent.
    pub fn on_size_changed<E>(&mut self, width: u32, height: u32, engine: &mut E) -> bool
    where
        E: MediaEngine + ?Sized,
    {
        let Some(retained) = self.retained.as_mut() else {
            return false;
        };
        *retained = SurfaceHandle::new(retained.id(), width, height);
        engine.notify_surface_resized(width, height);
        true
    }

    /// Handles the platform tearing a surface down.
    ///
    /// No unbind is sent. Always returns false so the platform keeps the
    /// underlying resources alive for a later reuse.
    pub fn on_destroyed(&mut self, surface: SurfaceId) -> bool {
        tracing::debug!(
            surface = surface.value(),
            retained = self.retained.map(|s| s.id().value()),
            "surface destroyed by platform"
        );
        false
    }

    /// Releases the retained surface. Idempotent.
    pub fn release<H>(&mut self, host: &mut H)
    where
        H: SurfaceHost + ?Sized,
    {
        self.released = true;
        if let Some(retained) = self.retained.take() {
            host.release_surface(retained.id());
            tracing::debug!(surface = retained.id().value(), "retained surface released");
        }
    }
}
