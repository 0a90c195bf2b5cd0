//! View transform application with save/restore discipline

use std::ops::{Deref, DerefMut};

use freq_charts_shared::ViewState;

use crate::surface::Surface;

/// Restores the surface transform exactly once when dropped.
///
/// The guard derefs to the surface, so callers keep drawing through it in
/// chart space; once it drops, drawing happens in screen space again for
/// fixed overlays such as titles and zoom badges.
pub struct ViewTransformGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

/// Apply translate-then-scale for the given view.
pub fn apply_view_transform<'a, S: Surface + ?Sized>(
    surface: &'a mut S,
    view: &ViewState,
) -> ViewTransformGuard<'a, S> {
    surface.save();
    surface.translate(view.offset_x, view.offset_y);
    surface.scale(view.zoom_level, view.zoom_level);
    ViewTransformGuard { surface }
}

impl<S: Surface + ?Sized> Deref for ViewTransformGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ViewTransformGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ViewTransformGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
