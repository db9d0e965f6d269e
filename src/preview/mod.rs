//! Editor-side preview of the presentation.
//!
//! While authoring, the editor viewport follows the live camera whenever the
//! selected slide changes, and every slide camera is drawn as a frustum
//! gizmo. Both collaborators are traits so the host editor supplies them.

mod gizmo;
mod sync;

pub use gizmo::{FrustumGizmo, GizmoSink, LineVertex};
pub use sync::PreviewSync;

use glam::{Quat, Vec3};

use crate::scene::ObjectId;

/// Editor viewport that mirrors the live camera.
pub trait PreviewSink {
    /// Place the editor view at `pivot` with `rotation`.
    fn set_view(&mut self, pivot: Vec3, rotation: Quat);

    /// Ask the editor to redraw.
    fn request_repaint(&mut self);

    /// Select the slide object in the editor hierarchy.
    fn select(&mut self, _slide: ObjectId) {}
}
