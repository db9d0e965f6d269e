//! Host scene interface and the in-memory reference scene.
//!
//! The presenter never owns scene objects. It queries them through
//! [`SceneHost`]: tag lookup, hierarchy, and optional per-object
//! capabilities (camera, slide attributes, skybox). [`Scene`] is a small
//! arena implementation used by the viewer binary and the tests, and can be
//! built from a TOML [`SceneDescription`].

mod capability;
mod description;
mod graph;

pub use capability::{ObjectId, Skybox, SkyboxMaterial, SlideAttributes};
pub use description::{
    GroupDescription, SceneDescription, SectionDescription, SlideDescription,
};
pub use graph::{Scene, SceneObject};

use crate::camera::CameraView;

/// Tag carried by slide objects unless configured otherwise.
pub const SLIDE_TAG: &str = "Slide";
/// Tag carried by section objects unless configured otherwise.
pub const SECTION_TAG: &str = "Section";

/// Query surface the presenter needs from a host scene graph.
///
/// Every capability accessor may return `None`; callers handle absence at
/// each use site.
pub trait SceneHost {
    /// All objects carrying `tag`, in an order that is stable for the
    /// lifetime of the session.
    fn find_tagged(&self, tag: &str) -> Vec<ObjectId>;

    /// Whether `id` carries `tag`.
    fn has_tag(&self, id: ObjectId, tag: &str) -> bool;

    /// Display name of `id`.
    fn name(&self, id: ObjectId) -> Option<&str>;

    /// Direct children of `id` in native child order.
    fn children(&self, id: ObjectId) -> Vec<ObjectId>;

    /// Camera capability of `id`.
    fn camera(&self, id: ObjectId) -> Option<&CameraView>;

    /// Mutable camera capability of `id`.
    fn camera_mut(&mut self, id: ObjectId) -> Option<&mut CameraView>;

    /// Slide attributes capability of `id`.
    fn attributes(&self, id: ObjectId) -> Option<&SlideAttributes>;

    /// Skybox capability of `id`.
    fn skybox(&self, id: ObjectId) -> Option<&Skybox>;
}
