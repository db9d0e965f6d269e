use std::path::Path;

use super::{
    ObjectId, SceneDescription, SceneHost, Skybox, SkyboxMaterial,
    SlideAttributes, SECTION_TAG, SLIDE_TAG,
};
use crate::camera::CameraView;
use crate::error::LociError;

/// One object in the reference scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneObject {
    /// Display name.
    pub name: String,
    /// Tags used by discovery.
    pub tags: Vec<String>,
    /// Children in insertion order.
    pub children: Vec<ObjectId>,
    /// Parent object, if any.
    pub parent: Option<ObjectId>,
    /// Camera capability.
    pub camera: Option<CameraView>,
    /// Slide attributes capability.
    pub attributes: Option<SlideAttributes>,
    /// Skybox capability.
    pub skybox: Option<Skybox>,
}

impl SceneObject {
    /// Whether the object carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// In-memory reference scene: objects in a flat arena, addressed by
/// [`ObjectId`] (the arena index).
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a scene from a TOML description file.
    pub fn load(path: &Path) -> Result<Self, LociError> {
        let content = std::fs::read_to_string(path)?;
        SceneDescription::from_toml_str(&content)?.into_scene()
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object with the given tags, appended to `parent`'s children.
    ///
    /// An unknown `parent` leaves the object at the root.
    pub fn spawn(
        &mut self,
        name: &str,
        tags: &[&str],
        parent: Option<ObjectId>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        let parent = parent.filter(|p| p.index() < self.objects.len());
        if let Some(p) = parent {
            self.objects[p.index()].children.push(id);
        }
        self.objects.push(SceneObject {
            name: name.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            parent,
            ..SceneObject::default()
        });
        id
    }

    /// Add a root object tagged as a section.
    pub fn add_section(&mut self, name: &str) -> ObjectId {
        self.spawn(name, &[SECTION_TAG], None)
    }

    /// Add an object tagged as a slide with a camera capability.
    pub fn add_slide(
        &mut self,
        parent: Option<ObjectId>,
        name: &str,
        camera: CameraView,
    ) -> ObjectId {
        let id = self.spawn(name, &[SLIDE_TAG], parent);
        self.objects[id.index()].camera = Some(camera);
        id
    }

    /// Attach or replace slide attributes. Returns `false` for unknown ids.
    pub fn set_attributes(
        &mut self,
        id: ObjectId,
        attributes: SlideAttributes,
    ) -> bool {
        self.object_mut(id)
            .map(|object| object.attributes = Some(attributes))
            .is_some()
    }

    /// Attach a skybox capability pointing at `material`. Returns `false`
    /// for unknown ids.
    pub fn set_skybox(&mut self, id: ObjectId, material: SkyboxMaterial) -> bool {
        self.object_mut(id)
            .map(|object| object.skybox = Some(Skybox::with_material(material)))
            .is_some()
    }

    /// Remove and return the camera capability of `id`.
    pub fn remove_camera(&mut self, id: ObjectId) -> Option<CameraView> {
        self.object_mut(id).and_then(|object| object.camera.take())
    }

    /// Object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.index())
    }

    /// Mutable object by id.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.index())
    }

    /// First object named `name`, in arena order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|object| object.name == name)
            .map(|index| ObjectId(index as u32))
    }
}

impl SceneHost for Scene {
    fn find_tagged(&self, tag: &str) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.has_tag(tag))
            .map(|(index, _)| ObjectId(index as u32))
            .collect()
    }

    fn has_tag(&self, id: ObjectId, tag: &str) -> bool {
        self.object(id).is_some_and(|object| object.has_tag(tag))
    }

    fn name(&self, id: ObjectId) -> Option<&str> {
        self.object(id).map(|object| object.name.as_str())
    }

    fn children(&self, id: ObjectId) -> Vec<ObjectId> {
        self.object(id)
            .map(|object| object.children.clone())
            .unwrap_or_default()
    }

    fn camera(&self, id: ObjectId) -> Option<&CameraView> {
        self.object(id).and_then(|object| object.camera.as_ref())
    }

    fn camera_mut(&mut self, id: ObjectId) -> Option<&mut CameraView> {
        self.object_mut(id).and_then(|object| object.camera.as_mut())
    }

    fn attributes(&self, id: ObjectId) -> Option<&SlideAttributes> {
        self.object(id).and_then(|object| object.attributes.as_ref())
    }

    fn skybox(&self, id: ObjectId) -> Option<&Skybox> {
        self.object(id).and_then(|object| object.skybox.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_links_parent_and_children() {
        let mut scene = Scene::new();
        let section = scene.add_section("Intro");
        let a = scene.add_slide(Some(section), "A", CameraView::default());
        let b = scene.add_slide(Some(section), "B", CameraView::default());

        assert_eq!(scene.children(section), vec![a, b]);
        assert_eq!(scene.object(a).and_then(|o| o.parent), Some(section));
        assert!(scene.has_tag(a, SLIDE_TAG));
        assert!(!scene.has_tag(a, SECTION_TAG));
        assert_eq!(scene.name(b), Some("B"));
    }

    #[test]
    fn find_tagged_uses_arena_order() {
        let mut scene = Scene::new();
        let loose = scene.add_slide(None, "Loose", CameraView::default());
        let section = scene.add_section("S");
        let nested = scene.add_slide(Some(section), "N", CameraView::default());

        assert_eq!(scene.find_tagged(SLIDE_TAG), vec![loose, nested]);
        assert_eq!(scene.find_tagged(SECTION_TAG), vec![section]);
        assert!(scene.find_tagged("Missing").is_empty());
    }

    #[test]
    fn capabilities_are_optional() {
        let mut scene = Scene::new();
        let slide = scene.add_slide(None, "A", CameraView::default());
        assert!(scene.attributes(slide).is_none());
        assert!(scene.skybox(slide).is_none());

        assert!(scene.set_attributes(slide, SlideAttributes::with_transition_time(2.0)));
        assert!(scene.set_skybox(slide, SkyboxMaterial::new("night")));
        assert_eq!(
            scene.attributes(slide).map(|a| a.transition_time),
            Some(2.0)
        );
        assert_eq!(
            scene
                .skybox(slide)
                .and_then(|s| s.material.as_ref())
                .map(SkyboxMaterial::name),
            Some("night")
        );

        assert!(scene.remove_camera(slide).is_some());
        assert!(scene.camera(slide).is_none());
        assert!(scene.camera_mut(slide).is_none());
    }

    #[test]
    fn unknown_ids_are_handled() {
        let mut scene = Scene::new();
        let ghost = ObjectId(42);
        assert!(scene.name(ghost).is_none());
        assert!(scene.children(ghost).is_empty());
        assert!(!scene.set_attributes(ghost, SlideAttributes::default()));
        assert!(scene.remove_camera(ghost).is_none());

        let orphan = scene.spawn("Orphan", &[], Some(ghost));
        assert_eq!(scene.object(orphan).and_then(|o| o.parent), None);
        assert_eq!(scene.find_by_name("Orphan"), Some(orphan));
    }
}
