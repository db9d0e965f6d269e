//! TOML description of a reference scene.
//!
//! ```toml
//! [[sections]]
//! name = "01 Intro"
//!
//! [[sections.slides]]
//! name = "Title"
//! position = [0.0, 2.0, 10.0]
//! look_at = [0.0, 0.0, 0.0]
//! transition_time = 1.5
//! skybox = "dawn"
//!
//! [[loose_slides]]
//! name = "Backstage"
//! position = [5.0, 0.0, 0.0]
//! ```

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{ObjectId, Scene, SkyboxMaterial, SlideAttributes};
use crate::camera::{CameraView, Pose};
use crate::error::LociError;

/// A whole scene: sections with their slides, plain groups, and slides
/// outside any section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Section objects, in scene order.
    pub sections: Vec<SectionDescription>,
    /// Untagged grouping objects that loose slides may be parented to.
    pub groups: Vec<GroupDescription>,
    /// Slides declared outside a section block.
    pub loose_slides: Vec<SlideDescription>,
}

/// A section and the slides it owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDescription {
    /// Section name; sections are ordered by it during playback.
    pub name: String,
    /// Child slides in child order.
    pub slides: Vec<SlideDescription>,
}

/// An untagged object used only for hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupDescription {
    /// Group name.
    pub name: String,
}

/// One slide camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideDescription {
    /// Slide name.
    pub name: String,
    /// Name of a section or group to parent a loose slide to.
    pub parent: Option<String>,
    /// Eye position.
    pub position: Vec3,
    /// Explicit orientation `[x, y, z, w]`. Takes precedence over `look_at`.
    pub rotation: Option<Quat>,
    /// Point the camera faces.
    pub look_at: Option<Vec3>,
    /// Up vector used with `look_at`.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Smoothing constant for arriving at this slide; 0 snaps.
    pub transition_time: f32,
    /// Skybox material to switch to on arrival.
    pub skybox: Option<String>,
}

impl Default for SlideDescription {
    fn default() -> Self {
        let camera = CameraView::default();
        Self {
            name: String::new(),
            parent: None,
            position: Vec3::ZERO,
            rotation: None,
            look_at: None,
            up: Vec3::Y,
            fovy: camera.fovy,
            znear: camera.znear,
            zfar: camera.zfar,
            transition_time: 0.0,
            skybox: None,
        }
    }
}

impl SlideDescription {
    /// Pose described by position plus rotation or look-at target.
    #[must_use]
    pub fn pose(&self) -> Pose {
        match (self.rotation, self.look_at) {
            (Some(rotation), _) => {
                Pose::new(self.position, rotation.normalize())
            }
            (None, Some(target)) => {
                Pose::looking_at(self.position, target, self.up)
            }
            (None, None) => Pose::new(self.position, Quat::IDENTITY),
        }
    }

    /// Camera capability for this slide.
    #[must_use]
    pub fn camera(&self) -> CameraView {
        CameraView {
            fovy: self.fovy,
            ..CameraView::at(self.pose())
        }
        .with_clip_planes(self.znear, self.zfar)
    }
}

impl SceneDescription {
    /// Parse a description from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LociError> {
        toml::from_str(content).map_err(|e| LociError::SceneParse(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, LociError> {
        toml::to_string_pretty(self)
            .map_err(|e| LociError::SceneParse(e.to_string()))
    }

    /// Build the reference scene: sections first, then groups, then loose
    /// slides.
    pub fn into_scene(&self) -> Result<Scene, LociError> {
        let mut scene = Scene::new();
        let mut by_name: FxHashMap<&str, ObjectId> = FxHashMap::default();

        for section in &self.sections {
            let section_id = scene.add_section(&section.name);
            let _ = by_name.entry(section.name.as_str()).or_insert(section_id);
            for slide in &section.slides {
                add_described_slide(&mut scene, Some(section_id), slide);
            }
        }

        for group in &self.groups {
            let group_id = scene.spawn(&group.name, &[], None);
            let _ = by_name.entry(group.name.as_str()).or_insert(group_id);
        }

        for slide in &self.loose_slides {
            let parent = match slide.parent.as_deref() {
                Some(name) => Some(
                    by_name
                        .get(name)
                        .copied()
                        .ok_or_else(|| LociError::UnknownParent(name.to_owned()))?,
                ),
                None => None,
            };
            add_described_slide(&mut scene, parent, slide);
        }

        log::debug!(
            "built scene: {} sections, {} objects",
            self.sections.len(),
            scene.len()
        );
        Ok(scene)
    }
}

fn add_described_slide(
    scene: &mut Scene,
    parent: Option<ObjectId>,
    slide: &SlideDescription,
) {
    let id = scene.add_slide(parent, &slide.name, slide.camera());
    if slide.transition_time > 0.0 {
        let _ = scene.set_attributes(
            id,
            SlideAttributes::with_transition_time(slide.transition_time),
        );
    }
    if let Some(material) = &slide.skybox {
        let _ = scene.set_skybox(id, SkyboxMaterial::new(material.as_str()));
    }
}
