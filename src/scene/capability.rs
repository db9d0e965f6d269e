use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to an object in the host scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Raw index value.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-slide presentation attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideAttributes {
    /// Seconds-scale smoothing constant for arriving at this slide.
    /// Zero means the live camera snaps.
    pub transition_time: f32,
}

impl SlideAttributes {
    /// Attributes with the given transition time (negative values become 0).
    #[must_use]
    pub fn with_transition_time(transition_time: f32) -> Self {
        Self {
            transition_time: transition_time.max(0.0),
        }
    }
}

/// Named handle to a host skybox material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkyboxMaterial(String);

impl SkyboxMaterial {
    /// Wrap a host material name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Host material name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkyboxMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skybox capability: a slide may carry an environment to switch to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skybox {
    /// Material to apply, if any.
    pub material: Option<SkyboxMaterial>,
}

impl Skybox {
    /// Skybox capability pointing at `material`.
    #[must_use]
    pub fn with_material(material: SkyboxMaterial) -> Self {
        Self {
            material: Some(material),
        }
    }
}
