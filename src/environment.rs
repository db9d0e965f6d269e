//! Render environment collaborator: where slide skyboxes are applied.

use crate::scene::SkyboxMaterial;

/// Sink for global render settings driven by the current slide.
///
/// Writes are last-writer-wins; the player may call `set_skybox` every
/// tick with the same material.
pub trait RenderEnvironment {
    /// Make `material` the active skybox.
    fn set_skybox(&mut self, material: &SkyboxMaterial);
}

/// Reference environment that records the active skybox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientEnvironment {
    skybox: Option<SkyboxMaterial>,
    swap_count: usize,
}

impl AmbientEnvironment {
    /// Environment with no skybox set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active skybox, if any has been set.
    #[must_use]
    pub fn skybox(&self) -> Option<&SkyboxMaterial> {
        self.skybox.as_ref()
    }

    /// Number of times the active skybox actually changed.
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.swap_count
    }
}

impl RenderEnvironment for AmbientEnvironment {
    fn set_skybox(&mut self, material: &SkyboxMaterial) {
        if self.skybox.as_ref() == Some(material) {
            return;
        }
        log::debug!("skybox -> {material}");
        self.skybox = Some(material.clone());
        self.swap_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_changes_count_as_swaps() {
        let mut env = AmbientEnvironment::new();
        assert!(env.skybox().is_none());

        let night = SkyboxMaterial::new("night");
        env.set_skybox(&night);
        env.set_skybox(&night);
        assert_eq!(env.swap_count(), 1);

        env.set_skybox(&SkyboxMaterial::new("dawn"));
        env.set_skybox(&night);
        assert_eq!(env.swap_count(), 3);
        assert_eq!(env.skybox(), Some(&night));
    }
}
