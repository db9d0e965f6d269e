use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::{SECTION_TAG, SLIDE_TAG};

/// Tags used to find slides and sections in the host scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Discovery", inline)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Tag carried by slide objects.
    #[schemars(skip)]
    pub slide_tag: String,
    /// Tag carried by section objects.
    #[schemars(skip)]
    pub section_tag: String,
    /// Disable every discovered slide camera during playback so only the
    /// live camera renders.
    #[schemars(title = "Disable Slide Cameras")]
    pub disable_slide_cameras: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            slide_tag: SLIDE_TAG.into(),
            section_tag: SECTION_TAG.into(),
            disable_slide_cameras: true,
        }
    }
}
