use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Projection parameters of the live camera before any slide is applied.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Aspect ratio the slides were composed for. During playback the live
    /// camera's vertical FOV is rescaled once so the horizontal extent
    /// matches this ratio. `None` disables the correction.
    #[schemars(skip)]
    pub design_aspect: Option<f32>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
            design_aspect: Some(16.0 / 9.0),
        }
    }
}
