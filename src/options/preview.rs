use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Preview", inline)]
#[serde(default)]
/// Editor preview: scene-view sync and slide frustum gizmos.
pub struct PreviewOptions {
    /// Mirror the live camera into the editor viewport on slide change.
    #[schemars(title = "Sync Scene View")]
    pub sync_scene_view: bool,
    /// Draw every slide camera's frustum while authoring.
    #[schemars(title = "Show Frustums")]
    pub show_frustums: bool,
    /// Far distance at which frustum gizmos are cut off.
    #[schemars(title = "Gizmo Depth", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub gizmo_max_depth: f32,
    /// Line color of non-selected slide frustums (RGBA).
    #[schemars(skip)]
    pub frustum_color: [f32; 4],
    /// Line color of the selected slide's frustum (RGBA).
    #[schemars(skip)]
    pub current_color: [f32; 4],
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            sync_scene_view: true,
            show_frustums: true,
            gizmo_max_depth: 3.0,
            frustum_color: [0.8, 0.8, 0.8, 0.6],
            current_color: [1.0, 0.75, 0.1, 1.0],
        }
    }
}
