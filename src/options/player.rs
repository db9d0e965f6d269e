use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Player", inline)]
#[serde(default)]
/// Presentation player behavior.
pub struct PlayerOptions {
    /// While authoring, always jump the live camera onto the selected slide
    /// instead of easing toward it.
    #[schemars(title = "Snap While Authoring")]
    pub snap_while_authoring: bool,
    /// Distance/angle tolerance under which a smoothed transition counts as
    /// arrived.
    #[schemars(title = "Arrival Tolerance", range(min = 0.0001, max = 0.1), extend("step" = 0.0001))]
    pub arrival_epsilon: f32,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            snap_while_authoring: true,
            arrival_epsilon: 1e-3,
        }
    }
}
