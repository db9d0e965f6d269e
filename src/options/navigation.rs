use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Touch navigation parameters.
pub struct NavigationOptions {
    /// Minimum horizontal swipe distance in pixels before a gesture counts
    /// as a slide change.
    #[schemars(title = "Swipe Threshold", range(min = 10.0, max = 400.0), extend("step" = 5.0))]
    pub swipe_threshold: f32,
    /// Whether touch swipes navigate at all.
    #[schemars(title = "Enable Swipes")]
    pub swipes_enabled: bool,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            swipes_enabled: true,
        }
    }
}
