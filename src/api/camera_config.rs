use serde::{Deserialize, Serialize};

use crate::error::{CameraError, CameraResult};
use crate::interaction::{PanInertiaConfig, WheelResolutionPolicy, ZoomConfig};

use super::InputBehavior;

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can keep camera tuning next to the rest of their
/// settings; every field falls back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub inertia: PanInertiaConfig,
    /// Intensity of one accelerator `+`/`-` keypress.
    #[serde(default = "default_keyboard_zoom_step")]
    pub keyboard_zoom_step: f64,
    #[serde(default)]
    pub wheel_resolution: WheelResolutionPolicy,
    #[serde(default)]
    pub input_behavior: InputBehavior,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            inertia: PanInertiaConfig::default(),
            keyboard_zoom_step: default_keyboard_zoom_step(),
            wheel_resolution: WheelResolutionPolicy::default(),
            input_behavior: InputBehavior::default(),
        }
    }
}

impl CameraConfig {
    /// Sets the allowed scale range.
    #[must_use]
    pub fn with_scale_range(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.zoom.min_scale = min_scale;
        self.zoom.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn with_zoom_config(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_inertia_config(mut self, inertia: PanInertiaConfig) -> Self {
        self.inertia = inertia;
        self
    }

    #[must_use]
    pub fn with_keyboard_zoom_step(mut self, step: f64) -> Self {
        self.keyboard_zoom_step = step;
        self
    }

    #[must_use]
    pub fn with_wheel_resolution(mut self, policy: WheelResolutionPolicy) -> Self {
        self.wheel_resolution = policy;
        self
    }

    #[must_use]
    pub fn with_input_behavior(mut self, behavior: InputBehavior) -> Self {
        self.input_behavior = behavior;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> CameraResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| CameraError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. The result is not validated.
    pub fn from_json_str(input: &str) -> CameraResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CameraError::Serialization(format!("failed to parse config: {e}")))
    }
}

fn default_keyboard_zoom_step() -> f64 {
    80.0
}
