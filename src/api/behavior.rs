use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Host-configurable gates for each input family.
///
/// A disabled family is reported as `EventDisposition::Ignored` so the host
/// can fall back to its native handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBehavior {
    /// Enables trackpad/wheel panning.
    #[serde(default = "default_true")]
    pub wheel_pan: bool,
    /// Enables wheel zoom with the precision modifier held.
    #[serde(default = "default_true")]
    pub wheel_zoom: bool,
    /// Enables discrete pinch-gesture zoom.
    #[serde(default = "default_true")]
    pub pinch_zoom: bool,
    /// Enables accelerator `+`/`-` zoom shortcuts.
    #[serde(default = "default_true")]
    pub keyboard_zoom: bool,
}

impl Default for InputBehavior {
    fn default() -> Self {
        Self {
            wheel_pan: true,
            wheel_zoom: true,
            pinch_zoom: true,
            keyboard_zoom: true,
        }
    }
}

impl InputBehavior {
    /// Every input family disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            wheel_pan: false,
            wheel_zoom: false,
            pinch_zoom: false,
            keyboard_zoom: false,
        }
    }
}
