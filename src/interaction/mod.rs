use serde::{Deserialize, Serialize};

pub mod classifier;
pub mod events;
pub mod inertia;
pub mod zoom;

pub use classifier::{
    WHEEL_NOTCH_UNITS, WheelResolutionPolicy, accepts_wheel_resolution, classify_key,
    classify_wheel,
};
pub use events::{
    CameraCommand, EventDisposition, Key, KeyEvent, Modifiers, PinchEvent, SurfaceEvent,
    WheelDeltaMode, WheelEvent,
};
pub use inertia::{PanInertia, PanInertiaConfig, Velocity};
pub use zoom::{
    ZoomConfig, ZoomSolver, adaptive_sensitivity, intensity_for_scale_ratio, raw_target_scale,
};

/// Frame scheduler lifecycle for the inertia tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// Active discrete pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchSession {
    /// Screen-space anchor, fixed at the surface center on `Begin`.
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Transform scale when the gesture began.
    pub start_scale: f64,
}
