//! Public controller surface: configuration, host seams and the
//! [`CameraController`] that wires them together.

mod behavior;
mod camera_config;
mod camera_core;
mod config_validation;
mod controller;
mod frame_scheduler;
mod host;
mod manual_host;

pub use behavior::InputBehavior;
pub use camera_config::CameraConfig;
pub use controller::{CameraController, CameraHost};
pub use host::{
    FrameCallback, FrameClock, FrameRequestId, InputListener, InputSurface, KeyListener,
    KeyboardScope, ListenerId, TransformAccess, TransformAccessors,
};
pub use manual_host::{ManualHost, SharedTransform};
