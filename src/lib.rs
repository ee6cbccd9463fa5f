//! canvas-camera: pan-and-zoom camera controller for 2D canvas surfaces.
//!
//! The crate turns trackpad scrolls, precision-wheel zooms, pinch gestures and
//! accelerator shortcuts into updates of a host-owned [`core::Transform`],
//! keeping the point under the pointer fixed while zooming and continuing pans
//! with frame-driven inertia.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{CameraConfig, CameraController, CameraHost};
pub use error::{CameraError, CameraResult};
