use serde::{Deserialize, Serialize};

use crate::error::{CameraError, CameraResult};

/// Canvas-to-screen mapping: translation of the canvas origin in screen pixels
/// plus a uniform scale.
///
/// A world point `w` lands on screen at `origin + (x, y) + w * scale`, where
/// `origin` is the top-left screen offset of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Same as [`Transform::new`] but rejects non-finite components and
    /// non-positive scale.
    pub fn new_checked(x: f64, y: f64, scale: f64) -> CameraResult<Self> {
        let transform = Self::new(x, y, scale);
        if !transform.is_valid() {
            return Err(CameraError::InvalidTransform { x, y, scale });
        }
        Ok(transform)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }

    /// Maps a screen coordinate to world space.
    #[must_use]
    pub fn screen_to_world(self, screen: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
        (
            (screen.0 - origin.0 - self.x) / self.scale,
            (screen.1 - origin.1 - self.y) / self.scale,
        )
    }

    /// Maps a world coordinate to screen space.
    #[must_use]
    pub fn world_to_screen(self, world: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
        (
            world.0 * self.scale + self.x + origin.0,
            world.1 * self.scale + self.y + origin.1,
        )
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;

    #[test]
    fn screen_world_mapping_is_inverse() {
        let transform = Transform::new(-40.0, 25.0, 1.75);
        let origin = (12.0, 30.0);
        let world = transform.screen_to_world((300.0, 180.0), origin);
        let screen = transform.world_to_screen(world, origin);
        assert!((screen.0 - 300.0).abs() <= 1e-9);
        assert!((screen.1 - 180.0).abs() <= 1e-9);
    }

    #[test]
    fn checked_constructor_rejects_degenerate_scale() {
        assert!(Transform::new_checked(0.0, 0.0, 0.0).is_err());
        assert!(Transform::new_checked(f64::NAN, 0.0, 1.0).is_err());
        assert!(Transform::new_checked(1.0, 2.0, 0.5).is_ok());
    }
}
