use serde::{Deserialize, Serialize};

use crate::core::Transform;
use crate::error::{CameraError, CameraResult};

/// Rectangle constraining the translation part of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn new_checked(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> CameraResult<Self> {
        if !min_x.is_finite() || !min_y.is_finite() || !max_x.is_finite() || !max_y.is_finite() {
            return Err(CameraError::InvalidBounds(
                "bounds edges must be finite".to_owned(),
            ));
        }
        if min_x > max_x || min_y > max_y {
            return Err(CameraError::InvalidBounds(format!(
                "bounds must satisfy min <= max (x: {min_x}..{max_x}, y: {min_y}..{max_y})"
            )));
        }
        Ok(Self::new(min_x, min_y, max_x, max_y))
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Clamps a translation into the rectangle, each axis independently.
    ///
    /// Never panics: an inverted rectangle resolves to its max edge.
    #[must_use]
    pub fn clamp_translation(self, x: f64, y: f64) -> (f64, f64) {
        (
            x.max(self.min_x).min(self.max_x),
            y.max(self.min_y).min(self.max_y),
        )
    }
}

/// Result of running a candidate transform through the bounds clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedTransform {
    pub transform: Transform,
    pub clamped_x: bool,
    pub clamped_y: bool,
}

/// Applies optional bounds to a candidate transform. Scale is never touched.
#[must_use]
pub fn clamp_transform(candidate: Transform, bounds: Option<Bounds>) -> ClampedTransform {
    let Some(bounds) = bounds else {
        return ClampedTransform {
            transform: candidate,
            clamped_x: false,
            clamped_y: false,
        };
    };

    let (x, y) = bounds.clamp_translation(candidate.x, candidate.y);
    ClampedTransform {
        transform: Transform::new(x, y, candidate.scale),
        clamped_x: x != candidate.x,
        clamped_y: y != candidate.y,
    }
}
