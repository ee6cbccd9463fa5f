use serde::{Deserialize, Serialize};

/// Screen-space placement of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceGeometry {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn origin(self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Visual center of the surface in screen coordinates.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0,
        )
    }
}
