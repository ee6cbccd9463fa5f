use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Transform, clamp_transform};

/// Tuning for trackpad pan inertia, expressed per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanInertiaConfig {
    /// EMA factor pulling velocity toward each incoming pan delta.
    pub smoothing: f64,
    /// Multiplicative velocity decay per frame.
    pub friction: f64,
    /// Inertia stops once both velocity components drop below this magnitude.
    pub rest_velocity: f64,
}

impl Default for PanInertiaConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.35,
            friction: 0.92,
            rest_velocity: 0.1,
        }
    }
}

/// Residual pan motion in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub const ZERO: Self = Self { vx: 0.0, vy: 0.0 };

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanInertia {
    config: PanInertiaConfig,
    velocity: Velocity,
}

impl PanInertia {
    #[must_use]
    pub fn new(config: PanInertiaConfig) -> Self {
        Self {
            config,
            velocity: Velocity::ZERO,
        }
    }

    #[must_use]
    pub fn config(&self) -> PanInertiaConfig {
        self.config
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity.vx.abs() < self.config.rest_velocity
            && self.velocity.vy.abs() < self.config.rest_velocity
    }

    /// Folds a classified pan delta into the velocity with exponential smoothing.
    pub fn integrate(&mut self, dx: f64, dy: f64) {
        let alpha = self.config.smoothing;
        self.velocity.vx += alpha * (dx - self.velocity.vx);
        self.velocity.vy += alpha * (dy - self.velocity.vy);
    }

    /// Translates `current` by the velocity and clamps to `bounds`.
    ///
    /// An axis pinned by the clamp loses its residual velocity.
    pub fn apply(&mut self, current: Transform, bounds: Option<Bounds>) -> Transform {
        let candidate = current.translated(self.velocity.vx, self.velocity.vy);
        let clamped = clamp_transform(candidate, bounds);
        if clamped.clamped_x {
            self.velocity.vx = 0.0;
        }
        if clamped.clamped_y {
            self.velocity.vy = 0.0;
        }
        clamped.transform
    }

    /// Advances one frame: applies velocity, then decays it by friction.
    ///
    /// Returns `None` when already at rest.
    pub fn step(&mut self, current: Transform, bounds: Option<Bounds>) -> Option<Transform> {
        if self.is_at_rest() {
            self.stop();
            return None;
        }

        let next = self.apply(current, bounds);
        self.velocity.vx *= self.config.friction;
        self.velocity.vy *= self.config.friction;
        if self.is_at_rest() {
            self.stop();
        }
        Some(next)
    }

    pub fn stop(&mut self) {
        self.velocity = Velocity::ZERO;
    }
}
