use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Transform, clamp_transform};

/// Tuning for the pointer-anchored zoom solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Sensitivity at scale `1.0`; shrinks with `sqrt(scale)` above `0.25`.
    pub base_sensitivity: f64,
    /// EMA factor applied to the target scale while a gesture is active.
    pub smoothing: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.25,
            max_scale: 3.0,
            base_sensitivity: 0.005,
            smoothing: 0.05,
        }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn clamp_scale(self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Zoom sensitivity adapted to the current scale.
#[must_use]
pub fn adaptive_sensitivity(scale: f64, base_sensitivity: f64) -> f64 {
    base_sensitivity / scale.sqrt().max(0.5)
}

/// Unclamped scale requested by `intensity` from `scale`.
///
/// Equal intensities produce equal scale ratios.
#[must_use]
pub fn raw_target_scale(scale: f64, intensity: f64, base_sensitivity: f64) -> f64 {
    scale * (-intensity * adaptive_sensitivity(scale, base_sensitivity)).exp()
}

/// Inverse of [`raw_target_scale`]: the intensity that turns `scale` into
/// `scale * ratio`.
///
/// Returns `None` for non-finite or non-positive ratios.
#[must_use]
pub fn intensity_for_scale_ratio(ratio: f64, scale: f64, base_sensitivity: f64) -> Option<f64> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }
    let intensity = -ratio.ln() / adaptive_sensitivity(scale, base_sensitivity);
    intensity.is_finite().then_some(intensity)
}

/// Pointer-anchored zoom with gesture-scoped target smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomSolver {
    config: ZoomConfig,
    target_scale: Option<f64>,
}

impl ZoomSolver {
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            target_scale: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Smoothed target scale; `Some` while a zoom gesture is active.
    #[must_use]
    pub fn target_scale(&self) -> Option<f64> {
        self.target_scale
    }

    /// Seeds the target from the current scale at the start of a gesture.
    pub fn begin_gesture(&mut self, current_scale: f64) {
        self.target_scale = Some(self.config.clamp_scale(current_scale));
    }

    pub fn end_gesture(&mut self) {
        self.target_scale = None;
    }

    /// Computes the transform that zooms by `intensity` while keeping the world
    /// point under `anchor` on the same screen pixel.
    ///
    /// Part of a continuous gesture: the first sample sets the target directly,
    /// later samples are blended into it. A target that no longer matches
    /// `current.scale` (the host replaced the transform) is re-seeded first.
    ///
    /// `origin` is the top-left screen offset of the surface. Returns `None`
    /// when there is nothing to commit: zero or non-finite intensity, or a
    /// degenerate `current` transform.
    pub fn zoom_at(
        &mut self,
        current: Transform,
        intensity: f64,
        anchor: (f64, f64),
        origin: (f64, f64),
        bounds: Option<Bounds>,
    ) -> Option<Transform> {
        let clamped = self.clamped_request(current, intensity)?;
        let next_scale = match self.synced_target(current.scale) {
            Some(target) => target + self.config.smoothing * (clamped - target),
            None => clamped,
        };
        self.target_scale = Some(next_scale);
        Some(anchored(current, next_scale, anchor, origin, bounds))
    }

    /// One discrete zoom step (keyboard shortcut): applies the full clamped
    /// scale without smoothing.
    ///
    /// An active gesture target follows the new scale; otherwise no target is
    /// created.
    pub fn zoom_step(
        &mut self,
        current: Transform,
        intensity: f64,
        anchor: (f64, f64),
        origin: (f64, f64),
        bounds: Option<Bounds>,
    ) -> Option<Transform> {
        let next_scale = self.clamped_request(current, intensity)?;
        if self.target_scale.is_some() {
            self.target_scale = Some(next_scale);
        }
        Some(anchored(current, next_scale, anchor, origin, bounds))
    }

    fn clamped_request(&self, current: Transform, intensity: f64) -> Option<f64> {
        if intensity == 0.0 || !intensity.is_finite() || !current.is_valid() {
            return None;
        }
        let raw = raw_target_scale(current.scale, intensity, self.config.base_sensitivity);
        Some(self.config.clamp_scale(raw))
    }

    fn synced_target(&self, current_scale: f64) -> Option<f64> {
        let target = self.target_scale?;
        let tolerance = TARGET_MATCH_TOLERANCE * current_scale.abs().max(1.0);
        if (target - current_scale).abs() <= tolerance {
            Some(target)
        } else {
            Some(self.config.clamp_scale(current_scale))
        }
    }
}

/// Relative slack when matching the stored target against the committed scale.
const TARGET_MATCH_TOLERANCE: f64 = 1e-9;

fn anchored(
    current: Transform,
    next_scale: f64,
    anchor: (f64, f64),
    origin: (f64, f64),
    bounds: Option<Bounds>,
) -> Transform {
    let world = current.screen_to_world(anchor, origin);
    let candidate = Transform::new(
        anchor.0 - world.0 * next_scale - origin.0,
        anchor.1 - world.1 * next_scale - origin.1,
        next_scale,
    );
    clamp_transform(candidate, bounds).transform
}
