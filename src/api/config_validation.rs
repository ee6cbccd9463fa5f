use crate::error::{CameraError, CameraResult};
use crate::interaction::{PanInertiaConfig, ZoomConfig};

use super::CameraConfig;

pub(super) fn validate_camera_config(config: CameraConfig) -> CameraResult<CameraConfig> {
    validate_zoom_config(config.zoom)?;
    validate_pan_inertia_config(config.inertia)?;
    if !config.keyboard_zoom_step.is_finite() || config.keyboard_zoom_step <= 0.0 {
        return Err(CameraError::InvalidConfig(
            "keyboard_zoom_step must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_zoom_config(config: ZoomConfig) -> CameraResult<ZoomConfig> {
    if !config.min_scale.is_finite() || !config.max_scale.is_finite() {
        return Err(CameraError::InvalidConfig(
            "zoom min_scale/max_scale must be finite".to_owned(),
        ));
    }
    if config.min_scale <= 0.0 || config.min_scale > config.max_scale {
        return Err(CameraError::InvalidConfig(format!(
            "zoom scale range must satisfy 0 < min_scale <= max_scale (got {}..{})",
            config.min_scale, config.max_scale
        )));
    }
    if !config.base_sensitivity.is_finite() || config.base_sensitivity <= 0.0 {
        return Err(CameraError::InvalidConfig(
            "zoom base_sensitivity must be finite and > 0".to_owned(),
        ));
    }
    if !config.smoothing.is_finite() || config.smoothing <= 0.0 || config.smoothing > 1.0 {
        return Err(CameraError::InvalidConfig(
            "zoom smoothing must be finite and in (0, 1]".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_pan_inertia_config(
    config: PanInertiaConfig,
) -> CameraResult<PanInertiaConfig> {
    if !config.smoothing.is_finite() || config.smoothing <= 0.0 || config.smoothing > 1.0 {
        return Err(CameraError::InvalidConfig(
            "pan inertia smoothing must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !config.friction.is_finite() || config.friction <= 0.0 || config.friction >= 1.0 {
        return Err(CameraError::InvalidConfig(
            "pan inertia friction must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.rest_velocity.is_finite() || config.rest_velocity <= 0.0 {
        return Err(CameraError::InvalidConfig(
            "pan inertia rest_velocity must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}
