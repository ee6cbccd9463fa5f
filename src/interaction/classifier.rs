use serde::{Deserialize, Serialize};

use super::{CameraCommand, Key, KeyEvent, WheelDeltaMode, WheelEvent};

/// Delta produced by one notch of a legacy mouse wheel in pixel mode.
pub const WHEEL_NOTCH_UNITS: f64 = 120.0;

/// How wheel events are screened for resolution before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WheelResolutionPolicy {
    /// Accept pixel-mode events; reject line and page modes.
    #[default]
    DeltaMode,
    /// Like `DeltaMode`, and also reject pixel-mode events whose only delta is a
    /// whole multiple of [`WHEEL_NOTCH_UNITS`].
    Strict,
}

#[must_use]
pub fn accepts_wheel_resolution(event: &WheelEvent, policy: WheelResolutionPolicy) -> bool {
    if event.delta_mode != WheelDeltaMode::Pixel {
        return false;
    }
    match policy {
        WheelResolutionPolicy::DeltaMode => true,
        WheelResolutionPolicy::Strict => !looks_like_notch(event),
    }
}

fn looks_like_notch(event: &WheelEvent) -> bool {
    let is_notch = |delta: f64| delta != 0.0 && (delta / WHEEL_NOTCH_UNITS).fract() == 0.0;
    match (event.delta_x == 0.0, event.delta_y == 0.0) {
        (true, false) => is_notch(event.delta_y),
        (false, true) => is_notch(event.delta_x),
        _ => false,
    }
}

/// Classifies a wheel/trackpad sample into a pan or pointer-anchored zoom.
///
/// Returns `None` for coarse wheel notches, non-finite payloads and
/// zero-delta samples.
#[must_use]
pub fn classify_wheel(event: &WheelEvent, policy: WheelResolutionPolicy) -> Option<CameraCommand> {
    if !accepts_wheel_resolution(event, policy) {
        return None;
    }
    if !event.delta_x.is_finite() || !event.delta_y.is_finite() {
        return None;
    }

    if event.modifiers.accelerator() {
        if event.delta_y == 0.0 || !event.pointer_x.is_finite() || !event.pointer_y.is_finite() {
            return None;
        }
        return Some(CameraCommand::ZoomAt {
            intensity: event.delta_y,
            anchor_x: event.pointer_x,
            anchor_y: event.pointer_y,
        });
    }

    let (raw_x, raw_y) = if event.modifiers.shift {
        // Some hosts already move the delta to x when shift is held.
        let horizontal = if event.delta_x != 0.0 {
            event.delta_x
        } else {
            event.delta_y
        };
        (horizontal, 0.0)
    } else {
        (event.delta_x, event.delta_y)
    };

    if raw_x == 0.0 && raw_y == 0.0 {
        return None;
    }
    Some(CameraCommand::Pan {
        dx: -raw_x,
        dy: -raw_y,
    })
}

/// Classifies an accelerator zoom shortcut anchored at `center`.
#[must_use]
pub fn classify_key(event: &KeyEvent, center: (f64, f64), step: f64) -> Option<CameraCommand> {
    if !event.modifiers.accelerator() {
        return None;
    }
    let intensity = match event.key {
        Key::Char('+' | '=') | Key::NumpadAdd => -step,
        Key::Char('-' | '_') | Key::NumpadSubtract => step,
        _ => return None,
    };
    Some(CameraCommand::ZoomAt {
        intensity,
        anchor_x: center.0,
        anchor_y: center.1,
    })
}
