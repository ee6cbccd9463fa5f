use serde::{Deserialize, Serialize};

/// Modifier-key state captured with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub control: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        control: false,
        meta: false,
        shift: false,
        alt: false,
    };

    #[must_use]
    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Control on most platforms, command (meta) on macOS.
    #[must_use]
    pub fn accelerator(self) -> bool {
        self.control || self.meta
    }
}

/// Unit of the deltas carried by a [`WheelEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WheelDeltaMode {
    /// High-resolution pixel deltas (trackpads, precision wheels).
    #[default]
    Pixel,
    /// Per-notch line deltas from a traditional mouse wheel.
    Line,
    /// Page-sized deltas.
    Page,
}

/// Wheel or trackpad scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: WheelDeltaMode,
    pub modifiers: Modifiers,
    /// Pointer position in screen coordinates.
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl WheelEvent {
    /// Pixel-mode wheel sample without modifiers.
    #[must_use]
    pub fn pixels(delta_x: f64, delta_y: f64, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            delta_mode: WheelDeltaMode::Pixel,
            modifiers: Modifiers::NONE,
            pointer_x,
            pointer_y,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_delta_mode(mut self, delta_mode: WheelDeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }
}

/// Discrete pinch-gesture lifecycle.
///
/// `Update::scale` is cumulative relative to the scale at `Begin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PinchEvent {
    Begin,
    Update { scale: f64 },
    End,
}

/// Events delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    Wheel(WheelEvent),
    Pinch(PinchEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    NumpadAdd,
    NumpadSubtract,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Whether the host should suppress its native handling of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDisposition {
    /// The controller handled the event; native scroll/zoom must not run.
    Consumed,
    /// The controller did not act; the host may handle the event.
    Ignored,
}

impl EventDisposition {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Normalized camera command produced by the input classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraCommand {
    /// Pan delta in screen pixels, already in "natural" direction.
    Pan { dx: f64, dy: f64 },
    /// Zoom around a screen anchor. Negative intensity zooms in.
    ZoomAt {
        intensity: f64,
        anchor_x: f64,
        anchor_y: f64,
    },
}
