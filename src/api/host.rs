//! Host-environment seams injected into [`CameraController`](super::CameraController).
//!
//! Every trait here is single-threaded and synchronous. Implementations use
//! interior mutability (`Cell`/`RefCell`) because the controller holds them
//! behind `Rc`.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, SurfaceGeometry, Transform};
use crate::interaction::{EventDisposition, KeyEvent, SurfaceEvent};

/// Registration handle returned by listener-accepting hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Handle for one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameRequestId(pub u64);

pub type InputListener = Box<dyn FnMut(&SurfaceEvent) -> EventDisposition>;
pub type KeyListener = Box<dyn FnMut(&KeyEvent) -> EventDisposition>;
pub type FrameCallback = Box<dyn FnOnce()>;

/// The surface the camera drives.
///
/// Hosts must disable their native touch/scroll/zoom gestures on this surface
/// and suppress native handling for events answered with
/// [`EventDisposition::Consumed`].
pub trait InputSurface {
    fn geometry(&self) -> SurfaceGeometry;
    fn add_input_listener(&self, listener: InputListener) -> ListenerId;
    fn remove_input_listener(&self, id: ListenerId);
}

/// Keyboard scope broader than the surface (usually the top-level window),
/// so zoom shortcuts work regardless of focus.
pub trait KeyboardScope {
    fn add_key_listener(&self, listener: KeyListener) -> ListenerId;
    fn remove_key_listener(&self, id: ListenerId);
}

/// Display-synchronized "run before next paint" primitive.
///
/// `request_frame` must defer the callback; it is never invoked re-entrantly.
pub trait FrameClock {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId;
    fn cancel_frame(&self, id: FrameRequestId);
}

/// Accessor pair for the host-owned transform.
pub trait TransformAccess {
    fn transform(&self) -> Transform;
    fn set_transform(&mut self, next: Transform);

    /// Re-queried on every pan/zoom application. `None` means unbounded.
    fn bounds(&self) -> Option<Bounds> {
        None
    }
}

type Getter = Box<dyn Fn() -> Transform>;
type Setter = Box<dyn FnMut(Transform)>;
type BoundsGetter = Box<dyn Fn() -> Option<Bounds>>;

/// Closure-backed [`TransformAccess`].
pub struct TransformAccessors {
    get: Getter,
    set: Setter,
    bounds: Option<BoundsGetter>,
}

impl TransformAccessors {
    pub fn new(
        get: impl Fn() -> Transform + 'static,
        set: impl FnMut(Transform) + 'static,
    ) -> Self {
        Self {
            get: Box::new(get),
            set: Box::new(set),
            bounds: None,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Fn() -> Option<Bounds> + 'static) -> Self {
        self.bounds = Some(Box::new(bounds));
        self
    }
}

impl std::fmt::Debug for TransformAccessors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformAccessors")
            .field("has_bounds", &self.bounds.is_some())
            .finish_non_exhaustive()
    }
}

impl TransformAccess for TransformAccessors {
    fn transform(&self) -> Transform {
        (self.get)()
    }

    fn set_transform(&mut self, next: Transform) {
        (self.set)(next);
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds.as_ref().and_then(|bounds| bounds())
    }
}
