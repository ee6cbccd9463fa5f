use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::core::{Bounds, SurfaceGeometry, Transform};
use crate::interaction::{EventDisposition, KeyEvent, PinchEvent, SurfaceEvent, WheelEvent};

use super::{
    FrameCallback, FrameClock, FrameRequestId, InputListener, InputSurface, KeyListener,
    KeyboardScope, ListenerId, TransformAccess,
};

/// Deterministic in-process host used by tests and headless integrations.
///
/// Events are dispatched synchronously to listeners in registration order and
/// frames only run when [`run_frame`](Self::run_frame) is called. Listeners must
/// not register or remove listeners while being dispatched.
pub struct ManualHost {
    geometry: Cell<SurfaceGeometry>,
    next_id: Cell<u64>,
    input_listeners: RefCell<IndexMap<ListenerId, InputListener>>,
    key_listeners: RefCell<IndexMap<ListenerId, KeyListener>>,
    frames: RefCell<IndexMap<FrameRequestId, FrameCallback>>,
}

impl ManualHost {
    #[must_use]
    pub fn new(geometry: SurfaceGeometry) -> Rc<Self> {
        Rc::new(Self {
            geometry: Cell::new(geometry),
            next_id: Cell::new(1),
            input_listeners: RefCell::new(IndexMap::new()),
            key_listeners: RefCell::new(IndexMap::new()),
            frames: RefCell::new(IndexMap::new()),
        })
    }

    pub fn set_geometry(&self, geometry: SurfaceGeometry) {
        self.geometry.set(geometry);
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Dispatches a surface event; `Consumed` if any listener consumed it.
    pub fn dispatch_surface_event(&self, event: &SurfaceEvent) -> EventDisposition {
        let mut listeners = self.input_listeners.borrow_mut();
        let mut disposition = EventDisposition::Ignored;
        for listener in listeners.values_mut() {
            if listener(event).is_consumed() {
                disposition = EventDisposition::Consumed;
            }
        }
        disposition
    }

    pub fn dispatch_wheel(&self, event: WheelEvent) -> EventDisposition {
        self.dispatch_surface_event(&SurfaceEvent::Wheel(event))
    }

    pub fn dispatch_pinch(&self, event: PinchEvent) -> EventDisposition {
        self.dispatch_surface_event(&SurfaceEvent::Pinch(event))
    }

    pub fn dispatch_key(&self, event: KeyEvent) -> EventDisposition {
        let mut listeners = self.key_listeners.borrow_mut();
        let mut disposition = EventDisposition::Ignored;
        for listener in listeners.values_mut() {
            if listener(&event).is_consumed() {
                disposition = EventDisposition::Consumed;
            }
        }
        disposition
    }

    /// Runs every frame callback pending at call time and returns how many ran.
    ///
    /// Callbacks requested while running are deferred to the next call.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameCallback> = self.frames.borrow_mut().drain(..).map(|(_, cb)| cb).collect();
        let count = due.len();
        for callback in due {
            callback();
        }
        count
    }

    /// Runs frames until none are pending or `max_frames` is reached.
    ///
    /// Returns the number of frames run.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pending_frames() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    #[must_use]
    pub fn input_listener_count(&self) -> usize {
        self.input_listeners.borrow().len()
    }

    #[must_use]
    pub fn key_listener_count(&self) -> usize {
        self.key_listeners.borrow().len()
    }
}

impl std::fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualHost")
            .field("geometry", &self.geometry.get())
            .field("input_listeners", &self.input_listener_count())
            .field("key_listeners", &self.key_listener_count())
            .field("pending_frames", &self.pending_frames())
            .finish()
    }
}

impl InputSurface for ManualHost {
    fn geometry(&self) -> SurfaceGeometry {
        self.geometry.get()
    }

    fn add_input_listener(&self, listener: InputListener) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        self.input_listeners.borrow_mut().insert(id, listener);
        id
    }

    fn remove_input_listener(&self, id: ListenerId) {
        self.input_listeners.borrow_mut().shift_remove(&id);
    }
}

impl KeyboardScope for ManualHost {
    fn add_key_listener(&self, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        self.key_listeners.borrow_mut().insert(id, listener);
        id
    }

    fn remove_key_listener(&self, id: ListenerId) {
        self.key_listeners.borrow_mut().shift_remove(&id);
    }
}

impl FrameClock for ManualHost {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.allocate_id());
        self.frames.borrow_mut().insert(id, callback);
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        self.frames.borrow_mut().shift_remove(&id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SharedTransformState {
    transform: Transform,
    bounds: Option<Bounds>,
    commits: usize,
}

/// Host-side transform store implementing [`TransformAccess`].
///
/// Clones share the same state, so a test can hand one clone to the controller
/// and inspect commits through another.
#[derive(Debug, Clone)]
pub struct SharedTransform {
    state: Rc<RefCell<SharedTransformState>>,
}

impl Default for SharedTransform {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl SharedTransform {
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self {
            state: Rc::new(RefCell::new(SharedTransformState {
                transform,
                bounds: None,
                commits: 0,
            })),
        }
    }

    #[must_use]
    pub fn with_bounds(self, bounds: Bounds) -> Self {
        self.set_bounds(Some(bounds));
        self
    }

    #[must_use]
    pub fn get(&self) -> Transform {
        self.state.borrow().transform
    }

    /// Host-side overwrite; not counted as a commit.
    pub fn replace(&self, transform: Transform) {
        self.state.borrow_mut().transform = transform;
    }

    pub fn set_bounds(&self, bounds: Option<Bounds>) {
        self.state.borrow_mut().bounds = bounds;
    }

    /// Number of transforms committed through [`TransformAccess`].
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.state.borrow().commits
    }
}

impl TransformAccess for SharedTransform {
    fn transform(&self) -> Transform {
        self.get()
    }

    fn set_transform(&mut self, next: Transform) {
        let mut state = self.state.borrow_mut();
        state.transform = next;
        state.commits += 1;
    }

    fn bounds(&self) -> Option<Bounds> {
        self.state.borrow().bounds
    }
}
