use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::core::Transform;
use crate::error::CameraResult;
use crate::interaction::{
    EventDisposition, KeyEvent, PinchSession, SchedulerState, SurfaceEvent, Velocity,
};

use super::camera_core::CameraCore;
use super::config_validation::validate_camera_config;
use super::{
    CameraConfig, FrameClock, InputSurface, KeyboardScope, ListenerId, TransformAccess,
};

/// Host seams a controller attaches to.
#[derive(Clone)]
pub struct CameraHost {
    pub surface: Rc<dyn InputSurface>,
    pub keyboard: Rc<dyn KeyboardScope>,
    pub clock: Rc<dyn FrameClock>,
}

impl CameraHost {
    #[must_use]
    pub fn new(
        surface: Rc<dyn InputSurface>,
        keyboard: Rc<dyn KeyboardScope>,
        clock: Rc<dyn FrameClock>,
    ) -> Self {
        Self {
            surface,
            keyboard,
            clock,
        }
    }

    /// Uses one object for all three seams.
    #[must_use]
    pub fn from_shared<H>(host: &Rc<H>) -> Self
    where
        H: InputSurface + KeyboardScope + FrameClock + 'static,
    {
        Self {
            surface: host.clone(),
            keyboard: host.clone(),
            clock: host.clone(),
        }
    }
}

impl std::fmt::Debug for CameraHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraHost")
            .field("surface", &self.surface.geometry())
            .finish_non_exhaustive()
    }
}

/// Pan-and-zoom camera bound to one surface and one transform accessor.
///
/// All behavior is event-driven: the constructor registers listeners on the
/// surface and keyboard scope, and pan inertia runs on the host frame clock.
/// [`dispose`](Self::dispose) (or drop) detaches everything.
///
/// The transform setter runs after controller state is updated, so it may
/// query or dispose the controller. It must not dispatch new input
/// synchronously.
pub struct CameraController<A: TransformAccess + 'static> {
    core: Rc<RefCell<CameraCore>>,
    access: Rc<RefCell<A>>,
    host: CameraHost,
    input_listener: Option<ListenerId>,
    key_listener: Option<ListenerId>,
}

impl<A: TransformAccess + 'static> CameraController<A> {
    pub fn new(host: CameraHost, access: A, config: CameraConfig) -> CameraResult<Self> {
        let config = validate_camera_config(config)?;
        let core = Rc::new(RefCell::new(CameraCore::new(config)));
        let access = Rc::new(RefCell::new(access));

        let input_listener = {
            let core = Rc::downgrade(&core);
            let access = Rc::downgrade(&access);
            let surface = Rc::downgrade(&host.surface);
            let clock = Rc::downgrade(&host.clock);
            host.surface.add_input_listener(Box::new(move |event: &SurfaceEvent| {
                let (Some(shared), Some(shared_access), Some(surface)) =
                    (core.upgrade(), access.upgrade(), surface.upgrade())
                else {
                    return EventDisposition::Ignored;
                };
                let geometry = surface.geometry();
                let dispatch = {
                    let access = shared_access.borrow();
                    shared
                        .borrow_mut()
                        .handle_surface_event(event, geometry, &*access)
                };
                commit(&shared, &shared_access, dispatch.commit);
                if dispatch.start_frames {
                    debug!("pan inertia started; scheduler running");
                    schedule_frame(&core, &access, &clock);
                }
                dispatch.disposition
            }))
        };

        let key_listener = {
            let core = Rc::downgrade(&core);
            let access = Rc::downgrade(&access);
            let surface = Rc::downgrade(&host.surface);
            host.keyboard.add_key_listener(Box::new(move |event: &KeyEvent| {
                let (Some(shared), Some(shared_access), Some(surface)) =
                    (core.upgrade(), access.upgrade(), surface.upgrade())
                else {
                    return EventDisposition::Ignored;
                };
                let geometry = surface.geometry();
                let dispatch = {
                    let access = shared_access.borrow();
                    shared.borrow_mut().handle_key(event, geometry, &*access)
                };
                commit(&shared, &shared_access, dispatch.commit);
                dispatch.disposition
            }))
        };

        debug!(
            ?input_listener,
            ?key_listener,
            "camera controller attached"
        );

        Ok(Self {
            core,
            access,
            host,
            input_listener: Some(input_listener),
            key_listener: Some(key_listener),
        })
    }

    /// Current transform as reported by the accessor.
    ///
    /// Panics when called from inside the accessor's own setter.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.access.borrow().transform()
    }

    #[must_use]
    pub fn config(&self) -> CameraConfig {
        self.core.borrow().config()
    }

    #[must_use]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.core.borrow().scheduler_state()
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.core.borrow().velocity()
    }

    /// Smoothed zoom target; `Some` while a zoom gesture is active.
    #[must_use]
    pub fn zoom_target_scale(&self) -> Option<f64> {
        self.core.borrow().zoom_target_scale()
    }

    #[must_use]
    pub fn pinch_anchor(&self) -> Option<(f64, f64)> {
        self.core
            .borrow()
            .pinch_session()
            .map(|PinchSession { anchor_x, anchor_y, .. }| (anchor_x, anchor_y))
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.core.borrow().is_disposed()
    }

    /// Removes every listener and cancels the pending frame. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(id) = self.input_listener.take() {
            self.host.surface.remove_input_listener(id);
        }
        if let Some(id) = self.key_listener.take() {
            self.host.keyboard.remove_key_listener(id);
        }

        let pending = {
            let mut core = self.core.borrow_mut();
            if core.is_disposed() {
                return;
            }
            core.dispose()
        };
        if let Some(id) = pending {
            self.host.clock.cancel_frame(id);
        }
        debug!(cancelled_frame = ?pending, "camera controller disposed");
    }
}

impl<A: TransformAccess + 'static> Drop for CameraController<A> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<A: TransformAccess + 'static> std::fmt::Debug for CameraController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("scheduler_state", &self.scheduler_state())
            .field("velocity", &self.velocity())
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

/// Hands a computed transform to the host setter with no core borrow held.
fn commit<A: TransformAccess>(
    core: &RefCell<CameraCore>,
    access: &RefCell<A>,
    next: Option<Transform>,
) {
    let Some(next) = next else {
        return;
    };
    if core.borrow().is_disposed() {
        return;
    }
    access.borrow_mut().set_transform(next);
}

/// Requests the next inertia frame. Re-entered only from the frame callback.
fn schedule_frame<A: TransformAccess + 'static>(
    core: &Weak<RefCell<CameraCore>>,
    access: &Weak<RefCell<A>>,
    clock: &Weak<dyn FrameClock>,
) {
    let (Some(shared), Some(frame_clock)) = (core.upgrade(), clock.upgrade()) else {
        return;
    };
    if shared.borrow().is_disposed() {
        return;
    }

    let callback = {
        let core = core.clone();
        let access = access.clone();
        let clock = clock.clone();
        Box::new(move || {
            let (Some(shared), Some(shared_access)) = (core.upgrade(), access.upgrade()) else {
                return;
            };
            let step = {
                let access = shared_access.borrow();
                shared.borrow_mut().on_frame(&*access)
            };
            commit(&shared, &shared_access, step.commit);
            if step.keep_running {
                schedule_frame(&core, &access, &clock);
            }
        })
    };
    let id = frame_clock.request_frame(callback);
    shared.borrow_mut().mark_frame_requested(id);
}
