use tracing::{debug, trace, warn};

use crate::core::{SurfaceGeometry, Transform};
use crate::interaction::{
    CameraCommand, EventDisposition, KeyEvent, PanInertia, PinchEvent, PinchSession,
    SchedulerState, SurfaceEvent, Velocity, WheelEvent, ZoomSolver, classify_key,
    classify_wheel, intensity_for_scale_ratio,
};

use super::frame_scheduler::FrameScheduler;
use super::{CameraConfig, FrameRequestId, TransformAccess};

/// Outcome of one input event.
///
/// `commit` is handed to the host setter only after the core borrow ends, so
/// the setter may call back into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Dispatch {
    pub(super) disposition: EventDisposition,
    pub(super) commit: Option<Transform>,
    /// The inertia loop needs a first frame request.
    pub(super) start_frames: bool,
}

impl Dispatch {
    fn consumed(commit: Option<Transform>, start_frames: bool) -> Self {
        Self {
            disposition: EventDisposition::Consumed,
            commit,
            start_frames,
        }
    }

    fn ignored() -> Self {
        Self {
            disposition: EventDisposition::Ignored,
            commit: None,
            start_frames: false,
        }
    }
}

/// Outcome of one inertia frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FrameStep {
    pub(super) commit: Option<Transform>,
    pub(super) keep_running: bool,
}

/// Controller state shared between listeners and frame callbacks.
///
/// Host-free: methods read the transform through the supplied accessor and
/// return the transform to commit instead of writing it.
pub(super) struct CameraCore {
    config: CameraConfig,
    inertia: PanInertia,
    zoom: ZoomSolver,
    pinch: Option<PinchSession>,
    scheduler: FrameScheduler,
    disposed: bool,
}

impl CameraCore {
    pub(super) fn new(config: CameraConfig) -> Self {
        Self {
            config,
            inertia: PanInertia::new(config.inertia),
            zoom: ZoomSolver::new(config.zoom),
            pinch: None,
            scheduler: FrameScheduler::default(),
            disposed: false,
        }
    }

    pub(super) fn config(&self) -> CameraConfig {
        self.config
    }

    pub(super) fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(super) fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub(super) fn velocity(&self) -> Velocity {
        self.inertia.velocity()
    }

    pub(super) fn zoom_target_scale(&self) -> Option<f64> {
        self.zoom.target_scale()
    }

    pub(super) fn pinch_session(&self) -> Option<PinchSession> {
        self.pinch
    }

    pub(super) fn mark_frame_requested(&mut self, id: FrameRequestId) {
        self.scheduler.mark_requested(id);
    }

    pub(super) fn handle_surface_event<A: TransformAccess + ?Sized>(
        &mut self,
        event: &SurfaceEvent,
        geometry: SurfaceGeometry,
        access: &A,
    ) -> Dispatch {
        if self.disposed {
            return Dispatch::ignored();
        }
        match event {
            SurfaceEvent::Wheel(wheel) => self.handle_wheel(wheel, geometry, access),
            SurfaceEvent::Pinch(pinch) => self.handle_pinch(*pinch, geometry, access),
        }
    }

    fn handle_wheel<A: TransformAccess + ?Sized>(
        &mut self,
        event: &WheelEvent,
        geometry: SurfaceGeometry,
        access: &A,
    ) -> Dispatch {
        let Some(command) = classify_wheel(event, self.config.wheel_resolution) else {
            trace!(
                delta_x = event.delta_x,
                delta_y = event.delta_y,
                mode = ?event.delta_mode,
                "wheel event rejected by classifier"
            );
            return Dispatch::ignored();
        };

        let allowed = match command {
            CameraCommand::Pan { .. } => self.config.input_behavior.wheel_pan,
            CameraCommand::ZoomAt { .. } => self.config.input_behavior.wheel_zoom,
        };
        if !allowed {
            return Dispatch::ignored();
        }

        trace!(?command, "camera command");
        match command {
            CameraCommand::Pan { dx, dy } => {
                // Panning ends a wheel-zoom gesture; a pinch keeps its own target.
                if self.pinch.is_none() {
                    self.zoom.end_gesture();
                }
                self.inertia.integrate(dx, dy);
                let next = self.inertia.apply(access.transform(), access.bounds());
                let start_frames = !self.inertia.is_at_rest() && !self.scheduler.is_running();
                Dispatch::consumed(Some(next), start_frames)
            }
            CameraCommand::ZoomAt {
                intensity,
                anchor_x,
                anchor_y,
            } => {
                let next = self.zoom.zoom_at(
                    access.transform(),
                    intensity,
                    (anchor_x, anchor_y),
                    geometry.origin(),
                    access.bounds(),
                );
                Dispatch::consumed(next, false)
            }
        }
    }

    fn handle_pinch<A: TransformAccess + ?Sized>(
        &mut self,
        event: PinchEvent,
        geometry: SurfaceGeometry,
        access: &A,
    ) -> Dispatch {
        if !self.config.input_behavior.pinch_zoom {
            return Dispatch::ignored();
        }

        match event {
            PinchEvent::Begin => {
                let (anchor_x, anchor_y) = geometry.center();
                let start_scale = access.transform().scale;
                self.zoom.begin_gesture(start_scale);
                self.pinch = Some(PinchSession {
                    anchor_x,
                    anchor_y,
                    start_scale,
                });
                debug!(anchor_x, anchor_y, start_scale, "pinch gesture began");
                Dispatch::consumed(None, false)
            }
            PinchEvent::Update { scale } => {
                let Some(session) = self.pinch else {
                    trace!(scale, "pinch update without an active gesture ignored");
                    return Dispatch::consumed(None, false);
                };
                let next = self.pinch_update(session, scale, geometry, access);
                Dispatch::consumed(next, false)
            }
            PinchEvent::End => {
                self.pinch = None;
                self.zoom.end_gesture();
                debug!("pinch gesture ended");
                Dispatch::consumed(None, false)
            }
        }
    }

    fn pinch_update<A: TransformAccess + ?Sized>(
        &mut self,
        session: PinchSession,
        gesture_scale: f64,
        geometry: SurfaceGeometry,
        access: &A,
    ) -> Option<Transform> {
        let current = access.transform();
        if !current.is_valid() {
            warn!(?current, "skipping pinch update on degenerate transform");
            return None;
        }
        let ratio = session.start_scale * gesture_scale / current.scale;
        let Some(intensity) =
            intensity_for_scale_ratio(ratio, current.scale, self.config.zoom.base_sensitivity)
        else {
            warn!(gesture_scale, "dropping pinch update with invalid scale factor");
            return None;
        };
        self.zoom.zoom_at(
            current,
            intensity,
            (session.anchor_x, session.anchor_y),
            geometry.origin(),
            access.bounds(),
        )
    }

    pub(super) fn handle_key<A: TransformAccess + ?Sized>(
        &mut self,
        event: &KeyEvent,
        geometry: SurfaceGeometry,
        access: &A,
    ) -> Dispatch {
        if self.disposed || !self.config.input_behavior.keyboard_zoom {
            return Dispatch::ignored();
        }
        let Some(command) = classify_key(event, geometry.center(), self.config.keyboard_zoom_step)
        else {
            return Dispatch::ignored();
        };
        trace!(?command, "camera command");
        let CameraCommand::ZoomAt {
            intensity,
            anchor_x,
            anchor_y,
        } = command
        else {
            return Dispatch::ignored();
        };
        let next = self.zoom.zoom_step(
            access.transform(),
            intensity,
            (anchor_x, anchor_y),
            geometry.origin(),
            access.bounds(),
        );
        Dispatch::consumed(next, false)
    }

    /// Runs one scheduled inertia frame.
    pub(super) fn on_frame<A: TransformAccess + ?Sized>(&mut self, access: &A) -> FrameStep {
        self.scheduler.mark_fired();
        if self.disposed {
            warn!("frame callback fired after dispose; ignoring");
            return FrameStep {
                commit: None,
                keep_running: false,
            };
        }

        let commit = self.inertia.step(access.transform(), access.bounds());
        if let Some(next) = commit {
            trace!(x = next.x, y = next.y, velocity = ?self.inertia.velocity(), "inertia step");
        }

        let keep_running = !self.inertia.is_at_rest();
        if !keep_running {
            debug!("pan inertia converged; scheduler idle");
        }
        FrameStep {
            commit,
            keep_running,
        }
    }

    /// Marks the core disposed and returns the frame request to cancel.
    pub(super) fn dispose(&mut self) -> Option<FrameRequestId> {
        self.disposed = true;
        self.inertia.stop();
        self.pinch = None;
        self.zoom.end_gesture();
        self.scheduler.take_pending()
    }
}
