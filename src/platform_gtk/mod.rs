//! GTK4 host bindings.
//!
//! [`GtkCameraHost`] exposes a drawing widget as [`InputSurface`], a broader
//! widget (usually the window) as [`KeyboardScope`], and widget tick callbacks
//! as [`FrameClock`]. Coordinates are widget-local, so the reported surface
//! origin is always `(0, 0)`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use gtk4::{gdk, glib};
use indexmap::IndexMap;

use crate::api::{
    FrameCallback, FrameClock, FrameRequestId, InputListener, InputSurface, KeyListener,
    KeyboardScope, ListenerId,
};
use crate::core::SurfaceGeometry;
use crate::interaction::{
    EventDisposition, Key, KeyEvent, Modifiers, PinchEvent, SurfaceEvent, WheelDeltaMode,
    WheelEvent,
};

type SharedInputListener = Rc<RefCell<InputListener>>;

pub struct GtkCameraHost {
    surface: gtk::Widget,
    key_scope: gtk::Widget,
    pointer: Rc<Cell<(f64, f64)>>,
    motion: gtk::EventControllerMotion,
    next_id: Cell<u64>,
    input_controllers: RefCell<IndexMap<ListenerId, Vec<gtk::EventController>>>,
    key_controllers: RefCell<IndexMap<ListenerId, gtk::EventControllerKey>>,
    ticks: Rc<RefCell<IndexMap<FrameRequestId, gtk::TickCallbackId>>>,
}

impl GtkCameraHost {
    #[must_use]
    pub fn new(
        surface: &impl IsA<gtk::Widget>,
        key_scope: &impl IsA<gtk::Widget>,
    ) -> Rc<Self> {
        let surface = surface.clone().upcast::<gtk::Widget>();
        let key_scope = key_scope.clone().upcast::<gtk::Widget>();

        let pointer = Rc::new(Cell::new((0.0, 0.0)));
        let motion = gtk::EventControllerMotion::new();
        {
            let pointer = Rc::clone(&pointer);
            motion.connect_motion(move |_, x, y| pointer.set((x, y)));
        }
        surface.add_controller(motion.clone());

        Rc::new(Self {
            surface,
            key_scope,
            pointer,
            motion,
            next_id: Cell::new(1),
            input_controllers: RefCell::new(IndexMap::new()),
            key_controllers: RefCell::new(IndexMap::new()),
            ticks: Rc::new(RefCell::new(IndexMap::new())),
        })
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn scroll_controller(&self, listener: SharedInputListener) -> gtk::EventControllerScroll {
        let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::BOTH_AXES);
        let pointer = Rc::clone(&self.pointer);
        scroll.connect_scroll(move |controller, dx, dy| {
            let delta_mode = match controller.unit() {
                gdk::ScrollUnit::Wheel => WheelDeltaMode::Line,
                _ => WheelDeltaMode::Pixel,
            };
            let (pointer_x, pointer_y) = pointer.get();
            let event = SurfaceEvent::Wheel(WheelEvent {
                delta_x: dx,
                delta_y: dy,
                delta_mode,
                modifiers: modifiers_from_state(controller.current_event_state()),
                pointer_x,
                pointer_y,
            });
            propagation(dispatch_input(&listener, &event))
        });
        scroll
    }

    fn zoom_gesture(listener: SharedInputListener) -> gtk::GestureZoom {
        let gesture = gtk::GestureZoom::new();
        {
            let listener = Rc::clone(&listener);
            gesture.connect_begin(move |_, _| {
                dispatch_input(&listener, &SurfaceEvent::Pinch(PinchEvent::Begin));
            });
        }
        {
            let listener = Rc::clone(&listener);
            gesture.connect_scale_changed(move |_, scale| {
                dispatch_input(&listener, &SurfaceEvent::Pinch(PinchEvent::Update { scale }));
            });
        }
        {
            let listener = Rc::clone(&listener);
            gesture.connect_end(move |_, _| {
                dispatch_input(&listener, &SurfaceEvent::Pinch(PinchEvent::End));
            });
        }
        gesture.connect_cancel(move |_, _| {
            dispatch_input(&listener, &SurfaceEvent::Pinch(PinchEvent::End));
        });
        gesture
    }
}

impl std::fmt::Debug for GtkCameraHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GtkCameraHost")
            .field("input_listeners", &self.input_controllers.borrow().len())
            .field("key_listeners", &self.key_controllers.borrow().len())
            .field("pending_frames", &self.ticks.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Drop for GtkCameraHost {
    fn drop(&mut self) {
        for (_, controllers) in self.input_controllers.get_mut().drain(..) {
            for controller in controllers {
                self.surface.remove_controller(&controller);
            }
        }
        for (_, controller) in self.key_controllers.get_mut().drain(..) {
            self.key_scope.remove_controller(&controller);
        }
        for (_, tick) in self.ticks.borrow_mut().drain(..) {
            tick.remove();
        }
        self.surface.remove_controller(&self.motion);
    }
}

impl InputSurface for GtkCameraHost {
    fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry::new(
            0.0,
            0.0,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        )
    }

    fn add_input_listener(&self, listener: InputListener) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        let listener = Rc::new(RefCell::new(listener));

        let scroll = self.scroll_controller(Rc::clone(&listener));
        let zoom = Self::zoom_gesture(listener);
        self.surface.add_controller(scroll.clone());
        self.surface.add_controller(zoom.clone());

        self.input_controllers.borrow_mut().insert(
            id,
            vec![
                scroll.upcast::<gtk::EventController>(),
                zoom.upcast::<gtk::EventController>(),
            ],
        );
        id
    }

    fn remove_input_listener(&self, id: ListenerId) {
        let Some(controllers) = self.input_controllers.borrow_mut().shift_remove(&id) else {
            return;
        };
        for controller in controllers {
            self.surface.remove_controller(&controller);
        }
    }
}

impl KeyboardScope for GtkCameraHost {
    fn add_key_listener(&self, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        let listener = RefCell::new(listener);
        let controller = gtk::EventControllerKey::new();
        controller.connect_key_pressed(move |_, keyval, _keycode, state| {
            let event = KeyEvent::new(key_from_keyval(keyval), modifiers_from_state(state));
            let mut listener = listener.borrow_mut();
            propagation((*listener)(&event))
        });
        self.key_scope.add_controller(controller.clone());
        self.key_controllers.borrow_mut().insert(id, controller);
        id
    }

    fn remove_key_listener(&self, id: ListenerId) {
        if let Some(controller) = self.key_controllers.borrow_mut().shift_remove(&id) {
            self.key_scope.remove_controller(&controller);
        }
    }
}

impl FrameClock for GtkCameraHost {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.allocate_id());
        let ticks = Rc::clone(&self.ticks);
        let callback = Cell::new(Some(callback));
        let tick = self.surface.add_tick_callback(move |_, _| {
            ticks.borrow_mut().shift_remove(&id);
            if let Some(callback) = callback.take() {
                callback();
            }
            glib::ControlFlow::Break
        });
        self.ticks.borrow_mut().insert(id, tick);
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        if let Some(tick) = self.ticks.borrow_mut().shift_remove(&id) {
            tick.remove();
        }
    }
}

fn dispatch_input(listener: &SharedInputListener, event: &SurfaceEvent) -> EventDisposition {
    let mut listener = listener.borrow_mut();
    (*listener)(event)
}

fn propagation(disposition: EventDisposition) -> glib::Propagation {
    match disposition {
        EventDisposition::Consumed => glib::Propagation::Stop,
        EventDisposition::Ignored => glib::Propagation::Proceed,
    }
}

fn modifiers_from_state(state: gdk::ModifierType) -> Modifiers {
    Modifiers {
        control: state.contains(gdk::ModifierType::CONTROL_MASK),
        meta: state.contains(gdk::ModifierType::META_MASK)
            || state.contains(gdk::ModifierType::SUPER_MASK),
        shift: state.contains(gdk::ModifierType::SHIFT_MASK),
        alt: state.contains(gdk::ModifierType::ALT_MASK),
    }
}

fn key_from_keyval(keyval: gdk::Key) -> Key {
    match keyval {
        gdk::Key::KP_Add => Key::NumpadAdd,
        gdk::Key::KP_Subtract => Key::NumpadSubtract,
        other => other.to_unicode().map_or(Key::Other, Key::Char),
    }
}
