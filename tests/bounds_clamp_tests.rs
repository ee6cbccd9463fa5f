use std::rc::Rc;

use approx::assert_abs_diff_eq;
use canvas_camera::api::{CameraConfig, CameraController, CameraHost, ManualHost, SharedTransform};
use canvas_camera::core::{Bounds, SurfaceGeometry, Transform};
use canvas_camera::interaction::{Modifiers, SchedulerState, WheelEvent};

fn setup(
    bounds: Option<Bounds>,
) -> (
    Rc<ManualHost>,
    SharedTransform,
    CameraController<SharedTransform>,
) {
    let host = ManualHost::new(SurfaceGeometry::new(0.0, 0.0, 800.0, 600.0));
    let transform = SharedTransform::new(Transform::IDENTITY);
    transform.set_bounds(bounds);
    let controller = CameraController::new(
        CameraHost::from_shared(&host),
        transform.clone(),
        CameraConfig::default(),
    )
    .expect("controller init");
    (host, transform, controller)
}

#[test]
fn large_pan_clamps_exactly_to_bound_and_kills_velocity() {
    let (host, transform, controller) = setup(Some(Bounds::new(-50.0, -50.0, 50.0, 50.0)));

    host.dispatch_wheel(WheelEvent::pixels(1_000.0, 0.0, 0.0, 0.0));

    assert_eq!(transform.get().x, -50.0);
    assert_eq!(transform.get().y, 0.0);
    assert_eq!(controller.velocity().vx, 0.0);
    assert_eq!(controller.scheduler_state(), SchedulerState::Idle);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn blocked_axis_stops_while_free_axis_keeps_gliding() {
    let (host, transform, controller) =
        setup(Some(Bounds::new(-50.0, -1_000.0, 50.0, 1_000.0)));

    host.dispatch_wheel(WheelEvent::pixels(1_000.0, 100.0, 0.0, 0.0));
    assert_eq!(transform.get().x, -50.0);
    assert_abs_diff_eq!(transform.get().y, -35.0, epsilon = 1e-12);
    assert_eq!(controller.velocity().vx, 0.0);
    assert_eq!(controller.scheduler_state(), SchedulerState::Running);

    host.run_until_idle(200);
    let settled = transform.get();
    assert_eq!(settled.x, -50.0);
    assert!(settled.y < -35.0 && settled.y >= -1_000.0);
    assert_eq!(controller.scheduler_state(), SchedulerState::Idle);
}

#[test]
fn inertia_tail_stops_at_bound() {
    let (host, transform, controller) = setup(Some(Bounds::new(-20.0, -20.0, 20.0, 20.0)));

    host.dispatch_wheel(WheelEvent::pixels(10.0, 0.0, 0.0, 0.0));
    let frames = host.run_until_idle(200);

    // Without the bound the tail would take 43 frames.
    assert!(frames < 43);
    assert_eq!(transform.get().x, -20.0);
    assert_eq!(controller.scheduler_state(), SchedulerState::Idle);
}

#[test]
fn zoom_result_is_clamped_without_touching_scale() {
    let (host, transform, _controller) = setup(Some(Bounds::new(-10.0, -10.0, 10.0, 10.0)));

    host.dispatch_wheel(
        WheelEvent::pixels(0.0, -50.0, 100.0, 100.0).with_modifiers(Modifiers::control()),
    );

    let after = transform.get();
    assert_abs_diff_eq!(after.scale, 0.25_f64.exp(), epsilon = 1e-12);
    assert_eq!(after.x, -10.0);
    assert_eq!(after.y, -10.0);
}

#[test]
fn bounds_are_requeried_on_every_application() {
    let (host, transform, _controller) = setup(None);

    transform.set_bounds(Some(Bounds::new(-1.0, -1.0, 1.0, 1.0)));
    host.dispatch_wheel(WheelEvent::pixels(100.0, 0.0, 0.0, 0.0));
    assert_eq!(transform.get().x, -1.0);

    transform.set_bounds(None);
    host.dispatch_wheel(WheelEvent::pixels(100.0, 0.0, 0.0, 0.0));
    assert!(transform.get().x < -1.0);
}

#[test]
fn translation_never_leaves_bounds_under_mixed_input() {
    let bounds = Bounds::new(-120.0, -80.0, 40.0, 60.0);
    let (host, transform, _controller) = setup(Some(bounds));

    let events = [
        WheelEvent::pixels(90.0, -40.0, 0.0, 0.0),
        WheelEvent::pixels(0.0, -300.0, 600.0, 20.0).with_modifiers(Modifiers::control()),
        WheelEvent::pixels(-250.0, 170.0, 0.0, 0.0),
        WheelEvent::pixels(0.0, 400.0, 10.0, 500.0).with_modifiers(Modifiers::meta()),
        WheelEvent::pixels(0.0, 60.0, 0.0, 0.0).with_modifiers(Modifiers::shift()),
    ];
    for event in events {
        host.dispatch_wheel(event);
        host.run_frame();
        let current = transform.get();
        assert!(bounds.contains(current.x, current.y), "{current:?} escaped bounds");
    }
    host.run_until_idle(500);
    let current = transform.get();
    assert!(bounds.contains(current.x, current.y));
}
