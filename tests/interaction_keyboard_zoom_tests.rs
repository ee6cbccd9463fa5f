use std::rc::Rc;

use approx::assert_abs_diff_eq;
use canvas_camera::api::{
    CameraConfig, CameraController, CameraHost, InputBehavior, ManualHost, SharedTransform,
};
use canvas_camera::core::{SurfaceGeometry, Transform};
use canvas_camera::interaction::{
    EventDisposition, Key, KeyEvent, Modifiers, WheelEvent, raw_target_scale,
};

fn setup(
    geometry: SurfaceGeometry,
    config: CameraConfig,
) -> (
    Rc<ManualHost>,
    SharedTransform,
    CameraController<SharedTransform>,
) {
    let host = ManualHost::new(geometry);
    let transform = SharedTransform::new(Transform::IDENTITY);
    let controller =
        CameraController::new(CameraHost::from_shared(&host), transform.clone(), config)
            .expect("controller init");
    (host, transform, controller)
}

fn default_setup() -> (
    Rc<ManualHost>,
    SharedTransform,
    CameraController<SharedTransform>,
) {
    setup(
        SurfaceGeometry::new(0.0, 0.0, 800.0, 600.0),
        CameraConfig::default(),
    )
}

#[test]
fn ctrl_equals_zooms_in_by_one_step_at_center() {
    let (host, transform, _controller) = default_setup();

    let disposition = host.dispatch_key(KeyEvent::new(Key::Char('='), Modifiers::control()));
    assert_eq!(disposition, EventDisposition::Consumed);

    let after = transform.get();
    assert_abs_diff_eq!(after.scale, 0.4_f64.exp(), epsilon = 1e-12);
    let center = after.screen_to_world((400.0, 300.0), (0.0, 0.0));
    assert_abs_diff_eq!(center.0, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(center.1, 300.0, epsilon = 1e-9);
}

#[test]
fn accelerator_minus_variants_zoom_out() {
    for key in [Key::Char('-'), Key::Char('_'), Key::NumpadSubtract] {
        let (host, transform, _controller) = default_setup();
        assert_eq!(
            host.dispatch_key(KeyEvent::new(key, Modifiers::meta())),
            EventDisposition::Consumed
        );
        assert_abs_diff_eq!(transform.get().scale, (-0.4_f64).exp(), epsilon = 1e-12);
    }
}

#[test]
fn accelerator_plus_variants_zoom_in() {
    for key in [Key::Char('+'), Key::NumpadAdd] {
        let (host, transform, _controller) = default_setup();
        host.dispatch_key(KeyEvent::new(key, Modifiers::control()));
        assert!(transform.get().scale > 1.0);
    }
}

#[test]
fn shortcuts_without_accelerator_are_ignored() {
    let (host, transform, _controller) = default_setup();

    for event in [
        KeyEvent::new(Key::Char('='), Modifiers::NONE),
        KeyEvent::new(Key::Char('-'), Modifiers::shift()),
        KeyEvent::new(Key::Char('a'), Modifiers::control()),
        KeyEvent::new(Key::Other, Modifiers::control()),
    ] {
        assert_eq!(host.dispatch_key(event), EventDisposition::Ignored);
    }
    assert_eq!(transform.commit_count(), 0);
}

#[test]
fn keyboard_anchor_accounts_for_surface_origin() {
    let (host, transform, _controller) = setup(
        SurfaceGeometry::new(30.0, 40.0, 640.0, 480.0),
        CameraConfig::default(),
    );

    host.dispatch_key(KeyEvent::new(Key::Char('+'), Modifiers::control()));
    let after = transform.get();
    let world = after.screen_to_world((350.0, 280.0), (30.0, 40.0));
    assert_abs_diff_eq!(world.0, 320.0, epsilon = 1e-9);
    assert_abs_diff_eq!(world.1, 240.0, epsilon = 1e-9);
}

#[test]
fn custom_step_scales_keyboard_zoom() {
    let (host, transform, _controller) = setup(
        SurfaceGeometry::new(0.0, 0.0, 800.0, 600.0),
        CameraConfig::default().with_keyboard_zoom_step(20.0),
    );

    host.dispatch_key(KeyEvent::new(Key::Char('='), Modifiers::control()));
    assert_abs_diff_eq!(transform.get().scale, 0.1_f64.exp(), epsilon = 1e-12);
}

#[test]
fn disabled_keyboard_gate_ignores_shortcuts() {
    let behavior = InputBehavior {
        keyboard_zoom: false,
        ..InputBehavior::default()
    };
    let (host, transform, _controller) = setup(
        SurfaceGeometry::new(0.0, 0.0, 800.0, 600.0),
        CameraConfig::default().with_input_behavior(behavior),
    );

    assert_eq!(
        host.dispatch_key(KeyEvent::new(Key::Char('='), Modifiers::control())),
        EventDisposition::Ignored
    );
    assert_eq!(transform.get(), Transform::IDENTITY);
}

#[test]
fn every_keypress_applies_a_full_unsmoothed_step() {
    let (host, transform, controller) = default_setup();

    let mut expected = 1.0;
    for _ in 0..3 {
        host.dispatch_key(KeyEvent::new(Key::Char('='), Modifiers::control()));
        expected = raw_target_scale(expected, -80.0, 0.005);
        assert_abs_diff_eq!(transform.get().scale, expected, epsilon = 1e-9);
    }
    assert!(transform.get().scale > 2.5 && transform.get().scale < 3.0);
    assert!(controller.zoom_target_scale().is_none());

    host.dispatch_key(KeyEvent::new(Key::Char('-'), Modifiers::control()));
    expected = raw_target_scale(expected, 80.0, 0.005);
    assert_abs_diff_eq!(transform.get().scale, expected, epsilon = 1e-9);
}

#[test]
fn keypress_after_wheel_zoom_is_not_blended() {
    let (host, transform, _controller) = default_setup();

    host.dispatch_wheel(
        WheelEvent::pixels(0.0, -20.0, 100.0, 100.0).with_modifiers(Modifiers::control()),
    );
    let before = transform.get().scale;

    host.dispatch_key(KeyEvent::new(Key::Char('-'), Modifiers::control()));
    assert_abs_diff_eq!(
        transform.get().scale,
        raw_target_scale(before, 80.0, 0.005),
        epsilon = 1e-9
    );
}
