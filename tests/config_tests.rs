use canvas_camera::api::{
    CameraConfig, CameraController, CameraHost, InputBehavior, ManualHost, SharedTransform,
};
use canvas_camera::core::SurfaceGeometry;
use canvas_camera::error::CameraError;
use canvas_camera::interaction::{PanInertiaConfig, WheelResolutionPolicy, ZoomConfig};

#[test]
fn config_json_roundtrip_preserves_tuning() {
    let config = CameraConfig::default()
        .with_scale_range(0.1, 10.0)
        .with_inertia_config(PanInertiaConfig {
            smoothing: 0.5,
            friction: 0.85,
            rest_velocity: 0.05,
        })
        .with_keyboard_zoom_step(60.0)
        .with_wheel_resolution(WheelResolutionPolicy::Strict)
        .with_input_behavior(InputBehavior {
            keyboard_zoom: false,
            ..InputBehavior::default()
        });

    let json = config.to_json_pretty().expect("serialize config");
    let restored = CameraConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn nested_partial_json_keeps_defaults_for_missing_fields() {
    let json = r#"{
        "zoom": { "max_scale": 5.0 },
        "inertia": { "friction": 0.8 },
        "input_behavior": { "wheel_pan": false }
    }"#;
    let config = CameraConfig::from_json_str(json).expect("parse config");

    assert_eq!(config.zoom.max_scale, 5.0);
    assert_eq!(config.zoom.min_scale, ZoomConfig::default().min_scale);
    assert_eq!(config.inertia.friction, 0.8);
    assert_eq!(config.inertia.smoothing, PanInertiaConfig::default().smoothing);
    assert!(!config.input_behavior.wheel_pan);
    assert!(config.input_behavior.wheel_zoom);
    assert_eq!(config.keyboard_zoom_step, 80.0);
    assert_eq!(config.wheel_resolution, WheelResolutionPolicy::DeltaMode);
}

#[test]
fn parsed_config_is_validated_by_controller() {
    let config = CameraConfig::from_json_str(r#"{ "zoom": { "smoothing": 0.0 } }"#)
        .expect("parse config");

    let host = ManualHost::new(SurfaceGeometry::new(0.0, 0.0, 320.0, 240.0));
    let err = CameraController::new(
        CameraHost::from_shared(&host),
        SharedTransform::default(),
        config,
    )
    .expect_err("zero smoothing rejected");
    assert!(matches!(err, CameraError::InvalidConfig(_)));
    assert!(format!("{err}").contains("smoothing"));
}

#[test]
fn unknown_policy_value_is_a_serialization_error() {
    let err = CameraConfig::from_json_str(r#"{ "wheel_resolution": "Sometimes" }"#)
        .expect_err("unknown variant");
    assert!(matches!(err, CameraError::Serialization(_)));
}

#[test]
fn accepted_config_is_reported_back() {
    let config = CameraConfig::default().with_scale_range(0.5, 4.0);
    let host = ManualHost::new(SurfaceGeometry::new(0.0, 0.0, 320.0, 240.0));
    let controller = CameraController::new(
        CameraHost::from_shared(&host),
        SharedTransform::default(),
        config,
    )
    .expect("controller init");
    assert_eq!(controller.config(), config);
}
