//! Configuration and input tests
//!
//! Tests for:
//! - LocomotionConfig defaults, JSON overrides and validation
//! - InputState held/pressed tracking, key repeat and aliases

use strider::config::{JumpTrigger, LocomotionConfig, TurnSmoothing};
use strider::errors::LocomotionError;
use strider::input::{ButtonState, InputState, Key, KeyBindings, LogicalInput};

const EPSILON: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// LocomotionConfig
// ============================================================================

#[test]
fn config_defaults() {
    let c = LocomotionConfig::default();
    assert!(approx(c.move_speed, 4.0));
    assert!(approx(c.gravity, 19.6));
    assert!(approx(c.jump_impulse, 9.0));
    assert!(approx(c.ground_check_distance, 0.15));
    assert!(approx(c.probe_lift, 0.1));
    assert!(approx(c.state_fade, 0.2));
    assert!(approx(c.trigger_fade, 0.1));
    assert!(approx(c.return_fade, 0.2));
    assert_eq!(c.turn_smoothing, TurnSmoothing::PerFrame { factor: 0.1 });
    assert_eq!(c.jump_trigger, JumpTrigger::Edge);
    assert!(c.validate().is_ok());
}

#[test]
fn config_empty_json_is_default() {
    let c = LocomotionConfig::from_json_str("{}").unwrap();
    assert_eq!(c, LocomotionConfig::default());
}

#[test]
fn config_partial_override() {
    let c = LocomotionConfig::from_json_str(
        r#"{
            "move_speed": 6.5,
            "jump_trigger": "level",
            "turn_smoothing": { "mode": "frame_rate_independent", "factor": 0.2, "reference_fps": 30.0 }
        }"#,
    )
    .unwrap();

    assert!(approx(c.move_speed, 6.5));
    assert!(approx(c.gravity, 19.6));
    assert_eq!(c.jump_trigger, JumpTrigger::Level);
    assert_eq!(
        c.turn_smoothing,
        TurnSmoothing::FrameRateIndependent {
            factor: 0.2,
            reference_fps: 30.0
        }
    );
}

#[test]
fn config_key_binding_override_keeps_other_defaults() {
    let c = LocomotionConfig::from_json_str(r#"{ "key_bindings": { "jump": ["W"] } }"#).unwrap();
    assert_eq!(c.key_bindings.jump, vec![Key::W]);
    assert_eq!(c.key_bindings.punch, KeyBindings::default().punch);
}

#[test]
fn config_rejects_out_of_range_values() {
    let err = LocomotionConfig::from_json_str(r#"{ "gravity": 0.0 }"#).unwrap_err();
    assert!(matches!(err, LocomotionError::InvalidConfig { field: "gravity", .. }));

    let err = LocomotionConfig::from_json_str(r#"{ "state_fade": -0.1 }"#).unwrap_err();
    assert!(matches!(err, LocomotionError::InvalidConfig { field: "state_fade", .. }));

    let err = LocomotionConfig::from_json_str(
        r#"{ "turn_smoothing": { "mode": "per_frame", "factor": 1.5 } }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LocomotionError::InvalidConfig {
            field: "turn_smoothing.factor",
            ..
        }
    ));
}

#[test]
fn config_rejects_malformed_json() {
    let err = LocomotionConfig::from_json_str("{ move_speed: ").unwrap_err();
    assert!(matches!(err, LocomotionError::Json(_)));
}

#[test]
fn config_missing_file_is_io_error() {
    let err = LocomotionConfig::from_json_file("/nonexistent/strider.json").unwrap_err();
    assert!(matches!(err, LocomotionError::Io(_)));
}

#[test]
fn config_serialises_round_trip() {
    let config = LocomotionConfig {
        jump_trigger: JumpTrigger::Level,
        ..LocomotionConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(LocomotionConfig::from_json_str(&json).unwrap(), config);
}

// ============================================================================
// InputState
// ============================================================================

#[test]
fn input_press_is_held_and_pressed() {
    let mut input = InputState::new();
    input.inject_key(Key::W, ButtonState::Pressed);

    assert!(input.get_key(Key::W));
    assert!(input.get_key_down(Key::W));
    assert!(input.held(LogicalInput::Forward));
    assert!(input.pressed(LogicalInput::Forward));

    input.start_frame();
    assert!(input.held(LogicalInput::Forward));
    assert!(!input.pressed(LogicalInput::Forward));
}

#[test]
fn input_repeat_press_is_not_a_new_edge() {
    let mut input = InputState::new();
    input.inject_key(Key::Space, ButtonState::Pressed);
    input.start_frame();

    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(!input.pressed(LogicalInput::Jump));
    assert!(input.held(LogicalInput::Jump));
}

#[test]
fn input_tap_within_one_frame_still_registers() {
    let mut input = InputState::new();
    input.inject_key(Key::P, ButtonState::Pressed);
    input.inject_key(Key::P, ButtonState::Released);

    assert!(input.pressed(LogicalInput::Punch));
    assert!(!input.held(LogicalInput::Punch));
    assert!(input.get_key_up(Key::P));
}

#[test]
fn input_aliases_share_logical_input() {
    let mut input = InputState::new();
    input.inject_key(Key::ArrowLeft, ButtonState::Pressed);
    assert!(input.held(LogicalInput::Left));

    input.inject_key(Key::A, ButtonState::Pressed);
    input.inject_key(Key::ArrowLeft, ButtonState::Released);
    assert!(input.held(LogicalInput::Left));
}

#[test]
fn input_release_all() {
    let mut input = InputState::new();
    input.inject_key(Key::W, ButtonState::Pressed);
    input.inject_key(Key::D, ButtonState::Pressed);

    input.release_all();
    assert!(!input.held(LogicalInput::Forward));
    assert!(!input.held(LogicalInput::Right));
    assert!(input.get_key_up(Key::W));
}

#[test]
fn input_custom_bindings() {
    let bindings = KeyBindings {
        jump: vec![Key::ShiftLeft],
        ..KeyBindings::default()
    };
    let mut input = InputState::with_bindings(bindings);

    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(!input.pressed(LogicalInput::Jump));

    input.inject_key(Key::ShiftLeft, ButtonState::Pressed);
    assert!(input.pressed(LogicalInput::Jump));
}
