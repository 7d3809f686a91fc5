//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables,
//! and that a loaded config drives frame setup end to end.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use valor::{AppConfig, Camera, FrameTransforms, RotationMode, Scene};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("valor_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VALOR_WINDOW__TITLE", "Test From Env");
    std::env::set_var("VALOR_CAMERA__FOV", "30.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    assert_eq!(config.camera.fov, 30.0);
    std::env::remove_var("VALOR_WINDOW__TITLE");
    std::env::remove_var("VALOR_CAMERA__FOV");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists(), "run from the workspace root");

    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.camera.yaw, builtin.camera.yaw);
    assert_eq!(config.scene.positions, builtin.scene.positions);
    assert_eq!(config.scene.rotation_mode, RotationMode::Quaternion);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[camera]\nfov = 45.0\nnear = 0.1\n").unwrap();
    fs::write(dir.join("user.toml"), "[camera]\nfov = 60.0\n\n[scene]\nrotation_mode = \"legacy\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.camera.fov, 60.0);
    assert_eq!(config.camera.near, 0.1);
    assert_eq!(config.scene.rotation_mode, RotationMode::Legacy);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_degenerate_planes_pass_through_to_frame() {
    let dir = scratch_dir("degenerate");
    fs::write(dir.join("default.toml"), "[camera]\nnear = 5.0\nfar = 5.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    let frame = FrameTransforms::build(
        &Camera::from_config(&config.camera),
        &Scene::from_config(&config.scene),
        config.window.aspect(),
    );
    assert_eq!(frame.non_finite_draws(), frame.draws.len());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_inverted_camera_limits_from_env() {
    std::env::set_var("VALOR_CAMERA__PITCH_LIMIT", "-5.0");
    std::env::set_var("VALOR_CAMERA__MIN_FOV", "50.0");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("VALOR_CAMERA__PITCH_LIMIT");
    std::env::remove_var("VALOR_CAMERA__MIN_FOV");
    assert_eq!(config.camera.pitch_limit, -5.0);

    let mut camera = Camera::from_config(&config.camera);
    camera.look(0.0, 1_000.0);
    camera.zoom(1.0);
    assert_eq!(camera.pitch(), 5.0);
    assert_eq!(camera.fov(), 45.0);

    let frame = FrameTransforms::build(&camera, &Scene::from_config(&config.scene), config.window.aspect());
    assert_eq!(frame.non_finite_draws(), 0);
}
