use std::path::PathBuf;

use flycam::{Camera, ConfigError, FlyConfig, FlyMotion, Projection};
use glam::Vec3;

#[cfg(test)]
mod config_file_tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flycam-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_file() {
        let path = temp_config(
            "load",
            r#"{
                "start_position": [1.0, 2.0, 3.0],
                "move_speed": 10.0,
                "fov_y_degrees": 60.0,
                "target_framerate": 60.0
            }"#,
        );

        let config = FlyConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.start_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.move_speed, 10.0);
        assert!((config.max_time_step() - 1.0 / 60.0).abs() < 1e-6);

        let camera = Camera::with_position(config.start_position);
        assert_eq!(camera.position_float(), [1.0, 2.0, 3.0, 1.0]);

        let projection = Projection::from_config(&config, 1920, 1080);
        assert_eq!(projection.fov_y_degrees, 60.0);
        assert_eq!(FlyMotion::from_config(&config).move_speed, 10.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("flycam-definitely-missing.json");
        let err = FlyConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let path = temp_config("invalid", r#"{ "turn_speed": -1.0 }"#);
        let result = FlyConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = FlyConfig {
            move_speed: 2.5,
            near: 0.5,
            far: 500.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(FlyConfig::from_json(&json).unwrap(), config);
    }
}
