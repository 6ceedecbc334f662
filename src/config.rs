use std::path::Path;

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_POSITION;
use crate::clock::Clock;
use crate::error::ConfigError;
use crate::motion::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED};
use crate::projection::Projection;

/// Tunables for a fly-through session. Every field is optional in the
/// JSON file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyConfig {
    pub start_position: Vec3,
    /// Units per second
    pub move_speed: f32,
    /// Degrees per second
    pub turn_speed: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Frame deltas are capped at `1 / target_framerate`
    pub target_framerate: f32,
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            start_position: DEFAULT_POSITION,
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            fov_y_degrees: Projection::DEFAULT_FOV_Y_DEGREES,
            near: Projection::DEFAULT_NEAR,
            far: Projection::DEFAULT_FAR,
            target_framerate: Clock::DEFAULT_FRAMERATE,
        }
    }
}

impl FlyConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_position.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "start_position {:?} is not finite",
                self.start_position
            )));
        }
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("near", self.near),
            ("target_framerate", self.target_framerate),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(ConfigError::Invalid(format!(
                "far plane {} must lie beyond near plane {}",
                self.far, self.near
            )));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_y_degrees must be within (0, 180), got {}",
                self.fov_y_degrees
            )));
        }
        Ok(())
    }

    pub fn max_time_step(&self) -> f32 {
        1.0 / self.target_framerate
    }
}
