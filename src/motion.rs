use glam::Vec3;
use log::trace;

use crate::camera::Camera;
use crate::config::FlyConfig;

pub const DEFAULT_MOVE_SPEED: f32 = 4.0;
pub const DEFAULT_TURN_SPEED: f32 = 90.0;

/// Movement intent for one frame, already resolved from whatever input
/// device the host uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (right, up, forward) in the camera's frame, each in -1..=1
    pub const fn velocity(&self) -> (f32, f32, f32) {
        (
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
            Self::to_direction(self.forward, self.backward),
        )
    }

    /// (yaw, pitch) direction; positive yaw turns right, positive pitch looks up
    pub const fn turn(&self) -> (f32, f32) {
        (
            Self::to_direction(self.yaw_right, self.yaw_left),
            Self::to_direction(self.pitch_up, self.pitch_down),
        )
    }

    pub fn is_idle(&self) -> bool {
        self.velocity() == (0.0, 0.0, 0.0) && self.turn() == (0.0, 0.0)
    }
}

/// Turns a [`MovementState`] into camera mutations, scaled by frame time.
///
/// Forward and strafe follow the camera's facing, vertical movement is
/// along world up. Yaw turns about world up, pitch about the camera's
/// current right axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyMotion {
    /// Units per second
    pub move_speed: f32,
    /// Degrees per second
    pub turn_speed: f32,
}

impl FlyMotion {
    pub fn new(move_speed: f32, turn_speed: f32) -> Self {
        Self {
            move_speed,
            turn_speed,
        }
    }

    pub fn from_config(config: &FlyConfig) -> Self {
        Self::new(config.move_speed, config.turn_speed)
    }

    pub fn apply(&self, camera: &mut Camera, movement: &MovementState, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            trace!("skipping camera update for dt {}", dt);
            return;
        }

        let (right, up, forward) = movement.velocity();
        let step = self.move_speed * dt;
        if right != 0.0 || forward != 0.0 {
            camera.translate_local(Vec3::new(right, 0.0, forward) * step);
        }
        if up != 0.0 {
            camera.translate(Vec3::Y * up * step);
        }

        let (yaw, pitch) = movement.turn();
        let angle = self.turn_speed * dt;
        if yaw != 0.0 {
            camera.rotate(Vec3::Y, yaw * angle);
        }
        if pitch != 0.0 {
            // Positive rotation about +X tips forward downward
            camera.rotate(camera.right(), -pitch * angle);
        }
    }
}

impl Default for FlyMotion {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED)
    }
}
