use glam::{Mat4, Quat, Vec3, Vec4};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Position a freshly constructed camera starts at
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 5.0, -10.0);

/// Facing of the identity orientation
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Up direction used for every view matrix (no roll)
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Distance along the forward ray of the look-at focus point.
/// Any positive value yields the same view matrix.
pub const DEFAULT_FOCUS_DISTANCE: f32 = 2.0;

/// Free-fly viewpoint in a left-handed world.
///
/// Orientation is a unit quaternion rotating [`WORLD_FORWARD`] onto the
/// current facing. Rotations compose extrinsically: each call to
/// [`Camera::rotate`] is applied in world space on top of the accumulated
/// orientation (`rotation * orientation`). The up vector never changes, so
/// pitching straight up or down yields a degenerate view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Quat,
}

/// Plain snapshot of a camera, suitable for saving and restoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraState {
    pub fn to_json(&self) -> Result<String, CameraError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CameraError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Camera {
    /// Camera at [`DEFAULT_POSITION`] facing +Z
    pub fn new() -> Self {
        Self::with_position(DEFAULT_POSITION)
    }

    /// Camera at `position` facing +Z
    pub fn with_position(position: Vec3) -> Self {
        debug!("camera created at {:?}", position);
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Rebuild a camera from a snapshot.
    ///
    /// Non-finite values and zero-length quaternions are rejected. The
    /// orientation is always renormalized, even when it is only slightly off.
    pub fn from_state(state: CameraState) -> Result<Self, CameraError> {
        if !state.position.is_finite() {
            return Err(CameraError::InvalidState(format!(
                "position {:?} is not finite",
                state.position
            )));
        }
        if !state.orientation.is_finite() {
            return Err(CameraError::InvalidState(format!(
                "orientation {:?} is not finite",
                state.orientation
            )));
        }
        if state.orientation.length_squared() <= f32::EPSILON {
            return Err(CameraError::InvalidState(
                "orientation has zero length".to_string(),
            ));
        }

        if !state.orientation.is_normalized() {
            warn!(
                "restored orientation has length {}, renormalizing",
                state.orientation.length()
            );
        }
        let orientation = state.orientation.normalize();

        debug!(
            "camera restored at {:?} with orientation {:?}",
            state.position, orientation
        );
        Ok(Self {
            position: state.position,
            orientation,
        })
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            orientation: self.orientation,
        }
    }

    // === Mutators ===

    /// Move by `delta` in world space
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Move by `delta` expressed in the camera's own frame
    /// (+X right, +Y up, +Z forward)
    pub fn translate_local(&mut self, delta: Vec3) {
        self.position += self.orientation * delta;
    }

    /// Rotate by `angle_degrees` about the world-space `axis`.
    ///
    /// The axis need not be normalized. A zero-length or non-finite axis,
    /// or a non-finite angle, leaves the orientation untouched.
    pub fn rotate(&mut self, axis: Vec3, angle_degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            trace!("ignoring rotation about degenerate axis {:?}", axis);
            return;
        };
        if !angle_degrees.is_finite() {
            trace!("ignoring rotation by non-finite angle {}", angle_degrees);
            return;
        }

        let rotation = Quat::from_axis_angle(axis, angle_degrees.to_radians());
        self.orientation = (rotation * self.orientation).normalize();
    }

    // === Accessors ===

    /// World-to-view matrix for the current frame
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix_with_focus(DEFAULT_FOCUS_DISTANCE)
    }

    /// View matrix computed with the focus point `focus_distance` units
    /// ahead. Only the magnitude is used; zero or non-finite distances fall
    /// back to [`DEFAULT_FOCUS_DISTANCE`].
    pub fn view_matrix_with_focus(&self, focus_distance: f32) -> Mat4 {
        let focus_distance = if focus_distance.is_finite() && focus_distance != 0.0 {
            focus_distance.abs()
        } else {
            trace!("focus distance {} replaced by default", focus_distance);
            DEFAULT_FOCUS_DISTANCE
        };
        let focus_point = self.position + self.forward() * focus_distance;
        Mat4::look_at_lh(self.position, focus_point, WORLD_UP)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position as a homogeneous point (w = 1)
    pub fn position_vector(&self) -> Vec4 {
        self.position.extend(1.0)
    }

    pub fn position_float(&self) -> [f32; 4] {
        self.position_vector().to_array()
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * WORLD_FORWARD
    }

    /// Camera's local +X in world space
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up_vector(&self) -> Vec3 {
        WORLD_UP
    }

    /// Forward direction as a homogeneous direction (w = 0)
    pub fn forward_direction_float(&self) -> [f32; 4] {
        self.forward().extend(0.0).to_array()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
