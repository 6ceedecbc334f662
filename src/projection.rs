use glam::Mat4;

use crate::config::FlyConfig;

/// Left-handed perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 100.0;

    /// 45 degree projection for a `width` x `height` viewport
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y_degrees: Self::DEFAULT_FOV_Y_DEGREES,
            aspect: 1.0,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        };
        projection.set_viewport(width, height);
        projection
    }

    pub fn from_config(config: &FlyConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y_degrees: config.fov_y_degrees,
            aspect: 1.0,
            near: config.near,
            far: config.far,
        };
        projection.set_viewport(width, height);
        projection
    }

    /// Recompute the aspect ratio. A zero-sized viewport (minimized window)
    /// keeps the previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_projection_aspect() {
        let projection = Projection::new(800, 600);
        assert!((projection.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(projection.fov_y_degrees, 45.0);
    }

    #[test]
    fn test_zero_viewport_keeps_aspect() {
        let mut projection = Projection::new(1280, 720);
        let aspect = projection.aspect;
        projection.set_viewport(1280, 0);
        assert_eq!(projection.aspect, aspect);
        projection.set_viewport(0, 720);
        assert_eq!(projection.aspect, aspect);
    }

    #[test]
    fn test_depth_range_maps_to_unit_interval() {
        let projection = Projection::new(800, 600);
        let m = projection.matrix();

        let near = m * Vec4::new(0.0, 0.0, projection.near, 1.0);
        let far = m * Vec4::new(0.0, 0.0, projection.far, 1.0);

        // Left-handed, depth 0..1 in front of the camera
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }
}
