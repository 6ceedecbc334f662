use glam::Mat4;

use crate::camera::Camera;
use crate::projection::Projection;

/// Per-frame constant buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PerFrameConstants {
    pub view_projection: [[f32; 4]; 4],
}

impl PerFrameConstants {
    pub fn new(camera: &Camera, projection: &Projection) -> Self {
        Self {
            view_projection: view_projection(camera, projection).to_cols_array_2d(),
        }
    }
}

/// Per-object constant buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PerObjectTransform {
    pub world: [[f32; 4]; 4],
    pub inverse_transpose_world: [[f32; 4]; 4], // For transforming normals
    pub world_view_projection: [[f32; 4]; 4],
}

impl PerObjectTransform {
    pub fn new(world: Mat4, view_projection: Mat4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            inverse_transpose_world: world.inverse().transpose().to_cols_array_2d(),
            world_view_projection: (view_projection * world).to_cols_array_2d(),
        }
    }
}

/// Per-instance vertex data for instanced geometry
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransform {
    pub world: [[f32; 4]; 4],
    pub inverse_transpose_world: [[f32; 4]; 4],
}

impl InstanceTransform {
    pub fn new(world: Mat4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            inverse_transpose_world: world.inverse().transpose().to_cols_array_2d(),
        }
    }
}

/// Eye data for lighting (specular needs the viewer position)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EyeConstants {
    pub position: [f32; 4],
    pub forward: [f32; 4],
}

impl EyeConstants {
    pub fn new(camera: &Camera) -> Self {
        Self {
            position: camera.position_float(),
            forward: camera.forward_direction_float(),
        }
    }
}

/// Combined view-projection, applied to column vectors
pub fn view_projection(camera: &Camera, projection: &Projection) -> Mat4 {
    projection.matrix() * camera.view_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_struct_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<PerFrameConstants>(), 64);
        assert_eq!(std::mem::size_of::<PerObjectTransform>(), 192);
        assert_eq!(std::mem::size_of::<InstanceTransform>(), 128);
        assert_eq!(std::mem::size_of::<EyeConstants>(), 32);
    }

    #[test]
    fn test_eye_constants_from_camera() {
        let camera = Camera::new();
        let eye = EyeConstants::new(&camera);
        assert_eq!(eye.position, [0.0, 5.0, -10.0, 1.0]);
        assert_eq!(eye.forward, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_per_frame_projects_point_ahead_of_camera() {
        let camera = Camera::new();
        let projection = Projection::new(800, 600);
        let frame = PerFrameConstants::new(&camera, &projection);
        let vp = Mat4::from_cols_array_2d(&frame.view_projection);

        // A point straight ahead lands in the middle of the screen
        let clip = vp * Vec4::new(0.0, 5.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_inverse_transpose_of_scaled_world() {
        let world = Mat4::from_scale(Vec3::new(20.0, 1.0, 20.0));
        let instance = InstanceTransform::new(world);
        let it = Mat4::from_cols_array_2d(&instance.inverse_transpose_world);
        let expected = Mat4::from_scale(Vec3::new(1.0 / 20.0, 1.0, 1.0 / 20.0));
        assert!(it.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_per_object_world_view_projection() {
        let world = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let vp = Mat4::from_scale(Vec3::splat(2.0));
        let object = PerObjectTransform::new(world, vp);
        let wvp = Mat4::from_cols_array_2d(&object.world_view_projection);
        assert!(wvp.abs_diff_eq(vp * world, 1e-6));
        assert_eq!(object.world, world.to_cols_array_2d());
    }

    #[test]
    fn test_constants_are_castable_to_bytes() {
        let eye = EyeConstants::new(&Camera::new());
        let bytes: &[u8] = bytemuck::bytes_of(&eye);
        assert_eq!(bytes.len(), 32);
    }
}
