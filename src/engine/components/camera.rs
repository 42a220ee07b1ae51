use crate::engine::utils::math::{mat4x4_look_at, mat4x4_perspective, Mat4x4};

// Fixed-framing perspective camera. Position and target are chosen once at
// bootstrap to frame the mascot; only the aspect ratio varies with the window.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: [f32; 3], target: [f32; 3]) -> Self {
        Self {
            position,
            target,
            fov_y_radians: (75.0_f32).to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4x4 {
        mat4x4_look_at(self.position, self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4x4 {
        mat4x4_perspective(self.fov_y_radians, aspect_ratio, self.near, self.far)
    }
}
