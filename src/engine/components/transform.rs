use crate::engine::utils::math::{
    mat4x4_mul, mat4x4_rot_x, mat4x4_rot_y, mat4x4_rot_z, mat4x4_scale, mat4x4_translate, Mat4x4,
};
use serde::{Deserialize, Serialize};

// Transform component for 3D objects - component-based approach
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Transform {
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,

    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,

    // Rotation components (Euler angles in radians)
    pub rotation_x: f32, // pitch
    pub rotation_y: f32, // yaw
    pub rotation_z: f32, // roll

    // Cached matrix (not serialized, computed on demand)
    #[serde(skip)]
    cached_matrix: Option<Mat4x4>,
    #[serde(skip)]
    matrix_dirty: bool,
}

impl Transform {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position_x: x,
            position_y: y,
            position_z: z,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            cached_matrix: None,
            matrix_dirty: true,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Get the transformation matrix (cached for performance)
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn get_matrix(&mut self) -> &Mat4x4 {
        if self.matrix_dirty || self.cached_matrix.is_none() {
            self.cached_matrix = Some(self.compute_matrix());
            self.matrix_dirty = false;
        }

        self.cached_matrix.as_ref().unwrap()
    }

    pub fn compute_matrix(&self) -> Mat4x4 {
        let scale_matrix = mat4x4_scale(self.scale_x, self.scale_y, self.scale_z);
        let rotation_x = mat4x4_rot_x(self.rotation_x);
        let rotation_y = mat4x4_rot_y(self.rotation_y);
        let rotation_z = mat4x4_rot_z(self.rotation_z);
        let translation_matrix =
            mat4x4_translate(self.position_x, self.position_y, self.position_z);

        let rotation_matrix = mat4x4_mul(mat4x4_mul(rotation_y, rotation_x), rotation_z);
        let transform_matrix = mat4x4_mul(rotation_matrix, scale_matrix);
        mat4x4_mul(translation_matrix, transform_matrix)
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position_x = x;
        self.position_y = y;
        self.position_z = z;
        self.matrix_dirty = true;
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale_x = x;
        self.scale_y = y;
        self.scale_z = z;
        self.matrix_dirty = true;
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.position_y = y;
        self.matrix_dirty = true;
    }

    pub fn get_position(&self) -> [f32; 3] {
        [self.position_x, self.position_y, self.position_z]
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position_x += x;
        self.position_y += y;
        self.position_z += z;
        self.matrix_dirty = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
