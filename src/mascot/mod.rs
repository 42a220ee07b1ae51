pub mod animator;
pub mod pointer;
pub mod rig;
pub mod tuning;

pub use animator::MascotAnimator;
pub use rig::MascotRig;
pub use tuning::WaveTuning;

use glow::HasContext;

use crate::engine::components::skeleton::{node_world_txfm, Skeleton};
use crate::engine::components::{Material, Mesh, Transform};
use crate::engine::utils::gltf_loader_utils::MascotAsset;
use crate::engine::utils::math::mat4x4_identity;

// Must match the bone array size in the skinning vertex shader.
const MAX_BONES: usize = 64;

// How large the mascot appears: the model is scaled so its longest bounding
// dimension spans this many world units, then centered and dropped slightly.
const FRAME_SIZE: f32 = 8.0;
const FLOOR_DROP: f32 = 1.0;

/// The loaded mascot: GPU mesh and material, the skeleton driving it, and
/// the procedural animator that poses the skeleton each frame.
pub struct Mascot {
    pub transform: Transform,
    pub mesh: Mesh,
    pub material: Material,
    pub skeleton: Skeleton,
    pub animator: MascotAnimator,
}

impl Mascot {
    /// Fit the loaded asset to frame, resolve its bone rig (which also
    /// applies the arms-down pose and captures baselines), and wire up the
    /// animator.
    pub fn from_asset(asset: MascotAsset, tuning: WaveTuning) -> Self {
        let MascotAsset { mesh, material, skeleton } = asset;
        let mut skeleton = skeleton;

        let mut transform = Transform::identity();
        let max_dim = mesh.max_dimension();
        let scale = if max_dim > 0.0 { FRAME_SIZE / max_dim } else { 1.0 };
        transform.set_scale(scale, scale, scale);

        let center = mesh.center();
        transform.set_position(
            -center[0] * scale,
            -center[1] * scale - FLOOR_DROP,
            -center[2] * scale,
        );
        let rest_y = transform.get_position()[1];

        let rig = MascotRig::resolve(&mut skeleton);
        let animator = MascotAnimator::new(rig, tuning, rest_y);

        Self {
            transform,
            mesh,
            material,
            skeleton,
            animator,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animator
            .update(dt, &mut self.skeleton, &mut self.transform);
    }

    pub fn render(&mut self, gl: &glow::Context, shader_program: glow::Program) {
        self.material.bind(gl);

        unsafe {
            let world_txfm = *self.transform.get_matrix();

            gl.bind_vertex_array(Some(self.mesh.vao));

            let mut bone_matrices = vec![mat4x4_identity(); MAX_BONES];
            let mut inverse_bone_matrices = vec![mat4x4_identity(); MAX_BONES];

            for (i, &joint_id) in self.skeleton.joint_ids.iter().enumerate() {
                if i >= MAX_BONES {
                    break;
                }
                if let Some(inv) = self.skeleton.joint_inverse_mats.get(i) {
                    inverse_bone_matrices[i] = *inv;
                }
                bone_matrices[i] = node_world_txfm(&self.skeleton.nodes, joint_id as usize);
            }

            if let Some(loc) = gl.get_uniform_location(shader_program, "world_txfm") {
                gl.uniform_matrix_4_f32_slice(Some(&loc), true, &world_txfm);
            }

            let flat_inverse: Vec<f32> = inverse_bone_matrices
                .iter()
                .flatten()
                .copied()
                .collect();
            let flat_bones: Vec<f32> = bone_matrices.iter().flatten().copied().collect();

            if let Some(loc) = gl.get_uniform_location(shader_program, "inverse_bone_matrix") {
                gl.uniform_matrix_4_f32_slice(Some(&loc), true, &flat_inverse);
            }
            if let Some(loc) = gl.get_uniform_location(shader_program, "bone_matrix") {
                gl.uniform_matrix_4_f32_slice(Some(&loc), true, &flat_bones);
            }
            if let Some(loc) = gl.get_uniform_location(shader_program, "hasTexture") {
                gl.uniform_1_i32(Some(&loc), self.material.has_texture() as i32);
            }

            gl.draw_elements(
                glow::TRIANGLES,
                self.mesh.index_count as i32,
                glow::UNSIGNED_INT,
                0
            );
        }
    }

    pub fn cleanup(&self, gl: &glow::Context) {
        self.mesh.cleanup(gl);
        self.material.cleanup(gl);
    }
}
