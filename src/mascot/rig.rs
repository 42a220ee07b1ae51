use crate::engine::components::skeleton::Skeleton;
use crate::engine::utils::math::{euler_from_quat, quat_from_euler};

// Exact node names in the rat asset's skeleton. Matching is case-sensitive;
// an asset exported with different names simply leaves slots unbound.
pub const RIGHT_SHOULDER_BONE: &str = "arm_right_shoulder_2_0142";
pub const RIGHT_ELBOW_BONE: &str = "arm_right_elbow_0145";
pub const RIGHT_WRIST_BONE: &str = "arm_right_wrist_0147";
pub const LEFT_SHOULDER_BONE: &str = "arm_left_shoulder_2_0119";
pub const LEFT_ELBOW_BONE: &str = "arm_left_elbow_0122";
pub const LEFT_WRIST_BONE: &str = "arm_left_wrist_0124";
pub const HEAD_BONE: &str = "head_neck_upper_044";

// One-time arms-down pose, radians, XYZ Euler.
const RIGHT_SHOULDER_POSE: [f32; 3] = [-0.8, -0.5, 0.5];
const RIGHT_ELBOW_POSE: [f32; 3] = [0.0, 1.0, 0.0];
const RIGHT_WRIST_POSE: [f32; 3] = [0.0, 0.0, 0.0];
const LEFT_SHOULDER_POSE: [f32; 3] = [-0.8, 0.5, -0.5];
const LEFT_ELBOW_POSE: [f32; 3] = [0.0, -1.0, 0.0];
const LEFT_WRIST_POSE: [f32; 3] = [0.0, 0.0, 0.0];

/// A resolved bone: an index into the skeleton's node list (the rig never
/// owns node storage), the bone's current Euler rotation, and the immutable
/// rest snapshot taken right after the static pose override.
#[derive(Debug, Clone)]
pub struct RigBone {
    pub node: usize,
    pub rotation: [f32; 3],
    baseline: [f32; 3],
}

impl RigBone {
    pub fn baseline(&self) -> [f32; 3] {
        self.baseline
    }

    pub fn write_to(&self, skeleton: &mut Skeleton) {
        if let Some(node) = skeleton.nodes.get_mut(self.node) {
            node.rotation = quat_from_euler(self.rotation);
        }
    }
}

/// Typed bone set for the mascot: seven optional slots resolved by a single
/// traversal. Any slot may stay unbound; everything downstream checks.
#[derive(Debug, Clone, Default)]
pub struct MascotRig {
    pub right_shoulder: Option<RigBone>,
    pub right_elbow: Option<RigBone>,
    pub right_wrist: Option<RigBone>,
    pub left_shoulder: Option<RigBone>,
    pub left_elbow: Option<RigBone>,
    pub left_wrist: Option<RigBone>,
    pub head: Option<RigBone>,
}

impl MascotRig {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walk the skeleton once, bind known bone names, apply the arms-down
    /// pose to matched limb bones, and capture each bound bone's baseline.
    pub fn resolve(skeleton: &mut Skeleton) -> Self {
        let mut rig = Self::empty();

        for idx in 0..skeleton.nodes.len() {
            let Some(name) = skeleton.nodes[idx].name.clone() else {
                continue;
            };

            match name.as_str() {
                RIGHT_SHOULDER_BONE => {
                    rig.right_shoulder = Some(Self::bind_posed(skeleton, idx, RIGHT_SHOULDER_POSE));
                }
                RIGHT_ELBOW_BONE => {
                    rig.right_elbow = Some(Self::bind_posed(skeleton, idx, RIGHT_ELBOW_POSE));
                }
                RIGHT_WRIST_BONE => {
                    rig.right_wrist = Some(Self::bind_posed(skeleton, idx, RIGHT_WRIST_POSE));
                }
                LEFT_SHOULDER_BONE => {
                    rig.left_shoulder = Some(Self::bind_posed(skeleton, idx, LEFT_SHOULDER_POSE));
                }
                LEFT_ELBOW_BONE => {
                    rig.left_elbow = Some(Self::bind_posed(skeleton, idx, LEFT_ELBOW_POSE));
                }
                LEFT_WRIST_BONE => {
                    rig.left_wrist = Some(Self::bind_posed(skeleton, idx, LEFT_WRIST_POSE));
                }
                HEAD_BONE => {
                    // The head keeps its authored rotation; its baseline is
                    // whatever the asset shipped with.
                    let rotation = euler_from_quat(skeleton.nodes[idx].rotation);
                    rig.head = Some(RigBone {
                        node: idx,
                        rotation,
                        baseline: rotation,
                    });
                }
                _ => {}
            }
        }

        println!("✅ Mascot rig resolved: {}/7 bones bound", rig.bound_count());
        rig
    }

    fn bind_posed(skeleton: &mut Skeleton, idx: usize, pose: [f32; 3]) -> RigBone {
        skeleton.nodes[idx].rotation = quat_from_euler(pose);
        RigBone {
            node: idx,
            rotation: pose,
            baseline: pose,
        }
    }

    pub fn bound_count(&self) -> usize {
        [
            self.right_shoulder.is_some(),
            self.right_elbow.is_some(),
            self.right_wrist.is_some(),
            self.left_shoulder.is_some(),
            self.left_elbow.is_some(),
            self.left_wrist.is_some(),
            self.head.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}
