use crate::engine::components::skeleton::Skeleton;
use crate::engine::components::transform::Transform;
use crate::engine::utils::math::lerp;
use crate::mascot::rig::MascotRig;
use crate::mascot::tuning::WaveTuning;

/// Split accumulated scaled wave time into its two phases. The lift phase
/// ramps 0..lift_duration and must complete before the wave phase starts.
pub fn wave_phases(wave_time: f32, lift_duration: f32) -> (f32, f32) {
    let lift = wave_time.min(lift_duration);
    let wave = (wave_time - lift_duration).max(0.0);
    (lift, wave)
}

/// Procedural animation driver for the mascot.
///
/// Two states: idle and greeting, toggled by pointer enter/leave. While
/// greeting, the right arm plays a two-phase gesture (lift, then wave); while
/// idle, animated bones settle back to their captured baselines. Head
/// tracking and the idle bob run in both states. Every bone access is
/// optional: an asset with unexpected bone names degrades to just the bob.
pub struct MascotAnimator {
    hovered: bool,
    wave_time: f32,
    pointer: [f32; 2],
    elapsed: f32,
    rest_y: f32,
    rig: MascotRig,
    tuning: WaveTuning,
}

impl MascotAnimator {
    pub fn new(rig: MascotRig, tuning: WaveTuning, rest_y: f32) -> Self {
        Self {
            hovered: false,
            wave_time: 0.0,
            pointer: [0.0, 0.0],
            elapsed: 0.0,
            rest_y,
            rig,
            tuning,
        }
    }

    pub fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
    }

    pub fn set_pointer(&mut self, target: [f32; 2]) {
        self.pointer = target;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn wave_elapsed(&self) -> f32 {
        self.wave_time
    }

    pub fn pointer(&self) -> [f32; 2] {
        self.pointer
    }

    pub fn rig(&self) -> &MascotRig {
        &self.rig
    }

    /// Advance one frame by `dt` real seconds and write the resulting bone
    /// rotations into the skeleton and the bob offset into the root transform.
    pub fn update(&mut self, dt: f32, skeleton: &mut Skeleton, root: &mut Transform) {
        self.elapsed += dt;

        if self.hovered {
            self.wave_time += dt * self.tuning.wave_speed;
            self.animate_greeting(skeleton);
        } else {
            self.settle_toward_baseline(dt, skeleton);
            if self.wave_time > 0.0 {
                // One-shot cleanup on the first idle frame after a greeting.
                self.wave_time = 0.0;
            }
        }

        self.track_head(dt, skeleton);

        // Idle bob: a near-imperceptible breathing motion, always active.
        let bob = (self.elapsed * self.tuning.bob_frequency).sin() * self.tuning.bob_amplitude;
        root.set_position_y(self.rest_y + bob);
    }

    fn animate_greeting(&mut self, skeleton: &mut Skeleton) {
        let (lift, wave) = wave_phases(self.wave_time, self.tuning.lift_duration);
        let t = &self.tuning;

        if let Some(shoulder) = &mut self.rig.right_shoulder {
            let base = shoulder.baseline();
            shoulder.rotation = [
                base[0] + lift * t.shoulder_raise + t.shoulder_osc_x.eval(wave),
                base[1] + t.shoulder_osc_y.eval(wave),
                base[2] + lift * t.shoulder_lift + t.shoulder_osc_z.eval(wave),
            ];
            shoulder.write_to(skeleton);
        }

        if let Some(elbow) = &mut self.rig.right_elbow {
            let base = elbow.baseline();
            elbow.rotation = [
                base[0] + t.elbow_osc_x.eval(wave),
                base[1] + lift * t.elbow_bend + t.elbow_osc_y.eval(wave),
                base[2] + t.elbow_osc_z.eval(wave),
            ];
            elbow.write_to(skeleton);
        }

        if let Some(wrist) = &mut self.rig.right_wrist {
            let base = wrist.baseline();
            wrist.rotation = [
                base[0] + t.wrist_osc_x.eval(wave),
                base[1] + lift * t.wrist_palm_turn,
                base[2] + t.wrist_osc_z.eval(wave),
            ];
            wrist.write_to(skeleton);
        }
    }

    fn settle_toward_baseline(&mut self, dt: f32, skeleton: &mut Skeleton) {
        // Framerate-dependent exponential smoothing, clamped so a long frame
        // can land on the target but never overshoot it.
        let factor = (dt * self.tuning.return_rate).min(1.0);

        for bone in [
            &mut self.rig.right_shoulder,
            &mut self.rig.right_elbow,
            &mut self.rig.right_wrist,
        ]
        .into_iter()
        .flatten()
        {
            let base = bone.baseline();
            for i in 0..3 {
                bone.rotation[i] = lerp(bone.rotation[i], base[i], factor);
            }
            bone.write_to(skeleton);
        }
    }

    fn track_head(&mut self, dt: f32, skeleton: &mut Skeleton) {
        let Some(head) = &mut self.rig.head else {
            return;
        };

        let base = head.baseline();
        let target_x = base[0] + self.pointer[1] * self.tuning.head_tilt;
        let target_y = base[1] + self.pointer[0] * self.tuning.head_turn;

        let factor = (dt * self.tuning.head_rate).min(1.0);
        head.rotation[0] = lerp(head.rotation[0], target_x, factor);
        head.rotation[1] = lerp(head.rotation[1], target_y, factor);
        head.write_to(skeleton);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::components::skeleton::Node;
    use crate::mascot::rig::{
        HEAD_BONE, RIGHT_ELBOW_BONE, RIGHT_SHOULDER_BONE, RIGHT_WRIST_BONE,
    };

    fn node(name: &str) -> Node {
        Node {
            name: Some(name.to_string()),
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            parent: u32::MAX,
        }
    }

    fn arm_skeleton() -> Skeleton {
        Skeleton {
            nodes: vec![
                node(RIGHT_SHOULDER_BONE),
                node(RIGHT_ELBOW_BONE),
                node(RIGHT_WRIST_BONE),
                node(HEAD_BONE),
            ],
            joint_ids: vec![],
            joint_inverse_mats: vec![],
        }
    }

    fn animator(skeleton: &mut Skeleton) -> MascotAnimator {
        let rig = MascotRig::resolve(skeleton);
        MascotAnimator::new(rig, WaveTuning::default(), 0.0)
    }

    #[test]
    fn wave_phase_waits_for_lift_to_complete() {
        assert_eq!(wave_phases(0.0, 1.0), (0.0, 0.0));
        assert_eq!(wave_phases(0.5, 1.0), (0.5, 0.0));
        assert_eq!(wave_phases(1.0, 1.0), (1.0, 0.0));
        let (lift, wave) = wave_phases(1.7, 1.0);
        assert_eq!(lift, 1.0);
        assert!((wave - 0.7).abs() < 1e-6);
    }

    #[test]
    fn lift_phase_is_monotone_and_bounded_while_greeting() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        anim.pointer_entered();
        let mut prev_lift = 0.0;
        for _ in 0..120 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
            let (lift, _) = wave_phases(anim.wave_elapsed(), 1.0);
            assert!(lift >= prev_lift);
            assert!((0.0..=1.0).contains(&lift));
            prev_lift = lift;
        }
        assert_eq!(prev_lift, 1.0);
    }

    #[test]
    fn wave_elapsed_accumulates_scaled_time() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        anim.pointer_entered();
        anim.update(0.1, &mut skeleton, &mut root);
        assert!((anim.wave_elapsed() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn wave_time_resets_once_on_first_idle_frame() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        anim.pointer_entered();
        for _ in 0..30 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }
        assert!(anim.wave_elapsed() > 0.0);

        anim.pointer_left();
        anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        assert_eq!(anim.wave_elapsed(), 0.0);

        // Stays zero on every later idle frame.
        for _ in 0..10 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
            assert_eq!(anim.wave_elapsed(), 0.0);
        }
    }

    #[test]
    fn hover_resumes_accumulation_without_reset() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        anim.pointer_entered();
        anim.update(0.1, &mut skeleton, &mut root);
        let before = anim.wave_elapsed();

        // Enter again without leaving; nothing resets.
        anim.pointer_entered();
        anim.update(0.1, &mut skeleton, &mut root);
        assert!(anim.wave_elapsed() > before);
    }

    #[test]
    fn centered_pointer_returns_head_to_baseline() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        // Look off to the side first.
        anim.set_pointer([1.0, -1.0]);
        for _ in 0..120 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }
        let off_center = anim.rig().head.as_ref().unwrap().rotation;
        assert!(off_center[1].abs() > 0.1);

        // Centering the pointer pulls the head back to baseline.
        anim.set_pointer([0.0, 0.0]);
        for _ in 0..600 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }
        let head = anim.rig().head.as_ref().unwrap();
        let base = head.baseline();
        assert!((head.rotation[0] - base[0]).abs() < 1e-3);
        assert!((head.rotation[1] - base[1]).abs() < 1e-3);
    }

    #[test]
    fn repeated_identical_pointer_moves_are_idempotent() {
        let mut skeleton = arm_skeleton();
        let mut anim = animator(&mut skeleton);

        anim.set_pointer([0.25, -0.5]);
        let first = anim.pointer();
        anim.set_pointer([0.25, -0.5]);
        anim.set_pointer([0.25, -0.5]);
        assert_eq!(anim.pointer(), first);
    }

    #[test]
    fn idle_settles_arm_back_to_baseline() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);

        anim.pointer_entered();
        for _ in 0..90 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }
        anim.pointer_left();
        for _ in 0..600 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }

        for bone in [
            anim.rig().right_shoulder.as_ref().unwrap(),
            anim.rig().right_elbow.as_ref().unwrap(),
            anim.rig().right_wrist.as_ref().unwrap(),
        ] {
            let base = bone.baseline();
            for i in 0..3 {
                assert!(
                    (bone.rotation[i] - base[i]).abs() < 1e-3,
                    "axis {} did not settle",
                    i
                );
            }
        }
    }

    #[test]
    fn missing_bones_degrade_to_bob_only() {
        let mut skeleton = Skeleton {
            nodes: vec![node("some_unrelated_bone")],
            joint_ids: vec![],
            joint_inverse_mats: vec![],
        };
        let mut root = Transform::identity();
        let mut anim = animator(&mut skeleton);
        assert_eq!(anim.rig().bound_count(), 0);

        anim.pointer_entered();
        anim.set_pointer([0.9, 0.9]);
        for _ in 0..1000 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }
        anim.pointer_left();
        for _ in 0..1000 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
        }

        // Only the bob moved anything.
        assert_ne!(root.get_position()[1], 0.0);
        assert_eq!(skeleton.nodes[0].rotation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn bob_oscillates_around_rest_height() {
        let mut skeleton = arm_skeleton();
        let mut root = Transform::identity();
        let rig = MascotRig::resolve(&mut skeleton);
        let mut anim = MascotAnimator::new(rig, WaveTuning::default(), -1.0);

        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for _ in 0..600 {
            anim.update(1.0 / 60.0, &mut skeleton, &mut root);
            let y = root.get_position()[1];
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        assert!(min_y >= -1.0 - 0.001 - 1e-6);
        assert!(max_y <= -1.0 + 0.001 + 1e-6);
        assert!(max_y > min_y);
    }
}
