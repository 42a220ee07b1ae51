use remy_mascot::engine::components::skeleton::{Node, Skeleton};
use remy_mascot::engine::components::Transform;
use remy_mascot::mascot::animator::{wave_phases, MascotAnimator};
use remy_mascot::mascot::rig::{
    MascotRig, HEAD_BONE, LEFT_ELBOW_BONE, LEFT_SHOULDER_BONE, LEFT_WRIST_BONE,
    RIGHT_ELBOW_BONE, RIGHT_SHOULDER_BONE, RIGHT_WRIST_BONE,
};
use remy_mascot::mascot::tuning::WaveTuning;

const FRAME_DT: f32 = 1.0 / 60.0;

fn node(name: &str, parent: u32) -> Node {
    Node {
        name: Some(name.to_string()),
        translation: [0.0, 0.5, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0; 3],
        parent,
    }
}

fn rat_skeleton() -> Skeleton {
    Skeleton {
        nodes: vec![
            node("root", u32::MAX),
            node(RIGHT_SHOULDER_BONE, 0),
            node(RIGHT_ELBOW_BONE, 1),
            node(RIGHT_WRIST_BONE, 2),
            node(LEFT_SHOULDER_BONE, 0),
            node(LEFT_ELBOW_BONE, 4),
            node(LEFT_WRIST_BONE, 5),
            node(HEAD_BONE, 0),
        ],
        joint_ids: (0..8).collect(),
        joint_inverse_mats: vec![],
    }
}

/// Pointer enters at t=0 and leaves at 1.2 scaled seconds: the wave phase
/// must have engaged before the leave, and the wave clock resets on the
/// first idle frame after it.
#[test]
fn greeting_engages_wave_then_resets_after_leave() {
    let mut skeleton = rat_skeleton();
    let mut root = Transform::identity();
    let rig = MascotRig::resolve(&mut skeleton);
    let mut anim = MascotAnimator::new(rig, WaveTuning::default(), 0.0);

    anim.pointer_entered();

    // 0.4 real seconds at wave_speed 3 accumulates 1.2 scaled seconds.
    for _ in 0..24 {
        anim.update(FRAME_DT, &mut skeleton, &mut root);
    }

    let elapsed = anim.wave_elapsed();
    assert!((elapsed - 1.2).abs() < 1e-4, "wave clock at {}", elapsed);
    let (lift, wave) = wave_phases(elapsed, 1.0);
    assert_eq!(lift, 1.0, "lift must be complete");
    assert!(wave > 0.0, "wave phase must have engaged");

    anim.pointer_left();
    anim.update(FRAME_DT, &mut skeleton, &mut root);
    assert_eq!(anim.wave_elapsed(), 0.0, "reset on the first idle frame");

    for _ in 0..60 {
        anim.update(FRAME_DT, &mut skeleton, &mut root);
        assert_eq!(anim.wave_elapsed(), 0.0);
    }
}

#[test]
fn greeting_moves_the_right_arm_only() {
    let mut skeleton = rat_skeleton();
    let mut root = Transform::identity();
    let rig = MascotRig::resolve(&mut skeleton);
    let mut anim = MascotAnimator::new(rig, WaveTuning::default(), 0.0);

    let left_shoulder_before = skeleton.nodes[4].rotation;
    let right_shoulder_before = skeleton.nodes[1].rotation;

    anim.pointer_entered();
    for _ in 0..30 {
        anim.update(FRAME_DT, &mut skeleton, &mut root);
    }

    assert_ne!(skeleton.nodes[1].rotation, right_shoulder_before);
    assert_eq!(skeleton.nodes[4].rotation, left_shoulder_before);
}

#[test]
fn head_follows_pointer_and_recenters() {
    let mut skeleton = rat_skeleton();
    let mut root = Transform::identity();
    let rig = MascotRig::resolve(&mut skeleton);
    let mut anim = MascotAnimator::new(rig, WaveTuning::default(), 0.0);

    anim.set_pointer([1.0, 0.0]);
    for _ in 0..300 {
        anim.update(FRAME_DT, &mut skeleton, &mut root);
    }
    let turned = anim.rig().head.as_ref().unwrap().rotation;
    let baseline = anim.rig().head.as_ref().unwrap().baseline();
    assert!((turned[1] - (baseline[1] + 0.3)).abs() < 1e-2);

    anim.set_pointer([0.0, 0.0]);
    for _ in 0..600 {
        anim.update(FRAME_DT, &mut skeleton, &mut root);
    }
    let recentered = anim.rig().head.as_ref().unwrap().rotation;
    assert!((recentered[1] - baseline[1]).abs() < 1e-3);
}

/// An asset with no matching bone names must run indefinitely through hover
/// churn and leave nothing observable but the idle bob.
#[test]
fn unmatched_skeleton_survives_hover_churn() {
    let mut skeleton = Skeleton {
        nodes: vec![node("pelvis", u32::MAX), node("tail_tip", 0)],
        joint_ids: vec![0, 1],
        joint_inverse_mats: vec![],
    };
    let mut root = Transform::identity();
    let rig = MascotRig::resolve(&mut skeleton);
    assert_eq!(rig.bound_count(), 0);

    let mut anim = MascotAnimator::new(rig, WaveTuning::default(), -1.0);
    let before: Vec<_> = skeleton.nodes.iter().map(|n| n.rotation).collect();

    for frame in 0..10_000 {
        match frame % 100 {
            0 => anim.pointer_entered(),
            50 => anim.pointer_left(),
            _ => {}
        }
        anim.set_pointer([(frame % 7) as f32 / 3.0 - 1.0, 0.5]);
        anim.update(FRAME_DT, &mut skeleton, &mut root);
    }

    let after: Vec<_> = skeleton.nodes.iter().map(|n| n.rotation).collect();
    assert_eq!(before, after, "no bone may move");
    assert!((root.get_position()[1] + 1.0).abs() <= 0.001 + 1e-6, "bob stays in band");
}
