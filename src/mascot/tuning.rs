use std::path::Path;

use serde::{Deserialize, Serialize};

// A sinusoidal oscillation term: amp * sin(wave_phase * freq).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Osc {
    pub freq: f32,
    pub amp: f32,
}

impl Osc {
    pub fn eval(&self, phase: f32) -> f32 {
        if phase > 0.0 {
            (phase * self.freq).sin() * self.amp
        } else {
            0.0
        }
    }
}

/// Hand-tuned coefficients for the greeting gesture and head tracking.
///
/// These are art-direction constants calibrated against one specific rat
/// model's proportions. Retargeting to a different asset means re-tuning,
/// which is why they can be overridden from a JSON sidecar instead of
/// requiring a rebuild. The two-phase structure (lift completes before the
/// wave starts) is the only part that is a behavioral contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    // Scaled-time multiplier applied to real dt while greeting.
    pub wave_speed: f32,
    // Scaled seconds the lift phase takes; the wave starts after this.
    pub lift_duration: f32,

    pub shoulder_lift: f32, // z, per unit of lift phase
    pub shoulder_raise: f32, // x, per unit of lift phase
    pub shoulder_osc_z: Osc,
    pub shoulder_osc_y: Osc,
    pub shoulder_osc_x: Osc,

    pub elbow_bend: f32, // y, per unit of lift phase
    pub elbow_osc_y: Osc,
    pub elbow_osc_x: Osc,
    pub elbow_osc_z: Osc,

    pub wrist_palm_turn: f32, // y, per unit of lift phase
    pub wrist_osc_z: Osc,
    pub wrist_osc_x: Osc,

    // Lerp factor per second pulling animated bones back to baseline.
    pub return_rate: f32,

    pub head_turn: f32, // yaw per unit of pointer x
    pub head_tilt: f32, // pitch per unit of pointer y
    pub head_rate: f32, // lerp factor per second toward the head target

    pub bob_frequency: f32,
    pub bob_amplitude: f32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            wave_speed: 3.0,
            lift_duration: 1.0,

            shoulder_lift: 0.4,
            shoulder_raise: 1.3,
            shoulder_osc_z: Osc { freq: 4.0, amp: 0.1 },
            shoulder_osc_y: Osc { freq: 0.5, amp: 0.1 },
            shoulder_osc_x: Osc { freq: 0.3, amp: 0.1 },

            elbow_bend: -1.5,
            elbow_osc_y: Osc { freq: 4.0, amp: 0.2 },
            elbow_osc_x: Osc { freq: 0.5, amp: 0.1 },
            elbow_osc_z: Osc { freq: 0.3, amp: 0.05 },

            wrist_palm_turn: std::f32::consts::PI,
            wrist_osc_z: Osc { freq: 8.0, amp: 0.8 },
            wrist_osc_x: Osc { freq: 6.0, amp: 0.3 },

            return_rate: 2.0,

            head_turn: 0.3,
            head_tilt: 0.2,
            head_rate: 3.0,

            bob_frequency: 0.8,
            bob_amplitude: 0.001,
        }
    }
}

impl WaveTuning {
    // Read overrides from a JSON sidecar. An absent file is the normal case
    // and yields the defaults; a malformed file is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(tuning) => {
                    println!("✅ Loaded wave tuning overrides from {}", path.display());
                    tuning
                }
                Err(e) => {
                    println!("⚠️  Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_coefficients() {
        let t = WaveTuning::default();
        assert_eq!(t.wave_speed, 3.0);
        assert_eq!(t.lift_duration, 1.0);
        assert_eq!(t.shoulder_lift, 0.4);
        assert_eq!(t.shoulder_raise, 1.3);
        assert_eq!(t.elbow_bend, -1.5);
        assert_eq!(t.wrist_palm_turn, std::f32::consts::PI);
        assert_eq!(t.wrist_osc_z, Osc { freq: 8.0, amp: 0.8 });
        assert_eq!(t.return_rate, 2.0);
        assert_eq!(t.head_turn, 0.3);
        assert_eq!(t.head_tilt, 0.2);
        assert_eq!(t.head_rate, 3.0);
    }

    #[test]
    fn oscillation_is_gated_on_positive_phase() {
        let osc = Osc { freq: 4.0, amp: 0.1 };
        assert_eq!(osc.eval(0.0), 0.0);
        assert_eq!(osc.eval(-1.0), 0.0);
        assert!((osc.eval(0.5) - (0.5_f32 * 4.0).sin() * 0.1).abs() < 1e-6);
    }

    #[test]
    fn partial_json_override_keeps_remaining_defaults() {
        let t: WaveTuning = serde_json::from_str(r#"{ "wave_speed": 5.0 }"#).unwrap();
        assert_eq!(t.wave_speed, 5.0);
        assert_eq!(t.lift_duration, 1.0);
        assert_eq!(t.head_turn, 0.3);
    }
}
