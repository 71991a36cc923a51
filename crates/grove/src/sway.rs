//! Idle motion curves. Everything is a function of elapsed seconds so the
//! animation can be scrubbed or tested without a clock.

use bevy::math::{EulerRot, Quat, Vec3};

use crate::config::*;

/// Slow yaw of the whole tree.
pub fn tree_yaw(elapsed: f32) -> f32 {
    (elapsed * TREE_SWAY_RATE).sin() * TREE_SWAY_AMPLITUDE
}

/// (pitch, roll) of frond `branch_index`; neighbours are slightly out of phase.
pub fn frond_sway(elapsed: f32, branch_index: usize) -> (f32, f32) {
    let phase = branch_index as f32 * FROND_PHASE_STEP;
    (
        (elapsed * FROND_PITCH_RATE + phase).sin() * FROND_PITCH_AMPLITUDE,
        (elapsed * FROND_ROLL_RATE + phase).cos() * FROND_ROLL_AMPLITUDE,
    )
}

/// (pitch, roll) of date `date_index` on its stalk.
pub fn fruit_sway(elapsed: f32, date_index: usize) -> (f32, f32) {
    let phase = date_index as f32;
    (
        (elapsed * FRUIT_PITCH_RATE + phase).sin() * FRUIT_PITCH_AMPLITUDE,
        (elapsed * FRUIT_ROLL_RATE + phase).cos() * FRUIT_ROLL_AMPLITUDE,
    )
}

pub fn pitch_roll(pitch: f32, roll: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, pitch, 0.0, roll)
}

/// Dates are drawn elongated; hovering plumps them up instead.
pub fn fruit_scale(hovered: bool) -> Vec3 {
    if hovered {
        Vec3::new(1.4, 1.4, 1.0)
    } else {
        Vec3::new(1.0, 2.0, 1.0)
    }
}
