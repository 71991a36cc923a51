//! Procedural frond generator.
//!
//! Given a branch index, the number of branches, the city on that branch and
//! the layout seed, produces:
//!
//! 1. **Spine** -- a drooping quadratic curve from the crown apex outward,
//!    aimed at an evenly spaced angle around the trunk.
//! 2. **Fruit** -- a fixed number of dates along the spine, pushed sideways
//!    by a sine so they bunch into clusters.
//! 3. **Leaflets** -- mirrored pairs flanking the spine, swelling toward the
//!    middle of the frond and switching green shade halfway out.
//! 4. **Fill** -- the gradient stop encoding the city's purchased share.
//!
//! Output is a pure function of the inputs; all jitter comes from
//! [`LayoutSeed::branch_rng`].

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::math::{EulerRot, Quat, Vec3};

use crate::city::{CityRecord, Rgb8};
use crate::config::*;
use crate::curve::FrondCurve;
use crate::fill_gradient::FillGradient;
use crate::layout_rng::{centered, unit, LayoutSeed};

/// Every frond grows out of the crown apex, the origin of the frond group.
pub const FROND_APEX: Vec3 = Vec3::ZERO;

// =============================================================================
// Placements
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FruitPlacement {
    pub date_index: usize,
    /// Curve parameter the fruit was sampled at, before clustering.
    pub t: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafletSide {
    Left,
    Right,
}

impl LeafletSide {
    fn sign(self) -> f32 {
        match self {
            LeafletSide::Left => 1.0,
            LeafletSide::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafletPlacement {
    pub pair_index: usize,
    pub side: LeafletSide,
    pub t: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb8,
}

impl LeafletPlacement {
    /// Orientation of the flat leaflet quad (XY plane) in frond space.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, 0.0, self.yaw, self.roll)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrondLayout {
    pub branch_index: usize,
    pub angle: f32,
    pub length: f32,
    pub curve: FrondCurve,
    pub fruit: Vec<FruitPlacement>,
    pub leaflets: Vec<LeafletPlacement>,
    pub label_anchor: Vec3,
    pub fill: FillGradient,
}

impl FrondLayout {
    /// Horizontal unit vector perpendicular to the frond's heading.
    pub fn sideways(&self) -> Vec3 {
        sideways(self.angle)
    }
}

fn sideways(angle: f32) -> Vec3 {
    let a = angle + FRAC_PI_2;
    Vec3::new(a.cos(), 0.0, a.sin())
}

// =============================================================================
// Generator
// =============================================================================

/// Curve parameter of fruit `k` out of `count`; keeps clear of both ends.
pub fn fruit_t(k: usize, count: usize) -> f32 {
    (k + 1) as f32 / (count + 2) as f32
}

/// Curve parameter of leaflet pair `k` out of `pairs`; spans both ends.
pub fn leaflet_t(k: usize, pairs: usize) -> f32 {
    if pairs <= 1 {
        return 0.0;
    }
    k as f32 / (pairs - 1) as f32
}

/// Sideways displacement that bunches fruit into clusters.
pub fn cluster_offset(t: f32) -> f32 {
    (t * PI * FRUIT_CLUSTER_FREQUENCY).sin() * FRUIT_CLUSTER_AMPLITUDE
}

/// Sine envelope: smallest at the ends, widest mid-frond.
pub fn leaflet_envelope(t: f32) -> f32 {
    (t * PI).sin()
}

pub fn leaflet_color(t: f32) -> Rgb8 {
    if t < LEAFLET_COLOR_SPLIT {
        LEAFLET_INNER_GREEN
    } else {
        LEAFLET_OUTER_GREEN
    }
}

/// Heading of branch `index` before jitter.
pub fn base_angle(branch_index: usize, branch_count: usize) -> f32 {
    branch_index as f32 / branch_count.max(1) as f32 * TAU
}

/// Lay out one frond.
pub fn generate_frond(
    branch_index: usize,
    branch_count: usize,
    city: &CityRecord,
    seed: LayoutSeed,
) -> FrondLayout {
    let mut rng = seed.branch_rng(branch_index);

    let angle = base_angle(branch_index, branch_count) + centered(&mut rng, FROND_ANGLE_JITTER);
    let length = FROND_BASE_LENGTH
        + (branch_index as f32).sin() * FROND_LENGTH_WAVE
        + unit(&mut rng) * FROND_LENGTH_JITTER;

    let heading = Vec3::new(angle.cos(), 0.0, angle.sin());
    let control = heading * length * FROND_MID_FRACTION
        + Vec3::Y * (FROND_MID_DROP + unit(&mut rng) * FROND_MID_DROOP_JITTER);
    let end = heading * length + Vec3::Y * (FROND_END_DROP + unit(&mut rng) * FROND_END_DROOP_JITTER);
    let curve = FrondCurve::new(FROND_APEX, control, end);

    let side = sideways(angle);

    let fruit = (0..FRUIT_PER_FROND)
        .map(|k| {
            let t = fruit_t(k, FRUIT_PER_FROND);
            let mut position = curve.point_at(t) + side * cluster_offset(t);
            position.y += centered(&mut rng, FRUIT_VERTICAL_JITTER);
            FruitPlacement {
                date_index: k,
                t,
                position,
            }
        })
        .collect();

    let mut leaflets = Vec::with_capacity(LEAFLET_PAIRS * 2);
    for k in 0..LEAFLET_PAIRS {
        let t = leaflet_t(k, LEAFLET_PAIRS);
        let spine = curve.point_at(t);
        let width = leaflet_envelope(t) * (LEAFLET_SIZE_SWELL + unit(&mut rng) * LEAFLET_SIZE_JITTER)
            + LEAFLET_BASE_SIZE;
        let yaw = angle + FRAC_PI_2 + centered(&mut rng, LEAFLET_YAW_JITTER);
        let offset = LEAFLET_OFFSET + unit(&mut rng) * LEAFLET_OFFSET_JITTER;
        let outward = Vec3::new(yaw.cos(), 0.0, yaw.sin()) * offset;
        let color = leaflet_color(t);

        for side in [LeafletSide::Left, LeafletSide::Right] {
            let sign = side.sign();
            leaflets.push(LeafletPlacement {
                pair_index: k,
                side,
                t,
                position: spine + outward * sign,
                yaw,
                roll: sign * LEAFLET_ROLL + centered(&mut rng, LEAFLET_ROLL_JITTER),
                width,
                height: LEAFLET_HEIGHT + unit(&mut rng) * LEAFLET_HEIGHT_JITTER,
                color,
            });
        }
    }

    FrondLayout {
        branch_index,
        angle,
        length,
        curve,
        fruit,
        leaflets,
        label_anchor: end + Vec3::Y * LABEL_LIFT,
        fill: FillGradient::for_city(city),
    }
}
