//! Trunk layout: a stack of slightly tapering frustums with a gentle bend,
//! ringed at each joint, topped by the crown the fronds grow from.

use std::f32::consts::PI;

use bevy::math::Vec3;

use crate::config::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrunkSegment {
    pub index: usize,
    /// Centre of the segment.
    pub center: Vec3,
    pub radius_bottom: f32,
    pub radius_top: f32,
    pub height: f32,
}

/// Bark ring sitting a quarter segment below a segment's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrunkRing {
    pub segment: usize,
    pub center: Vec3,
    pub major_radius: f32,
    pub minor_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrunkLayout {
    pub segments: Vec<TrunkSegment>,
    pub rings: Vec<TrunkRing>,
    /// Height of the crown; the frond group sits here.
    pub crown_y: f32,
}

impl Default for TrunkLayout {
    fn default() -> Self {
        Self::generate(TRUNK_SEGMENTS)
    }
}

impl TrunkLayout {
    pub fn generate(segment_count: usize) -> Self {
        let mut segments = Vec::with_capacity(segment_count);
        let mut rings = Vec::with_capacity(segment_count.saturating_sub(1));

        for i in 0..segment_count {
            let bend = TRUNK_BEND * (i as f32 / segment_count as f32 * PI * TRUNK_BEND_PERIODS).sin();
            let center = Vec3::new(bend, TRUNK_BASE_Y + i as f32 * TRUNK_SEGMENT_HEIGHT, 0.0);
            let radius = TRUNK_BASE_RADIUS - i as f32 * TRUNK_RADIUS_STEP;

            segments.push(TrunkSegment {
                index: i,
                center,
                radius_bottom: radius,
                radius_top: radius - TRUNK_SEGMENT_TAPER,
                height: TRUNK_SEGMENT_HEIGHT,
            });

            if i > 0 {
                rings.push(TrunkRing {
                    segment: i,
                    center: center - Vec3::Y * (TRUNK_SEGMENT_HEIGHT / 4.0),
                    major_radius: radius + TRUNK_RING_GAP,
                    minor_radius: TRUNK_RING_MINOR_RADIUS,
                });
            }
        }

        let crown_y = TRUNK_BASE_Y
            + segment_count.saturating_sub(1) as f32 * TRUNK_SEGMENT_HEIGHT
            + TRUNK_SEGMENT_HEIGHT / 2.0;

        Self {
            segments,
            rings,
            crown_y,
        }
    }

    pub fn crown(&self) -> Vec3 {
        Vec3::new(0.0, self.crown_y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_and_ring_counts() {
        let trunk = TrunkLayout::default();
        assert_eq!(trunk.segments.len(), TRUNK_SEGMENTS);
        assert_eq!(trunk.rings.len(), TRUNK_SEGMENTS - 1);
        assert!(trunk.rings.iter().all(|r| r.segment > 0));
    }

    #[test]
    fn test_crown_at_top_of_last_segment() {
        let trunk = TrunkLayout::default();
        let last = trunk.segments.last().unwrap();
        assert!((trunk.crown_y - (last.center.y + last.height / 2.0)).abs() < 1e-5);
        assert!((trunk.crown_y - (-2.0 + 19.0 * 0.48 + 0.24)).abs() < 1e-5);
    }

    #[test]
    fn test_segments_stack_without_gaps() {
        let trunk = TrunkLayout::default();
        for pair in trunk.segments.windows(2) {
            let top = pair[0].center.y + pair[0].height / 2.0;
            let bottom = pair[1].center.y - pair[1].height / 2.0;
            assert!((top - bottom).abs() < 1e-5);
        }
    }

    #[test]
    fn test_trunk_tapers_upward() {
        let trunk = TrunkLayout::default();
        for pair in trunk.segments.windows(2) {
            assert!(pair[1].radius_bottom < pair[0].radius_bottom);
        }
        for s in &trunk.segments {
            assert!(s.radius_top < s.radius_bottom);
            assert!(s.radius_top > 0.0);
        }
    }

    #[test]
    fn test_bend_is_gentle() {
        let trunk = TrunkLayout::default();
        assert_eq!(trunk.segments[0].center.x, 0.0);
        assert!(trunk.segments.iter().all(|s| s.center.x.abs() <= TRUNK_BEND + 1e-6));
        assert!(trunk.segments.iter().all(|s| s.center.z == 0.0));
    }

    #[test]
    fn test_rings_hug_their_segment() {
        let trunk = TrunkLayout::default();
        for ring in &trunk.rings {
            let seg = &trunk.segments[ring.segment];
            assert!(ring.major_radius > seg.radius_bottom);
            assert!((ring.center.y - (seg.center.y - 0.12)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_trunk_does_not_panic() {
        let trunk = TrunkLayout::generate(0);
        assert!(trunk.segments.is_empty());
        assert!(trunk.rings.is_empty());
    }
}
