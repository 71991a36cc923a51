use bevy::math::Vec3;

/// Quadratic Bézier through a control point; the spine of one frond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrondCurve {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl FrondCurve {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Point at parameter `t` (clamped to [0, 1]).
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        u * u * self.start + 2.0 * u * t * self.control + t * t * self.end
    }

    /// First derivative at `t`. Not normalised.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        2.0 * (1.0 - t) * (self.control - self.start) + 2.0 * t * (self.end - self.control)
    }

    /// `segments + 1` evenly spaced (in `t`) points from start to end.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }

    /// Polyline length over `segments` chords.
    pub fn approx_length(&self, segments: usize) -> f32 {
        self.sample(segments)
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> FrondCurve {
        FrondCurve::new(
            Vec3::ZERO,
            Vec3::new(2.0, -0.7, 0.0),
            Vec3::new(4.0, -2.2, 0.0),
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let c = curve();
        assert_eq!(c.point_at(0.0), c.start);
        assert_eq!(c.point_at(1.0), c.end);
    }

    #[test]
    fn test_parameter_clamped() {
        let c = curve();
        assert_eq!(c.point_at(-3.0), c.start);
        assert_eq!(c.point_at(9.0), c.end);
    }

    #[test]
    fn test_midpoint_formula() {
        let c = curve();
        let expected = 0.25 * c.start + 0.5 * c.control + 0.25 * c.end;
        assert!((c.point_at(0.5) - expected).length() < 1e-6);
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let c = curve();
        let h = 1e-3;
        let fd = (c.point_at(0.4 + h) - c.point_at(0.4 - h)) / (2.0 * h);
        assert!((c.tangent_at(0.4) - fd).length() < 1e-2);
    }

    #[test]
    fn test_sample_count_and_ends() {
        let pts = curve().sample(50);
        assert_eq!(pts.len(), 51);
        assert_eq!(pts[0], Vec3::ZERO);
        assert_eq!(*pts.last().unwrap(), Vec3::new(4.0, -2.2, 0.0));
    }

    #[test]
    fn test_length_at_least_chord() {
        let c = curve();
        let chord = (c.end - c.start).length();
        assert!(c.approx_length(64) >= chord - 1e-4);
    }
}
