//! "How full is this fruit" gradient.
//!
//! A city's purchased share becomes a stop position along a four-color
//! gradient painted top to bottom over each date:
//!
//! ```text
//! 0.0  light brown
//!  |   (blend)
//! stop city color | rich brown   <- hard edge
//!  |                 (blend)
//! 1.0               dark brown
//! ```

use std::fmt;

use bevy::log::debug;

use crate::city::{CityRecord, Rgb8};
use crate::config::{
    GRADIENT_DARK_BROWN, GRADIENT_LIGHT_BROWN, GRADIENT_RICH_BROWN, GRADIENT_STOP_MARGIN,
};

/// A stop that had to be pulled back inside the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBoundary {
    pub percentage: f32,
    pub clamped: f32,
}

impl fmt::Display for GradientBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gradient stop for {}% clamped to {}",
            self.percentage, self.clamped
        )
    }
}

impl std::error::Error for GradientBoundary {}

/// Map a percentage to a stop strictly inside (0, 1).
///
/// Returns `Err` carrying the usable clamped stop when the input sat on or
/// beyond either end (or was NaN).
pub fn fill_stop(percentage: f32) -> Result<f32, GradientBoundary> {
    let lo = GRADIENT_STOP_MARGIN;
    let hi = 1.0 - GRADIENT_STOP_MARGIN;
    if percentage.is_nan() {
        return Err(GradientBoundary {
            percentage,
            clamped: lo,
        });
    }
    let raw = percentage / 100.0;
    let clamped = raw.clamp(lo, hi);
    if clamped == raw {
        Ok(raw)
    } else {
        Err(GradientBoundary {
            percentage,
            clamped,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillGradient {
    pub stop: f32,
    pub color: Rgb8,
}

impl FillGradient {
    pub fn new(percentage: f32, color: Rgb8) -> Self {
        let stop = fill_stop(percentage).unwrap_or_else(|boundary| {
            debug!("{boundary}");
            boundary.clamped
        });
        Self { stop, color }
    }

    pub fn for_city(city: &CityRecord) -> Self {
        Self::new(city.purchased, city.color)
    }

    /// Color at `v` in [0, 1], measured from the top of the fruit.
    pub fn sample(&self, v: f32) -> Rgb8 {
        let v = v.clamp(0.0, 1.0);
        if v < self.stop {
            GRADIENT_LIGHT_BROWN.lerp(self.color, v / self.stop)
        } else {
            GRADIENT_RICH_BROWN.lerp(GRADIENT_DARK_BROWN, (v - self.stop) / (1.0 - self.stop))
        }
    }

    /// Square RGBA8 texture, rows top to bottom, sampled at pixel centres.
    pub fn rgba_pixels(&self, size: u32) -> Vec<u8> {
        let size = size.max(1) as usize;
        let mut data = Vec::with_capacity(size * size * 4);
        for y in 0..size {
            let c = self.sample((y as f32 + 0.5) / size as f32);
            for _ in 0..size {
                data.extend_from_slice(&[c.r, c.g, c.b, 255]);
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAL: Rgb8 = Rgb8::new(0x4e, 0xcd, 0xc4);

    #[test]
    fn test_tunis_stop() {
        assert!((fill_stop(75.0).unwrap() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_mahdia_stop() {
        assert!((fill_stop(10.0).unwrap() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_ends_are_clamped_inside() {
        let zero = fill_stop(0.0).unwrap_err();
        assert_eq!(zero.clamped, GRADIENT_STOP_MARGIN);
        let full = fill_stop(100.0).unwrap_err();
        assert_eq!(full.clamped, 1.0 - GRADIENT_STOP_MARGIN);
        let nan = fill_stop(f32::NAN).unwrap_err();
        assert_eq!(nan.clamped, GRADIENT_STOP_MARGIN);
    }

    #[test]
    fn test_stop_strictly_inside_and_monotone() {
        let mut prev = 0.0_f32;
        for i in 0..=1000 {
            let p = i as f32 / 10.0;
            let s = FillGradient::new(p, TEAL).stop;
            assert!(s > 0.0 && s < 1.0, "p={p} gave stop {s}");
            assert!(s >= prev, "stop decreased at p={p}");
            prev = s;
        }
    }

    #[test]
    fn test_sample_endpoints() {
        let g = FillGradient::new(50.0, TEAL);
        assert_eq!(g.sample(0.0), GRADIENT_LIGHT_BROWN);
        assert_eq!(g.sample(1.0), GRADIENT_DARK_BROWN);
    }

    #[test]
    fn test_hard_edge_at_stop() {
        let g = FillGradient::new(50.0, TEAL);
        let just_above = g.sample(0.4999);
        assert!((just_above.r as i32 - TEAL.r as i32).abs() <= 1);
        assert_eq!(g.sample(0.5), GRADIENT_RICH_BROWN);
    }

    #[test]
    fn test_pixels_layout() {
        let g = FillGradient::new(75.0, TEAL);
        let px = g.rgba_pixels(32);
        assert_eq!(px.len(), 32 * 32 * 4);
        // alpha is opaque everywhere
        assert!(px.chunks(4).all(|p| p[3] == 255));
        // each row is a single color
        let row = &px[0..32 * 4];
        assert!(row.chunks(4).all(|p| p == &row[0..4]));
        // bottom row is in the dark half
        let last = &px[px.len() - 4..];
        assert!(last[0] < GRADIENT_LIGHT_BROWN.r);
    }

    #[test]
    fn test_boundary_display() {
        let b = fill_stop(100.0).unwrap_err();
        assert!(format!("{b}").contains("100"));
    }
}
