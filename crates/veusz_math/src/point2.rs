//! 2D device-space point

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// A point after projection, in device units (pixels, y pointing down)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// View a run of points as interleaved `x, y` coordinates
    pub fn as_flat(points: &[Point2]) -> &[f32] {
        bytemuck::cast_slice(points)
    }
}

impl From<[f32; 2]> for Point2 {
    fn from(p: [f32; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array() {
        let p: Point2 = [1.5, -2.0].into();
        assert_eq!(p, Point2::new(1.5, -2.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0, 2.0).is_finite());
        assert!(!Point2::new(f32::NAN, 2.0).is_finite());
        assert!(!Point2::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_as_flat_interleaves() {
        let points = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        assert_eq!(Point2::as_flat(&points), &[1.0, 2.0, 3.0, 4.0]);
        assert!(Point2::as_flat(&[]).is_empty());
    }
}
