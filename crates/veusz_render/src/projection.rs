//! Projection from clip space to device coordinates
//!
//! Points coming out of scene traversal are still homogeneous. Projection
//! divides by `w` and maps normalized device coordinates `[-1, 1]` onto a
//! device rectangle with y pointing down. Nothing is clipped; a point with
//! `w == 0` comes out with non-finite coordinates.

use veusz_math::{Point2, Vec4};

/// Device rectangle points are mapped into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport at the device origin
    pub fn new(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// Move the viewport's top-left corner
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map normalized device coordinates to device units
    pub fn ndc_to_device(&self, ndc_x: f32, ndc_y: f32) -> Point2 {
        Point2::new(
            self.x + (ndc_x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - ndc_y) * 0.5 * self.height,
        )
    }

    /// Perspective-divide a clip-space point and map it to the device
    pub fn project(&self, p: Vec4) -> Point2 {
        let [x, y, _] = p.perspective_divide();
        self.ndc_to_device(x, y)
    }

    /// Project a run of points
    pub fn project_all(&self, points: &[Vec4]) -> Vec<Point2> {
        points.iter().map(|p| self.project(*p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.ndc_to_device(-1.0, 1.0), Point2::new(0.0, 0.0));
        assert_eq!(vp.ndc_to_device(1.0, -1.0), Point2::new(200.0, 100.0));
        assert_eq!(vp.ndc_to_device(0.0, 0.0), Point2::new(100.0, 50.0));
    }

    #[test]
    fn test_origin_offset() {
        let vp = Viewport::new(10.0, 10.0).with_origin(5.0, 7.0);
        assert_eq!(vp.ndc_to_device(-1.0, 1.0), Point2::new(5.0, 7.0));
    }

    #[test]
    fn test_project_divides_by_w() {
        let vp = Viewport::new(100.0, 100.0);
        // (1, 1) / 2 = (0.5, 0.5) in NDC
        let p = vp.project(Vec4::new(1.0, 1.0, 0.0, 2.0));
        assert_eq!(p, Point2::new(75.0, 25.0));
    }

    #[test]
    fn test_project_zero_w_is_not_finite() {
        let vp = Viewport::new(100.0, 100.0);
        assert!(!vp.project(Vec4::new(1.0, 1.0, 0.0, 0.0)).is_finite());
    }

    #[test]
    fn test_aspect() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect(), 2.0);
    }
}
