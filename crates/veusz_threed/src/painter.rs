//! Painter interface
//!
//! Drawables issue their paint commands through this trait. Backends decide
//! what a brush, a pen or a polygon means on their device.

use veusz_math::Point2;

use crate::material::{Rgba8, Stroke};

/// A 2D painting surface
pub trait Painter {
    /// Device resolution in dots per inch
    fn dpi(&self) -> f32;

    /// Extra scale factor applied on top of the resolution
    fn scaling(&self) -> f32 {
        1.0
    }

    /// Set the fill colour, `None` for no fill
    fn set_brush(&mut self, brush: Option<Rgba8>);

    /// Set the outline pen, `None` for no outline
    fn set_pen(&mut self, pen: Option<Stroke>);

    /// Fill (and outline) a closed polygon with the current brush and pen
    fn draw_polygon(&mut self, points: &[Point2]);

    /// Stroke an open polyline with the current pen
    fn draw_polyline(&mut self, points: &[Point2]);
}
