//! Scene-graph nodes
//!
//! A scene is a tree of [`SceneObject`]s. Leaves ([`Triangle`], [`Polyline`])
//! own homogeneous points and share a material; [`Compound`] nodes own their
//! children. Every node carries a local transform, identity by default.
//!
//! Traversal composes transforms top-down on every call. Nothing is cached,
//! so changing any node's transform is seen by the next traversal.

use std::sync::Arc;

use veusz_math::{mat4, Mat4, Point2, Vec4};

use crate::error::{GeometryError, PointCount, ShapeKind};
use crate::material::{LineProp, SurfaceProp};
use crate::painter::Painter;

const TRIANGLE_POINTS: PointCount = PointCount::Exactly(3);
const POLYLINE_POINTS: PointCount = PointCount::AtLeast(2);

/// A node with neither geometry nor children
#[derive(Clone, Debug)]
pub struct EmptyNode {
    pub transform: Mat4,
}

impl Default for EmptyNode {
    fn default() -> Self {
        Self { transform: mat4::IDENTITY }
    }
}

/// A filled triangle
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Local transform
    pub transform: Mat4,
    points: [Vec4; 3],
    surface: Arc<SurfaceProp>,
}

impl Triangle {
    /// Create a triangle from exactly three points
    pub fn new(points: Vec<Vec4>, surface: Arc<SurfaceProp>) -> Result<Self, GeometryError> {
        let points = to_triangle_points(points)?;
        Ok(Self::from_points(points, surface))
    }

    /// Create a triangle from a fixed array of points
    pub fn from_points(points: [Vec4; 3], surface: Arc<SurfaceProp>) -> Self {
        Self {
            transform: mat4::IDENTITY,
            points,
            surface,
        }
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn points(&self) -> &[Vec4; 3] {
        &self.points
    }

    /// Replace the points; the triangle is unchanged on error
    pub fn set_points(&mut self, points: Vec<Vec4>) -> Result<(), GeometryError> {
        self.points = to_triangle_points(points)?;
        Ok(())
    }

    pub fn surface(&self) -> &Arc<SurfaceProp> {
        &self.surface
    }

    /// Fill the projected triangle with the surface colour, without outline
    pub fn draw(&self, painter: &mut dyn Painter, projected: &[Point2]) -> Result<(), GeometryError> {
        GeometryError::check(ShapeKind::Triangle, TRIANGLE_POINTS, projected.len())?;

        painter.set_brush(Some(self.surface.display_color()));
        painter.set_pen(None);
        painter.draw_polygon(projected);
        Ok(())
    }
}

fn to_triangle_points(points: Vec<Vec4>) -> Result<[Vec4; 3], GeometryError> {
    let found = points.len();
    points.try_into().map_err(|_| GeometryError::InvalidGeometry {
        shape: ShapeKind::Triangle,
        expected: TRIANGLE_POINTS,
        found,
    })
}

/// An open stroked line through two or more points
#[derive(Clone, Debug)]
pub struct Polyline {
    /// Local transform
    pub transform: Mat4,
    points: Vec<Vec4>,
    line: Arc<LineProp>,
}

impl Polyline {
    /// Create a polyline; at least two points are required
    pub fn new(points: Vec<Vec4>, line: Arc<LineProp>) -> Result<Self, GeometryError> {
        GeometryError::check(ShapeKind::Polyline, POLYLINE_POINTS, points.len())?;
        Ok(Self {
            transform: mat4::IDENTITY,
            points,
            line,
        })
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn points(&self) -> &[Vec4] {
        &self.points
    }

    /// Replace the points; the polyline is unchanged on error
    pub fn set_points(&mut self, points: Vec<Vec4>) -> Result<(), GeometryError> {
        GeometryError::check(ShapeKind::Polyline, POLYLINE_POINTS, points.len())?;
        self.points = points;
        Ok(())
    }

    pub fn line(&self) -> &Arc<LineProp> {
        &self.line
    }

    /// Stroke the projected points with the line's pen, without fill
    pub fn draw(&self, painter: &mut dyn Painter, projected: &[Point2]) -> Result<(), GeometryError> {
        GeometryError::check(ShapeKind::Polyline, POLYLINE_POINTS, projected.len())?;

        let pen = self.line.stroke(painter.dpi(), painter.scaling());
        painter.set_brush(None);
        painter.set_pen(Some(pen));
        painter.draw_polyline(projected);
        Ok(())
    }
}

/// A node grouping child objects under a common transform
#[derive(Clone, Debug)]
pub struct Compound {
    /// Local transform
    pub transform: Mat4,
    children: Vec<SceneObject>,
}

impl Default for Compound {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Compound {
    /// Create a compound owning the given children (kept in this order)
    pub fn new(children: Vec<SceneObject>) -> Self {
        Self {
            transform: mat4::IDENTITY,
            children,
        }
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Append a child, drawn after the existing ones
    pub fn push(&mut self, child: impl Into<SceneObject>) {
        self.children.push(child.into());
    }

    /// Builder form of [`push`](Compound::push)
    pub fn with_child(mut self, child: impl Into<SceneObject>) -> Self {
        self.push(child);
        self
    }

    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    /// Mutable access to the children, e.g. to animate their transforms
    pub fn children_mut(&mut self) -> &mut [SceneObject] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node of the scene graph
#[derive(Clone, Debug)]
pub enum SceneObject {
    Empty(EmptyNode),
    Triangle(Triangle),
    Polyline(Polyline),
    Compound(Compound),
}

impl Default for SceneObject {
    fn default() -> Self {
        SceneObject::Empty(EmptyNode::default())
    }
}

impl From<EmptyNode> for SceneObject {
    fn from(node: EmptyNode) -> Self {
        SceneObject::Empty(node)
    }
}

impl From<Triangle> for SceneObject {
    fn from(triangle: Triangle) -> Self {
        SceneObject::Triangle(triangle)
    }
}

impl From<Polyline> for SceneObject {
    fn from(polyline: Polyline) -> Self {
        SceneObject::Polyline(polyline)
    }
}

impl From<Compound> for SceneObject {
    fn from(compound: Compound) -> Self {
        SceneObject::Compound(compound)
    }
}

impl SceneObject {
    /// The node's local transform
    pub fn transform(&self) -> &Mat4 {
        match self {
            SceneObject::Empty(n) => &n.transform,
            SceneObject::Triangle(t) => &t.transform,
            SceneObject::Polyline(p) => &p.transform,
            SceneObject::Compound(c) => &c.transform,
        }
    }

    /// Mutable access to the node's local transform
    pub fn transform_mut(&mut self) -> &mut Mat4 {
        match self {
            SceneObject::Empty(n) => &mut n.transform,
            SceneObject::Triangle(t) => &mut t.transform,
            SceneObject::Polyline(p) => &mut p.transform,
            SceneObject::Compound(c) => &mut c.transform,
        }
    }

    /// Replace the node's local transform
    pub fn set_transform(&mut self, transform: Mat4) {
        *self.transform_mut() = transform;
    }

    /// Collect every drawable in this subtree with its transformed points
    ///
    /// Each leaf's points are multiplied by `inherited · (ancestor locals) ·
    /// local`. The result is in traversal order, children in declaration
    /// order, which is the order they should be painted. No clipping and no
    /// division by `w` happens here.
    pub fn collect_drawables(&self, inherited: Mat4) -> Vec<DrawItem<'_>> {
        let mut items = Vec::new();
        self.collect_into(inherited, &mut items);
        items
    }

    fn collect_into<'a>(&'a self, inherited: Mat4, items: &mut Vec<DrawItem<'a>>) {
        match self {
            SceneObject::Empty(_) => {}
            SceneObject::Triangle(triangle) => {
                let effective = mat4::mul(inherited, triangle.transform);
                items.push(DrawItem {
                    drawable: Drawable::Triangle(triangle),
                    points: transform_points(effective, &triangle.points),
                });
            }
            SceneObject::Polyline(polyline) => {
                let effective = mat4::mul(inherited, polyline.transform);
                items.push(DrawItem {
                    drawable: Drawable::Polyline(polyline),
                    points: transform_points(effective, &polyline.points),
                });
            }
            SceneObject::Compound(compound) => {
                let effective = mat4::mul(inherited, compound.transform);
                for child in &compound.children {
                    child.collect_into(effective, items);
                }
            }
        }
    }

    /// Number of drawable leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            SceneObject::Empty(_) => 0,
            SceneObject::Triangle(_) | SceneObject::Polyline(_) => 1,
            SceneObject::Compound(c) => c.children.iter().map(SceneObject::leaf_count).sum(),
        }
    }
}

fn transform_points(m: Mat4, points: &[Vec4]) -> Vec<Vec4> {
    points.iter().map(|p| mat4::transform(m, *p)).collect()
}

/// A borrowed leaf that knows how to paint itself
#[derive(Clone, Copy, Debug)]
pub enum Drawable<'a> {
    Triangle(&'a Triangle),
    Polyline(&'a Polyline),
}

impl Drawable<'_> {
    /// Paint with already projected 2D points
    pub fn draw(&self, painter: &mut dyn Painter, projected: &[Point2]) -> Result<(), GeometryError> {
        match self {
            Drawable::Triangle(t) => t.draw(painter, projected),
            Drawable::Polyline(p) => p.draw(painter, projected),
        }
    }
}

/// A drawable paired with its points after the composed transform
#[derive(Clone, Debug)]
pub struct DrawItem<'a> {
    pub drawable: Drawable<'a>,
    pub points: Vec<Vec4>,
}
