//! Scene graph for Veusz 3D plots
//!
//! This crate provides the scene objects that 3D plot widgets are built from:
//!
//! - [`SceneObject`] - A node: [`EmptyNode`], [`Triangle`], [`Polyline`] or [`Compound`]
//! - [`DrawItem`] - A [`Drawable`] leaf paired with its transformed points
//! - [`SurfaceProp`] / [`LineProp`] - Shared fill and stroke materials
//! - [`Painter`] - The 2D surface drawables paint onto
//! - [`Scene`] - A named root node
//! - [`SceneFile`] - Loadable/saveable scene description
//! - [`SceneValidator`] - Static checks on scene files

mod error;
mod material;
mod object;
mod painter;
mod scene;
mod scene_validator;

pub use error::{GeometryError, PointCount, ShapeKind};
pub use material::{LineProp, LineStyle, Rgba8, Stroke, SurfaceProp};
pub use object::{Compound, DrawItem, Drawable, EmptyNode, Polyline, SceneObject, Triangle};
pub use painter::Painter;
pub use scene::{compose_ops, NodeTemplate, Scene, SceneError, SceneFile, TransformOp};
pub use scene_validator::{SceneValidator, ValidationError};

// Re-export commonly used maths types for convenience
pub use veusz_math::{mat4, Mat4, Point2, Vec4};
