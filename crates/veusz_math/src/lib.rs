//! Homogeneous-coordinate maths for the Veusz 3D scene graph
//!
//! ## Core Types
//!
//! - [`Vec4`] - homogeneous 3D point with x, y, z, w components
//! - [`Point2`] - projected point in device coordinates
//! - [`Mat4`] - 4x4 column-major transform matrix and its helpers in [`mat4`]

mod vec4;
mod point2;
pub mod mat4;

pub use vec4::Vec4;
pub use point2::Point2;
pub use mat4::Mat4;
