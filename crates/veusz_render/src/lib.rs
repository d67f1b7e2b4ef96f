//! Rendering of 3D scenes onto 2D painters
//!
//! ## Key Components
//!
//! - [`camera::Camera`] - Orbit camera producing the `projection · view` matrix
//! - [`projection::Viewport`] - Perspective divide and NDC to device mapping
//! - [`renderer::SceneRenderer`] - Traverses a scene and paints it in order
//! - [`recording::RecordingPainter`] - Painter that records a replayable display list

pub mod camera;
pub mod projection;
pub mod recording;
pub mod renderer;

pub use camera::Camera;
pub use projection::Viewport;
pub use recording::{DisplayList, DisplayListError, PaintCommand, RecordingPainter};
pub use renderer::{RenderStats, SceneRenderer};
