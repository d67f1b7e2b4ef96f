//! Scene renderer
//!
//! Ties traversal, projection and drawing together: the scene is traversed
//! with the camera's `projection · view` as the outer transform, each item's
//! points are projected onto the viewport, and the drawables paint in
//! traversal order. There is no depth sort, so later children paint over
//! earlier ones.

use veusz_math::Point2;
use veusz_threed::{Drawable, GeometryError, Painter, Scene};

use crate::camera::Camera;
use crate::projection::Viewport;

/// Counts from one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub triangles: usize,
    pub polylines: usize,
    /// Items drawn with at least one non-finite projected point
    pub degenerate: usize,
}

impl RenderStats {
    /// Total drawables painted
    pub fn drawn(&self) -> usize {
        self.triangles + self.polylines
    }
}

/// Renders scenes through a camera onto a viewport
#[derive(Clone, Debug)]
pub struct SceneRenderer {
    pub camera: Camera,
    pub viewport: Viewport,
}

impl SceneRenderer {
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        Self { camera, viewport }
    }

    /// Paint every drawable in the scene
    pub fn render(&self, scene: &Scene, painter: &mut dyn Painter) -> Result<RenderStats, GeometryError> {
        let outer = self.camera.view_projection(self.viewport.aspect());
        let items = scene.collect_drawables(outer);
        let mut stats = RenderStats::default();

        for item in &items {
            let projected = self.viewport.project_all(&item.points);
            if !Point2::as_flat(&projected).iter().all(|c| c.is_finite()) {
                stats.degenerate += 1;
            }

            item.drawable.draw(painter, &projected)?;

            match item.drawable {
                Drawable::Triangle(_) => stats.triangles += 1,
                Drawable::Polyline(_) => stats.polylines += 1,
            }
        }

        log::debug!(
            "Rendered scene '{}': {} triangles, {} polylines",
            scene.name,
            stats.triangles,
            stats.polylines
        );
        if stats.degenerate > 0 {
            log::warn!("{} items in scene '{}' projected to non-finite points", stats.degenerate, scene.name);
        }

        Ok(stats)
    }
}
