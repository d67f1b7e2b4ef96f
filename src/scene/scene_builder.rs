//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building scene files from axes, triangles and
//! boxes without writing the node tree by hand.

use veusz_threed::{LineProp, NodeTemplate, SceneFile, SurfaceProp, TransformOp};

/// Builder for constructing scene files
///
/// # Example
/// ```ignore
/// let file = SceneBuilder::new("demo")
///     .add_line("axis", LineProp::default())
///     .add_axes(1.0, "axis")
///     .add_surface("red", SurfaceProp::from_rgb(1.0, 0.0, 0.0))
///     .add_cuboid([0.0, 0.0, 0.0], [0.5, 0.5, 0.5], "red")
///     .build();
/// ```
pub struct SceneBuilder {
    file: SceneFile,
    children: Vec<NodeTemplate>,
    transform: Vec<TransformOp>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new(name: &str) -> Self {
        Self {
            file: SceneFile::new(name),
            children: Vec::new(),
            transform: Vec::new(),
        }
    }

    /// Register a named surface material
    pub fn add_surface(mut self, name: &str, surface: SurfaceProp) -> Self {
        self.file = self.file.with_surface(name, surface);
        self
    }

    /// Register a named line material
    pub fn add_line(mut self, name: &str, line: LineProp) -> Self {
        self.file = self.file.with_line(name, line);
        self
    }

    /// Add a transform step to the root node
    pub fn with_root_transform(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }

    /// Add three axis lines from the origin
    pub fn add_axes(mut self, length: f32, line: &str) -> Self {
        let axes = [[length, 0.0, 0.0], [0.0, length, 0.0], [0.0, 0.0, length]]
            .into_iter()
            .map(|end| NodeTemplate::Polyline {
                points: vec![[0.0, 0.0, 0.0], end],
                line: line.to_string(),
                transform: Vec::new(),
            })
            .collect();

        self.children.push(NodeTemplate::Compound {
            children: axes,
            transform: Vec::new(),
        });
        self
    }

    /// Add a single filled triangle
    pub fn add_triangle(mut self, points: [[f32; 3]; 3], surface: &str) -> Self {
        self.children.push(NodeTemplate::Triangle {
            points: points.to_vec(),
            surface: surface.to_string(),
            transform: Vec::new(),
        });
        self
    }

    /// Add a polyline through the given points
    pub fn add_polyline(mut self, points: &[[f32; 3]], line: &str) -> Self {
        self.children.push(NodeTemplate::Polyline {
            points: points.to_vec(),
            line: line.to_string(),
            transform: Vec::new(),
        });
        self
    }

    /// Add an axis-aligned box built from twelve triangles
    ///
    /// The box is a unit cube scaled by `half_extents` and moved to `center`.
    pub fn add_cuboid(mut self, center: [f32; 3], half_extents: [f32; 3], surface: &str) -> Self {
        let faces = CUBE_FACES
            .iter()
            .flat_map(|[a, b, c, d]| [[*a, *b, *c], [*a, *c, *d]])
            .map(|[a, b, c]| NodeTemplate::Triangle {
                points: vec![CUBE_CORNERS[a], CUBE_CORNERS[b], CUBE_CORNERS[c]],
                surface: surface.to_string(),
                transform: Vec::new(),
            })
            .collect();

        self.children.push(NodeTemplate::Compound {
            children: faces,
            transform: vec![
                TransformOp::Scale(half_extents[0], half_extents[1], half_extents[2]),
                TransformOp::Translate(center[0], center[1], center[2]),
            ],
        });
        self
    }

    /// Add a prebuilt node
    pub fn add_node(mut self, node: NodeTemplate) -> Self {
        self.children.push(node);
        self
    }

    /// Build the scene file
    pub fn build(self) -> SceneFile {
        self.file.with_root(NodeTemplate::Compound {
            children: self.children,
            transform: self.transform,
        })
    }
}

const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

// Corner indices per face, counter-clockwise seen from outside
const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 7, 6, 2],
    [0, 4, 7, 3],
    [1, 2, 6, 5],
];

/// Scene rendered when no scene file is configured
pub fn demo_scene() -> SceneFile {
    SceneBuilder::new("demo")
        .add_line("axis", LineProp::from_rgb(0.2, 0.2, 0.2).with_width(1.5))
        .add_surface("box", SurfaceProp::from_rgb(0.2, 0.4, 0.8).with_trans(0.25))
        .add_surface("marker", SurfaceProp::from_rgb(0.9, 0.3, 0.1))
        .add_axes(1.5, "axis")
        .add_cuboid([0.0, 0.5, 0.0], [0.5, 0.5, 0.5], "box")
        .add_triangle([[1.0, 0.0, 1.0], [1.5, 0.0, 1.0], [1.25, 0.5, 1.0]], "marker")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use veusz_threed::SceneValidator;

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new("empty").build().instantiate().unwrap();
        assert_eq!(scene.leaf_count(), 0);
    }

    #[test]
    fn test_axes_are_three_polylines() {
        let file = SceneBuilder::new("axes")
            .add_line("axis", LineProp::default())
            .add_axes(2.0, "axis")
            .build();
        let scene = file.instantiate().unwrap();
        assert_eq!(scene.leaf_count(), 3);
    }

    #[test]
    fn test_cuboid_has_twelve_triangles() {
        let file = SceneBuilder::new("box")
            .add_surface("s", SurfaceProp::default())
            .add_cuboid([1.0, 2.0, 3.0], [1.0, 1.0, 1.0], "s")
            .build();
        assert_eq!(file.instantiate().unwrap().leaf_count(), 12);
    }

    #[test]
    fn test_unknown_material_fails_to_instantiate() {
        let file = SceneBuilder::new("bad")
            .add_triangle([[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], "missing")
            .build();
        assert!(file.instantiate().is_err());
    }

    #[test]
    fn test_demo_scene_is_valid() {
        let file = demo_scene();
        assert!(SceneValidator::validate(&file).is_empty());
        assert_eq!(file.instantiate().unwrap().leaf_count(), 3 + 12 + 1);
    }

    #[test]
    fn test_root_transform() {
        let file = SceneBuilder::new("t")
            .with_root_transform(TransformOp::RotateZ(1.0))
            .build();
        assert_eq!(file.root.transform_ops(), &[TransformOp::RotateZ(1.0)]);
    }
}
