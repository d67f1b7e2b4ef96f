//! Scenes and scene files
//!
//! [`Scene`] wraps the root of a live scene graph. [`SceneFile`] is its
//! serializable description: named material tables plus a node tree, loaded
//! from and saved to RON. Instantiating a file creates one shared `Arc` per
//! named material, so every leaf naming it references the same value.

use serde::{Serialize, Deserialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use veusz_math::{mat4, Mat4, Vec4};

use crate::error::GeometryError;
use crate::material::{LineProp, SurfaceProp};
use crate::object::{Compound, DrawItem, EmptyNode, Polyline, SceneObject, Triangle};

/// A live scene graph
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Root node
    pub root: SceneObject,
}

impl Scene {
    /// Create a scene around an existing root node
    pub fn new(name: impl Into<String>, root: impl Into<SceneObject>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Collect all drawables, starting from the given outer (camera) transform
    pub fn collect_drawables(&self, outer: Mat4) -> Vec<DrawItem<'_>> {
        self.root.collect_drawables(outer)
    }

    /// Number of drawable leaves
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

/// One step of a node transform in a scene file
///
/// Steps apply to the node's points in the order they are listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(f32, f32, f32),
    Scale(f32, f32, f32),
    /// Rotation about X in radians
    RotateX(f32),
    /// Rotation about Y in radians
    RotateY(f32),
    /// Rotation about Z in radians
    RotateZ(f32),
    /// Explicit column-major matrix
    Matrix(Mat4),
}

impl TransformOp {
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            TransformOp::Translate(x, y, z) => mat4::translation(x, y, z),
            TransformOp::Scale(x, y, z) => mat4::scaling(x, y, z),
            TransformOp::RotateX(a) => mat4::rotation_x(a),
            TransformOp::RotateY(a) => mat4::rotation_y(a),
            TransformOp::RotateZ(a) => mat4::rotation_z(a),
            TransformOp::Matrix(m) => m,
        }
    }
}

/// Compose a list of steps into one matrix, first step applied first
pub fn compose_ops(ops: &[TransformOp]) -> Mat4 {
    ops.iter()
        .fold(mat4::IDENTITY, |acc, op| mat4::mul(op.to_matrix(), acc))
}

/// Serializable description of a scene node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeTemplate {
    Empty {
        #[serde(default)]
        transform: Vec<TransformOp>,
    },
    Triangle {
        points: Vec<[f32; 3]>,
        /// Name of an entry in the scene's surface table
        surface: String,
        #[serde(default)]
        transform: Vec<TransformOp>,
    },
    Polyline {
        points: Vec<[f32; 3]>,
        /// Name of an entry in the scene's line table
        line: String,
        #[serde(default)]
        transform: Vec<TransformOp>,
    },
    Compound {
        children: Vec<NodeTemplate>,
        #[serde(default)]
        transform: Vec<TransformOp>,
    },
}

impl NodeTemplate {
    /// Transform steps of this node
    pub fn transform_ops(&self) -> &[TransformOp] {
        match self {
            NodeTemplate::Empty { transform }
            | NodeTemplate::Triangle { transform, .. }
            | NodeTemplate::Polyline { transform, .. }
            | NodeTemplate::Compound { transform, .. } => transform.as_slice(),
        }
    }

    /// Visit this node and all its descendants depth first
    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a NodeTemplate)) {
        f(self);
        if let NodeTemplate::Compound { children, .. } = self {
            for child in children {
                child.visit(f);
            }
        }
    }
}

impl Default for NodeTemplate {
    fn default() -> Self {
        NodeTemplate::Compound {
            children: Vec::new(),
            transform: Vec::new(),
        }
    }
}

/// A serializable scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Named surface materials
    #[serde(default)]
    pub surfaces: BTreeMap<String, SurfaceProp>,
    /// Named line materials
    #[serde(default)]
    pub lines: BTreeMap<String, LineProp>,
    /// Root node
    #[serde(default)]
    pub root: NodeTemplate,
}

impl SceneFile {
    /// Create an empty scene file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a scene from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneError> {
        let scene = ron::from_str(contents)?;
        Ok(scene)
    }

    /// Serialize to pretty RON text
    pub fn to_ron(&self) -> Result<String, SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Add a named surface material
    pub fn with_surface(mut self, name: impl Into<String>, surface: SurfaceProp) -> Self {
        self.surfaces.insert(name.into(), surface);
        self
    }

    /// Add a named line material
    pub fn with_line(mut self, name: impl Into<String>, line: LineProp) -> Self {
        self.lines.insert(name.into(), line);
        self
    }

    /// Set the root node
    pub fn with_root(mut self, root: NodeTemplate) -> Self {
        self.root = root;
        self
    }

    /// Build the live scene graph
    ///
    /// Fails on the first unknown material name or bad point count.
    pub fn instantiate(&self) -> Result<Scene, SceneError> {
        let surfaces: HashMap<&str, Arc<SurfaceProp>> = self
            .surfaces
            .iter()
            .map(|(name, s)| (name.as_str(), Arc::new(s.clone())))
            .collect();
        let lines: HashMap<&str, Arc<LineProp>> = self
            .lines
            .iter()
            .map(|(name, l)| (name.as_str(), Arc::new(l.clone())))
            .collect();

        let root = build_node(&self.root, &surfaces, &lines)?;
        let scene = Scene::new(self.name.clone(), root);
        log::debug!("Instantiated scene '{}' with {} drawables", scene.name, scene.leaf_count());
        Ok(scene)
    }
}

fn build_node(
    template: &NodeTemplate,
    surfaces: &HashMap<&str, Arc<SurfaceProp>>,
    lines: &HashMap<&str, Arc<LineProp>>,
) -> Result<SceneObject, SceneError> {
    let transform = compose_ops(template.transform_ops());

    let node = match template {
        NodeTemplate::Empty { .. } => SceneObject::Empty(EmptyNode { transform }),
        NodeTemplate::Triangle { points, surface, .. } => {
            let material = surfaces
                .get(surface.as_str())
                .ok_or_else(|| SceneError::UnknownMaterial(surface.clone()))?;
            Triangle::new(to_points(points), Arc::clone(material))?
                .with_transform(transform)
                .into()
        }
        NodeTemplate::Polyline { points, line, .. } => {
            let material = lines
                .get(line.as_str())
                .ok_or_else(|| SceneError::UnknownMaterial(line.clone()))?;
            Polyline::new(to_points(points), Arc::clone(material))?
                .with_transform(transform)
                .into()
        }
        NodeTemplate::Compound { children, .. } => {
            let children = children
                .iter()
                .map(|child| build_node(child, surfaces, lines))
                .collect::<Result<Vec<_>, _>>()?;
            Compound::new(children).with_transform(transform).into()
        }
    };

    Ok(node)
}

fn to_points(points: &[[f32; 3]]) -> Vec<Vec4> {
    points.iter().map(|p| Vec4::from(*p)).collect()
}

/// Error loading, saving or instantiating a scene
#[derive(Debug)]
pub enum SceneError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
    /// A node names a material missing from the tables
    UnknownMaterial(String),
    /// A node has the wrong number of points
    Geometry(GeometryError),
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl From<GeometryError> for SceneError {
    fn from(e: GeometryError) -> Self {
        SceneError::Geometry(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
            SceneError::UnknownMaterial(name) => write!(f, "Unknown material: {}", name),
            SceneError::Geometry(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
            SceneError::Serialize(e) => Some(e),
            SceneError::UnknownMaterial(_) => None,
            SceneError::Geometry(e) => Some(e),
        }
    }
}
