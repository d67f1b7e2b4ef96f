//! Scene validation
//!
//! [`SceneValidator`] checks a [`SceneFile`] for problems before it is
//! instantiated. Unlike [`SceneFile::instantiate`], which stops at the first
//! failure, it reports everything it finds: missing or unused materials,
//! wrong point counts, out-of-range colours and non-finite transforms.

use std::collections::BTreeSet;

use crate::error::{PointCount, ShapeKind};
use crate::material::LineProp;
use crate::scene::{compose_ops, NodeTemplate, SceneFile};
use veusz_math::mat4;

/// Validation error found in a scene file
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has nothing to draw
    EmptyScene,
    /// A node references a material that is not defined
    MissingMaterial(String),
    /// A material is defined but never referenced
    UnusedMaterial(String),
    /// A primitive has the wrong number of points
    BadPointCount {
        shape: ShapeKind,
        expected: PointCount,
        found: usize,
    },
    /// A colour component lies outside [0, 1]
    ColorOutOfRange(String),
    /// Transparency lies outside [0, 1]
    TransparencyOutOfRange(String),
    /// Line width is zero, negative or not finite
    BadLineWidth(String),
    /// Dash pattern has a negative or non-finite entry
    BadDashPattern(String),
    /// A node transform contains NaN or infinity
    NonFiniteTransform,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has nothing to draw"),
            ValidationError::MissingMaterial(name) => {
                write!(f, "Material '{}' is not defined", name)
            }
            ValidationError::UnusedMaterial(name) => {
                write!(f, "Material '{}' is never used", name)
            }
            ValidationError::BadPointCount { shape, expected, found } => {
                write!(f, "A {} needs {} points, got {}", shape, expected, found)
            }
            ValidationError::ColorOutOfRange(name) => {
                write!(f, "Material '{}' has a colour component outside [0, 1]", name)
            }
            ValidationError::TransparencyOutOfRange(name) => {
                write!(f, "Material '{}' has transparency outside [0, 1]", name)
            }
            ValidationError::BadLineWidth(name) => {
                write!(f, "Line '{}' has a non-positive width", name)
            }
            ValidationError::BadDashPattern(name) => {
                write!(f, "Line '{}' has an invalid dash pattern", name)
            }
            ValidationError::NonFiniteTransform => write!(f, "A node transform is not finite"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&file);
/// for error in &errors {
///     log::warn!("Scene problem: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene file, returning all errors found
    pub fn validate(file: &SceneFile) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut used_surfaces = BTreeSet::new();
        let mut used_lines = BTreeSet::new();
        let mut leaves = 0usize;

        file.root.visit(&mut |node| {
            if !mat4::is_finite(&compose_ops(node.transform_ops())) {
                errors.push(ValidationError::NonFiniteTransform);
            }

            match node {
                NodeTemplate::Triangle { points, surface, .. } => {
                    leaves += 1;
                    check_points(&mut errors, ShapeKind::Triangle, PointCount::Exactly(3), points.len());
                    used_surfaces.insert(surface.as_str());
                    if !file.surfaces.contains_key(surface) {
                        errors.push(ValidationError::MissingMaterial(surface.clone()));
                    }
                }
                NodeTemplate::Polyline { points, line, .. } => {
                    leaves += 1;
                    check_points(&mut errors, ShapeKind::Polyline, PointCount::AtLeast(2), points.len());
                    used_lines.insert(line.as_str());
                    if !file.lines.contains_key(line) {
                        errors.push(ValidationError::MissingMaterial(line.clone()));
                    }
                }
                NodeTemplate::Empty { .. } | NodeTemplate::Compound { .. } => {}
            }
        });

        if leaves == 0 {
            errors.push(ValidationError::EmptyScene);
        }

        for (name, surface) in &file.surfaces {
            if !used_surfaces.contains(name.as_str()) {
                errors.push(ValidationError::UnusedMaterial(name.clone()));
            }
            check_color(&mut errors, name, surface.color, surface.trans);
        }

        for (name, line) in &file.lines {
            if !used_lines.contains(name.as_str()) {
                errors.push(ValidationError::UnusedMaterial(name.clone()));
            }
            check_color(&mut errors, name, line.color, line.trans);
            check_line(&mut errors, name, line);
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(file: &SceneFile) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(file);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_points(errors: &mut Vec<ValidationError>, shape: ShapeKind, expected: PointCount, found: usize) {
    if !expected.accepts(found) {
        errors.push(ValidationError::BadPointCount { shape, expected, found });
    }
}

fn unit_range(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

fn check_color(errors: &mut Vec<ValidationError>, name: &str, color: [f32; 3], trans: f32) {
    if !color.iter().all(|c| unit_range(*c)) {
        errors.push(ValidationError::ColorOutOfRange(name.to_string()));
    }
    if !unit_range(trans) {
        errors.push(ValidationError::TransparencyOutOfRange(name.to_string()));
    }
}

fn check_line(errors: &mut Vec<ValidationError>, name: &str, line: &LineProp) {
    if !(line.width.is_finite() && line.width > 0.0) {
        errors.push(ValidationError::BadLineWidth(name.to_string()));
    }
    if let Some(pattern) = &line.dash_pattern {
        if pattern.iter().any(|d| !d.is_finite() || *d < 0.0) {
            errors.push(ValidationError::BadDashPattern(name.to_string()));
        }
    }
}
