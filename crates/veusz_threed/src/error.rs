//! Geometry error type

use std::fmt;

/// Which kind of primitive a geometry error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Polyline,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Triangle => write!(f, "triangle"),
            ShapeKind::Polyline => write!(f, "polyline"),
        }
    }
}

/// How many points a primitive needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Exactly(usize),
    AtLeast(usize),
}

impl PointCount {
    /// Check a point count against the requirement
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            PointCount::Exactly(n) => count == n,
            PointCount::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCount::Exactly(n) => write!(f, "exactly {}", n),
            PointCount::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Error raised when a primitive gets the wrong number of points
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    InvalidGeometry {
        shape: ShapeKind,
        expected: PointCount,
        found: usize,
    },
}

impl GeometryError {
    /// Return an error unless `found` satisfies `expected`
    pub(crate) fn check(shape: ShapeKind, expected: PointCount, found: usize) -> Result<(), Self> {
        if expected.accepts(found) {
            Ok(())
        } else {
            Err(GeometryError::InvalidGeometry { shape, expected, found })
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometry { shape, expected, found } => write!(
                f,
                "Invalid geometry: {} needs {} points, got {}",
                shape, expected, found
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
