//! Display-list painter
//!
//! [`RecordingPainter`] implements [`Painter`] by storing every call as a
//! [`PaintCommand`]. The resulting [`DisplayList`] can be saved as RON and
//! replayed by any other backend.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use veusz_math::Point2;
use veusz_threed::{Painter, Rgba8, Stroke};

/// A single recorded painter call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    SetBrush(Option<Rgba8>),
    SetPen(Option<Stroke>),
    Polygon(Vec<Point2>),
    Polyline(Vec<Point2>),
}

/// Painter that records its calls
#[derive(Clone, Debug)]
pub struct RecordingPainter {
    dpi: f32,
    scaling: f32,
    commands: Vec<PaintCommand>,
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new(96.0)
    }
}

impl RecordingPainter {
    /// Create a painter for a device with the given resolution
    pub fn new(dpi: f32) -> Self {
        Self {
            dpi,
            scaling: 1.0,
            commands: Vec::new(),
        }
    }

    /// Set the extra scale factor
    pub fn with_scaling(mut self, scaling: f32) -> Self {
        self.scaling = scaling;
        self
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Package the recording with the device size
    pub fn into_display_list(self, width: f32, height: f32) -> DisplayList {
        DisplayList {
            width,
            height,
            dpi: self.dpi,
            commands: self.commands,
        }
    }
}

impl Painter for RecordingPainter {
    fn dpi(&self) -> f32 {
        self.dpi
    }

    fn scaling(&self) -> f32 {
        self.scaling
    }

    fn set_brush(&mut self, brush: Option<Rgba8>) {
        self.commands.push(PaintCommand::SetBrush(brush));
    }

    fn set_pen(&mut self, pen: Option<Stroke>) {
        self.commands.push(PaintCommand::SetPen(pen));
    }

    fn draw_polygon(&mut self, points: &[Point2]) {
        self.commands.push(PaintCommand::Polygon(points.to_vec()));
    }

    fn draw_polyline(&mut self, points: &[Point2]) {
        self.commands.push(PaintCommand::Polyline(points.to_vec()));
    }
}

/// Recorded painter output for one device
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub width: f32,
    pub height: f32,
    pub dpi: f32,
    pub commands: Vec<PaintCommand>,
}

impl DisplayList {
    /// Number of filled polygons
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Polygon(_)))
            .count()
    }

    /// Number of stroked polylines
    pub fn polyline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Polyline(_)))
            .count()
    }

    /// Replay the commands onto another painter
    pub fn replay(&self, painter: &mut dyn Painter) {
        for command in &self.commands {
            match command {
                PaintCommand::SetBrush(brush) => painter.set_brush(*brush),
                PaintCommand::SetPen(pen) => painter.set_pen(pen.clone()),
                PaintCommand::Polygon(points) => painter.draw_polygon(points),
                PaintCommand::Polyline(points) => painter.draw_polyline(points),
            }
        }
    }

    /// Serialize to pretty RON text
    pub fn to_ron(&self) -> Result<String, DisplayListError> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save as a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DisplayListError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

/// Error saving a display list
#[derive(Debug)]
pub enum DisplayListError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for DisplayListError {
    fn from(e: io::Error) -> Self {
        DisplayListError::Io(e)
    }
}

impl From<ron::Error> for DisplayListError {
    fn from(e: ron::Error) -> Self {
        DisplayListError::Serialize(e)
    }
}

impl std::fmt::Display for DisplayListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayListError::Io(e) => write!(f, "IO error: {}", e),
            DisplayListError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for DisplayListError {}
