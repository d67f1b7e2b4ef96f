//! Surface and line materials
//!
//! Materials are plain values shared between many drawables through `Arc`.
//! The specular and diffuse coefficients are carried through untouched for
//! whichever renderer wants them; only colour, transparency and stroke
//! settings affect the painter output here.

use serde::{Serialize, Deserialize};

/// An 8-bit RGBA display colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert a normalized colour and transparency to 8-bit channels
    ///
    /// Channels are clamped to [0, 1] and truncated after scaling by 255,
    /// so a transparency of 0.5 gives alpha 127.
    pub fn from_normalized(color: [f32; 3], trans: f32) -> Self {
        Self {
            r: to_byte(color[0]),
            g: to_byte(color[1]),
            b: to_byte(color[2]),
            a: to_byte(1.0 - trans),
        }
    }

    /// `#rrggbbaa` hex notation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

fn to_byte(v: f32) -> u8 {
    // NaN clamps to NaN and `as` maps it to 0
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Fill properties of a surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceProp {
    /// RGB colour, each component 0.0-1.0
    pub color: [f32; 3],
    /// Specular coefficient
    pub specular: f32,
    /// Diffuse coefficient
    pub diffuse: f32,
    /// Transparency (0.0 = opaque, 1.0 = invisible)
    pub trans: f32,
}

impl Default for SurfaceProp {
    fn default() -> Self {
        Self {
            color: [0.5, 0.5, 0.5],
            specular: 0.5,
            diffuse: 0.5,
            trans: 0.0,
        }
    }
}

impl SurfaceProp {
    /// Create an opaque surface with the given colour
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            color: [r, g, b],
            ..Self::default()
        }
    }

    /// Set the transparency
    pub fn with_trans(mut self, trans: f32) -> Self {
        self.trans = trans;
        self
    }

    /// Set the specular and diffuse coefficients
    pub fn with_lighting(mut self, specular: f32, diffuse: f32) -> Self {
        self.specular = specular;
        self.diffuse = diffuse;
        self
    }

    /// Brush colour used to fill the surface
    pub fn display_color(&self) -> Rgba8 {
        Rgba8::from_normalized(self.color, self.trans)
    }
}

/// Pen style of a line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    /// No stroke at all
    NoLine,
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    /// Pattern given by an explicit dash list
    Custom,
}

impl LineStyle {
    /// Default dash/gap lengths in units of the pen width
    ///
    /// Empty for solid lines, no-line and custom patterns.
    pub fn default_pattern(&self) -> &'static [f32] {
        match self {
            LineStyle::NoLine | LineStyle::Solid | LineStyle::Custom => &[],
            LineStyle::Dash => &[4.0, 2.0],
            LineStyle::Dot => &[1.0, 2.0],
            LineStyle::DashDot => &[4.0, 2.0, 1.0, 2.0],
            LineStyle::DashDotDot => &[4.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        }
    }
}

/// Stroke properties of a line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineProp {
    /// RGB colour, each component 0.0-1.0
    pub color: [f32; 3],
    /// Specular coefficient
    pub specular: f32,
    /// Diffuse coefficient
    pub diffuse: f32,
    /// Transparency (0.0 = opaque, 1.0 = invisible)
    pub trans: f32,
    /// Line width in points (1/72 inch)
    pub width: f32,
    /// Pen style
    pub style: LineStyle,
    /// Explicit dash pattern, overriding the style's default when set
    pub dash_pattern: Option<Vec<f32>>,
}

impl Default for LineProp {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0],
            specular: 0.5,
            diffuse: 0.5,
            trans: 0.0,
            width: 1.0,
            style: LineStyle::Solid,
            dash_pattern: None,
        }
    }
}

impl LineProp {
    /// Create an opaque solid line with the given colour
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            color: [r, g, b],
            ..Self::default()
        }
    }

    /// Set the line width in points
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the pen style
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Set an explicit dash pattern
    pub fn with_dash_pattern(mut self, pattern: Vec<f32>) -> Self {
        self.dash_pattern = Some(pattern);
        self
    }

    /// Set the transparency
    pub fn with_trans(mut self, trans: f32) -> Self {
        self.trans = trans;
        self
    }

    /// Pen colour
    pub fn display_color(&self) -> Rgba8 {
        Rgba8::from_normalized(self.color, self.trans)
    }

    /// Resolve the pen for a device
    ///
    /// The width in points is converted to device units with
    /// `width * dpi * scaling / 72`. An empty explicit pattern counts as unset.
    pub fn stroke(&self, dpi: f32, scaling: f32) -> Stroke {
        let dash_pattern = self
            .dash_pattern
            .as_ref()
            .filter(|p| !p.is_empty())
            .cloned();

        Stroke {
            color: self.display_color(),
            width: self.width * dpi * scaling / 72.0,
            style: self.style,
            dash_pattern,
        }
    }
}

/// A pen resolved for a particular device
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    /// Width in device units
    pub width: f32,
    pub style: LineStyle,
    pub dash_pattern: Option<Vec<f32>>,
}

impl Stroke {
    /// Dash lengths to use: the explicit pattern, else the style's default
    pub fn effective_pattern(&self) -> &[f32] {
        match &self.dash_pattern {
            Some(pattern) => pattern.as_slice(),
            None => self.style.default_pattern(),
        }
    }
}
