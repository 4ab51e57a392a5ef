use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS hex form (`#rrggbb`); alpha is dropped and channels are clamped.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

/// Scatter-like marks: one offset per point, with per-point or shared styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCollection {
    pub offsets: Vec<DataPoint>,
    #[serde(default)]
    pub sizes: Vec<f64>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub label: Option<String>,
}

impl PointCollection {
    #[must_use]
    pub fn new(offsets: Vec<DataPoint>) -> Self {
        Self {
            offsets,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.sizes = sizes;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Poly-line mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCollection {
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub label: Option<String>,
}

impl PathCollection {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            label: None,
        }
    }

    /// Builds a path from parallel coordinate slices, truncating to the shorter one.
    #[must_use]
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        Self::new(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| DataPoint::new(x, y))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Polygon,
    Wedge,
    Ellipse,
}

/// Axis-aligned shape with its anchor at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapePrimitive {
    #[serde(default = "default_shape_kind")]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn default_shape_kind() -> ShapeKind {
    ShapeKind::Rectangle
}

impl ShapePrimitive {
    #[must_use]
    pub const fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn is_rectangle(self) -> bool {
        matches!(self.kind, ShapeKind::Rectangle)
    }

    #[must_use]
    pub fn right_edge(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Logical grouping of shapes (e.g. the container returned by a bar or hist call).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedContainer {
    pub label: String,
    /// Indices into the chart's shapes. For a histogram container these are
    /// the rectangles bins are rebuilt from.
    #[serde(default)]
    pub shape_indices: Vec<usize>,
}

impl GroupedContainer {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shape_indices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape_indices(mut self, shape_indices: Vec<usize>) -> Self {
        self.shape_indices = shape_indices;
        self
    }

    #[must_use]
    pub fn is_histogram_like(&self) -> bool {
        self.label.to_lowercase().contains("hist")
    }
}

/// Binning output retained by the rendering engine when a histogram was drawn.
///
/// Well-formed results hold exactly one more edge than counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinningResult {
    pub counts: Vec<f64>,
    pub edges: Vec<f64>,
}

impl BinningResult {
    #[must_use]
    pub fn new(counts: Vec<f64>, edges: Vec<f64>) -> Self {
        Self { counts, edges }
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.edges.len() >= 2 && self.edges.len() == self.counts.len() + 1
    }
}
