use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::{AxisMetadata, PlotKind, TidyTable};
use crate::error::{ChartError, ChartResult};
use crate::render::{DeclarativeSpec, SpecSynthesizer};

pub const VEGA_LITE_SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Presentation defaults applied where the chart metadata is silent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_histogram_width")]
    pub histogram_width: u32,
    #[serde(default = "default_histogram_height")]
    pub histogram_height: u32,
    #[serde(default = "default_x_title")]
    pub x_title: String,
    #[serde(default = "default_y_title")]
    pub y_title: String,
    #[serde(default = "default_histogram_x_title")]
    pub histogram_x_title: String,
    #[serde(default = "default_histogram_y_title")]
    pub histogram_y_title: String,
    #[serde(default = "default_histogram_title")]
    pub histogram_title: String,
    #[serde(default = "default_histogram_max_ticks")]
    pub histogram_max_ticks: usize,
    #[serde(default = "default_histogram_opacity")]
    pub histogram_opacity: f64,
    /// Constant mark size for scatter tables without a `size` field.
    #[serde(default = "default_scatter_size")]
    pub scatter_size: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            histogram_width: default_histogram_width(),
            histogram_height: default_histogram_height(),
            x_title: default_x_title(),
            y_title: default_y_title(),
            histogram_x_title: default_histogram_x_title(),
            histogram_y_title: default_histogram_y_title(),
            histogram_title: default_histogram_title(),
            histogram_max_ticks: default_histogram_max_ticks(),
            histogram_opacity: default_histogram_opacity(),
            scatter_size: default_scatter_size(),
        }
    }
}

impl SynthesisConfig {
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_histogram_size(mut self, width: u32, height: u32) -> Self {
        self.histogram_width = width;
        self.histogram_height = height;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidData(format!(
                "spec size must be > 0: width={}, height={}",
                self.width, self.height
            )));
        }
        if self.histogram_width == 0 || self.histogram_height == 0 {
            return Err(ChartError::InvalidData(format!(
                "histogram spec size must be > 0: width={}, height={}",
                self.histogram_width, self.histogram_height
            )));
        }
        if !self.histogram_opacity.is_finite() || !(0.0..=1.0).contains(&self.histogram_opacity)
        {
            return Err(ChartError::InvalidData(
                "histogram opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.scatter_size.is_finite() || self.scatter_size < 0.0 {
            return Err(ChartError::InvalidData(
                "scatter size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    300
}

fn default_histogram_width() -> u32 {
    600
}

fn default_histogram_height() -> u32 {
    400
}

fn default_x_title() -> String {
    "X".to_owned()
}

fn default_y_title() -> String {
    "Y".to_owned()
}

fn default_histogram_x_title() -> String {
    "Values".to_owned()
}

fn default_histogram_y_title() -> String {
    "Frequency".to_owned()
}

fn default_histogram_title() -> String {
    "Histogram".to_owned()
}

fn default_histogram_max_ticks() -> usize {
    20
}

fn default_histogram_opacity() -> f64 {
    0.7
}

fn default_scatter_size() -> f64 {
    40.0
}

/// Builds Vega-Lite v5 documents with the table inlined as `data.values`.
#[derive(Debug, Clone, Default)]
pub struct VegaLiteSynthesizer {
    config: SynthesisConfig,
}

impl VegaLiteSynthesizer {
    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    fn scatter(&self, table: &TidyTable, metadata: &AxisMetadata) -> ChartResult<Value> {
        require_fields(table, PlotKind::Scatter, &["x", "y", "label"])?;
        let size = if table.contains_field("size") {
            json!({"field": "size", "type": "quantitative"})
        } else {
            json!({"value": self.config.scatter_size})
        };
        let encoding = json!({
            "x": self.quantitative("x", &metadata.x_label, &self.config.x_title),
            "y": self.quantitative("y", &metadata.y_label, &self.config.y_title),
            "size": size,
            "color": {"field": "label", "type": "nominal"},
        });
        Ok(self.document(table, json!("circle"), encoding, &metadata.title, None))
    }

    fn line(&self, table: &TidyTable, metadata: &AxisMetadata) -> ChartResult<Value> {
        require_fields(table, PlotKind::Line, &["x", "y", "label"])?;
        let encoding = json!({
            "x": self.quantitative("x", &metadata.x_label, &self.config.x_title),
            "y": self.quantitative("y", &metadata.y_label, &self.config.y_title),
            "color": {"field": "label", "type": "nominal"},
        });
        Ok(self.document(table, json!("line"), encoding, &metadata.title, None))
    }

    fn bar(&self, table: &TidyTable, metadata: &AxisMetadata) -> ChartResult<Value> {
        require_fields(table, PlotKind::Bar, &["x", "y", "label"])?;
        let encoding = json!({
            "x": self.quantitative("x", &metadata.x_label, &self.config.x_title),
            "y": self.quantitative("y", &metadata.y_label, &self.config.y_title),
            "color": {"field": "label", "type": "nominal"},
        });
        Ok(self.document(table, json!("bar"), encoding, &metadata.title, None))
    }

    fn histogram(&self, table: &TidyTable, metadata: &AxisMetadata) -> ChartResult<Value> {
        require_fields(
            table,
            PlotKind::Histogram,
            &["x", "y", "bin_start", "bin_end", "count"],
        )?;
        let mut x = self.quantitative("x", &metadata.x_label, &self.config.histogram_x_title);
        if let (Some(min), Some(max)) = (table.min_of("bin_start"), table.max_of("bin_end")) {
            x["scale"] = json!({"domain": [min, max]});
        }
        x["axis"] = json!({
            "tickCount": self.config.histogram_max_ticks.min(table.row_count()),
        });

        let mark = json!({
            "type": "bar",
            "tooltip": true,
            "opacity": self.config.histogram_opacity,
            "stroke": "black",
            "strokeWidth": 0.5,
        });
        let encoding = json!({
            "x": x,
            "y": self.quantitative("y", &metadata.y_label, &self.config.histogram_y_title),
            "tooltip": [
                {"field": "bin_start", "type": "quantitative", "title": "Start", "format": ".2f"},
                {"field": "bin_end", "type": "quantitative", "title": "End", "format": ".2f"},
                {"field": "count", "type": "quantitative", "title": "Frequency"},
            ],
        });
        let title = non_empty_or(&metadata.title, &self.config.histogram_title);
        Ok(self.document(
            table,
            mark,
            encoding,
            title,
            Some((self.config.histogram_width, self.config.histogram_height)),
        ))
    }

    fn quantitative(&self, field: &str, label: &str, fallback: &str) -> Value {
        json!({
            "field": field,
            "type": "quantitative",
            "title": non_empty_or(label, fallback),
        })
    }

    fn document(
        &self,
        table: &TidyTable,
        mark: Value,
        encoding: Value,
        title: &str,
        size: Option<(u32, u32)>,
    ) -> Value {
        let (width, height) = size.unwrap_or((self.config.width, self.config.height));
        let mut document = Map::new();
        document.insert("$schema".to_owned(), json!(VEGA_LITE_SCHEMA_URL));
        if !title.is_empty() {
            document.insert("title".to_owned(), json!(title));
        }
        document.insert("width".to_owned(), json!(width));
        document.insert("height".to_owned(), json!(height));
        document.insert("data".to_owned(), json!({"values": table.to_records()}));
        document.insert("mark".to_owned(), mark);
        document.insert("encoding".to_owned(), encoding);
        Value::Object(document)
    }
}

impl SpecSynthesizer for VegaLiteSynthesizer {
    fn synthesize(
        &self,
        table: &TidyTable,
        kind: PlotKind,
        metadata: &AxisMetadata,
    ) -> ChartResult<DeclarativeSpec> {
        let document = match kind {
            PlotKind::Scatter => self.scatter(table, metadata)?,
            PlotKind::Line => self.line(table, metadata)?,
            PlotKind::Bar => self.bar(table, metadata)?,
            PlotKind::Histogram => self.histogram(table, metadata)?,
            PlotKind::Unknown => return Err(ChartError::UnsupportedKind { kind }),
        };
        Ok(DeclarativeSpec::new(document))
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn require_fields(table: &TidyTable, kind: PlotKind, fields: &[&str]) -> ChartResult<()> {
    match fields.iter().find(|field| !table.contains_field(field)) {
        Some(missing) => Err(ChartError::InvalidData(format!(
            "{kind} table is missing field `{missing}`"
        ))),
        None => Ok(()),
    }
}
