use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::chart::ChartSource;
use crate::core::primitives::Color;
use crate::core::table::TidyTable;
use crate::error::{ChartError, ChartResult};

/// Tuning for point-collection extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterExtractionConfig {
    /// Size used for collections that define no sizes at all.
    #[serde(default = "default_marker_size")]
    pub default_marker_size: f64,
    /// Adds a `color` field of `#rrggbb` strings.
    #[serde(default)]
    pub include_colors: bool,
}

impl Default for ScatterExtractionConfig {
    fn default() -> Self {
        Self {
            default_marker_size: default_marker_size(),
            include_colors: false,
        }
    }
}

impl ScatterExtractionConfig {
    #[must_use]
    pub fn with_default_marker_size(mut self, size: f64) -> Self {
        self.default_marker_size = size;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, include_colors: bool) -> Self {
        self.include_colors = include_colors;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.default_marker_size.is_finite() || self.default_marker_size < 0.0 {
            return Err(ChartError::InvalidData(
                "default marker size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_marker_size() -> f64 {
    36.0
}

const DEFAULT_POINT_COLOR: Color = Color::rgb(0.121_568_63, 0.466_666_67, 0.705_882_35);

/// Extracts `x`, `y`, `size`, `label` (and optionally `color`) with one row
/// per point, concatenated across collections in order.
pub fn extract_scatter(
    chart: &dyn ChartSource,
    config: &ScatterExtractionConfig,
) -> ChartResult<TidyTable> {
    let collections = chart.point_collections();
    let total: usize = collections.iter().map(|c| c.offsets.len()).sum();
    if total == 0 {
        return Ok(TidyTable::new());
    }

    let mut xs = Vec::with_capacity(total);
    let mut ys = Vec::with_capacity(total);
    let mut sizes = Vec::with_capacity(total);
    let mut labels = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(if config.include_colors { total } else { 0 });

    for (index, collection) in collections.iter().enumerate() {
        let count = collection.offsets.len();
        let label = series_label(collection.label.as_deref(), index);
        trace!(index, count, label = %label, "extracting point collection");

        xs.extend(collection.offsets.iter().map(|point| point.x));
        ys.extend(collection.offsets.iter().map(|point| point.y));
        sizes.extend(broadcast(&collection.sizes, count, config.default_marker_size));
        labels.extend(std::iter::repeat_n(label, count));
        if config.include_colors {
            colors.extend(
                broadcast(&collection.colors, count, DEFAULT_POINT_COLOR)
                    .into_iter()
                    .map(Color::to_hex),
            );
        }
    }

    let mut table = TidyTable::new();
    table.insert_numbers("x", xs)?;
    table.insert_numbers("y", ys)?;
    table.insert_numbers("size", sizes)?;
    table.insert_texts("label", labels)?;
    if config.include_colors {
        table.insert_texts("color", colors)?;
    }
    Ok(table)
}

/// Label of the `index`-th collection, or `series_<index>` when unset or empty.
#[must_use]
pub fn series_label(label: Option<&str>, index: usize) -> String {
    match label {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => format!("series_{index}"),
    }
}

/// Stretches per-collection styling to `count` rows: a single value is
/// repeated, shorter lists cycle, and an empty list falls back to `fallback`.
fn broadcast<T: Copy>(values: &[T], count: usize, fallback: T) -> Vec<T> {
    if values.is_empty() {
        return vec![fallback; count];
    }
    values.iter().copied().cycle().take(count).collect()
}
