use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::chart::ChartSource;
use crate::core::types::PlotKind;
use crate::error::{ChartError, ChartResult};

/// Geometry gates used to tell a histogram apart from a bar chart when both
/// are drawn as plain rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Histograms need strictly more rectangles than this.
    #[serde(default = "default_min_rectangles_exclusive")]
    pub min_rectangles_exclusive: usize,
    #[serde(default = "default_max_distinct_widths")]
    pub max_distinct_widths: usize,
    /// Decimal places widths are rounded to before counting distinct values.
    #[serde(default = "default_width_decimals")]
    pub width_decimals: i32,
    #[serde(default = "default_adjacency_tolerance")]
    pub adjacency_tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_rectangles_exclusive: default_min_rectangles_exclusive(),
            max_distinct_widths: default_max_distinct_widths(),
            width_decimals: default_width_decimals(),
            adjacency_tolerance: default_adjacency_tolerance(),
        }
    }
}

impl ClassifierConfig {
    #[must_use]
    pub fn with_min_rectangles_exclusive(mut self, count: usize) -> Self {
        self.min_rectangles_exclusive = count;
        self
    }

    #[must_use]
    pub fn with_max_distinct_widths(mut self, count: usize) -> Self {
        self.max_distinct_widths = count;
        self
    }

    #[must_use]
    pub fn with_adjacency_tolerance(mut self, tolerance: f64) -> Self {
        self.adjacency_tolerance = tolerance;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.adjacency_tolerance.is_finite() || self.adjacency_tolerance < 0.0 {
            return Err(ChartError::InvalidData(
                "adjacency tolerance must be finite and >= 0".to_owned(),
            ));
        }
        if !(0..=15).contains(&self.width_decimals) {
            return Err(ChartError::InvalidData(
                "width decimals must be in [0, 15]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_min_rectangles_exclusive() -> usize {
    5
}

fn default_max_distinct_widths() -> usize {
    3
}

fn default_width_decimals() -> i32 {
    5
}

fn default_adjacency_tolerance() -> f64 {
    1e-5
}

pub type RulePredicate = fn(&dyn ChartSource, &ClassifierConfig) -> bool;

/// One predicate/result pair of the ordered classification list.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub kind: PlotKind,
    pub predicate: RulePredicate,
}

impl ClassificationRule {
    #[must_use]
    pub fn matches(&self, chart: &dyn ChartSource, config: &ClassifierConfig) -> bool {
        (self.predicate)(chart, config)
    }
}

/// Rules in evaluation order; the first match wins.
///
/// Grouping and retained-binning signals come first, then collection type,
/// then rectangle geometry. Rectangles that fail any histogram gate land on
/// the bar rule right after it.
pub const DEFAULT_RULES: [ClassificationRule; 6] = [
    ClassificationRule {
        name: "histogram_container",
        kind: PlotKind::Histogram,
        predicate: has_histogram_container,
    },
    ClassificationRule {
        name: "retained_binning",
        kind: PlotKind::Histogram,
        predicate: has_retained_binning,
    },
    ClassificationRule {
        name: "point_collections",
        kind: PlotKind::Scatter,
        predicate: has_point_collections,
    },
    ClassificationRule {
        name: "path_collections",
        kind: PlotKind::Line,
        predicate: has_path_collections,
    },
    ClassificationRule {
        name: "contiguous_uniform_rectangles",
        kind: PlotKind::Histogram,
        predicate: is_histogram_geometry,
    },
    ClassificationRule {
        name: "rectangles",
        kind: PlotKind::Bar,
        predicate: has_only_rectangles,
    },
];

/// Classifies with the default rules and gates.
#[must_use]
pub fn classify(chart: &dyn ChartSource) -> PlotKind {
    classify_with(chart, &ClassifierConfig::default())
}

#[must_use]
pub fn classify_with(chart: &dyn ChartSource, config: &ClassifierConfig) -> PlotKind {
    classify_with_rules(chart, config, &DEFAULT_RULES)
}

/// Evaluates `rules` in order and returns the kind of the first match, or
/// `Unknown` when none matches.
#[must_use]
pub fn classify_with_rules(
    chart: &dyn ChartSource,
    config: &ClassifierConfig,
    rules: &[ClassificationRule],
) -> PlotKind {
    match rules.iter().find(|rule| rule.matches(chart, config)) {
        Some(rule) => {
            debug!(rule = rule.name, kind = %rule.kind, "chart classified");
            rule.kind
        }
        None => {
            debug!("no classification rule matched");
            PlotKind::Unknown
        }
    }
}

pub fn has_histogram_container(chart: &dyn ChartSource, _config: &ClassifierConfig) -> bool {
    chart.has_histogram_container()
}

pub fn has_retained_binning(chart: &dyn ChartSource, _config: &ClassifierConfig) -> bool {
    chart.has_retained_binning()
}

pub fn has_point_collections(chart: &dyn ChartSource, _config: &ClassifierConfig) -> bool {
    chart.has_point_collections()
}

pub fn has_path_collections(chart: &dyn ChartSource, _config: &ClassifierConfig) -> bool {
    chart.has_path_collections()
}

pub fn has_only_rectangles(chart: &dyn ChartSource, _config: &ClassifierConfig) -> bool {
    chart.has_shapes() && chart.all_shapes_rectangles()
}

/// Rectangle-only charts with enough rectangles, few distinct widths, and
/// each rectangle touching the next one once sorted by x.
pub fn is_histogram_geometry(chart: &dyn ChartSource, config: &ClassifierConfig) -> bool {
    if !has_only_rectangles(chart, config) {
        return false;
    }
    let widths = chart.shape_widths();
    if widths.len() <= config.min_rectangles_exclusive {
        return false;
    }
    if distinct_rounded_widths(&widths, config.width_decimals) > config.max_distinct_widths {
        return false;
    }
    rectangles_are_contiguous(chart, config.adjacency_tolerance)
}

/// Number of distinct widths after rounding to `decimals` places.
#[must_use]
pub fn distinct_rounded_widths(widths: &[f64], decimals: i32) -> usize {
    let scale = 10f64.powi(decimals);
    widths
        .iter()
        .map(|width| OrderedFloat((width * scale).round() / scale))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Sorted by x, every right edge must meet the next left edge within `tolerance`.
#[must_use]
pub fn rectangles_are_contiguous(chart: &dyn ChartSource, tolerance: f64) -> bool {
    let mut spans: Vec<(f64, f64)> = chart
        .shapes()
        .iter()
        .map(|shape| (shape.x, shape.right_edge()))
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    spans
        .windows(2)
        .all(|pair| (pair[1].0 - pair[0].1).abs() < tolerance)
}
