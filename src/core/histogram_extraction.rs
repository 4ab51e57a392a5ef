use tracing::{debug, warn};

use crate::core::chart::ChartSource;
use crate::core::primitives::{BinningResult, ShapePrimitive};
use crate::core::table::TidyTable;
use crate::error::ChartResult;

pub const HISTOGRAM_LABEL: &str = "histogram";

/// Gap between neighbouring rectangles above which reconstruction is reported
/// as inconsistent.
const CONTIGUITY_TOLERANCE: f64 = 1e-5;

/// Where histogram bins were recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinSource {
    RetainedBinning,
    Rectangles,
}

/// Extracts `bin_start`, `bin_end`, `bin_width`, `x`, `y`, `count`,
/// `density`, `label`.
///
/// The engine's retained binning result is preferred; otherwise bins are
/// rebuilt from the rectangles. Fewer than two edges yields an empty table.
pub fn extract_histogram(chart: &dyn ChartSource) -> ChartResult<TidyTable> {
    let Some((bins, source)) = resolve_bins(chart) else {
        return Ok(TidyTable::new());
    };
    debug!(?source, bins = bins.counts.len(), "histogram bins resolved");
    histogram_table(&bins)
}

/// Picks the bins a histogram table is built from, or `None` when neither
/// source yields at least two edges.
pub fn resolve_bins(chart: &dyn ChartSource) -> Option<(BinningResult, BinSource)> {
    if let Some(retained) = chart.retained_binning() {
        if retained.is_well_formed() {
            return Some((retained.clone(), BinSource::RetainedBinning));
        }
        warn!(
            counts = retained.counts.len(),
            edges = retained.edges.len(),
            "retained binning result is malformed; rebuilding bins from rectangles"
        );
    }

    let rebuilt = reconstruct_bins(&histogram_shapes(chart));
    rebuilt
        .is_well_formed()
        .then_some((rebuilt, BinSource::Rectangles))
}

/// Shapes owned by the first histogram-labelled container that lists any,
/// otherwise every shape on the chart. Out-of-range indices are skipped.
#[must_use]
pub fn histogram_shapes(chart: &dyn ChartSource) -> Vec<ShapePrimitive> {
    let shapes = chart.shapes();
    let Some(container) = chart
        .grouped_containers()
        .iter()
        .find(|container| container.is_histogram_like() && !container.shape_indices.is_empty())
    else {
        return shapes.to_vec();
    };

    let selected: Vec<ShapePrimitive> = container
        .shape_indices
        .iter()
        .filter_map(|&index| shapes.get(index).copied())
        .collect();
    if selected.len() != container.shape_indices.len() {
        warn!(
            listed = container.shape_indices.len(),
            found = selected.len(),
            "histogram container references missing shapes"
        );
    }
    selected
}

/// Rebuilds bin edges and counts from rectangles.
///
/// Rectangles are sorted by x; each contributes its left edge and its height
/// as the count, and the last one also contributes its right edge. Gaps or
/// overlaps are not repaired, only reported.
#[must_use]
pub fn reconstruct_bins(shapes: &[ShapePrimitive]) -> BinningResult {
    let mut sorted = shapes.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut edges = Vec::with_capacity(sorted.len() + 1);
    let mut counts = Vec::with_capacity(sorted.len());
    for shape in &sorted {
        edges.push(shape.x);
        counts.push(shape.height);
    }
    if let Some(last) = sorted.last() {
        edges.push(last.right_edge());
    }

    let misaligned = sorted
        .windows(2)
        .filter(|pair| (pair[1].x - pair[0].right_edge()).abs() >= CONTIGUITY_TOLERANCE)
        .count();
    if misaligned > 0 {
        warn!(
            misaligned,
            rectangles = sorted.len(),
            "histogram rectangles are not contiguous; reconstructed bin edges may be inconsistent"
        );
    }

    BinningResult::new(counts, edges)
}

/// Share of the total per bin; all zeros when the total is zero.
#[must_use]
pub fn densities(counts: &[f64]) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|count| count / total).collect()
}

fn histogram_table(bins: &BinningResult) -> ChartResult<TidyTable> {
    let edges = &bins.edges;
    let starts = edges[..edges.len() - 1].to_vec();
    let ends = edges[1..].to_vec();
    let widths = edges.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let centers = edges.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0).collect();

    let mut table = TidyTable::new();
    table.insert_numbers("bin_start", starts)?;
    table.insert_numbers("bin_end", ends)?;
    table.insert_numbers("bin_width", widths)?;
    table.insert_numbers("x", centers)?;
    table.insert_numbers("y", bins.counts.clone())?;
    table.insert_numbers("count", bins.counts.clone())?;
    table.insert_numbers("density", densities(&bins.counts))?;
    table.insert_constant_text("label", HISTOGRAM_LABEL)?;
    Ok(table)
}
