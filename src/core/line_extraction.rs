use tracing::trace;

use crate::core::chart::ChartSource;
use crate::core::scatter_extraction::series_label;
use crate::core::table::TidyTable;
use crate::error::ChartResult;

/// Extracts `x`, `y`, `label` with one row per path vertex, concatenated
/// across paths in order.
pub fn extract_line(chart: &dyn ChartSource) -> ChartResult<TidyTable> {
    let paths = chart.path_collections();
    let total: usize = paths.iter().map(|path| path.points.len()).sum();
    if total == 0 {
        return Ok(TidyTable::new());
    }

    let mut xs = Vec::with_capacity(total);
    let mut ys = Vec::with_capacity(total);
    let mut labels = Vec::with_capacity(total);
    for (index, path) in paths.iter().enumerate() {
        let label = series_label(path.label.as_deref(), index);
        trace!(index, vertices = path.points.len(), label = %label, "extracting path");
        xs.extend(path.points.iter().map(|point| point.x));
        ys.extend(path.points.iter().map(|point| point.y));
        labels.extend(std::iter::repeat_n(label, path.points.len()));
    }

    let mut table = TidyTable::new();
    table.insert_numbers("x", xs)?;
    table.insert_numbers("y", ys)?;
    table.insert_texts("label", labels)?;
    Ok(table)
}
