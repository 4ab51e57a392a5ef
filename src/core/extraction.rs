use tracing::debug;

use crate::core::bar_extraction::extract_bar;
use crate::core::chart::ChartSource;
use crate::core::histogram_extraction::extract_histogram;
use crate::core::line_extraction::extract_line;
use crate::core::scatter_extraction::{ScatterExtractionConfig, extract_scatter};
use crate::core::table::TidyTable;
use crate::core::types::PlotKind;
use crate::error::ChartResult;

/// Whether `kind` has an extraction strategy.
#[must_use]
pub const fn has_extraction_strategy(kind: PlotKind) -> bool {
    kind.is_known()
}

/// Extracts the tidy table for `kind` with default scatter settings.
///
/// Absent or empty source collections yield an empty table, as does
/// `PlotKind::Unknown`; deciding whether that is fatal is up to the caller.
pub fn extract(chart: &dyn ChartSource, kind: PlotKind) -> ChartResult<TidyTable> {
    extract_with(chart, kind, &ScatterExtractionConfig::default())
}

pub fn extract_with(
    chart: &dyn ChartSource,
    kind: PlotKind,
    scatter: &ScatterExtractionConfig,
) -> ChartResult<TidyTable> {
    let table = match kind {
        PlotKind::Scatter => extract_scatter(chart, scatter)?,
        PlotKind::Line => extract_line(chart)?,
        PlotKind::Bar => extract_bar(chart)?,
        PlotKind::Histogram => extract_histogram(chart)?,
        PlotKind::Unknown => TidyTable::new(),
    };
    debug!(
        %kind,
        rows = table.row_count(),
        fields = table.field_count(),
        "extraction finished"
    );
    Ok(table)
}
