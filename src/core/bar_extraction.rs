use crate::core::chart::ChartSource;
use crate::core::table::TidyTable;
use crate::error::ChartResult;

pub const BAR_LABEL: &str = "bars";

/// Extracts `x` (bar center), `y` (height), `width`, `height`, `label` with
/// one row per shape in drawing order.
pub fn extract_bar(chart: &dyn ChartSource) -> ChartResult<TidyTable> {
    let shapes = chart.shapes();
    if shapes.is_empty() {
        return Ok(TidyTable::new());
    }

    let mut table = TidyTable::new();
    table.insert_numbers("x", shapes.iter().map(|shape| shape.center_x()).collect())?;
    table.insert_numbers("y", shapes.iter().map(|shape| shape.height).collect())?;
    table.insert_numbers("width", shapes.iter().map(|shape| shape.width).collect())?;
    table.insert_numbers("height", shapes.iter().map(|shape| shape.height).collect())?;
    table.insert_constant_text("label", BAR_LABEL)?;
    Ok(table)
}
