pub mod bar_extraction;
pub mod chart;
pub mod classifier;
pub mod extraction;
pub mod histogram_extraction;
pub mod line_extraction;
pub mod primitives;
pub mod scatter_extraction;
pub mod table;
pub mod types;

pub use bar_extraction::{BAR_LABEL, extract_bar};
pub use chart::{ChartSource, SceneChart};
pub use classifier::{
    ClassificationRule, ClassifierConfig, DEFAULT_RULES, classify, classify_with,
    classify_with_rules,
};
pub use extraction::{extract, extract_with, has_extraction_strategy};
pub use histogram_extraction::{
    BinSource, HISTOGRAM_LABEL, densities, extract_histogram, histogram_shapes, reconstruct_bins,
    resolve_bins,
};
pub use line_extraction::extract_line;
pub use primitives::{
    BinningResult, Color, GroupedContainer, PathCollection, PointCollection, ShapeKind,
    ShapePrimitive,
};
pub use scatter_extraction::{ScatterExtractionConfig, extract_scatter, series_label};
pub use table::{Column, TidyTable};
pub use types::{AxisMetadata, DataPoint, PlotKind};
