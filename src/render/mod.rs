mod output;
mod spec;
mod vega_lite;

pub use output::{OutputFormat, save_spec, save_spec_as};
pub use spec::DeclarativeSpec;
pub use vega_lite::{SynthesisConfig, VEGA_LITE_SCHEMA_URL, VegaLiteSynthesizer};

use crate::core::{AxisMetadata, PlotKind, TidyTable};
use crate::error::ChartResult;

/// Contract implemented by any declarative-spec backend.
///
/// Backends receive a complete tidy table, the classified kind, and the axis
/// metadata, so spec generation stays isolated from chart inference.
pub trait SpecSynthesizer {
    fn synthesize(
        &self,
        table: &TidyTable,
        kind: PlotKind,
        metadata: &AxisMetadata,
    ) -> ChartResult<DeclarativeSpec>;
}
