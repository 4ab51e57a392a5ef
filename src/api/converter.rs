use tracing::{info, warn};

use crate::core::{
    AxisMetadata, ChartSource, PlotKind, TidyTable, classify_with, extract_with,
    has_extraction_strategy,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DeclarativeSpec, SpecSynthesizer, VegaLiteSynthesizer};

use super::ConverterConfig;

/// Supplies the chart to use when a caller passes none, typically the
/// rendering engine's most recently active chart.
pub trait CurrentChartProvider {
    fn current_chart(&self) -> Option<&dyn ChartSource>;
}

/// Result of one successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub table: TidyTable,
    pub kind: PlotKind,
    pub metadata: AxisMetadata,
}

/// Classify, extract, and hand off to a spec synthesizer.
#[derive(Debug, Clone)]
pub struct Converter<S: SpecSynthesizer = VegaLiteSynthesizer> {
    config: ConverterConfig,
    synthesizer: S,
}

impl Converter<VegaLiteSynthesizer> {
    pub fn new(config: ConverterConfig) -> ChartResult<Self> {
        config.validate()?;
        let synthesizer = VegaLiteSynthesizer::new(config.synthesis.clone());
        Ok(Self {
            config,
            synthesizer,
        })
    }
}

impl Default for Converter<VegaLiteSynthesizer> {
    fn default() -> Self {
        let config = ConverterConfig::default();
        Self {
            synthesizer: VegaLiteSynthesizer::new(config.synthesis.clone()),
            config,
        }
    }
}

impl<S: SpecSynthesizer> Converter<S> {
    pub fn with_synthesizer(config: ConverterConfig, synthesizer: S) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            synthesizer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    #[must_use]
    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Classifies `chart` and extracts its tidy table.
    ///
    /// Fails with `UnsupportedKind` when no kind is recognized and with
    /// `NoDataExtracted` when a recognized kind yields no rows.
    pub fn convert(&self, chart: &dyn ChartSource) -> ChartResult<Conversion> {
        let kind = classify_with(chart, &self.config.classifier);
        info!(%kind, "detected plot kind");
        if !has_extraction_strategy(kind) {
            warn!(%kind, "no extraction strategy for plot kind");
            return Err(ChartError::UnsupportedKind { kind });
        }

        let table = extract_with(chart, kind, &self.config.scatter)?;
        if table.is_empty() {
            warn!(%kind, "recognized plot kind produced no data");
            return Err(ChartError::NoDataExtracted { kind });
        }

        Ok(Conversion {
            table,
            kind,
            metadata: chart.metadata(),
        })
    }

    /// Converts `explicit` when given, otherwise the provider's current chart.
    pub fn convert_or_current(
        &self,
        explicit: Option<&dyn ChartSource>,
        provider: &dyn CurrentChartProvider,
    ) -> ChartResult<Conversion> {
        let chart = explicit
            .or_else(|| provider.current_chart())
            .ok_or(ChartError::MissingChart)?;
        self.convert(chart)
    }

    pub fn synthesize(&self, conversion: &Conversion) -> ChartResult<DeclarativeSpec> {
        self.synthesizer
            .synthesize(&conversion.table, conversion.kind, &conversion.metadata)
    }

    /// `convert` followed by `synthesize`.
    pub fn to_spec(&self, chart: &dyn ChartSource) -> ChartResult<DeclarativeSpec> {
        let conversion = self.convert(chart)?;
        self.synthesize(&conversion)
    }
}

/// Converts with the default configuration.
pub fn convert(chart: &dyn ChartSource) -> ChartResult<Conversion> {
    Converter::<VegaLiteSynthesizer>::default().convert(chart)
}
