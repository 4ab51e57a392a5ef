use serde::{Deserialize, Serialize};

use crate::core::{ClassifierConfig, ScatterExtractionConfig};
use crate::error::{ChartError, ChartResult};
use crate::render::SynthesisConfig;

/// Public converter configuration.
///
/// This type is serializable so host applications can persist/load conversion
/// settings without inventing their own ad-hoc format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub scatter: ScatterExtractionConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl ConverterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets histogram geometry gates.
    #[must_use]
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Sets point-collection extraction tuning.
    #[must_use]
    pub fn with_scatter(mut self, scatter: ScatterExtractionConfig) -> Self {
        self.scatter = scatter;
        self
    }

    /// Sets spec presentation defaults.
    #[must_use]
    pub fn with_synthesis(mut self, synthesis: SynthesisConfig) -> Self {
        self.synthesis = synthesis;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.classifier.validate()?;
        self.scatter.validate()?;
        self.synthesis.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize converter config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse converter config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
