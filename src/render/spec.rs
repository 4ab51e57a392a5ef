use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Synthesized declarative chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarativeSpec {
    document: Value,
}

impl DeclarativeSpec {
    #[must_use]
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.document
    }

    /// Mark type, whether written as a bare string or as `{"type": ...}`.
    #[must_use]
    pub fn mark_type(&self) -> Option<&str> {
        let mark = self.document.get("mark")?;
        mark.as_str()
            .or_else(|| mark.get("type").and_then(Value::as_str))
    }

    /// Number of inlined data records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.document
            .pointer("/data/values")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.document).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize declarative spec: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse declarative spec json: {e}"))
        })?;
        if !document.is_object() {
            return Err(ChartError::InvalidData(
                "declarative spec must be a json object".to_owned(),
            ));
        }
        Ok(Self::new(document))
    }
}
