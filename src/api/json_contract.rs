use serde::{Deserialize, Serialize};

use crate::core::SceneChart;
use crate::error::{ChartError, ChartResult};

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: SceneChart,
}

impl SceneChart {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Accepts both a bare scene and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse scene json: {e}")))?;
        if value.get("schema_version").is_none() {
            let scene: Self = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse scene json payload: {e}"))
            })?;
            scene.validate()?;
            return Ok(scene);
        }
        let payload: SceneJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        payload.scene.validate()?;
        Ok(payload.scene)
    }
}
