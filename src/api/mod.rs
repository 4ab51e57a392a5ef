mod converter;
mod converter_config;
mod json_contract;

pub use converter::{Conversion, Converter, CurrentChartProvider, convert};
pub use converter_config::ConverterConfig;
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
