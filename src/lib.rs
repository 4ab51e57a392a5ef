//! chart-vega-rs: turns rendered charts back into declarative specs.
//!
//! A rendered chart only exposes geometric primitives (points, paths,
//! rectangles, and their groupings). This crate infers which kind of plot those
//! primitives form, rebuilds a tidy data table from them, and synthesizes a
//! Vega-Lite document from the table.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{Conversion, Converter, ConverterConfig, convert};
pub use crate::core::{ChartSource, PlotKind, SceneChart, TidyTable, classify, extract};
pub use error::{ChartError, ChartResult};
pub use render::{DeclarativeSpec, OutputFormat, VegaLiteSynthesizer, save_spec};
